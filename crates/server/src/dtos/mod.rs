pub mod course;
pub mod department;
pub mod enrollment;
pub mod professor;
pub mod student;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query string for the substring-search endpoints (`?name=...`).
#[derive(Debug, Deserialize, IntoParams)]
pub struct NameQuery {
    pub name: String,
}
