use database::entities::professors;
use database::services::professor::{DeactivatedProfessor, NewProfessor, ProfessorPatch};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProfessorRequest {
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub title: String,
    pub department_id: Option<i32>,
}

impl From<CreateProfessorRequest> for NewProfessor {
    fn from(req: CreateProfessorRequest) -> Self {
        Self {
            national_id: req.national_id,
            name: req.name,
            email: req.email,
            title: req.title,
            department_id: req.department_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfessorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub department_id: Option<i32>,
}

impl From<UpdateProfessorRequest> for ProfessorPatch {
    fn from(req: UpdateProfessorRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            title: req.title,
            department_id: req.department_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorResponse {
    pub id: i32,
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub title: String,
    pub department_id: Option<i32>,
    pub active: bool,
}

impl From<professors::Model> for ProfessorResponse {
    fn from(professor: professors::Model) -> Self {
        Self {
            id: professor.id,
            national_id: professor.national_id,
            name: professor.name,
            email: professor.email,
            title: professor.title,
            department_id: professor.department_id,
            active: professor.active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessorDeactivationResponse {
    pub message: String,
    pub professor_id: i32,
    pub name: String,
    pub active: bool,
}

impl From<DeactivatedProfessor> for ProfessorDeactivationResponse {
    fn from(report: DeactivatedProfessor) -> Self {
        Self {
            message: "Professor deactivated successfully".to_string(),
            professor_id: report.professor_id,
            name: report.name,
            active: report.active,
        }
    }
}

/// Query string for the title search (`?title=...`).
#[derive(Debug, Deserialize, IntoParams)]
pub struct TitleQuery {
    pub title: String,
}
