pub mod course;
pub mod department;
pub mod enrollment;
pub mod health;
pub mod professor;
pub mod root;
pub mod student;
