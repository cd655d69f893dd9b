pub mod course;
pub mod department;
pub mod enrollment;
pub mod integrity;
pub mod professor;
pub mod student;
