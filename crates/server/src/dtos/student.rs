use database::entities::students;
use database::services::student::{DeactivatedStudent, NewStudent, StudentPatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i16,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            national_id: req.national_id,
            name: req.name,
            email: req.email,
            semester: req.semester,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub semester: Option<i16>,
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(req: UpdateStudentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            semester: req.semester,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i16,
    pub active: bool,
}

impl From<students::Model> for StudentResponse {
    fn from(student: students::Model) -> Self {
        Self {
            id: student.id,
            national_id: student.national_id,
            name: student.name,
            email: student.email,
            semester: student.semester,
            active: student.active,
        }
    }
}

/// Confirmation body for a soft delete, including how many enrollments the
/// cascade removed.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDeactivationResponse {
    pub message: String,
    pub student_id: i32,
    pub name: String,
    pub active: bool,
    pub courses_unenrolled: u64,
}

impl From<DeactivatedStudent> for StudentDeactivationResponse {
    fn from(report: DeactivatedStudent) -> Self {
        Self {
            message: "Student deactivated successfully".to_string(),
            student_id: report.student_id,
            name: report.name,
            active: report.active,
            courses_unenrolled: report.courses_unenrolled,
        }
    }
}
