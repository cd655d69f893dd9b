use database::entities::enrollments;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEnrollmentRequest {
    pub student_id: i32,
    pub course_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetGradeRequest {
    pub final_grade: f32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub student_id: i32,
    pub course_id: i32,
    pub final_grade: Option<f32>,
    pub passed: Option<bool>,
}

impl From<enrollments::Model> for EnrollmentResponse {
    fn from(enrollment: enrollments::Model) -> Self {
        Self {
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            final_grade: enrollment.final_grade,
            passed: enrollment.passed,
        }
    }
}

/// Confirmation body for an explicit withdrawal, echoing the names of the
/// student and course involved.
#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalResponse {
    pub message: String,
    pub student: String,
    pub course: String,
}
