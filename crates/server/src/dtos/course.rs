use database::entities::courses;
use database::services::course::{CoursePatch, DeactivatedCourse, NewCourse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub credits: i16,
    pub schedule: String,
    pub professor_id: i32,
    pub department_id: i32,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            credits: req.credits,
            schedule: req.schedule,
            professor_id: req.professor_id,
            department_id: req.department_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub credits: Option<i16>,
    pub schedule: Option<String>,
    pub professor_id: Option<i32>,
    pub department_id: Option<i32>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            name: req.name,
            credits: req.credits,
            schedule: req.schedule,
            professor_id: req.professor_id,
            department_id: req.department_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub credits: i16,
    pub schedule: String,
    pub professor_id: i32,
    pub department_id: i32,
    pub active: bool,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
            credits: course.credits,
            schedule: course.schedule,
            professor_id: course.professor_id,
            department_id: course.department_id,
            active: course.active,
        }
    }
}

/// Confirmation body for a soft delete, including how many students the
/// cascade unenrolled.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDeactivationResponse {
    pub message: String,
    pub course_id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
    pub students_unenrolled: u64,
}

impl From<DeactivatedCourse> for CourseDeactivationResponse {
    fn from(report: DeactivatedCourse) -> Self {
        Self {
            message: "Course deactivated successfully".to_string(),
            course_id: report.course_id,
            code: report.code,
            name: report.name,
            active: report.active,
            students_unenrolled: report.students_unenrolled,
        }
    }
}
