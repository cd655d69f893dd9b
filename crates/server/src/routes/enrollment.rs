use crate::dtos::enrollment::{
    CreateEnrollmentRequest, EnrollmentResponse, SetGradeRequest, WithdrawalResponse,
};
use crate::error::ApiResult;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::entities::{courses, students};
use database::services::enrollment::EnrollmentService;
use sea_orm::{DatabaseConnection, EntityTrait};

/// Enroll a student in a course; both must exist and be active
#[utoipa::path(
    post,
    path = "/enrollments",
    request_body = CreateEnrollmentRequest,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Student or course not found")
    ),
    tag = "Enrollments"
)]
pub async fn create_enrollment(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateEnrollmentRequest>,
) -> ApiResult<(StatusCode, Json<EnrollmentResponse>)> {
    let enrollment = EnrollmentService::enroll(&db, payload.student_id, payload.course_id).await?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

/// Get a single enrollment by its (student, course) pair
#[utoipa::path(
    get,
    path = "/enrollments/{student_id}/{course_id}",
    params(
        ("student_id" = i32, Path, description = "Student id"),
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Enrollment found", body = EnrollmentResponse),
        (status = 404, description = "Enrollment not found")
    ),
    tag = "Enrollments"
)]
pub async fn get_enrollment(
    State(db): State<DatabaseConnection>,
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let enrollment = EnrollmentService::get(&db, student_id, course_id).await?;
    Ok(Json(enrollment.into()))
}

/// Withdraw a student from a course
#[utoipa::path(
    delete,
    path = "/enrollments/{student_id}/{course_id}",
    params(
        ("student_id" = i32, Path, description = "Student id"),
        ("course_id" = i32, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Enrollment removed", body = WithdrawalResponse),
        (status = 404, description = "Enrollment not found")
    ),
    tag = "Enrollments"
)]
pub async fn withdraw_enrollment(
    State(db): State<DatabaseConnection>,
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> ApiResult<Json<WithdrawalResponse>> {
    // Names are resolved before the row disappears so the confirmation can
    // echo them.
    let student = students::Entity::find_by_id(student_id)
        .one(&db)
        .await
        .map_err(database::error::ServiceError::from)?;
    let course = courses::Entity::find_by_id(course_id)
        .one(&db)
        .await
        .map_err(database::error::ServiceError::from)?;

    EnrollmentService::withdraw(&db, student_id, course_id).await?;

    Ok(Json(WithdrawalResponse {
        message: "Enrollment removed successfully".to_string(),
        student: student.map_or_else(|| "Unknown".to_string(), |s| s.name),
        course: course.map_or_else(|| "Unknown".to_string(), |c| c.name),
    }))
}

/// Record the final grade; the passed flag is derived from it
#[utoipa::path(
    put,
    path = "/enrollments/{student_id}/{course_id}/grade",
    params(
        ("student_id" = i32, Path, description = "Student id"),
        ("course_id" = i32, Path, description = "Course id")
    ),
    request_body = SetGradeRequest,
    responses(
        (status = 200, description = "Grade recorded", body = EnrollmentResponse),
        (status = 400, description = "Grade out of range"),
        (status = 404, description = "Enrollment not found")
    ),
    tag = "Enrollments"
)]
pub async fn set_enrollment_grade(
    State(db): State<DatabaseConnection>,
    Path((student_id, course_id)): Path<(i32, i32)>,
    Json(payload): Json<SetGradeRequest>,
) -> ApiResult<Json<EnrollmentResponse>> {
    let enrollment =
        EnrollmentService::set_grade(&db, student_id, course_id, payload.final_grade).await?;
    Ok(Json(enrollment.into()))
}

/// All enrollments of a student
#[utoipa::path(
    get,
    path = "/enrollments/student/{student_id}",
    params(("student_id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Enrollments of the student", body = [EnrollmentResponse]),
        (status = 404, description = "Student not found")
    ),
    tag = "Enrollments"
)]
pub async fn list_enrollments_by_student(
    State(db): State<DatabaseConnection>,
    Path(student_id): Path<i32>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = EnrollmentService::list_by_student(&db, student_id).await?;
    Ok(Json(enrollments.into_iter().map(Into::into).collect()))
}

/// All enrollments in a course
#[utoipa::path(
    get,
    path = "/enrollments/course/{course_id}",
    params(("course_id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Enrollments in the course", body = [EnrollmentResponse]),
        (status = 404, description = "Course not found")
    ),
    tag = "Enrollments"
)]
pub async fn list_enrollments_by_course(
    State(db): State<DatabaseConnection>,
    Path(course_id): Path<i32>,
) -> ApiResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = EnrollmentService::list_by_course(&db, course_id).await?;
    Ok(Json(enrollments.into_iter().map(Into::into).collect()))
}
