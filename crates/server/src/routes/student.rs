use crate::dtos::NameQuery;
use crate::dtos::course::CourseResponse;
use crate::dtos::student::{
    CreateStudentRequest, StudentDeactivationResponse, StudentResponse, UpdateStudentRequest,
};
use crate::error::ApiResult;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::services::student::StudentService;
use sea_orm::DatabaseConnection;

/// Create a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Validation errors")
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateStudentRequest>,
) -> ApiResult<(StatusCode, Json<StudentResponse>)> {
    let student = StudentService::create(&db, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(student.into())))
}

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students", body = [StudentResponse]),
        (status = 404, description = "No students registered")
    ),
    tag = "Students"
)]
pub async fn list_students(
    State(db): State<DatabaseConnection>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = StudentService::list_all(&db).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<StudentResponse>> {
    let student = StudentService::get(&db, id).await?;
    Ok(Json(student.into()))
}

/// Update a student (partial; blank fields are ignored)
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    let student = StudentService::update(&db, id, payload.into()).await?;
    Ok(Json(student.into()))
}

/// Deactivate a student (soft delete); removes all of its enrollments
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deactivated", body = StudentDeactivationResponse),
        (status = 400, description = "Student already inactive"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
pub async fn deactivate_student(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<StudentDeactivationResponse>> {
    let report = StudentService::deactivate(&db, id).await?;
    Ok(Json(report.into()))
}

/// Courses a student is enrolled in
#[utoipa::path(
    get,
    path = "/students/{id}/courses",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Courses of the student", body = [CourseResponse]),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
pub async fn get_student_courses(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = StudentService::courses_of(&db, id).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Find a student by national id
#[utoipa::path(
    get,
    path = "/students/search/national-id/{national_id}",
    params(("national_id" = String, Path, description = "National id")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
pub async fn find_student_by_national_id(
    State(db): State<DatabaseConnection>,
    Path(national_id): Path<String>,
) -> ApiResult<Json<StudentResponse>> {
    let student = StudentService::find_by_national_id(&db, &national_id).await?;
    Ok(Json(student.into()))
}

/// Find students by semester
#[utoipa::path(
    get,
    path = "/students/search/semester/{semester}",
    params(("semester" = i16, Path, description = "Semester (1-12)")),
    responses(
        (status = 200, description = "Students in the semester", body = [StudentResponse]),
        (status = 400, description = "Semester out of range"),
        (status = 404, description = "No students in that semester")
    ),
    tag = "Students"
)]
pub async fn find_students_by_semester(
    State(db): State<DatabaseConnection>,
    Path(semester): Path<i16>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = StudentService::find_by_semester(&db, semester).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Search students by name substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/students/search/name",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching students", body = [StudentResponse]),
        (status = 404, description = "No students matched")
    ),
    tag = "Students"
)]
pub async fn search_students_by_name(
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = StudentService::search_by_name(&db, &query.name).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}
