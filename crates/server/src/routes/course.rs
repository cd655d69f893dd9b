use crate::dtos::NameQuery;
use crate::dtos::course::{
    CourseDeactivationResponse, CourseResponse, CreateCourseRequest, UpdateCourseRequest,
};
use crate::dtos::student::StudentResponse;
use crate::error::ApiResult;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::services::course::CourseService;
use sea_orm::DatabaseConnection;

/// Create a course; the professor must exist and be active
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Validation errors")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateCourseRequest>,
) -> ApiResult<(StatusCode, Json<CourseResponse>)> {
    let course = CourseService::create(&db, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

/// List all courses
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses", body = [CourseResponse]),
        (status = 404, description = "No courses registered")
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(db): State<DatabaseConnection>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = CourseService::list_all(&db).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Get a course by id
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CourseResponse>> {
    let course = CourseService::get(&db, id).await?;
    Ok(Json(course.into()))
}

/// Update a course (partial; blank fields are ignored)
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(("id" = i32, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Course, professor, or department not found")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    let course = CourseService::update(&db, id, payload.into()).await?;
    Ok(Json(course.into()))
}

/// Deactivate a course (soft delete); removes all of its enrollments
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deactivated", body = CourseDeactivationResponse),
        (status = 400, description = "Course already inactive"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn deactivate_course(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CourseDeactivationResponse>> {
    let report = CourseService::deactivate(&db, id).await?;
    Ok(Json(report.into()))
}

/// Students enrolled in a course
#[utoipa::path(
    get,
    path = "/courses/{id}/students",
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Students in the course", body = [StudentResponse]),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn get_course_students(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let students = CourseService::students_of(&db, id).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Find a course by code (exact match)
#[utoipa::path(
    get,
    path = "/courses/search/code/{code}",
    params(("code" = String, Path, description = "Course code")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn find_course_by_code(
    State(db): State<DatabaseConnection>,
    Path(code): Path<String>,
) -> ApiResult<Json<CourseResponse>> {
    let course = CourseService::find_by_code(&db, &code).await?;
    Ok(Json(course.into()))
}

/// Search courses by name substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/courses/search/name",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching courses", body = [CourseResponse]),
        (status = 404, description = "No courses matched")
    ),
    tag = "Courses"
)]
pub async fn search_courses_by_name(
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = CourseService::search_by_name(&db, &query.name).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Find courses by credit count
#[utoipa::path(
    get,
    path = "/courses/search/credits/{credits}",
    params(("credits" = i16, Path, description = "Credits (1-6)")),
    responses(
        (status = 200, description = "Courses with that credit count", body = [CourseResponse]),
        (status = 400, description = "Credits out of range"),
        (status = 404, description = "No courses with that credit count")
    ),
    tag = "Courses"
)]
pub async fn find_courses_by_credits(
    State(db): State<DatabaseConnection>,
    Path(credits): Path<i16>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = CourseService::find_by_credits(&db, credits).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Courses assigned to a professor
#[utoipa::path(
    get,
    path = "/courses/search/professor/{professor_id}",
    params(("professor_id" = i32, Path, description = "Professor id")),
    responses(
        (status = 200, description = "Courses of the professor", body = [CourseResponse]),
        (status = 404, description = "Professor not found or has no courses")
    ),
    tag = "Courses"
)]
pub async fn find_courses_by_professor(
    State(db): State<DatabaseConnection>,
    Path(professor_id): Path<i32>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = CourseService::find_by_professor(&db, professor_id).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Courses offered by a department
#[utoipa::path(
    get,
    path = "/courses/search/department/{department_id}",
    params(("department_id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Courses of the department", body = [CourseResponse]),
        (status = 404, description = "Department not found or has no courses")
    ),
    tag = "Courses"
)]
pub async fn find_courses_by_department(
    State(db): State<DatabaseConnection>,
    Path(department_id): Path<i32>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = CourseService::find_by_department(&db, department_id).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}
