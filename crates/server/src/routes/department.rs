use crate::dtos::NameQuery;
use crate::dtos::course::CourseResponse;
use crate::dtos::department::{
    CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest,
};
use crate::dtos::professor::ProfessorResponse;
use crate::error::ApiResult;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::services::department::DepartmentService;
use sea_orm::DatabaseConnection;

/// Create a department; the code is uppercased before storing
#[utoipa::path(
    post,
    path = "/departments",
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "Validation errors")
    ),
    tag = "Departments"
)]
pub async fn create_department(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateDepartmentRequest>,
) -> ApiResult<(StatusCode, Json<DepartmentResponse>)> {
    let department = DepartmentService::create(&db, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(department.into())))
}

/// List all departments
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "All departments", body = [DepartmentResponse]),
        (status = 404, description = "No departments registered")
    ),
    tag = "Departments"
)]
pub async fn list_departments(
    State(db): State<DatabaseConnection>,
) -> ApiResult<Json<Vec<DepartmentResponse>>> {
    let departments = DepartmentService::list_all(&db).await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

/// Get a department by id
#[utoipa::path(
    get,
    path = "/departments/{id}",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
pub async fn get_department(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = DepartmentService::get(&db, id).await?;
    Ok(Json(department.into()))
}

/// Update a department's name
#[utoipa::path(
    put,
    path = "/departments/{id}",
    params(("id" = i32, Path, description = "Department id")),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated", body = DepartmentResponse),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
pub async fn update_department(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentRequest>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = DepartmentService::update(&db, id, payload.into()).await?;
    Ok(Json(department.into()))
}

/// Delete a department; blocked while professors or courses reference it
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 400, description = "Department has dependents"),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
pub async fn delete_department(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    DepartmentService::delete(&db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Professors of a department
#[utoipa::path(
    get,
    path = "/departments/{id}/professors",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Professors of the department", body = [ProfessorResponse]),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
pub async fn get_department_professors(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<ProfessorResponse>>> {
    let professors = DepartmentService::professors_of(&db, id).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

/// Courses of a department
#[utoipa::path(
    get,
    path = "/departments/{id}/courses",
    params(("id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Courses of the department", body = [CourseResponse]),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
pub async fn get_department_courses(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = DepartmentService::courses_of(&db, id).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Find a department by code (case-insensitive; keys are uppercased)
#[utoipa::path(
    get,
    path = "/departments/search/code/{code}",
    params(("code" = String, Path, description = "Department code")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found")
    ),
    tag = "Departments"
)]
pub async fn find_department_by_code(
    State(db): State<DatabaseConnection>,
    Path(code): Path<String>,
) -> ApiResult<Json<DepartmentResponse>> {
    let department = DepartmentService::find_by_code(&db, &code).await?;
    Ok(Json(department.into()))
}

/// Search departments by name substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/departments/search/name",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching departments", body = [DepartmentResponse]),
        (status = 404, description = "No departments matched")
    ),
    tag = "Departments"
)]
pub async fn search_departments_by_name(
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<DepartmentResponse>>> {
    let departments = DepartmentService::search_by_name(&db, &query.name).await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}
