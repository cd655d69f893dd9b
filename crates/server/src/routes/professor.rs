use crate::dtos::NameQuery;
use crate::dtos::course::CourseResponse;
use crate::dtos::professor::{
    CreateProfessorRequest, ProfessorDeactivationResponse, ProfessorResponse, TitleQuery,
    UpdateProfessorRequest,
};
use crate::error::ApiResult;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::services::professor::ProfessorService;
use sea_orm::DatabaseConnection;

/// Create a professor
#[utoipa::path(
    post,
    path = "/professors",
    request_body = CreateProfessorRequest,
    responses(
        (status = 201, description = "Professor created", body = ProfessorResponse),
        (status = 400, description = "Validation errors")
    ),
    tag = "Professors"
)]
pub async fn create_professor(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CreateProfessorRequest>,
) -> ApiResult<(StatusCode, Json<ProfessorResponse>)> {
    let professor = ProfessorService::create(&db, payload.into()).await?;
    Ok((StatusCode::CREATED, Json(professor.into())))
}

/// List all professors
#[utoipa::path(
    get,
    path = "/professors",
    responses(
        (status = 200, description = "All professors", body = [ProfessorResponse]),
        (status = 404, description = "No professors registered")
    ),
    tag = "Professors"
)]
pub async fn list_professors(
    State(db): State<DatabaseConnection>,
) -> ApiResult<Json<Vec<ProfessorResponse>>> {
    let professors = ProfessorService::list_all(&db).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

/// Get a professor by id
#[utoipa::path(
    get,
    path = "/professors/{id}",
    params(("id" = i32, Path, description = "Professor id")),
    responses(
        (status = 200, description = "Professor found", body = ProfessorResponse),
        (status = 404, description = "Professor not found")
    ),
    tag = "Professors"
)]
pub async fn get_professor(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProfessorResponse>> {
    let professor = ProfessorService::get(&db, id).await?;
    Ok(Json(professor.into()))
}

/// Update a professor (partial; blank fields are ignored)
#[utoipa::path(
    put,
    path = "/professors/{id}",
    params(("id" = i32, Path, description = "Professor id")),
    request_body = UpdateProfessorRequest,
    responses(
        (status = 200, description = "Professor updated", body = ProfessorResponse),
        (status = 400, description = "Validation errors"),
        (status = 404, description = "Professor or department not found"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Professors"
)]
pub async fn update_professor(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProfessorRequest>,
) -> ApiResult<Json<ProfessorResponse>> {
    let professor = ProfessorService::update(&db, id, payload.into()).await?;
    Ok(Json(professor.into()))
}

/// Deactivate a professor; blocked while courses are still assigned
#[utoipa::path(
    delete,
    path = "/professors/{id}",
    params(("id" = i32, Path, description = "Professor id")),
    responses(
        (status = 200, description = "Professor deactivated", body = ProfessorDeactivationResponse),
        (status = 400, description = "Already inactive or has assigned courses"),
        (status = 404, description = "Professor not found")
    ),
    tag = "Professors"
)]
pub async fn deactivate_professor(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProfessorDeactivationResponse>> {
    let report = ProfessorService::deactivate(&db, id).await?;
    Ok(Json(report.into()))
}

/// Courses taught by a professor
#[utoipa::path(
    get,
    path = "/professors/{id}/courses",
    params(("id" = i32, Path, description = "Professor id")),
    responses(
        (status = 200, description = "Courses of the professor", body = [CourseResponse]),
        (status = 404, description = "Professor not found")
    ),
    tag = "Professors"
)]
pub async fn get_professor_courses(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = ProfessorService::courses_of(&db, id).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// Find a professor by national id
#[utoipa::path(
    get,
    path = "/professors/search/national-id/{national_id}",
    params(("national_id" = String, Path, description = "National id")),
    responses(
        (status = 200, description = "Professor found", body = ProfessorResponse),
        (status = 404, description = "Professor not found")
    ),
    tag = "Professors"
)]
pub async fn find_professor_by_national_id(
    State(db): State<DatabaseConnection>,
    Path(national_id): Path<String>,
) -> ApiResult<Json<ProfessorResponse>> {
    let professor = ProfessorService::find_by_national_id(&db, &national_id).await?;
    Ok(Json(professor.into()))
}

/// Search professors by name substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/professors/search/name",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching professors", body = [ProfessorResponse]),
        (status = 404, description = "No professors matched")
    ),
    tag = "Professors"
)]
pub async fn search_professors_by_name(
    State(db): State<DatabaseConnection>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<ProfessorResponse>>> {
    let professors = ProfessorService::search_by_name(&db, &query.name).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

/// Search professors by title substring (case-insensitive)
#[utoipa::path(
    get,
    path = "/professors/search/title",
    params(TitleQuery),
    responses(
        (status = 200, description = "Matching professors", body = [ProfessorResponse]),
        (status = 404, description = "No professors matched")
    ),
    tag = "Professors"
)]
pub async fn search_professors_by_title(
    State(db): State<DatabaseConnection>,
    Query(query): Query<TitleQuery>,
) -> ApiResult<Json<Vec<ProfessorResponse>>> {
    let professors = ProfessorService::search_by_title(&db, &query.title).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

/// List professors that are still active
#[utoipa::path(
    get,
    path = "/professors/search/active",
    responses(
        (status = 200, description = "Active professors", body = [ProfessorResponse]),
        (status = 404, description = "No active professors")
    ),
    tag = "Professors"
)]
pub async fn list_active_professors(
    State(db): State<DatabaseConnection>,
) -> ApiResult<Json<Vec<ProfessorResponse>>> {
    let professors = ProfessorService::list_active(&db).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

/// List professors that have been deactivated
#[utoipa::path(
    get,
    path = "/professors/search/inactive",
    responses(
        (status = 200, description = "Inactive professors", body = [ProfessorResponse]),
        (status = 404, description = "No inactive professors")
    ),
    tag = "Professors"
)]
pub async fn list_inactive_professors(
    State(db): State<DatabaseConnection>,
) -> ApiResult<Json<Vec<ProfessorResponse>>> {
    let professors = ProfessorService::list_inactive(&db).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}

/// Professors of a department
#[utoipa::path(
    get,
    path = "/professors/search/department/{department_id}",
    params(("department_id" = i32, Path, description = "Department id")),
    responses(
        (status = 200, description = "Professors of the department", body = [ProfessorResponse]),
        (status = 404, description = "Department not found or has no professors")
    ),
    tag = "Professors"
)]
pub async fn find_professors_by_department(
    State(db): State<DatabaseConnection>,
    Path(department_id): Path<i32>,
) -> ApiResult<Json<Vec<ProfessorResponse>>> {
    let professors = ProfessorService::find_by_department(&db, department_id).await?;
    Ok(Json(professors.into_iter().map(Into::into).collect()))
}
