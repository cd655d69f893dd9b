mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use axum::Router;
use axum::routing::{get, post, put};
use doc::ApiDoc;
use log::info;
use sea_orm::DatabaseConnection;
use tower_http::compression::CompressionLayer;
use utils::shutdown::shutdown_signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route(
            "/students",
            post(routes::student::create_student).get(routes::student::list_students),
        )
        .route(
            "/students/{id}",
            get(routes::student::get_student)
                .put(routes::student::update_student)
                .delete(routes::student::deactivate_student),
        )
        .route(
            "/students/{id}/courses",
            get(routes::student::get_student_courses),
        )
        .route(
            "/students/search/national-id/{national_id}",
            get(routes::student::find_student_by_national_id),
        )
        .route(
            "/students/search/semester/{semester}",
            get(routes::student::find_students_by_semester),
        )
        .route(
            "/students/search/name",
            get(routes::student::search_students_by_name),
        )
        .route(
            "/professors",
            post(routes::professor::create_professor).get(routes::professor::list_professors),
        )
        .route(
            "/professors/{id}",
            get(routes::professor::get_professor)
                .put(routes::professor::update_professor)
                .delete(routes::professor::deactivate_professor),
        )
        .route(
            "/professors/{id}/courses",
            get(routes::professor::get_professor_courses),
        )
        .route(
            "/professors/search/national-id/{national_id}",
            get(routes::professor::find_professor_by_national_id),
        )
        .route(
            "/professors/search/name",
            get(routes::professor::search_professors_by_name),
        )
        .route(
            "/professors/search/title",
            get(routes::professor::search_professors_by_title),
        )
        .route(
            "/professors/search/active",
            get(routes::professor::list_active_professors),
        )
        .route(
            "/professors/search/inactive",
            get(routes::professor::list_inactive_professors),
        )
        .route(
            "/professors/search/department/{department_id}",
            get(routes::professor::find_professors_by_department),
        )
        .route(
            "/departments",
            post(routes::department::create_department).get(routes::department::list_departments),
        )
        .route(
            "/departments/{id}",
            get(routes::department::get_department)
                .put(routes::department::update_department)
                .delete(routes::department::delete_department),
        )
        .route(
            "/departments/{id}/professors",
            get(routes::department::get_department_professors),
        )
        .route(
            "/departments/{id}/courses",
            get(routes::department::get_department_courses),
        )
        .route(
            "/departments/search/code/{code}",
            get(routes::department::find_department_by_code),
        )
        .route(
            "/departments/search/name",
            get(routes::department::search_departments_by_name),
        )
        .route(
            "/courses",
            post(routes::course::create_course).get(routes::course::list_courses),
        )
        .route(
            "/courses/{id}",
            get(routes::course::get_course)
                .put(routes::course::update_course)
                .delete(routes::course::deactivate_course),
        )
        .route(
            "/courses/{id}/students",
            get(routes::course::get_course_students),
        )
        .route(
            "/courses/search/code/{code}",
            get(routes::course::find_course_by_code),
        )
        .route(
            "/courses/search/name",
            get(routes::course::search_courses_by_name),
        )
        .route(
            "/courses/search/credits/{credits}",
            get(routes::course::find_courses_by_credits),
        )
        .route(
            "/courses/search/professor/{professor_id}",
            get(routes::course::find_courses_by_professor),
        )
        .route(
            "/courses/search/department/{department_id}",
            get(routes::course::find_courses_by_department),
        )
        .route("/enrollments", post(routes::enrollment::create_enrollment))
        .route(
            "/enrollments/{student_id}/{course_id}",
            get(routes::enrollment::get_enrollment)
                .delete(routes::enrollment::withdraw_enrollment),
        )
        .route(
            "/enrollments/{student_id}/{course_id}/grade",
            put(routes::enrollment::set_enrollment_grade),
        )
        .route(
            "/enrollments/student/{student_id}",
            get(routes::enrollment::list_enrollments_by_student),
        )
        .route(
            "/enrollments/course/{course_id}",
            get(routes::enrollment::list_enrollments_by_course),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(db)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = database::db::connect(&database_url)
        .await
        .expect("Failed to connect to the database");

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{bind_addr}");

    axum::serve(listener, router(db))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests {
    use super::router;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use migration::{Migrator, MigratorTrait};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = database::db::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        router(db)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_student_rejects_bad_fields_in_one_response() {
        let app = test_app().await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/students",
                json!({
                    "national_id": "12",
                    "name": "Ada99",
                    "email": "not-an-email",
                    "semester": 3
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation errors");
        assert_eq!(body["errors"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn enroll_with_both_parties_missing_reports_both() {
        let app = test_app().await;
        let response = app
            .oneshot(json_request(
                "POST",
                "/enrollments",
                json!({ "student_id": 1, "course_id": 1 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&json!("Student not found")));
        assert!(errors.contains(&json!("Course not found")));
    }

    #[tokio::test]
    async fn missing_student_returns_detail_body() {
        let app = test_app().await;
        let response = app
            .oneshot(Request::get("/students/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["detail"], "Student not found");
    }

    #[tokio::test]
    async fn department_crud_over_http() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/departments",
                json!({ "code": "cs", "name": "Computer Science" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["code"], "CS");

        // Lookup is case-insensitive because keys are uppercased.
        let response = app
            .clone()
            .oneshot(
                Request::get("/departments/search/code/cs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let found = body_json(response).await;
        assert_eq!(found["name"], "Computer Science");

        let id = created["id"].as_i64().unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/departments/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = test_app().await;
        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["info"]["title"], "University Records API");
    }
}
