#![allow(dead_code)]

use database::entities::{courses, departments, professors, students};
use database::services::course::{CourseService, NewCourse};
use database::services::department::{DepartmentService, NewDepartment};
use database::services::professor::{NewProfessor, ProfessorService};
use database::services::student::{NewStudent, StudentService};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the full schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let db = database::db::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn seed_department(db: &DatabaseConnection, code: &str, name: &str) -> departments::Model {
    DepartmentService::create(
        db,
        NewDepartment {
            code: code.to_string(),
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_professor(
    db: &DatabaseConnection,
    national_id: &str,
    name: &str,
    department_id: Option<i32>,
) -> professors::Model {
    ProfessorService::create(
        db,
        NewProfessor {
            national_id: national_id.to_string(),
            name: name.to_string(),
            email: format!("{national_id}@faculty.edu"),
            title: "Associate Professor".to_string(),
            department_id,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_student(
    db: &DatabaseConnection,
    national_id: &str,
    name: &str,
    semester: i16,
) -> students::Model {
    StudentService::create(
        db,
        NewStudent {
            national_id: national_id.to_string(),
            name: name.to_string(),
            email: format!("{national_id}@students.edu"),
            semester,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_course(
    db: &DatabaseConnection,
    code: &str,
    name: &str,
    professor_id: i32,
    department_id: i32,
) -> courses::Model {
    CourseService::create(
        db,
        NewCourse {
            code: code.to_string(),
            name: name.to_string(),
            credits: 4,
            schedule: "Mon 10:00-12:00".to_string(),
            professor_id,
            department_id,
        },
    )
    .await
    .unwrap()
}
