use crate::entities::{courses, enrollments, students};
use crate::error::{ServiceError, ServiceResult};
use crate::services::{enrollment::EnrollmentService, integrity::IntegrityGuard};
use crate::validate;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

pub struct NewCourse {
    pub code: String,
    pub name: String,
    pub credits: i16,
    pub schedule: String,
    pub professor_id: i32,
    pub department_id: i32,
}

/// Partial update. The professor and department references can be reassigned;
/// the code is the course's natural key and stays fixed.
#[derive(Debug, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub credits: Option<i16>,
    pub schedule: Option<String>,
    pub professor_id: Option<i32>,
    pub department_id: Option<i32>,
}

impl CoursePatch {
    fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.trim().is_empty()),
            schedule: self.schedule.filter(|v| !v.trim().is_empty()),
            ..self
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.credits.is_none()
            && self.schedule.is_none()
            && self.professor_id.is_none()
            && self.department_id.is_none()
    }
}

/// Confirmation payload for a soft delete, carrying the cascade count.
pub struct DeactivatedCourse {
    pub course_id: i32,
    pub code: String,
    pub name: String,
    pub active: bool,
    pub students_unenrolled: u64,
}

pub struct CourseService;

impl CourseService {
    /// Creates a course. Field problems and integrity failures (missing or
    /// inactive professor, missing department) are collected into one
    /// aggregate error.
    pub async fn create(db: &DatabaseConnection, new: NewCourse) -> ServiceResult<courses::Model> {
        let mut errors = Vec::new();

        if let Some(message) = validate::check_not_blank("code", &new.code) {
            errors.push(message);
        } else {
            let taken = courses::Entity::find()
                .filter(courses::Column::Code.eq(new.code.as_str()))
                .one(db)
                .await?;
            if taken.is_some() {
                errors.push("The course code already exists".to_string());
            }
        }

        if let Some(message) = validate::check_not_blank("name", &new.name) {
            errors.push(message);
        }

        if let Some(message) = validate::check_credits(new.credits) {
            errors.push(message);
        }

        if let Some(message) = validate::check_not_blank("schedule", &new.schedule) {
            errors.push(message);
        }

        match IntegrityGuard::require_active_professor(db, new.professor_id).await {
            Ok(_) => {}
            Err(ServiceError::NotFound(message)) => errors.push(message),
            Err(ServiceError::Validation(messages)) => errors.extend(messages),
            Err(other) => return Err(other),
        }

        if IntegrityGuard::require_department(db, new.department_id)
            .await
            .is_err()
        {
            errors.push("Department not found".to_string());
        }

        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let course = courses::ActiveModel {
            code: Set(new.code),
            name: Set(new.name),
            credits: Set(new.credits),
            schedule: Set(new.schedule),
            professor_id: Set(new.professor_id),
            department_id: Set(new.department_id),
            active: Set(true),
            ..Default::default()
        };
        Ok(course.insert(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, course_id: i32) -> ServiceResult<courses::Model> {
        IntegrityGuard::require_course(db, course_id).await
    }

    pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<courses::Model>> {
        let courses = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;
        if courses.is_empty() {
            return Err(ServiceError::not_found("No courses registered"));
        }
        Ok(courses)
    }

    /// Applies a partial update. Reassigning the professor re-checks that the
    /// new professor exists and is active.
    pub async fn update(
        db: &DatabaseConnection,
        course_id: i32,
        patch: CoursePatch,
    ) -> ServiceResult<courses::Model> {
        let course = IntegrityGuard::require_course(db, course_id).await?;

        let patch = patch.normalized();
        if patch.is_empty() {
            return Err(ServiceError::validation("No valid fields to update"));
        }

        if let Some(credits) = patch.credits {
            if let Some(message) = validate::check_credits(credits) {
                return Err(ServiceError::validation(message));
            }
        }

        if let Some(professor_id) = patch.professor_id {
            IntegrityGuard::require_active_professor(db, professor_id).await?;
        }

        if let Some(department_id) = patch.department_id {
            IntegrityGuard::require_department(db, department_id).await?;
        }

        let mut model: courses::ActiveModel = course.into();
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(credits) = patch.credits {
            model.credits = Set(credits);
        }
        if let Some(schedule) = patch.schedule {
            model.schedule = Set(schedule);
        }
        if let Some(professor_id) = patch.professor_id {
            model.professor_id = Set(professor_id);
        }
        if let Some(department_id) = patch.department_id {
            model.department_id = Set(department_id);
        }
        Ok(model.update(db).await?)
    }

    /// Soft-deletes the course and removes every enrollment that references
    /// it, in one transaction. Reports how many students were unenrolled.
    pub async fn deactivate(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> ServiceResult<DeactivatedCourse> {
        let course = IntegrityGuard::require_course(db, course_id).await?;
        if !course.active {
            return Err(ServiceError::validation("The course is already inactive"));
        }

        let txn = db.begin().await?;
        let removed = EnrollmentService::cascade_remove_for_course(&txn, course_id).await?;
        let mut model: courses::ActiveModel = course.into();
        model.active = Set(false);
        let course = model.update(&txn).await?;
        txn.commit().await?;

        Ok(DeactivatedCourse {
            course_id,
            code: course.code,
            name: course.name,
            active: course.active,
            students_unenrolled: removed,
        })
    }

    /// Exact, case-sensitive lookup by course code.
    pub async fn find_by_code(db: &DatabaseConnection, code: &str) -> ServiceResult<courses::Model> {
        courses::Entity::find()
            .filter(courses::Column::Code.eq(code))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course not found"))
    }

    pub async fn search_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> ServiceResult<Vec<courses::Model>> {
        let courses = courses::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    courses::Entity,
                    courses::Column::Name,
                ))))
                .like(format!("%{}%", name.to_lowercase())),
            )
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;
        if courses.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No courses found with '{name}' in their name"
            )));
        }
        Ok(courses)
    }

    pub async fn find_by_credits(
        db: &DatabaseConnection,
        credits: i16,
    ) -> ServiceResult<Vec<courses::Model>> {
        if let Some(message) = validate::check_credits(credits) {
            return Err(ServiceError::validation(message));
        }
        let courses = courses::Entity::find()
            .filter(courses::Column::Credits.eq(credits))
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;
        if courses.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No courses found with {credits} credits"
            )));
        }
        Ok(courses)
    }

    pub async fn find_by_professor(
        db: &DatabaseConnection,
        professor_id: i32,
    ) -> ServiceResult<Vec<courses::Model>> {
        IntegrityGuard::require_professor(db, professor_id).await?;
        let courses = IntegrityGuard::professor_assigned_courses(db, professor_id).await?;
        if courses.is_empty() {
            return Err(ServiceError::not_found(
                "The professor has no courses assigned",
            ));
        }
        Ok(courses)
    }

    pub async fn find_by_department(
        db: &DatabaseConnection,
        department_id: i32,
    ) -> ServiceResult<Vec<courses::Model>> {
        IntegrityGuard::require_department(db, department_id).await?;
        let courses = courses::Entity::find()
            .filter(courses::Column::DepartmentId.eq(department_id))
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?;
        if courses.is_empty() {
            return Err(ServiceError::not_found("The department has no courses"));
        }
        Ok(courses)
    }

    /// Students enrolled in the course, resolved through the enrollments
    /// table. Empty is a valid answer here.
    pub async fn students_of(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> ServiceResult<Vec<students::Model>> {
        IntegrityGuard::require_course(db, course_id).await?;

        let student_ids: Vec<i32> = enrollments::Entity::find()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .all(db)
            .await?
            .into_iter()
            .map(|enrollment| enrollment.student_id)
            .collect();
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(students::Entity::find()
            .filter(students::Column::Id.is_in(student_ids))
            .order_by_asc(students::Column::Id)
            .all(db)
            .await?)
    }
}
