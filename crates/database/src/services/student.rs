use crate::entities::{courses, enrollments, students};
use crate::error::{ServiceError, ServiceResult};
use crate::services::{enrollment::EnrollmentService, integrity::IntegrityGuard};
use crate::validate;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

pub struct NewStudent {
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i16,
}

/// Field-by-field patch; `None` leaves the column untouched. Blank strings
/// are dropped before validation, matching how the API treats empty payload
/// fields. There is deliberately no `active` slot: deactivation has its own
/// path and reactivation is not exposed.
#[derive(Debug, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub semester: Option<i16>,
}

impl StudentPatch {
    fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.trim().is_empty()),
            email: self.email.filter(|v| !v.trim().is_empty()),
            semester: self.semester,
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.semester.is_none()
    }
}

/// Confirmation payload for a soft delete, carrying the cascade count.
#[derive(Debug)]
pub struct DeactivatedStudent {
    pub student_id: i32,
    pub name: String,
    pub active: bool,
    pub courses_unenrolled: u64,
}

pub struct StudentService;

impl StudentService {
    /// Creates a student. Every field problem and uniqueness clash is
    /// collected into one aggregate error rather than failing on the first.
    pub async fn create(
        db: &DatabaseConnection,
        new: NewStudent,
    ) -> ServiceResult<students::Model> {
        let mut errors = Vec::new();

        if let Some(message) = validate::check_national_id(&new.national_id) {
            errors.push(message);
        } else {
            let taken = students::Entity::find()
                .filter(students::Column::NationalId.eq(new.national_id.as_str()))
                .one(db)
                .await?;
            if taken.is_some() {
                errors.push("The national id is already registered".to_string());
            }
        }

        if let Some(message) = validate::check_person_name(&new.name) {
            errors.push(message);
        }

        if let Some(message) = validate::check_email(&new.email) {
            errors.push(message);
        } else {
            let taken = students::Entity::find()
                .filter(students::Column::Email.eq(new.email.as_str()))
                .one(db)
                .await?;
            if taken.is_some() {
                errors.push("The email is already registered".to_string());
            }
        }

        if let Some(message) = validate::check_semester(new.semester) {
            errors.push(message);
        }

        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let student = students::ActiveModel {
            national_id: Set(new.national_id),
            name: Set(new.name),
            email: Set(new.email),
            semester: Set(new.semester),
            active: Set(true),
            ..Default::default()
        };
        Ok(student.insert(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, student_id: i32) -> ServiceResult<students::Model> {
        IntegrityGuard::require_student(db, student_id).await
    }

    pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<students::Model>> {
        let students = students::Entity::find()
            .order_by_asc(students::Column::Id)
            .all(db)
            .await?;
        if students.is_empty() {
            return Err(ServiceError::not_found("No students registered"));
        }
        Ok(students)
    }

    /// Applies a partial update. Fields absent from the patch (or present but
    /// blank) keep their current value.
    pub async fn update(
        db: &DatabaseConnection,
        student_id: i32,
        patch: StudentPatch,
    ) -> ServiceResult<students::Model> {
        let student = IntegrityGuard::require_student(db, student_id).await?;

        let patch = patch.normalized();
        if patch.is_empty() {
            return Err(ServiceError::validation("No valid fields to update"));
        }

        if let Some(name) = &patch.name {
            if let Some(message) = validate::check_person_name(name) {
                return Err(ServiceError::validation(message));
            }
        }

        if let Some(email) = &patch.email {
            if let Some(message) = validate::check_email(email) {
                return Err(ServiceError::validation(message));
            }
            let taken = students::Entity::find()
                .filter(students::Column::Email.eq(email.as_str()))
                .filter(students::Column::Id.ne(student_id))
                .one(db)
                .await?;
            if taken.is_some() {
                return Err(ServiceError::conflict("The email is already registered"));
            }
        }

        if let Some(semester) = patch.semester {
            if let Some(message) = validate::check_semester(semester) {
                return Err(ServiceError::validation(message));
            }
        }

        let mut model: students::ActiveModel = student.into();
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(email) = patch.email {
            model.email = Set(email);
        }
        if let Some(semester) = patch.semester {
            model.semester = Set(semester);
        }
        Ok(model.update(db).await?)
    }

    /// Soft-deletes the student and removes every enrollment that references
    /// it, in one transaction. The count of removed enrollments is reported
    /// back to the caller.
    pub async fn deactivate(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> ServiceResult<DeactivatedStudent> {
        let student = IntegrityGuard::require_student(db, student_id).await?;
        if !student.active {
            return Err(ServiceError::validation("The student is already inactive"));
        }

        let txn = db.begin().await?;
        let removed = EnrollmentService::cascade_remove_for_student(&txn, student_id).await?;
        let mut model: students::ActiveModel = student.into();
        model.active = Set(false);
        let student = model.update(&txn).await?;
        txn.commit().await?;

        Ok(DeactivatedStudent {
            student_id,
            name: student.name,
            active: student.active,
            courses_unenrolled: removed,
        })
    }

    pub async fn find_by_national_id(
        db: &DatabaseConnection,
        national_id: &str,
    ) -> ServiceResult<students::Model> {
        students::Entity::find()
            .filter(students::Column::NationalId.eq(national_id))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student not found"))
    }

    pub async fn find_by_semester(
        db: &DatabaseConnection,
        semester: i16,
    ) -> ServiceResult<Vec<students::Model>> {
        if let Some(message) = validate::check_semester(semester) {
            return Err(ServiceError::validation(message));
        }
        let students = students::Entity::find()
            .filter(students::Column::Semester.eq(semester))
            .order_by_asc(students::Column::Id)
            .all(db)
            .await?;
        if students.is_empty() {
            return Err(ServiceError::not_found(
                "No students found in that semester",
            ));
        }
        Ok(students)
    }

    /// Case-insensitive substring search on the name.
    pub async fn search_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> ServiceResult<Vec<students::Model>> {
        let students = students::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    students::Entity,
                    students::Column::Name,
                ))))
                .like(format!("%{}%", name.to_lowercase())),
            )
            .order_by_asc(students::Column::Id)
            .all(db)
            .await?;
        if students.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No students found with '{name}' in their name"
            )));
        }
        Ok(students)
    }

    /// Courses the student is enrolled in, resolved through the enrollments
    /// table rather than a stored back-reference.
    pub async fn courses_of(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> ServiceResult<Vec<courses::Model>> {
        IntegrityGuard::require_student(db, student_id).await?;

        let course_ids: Vec<i32> = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .all(db)
            .await?
            .into_iter()
            .map(|enrollment| enrollment.course_id)
            .collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?)
    }
}
