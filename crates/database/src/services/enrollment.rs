use crate::entities::{courses, enrollments, students};
use crate::error::{ServiceError, ServiceResult};
use crate::services::integrity::IntegrityGuard;
use crate::validate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Owns the enrollment lifecycle: creation, lookup, grade writes, explicit
/// withdrawal, and the bulk removals that run when a student or course is
/// deactivated. An enrollment is either present or absent; absence is
/// withdrawal.
pub struct EnrollmentService;

impl EnrollmentService {
    /// Grade at or above this passes the course.
    pub const PASSING_GRADE: f32 = 3.0;

    /// Enrolls a student in a course. The three preconditions (student exists
    /// and is active, course exists and is active, pair not yet enrolled) are
    /// all evaluated before failing so the caller sees every problem at once.
    /// A lone missing-entity failure is reported as `NotFound` instead of the
    /// aggregate.
    pub async fn enroll(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: i32,
    ) -> ServiceResult<enrollments::Model> {
        let mut errors = Vec::new();

        let student = students::Entity::find_by_id(student_id).one(db).await?;
        match &student {
            None => errors.push("Student not found".to_string()),
            Some(student) if !student.active => {
                errors.push("The student is not active".to_string());
            }
            Some(_) => {}
        }

        let course = courses::Entity::find_by_id(course_id).one(db).await?;
        match &course {
            None => errors.push("Course not found".to_string()),
            Some(course) if !course.active => {
                errors.push("The course is not active".to_string());
            }
            Some(_) => {}
        }

        if let (Some(_), Some(course)) = (&student, &course) {
            let existing = enrollments::Entity::find_by_id((student_id, course_id))
                .one(db)
                .await?;
            if existing.is_some() {
                errors.push(format!(
                    "The student is already enrolled in the course {}",
                    course.name
                ));
            }
        }

        if errors.len() == 1 && (student.is_none() || course.is_none()) {
            return Err(ServiceError::NotFound(errors.remove(0)));
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let enrollment = enrollments::ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            final_grade: Set(None),
            passed: Set(None),
        };
        enrollments::Entity::insert(enrollment)
            .exec_without_returning(db)
            .await?;

        Self::get(db, student_id, course_id).await
    }

    /// Composite-key lookup of a single enrollment.
    pub async fn get(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: i32,
    ) -> ServiceResult<enrollments::Model> {
        enrollments::Entity::find_by_id((student_id, course_id))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Enrollment not found"))
    }

    /// Removes the enrollment for (student, course); fails if none exists.
    pub async fn withdraw(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: i32,
    ) -> ServiceResult<()> {
        Self::get(db, student_id, course_id).await?;
        enrollments::Entity::delete_by_id((student_id, course_id))
            .exec(db)
            .await?;
        Ok(())
    }

    /// Writes the final grade and rederives the passed flag from it.
    pub async fn set_grade(
        db: &DatabaseConnection,
        student_id: i32,
        course_id: i32,
        grade: f32,
    ) -> ServiceResult<enrollments::Model> {
        if let Some(message) = validate::check_grade(grade) {
            return Err(ServiceError::validation(message));
        }

        let enrollment = Self::get(db, student_id, course_id).await?;
        let mut model: enrollments::ActiveModel = enrollment.into();
        model.final_grade = Set(Some(grade));
        model.passed = Set(Some(grade >= Self::PASSING_GRADE));
        Ok(model.update(db).await?)
    }

    /// Deletes every enrollment referencing the student. Runs inside the
    /// student-deactivation transaction; returns the number removed.
    pub async fn cascade_remove_for_student<C: ConnectionTrait>(
        conn: &C,
        student_id: i32,
    ) -> ServiceResult<u64> {
        let result = enrollments::Entity::delete_many()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Deletes every enrollment referencing the course. Runs inside the
    /// course-deactivation transaction; returns the number removed.
    pub async fn cascade_remove_for_course<C: ConnectionTrait>(
        conn: &C,
        course_id: i32,
    ) -> ServiceResult<u64> {
        let result = enrollments::Entity::delete_many()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// All enrollments of a student, in stable course order. The student must
    /// exist; an empty list is a valid result.
    pub async fn list_by_student(
        db: &DatabaseConnection,
        student_id: i32,
    ) -> ServiceResult<Vec<enrollments::Model>> {
        IntegrityGuard::require_student(db, student_id).await?;
        Ok(enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .order_by_asc(enrollments::Column::CourseId)
            .all(db)
            .await?)
    }

    /// All enrollments in a course, in stable student order. The course must
    /// exist; an empty list is a valid result.
    pub async fn list_by_course(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> ServiceResult<Vec<enrollments::Model>> {
        IntegrityGuard::require_course(db, course_id).await?;
        Ok(enrollments::Entity::find()
            .filter(enrollments::Column::CourseId.eq(course_id))
            .order_by_asc(enrollments::Column::StudentId)
            .all(db)
            .await?)
    }
}
