use crate::entities::{courses, departments, professors, students};
use crate::error::{ServiceError, ServiceResult};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Read-only existence and active-state checks run before any
/// relationship-changing mutation. Nothing here writes.
pub struct IntegrityGuard;

impl IntegrityGuard {
    pub async fn require_student<C: ConnectionTrait>(
        conn: &C,
        student_id: i32,
    ) -> ServiceResult<students::Model> {
        students::Entity::find_by_id(student_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student not found"))
    }

    pub async fn require_active_student<C: ConnectionTrait>(
        conn: &C,
        student_id: i32,
    ) -> ServiceResult<students::Model> {
        let student = Self::require_student(conn, student_id).await?;
        if !student.active {
            return Err(ServiceError::validation("The student is not active"));
        }
        Ok(student)
    }

    pub async fn require_course<C: ConnectionTrait>(
        conn: &C,
        course_id: i32,
    ) -> ServiceResult<courses::Model> {
        courses::Entity::find_by_id(course_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course not found"))
    }

    pub async fn require_active_course<C: ConnectionTrait>(
        conn: &C,
        course_id: i32,
    ) -> ServiceResult<courses::Model> {
        let course = Self::require_course(conn, course_id).await?;
        if !course.active {
            return Err(ServiceError::validation("The course is not active"));
        }
        Ok(course)
    }

    pub async fn require_professor<C: ConnectionTrait>(
        conn: &C,
        professor_id: i32,
    ) -> ServiceResult<professors::Model> {
        professors::Entity::find_by_id(professor_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Professor not found"))
    }

    pub async fn require_active_professor<C: ConnectionTrait>(
        conn: &C,
        professor_id: i32,
    ) -> ServiceResult<professors::Model> {
        let professor = Self::require_professor(conn, professor_id).await?;
        if !professor.active {
            return Err(ServiceError::validation("The professor is not active"));
        }
        Ok(professor)
    }

    pub async fn require_department<C: ConnectionTrait>(
        conn: &C,
        department_id: i32,
    ) -> ServiceResult<departments::Model> {
        departments::Entity::find_by_id(department_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::not_found("Department not found"))
    }

    /// Counts of (professors, courses) still referencing a department.
    /// A department cannot be hard-deleted while either count is non-zero.
    pub async fn department_dependents<C: ConnectionTrait>(
        conn: &C,
        department_id: i32,
    ) -> ServiceResult<(u64, u64)> {
        let professor_count = professors::Entity::find()
            .filter(professors::Column::DepartmentId.eq(department_id))
            .count(conn)
            .await?;
        let course_count = courses::Entity::find()
            .filter(courses::Column::DepartmentId.eq(department_id))
            .count(conn)
            .await?;
        Ok((professor_count, course_count))
    }

    /// Courses still naming the professor as instructor. Deactivation is
    /// blocked until every one of them is reassigned.
    pub async fn professor_assigned_courses<C: ConnectionTrait>(
        conn: &C,
        professor_id: i32,
    ) -> ServiceResult<Vec<courses::Model>> {
        Ok(courses::Entity::find()
            .filter(courses::Column::ProfessorId.eq(professor_id))
            .order_by_asc(courses::Column::Id)
            .all(conn)
            .await?)
    }
}
