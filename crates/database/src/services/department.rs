use crate::entities::{courses, departments, professors};
use crate::error::{ServiceError, ServiceResult};
use crate::services::integrity::IntegrityGuard;
use crate::validate;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct NewDepartment {
    pub code: String,
    pub name: String,
}

/// Only the name is updatable; the code is the department's natural key.
#[derive(Debug, Default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
}

impl DepartmentPatch {
    fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.trim().is_empty()),
        }
    }
}

pub struct DepartmentService;

impl DepartmentService {
    /// Creates a department. The code is uppercased before the uniqueness
    /// check and before persistence.
    pub async fn create(
        db: &DatabaseConnection,
        new: NewDepartment,
    ) -> ServiceResult<departments::Model> {
        let code = validate::normalize_code(&new.code);
        let mut errors = Vec::new();

        if let Some(message) = validate::check_department_code(&code) {
            errors.push(message);
        } else {
            let taken = departments::Entity::find()
                .filter(departments::Column::Code.eq(code.as_str()))
                .one(db)
                .await?;
            if taken.is_some() {
                errors.push("The department code already exists".to_string());
            }
        }

        if let Some(message) = validate::check_not_blank("name", &new.name) {
            errors.push(message);
        }

        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let department = departments::ActiveModel {
            code: Set(code),
            name: Set(new.name),
            ..Default::default()
        };
        Ok(department.insert(db).await?)
    }

    pub async fn get(
        db: &DatabaseConnection,
        department_id: i32,
    ) -> ServiceResult<departments::Model> {
        IntegrityGuard::require_department(db, department_id).await
    }

    pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<departments::Model>> {
        let departments = departments::Entity::find()
            .order_by_asc(departments::Column::Id)
            .all(db)
            .await?;
        if departments.is_empty() {
            return Err(ServiceError::not_found("No departments registered"));
        }
        Ok(departments)
    }

    pub async fn update(
        db: &DatabaseConnection,
        department_id: i32,
        patch: DepartmentPatch,
    ) -> ServiceResult<departments::Model> {
        let department = IntegrityGuard::require_department(db, department_id).await?;

        let patch = patch.normalized();
        let Some(name) = patch.name else {
            return Err(ServiceError::validation("No valid fields to update"));
        };

        let mut model: departments::ActiveModel = department.into();
        model.name = Set(name);
        Ok(model.update(db).await?)
    }

    /// Hard-deletes the department. Refused while any professor or course
    /// still references it; both dependent kinds are reported at once.
    pub async fn delete(db: &DatabaseConnection, department_id: i32) -> ServiceResult<()> {
        IntegrityGuard::require_department(db, department_id).await?;

        let (professor_count, course_count) =
            IntegrityGuard::department_dependents(db, department_id).await?;
        let mut errors = Vec::new();
        if professor_count > 0 {
            errors.push(format!(
                "Cannot delete the department because it has {professor_count} professor(s) assigned"
            ));
        }
        if course_count > 0 {
            errors.push(format!(
                "Cannot delete the department because it has {course_count} course(s) assigned"
            ));
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        departments::Entity::delete_by_id(department_id)
            .exec(db)
            .await?;
        Ok(())
    }

    /// Exact lookup by code; the key is uppercased the same way writes are.
    pub async fn find_by_code(
        db: &DatabaseConnection,
        code: &str,
    ) -> ServiceResult<departments::Model> {
        let code = validate::normalize_code(code);
        departments::Entity::find()
            .filter(departments::Column::Code.eq(code))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Department not found"))
    }

    pub async fn search_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> ServiceResult<Vec<departments::Model>> {
        let departments = departments::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    departments::Entity,
                    departments::Column::Name,
                ))))
                .like(format!("%{}%", name.to_lowercase())),
            )
            .order_by_asc(departments::Column::Id)
            .all(db)
            .await?;
        if departments.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No departments found with '{name}' in their name"
            )));
        }
        Ok(departments)
    }

    /// Professors of the department, computed by query rather than stored
    /// back-references. Empty is a valid answer here.
    pub async fn professors_of(
        db: &DatabaseConnection,
        department_id: i32,
    ) -> ServiceResult<Vec<professors::Model>> {
        IntegrityGuard::require_department(db, department_id).await?;
        Ok(professors::Entity::find()
            .filter(professors::Column::DepartmentId.eq(department_id))
            .order_by_asc(professors::Column::Id)
            .all(db)
            .await?)
    }

    /// Courses of the department; empty is a valid answer here.
    pub async fn courses_of(
        db: &DatabaseConnection,
        department_id: i32,
    ) -> ServiceResult<Vec<courses::Model>> {
        IntegrityGuard::require_department(db, department_id).await?;
        Ok(courses::Entity::find()
            .filter(courses::Column::DepartmentId.eq(department_id))
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await?)
    }
}
