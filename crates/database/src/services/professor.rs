use crate::entities::{courses, professors};
use crate::error::{ServiceError, ServiceResult};
use crate::services::integrity::IntegrityGuard;
use crate::validate;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct NewProfessor {
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub title: String,
    pub department_id: Option<i32>,
}

/// Partial update; blank strings are dropped, `None` leaves the column alone.
/// Reactivation is not exposed, so there is no `active` slot.
#[derive(Debug, Default)]
pub struct ProfessorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub department_id: Option<i32>,
}

impl ProfessorPatch {
    fn normalized(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.trim().is_empty()),
            email: self.email.filter(|v| !v.trim().is_empty()),
            title: self.title.filter(|v| !v.trim().is_empty()),
            department_id: self.department_id,
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.title.is_none()
            && self.department_id.is_none()
    }
}

#[derive(Debug)]
pub struct DeactivatedProfessor {
    pub professor_id: i32,
    pub name: String,
    pub active: bool,
}

pub struct ProfessorService;

impl ProfessorService {
    /// Creates a professor, collecting every field and integrity failure
    /// (including a dangling department reference) into one aggregate error.
    pub async fn create(
        db: &DatabaseConnection,
        new: NewProfessor,
    ) -> ServiceResult<professors::Model> {
        let mut errors = Vec::new();

        if let Some(message) = validate::check_national_id(&new.national_id) {
            errors.push(message);
        } else {
            let taken = professors::Entity::find()
                .filter(professors::Column::NationalId.eq(new.national_id.as_str()))
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
            let taken = professors::Entity::find()
                .filter(professors::Column::Email.eq(new.email.as_str()))
                .one(db)
                .await?;
            if taken.is_some() {
                errors.push("The email is already registered".to_string());
            }
        }

        if let Some(message) = validate::check_not_blank("title", &new.title) {
            errors.push(message);
        }

        if let Some(department_id) = new.department_id {
            if IntegrityGuard::require_department(db, department_id)
                .await
                .is_err()
            {
                errors.push("Department not found".to_string());
            }
        }

        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let professor = professors::ActiveModel {
            national_id: Set(new.national_id),
            name: Set(new.name),
            email: Set(new.email),
            title: Set(new.title),
            department_id: Set(new.department_id),
            active: Set(true),
            ..Default::default()
        };
        Ok(professor.insert(db).await?)
    }

    pub async fn get(
        db: &DatabaseConnection,
        professor_id: i32,
    ) -> ServiceResult<professors::Model> {
        IntegrityGuard::require_professor(db, professor_id).await
    }

    pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<professors::Model>> {
        let professors = professors::Entity::find()
            .order_by_asc(professors::Column::Id)
            .all(db)
            .await?;
        if professors.is_empty() {
            return Err(ServiceError::not_found("No professors registered"));
        }
        Ok(professors)
    }

    pub async fn update(
        db: &DatabaseConnection,
        professor_id: i32,
        patch: ProfessorPatch,
    ) -> ServiceResult<professors::Model> {
        let professor = IntegrityGuard::require_professor(db, professor_id).await?;

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
            let taken = professors::Entity::find()
                .filter(professors::Column::Email.eq(email.as_str()))
                .filter(professors::Column::Id.ne(professor_id))
                .one(db)
                .await?;
            if taken.is_some() {
                return Err(ServiceError::conflict("The email is already registered"));
            }
        }

        if let Some(department_id) = patch.department_id {
            IntegrityGuard::require_department(db, department_id).await?;
        }

        let mut model: professors::ActiveModel = professor.into();
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(email) = patch.email {
            model.email = Set(email);
        }
        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(department_id) = patch.department_id {
            model.department_id = Set(Some(department_id));
        }
        Ok(model.update(db).await?)
    }

    /// Soft-deletes the professor. Blocked while any course still names the
    /// professor as instructor; those courses must be reassigned first.
    pub async fn deactivate(
        db: &DatabaseConnection,
        professor_id: i32,
    ) -> ServiceResult<DeactivatedProfessor> {
        let professor = IntegrityGuard::require_professor(db, professor_id).await?;
        if !professor.active {
            return Err(ServiceError::validation(
                "The professor is already inactive",
            ));
        }

        let assigned = IntegrityGuard::professor_assigned_courses(db, professor_id).await?;
        if !assigned.is_empty() {
            let mut errors = vec![format!(
                "Cannot deactivate the professor because {} course(s) are still assigned",
                assigned.len()
            )];
            errors.extend(
                assigned
                    .into_iter()
                    .map(|course| format!("Assigned course: {}", course.name)),
            );
            return Err(ServiceError::Validation(errors));
        }

        let mut model: professors::ActiveModel = professor.into();
        model.active = Set(false);
        let professor = model.update(db).await?;

        Ok(DeactivatedProfessor {
            professor_id,
            name: professor.name,
            active: professor.active,
        })
    }

    pub async fn find_by_national_id(
        db: &DatabaseConnection,
        national_id: &str,
    ) -> ServiceResult<professors::Model> {
        professors::Entity::find()
            .filter(professors::Column::NationalId.eq(national_id))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Professor not found"))
    }

    pub async fn search_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> ServiceResult<Vec<professors::Model>> {
        let professors = professors::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    professors::Entity,
                    professors::Column::Name,
                ))))
                .like(format!("%{}%", name.to_lowercase())),
            )
            .order_by_asc(professors::Column::Id)
            .all(db)
            .await?;
        if professors.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No professors found with '{name}' in their name"
            )));
        }
        Ok(professors)
    }

    pub async fn search_by_title(
        db: &DatabaseConnection,
        title: &str,
    ) -> ServiceResult<Vec<professors::Model>> {
        let professors = professors::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    professors::Entity,
                    professors::Column::Title,
                ))))
                .like(format!("%{}%", title.to_lowercase())),
            )
            .order_by_asc(professors::Column::Id)
            .all(db)
            .await?;
        if professors.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No professors found with title '{title}'"
            )));
        }
        Ok(professors)
    }

    pub async fn find_by_department(
        db: &DatabaseConnection,
        department_id: i32,
    ) -> ServiceResult<Vec<professors::Model>> {
        IntegrityGuard::require_department(db, department_id).await?;
        let professors = professors::Entity::find()
            .filter(professors::Column::DepartmentId.eq(department_id))
            .order_by_asc(professors::Column::Id)
            .all(db)
            .await?;
        if professors.is_empty() {
            return Err(ServiceError::not_found("The department has no professors"));
        }
        Ok(professors)
    }

    pub async fn list_active(db: &DatabaseConnection) -> ServiceResult<Vec<professors::Model>> {
        let professors = professors::Entity::find()
            .filter(professors::Column::Active.eq(true))
            .order_by_asc(professors::Column::Id)
            .all(db)
            .await?;
        if professors.is_empty() {
            return Err(ServiceError::not_found("No active professors found"));
        }
        Ok(professors)
    }

    pub async fn list_inactive(db: &DatabaseConnection) -> ServiceResult<Vec<professors::Model>> {
        let professors = professors::Entity::find()
            .filter(professors::Column::Active.eq(false))
            .order_by_asc(professors::Column::Id)
            .all(db)
            .await?;
        if professors.is_empty() {
            return Err(ServiceError::not_found("No inactive professors found"));
        }
        Ok(professors)
    }

    /// Courses taught by the professor. Unlike the course search endpoint,
    /// an empty list here is a valid answer.
    pub async fn courses_of(
        db: &DatabaseConnection,
        professor_id: i32,
    ) -> ServiceResult<Vec<courses::Model>> {
        IntegrityGuard::require_professor(db, professor_id).await?;
        IntegrityGuard::professor_assigned_courses(db, professor_id).await
    }
}
