use database::entities::departments;
use database::services::department::{DepartmentPatch, NewDepartment};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDepartmentRequest {
    pub code: String,
    pub name: String,
}

impl From<CreateDepartmentRequest> for NewDepartment {
    fn from(req: CreateDepartmentRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
}

impl From<UpdateDepartmentRequest> for DepartmentPatch {
    fn from(req: UpdateDepartmentRequest) -> Self {
        Self { name: req.name }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DepartmentResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl From<departments::Model> for DepartmentResponse {
    fn from(department: departments::Model) -> Self {
        Self {
            id: department.id,
            code: department.code,
            name: department.name,
        }
    }
}
