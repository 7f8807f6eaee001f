use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::{AccountId, ClassId};
use mercury_auth::Role;

/// A school class (a group of students), e.g. "1A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1, max = 50, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassMember {
    pub id: i64,
    pub user_id: AccountId,
    pub class_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassMemberDto {
    pub user_id: AccountId,
    #[validate(length(min = 1, message = "class_name is required"))]
    pub class_name: String,
}

/// A class member joined with the member's account and profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassMemberInfo {
    pub user_id: AccountId,
    pub email: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassQuery {
    #[validate(length(min = 1, message = "class_name is required"))]
    pub class_name: String,
}
