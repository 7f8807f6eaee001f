use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{AccountId, SubjectId};

/// A subject taught to one class by one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub class_name: String,
    pub teacher_id: AccountId,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectDto {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "class_name is required"))]
    pub class_name: String,
    pub teacher_id: AccountId,
}

/// Enrols a student in a subject.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentSubjectDto {
    pub user_id: AccountId,
    pub subject_id: SubjectId,
}
