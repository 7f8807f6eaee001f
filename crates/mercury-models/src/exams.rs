use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::{AccountId, RecordId, SubjectId};

/// An exam, test or quiz scheduled for a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exam {
    pub id: RecordId,
    pub class_name: String,
    pub subject_id: SubjectId,
    pub teacher_id: AccountId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub exam_type: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExamDto {
    #[validate(length(min = 1, message = "class_name is required"))]
    pub class_name: String,
    pub subject_id: SubjectId,
    pub teacher_id: AccountId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type is required"))]
    pub exam_type: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExamQuery {
    pub class_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_type_uses_type_key() {
        let dto: CreateExamDto = serde_json::from_str(
            r#"{"class_name":"1A","subject_id":1,"teacher_id":2,"date":"2025-05-10","type":"quiz"}"#,
        )
        .unwrap();
        assert_eq!(dto.exam_type, "quiz");
        assert_eq!(dto.description, "");
        assert!(dto.validate().is_ok());
    }
}
