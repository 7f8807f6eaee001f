use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::ids::{AccountId, RecordId, SubjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum GradeType {
    /// A mark that must parse as a number, e.g. `4.5`.
    Numeric,
    /// Free-form teacher comment.
    Comment,
    /// School-specific mark such as `+` or `-`.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Grade {
    pub id: RecordId,
    pub user_id: AccountId,
    pub subject_id: SubjectId,
    pub grade: String,
    pub grade_type: GradeType,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_grade_value", skip_on_field_errors = true))]
pub struct CreateGradeDto {
    pub user_id: AccountId,
    pub subject_id: SubjectId,
    #[validate(length(min = 1, max = 500, message = "grade is required"))]
    pub grade: String,
    pub grade_type: GradeType,
    pub date: NaiveDate,
}

fn validate_grade_value(dto: &CreateGradeDto) -> Result<(), ValidationError> {
    let is_number = dto
        .grade
        .trim()
        .parse::<f64>()
        .is_ok_and(f64::is_finite);
    if dto.grade_type == GradeType::Numeric && !is_number {
        return Err(ValidationError::new("numeric_grade")
            .with_message("numeric grade must be a number".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(grade: &str, grade_type: GradeType) -> CreateGradeDto {
        CreateGradeDto {
            user_id: AccountId(1),
            subject_id: SubjectId(1),
            grade: grade.to_string(),
            grade_type,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_numeric_grade_must_parse() {
        assert!(dto("4.5", GradeType::Numeric).validate().is_ok());
        assert!(dto("five", GradeType::Numeric).validate().is_err());
        for not_finite in ["NaN", "inf", "-infinity"] {
            assert!(dto(not_finite, GradeType::Numeric).validate().is_err(), "{}", not_finite);
        }
    }

    #[test]
    fn test_comment_grade_accepts_text() {
        assert!(dto("Great essay", GradeType::Comment).validate().is_ok());
        assert!(dto("+", GradeType::Custom).validate().is_ok());
    }

    #[test]
    fn test_grade_type_wire_format() {
        assert_eq!(serde_json::to_string(&GradeType::Numeric).unwrap(), "\"numeric\"");
        assert!(serde_json::from_str::<GradeType>("\"letter\"").is_err());
    }
}
