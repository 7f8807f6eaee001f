use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::ids::{AccountId, RecordId, SubjectId};
use crate::validation::{parse_clock_time, validate_clock_time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TimetableEntry {
    pub id: RecordId,
    pub day: String,
    pub subject_id: SubjectId,
    #[sqlx(rename = "time_start")]
    pub start_time: String,
    #[sqlx(rename = "time_end")]
    pub end_time: String,
    pub room: String,
    pub teacher_id: AccountId,
    pub class_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_time_range", skip_on_field_errors = true))]
pub struct CreateTimetableEntryDto {
    #[validate(length(min = 1, message = "day is required"))]
    pub day: String,
    pub subject_id: SubjectId,
    #[validate(custom(function = "validate_clock_time"))]
    pub start_time: String,
    #[validate(custom(function = "validate_clock_time"))]
    pub end_time: String,
    #[serde(default)]
    pub room: String,
    pub teacher_id: AccountId,
    #[validate(length(min = 1, message = "class_name is required"))]
    pub class_name: String,
}

fn validate_time_range(dto: &CreateTimetableEntryDto) -> Result<(), ValidationError> {
    match (
        parse_clock_time(&dto.start_time),
        parse_clock_time(&dto.end_time),
    ) {
        (Some(start), Some(end)) if start < end => Ok(()),
        _ => Err(ValidationError::new("time_range")
            .with_message("start_time must be before end_time".into())),
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimetableQuery {
    pub class_name: Option<String>,
}
