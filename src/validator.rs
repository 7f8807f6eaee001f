use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use mercury_core::AppError;

/// Joins every validation message into one line, ordered by field name.
fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<(String, String)> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| {
            let field = field.to_string();
            let list = match kind {
                validator::ValidationErrorsKind::Field(list) => list.clone(),
                validator::ValidationErrorsKind::Struct(nested) => nested
                    .field_errors()
                    .into_values()
                    .flat_map(|list| list.iter().cloned())
                    .collect(),
                validator::ValidationErrorsKind::List(_) => Vec::new(),
            };
            list.into_iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.clone(), message)
            })
        })
        .collect();

    messages.sort();
    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Json<T>` that also runs `T::validate()`. Every rejection is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::bad_request(anyhow!("{} is required", field));
                }

                if error_msg.contains("unknown field") {
                    let field = error_msg
                        .split("unknown field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::bad_request(anyhow!("Unknown field: {}", field));
                }

                if error_msg.contains("invalid type") || error_msg.contains("unknown variant") {
                    return AppError::bad_request(anyhow!("Invalid field type in request"));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

/// `Query<T>` that also runs `T::validate()`. Every rejection is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();
                match error_msg.split("missing field `").nth(1) {
                    Some(rest) => {
                        let field = rest.split('`').next().unwrap_or("unknown");
                        AppError::bad_request(anyhow!("{} is required", field))
                    }
                    None => AppError::bad_request(anyhow!("Invalid query parameters")),
                }
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercury_models::RegisterRequest;

    #[test]
    fn test_format_errors_lists_every_missing_field_in_order() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        let errors = request.validate().unwrap_err();

        assert_eq!(
            format_errors(&errors),
            "first_name is required, last_name is required, password is required, role is required"
        );
    }
}
