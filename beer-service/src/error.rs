use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::docs::DocsError;
use crate::domain::repositories::RepositoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Documentation error: {0}")]
    Docs(#[from] DocsError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl AppError {
    /// 校验失败时按字段展开，字段名与 JSON 中的名称一致
    pub fn field_violations(&self) -> Vec<FieldViolation> {
        let AppError::Validation(errors) = self else {
            return Vec::new();
        };

        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = wire_name(&field);
                errors.iter().map(move |error| FieldViolation {
                    field: field.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        violations
    }

    /// 响应体中的 details，校验错误按 JSON 字段名展开
    pub fn details(&self) -> String {
        match self {
            AppError::Validation(_) => self
                .field_violations()
                .iter()
                .map(|violation| format!("{}: {}", violation.field, violation.message))
                .collect::<Vec<_>>()
                .join("; "),
            _ => self.to_string(),
        }
    }
}

/// `beer_name` -> `beerName`，已经是驼峰的名称原样返回
pub fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            name.extend(ch.to_uppercase());
            upper = false;
        } else {
            name.push(ch);
        }
    }
    name
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        let message = error.to_string();
        match error {
            RepositoryError::Conflict { .. } => AppError::Conflict(message),
            RepositoryError::Database(e) => AppError::Database(e),
            RepositoryError::InvalidRecord(_) => AppError::Internal(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Resource not found"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation error"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error"),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO error"),
            AppError::Docs(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Documentation error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let mut error = json!({
            "message": error_message,
            "details": self.details()
        });

        let violations = self.field_violations();
        if !violations.is_empty() {
            error["fields"] = json!(violations);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_wire_name() {
        assert_eq!(wire_name("beer_name"), "beerName");
        assert_eq!(wire_name("last_modified_date"), "lastModifiedDate");
        assert_eq!(wire_name("upc"), "upc");
        assert_eq!(wire_name("beerStyle"), "beerStyle");
    }

    #[test]
    fn test_error_into_response() {
        let response = AppError::NotFound("beer".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Conflict("stale".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::BadRequest("broken json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_field_violations() {
        let mut errors = ValidationErrors::new();
        errors.add("upc", ValidationError::new("range"));
        errors.add(
            "beer_style",
            ValidationError::new("beer_style").with_message("unknown beer style 'CIDER'".into()),
        );

        let error = AppError::Validation(errors);
        let violations = error.field_violations();

        assert_eq!(
            violations,
            vec![
                FieldViolation {
                    field: "beerStyle".to_string(),
                    message: "unknown beer style 'CIDER'".to_string(),
                },
                FieldViolation {
                    field: "upc".to_string(),
                    message: "range".to_string(),
                },
            ]
        );

        assert_eq!(error.details(), "beerStyle: unknown beer style 'CIDER'; upc: range");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_details_for_other_errors() {
        let error = AppError::NotFound("Beer with ID 1 not found".to_string());
        assert_eq!(error.details(), "Not found: Beer with ID 1 not found");
    }

    #[test]
    fn test_repository_conflict_maps_to_conflict() {
        let error: AppError = RepositoryError::Conflict {
            id: uuid::Uuid::nil(),
            expected: 1,
            found: 2,
        }
        .into();
        assert!(matches!(error, AppError::Conflict(_)));
    }
}
