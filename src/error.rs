use axum::{
    Json,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use magnus_shared::{Error, snake_to_camel};
use serde::Serialize;
use thiserror::Error;

pub const APP_NAME: &str = "magnusApp";

pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-magnusapp-alert");
pub const ERROR_HEADER: HeaderName = HeaderName::from_static("x-magnusapp-error");
pub const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-magnusapp-params");

#[derive(Error, Debug)]
pub enum ApiError {
    /// Failure while handling a request for `entity`.
    #[error("{source}")]
    Entity {
        entity: &'static str,
        #[source]
        source: Error,
    },

    #[error(transparent)]
    Shared(#[from] Error),
}

impl ApiError {
    pub fn bad_request(entity: &'static str, key: &'static str, message: impl Into<String>) -> Self {
        Self::Shared(Error::bad_request(entity, key, message))
    }
}

/// Attaches the entity name to errors coming out of a resource handler.
pub trait ResultExt<T> {
    fn entity(self, entity: &'static str) -> Result<T, ApiError>;
}

impl<T, E: Into<Error>> ResultExt<T> for Result<T, E> {
    fn entity(self, entity: &'static str) -> Result<T, ApiError> {
        self.map_err(|err| ApiError::Entity {
            entity,
            source: err.into(),
        })
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub object_name: String,
    pub field: String,
    pub message: String,
}

/// JSON problem body returned for every failed request.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

impl Problem {
    fn new(status: StatusCode, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            message: message.into(),
            entity_name: None,
            error_key: None,
            field_errors: None,
        }
    }

    fn alert(entity: &str, key: &str, title: String) -> Self {
        Self {
            entity_name: Some(entity.to_owned()),
            error_key: Some(key.to_owned()),
            ..Self::new(StatusCode::BAD_REQUEST, title, format!("error.{key}"))
        }
    }
}

fn field_errors(entity: &str, errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                object_name: entity.to_owned(),
                field: snake_to_camel(&field),
                message: error
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    fields
}

fn problem(entity: Option<&'static str>, error: Error) -> Problem {
    let object = entity.unwrap_or("request");

    match error {
        Error::Validate(errors) => Problem {
            field_errors: Some(field_errors(object, &errors)),
            ..Problem::new(
                StatusCode::BAD_REQUEST,
                "Method argument not valid",
                "error.validation",
            )
        },
        Error::NotFound { entity } => Problem {
            detail: Some(format!("{entity} not found")),
            ..Problem::new(StatusCode::NOT_FOUND, "Not Found", "error.http.404")
        },
        Error::BadRequest {
            entity,
            key,
            message,
        } => Problem::alert(entity, key, message),
        Error::Constraint(message) => {
            tracing::warn!(entity = object, "Constraint violation: {message}");
            Problem {
                detail: Some(message),
                ..Problem::alert(object, "constraintviolation", "Constraint violation".to_owned())
            }
        }
        Error::Json(err) => Problem {
            detail: Some(err.to_string()),
            ..Problem::new(StatusCode::BAD_REQUEST, "Bad Request", "error.http.400")
        },
        Error::Server(message) => {
            tracing::error!(entity = object, "Internal error: {message}");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "error.http.500",
            )
        }
        Error::Unknown(err) => {
            tracing::error!(entity = object, "Internal error: {err:?}");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "error.http.500",
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let problem = match self {
            ApiError::Entity { entity, source } => problem(Some(entity), source),
            ApiError::Shared(source) => problem(None, source),
        };

        let mut headers = HeaderMap::new();
        if let (Some(key), Some(entity)) = (&problem.error_key, &problem.entity_name)
            && let (Ok(key), Ok(entity)) = (
                HeaderValue::from_str(&format!("error.{key}")),
                HeaderValue::from_str(entity),
            )
        {
            headers.insert(ERROR_HEADER, key);
            headers.insert(PARAMS_HEADER, entity);
        }

        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, headers, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(required)]
        event_date: Option<u8>,
        #[validate(length(max = 3))]
        name: Option<String>,
    }

    async fn body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_problem_lists_fields() {
        let errors = Sample {
            event_date: None,
            name: Some("Gala dinner".to_owned()),
        }
        .validate()
        .unwrap_err();

        let response = ApiError::Entity {
            entity: "budget",
            source: errors.into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body(response).await;
        assert_eq!(body["message"], "error.validation");
        assert_eq!(body["fieldErrors"][0]["objectName"], "budget");
        assert_eq!(body["fieldErrors"][0]["field"], "eventDate");
        assert_eq!(body["fieldErrors"][0]["message"], "required");
        assert_eq!(body["fieldErrors"][1]["field"], "name");
    }

    #[tokio::test]
    async fn test_bad_request_alert_headers() {
        let response = ApiError::bad_request("budget", "idexists", "A new budget cannot already have an ID")
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[&ERROR_HEADER], "error.idexists");
        assert_eq!(response.headers()[&PARAMS_HEADER], "budget");

        let body = body(response).await;
        assert_eq!(body["errorKey"], "idexists");
        assert_eq!(body["entityName"], "budget");
        assert_eq!(body["title"], "A new budget cannot already have an ID");
    }

    #[tokio::test]
    async fn test_internal_errors_hide_details() {
        let response = ApiError::Shared(Error::Server("disk on fire".to_owned())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body(response).await;
        assert_eq!(body["message"], "error.http.500");
        assert!(!body.to_string().contains("disk on fire"));
    }
}
