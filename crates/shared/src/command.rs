#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{message}")]
    BadRequest {
        entity: &'static str,
        key: &'static str,
        message: String,
    },

    #[error("{0}")]
    Constraint(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn bad_request(entity: &'static str, key: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            entity,
            key,
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        if let Some(db) = value.as_database_error()
            && (db.is_foreign_key_violation() || db.is_unique_violation() || db.is_check_violation())
        {
            return Self::Constraint(db.message().to_owned());
        }

        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}
