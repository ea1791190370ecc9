use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Calendar error: {0}")]
    Calendar(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn calendar<S: Into<String>>(msg: S) -> Self {
        Self::Calendar(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the message can be shown to a user as-is.
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::Io(_) | Self::Json(_) => false,
            Self::Calendar(_) | Self::InvalidInput(_) | Self::Config(_) => true,
        }
    }

    pub fn to_safe_string(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            match self {
                Self::Io(_) => "File operation failed".to_string(),
                Self::Json(_) => "Could not read JSON data".to_string(),
                _ => self.to_string(),
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
