use std::error::Error;
use std::fmt;

// Raw transport failure as reported by the indexer service or the HTTP layer.
// Carries the original error name and message so the classifier can preserve
// them for diagnostics (see blockchain::classifier).
#[derive(Debug, Clone)]
pub struct ApiError {
    pub name: String,
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError {
            name: name.into(),
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(name: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        ApiError {
            name: name.into(),
            message: message.into(),
            status: Some(status),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({}): {}", self.name, code, self.message),
            None => write!(f, "{}: {}", self.name, self.message),
        }
    }
}

impl Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError {
            name: "RequestError".to_string(),
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}
