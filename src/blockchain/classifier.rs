use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::fmt;

use crate::error::ApiError;

// Closed taxonomy of connection failures surfaced to the dispatcher layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RateLimit,
    Timeout,
    ConnectionLost,
    OversizedResponse,
    Default,
}

// A classified transport failure, preserving the original name and message
// for diagnostics
#[derive(Debug, Clone)]
pub struct ConnectionError {
    pub kind: ErrorKind,
    pub name: String,
    pub message: String,
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ConnectionError {}

lazy_static! {
    // The service does not expose status codes for most failure modes, so the
    // classifier keys off known message shapes
    static ref OVERSIZED_RE: Regex = Regex::new(r"limit exceeded").unwrap();
}

// Defines a classifier mapping raw transport failures to the closed taxonomy
pub struct ErrorClassifier {
    // Stores error kinds and their corresponding message patterns
    patterns: Vec<(ErrorKind, Regex)>,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorClassifier {
    // Initializes a classifier with the known failure-message patterns
    pub fn new() -> Self {
        let patterns = vec![
            // Rate limiting is reported with a fixed message prefix
            (
                ErrorKind::RateLimit,
                Regex::new(r"^Rate Limited at endpoint").unwrap(),
            ),
            // Timeouts vary by transport ("timeout of 30000ms exceeded",
            // "operation timed out")
            (ErrorKind::Timeout, Regex::new(r"timeout|timed out").unwrap()),
            // Dropped connections carry a fixed prefix
            (
                ErrorKind::ConnectionLost,
                Regex::new(r"^disconnected from ").unwrap(),
            ),
            // Over-limit block lookups; also the pagination-fallback trigger
            (ErrorKind::OversizedResponse, OVERSIZED_RE.clone()),
        ];

        ErrorClassifier { patterns }
    }

    // Classifies a raw failure by status code, then message pattern
    pub fn classify(&self, err: &ApiError) -> ConnectionError {
        // A rate-limit status code wins regardless of the message
        if err.status == Some(429) {
            return ConnectionError {
                kind: ErrorKind::RateLimit,
                name: err.name.clone(),
                message: err.message.clone(),
            };
        }

        // Match the message against the known patterns in order
        for (kind, regex) in &self.patterns {
            if regex.is_match(&err.message) {
                return ConnectionError {
                    kind: *kind,
                    name: err.name.clone(),
                    message: err.message.clone(),
                };
            }
        }

        // Anything unmatched falls to Default with the original diagnostics
        ConnectionError {
            kind: ErrorKind::Default,
            name: err.name.clone(),
            message: err.message.clone(),
        }
    }
}

// Whether a failed block lookup signals the over-limit condition that switches
// the fetcher onto the pagination path. Keyed off the message, not a status
// code, since the service does not expose one for this case.
pub fn is_oversized(err: &ApiError) -> bool {
    OVERSIZED_RE.is_match(&err.message)
}
