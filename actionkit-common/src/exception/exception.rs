use std::backtrace::{Backtrace, BacktraceStatus};
use std::sync::Arc;

use thiserror::Error;

pub type KitResult<T> = std::result::Result<T, ErrorCode>;

type BoxedCause = Box<dyn std::error::Error + Sync + Send>;

#[derive(Error)]
pub struct ErrorCode {
    code: u16,
    display_text: String,
    #[source]
    cause: Option<BoxedCause>,
    backtrace: Option<ErrorCodeBacktrace>,
}

impl ErrorCode {
    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn message(&self) -> String {
        self.cause
            .as_ref()
            .map(|cause| format!("{}: {}", self.display_text, cause))
            .unwrap_or_else(|| self.display_text.clone())
    }

    /// The error this one wraps, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Sync + Send + 'static)> {
        self.cause.as_deref()
    }

    /// Attaches `cause` as the underlying error, keeping code and display text.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Sync + Send + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn from_std_error<T: std::error::Error>(error: T) -> Self {
        ErrorCode::UnImplement(error.to_string())
    }

    pub fn create(
        code: u16,
        display_text: String,
        cause: Option<BoxedCause>,
        backtrace: Option<ErrorCodeBacktrace>,
    ) -> ErrorCode {
        ErrorCode {
            code,
            display_text,
            cause,
            backtrace,
        }
    }
}

impl std::fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Code: {}, displayText = {}.",
            self.code(),
            self.message(),
        )?;

        match self.backtrace.as_ref() {
            None => Ok(()),
            Some(ErrorCodeBacktrace::Origin(backtrace)) => {
                if backtrace.status() == BacktraceStatus::Disabled {
                    write!(
                        f,
                        "\n\n<Backtrace disabled by default. Please use RUST_BACKTRACE=1 to enable> "
                    )
                } else {
                    write!(f, "\n\n{}", backtrace)
                }
            }
            Some(ErrorCodeBacktrace::Serialized(backtrace)) => write!(f, "\n\n{}", backtrace),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Code: {}, displayText = {}.",
            self.code(),
            self.message(),
        )
    }
}

/// * ErrorCodeBacktrace  **

#[derive(Clone)]
pub enum ErrorCodeBacktrace {
    Serialized(Arc<String>),
    Origin(Arc<Backtrace>),
}

impl std::fmt::Display for ErrorCodeBacktrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCodeBacktrace::Serialized(backtrace) => write!(f, "{}", backtrace),
            ErrorCodeBacktrace::Origin(backtrace) => write!(f, "{:?}", backtrace),
        }
    }
}
