//! Boxed error type for the binary shell and config loading.
//!
//! The list view itself never fails; only reading config files and driving
//! the terminal can. Those errors are boxed and tagged with what was being
//! attempted, e.g. `read theme ~/.config/user-list-tui/theme.conf: ...`.

use std::error::Error;
use std::fmt;

pub type DynError = Box<dyn Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

/// Tag a failing `Result` with the operation that produced it.
pub trait Context<T> {
    fn with_ctx<F: FnOnce() -> String>(self, what: F) -> Result<T>;
}

/// An error prefixed with the operation it interrupted.
#[derive(Debug)]
pub struct ContextError {
    pub what: String,
    pub cause: DynError,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.what, self.cause)
    }
}

impl Error for ContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn with_ctx<F: FnOnce() -> String>(self, what: F) -> Result<T> {
        self.map_err(|cause| -> DynError {
            Box::new(ContextError {
                what: what(),
                cause: Box::new(cause),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_cause() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = res.with_ctx(|| "read theme /nope".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "read theme /nope: gone");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("gone"));
    }
}
