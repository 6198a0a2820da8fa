//! Context helpers for I/O results crossing into the application layer.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Attach a description to an `io::Result` so failures name what was being done.
pub trait IoResultExt<T> {
    /// `action` and `path` are joined as `"{action}: {path}"`, e.g. `read dataset: chars.csv`.
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Console reads and writes have no path; the action alone is the context.
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| failed(format!("{}: {}", action, path.display()), e))
    }

    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| failed(action.to_string(), e))
    }
}

fn failed(context: String, source: io::Error) -> ApplicationError {
    ApplicationError::OperationFailed {
        context,
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_path_context_then_message_names_action_and_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

        let err = result
            .with_path_context("read dataset", Path::new("chars.csv"))
            .unwrap_err();

        assert_eq!(err.to_string(), "operation failed: read dataset: chars.csv");
    }
}
