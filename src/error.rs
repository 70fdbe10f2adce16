use std::io;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Everything that can stop the walkthrough binary.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to install the log subscriber: {0}")]
    Logging(#[from] TryInitError),

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: DemoError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, DemoError::Stdout(_)));
        assert_eq!(err.to_string(), "Failed to write to stdout: closed");
    }
}
