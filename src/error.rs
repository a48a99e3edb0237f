use thiserror::Error;

/// Errors that can stop the application from starting.
///
/// Drawing itself never fails; this only covers the native window.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to start the native window: {0}")]
    Launch(#[from] eframe::Error),
}

/// Result type for application start-up
pub type AppResult<T> = Result<T, AppError>;
