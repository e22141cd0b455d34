use plotters::drawing::DrawingAreaErrorKind;

/// Errors that can occur while rendering charts
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// I/O error creating the output directory
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error reported by the drawing backend
    #[error("Drawing error: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(e.to_string())
    }
}
