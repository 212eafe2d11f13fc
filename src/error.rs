use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid filter spec: {0}")]
    InvalidFilterSpec(String),

    #[error("Filter design failed: {0}")]
    FilterDesign(String),

    #[error("Frame has no \"{0}\" column")]
    MissingField(String),

    #[error("Index length {index} does not match value length {values}")]
    LengthMismatch { index: usize, values: usize },

    #[error("Plot rendering failed: {0}")]
    Plot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for FilterError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        FilterError::Plot(format!("{value:?}"))
    }
}

impl From<image::ImageError> for FilterError {
    fn from(value: image::ImageError) -> Self {
        FilterError::Plot(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
