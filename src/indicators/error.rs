use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("insufficient data: need {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid period: {0}")]
    InvalidPeriod(usize),
}
