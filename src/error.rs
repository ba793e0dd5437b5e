use thiserror::Error;

pub type TourResult<T> = Result<T, TourError>;

/// Failures a demo can recover from locally.
///
/// Each variant is terminal to the single operation that raised it; callers
/// report it and carry on with the next step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TourError {
    #[error("cannot convert '{input}' into {target}")]
    Parse { input: String, target: &'static str },

    #[error("resource '{name}' has already been disposed")]
    Disposed { name: String },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{what} is out of range: {value}")]
    OutOfRange { what: &'static str, value: String },

    #[error("invalid settings: {0}")]
    Config(String),
}

impl TourError {
    pub fn parse(input: impl Into<String>, target: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            target,
        }
    }

    pub fn disposed(name: impl Into<String>) -> Self {
        Self::Disposed { name: name.into() }
    }

    pub fn out_of_range(what: &'static str, value: impl ToString) -> Self {
        Self::OutOfRange {
            what,
            value: value.to_string(),
        }
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed { .. })
    }
}

impl From<toml::de::Error> for TourError {
    fn from(err: toml::de::Error) -> Self {
        TourError::Config(err.to_string())
    }
}
