use std::error::Error;
use std::fmt;

/// Errors raised by the MAD/GAD engines, the aggregation operators and the
/// classifier. Every variant is a contract violation detected synchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum LamdaError {
    /// Descriptor or row counts disagree between rho, x, y or MAD matrices.
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// A parameter (alpha, a rho entry, an input degree) is outside its interval.
    Range {
        name: &'static str,
        value: f64,
        interval: &'static str,
    },
    /// Input to the vectorization wrapper has more than two dimensions.
    Shape { ndim: usize },
    UnsupportedCriterion(String),
    /// Recognition or a threshold was requested before rho exists.
    NotFitted,
    EmptyInput(&'static str),
}

impl fmt::Display for LamdaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LamdaError::DimensionMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, found {}",
                context, expected, found
            ),
            LamdaError::Range {
                name,
                value,
                interval,
            } => write!(f, "{} = {} is outside {}", name, value, interval),
            LamdaError::Shape { ndim } => write!(
                f,
                "expected an array of 1 or 2 dimensions, got {} dimensions",
                ndim
            ),
            LamdaError::UnsupportedCriterion(name) => {
                write!(f, "unsupported recognition criterion: {}", name)
            }
            LamdaError::NotFitted => write!(f, "model has no rho parameters yet"),
            LamdaError::EmptyInput(what) => write!(f, "empty input: {}", what),
        }
    }
}

impl Error for LamdaError {}

pub type Result<T> = std::result::Result<T, LamdaError>;
