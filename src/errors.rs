use thiserror::Error;

/// Top-level error type of the crate.
#[derive(Error, Debug)]
pub enum HeliposError {
    #[error("VSOP87 format error: {0}")]
    Vsop87Format(#[from] Vsop87FormatError),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

/// Structural or content violation in a VSOP87B data file.
///
/// Carries the 1-based number of the offending line together with the
/// specific cause. The loader aborts at the first such error and never
/// returns a partially populated model.
#[derive(Error, Debug, PartialEq)]
#[error("line {line}: {kind}")]
pub struct Vsop87FormatError {
    /// 1-based line number in the data source.
    pub line: usize,
    pub kind: Vsop87FormatErrorKind,
}

impl Vsop87FormatError {
    pub(crate) fn new(line: usize, kind: Vsop87FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Causes of [`Vsop87FormatError`].
#[derive(Error, Debug, PartialEq)]
pub enum Vsop87FormatErrorKind {
    #[error("expected format version '{expected}', found '{found}'")]
    VersionMismatch { expected: char, found: char },

    #[error("expected body '{expected}', found '{found}'")]
    BodyMismatch { expected: &'static str, found: String },

    #[error("declared term count {declared} exceeds the {remaining} remaining lines")]
    UnexpectedEndOfInput { declared: usize, remaining: usize },

    #[error("invalid power-of-time index '{0}'")]
    InvalidPowerIndex(char),

    #[error("invalid term count '{0}'")]
    InvalidTermCount(String),

    #[error("invalid {field} field '{value}'")]
    InvalidNumericField { field: &'static str, value: String },

    #[error("record shorter than the fixed 132-column layout")]
    TruncatedRecord,
}
