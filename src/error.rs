//! Engine-wide error type.
//!
//! All failures are synchronous and fatal (no retry, no partial result) per
//! the three error kinds named in the spec: input validation, internal
//! mapping failures, and date-epoch violations. Probation termination is
//! *not* an error — it is carried as a remark on the affected period.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors the engine can return from [`crate::run_payroll`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// A required field was missing or held a value the engine cannot act on.
    #[error("invalid input for field `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A date fell before the engine's supported epoch.
    #[error("date {date} is before the supported epoch of 1980-01-01")]
    DateBeforeEpoch { date: NaiveDate },

    /// A scale could not be mapped across a commission transition.
    #[error("no mapping from {commission}-PC scale `{from_scale}` to the next commission's scale table")]
    ScaleMappingFailed { from_scale: String, commission: u8 },

    /// A grade pay value has no known pay-matrix level at the 6th→7th transition.
    #[error("grade pay {grade_pay} has no known 7th PC pay matrix level")]
    GradePayToLevelUnknown { grade_pay: u32 },

    /// A pay-matrix level has no stages defined.
    #[error("pay matrix has no stages defined for level {level}")]
    UnknownPayMatrixLevel { level: u32 },

    /// A scale identifier referenced by the input or a reference table does not exist.
    #[error("unknown scale id `{scale_id}`")]
    UnknownScale { scale_id: String },

    /// A scale string failed to parse.
    #[error("could not parse scale string `{raw}`: {reason}")]
    MalformedScale { raw: String, reason: String },
}
