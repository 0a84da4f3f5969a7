/// Errors produced by fixed-width integer and prime field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("arithmetic overflow")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("value has no inverse modulo the modulus")]
    NotInvertible,
    #[error("input of {len} bytes exceeds the {max}-byte width")]
    InputTooLong { len: usize, max: usize },
    #[error("invalid digit in integer literal")]
    InvalidDigit,
    #[error("value is not reduced modulo the field modulus")]
    NotReduced,
    #[error("modulus must be odd and greater than two")]
    InvalidModulus,
    /// The low half of a Montgomery reduction was non-zero, meaning the
    /// reduction constants or the inputs are inconsistent.
    #[error("montgomery reduction left a non-zero low half")]
    NonCanonicalResidue,
    #[error("window size {0} is out of range")]
    InvalidWindow(u32),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Errors produced by elliptic curve construction, decoding and operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("generator failed validation")]
    InvalidGenerator,
    /// Edwards coefficients need a square `a` and a non-square `d` for the
    /// addition law to be complete.
    #[error("coefficients do not define a complete Edwards curve")]
    IncompleteCurve,
    #[error("malformed point encoding")]
    InvalidEncoding,
    #[error("window size {0} is out of range")]
    InvalidWindow(u32),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
