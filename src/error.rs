//! Error types returned by the big-integer arithmetic surface.

/// Errors reported at the boundary of the arithmetic API.
///
/// No arithmetic path aborts the host process on malformed input; every
/// failure is one of these reportable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// A hex string contained a character outside `[0-9a-fA-F]`.
    InvalidDigit,
    /// `copy_range` received `start`/`end` violating `0 <= start <= end <=
    /// digit_count`.
    InvalidRange,
    /// Division was given a zero or negative divisor or a negative
    /// dividend; modular exponentiation was given a negative base or
    /// exponent.
    DivisionDomain,
    /// Barrett reduction was given a dividend whose digit count exceeds
    /// `2 * digit_count(modulus)`.
    ReductionDomain,
}
