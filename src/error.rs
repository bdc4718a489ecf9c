use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers every failure mode of the argument value model: overflow while sizing a
/// tensor, shape contract violations during construction, and invalid precision requests for
/// scalar values. Each variant carries the offending operands as structured fields; the
/// human-readable message is only rendered when the error is displayed.
///
/// Note that a failed downcast (asking an [`crate::Argument`] for a kind it does not hold) is
/// *not* represented here; it is an ordinary `None` result, expected control flow rather than
/// a failure.
///
/// # Examples
///
/// ```rust
/// use fhecall::{Error, TensorArgument};
///
/// match TensorArgument::from_slice(&[1u8, 2, 3], vec![2, 2]) {
///     Ok(_) => unreachable!(),
///     Err(Error::ShapeMismatch { expected, actual }) => {
///         assert_eq!((expected, actual), (4, 3));
///     }
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Multiplying the two operands would overflow the native size type.
    ///
    /// Raised by the overflow-checked multiplication primitive and propagated unmodified by
    /// every layer that depends on tensor element counts. Recoverable; callers decide whether
    /// to reject the shape or report it upward.
    ///
    /// # Fields
    ///
    /// * `accumulator` - The running product at the point of failure
    /// * `factor` - The dimension size that could not be folded in
    #[error("Multiplying value {accumulator} with {factor} would cause an overflow")]
    Overflow {
        /// The running product at the point of failure
        accumulator: u64,
        /// The factor that could not be multiplied in without overflowing
        factor: u64,
    },

    /// A tensor dimension size was negative.
    ///
    /// Dimension sizes are logically unsigned magnitudes carried in a signed host
    /// representation; a negative size is a caller contract violation and is rejected before
    /// any element-count arithmetic is attempted.
    #[error("Tensor dimension of size {0} is negative")]
    NegativeDimension(i64),

    /// A tensor buffer length did not match the product of the dimension sizes.
    ///
    /// Every construction path, copying or moving, validates that the linear buffer holds
    /// exactly `product(dimensions)` values.
    #[error("Tensor buffer holds {actual} values but the shape requires {expected}")]
    ShapeMismatch {
        /// Element count required by the dimension sizes
        expected: usize,
        /// Element count actually present in the buffer
        actual: usize,
    },

    /// A scalar precision was outside the valid range for its backing width.
    ///
    /// The logical precision of a scalar must be between 1 and the bit width of the backing
    /// integer, inclusive.
    #[error("Precision {precision} is out of range for a {bits}-bit backing value")]
    InvalidPrecision {
        /// The requested precision in bits
        precision: u32,
        /// The bit width of the backing integer type
        bits: u32,
    },
}
