//! Mathematical utility functions.

use crate::{Error, Result};

/// Computes `accu * factor`, returning an error instead of wrapping if the result would
/// overflow the native size type.
///
/// Both operands are unsigned by construction of the signature; passing a signed quantity is a
/// programming error that the type system rejects, not a runtime condition. A zero accumulator
/// is trivially safe (the product is 0) and is handled before the quotient test, since
/// `usize::MAX / 0` is undefined.
///
/// The guard is the strict comparison `usize::MAX / accu > factor`. This is deliberately
/// conservative: a product that lands exactly on `usize::MAX` is rejected even though it would
/// fit. Callers fold dimension sizes, where that boundary is unreachable in practice, and the
/// strictness keeps the guard independent of the remainder of the division.
///
/// # Errors
///
/// Returns [`Error::Overflow`] naming both operands if the multiplication would overflow.
///
/// # Examples
///
/// ```rust
/// use fhecall::utils::checked_mul;
///
/// assert_eq!(checked_mul(6, 7).unwrap(), 42);
/// assert_eq!(checked_mul(0, u64::MAX).unwrap(), 0);
/// assert!(checked_mul(usize::MAX, 2).is_err());
/// ```
pub fn checked_mul(accu: usize, factor: u64) -> Result<usize> {
    if accu == 0 {
        return Ok(0);
    }

    let quotient = usize::MAX as u64 / accu as u64;
    if quotient > factor {
        #[allow(clippy::cast_possible_truncation)] // factor < usize::MAX / accu
        return Ok(accu * factor as usize);
    }

    Err(Error::Overflow {
        accumulator: accu as u64,
        factor,
    })
}
