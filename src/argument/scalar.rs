//! Scalar argument values.
//!
//! A scalar argument is a single integer with an explicit logical precision. The precision may
//! be narrower than the backing storage width; a circuit operating on 4-bit encrypted values
//! still receives its inputs through a native 8-bit (or wider) host integer. Values are
//! normalized at construction: bits above the logical precision are cleared and never stored.

use crate::{argument::IntWidth, Error, Result};

/// The raw payload of a scalar argument: one integer in one of the eight backing
/// representations.
///
/// This is a plain data carrier; equality is structural (same variant, same bits). The
/// value-only, width-agnostic comparison lives on [`ScalarArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarData {
    /// 8-bit signed payload
    I8(i8),
    /// 8-bit unsigned payload
    U8(u8),
    /// 16-bit signed payload
    I16(i16),
    /// 16-bit unsigned payload
    U16(u16),
    /// 32-bit signed payload
    I32(i32),
    /// 32-bit unsigned payload
    U32(u32),
    /// 64-bit signed payload
    I64(i64),
    /// 64-bit unsigned payload
    U64(u64),
}

impl ScalarData {
    /// The backing width of this payload.
    #[must_use]
    pub fn width(&self) -> IntWidth {
        match self {
            ScalarData::I8(_) => IntWidth::I8,
            ScalarData::U8(_) => IntWidth::U8,
            ScalarData::I16(_) => IntWidth::I16,
            ScalarData::U16(_) => IntWidth::U16,
            ScalarData::I32(_) => IntWidth::I32,
            ScalarData::U32(_) => IntWidth::U32,
            ScalarData::I64(_) => IntWidth::I64,
            ScalarData::U64(_) => IntWidth::U64,
        }
    }

    /// The numeric value, widened losslessly to `i128`.
    ///
    /// Signed payloads sign-extend, unsigned payloads zero-extend; every backing width fits
    /// without loss, so this is the common domain for cross-width comparison.
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        match self {
            ScalarData::I8(v) => i128::from(*v),
            ScalarData::U8(v) => i128::from(*v),
            ScalarData::I16(v) => i128::from(*v),
            ScalarData::U16(v) => i128::from(*v),
            ScalarData::I32(v) => i128::from(*v),
            ScalarData::U32(v) => i128::from(*v),
            ScalarData::I64(v) => i128::from(*v),
            ScalarData::U64(v) => i128::from(*v),
        }
    }

    /// Keeps the low `precision` bits of the two's-complement bit pattern and clears the rest.
    ///
    /// Only called with `precision` strictly below the backing width, so the shift cannot
    /// overflow and the mask always fits the payload type.
    #[allow(clippy::cast_possible_truncation)] // mask fits the payload width by precondition
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)] // masking the bit pattern
    pub(crate) fn mask_to(self, precision: u32) -> ScalarData {
        let mask = (1u64 << precision) - 1;
        match self {
            ScalarData::I8(v) => ScalarData::I8((v as u8 & mask as u8) as i8),
            ScalarData::U8(v) => ScalarData::U8(v & mask as u8),
            ScalarData::I16(v) => ScalarData::I16((v as u16 & mask as u16) as i16),
            ScalarData::U16(v) => ScalarData::U16(v & mask as u16),
            ScalarData::I32(v) => ScalarData::I32((v as u32 & mask as u32) as i32),
            ScalarData::U32(v) => ScalarData::U32(v & mask as u32),
            ScalarData::I64(v) => ScalarData::I64((v as u64 & mask) as i64),
            ScalarData::U64(v) => ScalarData::U64(v & mask),
        }
    }
}

/// A single plaintext integer argument with an explicit logical precision.
///
/// The precision is the number of low-order bits that are logically significant; it defaults
/// to the full backing width and may be narrowed at construction, in which case the stored
/// value is masked down to those bits. Instances are immutable once built.
///
/// Equality between two scalar arguments compares only the numeric value: two arguments with
/// different backing widths or different precisions are equal whenever they hold the same
/// number.
///
/// # Examples
///
/// ```rust
/// use fhecall::{ScalarArgument, ScalarData};
///
/// let a = ScalarArgument::new(ScalarData::U8(42));
/// let b = ScalarArgument::new(ScalarData::U64(42));
/// assert_eq!(a, b);
///
/// let narrowed = ScalarArgument::with_precision(ScalarData::U8(0b1111_0101), 4)?;
/// assert_eq!(narrowed.data(), ScalarData::U8(0b0000_0101));
/// # Ok::<(), fhecall::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScalarArgument {
    data: ScalarData,
    precision: u32,
}

impl ScalarArgument {
    /// Creates a scalar argument with full backing precision.
    #[must_use]
    pub fn new(data: ScalarData) -> Self {
        ScalarArgument {
            data,
            precision: data.width().bits(),
        }
    }

    /// Creates a scalar argument whose logical precision may be narrower than the backing
    /// width.
    ///
    /// If `precision` is below the backing width, the stored value is truncated to its low
    /// `precision` bits at construction; querying the value later always observes the
    /// normalized form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] if `precision` is 0 or exceeds the backing width.
    pub fn with_precision(data: ScalarData, precision: u32) -> Result<Self> {
        let bits = data.width().bits();
        if precision == 0 || precision > bits {
            return Err(Error::InvalidPrecision { precision, bits });
        }

        let data = if precision < bits {
            data.mask_to(precision)
        } else {
            data
        };

        Ok(ScalarArgument { data, precision })
    }

    /// The stored payload, normalized to the logical precision.
    #[must_use]
    pub fn data(&self) -> ScalarData {
        self.data
    }

    /// The backing width of the payload.
    #[must_use]
    pub fn width(&self) -> IntWidth {
        self.data.width()
    }

    /// The logical precision in bits.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// The numeric value, widened losslessly to `i128`.
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        self.data.as_i128()
    }

    /// The numeric value as `u64`, or `None` if it is negative.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        u64::try_from(self.as_i128()).ok()
    }

    /// The numeric value as `i64`, or `None` if it does not fit.
    ///
    /// Only a `u64` payload above `i64::MAX` fails the conversion.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        i64::try_from(self.as_i128()).ok()
    }
}

impl PartialEq for ScalarArgument {
    fn eq(&self, other: &Self) -> bool {
        self.as_i128() == other.as_i128()
    }
}

impl Eq for ScalarArgument {}

impl From<i8> for ScalarData {
    fn from(value: i8) -> Self {
        ScalarData::I8(value)
    }
}

impl From<u8> for ScalarData {
    fn from(value: u8) -> Self {
        ScalarData::U8(value)
    }
}

impl From<i16> for ScalarData {
    fn from(value: i16) -> Self {
        ScalarData::I16(value)
    }
}

impl From<u16> for ScalarData {
    fn from(value: u16) -> Self {
        ScalarData::U16(value)
    }
}

impl From<i32> for ScalarData {
    fn from(value: i32) -> Self {
        ScalarData::I32(value)
    }
}

impl From<u32> for ScalarData {
    fn from(value: u32) -> Self {
        ScalarData::U32(value)
    }
}

impl From<i64> for ScalarData {
    fn from(value: i64) -> Self {
        ScalarData::I64(value)
    }
}

impl From<u64> for ScalarData {
    fn from(value: u64) -> Self {
        ScalarData::U64(value)
    }
}

impl From<i8> for ScalarArgument {
    fn from(value: i8) -> Self {
        ScalarArgument::new(ScalarData::I8(value))
    }
}

impl From<u8> for ScalarArgument {
    fn from(value: u8) -> Self {
        ScalarArgument::new(ScalarData::U8(value))
    }
}

impl From<i16> for ScalarArgument {
    fn from(value: i16) -> Self {
        ScalarArgument::new(ScalarData::I16(value))
    }
}

impl From<u16> for ScalarArgument {
    fn from(value: u16) -> Self {
        ScalarArgument::new(ScalarData::U16(value))
    }
}

impl From<i32> for ScalarArgument {
    fn from(value: i32) -> Self {
        ScalarArgument::new(ScalarData::I32(value))
    }
}

impl From<u32> for ScalarArgument {
    fn from(value: u32) -> Self {
        ScalarArgument::new(ScalarData::U32(value))
    }
}

impl From<i64> for ScalarArgument {
    fn from(value: i64) -> Self {
        ScalarArgument::new(ScalarData::I64(value))
    }
}

impl From<u64> for ScalarArgument {
    fn from(value: u64) -> Self {
        ScalarArgument::new(ScalarData::U64(value))
    }
}
