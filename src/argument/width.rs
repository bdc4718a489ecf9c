//! Backing integer widths for argument values.
//!
//! Every scalar and tensor argument is physically stored in one of eight fixed-size integer
//! representations. [`IntWidth`] enumerates them in the canonical order used by type-name
//! resolution, so iterating the enum visits the widths in the same deterministic sequence that
//! signatures are rendered and matched in.

use std::fmt;

use strum::{EnumCount, EnumIter};

/// The backing width/signedness combinations supported for argument values.
///
/// The declaration order is significant: it is the canonical resolver order, alternating
/// signed/unsigned from the narrowest width to the widest. [`IntWidth::iter`] (via
/// [`strum::IntoEnumIterator`]) visits the variants in exactly this order, which tests and
/// diagnostics rely on for determinism.
///
/// # Examples
///
/// ```rust
/// use fhecall::IntWidth;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(IntWidth::U32.bits(), 32);
/// assert!(!IntWidth::U32.is_signed());
/// assert_eq!(IntWidth::iter().count(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum IntWidth {
    /// 8-bit signed backing integer
    I8,
    /// 8-bit unsigned backing integer
    U8,
    /// 16-bit signed backing integer
    I16,
    /// 16-bit unsigned backing integer
    U16,
    /// 32-bit signed backing integer
    I32,
    /// 32-bit unsigned backing integer
    U32,
    /// 64-bit signed backing integer
    I64,
    /// 64-bit unsigned backing integer
    U64,
}

impl IntWidth {
    /// The number of bits in the backing representation.
    #[must_use]
    pub fn bits(&self) -> u32 {
        match self {
            IntWidth::I8 | IntWidth::U8 => 8,
            IntWidth::I16 | IntWidth::U16 => 16,
            IntWidth::I32 | IntWidth::U32 => 32,
            IntWidth::I64 | IntWidth::U64 => 64,
        }
    }

    /// Whether the backing representation is signed.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            IntWidth::I8 | IntWidth::I16 | IntWidth::I32 | IntWidth::I64
        )
    }

    /// The canonical semantic name of the backing type, as rendered in signatures.
    ///
    /// These are the names the compiled-circuit boundary uses for interface matching
    /// (`"int8_t"`, `"uint8_t"`, ... `"int64_t"`, `"uint64_t"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            IntWidth::I8 => "int8_t",
            IntWidth::U8 => "uint8_t",
            IntWidth::I16 => "int16_t",
            IntWidth::U16 => "uint16_t",
            IntWidth::I32 => "int32_t",
            IntWidth::U32 => "uint32_t",
            IntWidth::I64 => "int64_t",
            IntWidth::U64 => "uint64_t",
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_width_count() {
        assert_eq!(IntWidth::COUNT, 8);
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = IntWidth::iter().map(|w| w.name()).collect();
        assert_eq!(
            names,
            [
                "int8_t", "uint8_t", "int16_t", "uint16_t", "int32_t", "uint32_t", "int64_t",
                "uint64_t"
            ]
        );
    }

    #[test]
    fn test_bits_and_signedness() {
        assert_eq!(IntWidth::I8.bits(), 8);
        assert_eq!(IntWidth::U16.bits(), 16);
        assert_eq!(IntWidth::I32.bits(), 32);
        assert_eq!(IntWidth::U64.bits(), 64);

        for width in IntWidth::iter() {
            assert_eq!(width.name().starts_with("int"), width.is_signed());
        }
    }

    #[test]
    fn test_display_matches_name() {
        for width in IntWidth::iter() {
            assert_eq!(width.to_string(), width.name());
        }
    }
}
