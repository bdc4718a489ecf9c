//! Runtime argument values for compiled circuits.
//!
//! A compiled FHE circuit takes its parameters and produces its results through a small closed
//! set of value kinds: plaintext scalars, encrypted scalars, and multi-dimensional tensors of
//! either, each backed by one of eight integer representations. Because a caller assembles the
//! argument list without a statically-known signature, every concrete value travels as an
//! [`Argument`], the dynamic-dispatch root, and the callee recovers the concrete kind
//! through safe, `Option`-returning accessors instead of unchecked casts.
//!
//! # Value Kinds
//!
//! | Kind | Variant | Payload |
//! |------|---------|---------|
//! | Plaintext integer | [`Argument::Scalar`] | [`ScalarArgument`] |
//! | Encrypted integer | [`Argument::EncryptedScalar`] | [`ScalarArgument`] |
//! | Plaintext tensor | [`Argument::Tensor`] | [`TensorArgument`] |
//! | Encrypted tensor | [`Argument::EncryptedTensor`] | [`TensorArgument`] |
//!
//! The encrypted variants carry the identical payload representation as their plaintext
//! counterparts; the distinction is purely the dynamic kind, which marks a value as standing
//! in for ciphertext-backed data at the call boundary. Combined with the eight backing widths
//! of [`IntWidth`], the model recognizes 4 × 8 = 32 leaf shapes, and
//! [`Argument::type_name`] renders each one as a canonical signature string.
//!
//! # Examples
//!
//! ```rust
//! use fhecall::{Argument, ScalarArgument, TensorArgument};
//!
//! let args = vec![
//!     Argument::EncryptedScalar(ScalarArgument::from(4u8)),
//!     Argument::Tensor(TensorArgument::from_2d([[1u32, 2], [3, 4]])),
//! ];
//!
//! assert_eq!(args[0].type_name(), "encrypted uint8_t");
//! assert_eq!(args[1].type_name(), "tensor<uint32_t>");
//!
//! // Downcast mismatches are control flow, not errors.
//! assert!(args[0].as_tensor().is_none());
//! let scalar = args[0].as_encrypted_scalar().unwrap();
//! assert_eq!(scalar.as_u64(), Some(4));
//! ```

mod scalar;
mod tensor;
mod width;

pub use scalar::{ScalarArgument, ScalarData};
pub use tensor::{element_count, TensorArgument, TensorData, TensorElement};
pub use width::IntWidth;

/// A dynamically typed argument or result value for a compiled circuit.
///
/// This is the closed root of the value model: exactly four kinds, each parameterized by the
/// eight backing widths through its payload. Callers construct the concrete payload, wrap it
/// in the matching variant, and hand `&Argument` (or the owned value) across the call
/// boundary; callees inspect the dynamic kind with the `is_*` predicates or recover the
/// concrete payload with the `as_*` accessors.
///
/// The hierarchy being a closed enum means type-name resolution and kind dispatch are
/// exhaustive matches: adding a new kind without updating them is a compile error, not a
/// silent runtime fallthrough.
///
/// Values are moved or passed by reference; duplicating one (including its full tensor
/// buffer) requires an explicit `clone()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A plaintext scalar integer.
    Scalar(ScalarArgument),
    /// A scalar integer standing in for an encryption ciphertext.
    ///
    /// Structurally identical to [`Argument::Scalar`]; only the dynamic kind differs.
    EncryptedScalar(ScalarArgument),
    /// A plaintext tensor.
    Tensor(TensorArgument),
    /// A tensor of values standing in for encryption ciphertexts.
    ///
    /// Structurally identical to [`Argument::Tensor`]; only the dynamic kind differs.
    EncryptedTensor(TensorArgument),
}

impl Argument {
    /// Whether this value is a scalar, plaintext or encrypted.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Argument::Scalar(_) | Argument::EncryptedScalar(_))
    }

    /// Whether this value is a tensor, plaintext or encrypted.
    #[must_use]
    pub fn is_tensor(&self) -> bool {
        matches!(self, Argument::Tensor(_) | Argument::EncryptedTensor(_))
    }

    /// Whether this value stands in for ciphertext-backed data.
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        matches!(
            self,
            Argument::EncryptedScalar(_) | Argument::EncryptedTensor(_)
        )
    }

    /// The backing width of the value's integer representation.
    #[must_use]
    pub fn width(&self) -> IntWidth {
        match self {
            Argument::Scalar(scalar) | Argument::EncryptedScalar(scalar) => scalar.width(),
            Argument::Tensor(tensor) | Argument::EncryptedTensor(tensor) => tensor.width(),
        }
    }

    /// Interprets this value as a plaintext scalar, or `None` if it is any other kind.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarArgument> {
        match self {
            Argument::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Interprets this value as an encrypted scalar, or `None` if it is any other kind.
    #[must_use]
    pub fn as_encrypted_scalar(&self) -> Option<&ScalarArgument> {
        match self {
            Argument::EncryptedScalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Interprets this value as a plaintext tensor, or `None` if it is any other kind.
    #[must_use]
    pub fn as_tensor(&self) -> Option<&TensorArgument> {
        match self {
            Argument::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Interprets this value as an encrypted tensor, or `None` if it is any other kind.
    #[must_use]
    pub fn as_encrypted_tensor(&self) -> Option<&TensorArgument> {
        match self {
            Argument::EncryptedTensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Mutable form of [`Argument::as_tensor`], for rewriting the element buffer in place.
    #[must_use]
    pub fn as_tensor_mut(&mut self) -> Option<&mut TensorArgument> {
        match self {
            Argument::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Mutable form of [`Argument::as_encrypted_tensor`].
    #[must_use]
    pub fn as_encrypted_tensor_mut(&mut self) -> Option<&mut TensorArgument> {
        match self {
            Argument::EncryptedTensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    /// Renders the dynamic kind of this value as its canonical signature string.
    ///
    /// One of 32 renderings: the bare width name for plaintext scalars (`"int32_t"`), the
    /// `encrypted ` prefix for encrypted scalars, and the `tensor<...>` wrapping for tensors
    /// of either (`"tensor<encrypted uint8_t>"`). The match below is exhaustive over the
    /// closed kind set, so no value can fail to resolve.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Argument::Scalar(scalar) => scalar.width().name().to_string(),
            Argument::EncryptedScalar(scalar) => format!("encrypted {}", scalar.width().name()),
            Argument::Tensor(tensor) => format!("tensor<{}>", tensor.width().name()),
            Argument::EncryptedTensor(tensor) => {
                format!("tensor<encrypted {}>", tensor.width().name())
            }
        }
    }
}

/// Renders an argument list as a comma-separated signature, for diagnostics and
/// interface-matching messages.
///
/// # Examples
///
/// ```rust
/// use fhecall::{type_signature, Argument, ScalarArgument};
///
/// let args = [
///     Argument::Scalar(ScalarArgument::from(1u8)),
///     Argument::EncryptedScalar(ScalarArgument::from(2i32)),
/// ];
/// assert_eq!(type_signature(&args), "uint8_t, encrypted int32_t");
/// ```
#[must_use]
pub fn type_signature(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(Argument::type_name)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ScalarArgument> for Argument {
    fn from(scalar: ScalarArgument) -> Self {
        Argument::Scalar(scalar)
    }
}

impl From<TensorArgument> for Argument {
    fn from(tensor: TensorArgument) -> Self {
        Argument::Tensor(tensor)
    }
}

impl From<i8> for Argument {
    fn from(value: i8) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl From<u8> for Argument {
    fn from(value: u8) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl From<i16> for Argument {
    fn from(value: i16) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl From<u16> for Argument {
    fn from(value: u16) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl From<u32> for Argument {
    fn from(value: u32) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl From<u64> for Argument {
    fn from(value: u64) -> Self {
        Argument::Scalar(ScalarArgument::from(value))
    }
}

impl<T: TensorElement> From<Vec<T>> for Argument {
    fn from(values: Vec<T>) -> Self {
        Argument::Tensor(TensorArgument::from_vec(values))
    }
}
