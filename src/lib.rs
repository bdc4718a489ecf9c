// Copyright 2026 fhecall contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # fhecall
//!
//! Runtime argument marshaling for compiled FHE circuits.
//!
//! A circuit compiled ahead of time exposes a call boundary whose parameter and return types
//! are only known dynamically: plaintext integers, encrypted integers, and multi-dimensional
//! tensors of either, over eight backing integer widths. `fhecall` provides the host-side
//! value model for that boundary: the typed containers a caller fills in, hands across, and a
//! callee safely inspects without a statically-known signature.
//!
//! ## Features
//!
//! - **Closed value hierarchy** - One [`Argument`] root over exactly 32 recognized leaf
//!   shapes; kind dispatch and signature rendering are exhaustive matches, never runtime
//!   fallthroughs
//! - **Safe downcasting** - `Option`-returning accessors instead of unchecked casts; a kind
//!   mismatch is ordinary control flow
//! - **Overflow-safe shapes** - Tensor element counts are folded with checked multiplication
//!   and surface typed overflow failures instead of wrapping
//! - **Canonical signatures** - Every value renders a deterministic human-readable type name
//!   (`"tensor<encrypted uint8_t>"`) for diagnostics and interface matching
//! - **Move-friendly ownership** - Tensor buffers transfer without copying; duplication is
//!   always an explicit `clone()`
//!
//! ## Quick Start
//!
//! ```rust
//! use fhecall::prelude::*;
//!
//! // The caller assembles a dynamically typed argument list.
//! let args = vec![
//!     Argument::EncryptedScalar(ScalarArgument::with_precision(ScalarData::U8(9), 4)?),
//!     Argument::Tensor(TensorArgument::from_2d([[1u32, 2], [3, 4]])),
//! ];
//!
//! // Diagnostics render the canonical signature.
//! assert_eq!(type_signature(&args), "encrypted uint8_t, tensor<uint32_t>");
//!
//! // The callee recovers concrete kinds through safe downcasts.
//! let scalar = args[0].as_encrypted_scalar().expect("first argument is an encrypted scalar");
//! assert_eq!(scalar.as_u64(), Some(9));
//!
//! let tensor = args[1].as_tensor().expect("second argument is a tensor");
//! assert_eq!(tensor.dimensions(), &[2, 2]);
//! assert_eq!(tensor.num_elements()?, 4);
//! # Ok::<(), fhecall::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`argument`] - The value model: [`Argument`], scalar and tensor payloads, backing widths,
//!   and type-name resolution
//! - [`utils`] - Overflow-checked arithmetic shared by the shape computations
//! - [`prelude`] - Convenient re-exports of the commonly used types
//! - [`Error`] and [`Result`] - Typed failures for overflow, shape, and precision violations
//!
//! All operations are synchronous and side-effect-free; values are immutable after
//! construction apart from the explicitly mutable tensor element buffer, so shared references
//! are safe to read from any number of threads.

pub(crate) mod error;

pub mod argument;
pub mod prelude;
pub mod utils;

/// `fhecall` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use fhecall::{Result, TensorArgument, TensorData};
///
/// fn square(values: Vec<u8>, side: i64) -> Result<TensorArgument> {
///     TensorArgument::new(TensorData::U8(values), vec![side, side])
/// }
/// # square(vec![1, 2, 3, 4], 2).unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `fhecall` Error type
///
/// The main error type for all operations in this crate. Covers overflow during tensor shape
/// arithmetic, shape contract violations at construction, and invalid precision requests.
///
/// # Examples
///
/// ```rust
/// use fhecall::{element_count, Error};
///
/// match element_count(&[i64::MAX, i64::MAX]) {
///     Err(Error::Overflow { accumulator, factor }) => {
///         println!("{accumulator} * {factor} does not fit");
///     }
///     other => panic!("expected overflow, got {other:?}"),
/// }
/// ```
pub use error::Error;

/// The dynamic root of the argument value model.
///
/// See [`argument::Argument`] for kind tests, safe downcasts, and type-name resolution.
pub use argument::Argument;

pub use argument::{
    element_count, type_signature, IntWidth, ScalarArgument, ScalarData, TensorArgument,
    TensorData, TensorElement,
};
