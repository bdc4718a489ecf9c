//! # fhecall Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the fhecall library. Import this module to get quick access to everything needed for
//! assembling and inspecting circuit argument lists.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all fhecall operations
pub use crate::Error;

/// The result type used throughout fhecall
pub use crate::Result;

// ================================================================================================
// Value Model
// ================================================================================================

/// The dynamic-dispatch root of the argument value model
pub use crate::argument::Argument;

/// Scalar payloads and their precision-carrying wrapper
pub use crate::argument::{ScalarArgument, ScalarData};

/// Tensor payloads, the shape-carrying wrapper, and the element-type binding
pub use crate::argument::{TensorArgument, TensorData, TensorElement};

/// The eight supported backing width/signedness combinations
pub use crate::argument::IntWidth;

// ================================================================================================
// Shape Arithmetic and Diagnostics
// ================================================================================================

/// Overflow-checked element-count computation for dimension sequences
pub use crate::argument::element_count;

/// Canonical signature rendering for argument lists
pub use crate::argument::type_signature;

/// Overflow-checked multiplication primitive
pub use crate::utils::checked_mul;
