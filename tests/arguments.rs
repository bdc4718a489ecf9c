//! Integration tests for the argument marshaling flow.
//!
//! These tests exercise realistic end-to-end scenarios: a caller assembling a dynamically
//! typed argument list, the signature being rendered for interface matching, and a callee
//! recovering the concrete values through safe downcasts, including the failure paths a
//! hosting runtime has to surface (shape overflow, shape mismatch, invalid precision).

use fhecall::{prelude::*, Error};

/// A caller marshals mixed scalar and tensor inputs, the callee inspects them dynamically and
/// produces a result tensor. This mirrors how a hosting runtime drives a compiled circuit
/// whose signature is only known at run time.
#[test]
fn test_marshal_inspect_roundtrip() -> Result<()> {
    let args = vec![
        Argument::EncryptedScalar(ScalarArgument::with_precision(ScalarData::U8(0b1011), 4)?),
        Argument::Scalar(ScalarArgument::from(1000u32)),
        Argument::EncryptedTensor(TensorArgument::from_2d([[1u8, 2, 3], [4, 5, 6]])),
    ];

    assert_eq!(
        type_signature(&args),
        "encrypted uint8_t, uint32_t, tensor<encrypted uint8_t>"
    );

    // The callee walks the list, matching each argument to the kind it expects.
    let lut_index = args[0]
        .as_encrypted_scalar()
        .expect("first argument is an encrypted scalar");
    assert_eq!(lut_index.as_u64(), Some(0b1011));
    assert_eq!(lut_index.precision(), 4);

    let multiplier = args[1].as_scalar().expect("second argument is a scalar");
    assert_eq!(multiplier.as_u64(), Some(1000));

    let matrix = args[2]
        .as_encrypted_tensor()
        .expect("third argument is an encrypted tensor");
    assert_eq!(matrix.dimensions(), &[2, 3]);
    assert_eq!(matrix.num_elements()?, 6);
    assert_eq!(matrix.values::<u8>().unwrap(), &[1, 2, 3, 4, 5, 6]);

    Ok(())
}

/// The callee receives a result buffer to fill; the mutable downcast rewrites the elements in
/// place without being able to disturb the shape.
#[test]
fn test_result_buffer_filled_in_place() -> Result<()> {
    let mut result = Argument::Tensor(TensorArgument::new(
        TensorData::U64(vec![0; 4]),
        vec![2, 2],
    )?);

    {
        let tensor = result.as_tensor_mut().expect("result slot is a tensor");
        let values = tensor.values_mut::<u64>().expect("result buffer is u64");
        for (i, value) in values.iter_mut().enumerate() {
            *value = (i as u64 + 1) * 10;
        }
    }

    let tensor = result.as_tensor().unwrap();
    assert_eq!(tensor.values::<u64>().unwrap(), &[10, 20, 30, 40]);
    assert_eq!(tensor.dimensions(), &[2, 2]);

    Ok(())
}

/// Interface matching rejects a call whose rendered signature differs from the compiled one,
/// and the mismatch message pinpoints the offending kind.
#[test]
fn test_signature_mismatch_detection() {
    let compiled = "encrypted uint8_t, tensor<uint32_t>";

    let good = vec![
        Argument::EncryptedScalar(ScalarArgument::from(1u8)),
        Argument::Tensor(TensorArgument::from_vec(vec![1u32, 2])),
    ];
    assert_eq!(type_signature(&good), compiled);

    // Same values, but the tensor arrives plaintext-8-bit instead of 32-bit.
    let bad = vec![
        Argument::EncryptedScalar(ScalarArgument::from(1u8)),
        Argument::Tensor(TensorArgument::from_vec(vec![1u8, 2])),
    ];
    assert_ne!(type_signature(&bad), compiled);
    assert_eq!(bad[1].type_name(), "tensor<uint8_t>");
}

/// A downcast to the wrong kind yields `None` for every other kind; it is control flow, and
/// no accessor can misread another variant's payload.
#[test]
fn test_wrong_kind_downcasts_are_none() {
    let scalar = Argument::from(7i64);
    assert!(scalar.as_tensor().is_none());
    assert!(scalar.as_encrypted_tensor().is_none());
    assert!(scalar.as_encrypted_scalar().is_none());

    let tensor = Argument::from(vec![7i64]);
    assert!(tensor.as_scalar().is_none());
    assert!(tensor.as_encrypted_scalar().is_none());
    assert!(tensor.as_encrypted_tensor().is_none());
}

/// Shape arithmetic failures surface as typed errors through every layer: the raw dimension
/// list, tensor construction, and the element-count query.
#[test]
fn test_overflow_propagates_as_typed_failure() {
    // A shape pulled from untrusted metadata can overflow the native size type.
    let huge = [i64::MAX, 4];
    let err = element_count(&huge).unwrap_err();
    match err {
        Error::Overflow {
            accumulator,
            factor,
        } => {
            assert_eq!(accumulator, i64::MAX as u64);
            assert_eq!(factor, 4);
        }
        other => panic!("expected overflow, got {other:?}"),
    }

    // Construction with such a shape refuses up front rather than allocating.
    assert!(matches!(
        TensorArgument::new(TensorData::U8(vec![1]), vec![i64::MAX, 4]),
        Err(Error::Overflow { .. })
    ));

    // Negative sizes are rejected before any multiplication happens.
    assert_eq!(
        element_count(&[3, -2]).unwrap_err(),
        Error::NegativeDimension(-2)
    );
}

/// Result comparison uses numeric equality across backing widths but is strict about shape
/// and dynamic kind.
#[test]
fn test_result_comparison_semantics() -> Result<()> {
    let expected = TensorArgument::from_slice(&[1u64, 2, 3, 4], vec![2, 2])?;
    let produced = TensorArgument::from_slice(&[1u8, 2, 3, 4], vec![2, 2])?;
    assert_eq!(expected, produced);

    let flat = TensorArgument::from_slice(&[1u8, 2, 3, 4], vec![4])?;
    assert_ne!(expected, flat);

    // Kind matters at the Argument level even when payloads match.
    assert_ne!(
        Argument::Tensor(produced.clone()),
        Argument::EncryptedTensor(produced)
    );

    // Scalars compare by value, not width or precision.
    let wide = ScalarArgument::from(5u64);
    let narrow = ScalarArgument::with_precision(ScalarData::U8(5), 4)?;
    assert_eq!(wide, narrow);

    Ok(())
}

/// Precision narrowing normalizes stored values at construction and rejects out-of-range
/// precisions.
#[test]
fn test_precision_contract() {
    let narrowed = ScalarArgument::with_precision(ScalarData::U8(0b1111_0101), 4).unwrap();
    assert_eq!(narrowed.data(), ScalarData::U8(0b0000_0101));

    assert!(matches!(
        ScalarArgument::with_precision(ScalarData::U16(1), 17),
        Err(Error::InvalidPrecision {
            precision: 17,
            bits: 16
        })
    ));
}

/// Buffers move into tensors without copying and duplicate only on explicit `clone()`.
#[test]
fn test_ownership_transfer_and_explicit_clone() -> Result<()> {
    let buffer: Vec<u16> = (0..1024).collect();
    let original = TensorArgument::new(TensorData::U16(buffer), vec![32, 32])?;

    let mut copy = original.clone();
    copy.values_mut::<u16>().unwrap()[0] = 999;

    // The clone owns an independent buffer; the original is untouched.
    assert_eq!(original.values::<u16>().unwrap()[0], 0);
    assert_ne!(original, copy);

    Ok(())
}
