/// Operand dispatch.
///
/// Decides from the operand categories whether to broadcast, zip, keep the
/// pair symbolic or run the operator's computation.
pub mod core;

/// Array broadcasting.
///
/// Cross products and maps over arrays an operator does not accept.
pub mod array;

/// Tuple zipping.
pub mod tuple;

/// Scalar computations.
///
/// The per-operator functions referenced from the operator table.
pub mod scalar;
