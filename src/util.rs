/// Tolerant real numbers and index arithmetic.
///
/// This module provides [`num::Real`], the floating point type stored in
/// number nodes. Its equality is relative to the magnitude of the operands so
/// that folding does not report false mismatches caused by rounding. It also
/// provides the wraparound used by the index operator.
pub mod num;

/// String interning.
///
/// Variable and parameter names are stored as [`intern::Symbol`] handles
/// owned by an [`intern::Interner`]. Handles compare in constant time and
/// never dangle: the table only grows.
pub mod intern;
