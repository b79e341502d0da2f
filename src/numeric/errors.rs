// ============================================================================
// Quantity Errors
// Error types for dimension-checked arithmetic
// ============================================================================

use crate::dimension::DimensionVector;
use std::fmt;

/// Operation that required matching (or unitless) dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b`, `a + s`, `s + a`
    Add,
    /// `a - b`, `a - s`, `s - a`
    Subtract,
    /// Ordering (`<`, `<=`, `>`, `>=`, `compare`, min/max)
    Compare,
    /// `==` and `!=`
    Equality,
    /// Expressing a quantity in a catalog unit
    Convert,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Compare => "compare",
            Operation::Equality => "equality",
            Operation::Convert => "convert",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during dimension-checked arithmetic.
///
/// There is a single failure kind. A scalar operand is reported as
/// [`DimensionVector::UNITLESS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionError {
    /// Operand dimensions were required to match and did not
    DimensionMismatch {
        operation: Operation,
        left: DimensionVector,
        right: DimensionVector,
    },
}

impl DimensionError {
    /// Build a mismatch error and log it.
    pub(crate) fn mismatch(
        operation: Operation,
        left: DimensionVector,
        right: DimensionVector,
    ) -> Self {
        tracing::debug!(%operation, %left, %right, "dimension mismatch");
        DimensionError::DimensionMismatch {
            operation,
            left,
            right,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            DimensionError::DimensionMismatch { operation, .. } => *operation,
        }
    }
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                let what = match operation {
                    Operation::Add => "two quantities being added do not have the same dimensions",
                    Operation::Subtract => {
                        "two quantities being subtracted do not have the same dimensions"
                    },
                    Operation::Compare => "can't compare two quantities that have different dimensions",
                    Operation::Equality => {
                        "the two quantities being compared for equality do not have the same dimensions"
                    },
                    Operation::Convert => "can't express a quantity in a unit of different dimensions",
                };
                write!(f, "{} ({} vs {})", what, left, right)
            },
        }
    }
}

impl std::error::Error for DimensionError {}

/// Result type alias for dimension-checked operations
pub type QuantityResult<T> = Result<T, DimensionError>;
