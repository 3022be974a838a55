use thiserror::Error;

/// Failures raised while building or merging containers.
///
/// Data that falls outside a container's range, carries a non-positive
/// weight or maps to NaN is never an error; it is simply excluded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContainerError {
    #[error("low ({low}) must be less than high ({high})")]
    InvalidRange { low: f64, high: f64 },

    #[error("range [{low}, {high}) must have a finite width")]
    NonFiniteRange { low: f64, high: f64 },

    #[error("num ({0}) must be at least one")]
    InvalidNum(usize),

    #[error("values must have at least one element")]
    EmptyValues,

    #[error("entries ({0}) cannot be negative")]
    NegativeEntries(f64),

    #[error("cannot add {kind} because {field} differs ({left} vs {right})")]
    Incompatible {
        kind: &'static str,
        field: &'static str,
        left: String,
        right: String,
    },

    #[error("cannot add {kind} because {role} function differs ({left} vs {right})")]
    FunctionMismatch {
        kind: &'static str,
        role: &'static str,
        left: String,
        right: String,
    },
}

impl ContainerError {
    pub(crate) fn incompatible<T: ToString>(
        kind: &'static str,
        field: &'static str,
        left: T,
        right: T,
    ) -> Self {
        ContainerError::Incompatible {
            kind,
            field,
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

/// Rejects negative or NaN totals.
pub(crate) fn check_entries(entries: f64) -> Result<(), ContainerError> {
    if entries >= 0.0 {
        Ok(())
    } else {
        Err(ContainerError::NegativeEntries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offending_values() {
        let e = ContainerError::InvalidRange {
            low: 2.0,
            high: 1.0,
        };
        assert_eq!(e.to_string(), "low (2) must be less than high (1)");

        let e = ContainerError::incompatible("Bin", "num", 10, 20);
        assert_eq!(
            e.to_string(),
            "cannot add Bin because num differs (10 vs 20)"
        );
    }

    #[test]
    fn check_entries_rejects_negative_and_nan() {
        assert!(check_entries(0.0).is_ok());
        assert!(check_entries(3.5).is_ok());
        assert_eq!(
            check_entries(-1.0),
            Err(ContainerError::NegativeEntries(-1.0))
        );
        assert!(check_entries(f64::NAN).is_err());
    }
}
