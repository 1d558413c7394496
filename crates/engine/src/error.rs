//! Error types for the oneka-engine crate.

/// Error type for all fallible operations in the oneka-engine crate.
///
/// Validation variants are reported before any numerics run; the
/// numerical failure mode is [`EngineError::SingularSystem`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Returned when the hydraulic conductivity is zero, negative, or
    /// not finite.
    #[error("hydraulic conductivity must be positive, got {value}")]
    NonPositiveConductivity {
        /// The rejected conductivity value.
        value: f64,
    },

    /// Returned when the aquifer thickness is zero, negative, or not
    /// finite.
    #[error("aquifer thickness must be positive, got {value}")]
    NonPositiveThickness {
        /// The rejected thickness value.
        value: f64,
    },

    /// Returned when fewer piezometers are supplied than the six
    /// coefficients require.
    #[error("got {n} piezometers, need at least {min} to identify six coefficients")]
    InsufficientPiezometers {
        /// Number of piezometers supplied.
        n: usize,
        /// Minimum number required.
        min: usize,
    },

    /// Returned when a piezometer carries a non-positive head standard
    /// deviation.
    #[error("piezometer {index} has non-positive head standard deviation {value}")]
    NonPositiveHeadStd {
        /// Index of the offending piezometer.
        index: usize,
        /// The rejected standard deviation.
        value: f64,
    },

    /// Returned when the weighted regression system has no unique
    /// solution: either the normal-equations inverse or the
    /// least-squares solve failed. Typically caused by collinear
    /// piezometer coordinates.
    #[error("piezometer system is singular; adjust the piezometer set and retry")]
    SingularSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_non_positive_conductivity() {
        let err = EngineError::NonPositiveConductivity { value: -1.0 };
        assert_eq!(
            err.to_string(),
            "hydraulic conductivity must be positive, got -1"
        );
    }

    #[test]
    fn error_insufficient_piezometers() {
        let err = EngineError::InsufficientPiezometers { n: 4, min: 6 };
        assert_eq!(
            err.to_string(),
            "got 4 piezometers, need at least 6 to identify six coefficients"
        );
    }

    #[test]
    fn error_non_positive_head_std() {
        let err = EngineError::NonPositiveHeadStd {
            index: 2,
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "piezometer 2 has non-positive head standard deviation 0"
        );
    }

    #[test]
    fn error_singular_system() {
        assert_eq!(
            EngineError::SingularSystem.to_string(),
            "piezometer system is singular; adjust the piezometer set and retry"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EngineError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EngineError>();
    }
}
