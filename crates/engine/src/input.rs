//! Physical input bundle for the inference engine.

use crate::error::EngineError;

/// Number of coefficients in the quadratic discharge-potential model,
/// and therefore the minimum number of piezometers.
pub const N_COEFFICIENTS: usize = 6;

/// Aquifer properties shared by every observation point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aquifer {
    /// Hydraulic conductivity `k` [L/T]; must be positive.
    pub conductivity: f64,
    /// Aquifer thickness `H` [L]; must be positive.
    pub thickness: f64,
    /// Elevation of the aquifer base [L].
    pub base: f64,
}

/// A discharge-specified well.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Well {
    /// x-coordinate [L].
    pub x: f64,
    /// y-coordinate [L].
    pub y: f64,
    /// Pumping discharge `Q` [L³/T].
    pub discharge: f64,
}

/// An observation point with a Normally distributed head measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piezometer {
    /// x-coordinate [L].
    pub x: f64,
    /// y-coordinate [L].
    pub y: f64,
    /// Expected value of the measured head [L].
    pub head_mean: f64,
    /// Standard deviation of the measured head [L]; must be positive.
    pub head_std: f64,
}

/// The complete input bundle of one engine run.
#[derive(Clone, Debug, PartialEq)]
pub struct OnekaInput {
    /// Aquifer properties.
    pub aquifer: Aquifer,
    /// Discharge-specified wells; may be empty.
    pub wells: Vec<Well>,
    /// Head observations; at least [`N_COEFFICIENTS`] are required.
    pub piezometers: Vec<Piezometer>,
    /// Model origin `(Xo, Yo)` the quadratic is expanded around.
    pub origin: (f64, f64),
    /// Number of posterior realizations to draw; may be zero.
    pub n_sims: usize,
}

impl OnekaInput {
    /// Checks the physical preconditions of an engine run.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`EngineError::NonPositiveConductivity`] | `conductivity <= 0` or not finite |
    /// | [`EngineError::NonPositiveThickness`] | `thickness <= 0` or not finite |
    /// | [`EngineError::InsufficientPiezometers`] | fewer than six piezometers |
    /// | [`EngineError::NonPositiveHeadStd`] | any `head_std <= 0` or not finite |
    pub fn validate(&self) -> Result<(), EngineError> {
        let k = self.aquifer.conductivity;
        if !(k > 0.0) || !k.is_finite() {
            return Err(EngineError::NonPositiveConductivity { value: k });
        }

        let h = self.aquifer.thickness;
        if !(h > 0.0) || !h.is_finite() {
            return Err(EngineError::NonPositiveThickness { value: h });
        }

        if self.piezometers.len() < N_COEFFICIENTS {
            return Err(EngineError::InsufficientPiezometers {
                n: self.piezometers.len(),
                min: N_COEFFICIENTS,
            });
        }

        for (index, p) in self.piezometers.iter().enumerate() {
            if !(p.head_std > 0.0) || !p.head_std.is_finite() {
                return Err(EngineError::NonPositiveHeadStd {
                    index,
                    value: p.head_std,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> OnekaInput {
        OnekaInput {
            aquifer: Aquifer {
                conductivity: 1.0,
                thickness: 50.0,
                base: 0.0,
            },
            wells: vec![],
            piezometers: vec![
                Piezometer {
                    x: 0.0,
                    y: 0.0,
                    head_mean: 10.0,
                    head_std: 1.0,
                };
                6
            ],
            origin: (0.0, 0.0),
            n_sims: 0,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert_eq!(valid_input().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_conductivity() {
        let mut input = valid_input();
        input.aquifer.conductivity = 0.0;
        assert_eq!(
            input.validate(),
            Err(EngineError::NonPositiveConductivity { value: 0.0 })
        );

        input.aquifer.conductivity = f64::NAN;
        assert!(matches!(
            input.validate(),
            Err(EngineError::NonPositiveConductivity { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_thickness() {
        let mut input = valid_input();
        input.aquifer.thickness = -5.0;
        assert_eq!(
            input.validate(),
            Err(EngineError::NonPositiveThickness { value: -5.0 })
        );
    }

    #[test]
    fn rejects_short_piezometer_set() {
        let mut input = valid_input();
        input.piezometers.truncate(5);
        assert_eq!(
            input.validate(),
            Err(EngineError::InsufficientPiezometers { n: 5, min: 6 })
        );
    }

    #[test]
    fn rejects_non_positive_head_std() {
        let mut input = valid_input();
        input.piezometers[3].head_std = 0.0;
        assert_eq!(
            input.validate(),
            Err(EngineError::NonPositiveHeadStd {
                index: 3,
                value: 0.0
            })
        );
    }

    #[test]
    fn empty_well_field_is_fine() {
        let input = valid_input();
        assert!(input.wells.is_empty());
        assert_eq!(input.validate(), Ok(()));
    }
}
