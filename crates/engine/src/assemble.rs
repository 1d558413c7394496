//! Assembly of the weighted regression system from physical inputs.

use oneka_matrix::Matrix;

use crate::input::{Aquifer, OnekaInput, Piezometer, Well};

/// `4 pi`, absorbing the factor of two from `ln(r²) = 2 ln(r)` so the
/// well term matches the canonical `Q / (2 pi) · ln(r)` form.
pub(crate) const FOUR_PI: f64 = 12.566_370_614_359_172;

/// Mean and standard deviation of the discharge potential at one
/// piezometer, from the first two moments of its head measurement.
///
/// The mapping is piecewise: unconfined below the aquifer top
/// (`Phi = k h² / 2`, second moment of the head folded in), confined at
/// or above it (`Phi` linear in the head, so the moments map through
/// directly).
pub(crate) fn potential_moments(aquifer: &Aquifer, p: &Piezometer) -> (f64, f64) {
    let k = aquifer.conductivity;
    let h = p.head_mean - aquifer.base;
    let s = p.head_std;

    if h < aquifer.thickness {
        (0.5 * k * (h * h + s * s), k * h * s)
    } else {
        let t = aquifer.thickness;
        (k * t * (h - 0.5 * t), k * t * s)
    }
}

/// Combined discharge potential of all wells at the point `(x, y)`.
pub(crate) fn well_potential(wells: &[Well], x: f64, y: f64) -> f64 {
    wells
        .iter()
        .map(|w| {
            let dx = x - w.x;
            let dy = y - w.y;
            w.discharge / FOUR_PI * (dx * dx + dy * dy).ln()
        })
        .sum()
}

/// Builds the weighted design matrix `A` (P x 6) and response `b`
/// (P x 1) of the Oneka regression.
///
/// Row `p` carries the quadratic basis `(dx², dy², dx·dy, dx, dy, 1)`
/// at the piezometer's offset from the model origin, and the response
/// carries the observed potential net of the well field. Both are
/// divided by the potential standard deviation, which implements the
/// per-piezometer weighting.
pub(crate) fn assemble_system(input: &OnekaInput) -> (Matrix, Matrix) {
    let n_piezo = input.piezometers.len();
    let (x0, y0) = input.origin;

    let mut a = Matrix::zeros(n_piezo, 6);
    let mut b = Matrix::zeros(n_piezo, 1);

    for (row, p) in input.piezometers.iter().enumerate() {
        let (phi_mean, phi_std) = potential_moments(&input.aquifer, p);
        let phi_wells = well_potential(&input.wells, p.x, p.y);

        let dx = p.x - x0;
        let dy = p.y - y0;

        a.set(row, 0, dx * dx / phi_std);
        a.set(row, 1, dy * dy / phi_std);
        a.set(row, 2, dx * dy / phi_std);
        a.set(row, 3, dx / phi_std);
        a.set(row, 4, dy / phi_std);
        a.set(row, 5, 1.0 / phi_std);

        b.set(row, 0, (phi_mean - phi_wells) / phi_std);
    }

    (a, b)
}
