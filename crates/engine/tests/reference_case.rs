//! End-to-end reference case: one pumping well inside a ring of eight
//! piezometers, with posterior moments checked against a full run of
//! the original Oneka model fit.

use oneka_engine::{Aquifer, OnekaInput, Piezometer, Well, infer};
use oneka_gaussian::GaussianRng;

fn reference_input(n_sims: usize) -> OnekaInput {
    let heads = [
        (100.0, 0.0, 45.2103543000137),
        (100.0, 100.0, 45.4674132751695),
        (0.0, 100.0, 51.4397613593277),
        (-100.0, 100.0, 53.2728566993506),
        (-100.0, 0.0, 53.4397613593277),
        (-100.0, -100.0, 49.6717794118054),
        (0.0, -100.0, 47.3706252432113),
        (100.0, -100.0, 40.3396290257491),
    ];

    OnekaInput {
        aquifer: Aquifer {
            conductivity: 1.0,
            thickness: 50.0,
            base: 0.0,
        },
        wells: vec![Well {
            x: 0.0,
            y: 0.0,
            discharge: 30.0,
        }],
        piezometers: heads
            .iter()
            .map(|&(x, y, head_mean)| Piezometer {
                x,
                y,
                head_mean,
                head_std: 1.0,
            })
            .collect(),
        origin: (0.0, 0.0),
        n_sims,
    }
}

// Fitted model parameters from the reference run, to four significant
// figures:
//
//            Average      Std Dev
//   A:   -0.9989E-02   0.4145E-02
//   B:   -0.9989E-02   0.4067E-02
//   C:    0.1013E-02   0.2318E-02
//   D:   -0.1998E+01   0.1914E+00
//   E:    0.9984E+00   0.1927E+00
//   F:    0.1300E+04   0.5325E+02
const MU_EXPECTED: [f64; 6] = [-0.9989e-2, -0.9989e-2, 0.1013e-2, -0.1998e1, 0.9984, 0.13e4];
const STD_EXPECTED: [f64; 6] = [0.4145e-2, 0.4067e-2, 0.2318e-2, 0.1914, 0.1927, 0.5325e2];

// Four-significant-figure tolerances, scaled per component.
const MU_TOL: [f64; 6] = [0.0001e-2, 0.0001e-2, 0.0001e-2, 0.0001e1, 0.0001, 0.0001e4];
const STD_TOL: [f64; 6] = [0.0001e-2, 0.0001e-2, 0.0001e-2, 0.0001, 0.0001, 0.0001e2];

#[test]
fn posterior_moments_match_reference_run() {
    let mut source = GaussianRng::seeded(1);
    let posterior = infer(&reference_input(1), &mut source).unwrap();

    for i in 0..6 {
        assert!(
            (posterior.mu()[i] - MU_EXPECTED[i]).abs() <= MU_TOL[i],
            "mu[{i}] = {}, expected {}",
            posterior.mu()[i],
            MU_EXPECTED[i]
        );
    }

    let std_devs = posterior.std_devs();
    for i in 0..6 {
        assert!(
            (std_devs[i] - STD_EXPECTED[i]).abs() <= STD_TOL[i],
            "std[{i}] = {}, expected {}",
            std_devs[i],
            STD_EXPECTED[i]
        );
    }
}

#[test]
fn posterior_covariance_is_symmetric_positive() {
    let mut source = GaussianRng::seeded(1);
    let posterior = infer(&reference_input(0), &mut source).unwrap();
    let cov = posterior.cov();

    for i in 0..6 {
        assert!(cov.get(i, i) > 0.0, "non-positive variance at {i}");
        for j in 0..6 {
            let asym = (cov.get(i, j) - cov.get(j, i)).abs();
            assert!(asym <= 1e-12 * cov.get(i, i).abs().max(1.0));
        }
    }
}

#[test]
fn realization_cloud_centers_on_posterior_mean() {
    let n_sims = 20_000;
    let mut source = GaussianRng::seeded(20110718);
    let posterior = infer(&reference_input(n_sims), &mut source).unwrap();

    let sims = posterior.realizations();
    let std_devs = posterior.std_devs();
    for j in 0..6 {
        let mean: f64 =
            (0..sims.rows()).map(|i| sims.get(i, j)).sum::<f64>() / sims.rows() as f64;
        let se = std_devs[j] / (n_sims as f64).sqrt();
        let z = (mean - posterior.mu()[j]) / se;
        assert!(z.abs() < 4.0, "coefficient {j}: sample mean z-score {z}");
    }
}
