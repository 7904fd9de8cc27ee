use nalgebra::Vector3;
use rand::Rng;
use rand_distr::StandardNormal;
use tracing::instrument;

/// Draws a random translation whose components are independent standard
/// normal samples scaled by `step_size`.
#[instrument(level = "trace", skip_all, fields(step_size = step_size))]
pub fn propose_translation(step_size: f64, rng: &mut impl Rng) -> Vector3<f64> {
    let x: f64 = rng.sample(StandardNormal);
    let y: f64 = rng.sample(StandardNormal);
    let z: f64 = rng.sample(StandardNormal);
    Vector3::new(x, y, z) * step_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_gives_same_proposals() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            assert_eq!(propose_translation(1.5, &mut a), propose_translation(1.5, &mut b));
        }
    }

    #[test]
    fn proposals_scale_with_step_size() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        let unit = propose_translation(1.0, &mut a);
        let scaled = propose_translation(0.25, &mut b);
        assert!((unit * 0.25 - scaled).norm() < 1e-12);
    }

    #[test]
    fn component_statistics_look_standard_normal() {
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 20_000;
        let samples: Vec<Vector3<f64>> = (0..n).map(|_| propose_translation(2.0, &mut rng)).collect();

        let mean = samples.iter().fold(Vector3::zeros(), |acc, v| acc + v) / n as f64;
        let var_x = samples.iter().map(|v| (v.x - mean.x).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.norm() < 0.1, "mean {mean:?} too far from zero");
        // Scaled by 2.0, so the variance should be close to 4.
        assert!((var_x - 4.0).abs() < 0.3, "variance {var_x} too far from 4");
    }
}
