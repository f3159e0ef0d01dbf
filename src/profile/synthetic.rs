use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::sim::types::HOURS_PER_DAY;

/// A seeded daily demand shape: sinusoid plus Gaussian noise.
///
/// Stands in for a real data feed when exercising the pipeline with
/// something other than the embedded day. The RNG is rebuilt from `seed`
/// on every call to [`SyntheticProfile::hourly_demand_mw`], so the same
/// profile always yields the same day.
///
/// # Examples
///
/// ```
/// use load_shed_sim::profile::SyntheticProfile;
///
/// let profile = SyntheticProfile::new(125.0, 45.0, -3.0, 0.0, 42);
/// let day = profile.hourly_demand_mw();
/// assert_eq!(day.len(), 24);
/// assert!(day.iter().all(|d| *d >= 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticProfile {
    /// Mean demand over the day (MW).
    pub base_mw: f64,
    /// Amplitude of the daily swing (MW).
    pub amp_mw: f64,
    /// Phase offset of the sinusoid (radians).
    pub phase_rad: f64,
    /// Standard deviation of the per-hour noise (MW).
    pub noise_std: f64,
    /// Seed for the noise generator.
    pub seed: u64,
}

impl SyntheticProfile {
    /// Creates a synthetic profile.
    ///
    /// # Arguments
    ///
    /// * `base_mw` - Mean demand in MW
    /// * `amp_mw` - Amplitude of the sinusoidal daily swing in MW
    /// * `phase_rad` - Phase offset in radians
    /// * `noise_std` - Standard deviation of Gaussian noise in MW (negative treated as zero)
    /// * `seed` - Random seed for reproducible noise
    pub fn new(base_mw: f64, amp_mw: f64, phase_rad: f64, noise_std: f64, seed: u64) -> Self {
        Self {
            base_mw,
            amp_mw,
            phase_rad,
            noise_std: noise_std.max(0.0),
            seed,
        }
    }

    /// Generates one day of hourly demand, clamped at zero.
    pub fn hourly_demand_mw(&self) -> [f64; HOURS_PER_DAY] {
        let mut rng = StdRng::seed_from_u64(self.seed);
        std::array::from_fn(|hour| {
            let day_pos = hour as f64 / HOURS_PER_DAY as f64;
            let angle = 2.0 * std::f64::consts::PI * day_pos + self.phase_rad;
            let mut mw = self.base_mw + self.amp_mw * angle.sin();
            if self.noise_std > 0.0 {
                mw += self.noise_std * standard_normal(&mut rng);
            }
            mw.max(0.0) // no negative demand
        })
    }
}

/// One N(0, 1) sample (Box-Muller, cosine branch).
fn standard_normal(rng: &mut StdRng) -> f64 {
    // `random` lies in [0, 1); flip it so the log argument is never zero.
    let radius = (-2.0 * (1.0 - rng.random::<f64>()).ln()).sqrt();
    let theta = std::f64::consts::TAU * rng.random::<f64>();
    radius * theta.cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_day() {
        let p = SyntheticProfile::new(125.0, 45.0, -3.0, 5.0, 7);
        assert_eq!(p.hourly_demand_mw(), p.hourly_demand_mw());
    }

    #[test]
    fn different_seed_different_day() {
        let a = SyntheticProfile::new(125.0, 45.0, -3.0, 5.0, 1).hourly_demand_mw();
        let b = SyntheticProfile::new(125.0, 45.0, -3.0, 5.0, 2).hourly_demand_mw();
        assert_ne!(a, b);
    }

    #[test]
    fn noiseless_profile_follows_sinusoid() {
        let p = SyntheticProfile::new(100.0, 50.0, 0.0, 0.0, 0);
        let day = p.hourly_demand_mw();
        assert!((day[0] - 100.0).abs() < 1e-9);
        assert!((day[6] - 150.0).abs() < 1e-9);
        assert!((day[18] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn demand_is_clamped_at_zero() {
        let p = SyntheticProfile::new(0.0, 100.0, 0.0, 0.0, 0);
        assert!(p.hourly_demand_mw().iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn standard_normal_is_centred() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = 10_000;
        let samples: Vec<f64> = (0..n).map(|_| standard_normal(&mut rng)).collect();
        assert!(samples.iter().all(|z| z.is_finite()));
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.1, "variance {var}");
    }
}
