//! Seeded LCG + Box-Muller for the demo data.
//! Avoids rand dependency

use crate::core::data::{Point, Series};

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[must_use]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        Self(nanos as u64)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 32) as u32
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Standard normal 𝒩(0, 1) sample.
    #[inline]
    pub fn randn(&mut self) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Gaussian random walk at x = 0, 1, 2, …  Values are rounded to whole
    /// numbers so labels stay short.
    pub fn walk(&mut self, len: usize, sigma: f64) -> Series {
        let mut y = 0.0_f64;
        (0..len)
            .map(|i| {
                if i > 0 {
                    y += sigma * self.randn();
                }
                Point::new(i as f64, y.round())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_is_reproducible() {
        let a = Lcg::seed(7).walk(20, 2.0);
        let b = Lcg::seed(7).walk(20, 2.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert_eq!(a.points()[0], Point::new(0.0, 0.0));
        assert!(a.points().iter().all(|p| p.y.fract() == 0.0));
    }
}
