//! Easing curves mapping progress in [0, 1] to eased progress.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out: 1 - (1-t)^2
    Power2Out,
    /// Cubic ease-out: 1 - (1-t)^3
    Power3Out,
    /// Overshooting ease-out; the parameter is the overshoot strength.
    BackOut(f64),
    /// The scroll engine's curve: min(1, 1.001 - 2^(-10t))
    ExpoOut,
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power3Out
    }
}

impl Ease {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Ease::Power3Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Ease::BackOut(s) => {
                let p = t - 1.0;
                p * p * ((s + 1.0) * p + s) + 1.0
            }
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    (1.001 - 2.0_f64.powf(-10.0 * t)).min(1.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::BackOut(1.7),
        Ease::ExpoOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 0.002, "{:?} at t=0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", ease);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.0), ease.apply(1.0));
        }
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_monotonic_curves() {
        for ease in [Ease::Linear, Ease::Power2Out, Ease::Power3Out, Ease::ExpoOut] {
            let mut prev = ease.apply(0.0);
            for i in 1..=20 {
                let v = ease.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", ease, i);
                prev = v;
            }
        }
    }
}
