//! Pointer follower behind the cursor glow.

const EASE: f64 = 0.08;
const MAX_STRETCH: f64 = 1.5;

#[derive(Clone, Debug, PartialEq)]
pub struct PointerFollower {
    pointer: (f64, f64),
    current: (f64, f64),
    last_move: Option<f64>,
    idle_ms: f64,
}

/// One frame of the follower, ready to become a transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowFrame {
    pub x: f64,
    pub y: f64,
    /// Radians, direction of travel.
    pub angle: f64,
    /// Stretch along the direction of travel; the cross axis gets `1 / scale`.
    pub scale: f64,
    pub visible: bool,
}

impl FollowFrame {
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({:.2}px, {:.2}px) translate(-50%, -50%) rotate({:.4}rad) scale({:.4}, {:.4});",
            if self.visible { 1 } else { 0 },
            self.x,
            self.y,
            self.angle,
            self.scale,
            1.0 / self.scale
        )
    }
}

impl PointerFollower {
    /// Starts centred in a viewport of the given size.
    pub fn new(width: f64, height: f64, idle_ms: f64) -> Self {
        let centre = (width / 2.0, height / 2.0);
        Self {
            pointer: centre,
            current: centre,
            last_move: None,
            idle_ms,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, now: f64) {
        self.pointer = (x, y);
        self.last_move = Some(now);
    }

    pub fn is_visible(&self, now: f64) -> bool {
        self.last_move
            .map_or(false, |moved| now - moved < self.idle_ms)
    }

    pub fn step(&mut self, now: f64) -> FollowFrame {
        let dx = self.pointer.0 - self.current.0;
        let dy = self.pointer.1 - self.current.1;
        self.current.0 += dx * EASE;
        self.current.1 += dy * EASE;

        let velocity = (dx * dx + dy * dy).sqrt();
        FollowFrame {
            x: self.current.0,
            y: self.current.1,
            angle: dy.atan2(dx),
            scale: (1.0 + velocity * 0.005).min(MAX_STRETCH),
            visible: self.is_visible(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follower_eases_toward_pointer() {
        let mut follower = PointerFollower::new(1_000.0, 800.0, 500.0);
        follower.pointer_moved(600.0, 400.0, 0.0);
        let frame = follower.step(16.0);
        assert!((frame.x - 508.0).abs() < 1e-9);
        assert_eq!(frame.y, 400.0);
        assert_eq!(frame.angle, 0.0);
        assert!((frame.scale - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_stretch_is_capped_and_relaxes() {
        let mut follower = PointerFollower::new(0.0, 0.0, 500.0);
        follower.pointer_moved(10.0, 0.0, 0.0);
        let frame = follower.step(0.0);
        assert!((frame.scale - 1.05).abs() < 1e-9);

        for _ in 0..500 {
            follower.step(0.0);
        }
        assert!((follower.step(0.0).scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hides_after_idle() {
        let mut follower = PointerFollower::new(100.0, 100.0, 500.0);
        assert!(!follower.step(0.0).visible);
        follower.pointer_moved(10.0, 10.0, 1_000.0);
        assert!(follower.step(1_200.0).visible);
        assert!(!follower.step(1_500.0).visible);
    }
}
