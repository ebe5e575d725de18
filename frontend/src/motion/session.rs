//! Per-route readiness handshake.
//!
//! ```text
//! Resetting --begin--> WaitingForEngine --engine ready--> Settling --settle--> Ready
//!                            \________________timeout________________________/^
//! ```
//!
//! `begin` replaces the whole phase, so timers belonging to a route that was
//! navigated away from can never broadcast for the new one.

use crate::config::Timings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Resetting,
    WaitingForEngine { since: f64 },
    Settling { until: f64 },
    Ready { at: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// Sections may attach scroll-triggered animations now.
    LayoutReady { generation: u64, route: String },
    /// Re-measure every trigger.
    Refresh,
}

#[derive(Debug)]
pub struct ScrollSession {
    route: String,
    generation: u64,
    phase: Phase,
    engine_ready: bool,
    checkpoints: Vec<f64>,
    broadcasts: u32,
    timings: Timings,
}

impl ScrollSession {
    pub fn new(timings: Timings) -> Self {
        Self {
            route: String::new(),
            generation: 0,
            phase: Phase::Resetting,
            engine_ready: false,
            checkpoints: Vec::new(),
            broadcasts: 0,
            timings,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_layout_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    pub fn is_engine_ready(&self) -> bool {
        self.engine_ready
    }

    /// Number of layout-ready broadcasts for the current generation.
    pub fn broadcasts(&self) -> u32 {
        self.broadcasts
    }

    /// Starts a new session for `route`, discarding every pending timer of
    /// the previous one. Returns the new generation.
    pub fn begin(&mut self, route: &str, now: f64) -> u64 {
        self.generation += 1;
        self.route = route.to_string();
        self.checkpoints.clear();
        self.broadcasts = 0;
        self.phase = if self.engine_ready {
            Phase::Settling {
                until: now + self.timings.settle_ms,
            }
        } else {
            Phase::WaitingForEngine { since: now }
        };
        tracing::debug!(route, generation = self.generation, phase = ?self.phase, "scroll session started");
        self.generation
    }

    pub fn engine_ready(&mut self, now: f64) {
        self.engine_ready = true;
        if let Phase::WaitingForEngine { .. } = self.phase {
            self.phase = Phase::Settling {
                until: now + self.timings.settle_ms,
            };
        }
    }

    /// The engine went away (provider unmounted); a remount starts over.
    pub fn engine_lost(&mut self) {
        self.engine_ready = false;
        self.checkpoints.clear();
        self.phase = Phase::Resetting;
    }

    fn broadcast(&mut self, now: f64, events: &mut Vec<SessionEvent>) {
        self.phase = Phase::Ready { at: now };
        self.broadcasts += 1;
        self.checkpoints = self
            .timings
            .refresh_checkpoints_ms
            .iter()
            .map(|offset| now + offset)
            .collect();
        events.push(SessionEvent::LayoutReady {
            generation: self.generation,
            route: self.route.clone(),
        });
        events.push(SessionEvent::Refresh);
    }

    pub fn tick(&mut self, now: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match self.phase {
            Phase::Resetting => {}
            Phase::WaitingForEngine { since } => {
                if now - since >= self.timings.engine_timeout_ms {
                    tracing::warn!(route = %self.route, "scroll engine not ready, broadcasting anyway");
                    self.broadcast(now, &mut events);
                }
            }
            Phase::Settling { until } => {
                if now >= until {
                    self.broadcast(now, &mut events);
                }
            }
            Phase::Ready { .. } => {
                let due = self.checkpoints.iter().filter(|at| now >= **at).count();
                if due > 0 {
                    self.checkpoints.retain(|at| now < *at);
                    events.push(SessionEvent::Refresh);
                }
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout_ready_count(events: &[SessionEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, SessionEvent::LayoutReady { .. }))
            .count()
    }

    fn run(session: &mut ScrollSession, from: f64, to: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let mut now = from;
        while now <= to {
            events.extend(session.tick(now));
            now += 16.0;
        }
        events
    }

    #[test]
    fn test_waits_for_engine_then_settles() {
        let mut session = ScrollSession::new(Timings::default());
        session.begin("/", 0.0);
        assert_eq!(session.phase(), Phase::WaitingForEngine { since: 0.0 });
        assert!(session.tick(50.0).is_empty());

        session.engine_ready(60.0);
        assert_eq!(session.phase(), Phase::Settling { until: 160.0 });
        assert!(session.tick(150.0).is_empty());
        assert_eq!(
            session.tick(160.0),
            vec![
                SessionEvent::LayoutReady {
                    generation: 1,
                    route: "/".to_string()
                },
                SessionEvent::Refresh
            ]
        );
        assert!(session.is_layout_ready());
    }

    #[test]
    fn test_refresh_checkpoints_after_broadcast() {
        let mut session = ScrollSession::new(Timings::default());
        session.engine_ready(0.0);
        session.begin("/about", 0.0);
        session.tick(100.0);
        assert!(session.tick(399.0).is_empty());
        assert_eq!(session.tick(400.0), vec![SessionEvent::Refresh]);
        assert_eq!(session.tick(700.0), vec![SessionEvent::Refresh]);
        assert!(session.tick(5_000.0).is_empty());
    }

    #[test]
    fn test_timeout_escape_without_engine() {
        let mut session = ScrollSession::new(Timings::default());
        session.begin("/", 0.0);
        let events = run(&mut session, 0.0, 1_000.0);
        assert_eq!(layout_ready_count(&events), 1);
        assert!(session.is_layout_ready());
        assert!(!session.is_engine_ready());
    }

    #[test]
    fn test_layout_ready_false_right_after_navigation() {
        let mut session = ScrollSession::new(Timings::default());
        session.engine_ready(0.0);
        session.begin("/", 0.0);
        run(&mut session, 0.0, 1_000.0);
        assert!(session.is_layout_ready());

        session.begin("/products", 1_000.0);
        assert!(!session.is_layout_ready());
        let events = run(&mut session, 1_000.0, 2_000.0);
        assert_eq!(layout_ready_count(&events), 1);
        assert_eq!(session.broadcasts(), 1);
    }

    #[test]
    fn test_rapid_navigation_broadcasts_once_for_last_route() {
        let mut session = ScrollSession::new(Timings::default());
        session.engine_ready(0.0);
        session.begin("/", 0.0);
        session.tick(40.0);
        session.begin("/about", 80.0);
        session.tick(150.0);
        let generation = session.begin("/", 200.0);

        let events = run(&mut session, 200.0, 1_500.0);
        let ready: Vec<&SessionEvent> = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::LayoutReady { .. }))
            .collect();
        assert_eq!(
            ready,
            vec![&SessionEvent::LayoutReady {
                generation,
                route: "/".to_string()
            }]
        );
        assert_eq!(session.generation(), 3);
    }

    #[test]
    fn test_engine_lost_resets() {
        let mut session = ScrollSession::new(Timings::default());
        session.engine_ready(0.0);
        session.begin("/", 0.0);
        session.engine_lost();
        assert_eq!(session.phase(), Phase::Resetting);
        assert!(session.tick(10_000.0).is_empty());
    }
}
