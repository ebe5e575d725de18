use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose motion logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Mailbox that lead drafts are addressed to.
pub const LEAD_MAILBOX: &str = "hello@axobits.com";

/// Timer thresholds for the scroll/animation handshake and the lead modal.
/// Tunables, not guarantees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    /// Delay between engine readiness and the layout-ready broadcast.
    pub settle_ms: f64,
    /// Extra trigger refreshes after the broadcast, relative to it.
    pub refresh_checkpoints_ms: [f64; 2],
    /// How long a section waits for the broadcast before binding anyway.
    pub binding_fallback_ms: u32,
    /// How long the coordinator waits for the engine before giving up on it.
    pub engine_timeout_ms: f64,
    pub modal_submit_delay_ms: u32,
    pub modal_reset_delay_ms: u32,
    pub cursor_idle_ms: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            settle_ms: 100.0,
            refresh_checkpoints_ms: [300.0, 600.0],
            binding_fallback_ms: 300,
            engine_timeout_ms: 300.0,
            modal_submit_delay_ms: 1_500,
            modal_reset_delay_ms: 500,
            cursor_idle_ms: 500.0,
        }
    }
}

pub fn timings() -> Timings {
    Timings::default()
}
