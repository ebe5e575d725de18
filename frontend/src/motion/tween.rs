//! From/to tweens and the timelines that play them.
//!
//! Every track is an explicit start-state → end-state pair. Re-entering a
//! trigger therefore always interpolates between the same two poses instead
//! of accumulating relative deltas.

use super::easing::Ease;
use super::layout::{Layout, NodeId, StyleWrite};
use super::timing::{lerp, normalize};

/// A property value, possibly derived from live measurements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Px(f64),
    /// Multiple of the viewport height.
    ViewportHeight(f64),
    /// Negative horizontal overflow of a node: -(scrollWidth - viewport width).
    OverflowX(NodeId),
}

impl Value {
    fn resolve(&self, layout: &dyn Layout) -> f64 {
        match *self {
            Value::Px(px) => px,
            Value::ViewportHeight(factor) => layout.viewport().height * factor,
            Value::OverflowX(node) => {
                let width = layout.scroll_width(node).unwrap_or(0.0);
                -(width - layout.viewport().width).max(0.0)
            }
        }
    }

    pub fn is_measured(&self) -> bool {
        !matches!(self, Value::Px(_))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub opacity: Option<f64>,
    pub x: Option<Value>,
    pub y: Option<Value>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn x(mut self, px: f64) -> Self {
        self.x = Some(Value::Px(px));
        self
    }

    pub fn y(mut self, px: f64) -> Self {
        self.y = Some(Value::Px(px));
        self
    }

    pub fn x_value(mut self, value: Value) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y_value(mut self, value: Value) -> Self {
        self.y = Some(value);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn is_measured(&self) -> bool {
        self.x.map_or(false, |v| v.is_measured()) || self.y.map_or(false, |v| v.is_measured())
    }

    pub fn resolve(&self, layout: &dyn Layout) -> Pose {
        Pose {
            opacity: self.opacity,
            x: self.x.map(|v| v.resolve(layout)),
            y: self.y.map(|v| v.resolve(layout)),
            scale: self.scale,
            rotation: self.rotation,
        }
    }
}

/// A fully resolved visual state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
}

fn mix(from: Option<f64>, to: Option<f64>, neutral: f64, t: f64) -> Option<f64> {
    match (from, to) {
        (None, None) => None,
        (from, to) => Some(lerp(from.unwrap_or(neutral), to.unwrap_or(neutral), t)),
    }
}

fn num(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Pose {
    pub fn interpolate(from: &Pose, to: &Pose, t: f64) -> Pose {
        Pose {
            opacity: mix(from.opacity, to.opacity, 1.0, t),
            x: mix(from.x, to.x, 0.0, t),
            y: mix(from.y, to.y, 0.0, t),
            scale: mix(from.scale, to.scale, 1.0, t),
            rotation: mix(from.rotation, to.rotation, 0.0, t),
        }
    }

    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.opacity {
            css.push_str(&format!("opacity: {};", num(opacity)));
        }

        let mut transform = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            transform.push(format!(
                "translate3d({}px, {}px, 0px)",
                num(self.x.unwrap_or(0.0)),
                num(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(scale) = self.scale {
            transform.push(format!("scale({})", num(scale)));
        }
        if let Some(rotation) = self.rotation {
            transform.push(format!("rotate({}deg)", num(rotation)));
        }
        if !transform.is_empty() {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&format!("transform: {};", transform.join(" ")));
        }
        css
    }
}

/// One node's from → to tween, timed in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub node: NodeId,
    pub from: MotionState,
    pub to: MotionState,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
}

#[derive(Clone, Debug)]
struct Resolved {
    from: Pose,
    to: Pose,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Playback {
    Paused,
    Forward,
    Backward,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    tracks: Vec<Track>,
    resolved: Vec<Resolved>,
    playhead: f64,
    playback: Playback,
    paused_from: Playback,
    dirty: bool,
}

impl Timeline {
    pub fn new(tracks: Vec<Track>) -> Self {
        let resolved = tracks
            .iter()
            .map(|_| Resolved {
                from: Pose::default(),
                to: Pose::default(),
            })
            .collect();
        Self {
            tracks,
            resolved,
            playhead: 0.0,
            playback: Playback::Paused,
            paused_from: Playback::Paused,
            dirty: true,
        }
    }

    pub fn from_to(node: NodeId, from: MotionState, to: MotionState, duration: f64, ease: Ease) -> Self {
        Self::staggered(&[node], from, to, duration, 0.0, ease)
    }

    /// Same tween on each node, each starting `stagger` seconds after the previous.
    pub fn staggered(
        nodes: &[NodeId],
        from: MotionState,
        to: MotionState,
        duration: f64,
        stagger: f64,
        ease: Ease,
    ) -> Self {
        let tracks = nodes
            .iter()
            .enumerate()
            .map(|(i, &node)| Track {
                node,
                from,
                to,
                delay: stagger * i as f64,
                duration,
                ease,
            })
            .collect();
        Self::new(tracks)
    }

    pub fn delayed(mut self, delay: f64) -> Self {
        for track in &mut self.tracks {
            track.delay += delay;
        }
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.tracks.iter().map(|t| t.node).collect();
        nodes.dedup();
        nodes
    }

    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(|t| t.delay + t.duration)
            .fold(0.0, f64::max)
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn progress(&self) -> f64 {
        let total = self.duration();
        if total <= 0.0 {
            return if self.playhead > 0.0 { 1.0 } else { 0.0 };
        }
        (self.playhead / total).clamp(0.0, 1.0)
    }

    pub fn is_measured(&self) -> bool {
        self.tracks
            .iter()
            .any(|t| t.from.is_measured() || t.to.is_measured())
    }

    /// Re-resolves measured values against the current layout.
    pub fn resolve(&mut self, layout: &dyn Layout) {
        for (track, resolved) in self.tracks.iter().zip(self.resolved.iter_mut()) {
            resolved.from = track.from.resolve(layout);
            resolved.to = track.to.resolve(layout);
        }
        self.dirty = true;
    }

    pub fn play(&mut self) {
        self.playback = Playback::Forward;
    }

    pub fn reverse(&mut self) {
        self.playback = Playback::Backward;
    }

    pub fn pause(&mut self) {
        if self.playback != Playback::Paused {
            self.paused_from = self.playback;
        }
        self.playback = Playback::Paused;
    }

    pub fn resume(&mut self) {
        if self.playback == Playback::Paused {
            self.playback = self.paused_from;
        }
    }

    pub fn restart(&mut self) {
        self.playhead = 0.0;
        self.playback = Playback::Forward;
        self.dirty = true;
    }

    pub fn reset(&mut self) {
        self.playhead = 0.0;
        self.playback = Playback::Paused;
        self.dirty = true;
    }

    pub fn complete(&mut self) {
        self.playhead = self.duration();
        self.playback = Playback::Paused;
        self.dirty = true;
    }

    /// Jumps to a fraction of the timeline (scrubbing).
    pub fn seek(&mut self, progress: f64) {
        let playhead = self.duration() * progress.clamp(0.0, 1.0);
        if playhead != self.playhead {
            self.playhead = playhead;
            self.dirty = true;
        }
        self.playback = Playback::Paused;
    }

    /// Advances the playhead by `dt` seconds in the current direction.
    pub fn advance(&mut self, dt: f64) {
        let total = self.duration();
        let next = match self.playback {
            Playback::Paused => return,
            Playback::Forward => (self.playhead + dt).min(total),
            Playback::Backward => (self.playhead - dt).max(0.0),
        };
        if next != self.playhead {
            self.playhead = next;
            self.dirty = true;
        }
        if (self.playback == Playback::Forward && next >= total)
            || (self.playback == Playback::Backward && next <= 0.0)
        {
            self.playback = Playback::Paused;
        }
    }

    pub fn pose_of(&self, index: usize) -> Option<Pose> {
        let track = self.tracks.get(index)?;
        let resolved = self.resolved.get(index)?;
        let t = normalize(self.playhead, track.delay, track.delay + track.duration);
        Some(Pose::interpolate(
            &resolved.from,
            &resolved.to,
            track.ease.apply(t),
        ))
    }

    /// Style writes for every track, or nothing if unchanged since the last call.
    pub fn render(&mut self) -> Vec<StyleWrite> {
        if !self.dirty {
            return Vec::new();
        }
        self.dirty = false;
        (0..self.tracks.len())
            .filter_map(|i| {
                self.pose_of(i).map(|pose| StyleWrite {
                    node: self.tracks[i].node,
                    css: pose.css(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::layout::fake::FakeLayout;
    use pretty_assertions::assert_eq;

    fn fade_up(node: NodeId) -> Timeline {
        let mut timeline = Timeline::from_to(
            node,
            MotionState::new().opacity(0.0).y(60.0),
            MotionState::new().opacity(1.0).y(0.0),
            1.0,
            Ease::Linear,
        );
        timeline.resolve(&FakeLayout::default());
        timeline
    }

    #[test]
    fn test_initial_render_shows_from_state() {
        let mut timeline = fade_up(1);
        assert_eq!(
            timeline.render(),
            vec![StyleWrite {
                node: 1,
                css: "opacity: 0; transform: translate3d(0px, 60px, 0px);".to_string(),
            }]
        );
        // Nothing changed, nothing to write.
        assert!(timeline.render().is_empty());
    }

    #[test]
    fn test_play_then_reverse() {
        let mut timeline = fade_up(1);
        timeline.play();
        timeline.advance(0.5);
        assert_eq!(timeline.pose_of(0).unwrap().opacity, Some(0.5));
        timeline.advance(5.0);
        assert_eq!(timeline.progress(), 1.0);
        assert_eq!(timeline.playback(), Playback::Paused);

        timeline.reverse();
        timeline.advance(0.25);
        assert!((timeline.progress() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_stagger_offsets_tracks() {
        let timeline = Timeline::staggered(
            &[1, 2, 3],
            MotionState::new().opacity(0.0),
            MotionState::new().opacity(1.0),
            1.0,
            0.1,
            Ease::Linear,
        );
        let delays: Vec<f64> = timeline.tracks().iter().map(|t| t.delay).collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2]);
        assert!((timeline.duration() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_pause_and_resume_keep_direction() {
        let mut timeline = fade_up(1);
        timeline.reverse();
        timeline.pause();
        timeline.resume();
        assert_eq!(timeline.playback(), Playback::Backward);
    }

    #[test]
    fn test_measured_values_follow_layout() {
        let layout = FakeLayout::default().with_scroll_width(7, 3_280.0);
        let mut timeline = Timeline::from_to(
            7,
            MotionState::new().x(0.0),
            MotionState::new().x_value(Value::OverflowX(7)),
            1.0,
            Ease::Linear,
        );
        assert!(timeline.is_measured());
        timeline.resolve(&layout);
        timeline.complete();
        assert_eq!(timeline.pose_of(0).unwrap().x, Some(-2_000.0));
    }

    #[test]
    fn test_css_combines_transforms() {
        let pose = Pose {
            opacity: None,
            x: None,
            y: None,
            scale: Some(0.8),
            rotation: Some(10.0),
        };
        assert_eq!(pose.css(), "transform: scale(0.8) rotate(10deg);");
        assert_eq!(Pose::default().css(), "");
    }
}
