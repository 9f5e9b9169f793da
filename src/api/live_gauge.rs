use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{GaugeError, GaugeResult};
use crate::render::{RenderFrame, Renderer, SvgRenderer, Transform};

use super::{
    Easing, GaugeConfig, GaugeScene, GaugeSnapshot, GaugeSpec, Transition, build_gauge_scene,
};

#[derive(Debug, Clone, PartialEq)]
struct ActiveTransition {
    transition: Transition,
    started_at: Duration,
}

/// One drawn gauge and the state of its animated elements.
///
/// Time is supplied by the host as a monotonic timestamp; the gauge never
/// reads a clock itself. The value a transition starts from is the number
/// currently on screen, so back-to-back updates chain smoothly.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveGauge {
    id: String,
    config: GaugeConfig,
    scene: GaugeScene,
    easing: Easing,
    displayed_value: f64,
    pointer_transform: Option<Transform>,
    readout_text: String,
    warning_text: String,
    active: Option<ActiveTransition>,
}

impl LiveGauge {
    /// Draws the static gauge. The readout starts at the range minimum and
    /// the pointer stays unplaced until the first transition frame.
    pub fn new(id: impl Into<String>, config: GaugeConfig) -> GaugeResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(GaugeError::InvalidData(
                "gauge id must not be empty".to_owned(),
            ));
        }
        config.style.validate()?;

        let scene = build_gauge_scene(&id, &config);
        let readout_text = scene.readout.text.clone();
        debug!(
            gauge = %id,
            min_val = config.min_val,
            max_val = config.max_val,
            size = config.size.kind.name(),
            palette = config.palette.kind.name(),
            "drew gauge"
        );

        Ok(Self {
            displayed_value: config.min_val,
            id,
            config,
            scene,
            easing: Easing::default(),
            pointer_transform: None,
            readout_text,
            warning_text: String::new(),
            active: None,
        })
    }

    /// Draws a gauge from a host spec and starts its first transition to
    /// the spec's current value.
    pub fn create(spec: &GaugeSpec, now: Duration) -> GaugeResult<Self> {
        let mut gauge = Self::new(spec.id.clone(), spec.to_config())?;
        gauge.transition(spec.target_value(), now);
        Ok(gauge)
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    #[must_use]
    pub fn scene(&self) -> &GaugeScene {
        &self.scene
    }

    #[must_use]
    pub fn displayed_value(&self) -> f64 {
        self.displayed_value
    }

    #[must_use]
    pub fn readout_text(&self) -> &str {
        &self.readout_text
    }

    #[must_use]
    pub fn warning_text(&self) -> &str {
        &self.warning_text
    }

    #[must_use]
    pub fn pointer_transform(&self) -> Option<Transform> {
        self.pointer_transform
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_transition(&self) -> Option<&Transition> {
        self.active.as_ref().map(|active| &active.transition)
    }

    /// Starts animating towards `new_value`.
    ///
    /// An in-flight transition is sampled at `now` and replaced, so the new
    /// one starts from whatever the readout shows at that instant. The
    /// warning text switches immediately.
    pub fn transition(&mut self, new_value: f64, now: Duration) -> &Transition {
        if self.active.is_some() {
            self.advance(now);
        }

        let transition =
            Transition::new(self.displayed_value, new_value, &self.config).with_easing(self.easing);
        self.warning_text = transition.warning().to_owned();
        debug!(
            gauge = %self.id,
            from = transition.from_value(),
            to = new_value,
            warning = transition.warning(),
            "start transition"
        );

        let active = self.active.insert(ActiveTransition {
            transition,
            started_at: now,
        });
        &active.transition
    }

    /// Applies the animation frame for `now`. Returns `true` while a
    /// transition is still running afterwards.
    pub fn advance(&mut self, now: Duration) -> bool {
        let Some(active) = &self.active else {
            return false;
        };

        let elapsed = now.saturating_sub(active.started_at);
        let frame = active.transition.frame_after(elapsed);
        let finished = active.transition.is_finished(elapsed);
        trace!(gauge = %self.id, progress = frame.progress, "advance transition");

        self.pointer_transform = Some(frame.pointer);
        self.readout_text = frame.readout_text;
        self.displayed_value = frame.displayed_value;

        if finished {
            debug!(
                gauge = %self.id,
                value = self.displayed_value,
                "transition finished"
            );
            self.active = None;
        }
        !finished
    }

    /// Jumps straight to the end of the running transition, if any.
    pub fn finish(&mut self) {
        let end = self
            .active
            .as_ref()
            .map(|active| active.started_at + active.transition.duration());
        if let Some(end) = end {
            self.advance(end);
        }
    }

    /// Full frame for the current animation state.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        self.scene
            .compose(self.pointer_transform, &self.readout_text, &self.warning_text)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> GaugeResult<()> {
        renderer.render(&self.build_render_frame())
    }

    /// Current state as a standalone SVG document.
    pub fn to_svg(&self) -> GaugeResult<String> {
        let mut renderer = SvgRenderer::new();
        self.render(&mut renderer)?;
        Ok(renderer.into_document())
    }

    #[must_use]
    pub fn snapshot(&self) -> GaugeSnapshot {
        GaugeSnapshot {
            id: self.id.clone(),
            config: self.config.clone(),
            displayed_value: self.displayed_value,
            readout_text: self.readout_text.clone(),
            warning_text: self.warning_text.clone(),
            pointer_transform: self.pointer_transform,
            target_value: self.active_transition().map(Transition::to_value),
        }
    }
}
