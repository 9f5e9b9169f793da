use std::time::Duration;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{GaugeError, GaugeResult};
use crate::render::Renderer;

use super::{GaugeConfig, GaugeSpec, LiveGauge};

/// Id-keyed set of gauges sharing one drawing surface.
///
/// Gauges are kept in creation order, which is also the order `advance`
/// and `render_all` visit them.
#[derive(Debug, Default)]
pub struct GaugeBoard {
    gauges: IndexMap<String, LiveGauge>,
}

impl GaugeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a gauge and immediately starts its transition to the spec's
    /// current value.
    pub fn create_live_gauge(&mut self, spec: &GaugeSpec, now: Duration) -> GaugeResult<&GaugeConfig> {
        if self.gauges.contains_key(&spec.id) {
            return Err(GaugeError::DuplicateGauge(spec.id.clone()));
        }
        let gauge = LiveGauge::create(spec, now)?;
        debug!(gauge = %spec.id, count = self.gauges.len() + 1, "register gauge");
        let entry = self.gauges.entry(spec.id.clone()).or_insert(gauge);
        Ok(entry.config())
    }

    /// Adds an already built gauge.
    pub fn insert(&mut self, gauge: LiveGauge) -> GaugeResult<()> {
        if self.gauges.contains_key(gauge.id()) {
            return Err(GaugeError::DuplicateGauge(gauge.id().to_owned()));
        }
        self.gauges.insert(gauge.id().to_owned(), gauge);
        Ok(())
    }

    /// Animates gauge `id` to a fresh reading.
    pub fn transition(&mut self, id: &str, new_value: f64, now: Duration) -> GaugeResult<()> {
        self.get_mut(id)?.transition(new_value, now);
        Ok(())
    }

    /// Applies the frame for `now` to every gauge. Returns how many are
    /// still animating.
    pub fn advance(&mut self, now: Duration) -> usize {
        self.gauges
            .values_mut()
            .map(|gauge| gauge.advance(now))
            .filter(|animating| *animating)
            .count()
    }

    pub fn get(&self, id: &str) -> GaugeResult<&LiveGauge> {
        self.gauges
            .get(id)
            .ok_or_else(|| GaugeError::UnknownGauge(id.to_owned()))
    }

    pub fn get_mut(&mut self, id: &str) -> GaugeResult<&mut LiveGauge> {
        self.gauges
            .get_mut(id)
            .ok_or_else(|| GaugeError::UnknownGauge(id.to_owned()))
    }

    pub fn remove(&mut self, id: &str) -> GaugeResult<LiveGauge> {
        self.gauges
            .shift_remove(id)
            .ok_or_else(|| GaugeError::UnknownGauge(id.to_owned()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LiveGauge> {
        self.gauges.values()
    }

    pub fn render(&self, id: &str, renderer: &mut impl Renderer) -> GaugeResult<()> {
        self.get(id)?.render(renderer)
    }

    pub fn render_all(&self, renderer: &mut impl Renderer) -> GaugeResult<()> {
        for gauge in self.gauges.values() {
            gauge.render(renderer)?;
        }
        Ok(())
    }
}
