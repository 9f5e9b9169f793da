//! live-gauge: an animated circular gauge for live sensor readings.
//!
//! A gauge is configured once (range, size preset, color palette, unit),
//! laid out into a backend-agnostic [`render::RenderFrame`], and animated
//! towards each new reading by a host-driven frame clock. Frames can be
//! written out as SVG, rasterized with Cairo, or consumed headless.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GaugeBoard, GaugeConfig, GaugeSpec, LiveGauge, build_config};
pub use error::{GaugeError, GaugeResult};
