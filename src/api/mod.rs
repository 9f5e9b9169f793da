mod animation;
mod color_palette;
mod gauge_board;
mod gauge_config;
mod gauge_snapshot;
mod gauge_spec;
mod gauge_style;
mod live_gauge;
mod scene_builder;
mod size_preset;

pub use animation::{
    ABOVE_THRESHOLD_WARNING, BELOW_THRESHOLD_WARNING, Easing, PointerTween, ReadoutTween,
    TRANSITION_DURATION, Transition, TransitionFrame, threshold_warning,
};
pub use color_palette::{ColorPalette, ColorPaletteKind};
pub use gauge_board::GaugeBoard;
pub use gauge_config::{BLANK_UNIT, GaugeConfig, build_config, merge_config, normalize_unit};
pub use gauge_snapshot::{
    GAUGE_SNAPSHOT_JSON_SCHEMA_V1, GaugeSnapshot, GaugeSnapshotJsonContractV1,
};
pub use gauge_spec::{GaugeSpec, RawValue};
pub use gauge_style::GaugeStyle;
pub use live_gauge::LiveGauge;
pub use scene_builder::{
    BIG_TICK_CLASS, GaugeElementIds, GaugeScene, LABEL_CLASS, READOUT_CLASS, SMALL_TICK_CLASS,
    WARNING_CLASS, build_gauge_scene,
};
pub use size_preset::{SizePreset, SizePresetKind};
