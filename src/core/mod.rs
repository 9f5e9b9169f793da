pub mod format;
pub mod geometry;
pub mod scale;
pub mod ticks;
pub mod types;

pub use format::{
    format_compact_number, format_grouped_integer, integer_part, parse_int_lenient,
    parse_number_strict,
};
pub use geometry::{
    AnnularSector, arc_point, deg_to_rad, position_on_circle, rotate_translate, round_half_up,
    triangle_symbol,
};
pub use scale::GaugeScale;
pub use ticks::{LARGE_TICK_COUNT, label_values, large_tick_angles, small_tick_angles};
pub use types::{Point, Viewport};
