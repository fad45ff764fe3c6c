use orbit::geometry::{CONTAINER_OPEN_SIZE, GLOW_OPEN_SIZE, Layout, Metrics, Point};
use orbit::Phase;

pub mod view;

pub use view::{IconSet, draw};

pub const AREA_PADDING: f64 = 40.0; // room for the ambient glow
pub const TOOLTIP_ROOM: f64 = 140.0; // tooltips open to the right
pub const TOOLTIP_GAP: f64 = 12.0;
pub const CENTER_TOOLTIP_GAP: f64 = 16.0;
pub const ICON_SIZE: i32 = 20;
pub const PLUS_ARM: f64 = 7.0; // half the plus glyph's stroke length

/// Widget center inside the drawing area. The container grows from its
/// top-left corner, so the center moves as the ring opens.
pub fn center_for(phase: Phase, metrics: &Metrics) -> Point {
    let open_half = CONTAINER_OPEN_SIZE / 2.0;
    let reach = metrics.radius + metrics.item_size / 2.0;
    let padding = AREA_PADDING.max(reach - open_half + AREA_PADDING / 2.0);
    let half = Layout::container_size(phase) / 2.0;
    Point::new(padding + half, padding + half)
}

pub fn area_size(metrics: &Metrics) -> (i32, i32) {
    let center = center_for(Phase::Open, metrics);
    let reach = (metrics.radius + metrics.item_size / 2.0).max(GLOW_OPEN_SIZE / 2.0);
    let width = center.x + reach + TOOLTIP_ROOM;
    let height = center.y + reach + AREA_PADDING / 2.0;
    (width.ceil() as i32, height.ceil() as i32)
}
