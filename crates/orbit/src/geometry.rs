use crate::nav::{ItemId, NavItems};
use crate::widget::Phase;
use std::f64::consts::PI;

pub const ORBIT_RADIUS: f64 = 90.0; // item orbital radius
pub const ITEM_SIZE: f64 = 48.0; // item button diameter
pub const CENTER_SIZE: f64 = 64.0; // toggle button diameter
pub const CONTAINER_OPEN_SIZE: f64 = 220.0;
pub const CONTAINER_CLOSED_SIZE: f64 = 64.0;
pub const GLOW_OPEN_SIZE: f64 = 280.0;
pub const GLOW_CLOSED_SIZE: f64 = 80.0;
pub const GLOW_OPEN_OPACITY: f64 = 0.15;
pub const GLOW_CLOSED_OPACITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Cartesian offset from the circle center for an angle in degrees where
/// 0 points up and angles grow clockwise (screen y grows downwards).
pub fn polar_offset(angle_deg: f64, radius: f64) -> Point {
    let radians = (angle_deg - 90.0) * PI / 180.0;
    Point::new(radius * radians.cos(), radius * radians.sin())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemGeometry {
    pub offset: Point,
    pub center: Point,
    pub origin: Point,
    pub size: f64,
}

impl ItemGeometry {
    pub fn calculate(angle_deg: f64, center: Point, radius: f64, size: f64) -> Self {
        let offset = polar_offset(angle_deg, radius);
        let item_center = center.offset(offset);
        Self {
            offset,
            center: item_center,
            origin: Point::new(item_center.x - size / 2.0, item_center.y - size / 2.0),
            size,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.size / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Center,
    Item(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub radius: f64,
    pub item_size: f64,
    pub center_size: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            radius: ORBIT_RADIUS,
            item_size: ITEM_SIZE,
            center_size: CENTER_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub center: Point,
    pub metrics: Metrics,
    pub items: Vec<(ItemId, ItemGeometry)>,
}

impl Layout {
    pub fn new(center: Point, items: &NavItems, metrics: Metrics) -> Self {
        let items = items
            .iter()
            .map(|item| {
                (
                    item.id.clone(),
                    ItemGeometry::calculate(item.angle, center, metrics.radius, metrics.item_size),
                )
            })
            .collect();

        Self {
            center,
            metrics,
            items,
        }
    }

    pub fn geometry(&self, id: &ItemId) -> Option<&ItemGeometry> {
        self.items
            .iter()
            .find(|(item_id, _)| item_id == id)
            .map(|(_, geometry)| geometry)
    }

    /// Items sit above the toggle button, so they win where both overlap.
    /// Items are only reachable while the ring is open.
    pub fn hit(&self, point: Point, phase: Phase) -> Option<Target> {
        if phase == Phase::Open
            && let Some((id, _)) = self.items.iter().find(|(_, g)| g.contains(point))
        {
            return Some(Target::Item(id.clone()));
        }

        (self.center.distance(point) <= self.metrics.center_size / 2.0).then_some(Target::Center)
    }

    pub fn container_size(phase: Phase) -> f64 {
        match phase {
            Phase::Open => CONTAINER_OPEN_SIZE,
            Phase::Closed => CONTAINER_CLOSED_SIZE,
        }
    }

    pub fn glow(phase: Phase) -> (f64, f64) {
        match phase {
            Phase::Open => (GLOW_OPEN_SIZE, GLOW_OPEN_OPACITY),
            Phase::Closed => (GLOW_CLOSED_SIZE, GLOW_CLOSED_OPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_zero_degrees_points_up() {
        assert_close(polar_offset(0.0, ORBIT_RADIUS), 0.0, -ORBIT_RADIUS);
    }

    #[test]
    fn test_ninety_degrees_points_right() {
        assert_close(polar_offset(90.0, ORBIT_RADIUS), ORBIT_RADIUS, 0.0);
    }

    #[test]
    fn test_two_seventy_degrees_points_left() {
        assert_close(polar_offset(270.0, 90.0), -90.0, 0.0);
    }

    #[test]
    fn test_default_item_offsets() {
        let layout = Layout::new(Point::default(), &NavItems::default(), Metrics::default());
        let offsets: Vec<Point> = layout.items.iter().map(|(_, g)| g.offset).collect();

        assert_close(offsets[0], -90.0, 0.0);
        // 30° sits at -60° in math convention
        assert_close(offsets[1], 45.0, -90.0 * (3f64.sqrt() / 2.0));
        // 150° sits at 60°
        assert_close(offsets[2], 45.0, 90.0 * (3f64.sqrt() / 2.0));
    }

    #[test]
    fn test_origin_is_centered_on_point() {
        let g = ItemGeometry::calculate(90.0, Point::new(110.0, 110.0), 90.0, 48.0);
        assert_close(g.center, 200.0, 110.0);
        assert_close(g.origin, 176.0, 86.0);
    }

    #[test]
    fn test_hit_center_and_items() {
        let center = Point::new(110.0, 110.0);
        let layout = Layout::new(center, &NavItems::default(), Metrics::default());

        assert_eq!(layout.hit(center, Phase::Closed), Some(Target::Center));
        assert_eq!(layout.hit(center, Phase::Open), Some(Target::Center));

        let home = Point::new(20.0, 110.0);
        assert_eq!(layout.hit(home, Phase::Closed), None);
        assert_eq!(
            layout.hit(home, Phase::Open),
            Some(Target::Item(ItemId::from("home")))
        );

        assert_eq!(layout.hit(Point::new(0.0, 0.0), Phase::Open), None);
    }

    #[test]
    fn test_container_and_glow_sizes() {
        assert_eq!(Layout::container_size(Phase::Open), 220.0);
        assert_eq!(Layout::container_size(Phase::Closed), 64.0);
        assert_eq!(Layout::glow(Phase::Open), (280.0, 0.15));
        assert_eq!(Layout::glow(Phase::Closed), (80.0, 0.1));
    }
}
