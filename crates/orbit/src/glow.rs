use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pointer position relative to a card's top-left corner. Cards far from
/// the pointer get coordinates outside their own bounds, which is what
/// lets the glow bleed in from the edge nearest the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlowVars {
    pub mouse_x: f64,
    pub mouse_y: f64,
}

impl GlowVars {
    pub fn css(&self) -> String {
        format!("--mouse-x: {}px; --mouse-y: {}px;", self.mouse_x, self.mouse_y)
    }

    pub fn point(&self) -> Point {
        Point::new(self.mouse_x, self.mouse_y)
    }
}

pub fn glow_at(pointer: Point, bounds: Rect) -> GlowVars {
    GlowVars {
        mouse_x: pointer.x - bounds.x,
        mouse_y: pointer.y - bounds.y,
    }
}

pub fn glow_for_cards(pointer: Point, cards: &[Rect]) -> Vec<GlowVars> {
    cards.iter().map(|&bounds| glow_at(pointer, bounds)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_is_relative_to_card() {
        let vars = glow_at(Point::new(150.0, 40.0), Rect::new(100.0, 20.0, 300.0, 280.0));
        assert_eq!(vars, GlowVars { mouse_x: 50.0, mouse_y: 20.0 });
        assert_eq!(vars.css(), "--mouse-x: 50px; --mouse-y: 20px;");
    }

    #[test]
    fn test_glow_outside_card_goes_negative() {
        let vars = glow_at(Point::new(10.0, 10.0), Rect::new(100.0, 20.0, 300.0, 280.0));
        assert_eq!(vars.point(), Point::new(-90.0, -10.0));
    }

    #[test]
    fn test_all_cards_follow_pointer() {
        let cards = [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(108.0, 0.0, 100.0, 100.0),
        ];
        let vars = glow_for_cards(Point::new(50.0, 50.0), &cards);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].point(), Point::new(50.0, 50.0));
        assert_eq!(vars[1].point(), Point::new(-58.0, 50.0));
    }
}
