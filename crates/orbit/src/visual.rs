use crate::nav::{Label, NavItem};
use crate::widget::Phase;

pub const HOVER_SCALE: f64 = 1.1;
pub const CENTER_HOVER_SCALE: f64 = 1.05;
pub const CENTER_OPEN_ROTATION: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Active,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    Accent,
    Raised,
    Resting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemVisual {
    pub fill: Fill,
    pub shadow: Shadow,
    pub scale: f64,
    pub tooltip: Option<Label>,
}

impl ItemVisual {
    /// Active decides the fill, hover decides scale and tooltip. Shadow
    /// follows priority active > hovered > resting.
    pub fn resolve(item: &NavItem, active: bool, hovered: bool) -> Self {
        let shadow = if active {
            Shadow::Accent
        } else if hovered {
            Shadow::Raised
        } else {
            Shadow::Resting
        };

        Self {
            fill: if active { Fill::Active } else { Fill::Neutral },
            shadow,
            scale: if hovered { HOVER_SCALE } else { 1.0 },
            tooltip: hovered.then(|| item.label.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterFill {
    Primary,
    Dark,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CenterVisual {
    pub fill: CenterFill,
    pub scale: f64,
    pub pulsing: bool,
    pub tooltip: Option<&'static str>,
}

impl CenterVisual {
    pub fn resolve(phase: Phase, hovered: bool) -> Self {
        let open = phase == Phase::Open;
        Self {
            fill: if open {
                CenterFill::Dark
            } else {
                CenterFill::Primary
            },
            scale: if hovered { CENTER_HOVER_SCALE } else { 1.0 },
            pulsing: !open,
            tooltip: hovered.then_some(if open { "Close" } else { "Menu" }),
        }
    }
}

pub fn center_rotation(progress: f64) -> f64 {
    CENTER_OPEN_ROTATION * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavItems;

    #[test]
    fn test_item_visual_states() {
        let nav = NavItems::default();
        let item = nav.home();

        let idle = ItemVisual::resolve(item, false, false);
        assert_eq!(idle.fill, Fill::Neutral);
        assert_eq!(idle.shadow, Shadow::Resting);
        assert_eq!(idle.scale, 1.0);
        assert_eq!(idle.tooltip, None);

        let hovered = ItemVisual::resolve(item, false, true);
        assert_eq!(hovered.shadow, Shadow::Raised);
        assert_eq!(hovered.scale, HOVER_SCALE);
        assert_eq!(hovered.tooltip.as_ref().map(|l| l.as_str()), Some("Home"));

        let active_hovered = ItemVisual::resolve(item, true, true);
        assert_eq!(active_hovered.fill, Fill::Active);
        assert_eq!(active_hovered.shadow, Shadow::Accent);
        assert_eq!(active_hovered.scale, HOVER_SCALE);
    }

    #[test]
    fn test_center_visual_states() {
        let closed = CenterVisual::resolve(Phase::Closed, true);
        assert_eq!(closed.tooltip, Some("Menu"));
        assert!(closed.pulsing);

        let open = CenterVisual::resolve(Phase::Open, true);
        assert_eq!(open.tooltip, Some("Close"));
        assert_eq!(open.fill, CenterFill::Dark);
        assert!(!open.pulsing);

        assert_eq!(CenterVisual::resolve(Phase::Open, false).tooltip, None);
    }

    #[test]
    fn test_center_rotation_follows_progress() {
        assert_eq!(center_rotation(0.0), 0.0);
        assert_eq!(center_rotation(1.0), 45.0);
        assert_eq!(center_rotation(1.2), 45.0);
    }
}
