pub mod animation;
pub mod control;
pub mod geometry;
pub mod glow;
pub mod icon;
pub mod location;
mod macros;
pub mod nav;
pub mod project;
pub mod visual;
pub mod widget;

pub use geometry::{Layout, Metrics, Point, Target, polar_offset};
pub use nav::{Destination, Icon, ItemId, Label, NavConfig, NavConfigError, NavItem, NavItems};
pub use widget::{Outcome, Phase, RadialNav, WidgetState};
