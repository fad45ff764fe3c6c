use crate::geometry::{Layout, Metrics, Point, Target};
use crate::location::{LocationQuery, Navigator};
use crate::nav::{ItemId, NavItem, NavItems};
use crate::visual::{CenterVisual, ItemVisual};
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
pub enum Phase {
    #[default]
    Closed,
    Open,
}

/// Mutable part of the widget. Active item is not stored here; it is
/// derived from the location on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub phase: Phase,
    pub hovered: Option<ItemId>,
    pub center_hovered: bool,
}

impl WidgetState {
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn toggle(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Closed => Phase::Open,
            Phase::Open => Phase::Closed,
        };
        self.phase
    }

    fn set_phase(&mut self, phase: Phase) -> bool {
        let changed = self.phase != phase;
        self.phase = phase;
        changed
    }

    pub fn enter_item(&mut self, id: &ItemId) -> bool {
        if self.hovered.as_ref() == Some(id) {
            return false;
        }
        self.hovered = Some(id.clone());
        true
    }

    /// A leave for an item that is no longer the hovered one is stale and
    /// does not clear the newer hover.
    pub fn leave_item(&mut self, id: &ItemId) -> bool {
        if self.hovered.as_ref() != Some(id) {
            return false;
        }
        self.hovered = None;
        true
    }

    pub fn set_center_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.center_hovered != hovered;
        self.center_hovered = hovered;
        changed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub should_redraw: bool,
    pub phase_changed: bool,
}

impl Outcome {
    pub fn new(should_redraw: bool, phase_changed: bool) -> Self {
        Self {
            should_redraw,
            phase_changed,
        }
    }

    pub fn redraw() -> Self {
        Self::new(true, false)
    }

    pub fn phase() -> Self {
        Self::new(true, true)
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn merge(self, other: Self) -> Self {
        Self::new(
            self.should_redraw || other.should_redraw,
            self.phase_changed || other.phase_changed,
        )
    }
}

pub struct RadialNav {
    items: NavItems,
    state: WidgetState,
    layout: Layout,
    navigator: Box<dyn Navigator>,
    location: Box<dyn LocationQuery>,
}

impl RadialNav {
    pub fn new(
        items: NavItems,
        metrics: Metrics,
        navigator: impl Navigator + 'static,
        location: impl LocationQuery + 'static,
    ) -> Self {
        let layout = Layout::new(Point::default(), &items, metrics);
        Self {
            items,
            state: WidgetState::default(),
            layout,
            navigator: Box::new(navigator),
            location: Box::new(location),
        }
    }

    pub fn items(&self) -> &NavItems {
        &self.items
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn set_center(&mut self, center: Point) {
        if self.layout.center != center {
            self.layout = Layout::new(center, &self.items, self.layout.metrics);
        }
    }

    /// Swaps the item set (config reload). Hover on an item that no longer
    /// exists is dropped.
    pub fn set_items(&mut self, items: NavItems, metrics: Metrics) {
        if let Some(id) = &self.state.hovered
            && items.get(id).is_none()
        {
            self.state.hovered = None;
        }
        self.layout = Layout::new(self.layout.center, &items, metrics);
        self.items = items;
    }

    pub fn toggle(&mut self) -> Outcome {
        let phase = self.state.toggle();
        log::debug!("Navigation {}", phase);
        Outcome::phase()
    }

    pub fn close(&mut self) -> Outcome {
        if self.state.set_phase(Phase::Closed) {
            Outcome::phase()
        } else {
            Outcome::none()
        }
    }

    pub fn open(&mut self) -> Outcome {
        if self.state.set_phase(Phase::Open) {
            Outcome::phase()
        } else {
            Outcome::none()
        }
    }

    pub fn select(&mut self, id: &ItemId) -> Outcome {
        if !self.state.is_open() {
            log::debug!("Ignoring selection of '{}' while closed", id);
            return Outcome::none();
        }
        let Some(item) = self.items.get(id) else {
            log::debug!("Ignoring selection of unknown item '{}'", id);
            return Outcome::none();
        };

        log::info!("Navigating to {}", item.destination);
        self.navigator.navigate(&item.destination);
        self.state.set_phase(Phase::Closed);
        Outcome::phase()
    }

    pub fn active_id(&self) -> &ItemId {
        let location = self.location.current();
        let item = self
            .items
            .find_by_destination(location.as_str())
            .unwrap_or_else(|| self.items.home());
        &item.id
    }

    pub fn item_enter(&mut self, id: &ItemId) -> Outcome {
        Self::redraw_if(self.state.enter_item(id))
    }

    pub fn item_leave(&mut self, id: &ItemId) -> Outcome {
        Self::redraw_if(self.state.leave_item(id))
    }

    pub fn center_enter(&mut self) -> Outcome {
        Self::redraw_if(self.state.set_center_hovered(true))
    }

    pub fn center_leave(&mut self) -> Outcome {
        Self::redraw_if(self.state.set_center_hovered(false))
    }

    pub fn pointer_moved(&mut self, point: Point) -> Outcome {
        let target = self.layout.hit(point, self.state.phase);

        let next_item = match &target {
            Some(Target::Item(id)) => Some(id.clone()),
            _ => None,
        };

        let mut outcome = Outcome::none();
        if self.state.hovered != next_item {
            if let Some(previous) = self.state.hovered.clone() {
                outcome = outcome.merge(self.item_leave(&previous));
            }
            if let Some(next) = &next_item {
                outcome = outcome.merge(self.item_enter(next));
            }
        }

        let over_center = matches!(target, Some(Target::Center));
        outcome.merge(if over_center {
            self.center_enter()
        } else {
            self.center_leave()
        })
    }

    pub fn pointer_left(&mut self) -> Outcome {
        let mut outcome = self.center_leave();
        if let Some(previous) = self.state.hovered.clone() {
            outcome = outcome.merge(self.item_leave(&previous));
        }
        outcome
    }

    pub fn activate(&mut self, point: Point) -> Outcome {
        match self.layout.hit(point, self.state.phase) {
            Some(Target::Center) => self.toggle(),
            Some(Target::Item(id)) => self.select(&id),
            None => Outcome::none(),
        }
    }

    pub fn item_visual(&self, item: &NavItem) -> ItemVisual {
        ItemVisual::resolve(
            item,
            &item.id == self.active_id(),
            self.state.hovered.as_ref() == Some(&item.id),
        )
    }

    pub fn center_visual(&self) -> CenterVisual {
        CenterVisual::resolve(self.state.phase, self.state.center_hovered)
    }

    fn redraw_if(changed: bool) -> Outcome {
        if changed {
            Outcome::redraw()
        } else {
            Outcome::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Destination;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Harness {
        nav: RadialNav,
        visits: Rc<RefCell<Vec<Destination>>>,
        location: Rc<RefCell<Destination>>,
    }

    fn harness() -> Harness {
        let visits = Rc::new(RefCell::new(Vec::new()));
        let location = Rc::new(RefCell::new(Destination::from("/")));

        let nav = {
            let visits = visits.clone();
            let location_read = location.clone();
            RadialNav::new(
                NavItems::default(),
                Metrics::default(),
                move |d: &Destination| visits.borrow_mut().push(d.clone()),
                move || location_read.borrow().clone(),
            )
        };

        Harness {
            nav,
            visits,
            location,
        }
    }

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn test_starts_closed_without_hover() {
        let h = harness();
        assert_eq!(h.nav.state(), &WidgetState::default());
        assert_eq!(h.nav.phase(), Phase::Closed);
    }

    #[test]
    fn test_toggle_round_trip_keeps_hover() {
        let mut h = harness();
        h.nav.center_enter();
        h.nav.item_enter(&id("contact"));
        let before = h.nav.state().clone();

        assert!(h.nav.toggle().phase_changed);
        assert_eq!(h.nav.phase(), Phase::Open);
        h.nav.toggle();

        assert_eq!(h.nav.state(), &before);
    }

    #[test]
    fn test_select_navigates_then_closes() {
        let mut h = harness();
        h.nav.toggle();
        h.nav.item_enter(&id("home"));

        let outcome = h.nav.select(&id("projects"));

        assert!(outcome.phase_changed);
        assert_eq!(h.nav.phase(), Phase::Closed);
        assert_eq!(*h.visits.borrow(), vec![Destination::from("/projects")]);
    }

    #[test]
    fn test_select_closes_regardless_of_hover() {
        for hovered in [None, Some("home"), Some("projects"), Some("contact")] {
            let mut h = harness();
            h.nav.toggle();
            if let Some(hovered) = hovered {
                h.nav.item_enter(&id(hovered));
            }
            h.nav.center_enter();
            h.nav.select(&id("contact"));
            assert_eq!(h.nav.phase(), Phase::Closed);
        }
    }

    #[test]
    fn test_select_while_closed_is_ignored() {
        let mut h = harness();
        assert_eq!(h.nav.select(&id("projects")), Outcome::none());
        assert!(h.visits.borrow().is_empty());
    }

    #[test]
    fn test_select_unknown_item_is_ignored() {
        let mut h = harness();
        h.nav.toggle();
        assert_eq!(h.nav.select(&id("blog")), Outcome::none());
        assert_eq!(h.nav.phase(), Phase::Open);
        assert!(h.visits.borrow().is_empty());
    }

    #[test]
    fn test_active_id_follows_location() {
        let h = harness();
        assert_eq!(h.nav.active_id().as_str(), "home");

        *h.location.borrow_mut() = Destination::from("/projects");
        assert_eq!(h.nav.active_id().as_str(), "projects");

        *h.location.borrow_mut() = Destination::from("/contact");
        assert_eq!(h.nav.active_id().as_str(), "contact");
    }

    #[test]
    fn test_active_id_defaults_to_home() {
        let h = harness();
        *h.location.borrow_mut() = Destination::from("/nowhere");
        assert_eq!(h.nav.active_id().as_str(), "home");
    }

    #[test]
    fn test_single_hover_and_stale_leave() {
        let mut h = harness();
        h.nav.item_enter(&id("home"));
        h.nav.item_enter(&id("contact"));
        assert_eq!(h.nav.state().hovered, Some(id("contact")));

        assert_eq!(h.nav.item_leave(&id("home")), Outcome::none());
        assert_eq!(h.nav.state().hovered, Some(id("contact")));

        assert_eq!(h.nav.item_leave(&id("contact")), Outcome::redraw());
        assert_eq!(h.nav.state().hovered, None);
    }

    #[test]
    fn test_hover_never_navigates() {
        let mut h = harness();
        h.nav.toggle();
        h.nav.item_enter(&id("projects"));
        h.nav.item_leave(&id("projects"));
        h.nav.center_enter();
        h.nav.center_leave();
        assert!(h.visits.borrow().is_empty());
        assert_eq!(h.nav.phase(), Phase::Open);
    }

    #[test]
    fn test_pointer_drives_hover() {
        let mut h = harness();
        let center = Point::new(110.0, 110.0);
        h.nav.set_center(center);

        assert!(h.nav.pointer_moved(center).should_redraw);
        assert!(h.nav.state().center_hovered);

        // closed ring: the home slot is empty space
        h.nav.pointer_moved(Point::new(20.0, 110.0));
        assert!(!h.nav.state().center_hovered);
        assert_eq!(h.nav.state().hovered, None);

        h.nav.toggle();
        h.nav.pointer_moved(Point::new(20.0, 110.0));
        assert_eq!(h.nav.state().hovered, Some(id("home")));

        h.nav.pointer_left();
        assert_eq!(h.nav.state().hovered, None);
    }

    #[test]
    fn test_activate_dispatches_clicks() {
        let mut h = harness();
        let center = Point::new(110.0, 110.0);
        h.nav.set_center(center);

        h.nav.activate(center);
        assert_eq!(h.nav.phase(), Phase::Open);

        // contact sits at 150°, below and to the right of center
        let contact = h.nav.layout().geometry(&id("contact")).unwrap().center;
        h.nav.activate(contact);
        assert_eq!(h.nav.phase(), Phase::Closed);
        assert_eq!(*h.visits.borrow(), vec![Destination::from("/contact")]);

        assert_eq!(h.nav.activate(Point::new(500.0, 500.0)), Outcome::none());
    }

    #[test]
    fn test_set_items_drops_stale_hover() {
        let mut h = harness();
        h.nav.item_enter(&id("contact"));

        let items = NavItems::new(
            vec![crate::nav::NavItem::new(
                "home",
                "Home",
                crate::nav::Icon::Home,
                0.0,
                "/",
            )],
            &id("home"),
        )
        .unwrap();
        h.nav.set_items(items, Metrics::default());

        assert_eq!(h.nav.state().hovered, None);
        assert_eq!(h.nav.items().len(), 1);
    }
}
