use crate::gui::theme::ThemeColors;
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use orbit::geometry::Point;
use orbit::glow::{self, GlowVars, Rect};
use orbit::project::{self, Project};
use std::cell::Cell;
use std::rc::Rc;

const GLOW_RADIUS: f64 = 240.0;
const GLOW_OPACITY: f64 = 0.15;
const ENTRANCE_DURATION: u32 = 300;

#[derive(Clone)]
struct Card {
    revealer: gtk::Revealer,
    frame: gtk::Overlay,
    glow_area: gtk::DrawingArea,
    glow: Rc<Cell<Option<GlowVars>>>,
}

impl Card {
    fn new(project: &Project) -> Self {
        let content = gtk::Box::new(gtk::Orientation::Vertical, 8);
        content.add_css_class("project-card");

        let title = gtk::Label::new(Some(&project.title));
        title.add_css_class("project-title");
        title.set_xalign(0.0);
        content.append(&title);

        let description = gtk::Label::new(Some(&project.description));
        description.add_css_class("folio-muted");
        description.set_xalign(0.0);
        description.set_wrap(true);
        description.set_lines(3);
        description.set_ellipsize(gtk::pango::EllipsizeMode::End);
        description.set_vexpand(true);
        description.set_valign(gtk::Align::Start);
        content.append(&description);

        let tags = gtk::FlowBox::new();
        tags.set_selection_mode(gtk::SelectionMode::None);
        tags.set_column_spacing(8);
        tags.set_row_spacing(8);
        for tag in &project.tags {
            let label = gtk::Label::new(Some(tag));
            label.add_css_class("project-tag");
            tags.insert(&label, -1);
        }
        content.append(&tags);

        let actions = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        for (label, url) in project.links() {
            actions.append(&window::link_button(label, &url));
        }
        content.append(&actions);

        let glow = Rc::new(Cell::new(None));
        let glow_area = gtk::DrawingArea::new();
        glow_area.set_can_target(false);
        let glow_draw = glow.clone();
        glow_area.set_draw_func(move |area, cr, _, _| {
            let Some(vars) = glow_draw.get() else {
                return;
            };
            let colors = ThemeColors::from_context(&area.style_context());
            if let Err(e) = draw_glow(cr, vars, &colors) {
                log::error!("Card glow drawing error: {}", e);
            }
        });

        let frame = gtk::Overlay::new();
        frame.set_child(Some(&content));
        frame.add_overlay(&glow_area);
        frame.set_overflow(gtk::Overflow::Hidden);

        let revealer = gtk::Revealer::new();
        revealer.set_transition_type(gtk::RevealerTransitionType::SlideUp);
        revealer.set_transition_duration(ENTRANCE_DURATION);
        revealer.set_child(Some(&frame));

        Self {
            revealer,
            frame,
            glow_area,
            glow,
        }
    }

    fn set_glow(&self, vars: Option<GlowVars>) {
        self.glow.set(vars);
        self.glow_area.queue_draw();
    }
}

fn draw_glow(cr: &cairo::Context, vars: GlowVars, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let Point { x, y } = vars.point();
    let (r, g, b, _) = colors.primary.into_components();
    let gradient = cairo::RadialGradient::new(x, y, 0.0, x, y, GLOW_RADIUS);
    gradient.add_color_stop_rgba(0.0, r, g, b, GLOW_OPACITY);
    gradient.add_color_stop_rgba(1.0, r, g, b, 0.0);
    cr.set_source(&gradient)?;
    cr.paint()
}

pub struct ProjectGrid {
    root: gtk::FlowBox,
    cards: Rc<Vec<Card>>,
}

impl ProjectGrid {
    pub fn new(projects: &[Project]) -> Self {
        let root = gtk::FlowBox::new();
        root.set_selection_mode(gtk::SelectionMode::None);
        root.set_homogeneous(true);
        root.set_min_children_per_line(1);
        root.set_max_children_per_line(3);
        root.set_column_spacing(24);
        root.set_row_spacing(24);
        root.set_valign(gtk::Align::Start);

        let cards: Rc<Vec<Card>> = Rc::new(projects.iter().map(Card::new).collect());
        for card in cards.iter() {
            root.insert(&card.revealer, -1);
        }

        let motion = gtk::EventControllerMotion::new();
        let (cards_move, grid) = (cards.clone(), root.clone());
        motion.connect_motion(move |_, x, y| {
            let bounds: Vec<Rect> = cards_move
                .iter()
                .map(|card| {
                    card.frame
                        .compute_bounds(&grid)
                        .map(|b| {
                            Rect::new(
                                b.x() as f64,
                                b.y() as f64,
                                b.width() as f64,
                                b.height() as f64,
                            )
                        })
                        .unwrap_or_default()
                })
                .collect();
            let vars = glow::glow_for_cards(Point::new(x, y), &bounds);
            for (card, vars) in cards_move.iter().zip(vars) {
                card.set_glow(Some(vars));
            }
        });
        let cards_leave = cards.clone();
        motion.connect_leave(move |_| {
            for card in cards_leave.iter() {
                card.set_glow(None);
            }
        });
        root.add_controller(motion);

        Self { root, cards }
    }

    pub fn widget(&self) -> &gtk::FlowBox {
        &self.root
    }

    pub fn replay_entrance(&self) {
        for (i, card) in self.cards.iter().enumerate() {
            card.revealer.set_reveal_child(false);
            let revealer = card.revealer.clone();
            glib::timeout_add_local_once(project::card_delay(i), move || {
                revealer.set_reveal_child(true);
            });
        }
    }
}
