use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::nav::{self, IconSet};
use crate::gui::pages::Pages;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use orbit::animation::RingAnimation;
use orbit::control::ControlCommand;
use orbit::location::Router;
use orbit::{Destination, Metrics, NavItems, Outcome, Phase, Point, RadialNav};
use relm4::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

const MAX_FRAME: Duration = Duration::from_millis(100);

pub struct AppModel {
    pub nav: Rc<RefCell<RadialNav>>,
    pub animation: Rc<RefCell<RingAnimation>>,
    pub router: Rc<RefCell<Router>>,
    pub icons: Rc<RefCell<IconSet>>,
    pub pages: Pages,
    pub nav_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    PointerMove(Point),
    PointerLeave,
    Click(Point),
    Navigate(Destination),
    Control(ControlCommand),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Control(command) => AppMsg::Control(command),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn items_or_default(config: &Config) -> (NavItems, Metrics) {
    match config.build_items() {
        Ok(items) => (items, config.metrics()),
        Err(e) => {
            log::error!("Invalid navigation config, using defaults: {}", e);
            (NavItems::default(), Metrics::default())
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Folio"),
            add_css_class: "folio-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Control(ControlCommand::Close));
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "overlay"]
            gtk::Overlay {
                #[name = "stack"]
                gtk::Stack {
                    set_hexpand: true,
                    set_vexpand: true,
                },

                #[name = "nav_area"]
                add_overlay = &gtk::DrawingArea {
                    set_halign: gtk::Align::Start,
                    set_valign: gtk::Align::Start,
                    add_css_class: "folio-nav",

                    add_controller = gtk::EventControllerMotion {
                        connect_motion[sender] => move |_, x, y| {
                            sender.input(AppMsg::PointerMove(Point::new(x, y)));
                        },
                        connect_leave[sender] => move |_| {
                            sender.input(AppMsg::PointerLeave);
                        }
                    },

                    add_controller = gtk::GestureClick {
                        set_button: gtk::gdk::BUTTON_PRIMARY,
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Click(Point::new(x, y)));
                        }
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_window(&root);

        let router = Rc::new(RefCell::new(Router::default()));
        let (items, metrics) = items_or_default(&config);
        let icons = IconSet::load(&items);
        let animation = RingAnimation::new(items.len());

        let navigate_sender = sender.clone();
        let location = router.clone();
        let mut radial = RadialNav::new(
            items,
            metrics,
            move |destination: &Destination| {
                navigate_sender.input(AppMsg::Navigate(destination.clone()));
            },
            move || location.borrow().current().clone(),
        );
        radial.set_center(nav::center_for(Phase::Closed, &metrics));

        let model = AppModel {
            nav: Rc::new(RefCell::new(radial)),
            animation: Rc::new(RefCell::new(animation)),
            router,
            icons: Rc::new(RefCell::new(icons)),
            pages: Pages::new(gtk::Stack::default()),
            nav_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.nav_area = widgets.nav_area.clone();
        model.pages = Pages::new(widgets.stack.clone());
        model
            .pages
            .populate(&config, model.router.borrow().current());
        model.resize_area(&metrics);

        let (nav_draw, anim_draw, icons_draw) = (
            model.nav.clone(),
            model.animation.clone(),
            model.icons.clone(),
        );
        widgets.nav_area.set_draw_func(move |area, cr, _, _| {
            let colors = ThemeColors::from_context(&area.style_context());
            if let Err(e) = nav::draw(
                cr,
                &nav_draw.borrow(),
                &anim_draw.borrow(),
                &icons_draw.borrow(),
                &colors,
            ) {
                log::error!("Drawing error: {}", e);
            }
        });

        let (nav_tick, anim_tick) = (model.nav.clone(), model.animation.clone());
        let last_frame = Cell::new(None::<i64>);
        widgets.nav_area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let dt = last_frame
                .replace(Some(now))
                .map(|prev| Duration::from_micros((now - prev).max(0) as u64))
                .unwrap_or_default()
                .min(MAX_FRAME);

            let moving = anim_tick.borrow_mut().tick(dt);
            if moving || nav_tick.borrow().center_visual().pulsing {
                area.queue_draw();
            }
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::PointerMove(point) => {
                let outcome = self.nav.borrow_mut().pointer_moved(point);
                self.apply(outcome);
            }
            AppMsg::PointerLeave => {
                let outcome = self.nav.borrow_mut().pointer_left();
                self.apply(outcome);
            }
            AppMsg::Click(point) => {
                let outcome = self.nav.borrow_mut().activate(point);
                self.apply(outcome);
            }
            AppMsg::Navigate(destination) => self.navigate(destination),
            AppMsg::Control(command) => {
                log::debug!("Control command: {}", command);
                let outcome = match command {
                    ControlCommand::Toggle => self.nav.borrow_mut().toggle(),
                    ControlCommand::Open => self.nav.borrow_mut().open(),
                    ControlCommand::Close => self.nav.borrow_mut().close(),
                    ControlCommand::Back => {
                        self.back();
                        Outcome::redraw()
                    }
                    ControlCommand::Goto(destination) => {
                        self.navigate(destination);
                        self.nav.borrow_mut().close().merge(Outcome::redraw())
                    }
                };
                self.apply(outcome);
            }
            AppMsg::ConfigReload => self.reload(),
        }
    }
}

impl AppModel {
    fn apply(&self, outcome: Outcome) {
        if outcome.phase_changed {
            let phase = self.nav.borrow().phase();
            let metrics = self.nav.borrow().layout().metrics;
            self.animation.borrow_mut().set_open(phase == Phase::Open);
            self.nav
                .borrow_mut()
                .set_center(nav::center_for(phase, &metrics));
        }
        if outcome.should_redraw {
            self.nav_area.queue_draw();
        }
    }

    fn navigate(&mut self, destination: Destination) {
        if !self.pages.show(&destination) {
            return;
        }
        if self.router.borrow_mut().push(destination) {
            log::info!("Location is now {}", self.router.borrow().current());
        }
        self.nav_area.queue_draw();
    }

    fn back(&mut self) {
        if !self.router.borrow().can_go_back() {
            log::debug!("No history to go back to");
            return;
        }
        let previous = self.router.borrow_mut().back().cloned();
        if let Some(destination) = previous {
            self.pages.show(&destination);
        }
    }

    fn resize_area(&self, metrics: &Metrics) {
        let (width, height) = nav::area_size(metrics);
        self.nav_area.set_size_request(width, height);
    }

    fn reload(&mut self) {
        let config = match config::load_config() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };
        let items = match config.build_items() {
            Ok(items) => items,
            Err(e) => {
                log::error!("Invalid navigation config, keeping the current one: {}", e);
                return;
            }
        };
        let metrics = config.metrics();

        // the icon theme may have changed along with the config
        orbit::icon::clear_cache();
        *self.icons.borrow_mut() = IconSet::load(&items);
        self.animation.borrow_mut().resize(items.len());
        {
            let mut nav = self.nav.borrow_mut();
            let phase = nav.phase();
            nav.set_items(items, metrics);
            nav.set_center(nav::center_for(phase, &metrics));
        }

        let current = self.router.borrow().current().clone();
        self.pages.populate(&config, &current);
        self.resize_area(&metrics);
        self.nav_area.queue_draw();
        log::info!("Configuration reloaded");
    }
}
