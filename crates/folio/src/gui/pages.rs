use crate::config::{Config, Profile};
use crate::gui::cards::ProjectGrid;
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use orbit::nav::Destination;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Page {
    Home,
    Projects,
    Contact,
}

impl Page {
    pub fn destination(self) -> Destination {
        match self {
            Page::Home => Destination::from("/"),
            Page::Projects => Destination::from("/projects"),
            Page::Contact => Destination::from("/contact"),
        }
    }

    pub fn from_destination(destination: &Destination) -> Option<Self> {
        Page::iter().find(|page| &page.destination() == destination)
    }
}

pub struct Pages {
    stack: gtk::Stack,
    grid: Option<ProjectGrid>,
}

impl Pages {
    pub fn new(stack: gtk::Stack) -> Self {
        stack.set_transition_type(gtk::StackTransitionType::Crossfade);
        stack.set_transition_duration(250);
        Self { stack, grid: None }
    }

    pub fn populate(&mut self, config: &Config, current: &Destination) {
        while let Some(child) = self.stack.first_child() {
            self.stack.remove(&child);
        }

        let grid = ProjectGrid::new(&config.projects);
        for page in Page::iter() {
            let content = match page {
                Page::Home => home_page(&config.profile),
                Page::Projects => projects_page(&grid),
                Page::Contact => contact_page(&config.profile),
            };
            let scroller = gtk::ScrolledWindow::new();
            scroller.set_hscrollbar_policy(gtk::PolicyType::Never);
            scroller.set_child(Some(&content));
            self.stack
                .add_named(&scroller, Some(page.destination().as_str()));
        }
        self.grid = Some(grid);

        self.show(current);
    }

    pub fn show(&self, destination: &Destination) -> bool {
        let Some(page) = Page::from_destination(destination) else {
            log::warn!("No page for {}", destination);
            return false;
        };
        self.stack.set_visible_child_name(destination.as_str());

        if page == Page::Projects
            && let Some(grid) = &self.grid
        {
            grid.replay_entrance();
        }
        true
    }
}

fn page_box(valign: gtk::Align) -> gtk::Box {
    let page = gtk::Box::new(gtk::Orientation::Vertical, 16);
    page.add_css_class("folio-page");
    page.set_valign(valign);
    page.set_vexpand(true);
    page
}

fn label(text: &str, class: &str) -> gtk::Label {
    let label = gtk::Label::new(Some(text));
    label.add_css_class(class);
    label.set_wrap(true);
    label
}

fn home_page(profile: &Profile) -> gtk::Box {
    let page = page_box(gtk::Align::Center);
    page.set_halign(gtk::Align::Center);

    page.append(&label("Hello, I'm", "folio-greeting"));
    page.append(&label(&profile.name, "folio-name"));
    let tagline = label(&profile.tagline, "folio-tagline");
    tagline.set_max_width_chars(40);
    tagline.set_justify(gtk::Justification::Center);
    page.append(&tagline);
    page
}

fn heading(page: &gtk::Box, title: &str, intro: &str) {
    let title = label(title, "folio-heading");
    title.set_xalign(0.0);
    page.append(&title);

    let intro = label(intro, "folio-muted");
    intro.set_xalign(0.0);
    intro.set_max_width_chars(60);
    intro.set_margin_bottom(32);
    page.append(&intro);
}

fn projects_page(grid: &ProjectGrid) -> gtk::Box {
    let page = page_box(gtk::Align::Start);
    heading(
        &page,
        "Projects",
        "A collection of my recent work. Each project represents a unique \
         challenge and showcases different aspects of my skills.",
    );
    page.append(grid.widget());
    page
}

fn contact_page(profile: &Profile) -> gtk::Box {
    let page = page_box(gtk::Align::Start);
    heading(
        &page,
        "Get in Touch",
        "Have a project in mind or just want to say hello? I'd love to hear from you.",
    );

    let info = label("Contact Info", "project-title");
    info.set_xalign(0.0);
    page.append(&info);
    for line in [&profile.email, &profile.location] {
        let line = label(line, "folio-muted");
        line.set_xalign(0.0);
        page.append(&line);
    }

    if !profile.links.is_empty() {
        let social = label("Social", "project-title");
        social.set_xalign(0.0);
        social.set_margin_top(24);
        page.append(&social);

        let links = gtk::Box::new(gtk::Orientation::Horizontal, 16);
        for link in &profile.links {
            links.append(&window::link_button(&link.label, &link.url));
        }
        page.append(&links);
    }
    page
}
