use gtk::prelude::*;
use gtk4 as gtk;

pub const DEFAULT_WIDTH: i32 = 1100;
pub const DEFAULT_HEIGHT: i32 = 760;

pub fn init_window(window: &gtk::ApplicationWindow) {
    window.set_default_size(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    window.set_size_request(480, 420);
}

pub fn open_external(url: &str) {
    match std::process::Command::new("xdg-open")
        .arg(url)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
    {
        Ok(_) => log::info!("Opened {}", url),
        Err(e) => log::error!("Failed to open '{}': {}", url, e),
    }
}

pub fn link_button(label: &str, url: &str) -> gtk::Button {
    let button = gtk::Button::with_label(label);
    button.set_tooltip_text(Some(url));
    let url = url.to_string();
    button.connect_clicked(move |_| open_external(&url));
    button
}
