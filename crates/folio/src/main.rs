use folio::config;
use folio::gui::app::AppModel;
use folio::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    let app = RelmApp::new("com.mrmcblob.folio");

    app.run::<AppModel>((config, rx));
}
