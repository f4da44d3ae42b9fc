mod analysis;
mod app;
mod config;
mod error;
mod logging;
mod photo;
mod state;
mod ui;

pub use app::Message;

use app::SkinCareApp;
use config::Config;

fn main() -> iced::Result {
    let config = Config::from_env();
    logging::init_logger(&config.log_filter);

    iced::application("SkinCare AI", SkinCareApp::update, SkinCareApp::view)
        .theme(SkinCareApp::theme)
        .centered()
        .run_with(move || SkinCareApp::new(config))
}
