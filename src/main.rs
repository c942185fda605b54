use gpui::{App, Application};
use pillboard::app::open_main_window;
use pillboard::logging;
use pillboard::settings::Settings;

fn main() {
    logging::init();
    let settings = Settings::load();
    tracing::info!(?settings, "Starting pillboard");

    Application::new().run(move |cx: &mut App| {
        if let Err(e) = open_main_window(cx, settings) {
            tracing::error!("{:#}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
