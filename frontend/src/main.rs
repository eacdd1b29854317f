use log::info;

use yag::app::App;
use yag::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting YAG");
    yew::Renderer::<App>::new().render();
}
