use smartspend::logging::{init_logging, LoggingConfig};
use smartspend::App;

fn main() {
    init_logging(LoggingConfig::from_build_env());
    yew::Renderer::<App>::new().render();
}
