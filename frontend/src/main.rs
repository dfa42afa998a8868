use crate::app::App;

mod app;
mod components;
mod logging;
mod services;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
