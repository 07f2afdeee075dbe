mod env_variable_utils;
mod models;
mod router;
mod utils;
mod videos;

use crate::env_variable_utils::{is_debug_mode, APP_NAME, LOAD_DELAY_MS};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let level = if is_debug_mode() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!(
        "NAME: \"{}\", LOAD_DELAY_MS: \"{}\" DEBUG: \"{}\"",
        *APP_NAME,
        *LOAD_DELAY_MS,
        level == log::Level::Debug
    );

    yew::Renderer::<App>::new().render();
}
