use log::{info, Level};
use yew::prelude::*;

mod config;
mod scramble;
mod sections;
mod throttle;

mod components {
    pub mod contact_form;
    pub mod intro;
    pub mod nav;
    pub mod popup;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
