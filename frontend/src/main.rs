use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod speech;
mod reveal {
    pub mod counter;
    pub mod driver;
    pub mod frame;
    pub mod stagger;
    pub mod trigger;
}
mod content {
    pub mod catalog;
    pub mod courtroom;
    pub mod legal_query;
    pub mod plans;
    pub mod templates;
    pub mod testimonials;
}
mod components {
    pub mod animated_counter;
    pub mod courtroom;
    pub mod features;
    pub mod footer;
    pub mod free_query;
    pub mod hero;
    pub mod navbar;
    pub mod particle_canvas;
    pub mod pricing;
    pub mod role_gateway;
    pub mod stats;
    pub mod template_gallery;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod templates;
}

use components::{footer::Footer, navbar::Navbar};
use content::catalog::Catalog;
use reveal::trigger::RevealRegistry;
use pages::{home::Home, not_found::NotFound, templates::Templates};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/templates")]
    Templates,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Templates => {
            info!("Rendering Templates page");
            html! { <Templates /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_memo(
        |_| match Catalog::load() {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("{}", err);
                Catalog::default()
            }
        },
        (),
    );
    // Outlives route changes so revisited sections keep their final values
    let reveals = use_memo(|_| RevealRegistry::default(), ());

    html! {
        <ContextProvider<Rc<Catalog>> context={catalog}>
            <ContextProvider<Rc<RevealRegistry>> context={reveals}>
                <BrowserRouter>
                    <Navbar />
                    <Switch<Route> render={switch} />
                    <Footer />
                </BrowserRouter>
            </ContextProvider<Rc<RevealRegistry>>>
        </ContextProvider<Rc<Catalog>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Only fails when a logger is already installed
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting LawMaster");
    yew::Renderer::<App>::new().render();
}
