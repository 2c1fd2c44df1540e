use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod intro {
    pub mod effects;
    pub mod overlay;
    pub mod phase;
    pub mod sequencer;
    pub mod timeline;
}
mod timers;
mod scroll {
    pub mod hooks;
    pub mod parallax;
    pub mod tracker;
    pub mod visibility;
}
mod components {
    pub mod nav;
}
mod pages {
    pub mod about;
    pub mod engineering;
    pub mod home;
    pub mod renovation;
    pub mod services;
}

use components::nav::Nav;
use pages::{
    about::About,
    engineering::EngineeringConsulting,
    home::Home,
    renovation::Renovation,
    services::Services,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/services/renovation")]
    Renovation,
    #[at("/services/engineering-consulting")]
    EngineeringConsulting,
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
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Renovation => {
            info!("Rendering Renovation page");
            html! { <Renovation /> }
        }
        Route::EngineeringConsulting => {
            info!("Rendering Engineering & Consulting page");
            html! { <EngineeringConsulting /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <section class="page-title">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </section>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/services/renovation"), Some(Route::Renovation));
        assert_eq!(
            Route::recognize("/services/engineering-consulting"),
            Some(Route::EngineeringConsulting)
        );
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Services.to_path(), "/services");
        assert_eq!(Route::EngineeringConsulting.to_path(), "/services/engineering-consulting");
    }
}
