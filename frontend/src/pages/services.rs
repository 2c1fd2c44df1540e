use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub route: Route,
    pub link_text: &'static str,
}

pub const OFFERINGS: [Offering; 2] = [
    Offering {
        title: "Engineering & Consulting",
        description: "Expert structural solutions and professional consulting for complex builds.",
        price: "Consultation from $500",
        image: "engineering-blueprints.png",
        route: Route::EngineeringConsulting,
        link_text: "Explore Engineering",
    },
    Offering {
        title: "Renovation",
        description: "Modern renovation spaces designed for business excellence.",
        price: "$2k-5k credits",
        image: "modern-luxury-home-at-night.jpg",
        route: Route::Renovation,
        link_text: "Explore Renovation",
    },
];

pub fn offering_cards() -> Html {
    OFFERINGS
        .iter()
        .map(|offering| {
            html! {
                <div key={offering.title} class="offering-card">
                    <img src={config::asset(offering.image)} alt={offering.title} loading="lazy" />
                    <div class="offering-body">
                        <h3>{offering.title}</h3>
                        <p>{offering.description}</p>
                        <p class="offering-price">{offering.price}</p>
                        <div class="offering-actions">
                            <Link<Route> to={offering.route.clone()} classes="button light">
                                {offering.link_text}
                            </Link<Route>>
                            <a href="/contact" class="button outline">{"Get Quote"}</a>
                        </div>
                    </div>
                </div>
            }
        })
        .collect()
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-title">
                <h1>{"SERVICES"}</h1>
            </section>
            <section class="offerings">
                <h2>{"Get your offer now."}</h2>
                <div class="offering-grid">{offering_cards()}</div>
            </section>
        </div>
    }
}
