use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::carousel::{scroll_progress, scroll_step, Debouncer, PROGRESS_DEBOUNCE_MS};

pub const MODAL_CLOSE_DELAY_MS: u32 = 300;

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub features: &'static [&'static str],
}

pub static SERVICES: [Service; 3] = [
    Service {
        id: "engineering",
        number: "01",
        title: "Engineering Solutions",
        description: "Technical expertise for comprehensive engineering solutions to your construction challenges.",
        full_description: "Our engineering team brings decades of combined experience to every project. We specialize in structural analysis, load-bearing assessments, and innovative design solutions that push the boundaries of what's possible while maintaining the highest safety standards.",
        features: &[
            "Structural engineering and analysis",
            "Foundation design and assessment",
            "Load-bearing wall modifications",
            "Seismic retrofitting solutions",
            "Custom architectural engineering",
        ],
    },
    Service {
        id: "complex-issues",
        number: "02",
        title: "Solving Complex Issues",
        description: "Strategic problem-solving for construction disputes and technical complications.",
        full_description: "When projects face unexpected challenges, our expert team steps in to find solutions. From construction defect analysis to dispute resolution, we bring clarity and actionable strategies to the most complex situations.",
        features: &[
            "Construction defect investigation",
            "Expert witness testimony",
            "Dispute resolution consulting",
            "Risk mitigation strategies",
            "Technical problem diagnosis",
        ],
    },
    Service {
        id: "permitting",
        number: "03",
        title: "Permitting",
        description: "Streamlined permitting with 100% success rate to keep your project compliant.",
        full_description: "Navigate the complex world of building permits with confidence. Our team handles everything from initial applications to final inspections, ensuring your project meets all local codes and regulations without delays.",
        features: &[
            "Building permit applications",
            "Code compliance reviews",
            "Zoning variance assistance",
            "Inspection coordination",
            "Regulatory liaison services",
        ],
    },
];

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[derive(Properties, PartialEq)]
struct ServiceModalProps {
    service: Option<&'static Service>,
    is_open: bool,
    on_close: Callback<()>,
}

#[function_component(ServiceModal)]
fn service_modal(props: &ServiceModalProps) -> Html {
    use_effect_with_deps(
        move |is_open| {
            set_body_scroll_locked(*is_open);
            || set_body_scroll_locked(false)
        },
        props.is_open,
    );

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let Some(service) = props.service else {
        return html! {};
    };

    let close = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={classes!("service-modal", props.is_open.then(|| "open"))} onclick={close.clone()}>
            <button class="modal-close" onclick={close.clone()} aria-label="Close modal">{"✕"}</button>
            <div class="modal-body" onclick={stop}>
                <span class="modal-number">{service.number}</span>
                <h2>{service.title}</h2>
                <p>{service.full_description}</p>
                <ul class="modal-features">
                    { for service.features.iter().map(|feature| html! { <li key={*feature}>{*feature}</li> }) }
                </ul>
                <a href="/contact" class="button gold" onclick={close}>{"Get Started"}</a>
            </div>
        </div>
    }
}

#[function_component(EngineeringConsulting)]
pub fn engineering_consulting() -> Html {
    let carousel_ref = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);
    let selected = use_state(|| None::<&'static Service>);
    let modal_open = use_state(|| false);
    let debouncer = use_memo(|_| Debouncer::new(PROGRESS_DEBOUNCE_MS), ());
    let clear_selection = use_mut_ref(|| None::<Timeout>);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_track_scroll = {
        let carousel_ref = carousel_ref.clone();
        let progress = progress.clone();
        let debouncer = Rc::clone(&debouncer);
        Callback::from(move |_: Event| {
            let carousel_ref = carousel_ref.clone();
            let progress = progress.clone();
            debouncer.call(move || {
                if let Some(track) = carousel_ref.cast::<Element>() {
                    progress.set(scroll_progress(
                        track.scroll_left() as f64,
                        track.scroll_width() as f64,
                        track.client_width() as f64,
                    ));
                }
            });
        })
    };

    let scroll_by = {
        let carousel_ref = carousel_ref.clone();
        move |direction: f64| {
            let carousel_ref = carousel_ref.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(track) = carousel_ref.cast::<Element>() {
                    let options = ScrollToOptions::new();
                    options.set_left(direction * scroll_step(track.client_width() as f64));
                    options.set_behavior(ScrollBehavior::Smooth);
                    track.scroll_by_with_scroll_to_options(&options);
                }
            })
        }
    };

    let open_service = {
        let selected = selected.clone();
        let modal_open = modal_open.clone();
        let clear_selection = clear_selection.clone();
        move |service: &'static Service| {
            let selected = selected.clone();
            let modal_open = modal_open.clone();
            let clear_selection = clear_selection.clone();
            Callback::from(move |_: MouseEvent| {
                clear_selection.borrow_mut().take();
                selected.set(Some(service));
                modal_open.set(true);
            })
        }
    };

    let close_service = {
        let selected = selected.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            modal_open.set(false);
            let selected = selected.clone();
            // Keep content mounted while the close transition runs.
            *clear_selection.borrow_mut() = Some(Timeout::new(MODAL_CLOSE_DELAY_MS, move || {
                selected.set(None);
            }));
        })
    };

    html! {
        <div class="engineering-page">
            <section class="page-title">
                <h1>{"ENGINEERING & CONSULTING"}</h1>
            </section>

            <section class="service-carousel">
                <div ref={carousel_ref} class="carousel-track" onscroll={on_track_scroll}>
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.id} class="carousel-card" onclick={open_service(service)}>
                            <span class="card-number">{service.number}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
                <div class="carousel-controls">
                    <button class="carousel-prev" onclick={scroll_by(-1.0)} aria-label="Previous">{"‹"}</button>
                    <div class="carousel-progress">
                        <div class="carousel-progress-bar" style={format!("width: {}%;", *progress)}></div>
                    </div>
                    <button class="carousel-next" onclick={scroll_by(1.0)} aria-label="Next">{"›"}</button>
                </div>
            </section>

            <ServiceModal service={*selected} is_open={*modal_open} on_close={close_service} />
        </div>
    }
}
