use gloo_timers::callback::Interval;
use web_sys::TouchEvent;
use yew::prelude::*;

use crate::carousel::{CarouselAction, StepCarousel, ROTATION_INTERVAL_MS};
use crate::config;
use crate::intro::overlay::IntroOverlay;
use crate::intro::phase::IntroVariant;

struct RenovationStep {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    alt: &'static str,
}

const STEPS: [RenovationStep; 3] = [
    RenovationStep {
        number: "1",
        title: "Design",
        description: "We design spaces where form and function meet with timeless precision.",
        image: "aerial.jpg",
        alt: "Luxury home aerial view with pool",
    },
    RenovationStep {
        number: "2",
        title: "Renovate",
        description: "Renovation is transformation: we restore, refine, and reimagine your home.",
        image: "cabin-interior-large-windows.jpg",
        alt: "Kitchen installation",
    },
    RenovationStep {
        number: "3",
        title: "Live it",
        description: "Live in the art you created, crafted for comfort and quiet luxury.",
        image: "modern-luxury-home-at-night.jpg",
        alt: "Electrical system at night",
    },
];

#[function_component(Renovation)]
pub fn renovation() -> Html {
    let show_intro = use_state(|| true);
    let carousel = use_reducer(|| StepCarousel::new(STEPS.len()));
    let touch_start_x = use_mut_ref(|| 0.0_f64);

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

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(ROTATION_INTERVAL_MS, move || {
                    dispatcher.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_touch_start = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                *touch_start_x.borrow_mut() = touch.client_x() as f64;
            }
        })
    };

    let on_touch_end = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                let delta_x = *touch_start_x.borrow() - touch.client_x() as f64;
                dispatcher.dispatch(CarouselAction::Swipe(delta_x));
            }
        })
    };

    let on_intro_complete = {
        let show_intro = show_intro.clone();
        Callback::from(move |_: ()| show_intro.set(false))
    };

    let active = carousel.active();
    let current = &STEPS[active];

    html! {
        <div class="renovation-page">
            if *show_intro {
                <IntroOverlay variant={IntroVariant::Grain} on_complete={on_intro_complete} />
            }

            <section class="page-title">
                <h1>{"RENOVATION"}</h1>
            </section>
            <section class="renovation-hero">
                <img src={config::asset("cabin-interior.jpg")} alt="Modern mountain home" />
            </section>

            <section class="steps" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                <div class="steps-track" style={format!("transform: translateX(-{}%);", active * 100)}>
                    { for STEPS.iter().map(|step| html! {
                        <img key={step.number} class="step-image" src={config::asset(step.image)} alt={step.alt} />
                    }) }
                </div>
                <div class="step-detail">
                    <span class="step-number">{current.number}</span>
                    <h2>{current.title}</h2>
                    <p>{current.description}</p>
                </div>
                <div class="step-tabs">
                    { for STEPS.iter().enumerate().map(|(index, step)| {
                        let dispatcher = carousel.dispatcher();
                        html! {
                            <button key={step.number}
                                class={classes!("step-tab", (index == active).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Select(index)))}>
                                {step.title}
                            </button>
                        }
                    }) }
                </div>
            </section>
        </div>
    }
}
