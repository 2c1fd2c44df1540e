use log::info;
use yew::prelude::*;

use crate::config;
use crate::intro::overlay::IntroOverlay;
use crate::intro::phase::IntroVariant;
use crate::scroll::hooks::{use_active_section, use_scroll_y};
use crate::scroll::parallax::parallax_style;
use crate::scroll::tracker::ObserverConfig;

struct Section {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const SECTIONS: [Section; 3] = [
    Section {
        number: "01",
        title: "Vision",
        description: "Create a world where every detail is under control and every home reflects refined order. We envision spaces where precision meets artistry, and structure creates freedom.",
    },
    Section {
        number: "02",
        title: "Strategy",
        description: "Establish clear structures, set the benchmark for craftsmanship, and deliver a seamless journey. From initial consultation to final handover, we orchestrate every element with precision.",
    },
    Section {
        number: "03",
        title: "Experience",
        description: "Our team brings refined expertise, blending technical mastery with creative problem-solving. Years of dedication translate into flawless execution across every project phase.",
    },
];

const TEAM: [(&str, &str); 4] = [
    ("Matthew Shaffer", "CEO, Managing Principal"),
    ("Project Director", "Operations"),
    ("Lead Engineer", "Structural Engineering"),
    ("Design Lead", "Interiors"),
];

#[function_component(About)]
pub fn about() -> Html {
    let show_intro = use_state(|| true);
    let scroll_y = use_scroll_y();

    let vision_ref = use_node_ref();
    let strategy_ref = use_node_ref();
    let experience_ref = use_node_ref();
    let section_refs = vec![vision_ref, strategy_ref, experience_ref];
    let active = use_active_section(section_refs.clone(), ObserverConfig::default());

    let on_intro_complete = {
        let show_intro = show_intro.clone();
        Callback::from(move |_: ()| {
            info!("About intro finished");
            show_intro.set(false);
        })
    };

    html! {
        <div class="about-page">
            if *show_intro {
                <IntroOverlay variant={IntroVariant::Particles} on_complete={on_intro_complete} />
            }

            <section class="page-title split">
                <h1>{"ABOUT US"}</h1>
                <div class="belief">
                    <p class="belief-lead">{"Antova Builders began with a singular belief:"}</p>
                    <p>{"True luxury is the freedom to relax while experts handle "}
                        <span class="accent">{"the complexity."}</span>
                    </p>
                </div>
            </section>

            <section class="parallax-image" style={parallax_style(scroll_y)}>
                <img src={config::asset("team-construction-new.png")} alt="Construction team reviewing plans" />
            </section>

            <section class="section-cards">
                { for SECTIONS.iter().zip(section_refs).enumerate().map(|(index, (section, node))| {
                    let ordinal = index + 1;
                    html! {
                        <div key={section.title} ref={node}
                            class={classes!("section-card", (active == ordinal).then(|| "active"))}
                            style={format!("z-index: {};", ordinal)}>
                            <div class="section-number">{section.number}</div>
                            <div class="section-text">
                                <h3>{section.title}</h3>
                                <p>{section.description}</p>
                            </div>
                        </div>
                    }
                }) }
            </section>

            <section class="team">
                <h2>{"OUR TEAM"}</h2>
                <p>{"Antova's team blends master craftsmanship with AI-powered precision to shape complexity into luxury."}</p>
                <div class="team-grid">
                    { for TEAM.iter().map(|(name, title)| html! {
                        <div key={*name} class="team-card">
                            <div class="team-photo"></div>
                            <h3>{*name}</h3>
                            <p>{*title}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
