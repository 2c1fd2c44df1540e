use yew::prelude::*;

use crate::config;
use crate::pages::services::offering_cards;
use crate::scroll::hooks::{use_in_view, use_scroll_y};
use crate::scroll::visibility::is_scrolled;

struct ServiceTile {
    title: &'static str,
    image: &'static str,
}

const SERVICE_TILES: [ServiceTile; 3] = [
    ServiceTile { title: "Custom Homes.", image: "glass-house-at-sunset.jpg" },
    ServiceTile { title: "Renovations.", image: "living-room-wood-ceiling.jpg" },
    ServiceTile { title: "New Construction.", image: "human3.jpg" },
];

pub struct ClientStory {
    pub label: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub thumbnail: &'static str,
}

pub const CLIENT_STORIES: [ClientStory; 3] = [
    ClientStory {
        label: "Consulting",
        title: "Expert Guidance",
        quote: "Antova's consulting team transformed our vision into reality. Their AI-powered estimates were spot-on, and the structural insights saved us months of planning time.",
        name: "Michael Chen",
        position: "Owner",
        company: "Aspen Horse Ranch",
        thumbnail: "cabin-interior.jpg",
    },
    ClientStory {
        label: "Renovation",
        title: "Flawless Renovation",
        quote: "Our clinic needed a complete transformation without disrupting patient care. Antova delivered exceptional craftsmanship on schedule. The attention to detail was extraordinary.",
        name: "Sorin Isparesescu",
        position: "CEO",
        company: "Pain Clinic",
        thumbnail: "project-1.jpg",
    },
    ClientStory {
        label: "New Construction",
        title: "Dream Home Delivered",
        quote: "From foundation to final walkthrough, Antova exceeded every expectation. Their transparent process and craftsmanship made building our custom home genuinely enjoyable.",
        name: "James Thornton",
        position: "CEO",
        company: "Thornton Capital",
        thumbnail: "project-2.jpg",
    },
];

/// First letters of the first two words of a name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

fn story_card(story: &ClientStory) -> Html {
    html! {
        <div key={story.title} class="story-card">
            <span class="story-label">{story.label}</span>
            <h3>{story.title}</h3>
            <blockquote>{format!("\"{}\"", story.quote)}</blockquote>
            <div class="story-author">
                <div class="story-initials">{initials(story.name)}</div>
                <div>
                    <p class="story-name">{story.name}</p>
                    <p class="story-role">{format!("{}, {}", story.position, story.company)}</p>
                </div>
            </div>
            <img class="story-thumbnail" src={config::asset(story.thumbnail)}
                alt={format!("{} project", story.name)} loading="lazy" />
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let philosophy_ref = use_node_ref();
    let smart_ref = use_node_ref();

    let dark_mode = use_in_view(philosophy_ref.clone(), 0.8);
    let smart_light = use_in_view(smart_ref.clone(), 0.5);
    let scrolled = is_scrolled(use_scroll_y());

    html! {
        <div class={classes!("home-page", dark_mode.then(|| "dark"), scrolled.then(|| "scrolled"))}>
            <section class="hero">
                <img class="hero-background" src={config::asset("hero-winter-mountain-home.png")}
                    alt="Mountain chalet with interior lighting" />
                <div class="hero-content">
                    <h1>{"Antova Builders"}</h1>
                    <p class="hero-subtitle">{"Precision Built. Luxury Perfected."}</p>
                    <div class="hero-cta-group">
                        <button class="button gold">{"AI Estimator"}</button>
                        <a href="/contact" class="button outline">{"Consult With Us"}</a>
                    </div>
                </div>
            </section>

            <section class="service-grid">
                { for SERVICE_TILES.iter().map(|tile| html! {
                    <a key={tile.title} href="/contact" class="service-tile">
                        <img src={config::asset(tile.image)} alt={tile.title} loading="lazy" />
                        <h3>{tile.title}</h3>
                    </a>
                }) }
            </section>

            <div ref={philosophy_ref} class="philosophy">
                <p class="philosophy-lead">{"Luxury is the freedom to relax while experts handle complexity."}</p>
                <p>{"From blueprint to flourish, Antova commands each variable: harnessing seasoned artisans, AI-powered estimating, and a concierge-grade client experience."}</p>
            </div>

            <section class="offerings">
                <h2>{"Get your offer now."}</h2>
                <div class="offering-grid">{offering_cards()}</div>
            </section>

            <section id="about" ref={smart_ref} class={classes!("smart", if smart_light { "light" } else { "dark" })}>
                <h2>{"Smart. Thin. Strong."}</h2>
                <p>{"Our builds redefine precision and performance, crafted with purpose."}</p>
                <div class="smart-actions">
                    <a href="/contact" class="button gold">{"Consult With Us"}</a>
                    <a href="/projects" class="button outline">{"View Projects"}</a>
                </div>
            </section>

            <section class="testimonials">
                <p class="eyebrow">{"Testimonials"}</p>
                <h2>{"Stories of Excellence"}</h2>
                <div class="story-grid">
                    { for CLIENT_STORIES.iter().map(story_card) }
                </div>
            </section>

            <section id="services" class="closing-cta">
                <h2>{"Built with Intelligence."}</h2>
                <p>{"Powered by AI-driven estimation and real-time material insights."}</p>
                <a href="/about" class="button outline">{"Our Story"}</a>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Michael Chen"), "MC");
        assert_eq!(initials("Sorin Isparesescu"), "SI");
        assert_eq!(initials("Anna Maria Lopez"), "AM");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn every_story_has_initials() {
        for story in &CLIENT_STORIES {
            assert_eq!(initials(story.name).chars().count(), 2);
        }
    }
}
