use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/projects", label: "Projects" },
    NavLink { href: "/services", label: "Services" },
    NavLink { href: "/contact", label: "Contact Us" },
];

pub const SOCIAL_LINKS: [NavLink; 3] = [
    NavLink { href: "https://www.facebook.com/anovabuilders", label: "Facebook" },
    NavLink { href: "https://www.instagram.com/anovabuilders", label: "Instagram" },
    NavLink { href: "https://x.com/anovabuilders", label: "X" },
];

pub fn is_current(href: &str, pathname: &str) -> bool {
    href == pathname
}

/// The app route behind `href`, when the router owns that path.
pub fn internal_route(href: &str) -> Option<Route> {
    Route::recognize(href).filter(|route| *route != Route::NotFound)
}

fn nav_anchor(link: &NavLink, class: Classes, onclick: Option<Callback<MouseEvent>>) -> Html {
    match internal_route(link.href) {
        Some(route) => html! {
            <Link<Route> to={route} classes={class}>{link.label}</Link<Route>>
        },
        None => html! {
            <a href={link.href} {class} {onclick}>{link.label}</a>
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // Router links don't take click handlers; close the menu once the path changes.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            pathname.clone(),
        );
    }

    let social = SOCIAL_LINKS
        .iter()
        .map(|link| {
            html! {
                <a key={link.href} href={link.href} target="_blank" rel="noopener noreferrer"
                    class="nav-social" aria-label={link.label}>
                    {link.label}
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={config::asset("antova-logo-gold.svg")} alt="Antova Builders" />
                    <span class="nav-brand">{"Antova"}</span>
                    <span class="nav-brand accent">{" Builders"}</span>
                </Link<Route>>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| {
                        let current = is_current(link.href, &pathname);
                        nav_anchor(link, classes!("nav-link", current.then(|| "current")), None)
                    }) }
                </div>

                <div class="nav-socials">{social.clone()}</div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for NAV_LINKS.iter().map(|link| {
                    nav_anchor(link, classes!("mobile-link"), Some(close_menu.clone()))
                }) }
                <div class="nav-socials">{social}</div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_the_site_sections() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(hrefs, ["/about", "/projects", "/services", "/contact"]);
    }

    #[test]
    fn owned_paths_use_the_router() {
        assert_eq!(internal_route("/about"), Some(Route::About));
        assert_eq!(internal_route("/services"), Some(Route::Services));
        assert_eq!(internal_route("/projects"), None);
        assert_eq!(internal_route("/contact"), None);
    }

    #[test]
    fn only_exact_path_is_current() {
        assert!(is_current("/about", "/about"));
        assert!(!is_current("/services", "/services/renovation"));
        assert!(!is_current("/about", "/"));
    }
}
