use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::scroll::tracker::{ActivationTracker, ObserverConfig, SectionEntry, SectionRect};
use crate::scroll::visibility::reached_threshold;

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// Vertical scroll offset of the window, refreshed on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_event_with_window("scroll", move |_: Event| {
            scroll_y.set(current_scroll_y());
        });
    }

    *scroll_y
}

/// Whether the referenced element's top has reached `threshold` of the viewport.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    let check = {
        let visible = visible.clone();
        Rc::new(move || {
            if let (Some(element), Some(height)) = (node.cast::<Element>(), viewport_height()) {
                let top = element.get_bounding_client_rect().top();
                visible.set(reached_threshold(top, height, threshold));
            }
        })
    };

    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| check());

    *visible
}

/// 1-based ordinal of the section card currently in view.
///
/// The index is seeded from the sections' geometry on mount, then kept up
/// to date by an IntersectionObserver. Without the observer the seeded
/// index stays put.
#[hook]
pub fn use_active_section(sections: Vec<NodeRef>, config: ObserverConfig) -> usize {
    let section_count = sections.len();
    let tracker = use_mut_ref(|| ActivationTracker::new(section_count));
    let active = use_state_eq(|| tracker.borrow().active());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(height) = viewport_height() {
                    let rects: Option<Vec<SectionRect>> = sections.iter().map(section_rect).collect();
                    if let Some(rects) = rects {
                        let mut tracker = tracker.borrow_mut();
                        if tracker.observe(&config, &rects, height) {
                            active.set(tracker.active());
                        }
                    }
                }

                let observer = SectionObserver::observe(&sections, &config, move |batch| {
                    let mut tracker = tracker.borrow_mut();
                    if tracker.apply(batch) {
                        active.set(tracker.active());
                    }
                });
                if observer.is_none() {
                    debug!("IntersectionObserver unavailable, section tracking disabled");
                }
                move || drop(observer)
            },
            (),
        );
    }

    *active
}

fn section_rect(node: &NodeRef) -> Option<SectionRect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(SectionRect {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Owns an IntersectionObserver and its callback. Dropping it disconnects
/// every observed element.
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    fn observe<F>(sections: &[NodeRef], config: &ObserverConfig, mut on_batch: F) -> Option<Self>
    where
        F: FnMut(Vec<SectionEntry>) + 'static,
    {
        let targets: Vec<(usize, Element)> = sections
            .iter()
            .enumerate()
            .filter_map(|(position, node)| node.cast::<Element>().map(|element| (position, element)))
            .collect();

        let lookup = targets.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    lookup
                        .iter()
                        .find(|(_, element)| *element == target)
                        .map(|(position, _)| SectionEntry {
                            position: *position,
                            is_intersecting: entry.is_intersecting(),
                        })
                })
                .collect();
            on_batch(batch);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        for (_, element) in &targets {
            observer.observe(element);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
