use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, Window};
use yew::prelude::*;

use crate::config;
use crate::intro::effects::{fill_grain, LightFlare, ParticleField, FLARE_RADIUS, GRAIN_ALPHA, PARTICLE_COUNT};
use crate::intro::phase::{IntroVariant, Phase};
use crate::intro::timeline::use_phase_sequence;

#[derive(Properties, PartialEq)]
pub struct IntroOverlayProps {
    pub variant: IntroVariant,
    pub on_complete: Callback<()>,
}

#[function_component]
pub fn IntroOverlay(props: &IntroOverlayProps) -> Html {
    let canvas_ref = use_node_ref();
    let phase = use_phase_sequence(props.variant, props.on_complete.clone());

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |variant| {
                let frame_loop = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| start_effect(canvas, *variant));
                if frame_loop.is_none() {
                    debug!("intro canvas unavailable, playing {:?} without effect", variant);
                }
                move || drop(frame_loop)
            },
            props.variant,
        );
    }

    let overlay_class = classes!(
        "intro-overlay",
        format!("phase-{}", phase.as_str()),
        (phase == Phase::Reveal).then(|| "revealed"),
    );
    let text_class = classes!(
        "intro-wordmark",
        match phase {
            Phase::Text => "visible",
            Phase::Morphing => "morphing",
            _ => "hidden",
        }
    );
    let logo_class = classes!("intro-logo", (phase == Phase::Logo).then(|| "visible"));

    html! {
        <div class={overlay_class} aria-hidden="true">
            <canvas ref={canvas_ref} class="intro-canvas"></canvas>
            <div class={text_class}>
                <span class="intro-word">{"ANTOVA"}</span>
                <span class="intro-word accent">{"BUILDERS"}</span>
            </div>
            <img class={logo_class} src={config::asset("antova-logo-gold.svg")} alt="Antova Builders" />
        </div>
    }
}

/// Something that can run a callback on the next display frame.
trait FrameSource: Clone + 'static {
    type Callback: 'static;

    fn wrap(&self, step: Box<dyn FnMut()>) -> Self::Callback;
    fn request(&self, callback: &Self::Callback) -> Option<i32>;
    fn cancel(&self, id: i32);
}

impl FrameSource for Window {
    type Callback = Closure<dyn FnMut()>;

    fn wrap(&self, step: Box<dyn FnMut()>) -> Self::Callback {
        Closure::wrap(step)
    }

    fn request(&self, callback: &Self::Callback) -> Option<i32> {
        self.request_animation_frame(callback.as_ref().unchecked_ref()).ok()
    }

    fn cancel(&self, id: i32) {
        let _ = self.cancel_animation_frame(id);
    }
}

/// A self-rescheduling animation frame loop. Dropping it cancels the
/// pending frame and frees the callback.
struct FrameLoop<W: FrameSource = Window> {
    frames: W,
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<W::Callback>>>,
}

impl<W: FrameSource> FrameLoop<W> {
    fn start<F>(frames: W, mut draw: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<W::Callback>>> = Rc::new(RefCell::new(None));

        {
            let next = callback.clone();
            let handle = handle.clone();
            let source = frames.clone();
            let step = frames.wrap(Box::new(move || {
                draw();
                if let Some(next) = next.borrow().as_ref() {
                    handle.set(source.request(next));
                }
            }));
            *callback.borrow_mut() = Some(step);
        }

        let first = callback.borrow().as_ref().and_then(|cb| frames.request(cb));
        match first {
            Some(id) => {
                handle.set(Some(id));
                Some(Self { frames, handle, callback })
            }
            None => {
                callback.borrow_mut().take();
                None
            }
        }
    }
}

impl<W: FrameSource> Drop for FrameLoop<W> {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            self.frames.cancel(id);
        }
        // The closure holds a handle to its own cell; break the cycle.
        self.callback.borrow_mut().take();
    }
}

fn start_effect(canvas: HtmlCanvasElement, variant: IntroVariant) -> Option<FrameLoop> {
    let window = web_sys::window()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    match variant {
        IntroVariant::Particles => {
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            context.set_fill_style(&JsValue::from_str("black"));
            context.fill_rect(0.0, 0.0, width, height);

            let mut field = ParticleField::new(width, height, PARTICLE_COUNT, &mut rand::thread_rng());
            let mut flare = LightFlare::new(width, height);
            FrameLoop::start(window, move || {
                field.step();
                flare.step();
                let _ = draw_particles(&context, &field, &flare, width, height);
            })
        }
        IntroVariant::Grain => {
            // Half resolution; CSS stretches it back to full screen.
            let grain_width = (width / 2.0).max(1.0) as u32;
            let grain_height = (height / 2.0).max(1.0) as u32;
            canvas.set_width(grain_width);
            canvas.set_height(grain_height);

            let mut buffer = vec![0u8; (grain_width * grain_height * 4) as usize];
            FrameLoop::start(window, move || {
                if fill_grain(&mut buffer, &mut rand::thread_rng(), GRAIN_ALPHA).is_err() {
                    return;
                }
                if let Ok(image) =
                    ImageData::new_with_u8_clamped_array_and_sh(Clamped(buffer.as_slice()), grain_width, grain_height)
                {
                    let _ = context.put_image_data(&image, 0.0, 0.0);
                }
            })
        }
    }
}

fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    field: &ParticleField,
    flare: &LightFlare,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style(&JsValue::from_str("rgba(0, 0, 0, 0.1)"));
    ctx.fill_rect(0.0, 0.0, width, height);

    for p in field.particles() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0)?;
        ctx.set_fill_style(&JsValue::from_str(&format!("rgba(255, 255, 255, {})", p.opacity)));
        ctx.fill();
    }

    let glow = ctx.create_radial_gradient(flare.x, flare.y, 0.0, flare.x, flare.y, FLARE_RADIUS)?;
    glow.add_color_stop(0.0, "rgba(255, 255, 255, 0.8)")?;
    glow.add_color_stop(0.1, "rgba(255, 220, 150, 0.4)")?;
    glow.add_color_stop(0.3, "rgba(255, 180, 100, 0.1)")?;
    glow.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
    ctx.begin_path();
    ctx.arc(flare.x, flare.y, FLARE_RADIUS, 0.0, PI * 2.0)?;
    ctx.set_fill_style(&glow);
    ctx.fill();

    ctx.set_line_width(2.0);
    for ray in flare.rays() {
        ctx.begin_path();
        ctx.move_to(ray.from.0, ray.from.1);
        ctx.line_to(ray.to.0, ray.to.1);
        ctx.set_stroke_style(&JsValue::from_str(ray.color));
        ctx.stroke();
    }

    let warm = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, width * 0.5)?;
    warm.add_color_stop(0.0, "rgba(255, 150, 50, 0.15)")?;
    warm.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
    ctx.set_fill_style(&warm);
    ctx.fill_rect(0.0, 0.0, width * 0.5, height * 0.5);

    Ok(())
}
