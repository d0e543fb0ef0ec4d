// Hero section background: wires the particle field and its renderer to the
// #hero-canvas element, the window resize events, and the browser's frame
// callbacks.

use crate::dom;
use crate::field::ParticleField;
use crate::renderer::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

pub const CANVAS_ID: &str = "hero-canvas";

pub fn init_hero_canvas() -> Result<(), JsValue> {
    let document = dom::document()?;
    // A page without a hero section gets no animation.
    let canvas: HtmlCanvasElement = match document.get_element_by_id(CANVAS_ID) {
        Some(element) => element.dyn_into()?,
        None => return Ok(()),
    };

    let (width, height) = fit_canvas_to_window(&canvas)?;
    let field = Rc::new(RefCell::new(ParticleField::new(width, height)));
    let renderer = Renderer::new(&canvas)?;

    {
        let field = Rc::clone(&field);
        let canvas = canvas.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            if let Ok((width, height)) = fit_canvas_to_window(&canvas) {
                field.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut()>);
        dom::window()?
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        // The listener lives as long as the page does.
        on_resize.forget();
    }

    start_animation_loop(field, renderer)
}

// The canvas backing store tracks the window's inner size; the returned pair
// doubles as the simulation bounds.
fn fit_canvas_to_window(canvas: &HtmlCanvasElement) -> Result<(f64, f64), JsValue> {
    let window = dom::window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((width, height))
}

// Self-rescheduling requestAnimationFrame loop; runs until the page goes
// away.
fn start_animation_loop(
    field: Rc<RefCell<ParticleField>>,
    renderer: Renderer,
) -> Result<(), JsValue> {
    let frame = Rc::new(RefCell::new(None));
    let first_frame = Rc::clone(&frame);

    *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            #[cfg(feature = "frame-timing")]
            let _timer = crate::utils::Timer::new("ParticleField::update");
            field.borrow_mut().update();
        }
        {
            #[cfg(feature = "frame-timing")]
            let _timer = crate::utils::Timer::new("Renderer::render");
            if let Err(error) = renderer.render(&field.borrow()) {
                console::warn_1(&error);
            }
        }
        let scheduled = dom::request_animation_frame(
            frame
                .borrow()
                .as_ref()
                .expect("the frame closure is installed before the loop starts"),
        );
        if let Err(error) = scheduled {
            console::warn_1(&error);
        }
    }) as Box<dyn FnMut()>));

    dom::request_animation_frame(
        first_frame
            .borrow()
            .as_ref()
            .expect("the frame closure was just installed"),
    )?;
    Ok(())
}
