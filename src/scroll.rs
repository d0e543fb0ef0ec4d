// Scroll-triggered reveals: elements tagged with one of the fade classes get
// the `visible` class the first time a tenth of them enters the viewport.

use crate::dom;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".fade-up, .fade-in, .fade-in-left, .fade-in-right";
const REVEAL_THRESHOLD: f64 = 0.1;

#[allow(deprecated)]
pub fn init_scroll_animations() -> Result<(), JsValue> {
    let document = dom::document()?;
    let targets = dom::elements_with_selector(&document, REVEAL_SELECTOR)?;

    let on_intersect = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    // Once revealed, an element stays revealed.
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.root_margin("0px");
    options.threshold(&JsValue::from(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    for target in &targets {
        observer.observe(target);
    }
    // The browser keeps the observer alive through its targets; the callback
    // has to outlive this call.
    on_intersect.forget();
    Ok(())
}
