// Mobile navigation: a hamburger button that opens and closes the nav-links
// drawer.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const TOGGLE_ID: &str = "mobile-menu";
pub const LINKS_SELECTOR: &str = ".nav-links";

pub fn init_mobile_menu() -> Result<(), JsValue> {
    let document = dom::document()?;
    // Markup without the button or the drawer leaves nothing to wire.
    let toggle = match document.get_element_by_id(TOGGLE_ID) {
        Some(element) => element,
        None => return Ok(()),
    };
    let links = match document.query_selector(LINKS_SELECTOR)? {
        Some(element) => element,
        None => return Ok(()),
    };

    let on_toggle = {
        let links = links.clone();
        let toggle = toggle.clone();
        Closure::wrap(Box::new(move || {
            let _ = links.class_list().toggle("active");
            let _ = toggle.class_list().toggle("active");
        }) as Box<dyn FnMut()>)
    };
    toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    // Following a navigation link closes the menu.
    for link in dom::elements_with_selector(&document, ".nav-links a")? {
        let on_follow = {
            let links = links.clone();
            let toggle = toggle.clone();
            Closure::wrap(Box::new(move || {
                let _ = links.class_list().remove_1("active");
                let _ = toggle.class_list().remove_1("active");
            }) as Box<dyn FnMut()>)
        };
        link.add_event_listener_with_callback("click", on_follow.as_ref().unchecked_ref())?;
        on_follow.forget();
    }
    Ok(())
}
