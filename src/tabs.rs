// Experience-section tabs: one button per employer, one panel per job, a
// single active pair at a time.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const TAB_SELECTOR: &str = ".tab-btn";
pub const PANEL_SELECTOR: &str = ".job-panel";

pub fn init_tabs() -> Result<(), JsValue> {
    let document = dom::document()?;
    let tabs = dom::elements_with_selector(&document, TAB_SELECTOR)?;
    let panels = dom::elements_with_selector(&document, PANEL_SELECTOR)?;

    for tab in &tabs {
        let on_click = {
            let document = document.clone();
            let tabs = tabs.clone();
            let panels = panels.clone();
            let tab = tab.clone();
            Closure::wrap(Box::new(move || {
                for other in tabs.iter().chain(panels.iter()) {
                    let _ = other.class_list().remove_1("active");
                }
                let _ = tab.class_list().add_1("active");
                // A tab whose data-target panel is missing still highlights
                // itself.
                if let Some(panel) = tab
                    .get_attribute("data-target")
                    .and_then(|id| document.get_element_by_id(&id))
                {
                    let _ = panel.class_list().add_1("active");
                }
            }) as Box<dyn FnMut()>)
        };
        tab.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
