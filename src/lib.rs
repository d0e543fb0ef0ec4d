pub mod color;
pub mod dom;
pub mod field;
pub mod hero;
pub mod i18n;
pub mod menu;
pub mod particle;
pub mod renderer;
pub mod scroll;
pub mod tabs;
pub mod translations;
pub mod utils;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Runs once when the module is instantiated and wires every page feature.
#[wasm_bindgen(start)]
pub fn initialize() -> Result<(), JsValue> {
    utils::set_panic_hook();
    scroll::init_scroll_animations()?;
    tabs::init_tabs()?;
    menu::init_mobile_menu()?;
    hero::init_hero_canvas()?;
    i18n::init_localization()?;
    Ok(())
}
