//! Browser-side checks of the DOM wiring; run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

use rust_portfolio_page_backend::field::ParticleField;
use rust_portfolio_page_backend::hero;
use rust_portfolio_page_backend::i18n::{self, Lang};
use rust_portfolio_page_backend::menu;
use rust_portfolio_page_backend::renderer::Renderer;
use rust_portfolio_page_backend::tabs;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn append_to_body(document: &Document, element: &Element) {
    document.body().unwrap().append_child(element).unwrap();
}

#[wasm_bindgen_test]
fn hero_init_without_a_canvas_is_a_silent_skip() {
    assert!(document().get_element_by_id(hero::CANVAS_ID).is_none());
    hero::init_hero_canvas().unwrap();
}

#[wasm_bindgen_test]
fn a_fresh_canvas_renders_one_full_frame() {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(320);
    canvas.set_height(240);

    let renderer = Renderer::new(&canvas).unwrap();
    let mut field = ParticleField::new(320.0, 240.0);
    field.update();
    renderer.render(&field).unwrap();
}

#[wasm_bindgen_test]
fn set_language_persists_tags_the_body_and_rewrites_text() {
    let document = document();
    let greeting = document.create_element("p").unwrap();
    greeting.set_attribute("data-i18n", "hero-greeting").unwrap();
    append_to_body(&document, &greeting);
    let tagline = document.create_element("p").unwrap();
    tagline.set_attribute("data-i18n", "hero-tagline").unwrap();
    append_to_body(&document, &tagline);

    i18n::set_language(&document, Lang::Ja).unwrap();

    let stored = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(i18n::STORAGE_KEY)
        .unwrap();
    assert_eq!(stored.as_deref(), Some("ja"));
    assert_eq!(
        document.body().unwrap().get_attribute("lang").as_deref(),
        Some("ja")
    );
    assert_eq!(
        greeting.text_content().as_deref(),
        Lang::Ja.text("hero-greeting")
    );
    // The markup value lands as real children, not escaped text.
    assert!(tagline.query_selector(".highlight").unwrap().is_some());

    greeting.remove();
    tagline.remove();
}

#[wasm_bindgen_test]
fn clicking_a_tab_moves_the_active_pair() {
    let document = document();
    let first_tab = document.create_element("button").unwrap();
    first_tab.set_class_name("tab-btn active");
    first_tab.set_attribute("data-target", "job-one").unwrap();
    append_to_body(&document, &first_tab);
    let second_tab = document.create_element("button").unwrap();
    second_tab.set_class_name("tab-btn");
    second_tab.set_attribute("data-target", "job-two").unwrap();
    append_to_body(&document, &second_tab);
    let first_panel = document.create_element("div").unwrap();
    first_panel.set_id("job-one");
    first_panel.set_class_name("job-panel active");
    append_to_body(&document, &first_panel);
    let second_panel = document.create_element("div").unwrap();
    second_panel.set_id("job-two");
    second_panel.set_class_name("job-panel");
    append_to_body(&document, &second_panel);

    tabs::init_tabs().unwrap();
    second_tab.dyn_ref::<HtmlElement>().unwrap().click();

    assert!(!first_tab.class_list().contains("active"));
    assert!(second_tab.class_list().contains("active"));
    assert!(!first_panel.class_list().contains("active"));
    assert!(second_panel.class_list().contains("active"));

    first_tab.remove();
    second_tab.remove();
    first_panel.remove();
    second_panel.remove();
}

#[wasm_bindgen_test]
fn the_menu_toggle_flips_classes_and_a_link_closes_it() {
    let document = document();
    let toggle = document.create_element("button").unwrap();
    toggle.set_id(menu::TOGGLE_ID);
    append_to_body(&document, &toggle);
    let links = document.create_element("ul").unwrap();
    links.set_class_name("nav-links");
    append_to_body(&document, &links);
    let link = document.create_element("a").unwrap();
    links.append_child(&link).unwrap();

    menu::init_mobile_menu().unwrap();

    toggle.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(links.class_list().contains("active"));
    assert!(toggle.class_list().contains("active"));

    link.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!links.class_list().contains("active"));
    assert!(!toggle.class_list().contains("active"));

    toggle.remove();
    links.remove();
}
