// Language selection and application: one persisted preference, two static
// tables, and a text swap over every tagged element.

use crate::dom;
use crate::translations;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document};

pub const STORAGE_KEY: &str = "lang";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Lang {
    En,
    Ja,
}

impl Lang {
    // Unknown and missing codes behave like a fresh visit in English.
    pub fn from_code(code: &str) -> Lang {
        match code {
            "ja" => Lang::Ja,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
        }
    }

    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::En => translations::EN,
            Lang::Ja => translations::JA,
        }
    }

    pub fn text(self, key: &str) -> Option<&'static str> {
        translations::lookup(self.table(), key)
    }
}

pub fn init_localization() -> Result<(), JsValue> {
    let document = dom::document()?;
    set_language(&document, stored_language())?;

    for button in dom::elements_with_selector(&document, ".lang-btn")? {
        let on_click = {
            let document = document.clone();
            let button = button.clone();
            Closure::wrap(Box::new(move || {
                let code = button.get_attribute("data-lang").unwrap_or_default();
                if let Err(error) = set_language(&document, Lang::from_code(&code)) {
                    console::warn_1(&error);
                }
            }) as Box<dyn FnMut()>)
        };
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

// Applies a language everywhere it shows: the stored preference, the body's
// lang attribute (fonts key off it), the language buttons, and every
// [data-i18n] element's content.
pub fn set_language(document: &Document, lang: Lang) -> Result<(), JsValue> {
    persist_language(lang);

    if let Some(body) = document.body() {
        body.set_attribute("lang", lang.code())?;
    }

    for button in dom::elements_with_selector(document, ".lang-btn")? {
        if button.get_attribute("data-lang").as_deref() == Some(lang.code()) {
            button.class_list().add_1("active")?;
        } else {
            button.class_list().remove_1("active")?;
        }
    }

    for element in dom::elements_with_selector(document, "[data-i18n]")? {
        let key = match element.get_attribute("data-i18n") {
            Some(key) => key,
            None => continue,
        };
        // A key missing from the table leaves the element untouched.
        if let Some(text) = lang.text(&key) {
            if text.contains('<') {
                element.set_inner_html(text);
            } else {
                element.set_text_content(Some(text));
            }
        }
    }
    Ok(())
}

fn stored_language() -> Lang {
    let stored = dom::window()
        .ok()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    Lang::from_code(stored.as_deref().unwrap_or(Lang::En.code()))
}

// Only validated codes are ever written.
fn persist_language(lang: Lang) {
    match dom::window().and_then(|window| window.local_storage()) {
        Ok(Some(storage)) => {
            if let Err(error) = storage.set_item(STORAGE_KEY, lang.code()) {
                console::warn_1(&error);
            }
        }
        Ok(None) => console::warn_1(&JsValue::from_str(
            "localStorage is unavailable; language preference not saved",
        )),
        Err(error) => console::warn_1(&error),
    }
}
