// Diagnostics helpers shared by the page features.

use web_sys::console;

pub fn set_panic_hook() {
    // Panics surface as readable console errors instead of a bare
    // `unreachable` trap.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// RAII handle around console.time / console.timeEnd; the label closes when
// the handle drops.
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
