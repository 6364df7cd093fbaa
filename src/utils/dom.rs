//! Browser DOM helpers.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Element id of the command line `<input>`.
pub const COMMAND_INPUT_ID: &str = "command-input";

/// Give keyboard focus back to the command line, e.g. after a click on the
/// transcript. Does nothing if the input is not mounted.
pub fn focus_terminal_input() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(COMMAND_INPUT_ID))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(input) = input
        && let Err(err) = input.focus()
    {
        log::debug!("focus failed: {:?}", err);
    }
}

/// Current year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
