//! Terminal input component with autocompletion and history navigation.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::utils::dom::COMMAND_INPUT_ID;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input line bound to the session's input buffer.
#[component]
pub fn Input(#[prop(into)] prompt: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Helper to move cursor to end of input
    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => ctx.submit(),
        "Tab" => {
            ev.prevent_default();
            ctx.complete();
            move_cursor_to_end();
        }
        "ArrowUp" => {
            ev.prevent_default();
            ctx.recall_previous();
            move_cursor_to_end();
        }
        "ArrowDown" => {
            ev.prevent_default();
            ctx.recall_next();
        }
        "c" if ev.ctrl_key() => ctx.edit(String::new()),
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            ctx.clear();
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| ctx.edit(event_target_value(&ev));

    // Candidates from an ambiguous Tab press
    let candidates_view = move || {
        let candidates = ctx.candidates.get();
        (!candidates.is_empty()).then(|| {
            view! {
                <div class=css::suggestions>
                    {candidates
                        .into_iter()
                        .map(|s| view! { <span class=css::suggestion>{s}</span> })
                        .collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <input
                    node_ref=input_ref
                    id=COMMAND_INPUT_ID
                    type="text"
                    class=css::input
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || ctx.input()
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>

            {candidates_view}
        </div>
    }
}
