use dioxus::prelude::*;

use crate::domain::{InputField, Session};

/// Numeric text input bound to one session field.
#[component]
pub fn NumberInput(field: InputField) -> Element {
    let mut session = use_context::<Signal<Session>>();
    let value = session.with(|s| s.input(field).to_string());

    rsx! {
        label { class: "field",
            span { class: "field-label", "{field.label()}" }
            input {
                class: "field-input",
                r#type: "number",
                step: field.step(),
                placeholder: "0",
                value: value,
                oninput: move |evt| session.with_mut(|s| s.set_input(field, &evt.value())),
                onfocus: move |_| session.with_mut(|s| s.focus_input(field)),
                onblur: move |_| session.with_mut(|s| s.blur_input(field)),
            }
        }
    }
}
