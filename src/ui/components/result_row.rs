use dioxus::prelude::*;

#[component]
pub fn ResultRow(label: String, value: String) -> Element {
    rsx! {
        div { class: "result-row",
            span { class: "result-label", "{label}" }
            span { class: "result-value", "{value}" }
        }
    }
}
