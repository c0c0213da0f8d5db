use dioxus::prelude::*;

use crate::{
    domain::{Session, HISTORY_CAP},
    ui::components::{
        history_list::HistoryList,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn HistoryPage() -> Element {
    let session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let entries = session.with(|s| s.history().entries().to_vec());
    let count = entries.len();

    let on_clear = {
        let mut session = session.clone();
        let toasts = toasts.clone();
        move |_| {
            session.with_mut(|s| s.clear_history());
            push_toast(toasts.clone(), ToastKind::Info, "History cleared.");
        }
    };

    rsx! {
        section { class: "card",
            div { class: "card-header",
                div {
                    h2 { class: "card-title", "Calculation history" }
                    p { class: "card-subtitle", "Last {HISTORY_CAP} saved calculations, newest first ({count} saved)." }
                }
                if count > 0 {
                    button { class: "btn", onclick: on_clear, "Clear" }
                }
            }
            HistoryList { entries }
        }
    }
}
