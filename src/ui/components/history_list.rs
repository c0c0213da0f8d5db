use dioxus::prelude::*;

use crate::{
    domain::HistoryEntry,
    util::format::{format_cny, format_percent, format_rub},
};

#[component]
pub fn HistoryList(entries: Vec<HistoryEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {
            p { class: "history-empty", "Nothing saved yet. Save a calculation to see it here." }
        };
    }

    rsx! {
        ul { class: "history-list",
            for entry in entries {
                HistoryRow { entry }
            }
        }
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry) -> Element {
    let inputs = entry.inputs;
    let details = format!(
        "{} × {} + {} logistics, commission {}, markup {}",
        format_cny(inputs.base_amount),
        inputs.exchange_rate,
        format_rub(inputs.logistics_cost),
        format_percent(inputs.commission_percent),
        format_percent(inputs.markup_percent),
    );

    rsx! {
        li { class: "history-row",
            div {
                p { class: "history-time", "{entry.timestamp_label()}" }
                p { class: "history-details", "{details}" }
            }
            span { class: "history-price", "{format_rub(entry.final_price)}" }
        }
    }
}
