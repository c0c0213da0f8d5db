use dioxus::prelude::*;

use crate::{
    domain::Accent,
    ui::theme,
    util::format::{format_percent, format_rub},
};

#[component]
pub fn FinalPriceCard(
    final_price: f64,
    markup_percent: f64,
    markup_amount: f64,
    accent: Accent,
    on_save: EventHandler<()>,
    on_copy: EventHandler<()>,
) -> Element {
    let price_display = format_rub(final_price);
    let markup_display = format!(
        "{} · {}",
        format_percent(markup_percent),
        format_rub(markup_amount)
    );

    rsx! {
        div { class: "final-card", style: "{theme::final_card_style(accent)}",
            div {
                p { class: "final-caption", "Final price" }
                p { class: "final-price", style: "{theme::final_price_style(accent)}", "{price_display}" }
            }
            div { class: "final-side",
                div { class: "markup-badge",
                    p { class: "final-caption", "Markup" }
                    p { class: "markup-value", "{markup_display}" }
                }
                div { class: "final-actions",
                    button { class: "btn btn-primary", onclick: move |_| on_save.call(()), "Save to history" }
                    button { class: "btn", onclick: move |_| on_copy.call(()), "Copy summary" }
                }
            }
        }
    }
}
