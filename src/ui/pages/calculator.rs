use dioxus::prelude::*;

use crate::{
    domain::{HistoryEntry, InputField, Session},
    ui::{
        clipboard::copy_text_to_clipboard,
        components::{
            final_price_card::FinalPriceCard,
            number_input::NumberInput,
            result_row::ResultRow,
            toast::{push_toast, ToastKind, ToastMessage},
        },
    },
    util::format::{format_cny, format_rub},
};

/// Toast shown after a save. The entry is already committed by then, so a
/// failed copy only changes the wording.
fn save_toast(entry: &HistoryEntry, copied: bool) -> (ToastKind, String) {
    let saved = format_rub(entry.final_price);
    if copied {
        (
            ToastKind::Success,
            format!("Saved {saved} to history and copied the summary."),
        )
    } else {
        (
            ToastKind::Info,
            format!("Saved {saved} to history. Clipboard unavailable."),
        )
    }
}

#[component]
pub fn CalculatorPage() -> Element {
    let session = use_context::<Signal<Session>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (inputs, result, accent) = session.with(|s| {
        (
            s.inputs().to_inputs().clamped(),
            s.recompute(),
            s.accent(),
        )
    });
    let commission_text = session.with(|s| s.input(InputField::CommissionPercent).to_string());

    let on_save = {
        let mut session = session.clone();
        let toasts = toasts.clone();
        move |_| {
            let entry = session.with_mut(|s| s.commit_to_history());
            let summary = session.with(|s| s.export_summary());
            let toasts = toasts.clone();
            spawn(async move {
                let copied = copy_text_to_clipboard(&summary).await;
                let (kind, text) = save_toast(&entry, copied);
                push_toast(toasts, kind, text);
            });
        }
    };

    let on_copy = {
        let session = session.clone();
        let toasts = toasts.clone();
        move |_| {
            let summary = session.with(|s| s.export_summary());
            let toasts = toasts.clone();
            spawn(async move {
                if copy_text_to_clipboard(&summary).await {
                    push_toast(toasts, ToastKind::Success, "Summary copied.");
                } else {
                    push_toast(toasts, ToastKind::Warning, "Could not reach the clipboard.");
                }
            });
        }
    };

    rsx! {
        div { class: "calculator-grid",
            section { class: "card",
                h2 { class: "card-title", "Inputs" }
                div { class: "field-stack",
                    NumberInput { field: InputField::BaseAmount }
                    NumberInput { field: InputField::ExchangeRate }
                    NumberInput { field: InputField::LogisticsCost }
                    div { class: "field-pair",
                        NumberInput { field: InputField::CommissionPercent }
                        NumberInput { field: InputField::MarkupPercent }
                    }
                }
            }

            section { class: "card",
                h2 { class: "card-title", "Results" }
                div { class: "result-stack",
                    ResultRow { label: "Price in yuan".to_string(), value: format_cny(inputs.base_amount) }
                    ResultRow { label: "Converted to roubles".to_string(), value: format_rub(result.base_in_currency_b) }
                    ResultRow {
                        label: format!("Commission ({commission_text}% of base)"),
                        value: format!(
                            "{} → {}",
                            format_cny(result.commission_in_currency_a),
                            format_rub(result.commission_in_currency_b)
                        ),
                    }
                    ResultRow { label: "Logistics".to_string(), value: format_rub(inputs.logistics_cost) }
                    ResultRow { label: "Cost price".to_string(), value: format_rub(result.cost_price) }
                    ResultRow { label: "Profit".to_string(), value: format_rub(result.profit) }
                }

                FinalPriceCard {
                    final_price: result.final_price,
                    markup_percent: inputs.markup_percent,
                    markup_amount: result.markup_amount,
                    accent,
                    on_save,
                    on_copy,
                }

                p { class: "formula-note",
                    "Formula: (base ¥ × rate + logistics + commission ¥→₽) × (1 + markup %). "
                    "Results update as you type; inputs are saved automatically."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use super::*;
    use crate::{infra::storage::MemoryStore, util::config::AppConfig};

    fn session() -> Session {
        let config = AppConfig {
            data_dir: None,
            debounce: Duration::from_millis(300),
        };
        Session::load_initial(Arc::new(MemoryStore::new()), &config)
    }

    #[test]
    fn test_failed_copy_keeps_saved_entry() {
        let mut session = session();
        let entry = session.commit_to_history();

        let (kind, text) = save_toast(&entry, false);
        assert_eq!(kind, ToastKind::Info);
        assert_eq!(text, "Saved 10\u{a0}212\u{a0}₽ to history. Clipboard unavailable.");
        assert_eq!(session.history().entries().first(), Some(&entry));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_successful_copy_reports_both_actions() {
        let mut session = session();
        let entry = session.commit_to_history();

        let (kind, text) = save_toast(&entry, true);
        assert_eq!(kind, ToastKind::Success);
        assert!(text.ends_with("to history and copied the summary."));
    }
}
