//! Session state: input texts, appearance and saved calculations, kept in
//! sync with the key-value store.
//!
//! - Input edits are persisted through a per-field debounce.
//! - Appearance changes and history mutations are written immediately.
//! - Storage failures are logged and otherwise ignored; the in-memory state
//!   stays authoritative for the running session.

use std::sync::Arc;

use time::OffsetDateTime;

use super::{
    appearance::{Accent, Theme},
    history::{History, HistoryEntry},
    inputs::{normalize_leading_zeros, InputField, InputTexts},
    pricing::{compute, parse_finite, CalculationResult},
};
use crate::{
    infra::{
        debounce::Debouncer,
        storage::{KeyValueStore, SharedStore, StorageError},
    },
    util::{
        config::AppConfig,
        format::{format_cny, format_percent, format_rub},
    },
};

/// Namespaced keys, one per persisted concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Theme,
    Accent,
    Input(InputField),
    History,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Theme => "sc.theme",
            StorageKey::Accent => "sc.accent",
            StorageKey::Input(InputField::BaseAmount) => "sc.base",
            StorageKey::Input(InputField::ExchangeRate) => "sc.rate",
            StorageKey::Input(InputField::LogisticsCost) => "sc.logi",
            StorageKey::Input(InputField::CommissionPercent) => "sc.comm",
            StorageKey::Input(InputField::MarkupPercent) => "sc.mark",
            StorageKey::History => "sc.history",
        }
    }
}

pub struct Session {
    store: SharedStore,
    texts: InputTexts,
    theme: Theme,
    accent: Accent,
    history: History,
    pending_writes: Debouncer<InputField>,
}

impl Session {
    /// Restore the previous session from `store`, substituting defaults for
    /// anything missing or unreadable.
    pub fn load_initial(store: SharedStore, config: &AppConfig) -> Self {
        let theme = read_key(store.as_ref(), StorageKey::Theme)
            .map(|raw| Theme::from_stored(&raw))
            .unwrap_or_default();

        let accent = read_key(store.as_ref(), StorageKey::Accent)
            .and_then(|raw| Accent::from_stored(&raw))
            .unwrap_or_default();

        let mut texts = InputTexts::default();
        for field in InputField::ALL {
            if let Some(raw) = read_key(store.as_ref(), StorageKey::Input(field)) {
                if parse_finite(&raw).is_some() {
                    texts.set(field, raw);
                } else {
                    tracing::warn!(
                        key = StorageKey::Input(field).as_str(),
                        "stored value {raw:?} is not a number; using default"
                    );
                }
            }
        }

        let history = read_key(store.as_ref(), StorageKey::History)
            .map(|raw| {
                History::from_json(&raw).unwrap_or_else(|err| {
                    tracing::warn!("discarding unreadable history: {err}");
                    History::default()
                })
            })
            .unwrap_or_default();

        tracing::debug!(
            theme = %theme,
            accent = %accent,
            history = history.len(),
            "session loaded"
        );

        Self {
            store,
            texts,
            theme,
            accent,
            history,
            pending_writes: Debouncer::new(config.debounce),
        }
    }

    pub fn inputs(&self) -> &InputTexts {
        &self.texts
    }

    pub fn input(&self, field: InputField) -> &str {
        self.texts.get(field)
    }

    /// Store freshly typed text for `field` and schedule its write.
    pub fn set_input(&mut self, field: InputField, raw: &str) {
        let text = normalize_leading_zeros(raw);
        self.store_text(field, text);
    }

    /// Clear a lone "0" so the user can type over it.
    pub fn focus_input(&mut self, field: InputField) {
        if self.texts.get(field) == "0" {
            self.store_text(field, String::new());
        }
    }

    /// Put "0" back into a field left empty.
    pub fn blur_input(&mut self, field: InputField) {
        if self.texts.get(field).is_empty() {
            self.store_text(field, "0".to_string());
        }
    }

    fn store_text(&mut self, field: InputField, text: String) {
        if self.texts.get(field) == text {
            return;
        }
        self.texts.set(field, text.clone());

        let store = Arc::clone(&self.store);
        self.pending_writes.schedule(field, move || {
            write_key(store.as_ref(), StorageKey::Input(field), &text);
        });
    }

    /// Pricing result for the current inputs.
    pub fn recompute(&self) -> CalculationResult {
        compute(&self.texts.to_inputs())
    }

    /// Save the current calculation at the head of the history and persist
    /// the whole list right away.
    pub fn commit_to_history(&mut self) -> HistoryEntry {
        let inputs = self.texts.to_inputs().clamped();
        let result = compute(&inputs);
        let timestamp = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let entry = HistoryEntry::new(timestamp, inputs, result.final_price);

        self.history.push(entry.clone());
        match self.persist_history() {
            Ok(()) => tracing::debug!(entries = self.history.len(), "history saved"),
            Err(err) => tracing::warn!("failed to persist history: {err}"),
        }
        entry
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        if let Err(err) = self.store.remove(StorageKey::History.as_str()) {
            tracing::warn!("failed to remove stored history: {err}");
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn persist_history(&self) -> Result<(), StorageError> {
        let json = self.history.to_json()?;
        self.store.set(StorageKey::History.as_str(), &json)
    }

    /// Plain-text report of the current calculation, suitable for the clipboard.
    pub fn export_summary(&self) -> String {
        let inputs = self.texts.to_inputs().clamped();
        let result = compute(&inputs);

        [
            "Sneaker price summary".to_string(),
            format!(
                "Base price: {} × {} = {}",
                format_cny(inputs.base_amount),
                inputs.exchange_rate,
                format_rub(result.base_in_currency_b)
            ),
            format!(
                "Commission ({} of base): {} → {}",
                format_percent(inputs.commission_percent),
                format_cny(result.commission_in_currency_a),
                format_rub(result.commission_in_currency_b)
            ),
            format!("Logistics: {}", format_rub(inputs.logistics_cost)),
            format!("Cost price: {}", format_rub(result.cost_price)),
            format!(
                "Markup ({}): {}",
                format_percent(inputs.markup_percent),
                format_rub(result.markup_amount)
            ),
            format!("Final price: {}", format_rub(result.final_price)),
            format!("Profit: {}", format_rub(result.profit)),
        ]
        .join("\n")
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        write_key(self.store.as_ref(), StorageKey::Theme, theme.as_str());
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn set_accent(&mut self, accent: Accent) {
        self.accent = accent;
        write_key(self.store.as_ref(), StorageKey::Accent, accent.as_str());
    }

    /// Input writes still waiting for their debounce window.
    pub fn pending_writes(&self) -> usize {
        self.pending_writes.pending()
    }

    /// Drop every pending input write. Called when the window goes away.
    pub fn shutdown(&mut self) {
        let pending = self.pending_writes();
        self.pending_writes.cancel_all();
        tracing::debug!(pending, "session shut down");
    }
}

fn read_key(store: &dyn KeyValueStore, key: StorageKey) -> Option<String> {
    match store.get(key.as_str()) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key = key.as_str(), "failed to read setting: {err}");
            None
        }
    }
}

fn write_key(store: &dyn KeyValueStore, key: StorageKey, value: &str) {
    match store.set(key.as_str(), value) {
        Ok(()) => tracing::debug!(key = key.as_str(), "persisted setting"),
        Err(err) => tracing::warn!(key = key.as_str(), "failed to persist setting: {err}"),
    }
}
