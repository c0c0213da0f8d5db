use super::pricing::{parse_amount, CalculationInputs};

/// The five user-editable fields of the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    BaseAmount,
    ExchangeRate,
    LogisticsCost,
    CommissionPercent,
    MarkupPercent,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::BaseAmount,
        InputField::ExchangeRate,
        InputField::LogisticsCost,
        InputField::CommissionPercent,
        InputField::MarkupPercent,
    ];

    /// Text used when nothing usable is stored for this field.
    pub fn default_text(&self) -> &'static str {
        match self {
            InputField::BaseAmount => "400",
            InputField::ExchangeRate => "13.2",
            InputField::LogisticsCost => "1000",
            InputField::CommissionPercent => "10",
            InputField::MarkupPercent => "50",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::BaseAmount => "Base price (¥)",
            InputField::ExchangeRate => "Exchange rate (₽ per ¥)",
            InputField::LogisticsCost => "Logistics (₽)",
            InputField::CommissionPercent => "Agent commission (%)",
            InputField::MarkupPercent => "Markup (%)",
        }
    }

    /// Step hint for the number input.
    pub fn step(&self) -> &'static str {
        match self {
            InputField::ExchangeRate => "0.01",
            InputField::CommissionPercent | InputField::MarkupPercent => "0.1",
            InputField::BaseAmount | InputField::LogisticsCost => "1",
        }
    }
}

/// Raw text of every input, exactly as the user left it.
///
/// Kept as text so editing behaviour (leading zeros, a temporarily empty
/// field) survives; numbers only exist inside [`InputTexts::to_inputs`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputTexts {
    base_amount: String,
    exchange_rate: String,
    logistics_cost: String,
    commission_percent: String,
    markup_percent: String,
}

impl Default for InputTexts {
    fn default() -> Self {
        Self {
            base_amount: InputField::BaseAmount.default_text().to_string(),
            exchange_rate: InputField::ExchangeRate.default_text().to_string(),
            logistics_cost: InputField::LogisticsCost.default_text().to_string(),
            commission_percent: InputField::CommissionPercent.default_text().to_string(),
            markup_percent: InputField::MarkupPercent.default_text().to_string(),
        }
    }
}

impl InputTexts {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::BaseAmount => &self.base_amount,
            InputField::ExchangeRate => &self.exchange_rate,
            InputField::LogisticsCost => &self.logistics_cost,
            InputField::CommissionPercent => &self.commission_percent,
            InputField::MarkupPercent => &self.markup_percent,
        }
    }

    pub fn set(&mut self, field: InputField, text: String) {
        let slot = match field {
            InputField::BaseAmount => &mut self.base_amount,
            InputField::ExchangeRate => &mut self.exchange_rate,
            InputField::LogisticsCost => &mut self.logistics_cost,
            InputField::CommissionPercent => &mut self.commission_percent,
            InputField::MarkupPercent => &mut self.markup_percent,
        };
        *slot = text;
    }

    pub fn to_inputs(&self) -> CalculationInputs {
        CalculationInputs {
            base_amount: parse_amount(&self.base_amount),
            exchange_rate: parse_amount(&self.exchange_rate),
            logistics_cost: parse_amount(&self.logistics_cost),
            commission_percent: parse_amount(&self.commission_percent),
            markup_percent: parse_amount(&self.markup_percent),
        }
    }
}

/// Strip leading zeros from freshly typed text.
///
/// A sole "0" is left alone, a zero right before the decimal point is kept
/// ("0.5"), and text made only of zeros collapses to "0".
pub fn normalize_leading_zeros(raw: &str) -> String {
    if raw.len() <= 1 || !raw.starts_with('0') {
        return raw.to_string();
    }

    let stripped = raw.trim_start_matches('0');
    if stripped.is_empty() {
        "0".to_string()
    } else if stripped.starts_with('.') || stripped.starts_with(',') {
        format!("0{stripped}")
    } else {
        stripped.to_string()
    }
}
