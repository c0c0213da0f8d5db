//! Resale pricing formula.
//!
//! Everything here is pure: no I/O, no state, cheap enough to run on every
//! keystroke.

use serde::{Deserialize, Serialize};

/// Upper bound applied to every numeric input before it is used.
pub const MAX_INPUT: f64 = 1_000_000_000.0;

/// Numeric inputs of a single calculation.
///
/// Amounts are in the source currency (CNY) unless noted otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInputs {
    /// Unit price before conversion, source currency.
    pub base_amount: f64,
    /// Units of target currency per one unit of source currency.
    pub exchange_rate: f64,
    /// Flat logistics cost, target currency.
    pub logistics_cost: f64,
    /// Intermediary commission, percent of `base_amount`.
    pub commission_percent: f64,
    /// Seller margin, percent of the cost price.
    pub markup_percent: f64,
}

impl CalculationInputs {
    /// Returns a copy with every field clamped into `[0, MAX_INPUT]`.
    pub fn clamped(&self) -> Self {
        Self {
            base_amount: clamp_input(self.base_amount),
            exchange_rate: clamp_input(self.exchange_rate),
            logistics_cost: clamp_input(self.logistics_cost),
            commission_percent: clamp_input(self.commission_percent),
            markup_percent: clamp_input(self.markup_percent),
        }
    }
}

/// Values derived from [`CalculationInputs`]. Never stored on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalculationResult {
    pub base_in_currency_b: f64,
    pub commission_in_currency_a: f64,
    pub commission_in_currency_b: f64,
    pub cost_price: f64,
    pub markup_amount: f64,
    pub final_price: f64,
    pub profit: f64,
}

/// Clamp a raw number into the accepted input range. Non-finite values become 0.
pub fn clamp_input(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_INPUT)
    } else {
        0.0
    }
}

/// Parse user-entered text into a number.
///
/// Blank text is 0, a comma is accepted as the decimal separator, and
/// anything that does not parse to a finite number is 0.
pub fn parse_amount(text: &str) -> f64 {
    parse_finite(text).unwrap_or(0.0)
}

/// Strict form of [`parse_amount`]: `None` for blank or unparseable text.
pub fn parse_finite(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Run the pricing formula. Commission is always taken on the base amount,
/// never on logistics.
pub fn compute(inputs: &CalculationInputs) -> CalculationResult {
    let CalculationInputs {
        base_amount,
        exchange_rate,
        logistics_cost,
        commission_percent,
        markup_percent,
    } = inputs.clamped();

    let base_in_currency_b = base_amount * exchange_rate;
    let commission_in_currency_a = base_amount * commission_percent / 100.0;
    let commission_in_currency_b = commission_in_currency_a * exchange_rate;
    let cost_price = base_in_currency_b + logistics_cost + commission_in_currency_b;
    let markup_amount = cost_price * markup_percent / 100.0;
    let final_price = cost_price + markup_amount;
    let profit = final_price - cost_price;

    CalculationResult {
        base_in_currency_b,
        commission_in_currency_a,
        commission_in_currency_b,
        cost_price,
        markup_amount,
        final_price,
        profit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalculationInputs {
        CalculationInputs {
            base_amount: 400.0,
            exchange_rate: 13.2,
            logistics_cost: 1000.0,
            commission_percent: 10.0,
            markup_percent: 50.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_scenario() {
        let result = compute(&sample());

        assert_close(result.base_in_currency_b, 5280.0);
        assert_close(result.commission_in_currency_a, 40.0);
        assert_close(result.commission_in_currency_b, 528.0);
        assert_close(result.cost_price, 6808.0);
        assert_close(result.markup_amount, 3404.0);
        assert_close(result.final_price, 10212.0);
        assert_close(result.profit, 3404.0);
    }

    #[test]
    fn test_final_price_identities() {
        let cases = [
            sample(),
            CalculationInputs::default(),
            CalculationInputs {
                base_amount: 1234.56,
                exchange_rate: 0.07,
                logistics_cost: 15.0,
                commission_percent: 250.0,
                markup_percent: 3.3,
            },
            CalculationInputs {
                base_amount: MAX_INPUT,
                exchange_rate: MAX_INPUT,
                logistics_cost: MAX_INPUT,
                commission_percent: MAX_INPUT,
                markup_percent: MAX_INPUT,
            },
        ];

        for inputs in cases {
            let result = compute(&inputs);
            assert_eq!(result.final_price, result.cost_price + result.markup_amount);
            assert_eq!(result.profit, result.final_price - result.cost_price);
        }
    }

    #[test]
    fn test_profit_matches_markup() {
        let result = compute(&sample());
        assert_eq!(result.profit, result.markup_amount);
    }

    #[test]
    fn test_compute_is_pure() {
        let inputs = sample();
        assert_eq!(compute(&inputs), compute(&inputs));
    }

    #[test]
    fn test_negative_input_clamps_to_zero() {
        let inputs = CalculationInputs {
            base_amount: -5.0,
            ..sample()
        };
        let result = compute(&inputs);

        assert_eq!(result.base_in_currency_b, 0.0);
        assert_eq!(result.commission_in_currency_a, 0.0);
        assert_close(result.cost_price, 1000.0);
    }

    #[test]
    fn test_large_input_clamps_to_max() {
        let inputs = CalculationInputs {
            base_amount: 2e9,
            exchange_rate: 1.0,
            logistics_cost: 0.0,
            commission_percent: 0.0,
            markup_percent: 0.0,
        };
        let result = compute(&inputs);

        assert_eq!(result.base_in_currency_b, MAX_INPUT);
        assert_eq!(result.final_price, MAX_INPUT);
    }

    #[test]
    fn test_non_finite_inputs_become_zero() {
        assert_eq!(clamp_input(f64::NAN), 0.0);
        assert_eq!(clamp_input(f64::INFINITY), 0.0);
        assert_eq!(clamp_input(f64::NEG_INFINITY), 0.0);

        let inputs = CalculationInputs {
            exchange_rate: f64::NAN,
            ..sample()
        };
        let result = compute(&inputs);
        assert_eq!(result.base_in_currency_b, 0.0);
        assert_close(result.cost_price, 1000.0);
    }

    #[test]
    fn test_commission_ignores_logistics() {
        let cheap = compute(&CalculationInputs {
            logistics_cost: 0.0,
            ..sample()
        });
        let pricey = compute(&sample());
        assert_eq!(cheap.commission_in_currency_a, pricey.commission_in_currency_a);
        assert_eq!(cheap.commission_in_currency_b, pricey.commission_in_currency_b);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("400"), 400.0);
        assert_eq!(parse_amount(" 13.2 "), 13.2);
        assert_eq!(parse_amount("13,2"), 13.2);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_finite_rejects_what_parse_amount_zeroes() {
        assert_eq!(parse_finite("13,2"), Some(13.2));
        assert_eq!(parse_finite(" 0 "), Some(0.0));
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("abc"), None);
        assert_eq!(parse_finite("inf"), None);

        for raw in ["", "abc", "NaN", "7,5", "12"] {
            assert_eq!(parse_amount(raw), parse_finite(raw).unwrap_or(0.0));
        }
    }
}
