//! Currency display in Brazilian reais

use crate::valuation::round_cents;
use rust_decimal::Decimal;

/// Format an amount as pt-BR reais, e.g. `R$ 1.234,56`
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_cents(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents}")
}

/// Format a percentage with an explicit sign, e.g. `+3,95%`
pub fn format_pct(value: Decimal) -> String {
    let rounded = round_cents(value);
    let sign = if rounded >= Decimal::ZERO { "+" } else { "-" };
    let text = format!("{:.2}", rounded.abs());
    format!("{sign}{}%", text.replace('.', ","))
}
