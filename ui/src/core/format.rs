//! Formatting helpers for presenting preferences.

use super::locale::Currency;

/// Option label for the currency pickers, e.g. `EUR · €`.
pub fn format_currency_option(currency: Currency) -> String {
    if currency.symbol() == currency.code() {
        currency.code().to_string()
    } else {
        format!("{} · {}", currency.code(), currency.symbol())
    }
}

pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
