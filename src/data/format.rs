//! Display formatting for Brazilian currency, dates and status keywords.

use chrono::NaiveDate;

/// Format an amount as Brazilian reais, e.g. `R$ 1.200,00`.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

/// Format a date as `dd/mm/yyyy`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Human label for a lowercase status keyword.
pub fn status_label(status: &str) -> String {
    match status {
        "inprogress" => "In progress".to_string(),
        "todo" => "To do".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
