/// Timestamp format stored with every order
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time as `YYYY-MM-DD HH:MM:SS`
pub fn now_datetime() -> String {
    chrono::Local::now().format(DATETIME_FORMAT).to_string()
}

/// Currency symbol prefixed to every amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount with the currency symbol and two decimals
pub fn format_money(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}
