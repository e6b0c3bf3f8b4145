use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod config;
pub mod seed;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Formats an amount with the configured currency symbol, no decimals when whole.
pub fn format_money(symbol: &str, amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{symbol}{amount:.0}")
    } else {
        format!("{symbol}{amount:.2}")
    }
}
