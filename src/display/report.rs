//! Shared formatting helpers for terminal reports

use crate::derivation::{clamp_for_display, ProgressStatus, Tier};
use crate::models::Resource;

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A fixed-width bar filled to `pct` percent (clamped to 0..=100)
pub fn format_bar(pct: f64, width: usize) -> String {
    let filled = ((clamp_for_display(pct) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// A resource quantity: currency with a symbol, counts as whole numbers
pub fn format_quantity(resource: Resource, value: f64, currency: &str) -> String {
    if resource.is_currency() {
        format!("{}{:.2}", currency, value)
    } else {
        format!("{:.0}", value)
    }
}

/// A per-day allowance; counts keep one decimal place
pub fn format_rate(resource: Resource, rate: f64, currency: &str) -> String {
    if resource.is_currency() {
        format!("{}{:.2}/day", currency, rate)
    } else {
        format!("{:.1}/day", rate)
    }
}

pub fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Low => "LOW",
        Tier::Medium => "MEDIUM",
        Tier::High => "HIGH",
    }
}

pub fn status_label(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::Within(tier) => tier_label(tier),
        ProgressStatus::OverBudget => "OVER",
    }
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
