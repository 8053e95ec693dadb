//! Plain-text pay report rendering.
//!
//! Renders a [`PayBreakdown`] plus the date range of the underlying
//! records as a single-page report with a fixed line order: title, period
//! line, then total revenue, base pay, night premium (with hours),
//! overtime premium (with hours), deduction, and take-home pay.

use chrono::NaiveDate;

use crate::models::PayBreakdown;

const TITLE: &str = "Taxi Shift Pay Report";

/// Formats a yen amount with thousands separators.
fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("\u{a5}{out}")
}

/// Returns the download file name for a report over the given date range.
pub fn report_filename(range: Option<(NaiveDate, NaiveDate)>) -> String {
    match range {
        Some((first, last)) => format!(
            "pay_report_{}_{}.txt",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        ),
        None => "pay_report.txt".to_string(),
    }
}

/// Renders the pay report as a single page of text.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::models::PayBreakdown;
/// use shiftpay_engine::report::render_report;
///
/// let report = render_report(&PayBreakdown::zero(), None);
/// assert!(report.starts_with("Taxi Shift Pay Report"));
/// assert!(report.contains("Take-home pay"));
/// ```
pub fn render_report(breakdown: &PayBreakdown, range: Option<(NaiveDate, NaiveDate)>) -> String {
    let period = match range {
        Some((first, last)) => format!("{} - {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d")),
        None => "-".to_string(),
    };

    let mut lines = Vec::new();
    lines.push(TITLE.to_string());
    lines.push("=".repeat(TITLE.len()));
    lines.push(String::new());
    lines.push(format!("Period: {period}"));
    lines.push(String::new());
    lines.push(format!(
        "Total revenue:      {}",
        format_yen(breakdown.total_revenue)
    ));
    lines.push(format!(
        "Base pay:           {}",
        format_yen(breakdown.base_pay)
    ));
    lines.push(format!(
        "Night premium:      {} ({} h)",
        format_yen(breakdown.night_premium),
        breakdown.total_night_hours.normalize()
    ));
    lines.push(format!(
        "Overtime premium:   {} ({} h)",
        format_yen(breakdown.overtime_premium),
        breakdown.total_overtime_hours.normalize()
    ));
    lines.push(format!(
        "Deduction (11.5%):  {}",
        format_yen(breakdown.deduction)
    ));
    lines.push(format!(
        "Take-home pay:      {}",
        format_yen(breakdown.take_home)
    ));
    lines.push(String::new());

    lines.join("\n")
}
