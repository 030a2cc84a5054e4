//! Plain-text rendering of a pricing breakdown.

use std::fmt;

use rust_decimal::Decimal;

use super::calculators::round_money;
use super::models::PricingBreakdown;

/// Format an amount as Philippine pesos, `en-PH` style: `₱19,000.00`
pub fn format_peso(amount: Decimal) -> String {
    let rounded = round_money(amount, 2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₱{grouped}.{cents}")
}

/// Itemized summary: one line per menu item, then the totals
pub struct PricingSummary<'a>(pub &'a PricingBreakdown);

impl fmt::Display for PricingSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let breakdown = self.0;

        writeln!(f, "Menu Pricing Summary")?;
        writeln!(f, "Guests: {}", breakdown.guest_count)?;
        writeln!(f)?;

        if !breakdown.menu_items.is_empty() {
            writeln!(f, "Menu Items:")?;
            for line in &breakdown.menu_items {
                writeln!(
                    f,
                    "- {} ({}): {} x {} = {}",
                    line.name,
                    line.category,
                    format_peso(line.price_per_guest),
                    line.guest_count,
                    format_peso(line.total)
                )?;
            }
            writeln!(f)?;
        }

        let fee_label = if breakdown.is_wedding_package {
            "Wedding Package"
        } else {
            "Service Fee"
        };

        writeln!(f, "Menu Subtotal: {}", format_peso(breakdown.subtotal))?;
        writeln!(f, "{}: {}", fee_label, format_peso(breakdown.service_fee))?;
        writeln!(f, "Total Amount: {}", format_peso(breakdown.total_amount))?;
        writeln!(f, "Price per Guest: {}", format_peso(breakdown.price_per_guest))?;
        write!(f, "Down Payment (50%): {}", format_peso(breakdown.down_payment))
    }
}

/// Render a [`PricingSummary`] to a string
pub fn render_summary(breakdown: &PricingBreakdown) -> String {
    PricingSummary(breakdown).to_string()
}
