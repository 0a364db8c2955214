//! Display formatting
//!
//! Price strings for supplier cards and the cost breakdown panel.

use shared::models::Supplier;

use crate::money::{to_decimal, to_f64};
use crate::supplier_calculator::SupplierQuote;

/// Format an amount in pounds. Whole pounds drop the decimals; anything
/// else shows two places.
///
/// # Examples
/// ```
/// use pricing_engine::display::format_pounds;
///
/// assert_eq!(format_pounds(150.0), "£150");
/// assert_eq!(format_pounds(45.5), "£45.50");
/// ```
pub fn format_pounds(amount: f64) -> String {
    let rounded = to_f64(to_decimal(amount));
    if rounded.fract() == 0.0 {
        format!("£{}", rounded as i64)
    } else {
        format!("£{rounded:.2}")
    }
}

fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{hours}")
    }
}

/// Price string for a supplier card. Party bags show the per-bag unit and
/// the all-bags total; everyone else shows the final price.
pub fn display_price(supplier: &Supplier, quote: &SupplierQuote) -> String {
    if supplier.category.is_per_guest() {
        return format!(
            "{} per bag ({} bags = {} total)",
            format_pounds(supplier.base_price),
            quote.details.guest_count,
            format_pounds(quote.base_price),
        );
    }
    format_pounds(quote.final_price)
}

/// Multi-line cost breakdown: base first, each nonzero modifier in fixed
/// order, then the total
pub fn price_breakdown_text(quote: &SupplierQuote) -> String {
    let mut lines = vec![format!("Base price: {}", format_pounds(quote.breakdown.base))];
    if quote.breakdown.weekend != 0.0 {
        lines.push(format!(
            "Weekend premium: {}",
            format_pounds(quote.breakdown.weekend)
        ));
    }
    if quote.breakdown.extra_hours != 0.0 {
        let hours = quote.details.extra_hours;
        let unit = if hours == 1.0 { "hour" } else { "hours" };
        lines.push(format!(
            "{} extra {unit}: {}",
            format_hours(hours),
            format_pounds(quote.breakdown.extra_hours)
        ));
    }
    if quote.breakdown.additional_entertainers != 0.0 {
        let count = quote.details.additional_entertainers;
        let unit = if count == 1 { "entertainer" } else { "entertainers" };
        lines.push(format!(
            "{count} additional {unit}: {}",
            format_pounds(quote.breakdown.additional_entertainers)
        ));
    }
    if quote.breakdown.addons != 0.0 {
        lines.push(format!("Add-ons: {}", format_pounds(quote.breakdown.addons)));
    }
    lines.push(format!("Total: {}", format_pounds(quote.final_price)));
    lines.join("\n")
}
