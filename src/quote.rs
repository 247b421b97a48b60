//! Rough print-price estimate from an uploaded model's byte size.
//!
//! No geometry is read; the mass guess is a straight byte-count scale with a
//! floor, and the rest is fixed arithmetic over the selected options.

const BYTES_PER_GRAM: f64 = 10_000.0;
const MIN_MASS_GRAMS: u64 = 10;
const RUSH_SURCHARGE: f64 = 0.5;

/// Option values read from the quote controls on every recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuoteInputs {
    /// Price per gram of the selected material (`data-price`).
    pub material_unit_price: f64,
    /// Quality tier multiplier (`data-multiplier`).
    pub quality_multiplier: f64,
    pub quantity: i64,
    pub rush: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuoteBreakdown {
    pub mass_grams: u64,
    pub base_cost: f64,
    pub quality_cost: f64,
    pub quantity_cost: f64,
    /// Zero when rush is off.
    pub rush_cost: f64,
    pub total: f64,
}

pub fn estimate_mass_grams(file_bytes: u64) -> u64 {
    let scaled = (file_bytes as f64 / BYTES_PER_GRAM).round() as u64;
    scaled.max(MIN_MASS_GRAMS)
}

pub fn estimate(file_bytes: u64, inputs: &QuoteInputs) -> QuoteBreakdown {
    let mass_grams = estimate_mass_grams(file_bytes);
    let base_cost = mass_grams as f64 * inputs.material_unit_price;
    let quality_cost = base_cost * inputs.quality_multiplier;
    let quantity_cost = quality_cost * inputs.quantity as f64;
    let (rush_cost, total) = if inputs.rush {
        (quantity_cost * RUSH_SURCHARGE, quantity_cost * (1.0 + RUSH_SURCHARGE))
    } else {
        (0.0, quantity_cost)
    };
    QuoteBreakdown {
        mass_grams,
        base_cost,
        quality_cost,
        quantity_cost,
        rush_cost,
        total,
    }
}

/// Reads the quantity field the way a lenient integer parse would: leading
/// sign and digits count, trailing junk is ignored, nothing usable means 1.
/// Zero and negative values are passed through unchanged.
pub fn parse_quantity(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<i64>() {
        Ok(value) => sign * value,
        Err(_) => 1,
    }
}

/// Parses a `data-price` / `data-multiplier` attribute.
pub fn parse_factor(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Two-decimal currency. Exact half-cent ties round away from zero; every
/// other value rounds from its exact binary expansion.
pub fn format_money(value: f64) -> String {
    format!("${}", fixed_cents(value))
}

fn fixed_cents(value: f64) -> String {
    // A half-cent tie representable in binary is an odd multiple of 1/8.
    let eighths = value.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 && eighths < (1u64 << 53) as f64 {
        let cents = (eighths as u64 * 25 + 1) / 2;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }
    format!("{value:.2}")
}

pub fn format_mass(grams: u64) -> String {
    format!("{grams}g")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(rush: bool) -> QuoteInputs {
        QuoteInputs {
            material_unit_price: 0.05,
            quality_multiplier: 1.2,
            quantity: 2,
            rush,
        }
    }

    #[test]
    fn five_megabyte_model_without_rush() {
        let quote = estimate(5_000_000, &inputs(false));
        assert_eq!(quote.mass_grams, 500);
        assert_eq!(format_money(quote.base_cost), "$25.00");
        assert_eq!(format_money(quote.quality_cost), "$30.00");
        assert_eq!(format_money(quote.total), "$60.00");
        assert_eq!(quote.rush_cost, 0.0);
    }

    #[test]
    fn rush_adds_half_of_quantity_cost() {
        let quote = estimate(5_000_000, &inputs(true));
        assert_eq!(format_money(quote.rush_cost), "$30.00");
        assert_eq!(format_money(quote.total), "$90.00");
    }

    #[test]
    fn tiny_files_hit_the_mass_floor() {
        assert_eq!(estimate_mass_grams(0), 10);
        assert_eq!(estimate_mass_grams(1), 10);
        assert_eq!(estimate_mass_grams(104_999), 10);
        assert_eq!(estimate_mass_grams(105_000), 11);
    }

    #[test]
    fn mass_rounds_to_nearest_gram() {
        assert_eq!(estimate_mass_grams(1_234_999), 123);
        assert_eq!(estimate_mass_grams(1_235_000), 124);
    }

    #[test]
    fn quantity_parsing_is_lenient() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("4pcs"), 4);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("many"), 1);
        assert_eq!(parse_quantity("-"), 1);
    }

    #[test]
    fn quantity_parsing_keeps_zero_and_negatives() {
        assert_eq!(parse_quantity("0"), 0);
        assert_eq!(parse_quantity("-2"), -2);
    }

    #[test]
    fn factors_reject_garbage() {
        assert_eq!(parse_factor("0.05"), Some(0.05));
        assert_eq!(parse_factor(" 1.5 "), Some(1.5));
        assert_eq!(parse_factor(""), None);
        assert_eq!(parse_factor("cheap"), None);
        assert_eq!(parse_factor("NaN"), None);
    }

    #[test]
    fn display_formats() {
        assert_eq!(format_mass(500), "500g");
        assert_eq!(format_money(12.5), "$12.50");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn half_cent_ties_round_up() {
        let quote = estimate(
            1,
            &QuoteInputs {
                material_unit_price: 0.125,
                quality_multiplier: 1.0,
                quantity: 1,
                rush: true,
            },
        );
        assert_eq!(quote.rush_cost, 0.625);
        assert_eq!(format_money(quote.rush_cost), "$0.63");
        assert_eq!(format_money(0.125), "$0.13");
        assert_eq!(format_money(0.375), "$0.38");
        assert_eq!(format_money(2.875), "$2.88");
        assert_eq!(format_money(-0.625), "$-0.63");
    }

    #[test]
    fn near_ties_follow_the_exact_value() {
        // 1.115 and 1.005 are stored just below the half cent.
        assert_eq!(format_money(1.115), "$1.11");
        assert_eq!(format_money(1.005), "$1.00");
        assert_eq!(format_money(1.255), "$1.25");
    }
}
