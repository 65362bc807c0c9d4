// Pricing calculator: booking total and platform commission
use serde::Serialize;

// Platform fee, fixed share of the booking total
pub const COMMISSION_RATE: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingSummary {
    pub total: f64,
    pub commission: f64,
}

// Round to 2 decimal places: scale by 100, round half away from zero, unscale
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// Pure and deterministic; safe to call on every keystroke
pub fn compute_summary(traveler_count: u32, price_per_person: f64) -> BookingSummary {
    let price = if price_per_person.is_finite() {
        price_per_person
    } else {
        0.0
    };

    let total = round2(traveler_count as f64 * price);
    let commission = round2(total * COMMISSION_RATE);

    BookingSummary { total, commission }
}

// Input coercion mirroring the form fields: invalid or missing input is zero,
// never an error
pub fn coerce_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

pub fn coerce_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_summary_for_three_travelers() {
        let summary = compute_summary(3, 85.00);
        assert_eq!(summary.total, 255.00);
        assert_eq!(summary.commission, 25.50);
    }

    #[test_case(0, 999.99, 0.00, 0.00; "#1 zero travelers")]
    #[test_case(1, 0.0, 0.00, 0.00; "#2 zero price")]
    #[test_case(1, 84.82, 84.82, 8.48; "#3 single traveler")]
    #[test_case(2, 45.00, 90.00, 9.00; "#4 two travelers")]
    #[test_case(4, 180.00, 720.00, 72.00; "#5 larger party")]
    #[test_case(3, 33.33, 99.99, 10.00; "#6 commission rounds up")]
    fn test_compute_summary(count: u32, price: f64, expected_total: f64, expected_commission: f64) {
        let summary = compute_summary(count, price);
        assert_eq!(summary.total, expected_total);
        assert_eq!(summary.commission, expected_commission);
    }

    #[test]
    fn test_non_finite_price_degrades_to_zero() {
        assert_eq!(compute_summary(3, f64::NAN).total, 0.00);
        assert_eq!(compute_summary(3, f64::INFINITY).commission, 0.00);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(84.825), 84.83);
    }

    #[test]
    fn test_round2_keeps_two_decimal_output() {
        // multiplying prices like 0.1 by a count drifts past 2 decimals
        // without the scaled-integer round
        let summary = compute_summary(3, 0.10);
        assert_eq!(summary.total, 0.30);
    }

    #[test_case("3", 3; "#1 plain integer")]
    #[test_case("  2  ", 2; "#2 surrounding whitespace")]
    #[test_case("", 0; "#3 empty input")]
    #[test_case("abc", 0; "#4 non-numeric input")]
    #[test_case("-1", 0; "#5 negative count")]
    #[test_case("2.5", 0; "#6 fractional count")]
    fn test_coerce_count(raw: &str, expected: u32) {
        assert_eq!(coerce_count(raw), expected);
    }

    #[test_case("85.00", 85.0; "#1 decimal amount")]
    #[test_case(" 45 ", 45.0; "#2 surrounding whitespace")]
    #[test_case("", 0.0; "#3 empty input")]
    #[test_case("not a price", 0.0; "#4 non-numeric input")]
    #[test_case("NaN", 0.0; "#5 nan literal")]
    #[test_case("inf", 0.0; "#6 infinite literal")]
    fn test_coerce_amount(raw: &str, expected: f64) {
        assert_eq!(coerce_amount(raw), expected);
    }

    #[test]
    fn test_summary_is_stable_for_random_inputs() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let count = rng.gen_range(0..=50);
            let price = rng.gen_range(0.0..10_000.0);

            let summary = compute_summary(count, price);

            // deterministic on repeat calls
            assert_eq!(summary, compute_summary(count, price));
            // outputs carry no sub-cent residue
            assert_eq!(summary.total, round2(summary.total));
            assert_eq!(summary.commission, round2(summary.commission));
            assert!(summary.total >= 0.0 && summary.commission >= 0.0);
        }
    }
}
