//! Property-based tests for amount rendering

use paytr::core::format::{decimal_amount, minor_units};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    /// For whole-kurus amounts the minor-unit string is exactly the kurus
    /// count, with no decimal point and no leading zeros.
    #[test]
    fn minor_units_of_exact_kurus_amounts(kurus in 0i64..1_000_000_000) {
        let amount = Decimal::new(kurus, 2);
        prop_assert_eq!(minor_units(amount), kurus.to_string());
    }

    /// The two renderings agree: `decimal_amount` with the point removed
    /// equals `minor_units`, modulo leading zeros.
    #[test]
    fn minor_units_and_decimal_amount_agree(kurus in 0i64..1_000_000_000) {
        let amount = Decimal::new(kurus, 2);
        let with_point = decimal_amount(amount).replace('.', "");
        let trimmed = with_point.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(minor_units(amount), expected);
    }

    #[test]
    fn decimal_amount_always_has_two_places(kurus in 0i64..1_000_000_000) {
        let rendered = decimal_amount(Decimal::new(kurus, 2));
        let (_, fraction) = rendered.split_once('.').expect("missing decimal point");
        prop_assert_eq!(fraction.len(), 2);
    }

    /// Sub-kurus precision rounds rather than truncates.
    #[test]
    fn sub_kurus_amounts_round_half_away_from_zero(tenths in 0i64..10_000_000) {
        let amount = Decimal::new(tenths, 3);
        let expected = (tenths + 5) / 10;
        prop_assert_eq!(minor_units(amount), expected.to_string());
    }
}

#[test]
fn known_edge_cases() {
    assert_eq!(minor_units(dec!(100.99)), "10099");
    assert_eq!(minor_units(dec!(100.005)), "10001");
    assert_eq!(minor_units(dec!(0.1)), "10");
    assert_eq!(decimal_amount(dec!(10.5)), "10.50");
}
