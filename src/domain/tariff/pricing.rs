//! Effective price values
//!
//! Prices travel as integer mantissas plus a power-of-ten scale. These helpers
//! resolve them to decimals for display and sanity checks. A result that
//! cannot be represented yields `None`.

use rust_decimal::Decimal;

use super::model::{Pricing, Tariff};

/// mantissa × 10^scale
pub fn scaled(mantissa: u32, scale: i8) -> Option<Decimal> {
    let mantissa = i64::from(mantissa);
    if scale <= 0 {
        return Decimal::try_new(mantissa, u32::from(scale.unsigned_abs())).ok();
    }
    (0..scale).try_fold(Decimal::from(mantissa), |acc, _| {
        acc.checked_mul(Decimal::TEN)
    })
}

impl Pricing {
    pub fn standing_charge_value(&self) -> Option<Decimal> {
        scaled(self.standing_charge, self.standing_charge_scale)
    }

    /// Applies the price scale to a tou or block price mantissa.
    pub fn price_value(&self, mantissa: u32) -> Option<Decimal> {
        scaled(mantissa, self.price_scale)
    }
}

impl Tariff {
    /// Effective price of tou action `action` (1-based).
    pub fn tou_price_value(&self, action: usize) -> Option<Decimal> {
        let mantissa = *self.tous.get(action.checked_sub(1)?)?;
        self.pricing.price_value(mantissa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tariff::fixtures;
    use std::str::FromStr;

    #[test]
    fn negative_scale_divides() {
        assert_eq!(scaled(20000, -5), Some(Decimal::from_str("0.20000").unwrap()));
        assert_eq!(scaled(35, -2), Some(Decimal::from_str("0.35").unwrap()));
    }

    #[test]
    fn positive_scale_multiplies() {
        assert_eq!(scaled(12, 3), Some(Decimal::from(12_000)));
        assert_eq!(scaled(7, 0), Some(Decimal::from(7)));
    }

    #[test]
    fn unrepresentable_scale_is_none() {
        assert_eq!(scaled(1, -100), None);
        assert_eq!(scaled(u32::MAX, 100), None);
    }

    #[test]
    fn standing_charge_of_tou_fixture() {
        let t = fixtures::tou_tariff();
        assert_eq!(
            t.pricing.standing_charge_value(),
            Some(Decimal::from_str("0.2").unwrap())
        );
    }

    #[test]
    fn tou_price_lookup_is_one_based() {
        let t = fixtures::tou_tariff();
        assert_eq!(t.tou_price_value(1), Some(Decimal::from_str("0.02121").unwrap()));
        assert_eq!(t.tou_price_value(3), Some(Decimal::from_str("0.04744").unwrap()));
        assert_eq!(t.tou_price_value(0), None);
        assert_eq!(t.tou_price_value(4), None);
    }
}
