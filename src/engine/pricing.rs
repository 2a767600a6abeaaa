use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::sport::Sport;
use crate::models::voucher::VoucherKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("unknown sport: {0}")]
    UnknownSport(String),
}

/// Computed price breakdown for a selection. Derived on every read, never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    pub sport: Sport,
    pub price_per_hour: Decimal,
    pub slot_count: u32,
    pub subtotal: Decimal,
    pub voucher: Option<String>,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Price a selection, applying at most one voucher. Unknown sport names are
/// an error rather than the zero price the old court pages fell back to; a
/// zero quote there only ever masked a data-entry mistake upstream.
pub fn quote(
    sport_name: &str,
    slot_count: u32,
    voucher: Option<(&str, &VoucherKind)>,
) -> Result<PriceQuote, PricingError> {
    let sport = Sport::from_name(sport_name).ok_or_else(|| {
        tracing::warn!(sport = sport_name, "quote requested for unknown sport");
        PricingError::UnknownSport(sport_name.to_string())
    })?;

    let price_per_hour = sport.price_per_hour();
    let subtotal = price_per_hour * Decimal::from(slot_count);

    let discount = match voucher {
        Some((_, VoucherKind::Flat(amount))) => subtotal.min(*amount),
        Some((_, VoucherKind::HoursFree(hours))) => {
            price_per_hour * Decimal::from((*hours).min(slot_count))
        }
        None => Decimal::ZERO,
    };

    let total = (subtotal - discount).max(Decimal::ZERO);

    Ok(PriceQuote {
        sport,
        price_per_hour,
        slot_count,
        subtotal,
        voucher: voucher.map(|(code, _)| code.to_string()),
        discount,
        total,
    })
}

/// Split a total across `n` per-booking payments, 2dp each, remainder folded
/// into the first share so the parts always sum back to the total.
pub fn split_amount(total: Decimal, n: u32) -> Vec<Decimal> {
    if n == 0 {
        return Vec::new();
    }
    let share = (total / Decimal::from(n)).round_dp(2);
    let mut parts = vec![share; n as usize];
    parts[0] = total - share * Decimal::from(n - 1);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn subtotal_without_voucher() {
        let q = quote("badminton", 2, None).unwrap();
        assert_eq!(q.price_per_hour, dec!(25));
        assert_eq!(q.subtotal, dec!(50));
        assert_eq!(q.discount, dec!(0));
        assert_eq!(q.total, dec!(50));
    }

    #[test]
    fn flat_voucher_discount() {
        //badminton 25/hr, 3 slots, RM10 off
        let voucher = VoucherKind::Flat(dec!(10));
        let q = quote("badminton", 3, Some(("RM10", &voucher))).unwrap();
        assert_eq!(q.subtotal, dec!(75));
        assert_eq!(q.discount, dec!(10));
        assert_eq!(q.total, dec!(65));
        assert_eq!(q.voucher.as_deref(), Some("RM10"));
    }

    #[test]
    fn hours_free_voucher_discount() {
        //pickleball 50/hr, 2 slots, 1 hour free
        let voucher = VoucherKind::HoursFree(1);
        let q = quote("pickleball", 2, Some(("1_HOUR_FREE", &voucher))).unwrap();
        assert_eq!(q.subtotal, dec!(100));
        assert_eq!(q.discount, dec!(50));
        assert_eq!(q.total, dec!(50));
    }

    #[test]
    fn hours_free_capped_at_slot_count() {
        let voucher = VoucherKind::HoursFree(2);
        let q = quote("pickleball", 1, Some(("2_HOUR_FREE", &voucher))).unwrap();
        assert_eq!(q.discount, dec!(50));
        assert_eq!(q.total, dec!(0));
    }

    #[test]
    fn flat_voucher_clamps_total_at_zero() {
        //futsal 80/hr, 1 slot, RM100 off
        let voucher = VoucherKind::Flat(dec!(100));
        let q = quote("futsal", 1, Some(("RM100", &voucher))).unwrap();
        assert_eq!(q.subtotal, dec!(80));
        assert_eq!(q.discount, dec!(80));
        assert_eq!(q.total, dec!(0));
    }

    #[test]
    fn unknown_sport_is_an_error() {
        let err = quote("tennis", 3, None).unwrap_err();
        assert_eq!(err, PricingError::UnknownSport("tennis".to_string()));
    }

    #[test]
    fn empty_selection_quotes_zero() {
        let q = quote("futsal", 0, None).unwrap();
        assert_eq!(q.subtotal, dec!(0));
        assert_eq!(q.total, dec!(0));
    }

    #[test]
    fn split_sums_back_to_total() {
        let parts = split_amount(dec!(65), 3);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts.iter().copied().sum::<Decimal>(), dec!(65));
        assert_eq!(parts[1], dec!(21.67));
        assert_eq!(parts[0], dec!(21.66));
    }

    #[test]
    fn split_handles_degenerate_counts() {
        assert!(split_amount(dec!(10), 0).is_empty());
        assert_eq!(split_amount(dec!(10), 1), vec![dec!(10)]);
    }
}
