use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client tiers in ascending order of loyalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientTier {
    Lead,
    Iron,
    Gold,
    Platinum,
}

impl ClientTier {
    pub const ORDER: [ClientTier; 4] = [
        ClientTier::Lead,
        ClientTier::Iron,
        ClientTier::Gold,
        ClientTier::Platinum,
    ];

    pub fn from_str(s: &str) -> Option<ClientTier> {
        match s.to_uppercase().as_str() {
            "LEAD" => Some(ClientTier::Lead),
            "IRON" => Some(ClientTier::Iron),
            "GOLD" => Some(ClientTier::Gold),
            "PLATINUM" => Some(ClientTier::Platinum),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientTier::Lead => "LEAD",
            ClientTier::Iron => "IRON",
            ClientTier::Gold => "GOLD",
            ClientTier::Platinum => "PLATINUM",
        }
    }
}

/// Voucher assigned to a tier. At most one per tier, enforced by the store
/// upserting on tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierVoucher {
    pub id: Uuid,
    pub tier: ClientTier,
    pub voucher_type: String,
}

/// Parsed voucher semantics. Codes follow the admin catalog: "RM10" style
/// flat discounts and "2_HOUR_FREE" style free-hours credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VoucherKind {
    Flat(Decimal),
    HoursFree(u32),
}

impl VoucherKind {
    pub fn parse(code: &str) -> Option<VoucherKind> {
        if let Some(amount) = code.strip_prefix("RM") {
            let amount: Decimal = amount.parse().ok()?;
            if amount <= Decimal::ZERO {
                return None;
            }
            return Some(VoucherKind::Flat(amount));
        }
        if let Some(hours) = code.strip_suffix("_HOUR_FREE") {
            let hours: u32 = hours.parse().ok()?;
            if hours == 0 {
                return None;
            }
            return Some(VoucherKind::HoursFree(hours));
        }
        None
    }
}

#[derive(Deserialize)]
pub struct AssignVoucherReq {
    pub voucher_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_flat_codes() {
        assert_eq!(VoucherKind::parse("RM10"), Some(VoucherKind::Flat(dec!(10))));
        assert_eq!(VoucherKind::parse("RM25"), Some(VoucherKind::Flat(dec!(25))));
    }

    #[test]
    fn parses_hours_free_codes() {
        assert_eq!(VoucherKind::parse("1_HOUR_FREE"), Some(VoucherKind::HoursFree(1)));
        assert_eq!(VoucherKind::parse("2_HOUR_FREE"), Some(VoucherKind::HoursFree(2)));
    }

    #[test]
    fn rejects_garbage_codes() {
        assert_eq!(VoucherKind::parse("RM"), None);
        assert_eq!(VoucherKind::parse("RM0"), None);
        assert_eq!(VoucherKind::parse("0_HOUR_FREE"), None);
        assert_eq!(VoucherKind::parse("FREE_LUNCH"), None);
    }

    #[test]
    fn tier_round_trip() {
        for tier in ClientTier::ORDER {
            assert_eq!(ClientTier::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(ClientTier::from_str("bronze"), None);
    }
}
