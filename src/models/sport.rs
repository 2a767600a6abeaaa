use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fixed sport catalog. Hourly prices are static and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Pickleball,
    Badminton,
    Basketball,
    Futsal,
}

impl Sport {
    pub const ALL: [Sport; 4] = [
        Sport::Pickleball,
        Sport::Badminton,
        Sport::Basketball,
        Sport::Futsal,
    ];

    //case-insensitive lookup, unknown names are the caller's problem
    pub fn from_name(name: &str) -> Option<Sport> {
        match name.to_lowercase().as_str() {
            "pickleball" => Some(Sport::Pickleball),
            "badminton" => Some(Sport::Badminton),
            "basketball" => Some(Sport::Basketball),
            "futsal" => Some(Sport::Futsal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Pickleball => "pickleball",
            Sport::Badminton => "badminton",
            Sport::Basketball => "basketball",
            Sport::Futsal => "futsal",
        }
    }

    /// Hourly court price in RM.
    pub fn price_per_hour(&self) -> Decimal {
        match self {
            Sport::Pickleball => dec!(50),
            Sport::Badminton => dec!(25),
            Sport::Basketball => dec!(75),
            Sport::Futsal => dec!(80),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Sport::from_name("Badminton"), Some(Sport::Badminton));
        assert_eq!(Sport::from_name("FUTSAL"), Some(Sport::Futsal));
        assert_eq!(Sport::from_name("tennis"), None);
    }

    #[test]
    fn price_table() {
        assert_eq!(Sport::Pickleball.price_per_hour(), dec!(50));
        assert_eq!(Sport::Badminton.price_per_hour(), dec!(25));
        assert_eq!(Sport::Basketball.price_per_hour(), dec!(75));
        assert_eq!(Sport::Futsal.price_per_hour(), dec!(80));
    }
}
