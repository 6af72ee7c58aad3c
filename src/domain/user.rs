use crate::error::TransitionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered subscription tier. The derived `Ord` follows declaration order,
/// so `Freemium < Basic < Premium`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Freemium,
    Basic,
    Premium,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Freemium => "freemium",
            Tier::Basic => "basic",
            Tier::Premium => "premium",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "freemium" => Ok(Tier::Freemium),
            "basic" => Ok(Tier::Basic),
            "premium" => Ok(Tier::Premium),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

/// Requested direction of a tier change.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TierOperation {
    Upgrade,
    Downgrade,
}

impl FromStr for TierOperation {
    type Err = TransitionError;

    // The enum is closed, so an out-of-domain operation can only enter here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upgrade" => Ok(TierOperation::Upgrade),
            "downgrade" => Ok(TierOperation::Downgrade),
            _ => Err(TransitionError::UnknownOperation),
        }
    }
}

/// A subscriber. The id would be a UUID in a fuller system; an opaque
/// string is enough for this prototype.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        tier: Tier,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            tier,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the user to a new tier and bumps the update timestamp.
    /// Callers are expected to adjudicate the move first.
    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Freemium < Tier::Basic);
        assert!(Tier::Basic < Tier::Premium);
        assert_eq!(Tier::Premium.max(Tier::Freemium), Tier::Premium);
    }

    #[test]
    fn test_tier_parse_case_insensitive() {
        assert_eq!("FREEMIUM".parse::<Tier>(), Ok(Tier::Freemium));
        assert_eq!("Basic".parse::<Tier>(), Ok(Tier::Basic));
        assert!("gold".parse::<Tier>().is_err());
    }

    #[test]
    fn test_tier_serialization() {
        let json = serde_json::to_string(&Tier::Premium).unwrap();
        assert_eq!(json, "\"premium\"");

        let tier: Tier = serde_json::from_str("\"freemium\"").unwrap();
        assert_eq!(tier, Tier::Freemium);
    }

    #[test]
    fn test_operation_parse_rejects_unknown() {
        assert_eq!("upgrade".parse::<TierOperation>(), Ok(TierOperation::Upgrade));
        assert_eq!(
            "sideways".parse::<TierOperation>(),
            Err(TransitionError::UnknownOperation)
        );
    }

    #[test]
    fn test_set_tier_bumps_updated_at() {
        let mut user = User::new("1", "test user", "testuser@gmail.com", Tier::Freemium);
        let before = user.updated_at;
        user.set_tier(Tier::Basic);
        assert_eq!(user.tier, Tier::Basic);
        assert!(user.updated_at >= before);
    }
}
