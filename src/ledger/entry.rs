//! Ledger entry model and balance derivation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Entry kind. The sign of an entry's effect on the balance is carried by
/// the kind, never by the amount.
///
/// Unrecognized kinds decode to [`EntryKind::Unknown`] so that reading an
/// old or foreign log never fails; unknown entries contribute nothing to
/// the balance fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    Unknown,
}

// Lenient by hand: serde's `other` attribute is not available for plain
// string enums, and decoding must never fail on a kind this build does not
// know about.
impl<'de> Deserialize<'de> for EntryKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EntryKind::from(s.as_str()))
    }
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "deposit",
            EntryKind::Withdrawal => "withdrawal",
            EntryKind::Unknown => "unknown",
        }
    }
}

impl From<&str> for EntryKind {
    fn from(s: &str) -> Self {
        match s {
            "deposit" => EntryKind::Deposit,
            "withdrawal" => EntryKind::Withdrawal,
            _ => EntryKind::Unknown,
        }
    }
}

/// One immutable ledger row. Entries are appended once and never updated
/// or deleted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LedgerEntry {
    #[serde(rename = "id")]
    pub entry_id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Strictly positive; serialized as a decimal string.
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
    /// Event timestamp (when the transaction happened).
    #[serde(rename = "date")]
    pub occurred_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fold a single account's entries into its net balance.
///
/// Pure and order-independent: deposits add, withdrawals subtract, anything
/// else is a no-op. Input is assumed validated at entry-creation time, so
/// there are no error conditions.
pub fn balance(entries: &[LedgerEntry]) -> Decimal {
    entries.iter().fold(Decimal::ZERO, |acc, e| match e.kind {
        EntryKind::Deposit => acc + e.amount,
        EntryKind::Withdrawal => acc - e.amount,
        EntryKind::Unknown => acc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(id: i64, kind: EntryKind, amount: Decimal) -> LedgerEntry {
        let now = Utc::now();
        LedgerEntry {
            entry_id: id,
            user_id: 1,
            kind,
            amount,
            occurred_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_balance_empty_log_is_zero() {
        assert_eq!(balance(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_balance_deposits_minus_withdrawals() {
        let entries = vec![
            entry(1, EntryKind::Deposit, d("100")),
            entry(2, EntryKind::Withdrawal, d("40")),
            entry(3, EntryKind::Deposit, d("2.50")),
        ];
        let expected = d("62.50");
        assert_eq!(balance(&entries), expected);
    }

    #[test]
    fn test_balance_is_order_independent() {
        let mut entries = vec![
            entry(1, EntryKind::Deposit, d("10")),
            entry(2, EntryKind::Withdrawal, d("3")),
            entry(3, EntryKind::Deposit, d("7.25")),
            entry(4, EntryKind::Withdrawal, d("0.25")),
        ];
        let forward = balance(&entries);
        entries.reverse();
        assert_eq!(balance(&entries), forward);
    }

    #[test]
    fn test_balance_can_go_negative_on_raw_entries() {
        // The fold itself is unguarded; overdraft protection lives in the
        // transfer coordinator.
        let entries = vec![entry(1, EntryKind::Withdrawal, d("5"))];
        let expected = d("-5");
        assert_eq!(balance(&entries), expected);
    }

    #[test]
    fn test_unknown_kind_is_a_no_op() {
        let entries = vec![
            entry(1, EntryKind::Deposit, d("100")),
            entry(2, EntryKind::Unknown, d("9999")),
        ];
        let expected: Decimal = d("100");
        assert_eq!(balance(&entries), expected);
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        assert_eq!(EntryKind::from("deposit"), EntryKind::Deposit);
        assert_eq!(EntryKind::from("withdrawal"), EntryKind::Withdrawal);
        assert_eq!(EntryKind::from("refund"), EntryKind::Unknown);
        assert_eq!(EntryKind::Deposit.as_str(), "deposit");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&EntryKind::Withdrawal).unwrap();
        assert_eq!(json, "\"withdrawal\"");
        let kind: EntryKind = serde_json::from_str("\"deposit\"").unwrap();
        assert_eq!(kind, EntryKind::Deposit);
        // Unknown strings deserialize leniently rather than failing.
        let kind: EntryKind = serde_json::from_str("\"chargeback\"").unwrap();
        assert_eq!(kind, EntryKind::Unknown);
    }

    #[test]
    fn test_entry_json_wire_names() {
        let e = entry(42, EntryKind::Deposit, d("1.5"));
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["type"], "deposit");
        assert_eq!(json["amount"], "1.5");
        assert!(json.get("date").is_some());
    }
}
