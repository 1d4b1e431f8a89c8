use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amount::AmountType;

/// Kind of balance-affecting event, with the counterparty name for transfers
///
/// Serialized as the `type` tag plus `to`/`from` on the enclosing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    TransferOut { to: String },
    TransferIn { from: String },
}

impl TransactionKind {
    /// Wire name of this kind (`deposit`, `withdraw`, `transfer_out`, `transfer_in`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::TransferOut { .. } => "transfer_out",
            Self::TransferIn { .. } => "transfer_in",
        }
    }
}

/// Immutable record of a single balance-affecting event on one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = ""))]
pub struct Transaction<A: AmountType> {
    #[serde(flatten)]
    kind: TransactionKind,
    amount: A,
    date: DateTime<Utc>,
}

impl<A: AmountType> Transaction<A> {
    pub(crate) fn deposit(amount: A, date: DateTime<Utc>) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
            date,
        }
    }

    pub(crate) fn withdraw(amount: A, date: DateTime<Utc>) -> Self {
        Self {
            kind: TransactionKind::Withdraw,
            amount,
            date,
        }
    }

    pub(crate) fn transfer_out(amount: A, to: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            kind: TransactionKind::TransferOut { to: to.into() },
            amount,
            date,
        }
    }

    pub(crate) fn transfer_in(amount: A, from: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            kind: TransactionKind::TransferIn { from: from.into() },
            amount,
            date,
        }
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn amount(&self) -> A {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Display name of the other account, for transfers only
    pub fn counterparty(&self) -> Option<&str> {
        match &self.kind {
            TransactionKind::TransferOut { to } => Some(to),
            TransactionKind::TransferIn { from } => Some(from),
            TransactionKind::Deposit | TransactionKind::Withdraw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::FixedPoint;
    use serde_json::json;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn deposit_has_no_counterparty() {
        let tx = Transaction::deposit(FixedPoint::from_raw(10_000), at("2025-01-01T00:00:00Z"));

        assert_eq!(tx.kind().as_str(), "deposit");
        assert_eq!(tx.amount(), FixedPoint::from_raw(10_000));
        assert_eq!(tx.counterparty(), None);
    }

    #[test]
    fn transfers_record_counterparty() {
        let date = at("2025-01-01T00:00:00Z");
        let out = Transaction::transfer_out(FixedPoint::from_raw(1), "Maria Souza", date);
        let inbound = Transaction::transfer_in(FixedPoint::from_raw(1), "João Silva", date);

        assert_eq!(out.kind().as_str(), "transfer_out");
        assert_eq!(out.counterparty(), Some("Maria Souza"));
        assert_eq!(inbound.kind().as_str(), "transfer_in");
        assert_eq!(inbound.counterparty(), Some("João Silva"));
    }

    #[test]
    fn serializes_to_document_shape() {
        let tx = Transaction::transfer_out(
            FixedPoint::from_raw(3_000_000),
            "Maria Souza",
            at("2025-01-01T12:00:00Z"),
        );

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "transfer_out");
        assert_eq!(value["to"], "Maria Souza");
        assert_eq!(value["amount"], 300);
        assert!(value.get("from").is_none());
        assert!(value["date"].as_str().unwrap().starts_with("2025-01-01T12:00:00"));
    }

    #[test]
    fn deserializes_records_with_millisecond_dates() {
        let value = json!({
            "type": "transfer_in",
            "amount": 300,
            "from": "João Silva",
            "date": "2024-05-10T14:03:22.512Z"
        });

        let tx: Transaction<FixedPoint> = serde_json::from_value(value).unwrap();
        assert_eq!(
            tx.kind(),
            &TransactionKind::TransferIn {
                from: "João Silva".to_string()
            }
        );
        assert_eq!(tx.amount(), FixedPoint::from_raw(3_000_000));
        assert_eq!(tx.date(), at("2024-05-10T14:03:22.512Z"));
    }

    #[test]
    fn rejects_unknown_type() {
        let value = json!({ "type": "refund", "amount": 1, "date": "2024-05-10T14:03:22Z" });
        assert!(serde_json::from_value::<Transaction<FixedPoint>>(value).is_err());
    }
}
