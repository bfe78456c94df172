//! Defines the core data models for transactions and the payloads used to
//! create and replace them.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{Error, category::Category, payload::deserialize_present};

/// The caller-chosen ID of a transaction, unique within a session.
pub type TransactionId = i64;

/// Whether money came into or left the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money was paid into the account.
    Deposit,
    /// Money was paid out of the account.
    Withdrawal,
}

impl TransactionType {
    /// The name used for the type in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(TransactionType::Deposit),
            "withdrawal" => Ok(TransactionType::Withdrawal),
            other => Err(Error::InvalidPayload(format!(
                "unknown transaction type \"{other}\""
            ))),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An amount of money.
///
/// The amount is kept as the exact text of the JSON number the client sent,
/// so `0` stays `0`, `10.50` stays `10.50` and large integers keep every digit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Number);

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Stored as text so that the representation survives the round trip.
impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse::<Number>()
            .map(Amount)
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Fields serialize in declaration order, which is the order clients see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened, as the RFC 3339 timestamp the client sent.
    pub date: String,
    /// The amount of money that moved.
    pub amount: Amount,
    /// The IBAN of the other party.
    #[serde(rename = "external-iban")]
    pub external_iban: String,
    /// Whether the money came in or went out.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category of the transaction, if it has one.
    pub category: Option<Category>,
}

/// The request body for creating or replacing a [Transaction].
///
/// Every field except `id` is required; `category` must be present but may
/// be `null`.
#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    #[serde(default)]
    id: Option<TransactionId>,
    date: String,
    amount: Amount,
    #[serde(rename = "external-iban")]
    external_iban: String,
    #[serde(rename = "type")]
    kind: TransactionType,
    #[serde(default, deserialize_with = "deserialize_present")]
    category: Option<Option<Category>>,
}

impl TransactionPayload {
    /// Validate the payload for creating a new transaction, which must carry its own ID.
    ///
    /// # Errors
    /// Returns [Error::InvalidPayload] if the ID or category is missing, or
    /// if the date is not an RFC 3339 timestamp.
    pub fn into_new_transaction(self) -> Result<Transaction, Error> {
        let id = self
            .id
            .ok_or_else(|| Error::InvalidPayload("missing field `id`".to_owned()))?;

        self.into_transaction(id)
    }

    /// Validate the payload for replacing the transaction with `id`.
    ///
    /// The payload may omit its ID, but if it has one it must match `id`.
    ///
    /// # Errors
    /// Returns [Error::InvalidPayload] if the IDs differ, the category is
    /// missing, or the date is not an RFC 3339 timestamp.
    pub fn into_replacement(self, id: TransactionId) -> Result<Transaction, Error> {
        match self.id {
            Some(payload_id) if payload_id != id => Err(Error::InvalidPayload(format!(
                "the body ID {payload_id} does not match the path ID {id}"
            ))),
            _ => self.into_transaction(id),
        }
    }

    fn into_transaction(self, id: TransactionId) -> Result<Transaction, Error> {
        if let Err(error) = OffsetDateTime::parse(&self.date, &Rfc3339) {
            return Err(Error::InvalidPayload(format!(
                "\"{}\" is not an RFC 3339 date: {error}",
                self.date
            )));
        }

        let category = self
            .category
            .ok_or_else(|| Error::InvalidPayload("missing field `category`".to_owned()))?;

        Ok(Transaction {
            id,
            date: self.date,
            amount: self.amount,
            external_iban: self.external_iban,
            kind: self.kind,
            category,
        })
    }
}
