//! Append-only transaction log.
//!
//! Every balance-affecting event (purchase accrual, redemption, wheel credit)
//! writes exactly one row here, in the same database transaction as the
//! ledger mutation it describes. Rows are never updated or deleted; the log
//! is the audit superset of the expiry-aware ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Accrual = 1,
    Redemption = 2,
}

impl From<i16> for TxKind {
    fn from(val: i16) -> Self {
        match val {
            1 => TxKind::Accrual,
            2 => TxKind::Redemption,
            _ => TxKind::Accrual, // Default fallback; bonus_delta sign carries the truth
        }
    }
}

impl From<TxKind> for i16 {
    fn from(val: TxKind) -> i16 {
        val as i16
    }
}

/// One immutable log row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub tx_id: Uuid,
    pub customer_id: i64,
    pub operator_id: Option<i64>,
    #[sqlx(try_from = "i16")]
    pub kind: TxKind,
    pub purchase_amount: i64,
    /// Positive for accrual, negative for redemption; equals the net ledger
    /// effect applied in the same database transaction.
    pub bonus_delta: i64,
    pub created_at: DateTime<Utc>,
    pub meta: serde_json::Value,
}

/// A row to be appended
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub customer_id: i64,
    pub operator_id: Option<i64>,
    pub kind: TxKind,
    pub purchase_amount: i64,
    pub bonus_delta: i64,
    pub meta: serde_json::Value,
}

/// Transaction log operations
pub struct TransactionLog;

impl TransactionLog {
    /// Append one row inside the caller's open transaction and return its id.
    pub async fn append(conn: &mut PgConnection, entry: NewTransaction) -> Result<Uuid, sqlx::Error> {
        let tx_id = Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO transactions
                   (tx_id, customer_id, operator_id, kind, purchase_amount, bonus_delta, meta)
               VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(tx_id)
        .bind(entry.customer_id)
        .bind(entry.operator_id)
        .bind(i16::from(entry.kind))
        .bind(entry.purchase_amount)
        .bind(entry.bonus_delta)
        .bind(entry.meta)
        .execute(conn)
        .await?;

        Ok(tx_id)
    }

    /// A customer's transaction history, newest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: i64,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"SELECT tx_id, customer_id, operator_id, kind, purchase_amount,
                      bonus_delta, created_at, meta
               FROM transactions
               WHERE customer_id = $1
               ORDER BY created_at DESC"#,
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await
    }

    /// Net of all recorded deltas for a customer (reconciliation read).
    pub async fn sum_bonus_delta(pool: &PgPool, customer_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"SELECT COALESCE(SUM(bonus_delta), 0)::BIGINT
               FROM transactions
               WHERE customer_id = $1"#,
        )
        .bind(customer_id)
        .fetch_one(pool)
        .await
    }
}
