//! Prize catalog.
//!
//! Read-mostly configuration rows: each prize belongs to one wheel, carries a
//! positive integer weight, and either issues a voucher (`expiry_days > 0`,
//! or `0` with a non-credit code for a voucher that never expires) or credits
//! bonus points directly (`expiry_days == 0` with the credit amount encoded
//! in the code, e.g. `bonus_100`).

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};

use super::WheelType;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Prize {
    pub prize_id: i64,
    pub code: String,
    pub title: String,
    #[sqlx(try_from = "i16")]
    pub wheel: WheelType,
    pub weight: i32,
    pub expiry_days: i32,
    pub is_active: bool,
}

/// How a won prize is fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeKind {
    /// Immediate ledger credit of this many points.
    BonusCredit(i64),
    /// Issued voucher, redeemed later by an operator.
    Voucher,
}

impl Prize {
    /// Credit amount encoded in the prize code (`bonus_100` -> 100).
    pub fn bonus_amount(&self) -> Option<i64> {
        let (_, digits) = self.code.split_once("bonus_")?;
        digits.parse::<i64>().ok().filter(|n| *n > 0)
    }

    /// Fulfillment shape: `expiry_days == 0` with a parsable credit code is a
    /// direct bonus credit, everything else is a voucher.
    pub fn kind(&self) -> PrizeKind {
        if self.expiry_days == 0 {
            if let Some(amount) = self.bonus_amount() {
                return PrizeKind::BonusCredit(amount);
            }
        }
        PrizeKind::Voucher
    }
}

/// Prize catalog operations
pub struct PrizeCatalog;

impl PrizeCatalog {
    /// Active prizes for one wheel, in declared insertion order
    /// (ascending `prize_id`). The draw walks this exact order, so boundary
    /// rolls resolve deterministically.
    pub async fn active_for_wheel(
        conn: &mut PgConnection,
        wheel: WheelType,
    ) -> Result<Vec<Prize>, sqlx::Error> {
        sqlx::query_as::<_, Prize>(
            r#"SELECT prize_id, code, title, wheel, weight, expiry_days, is_active
               FROM prizes
               WHERE wheel = $1 AND is_active
               ORDER BY prize_id ASC"#,
        )
        .bind(i16::from(wheel))
        .fetch_all(conn)
        .await
    }

    /// Seed the default catalog if the prizes table is empty.
    ///
    /// Returns the number of prizes inserted (0 when already seeded).
    pub async fn seed_if_empty(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM prizes")
            .fetch_one(pool)
            .await?;
        if count > 0 {
            return Ok(0);
        }

        // (code, title, weight, expiry_days); weights sum to 100 per wheel
        let defaults: [(&str, &str, i32, i32); 9] = [
            ("topping_free", "Free topping", 20, 14),
            ("size_up_s_m", "Size upgrade S to M", 20, 14),
            ("bonus_100", "100 bonus points", 10, 0),
            ("cookie_free", "Free crumble cookie", 10, 14),
            ("fruit_tea_free", "Free fruit tea", 10, 14),
            ("lemonade_free", "Free lemonade", 10, 14),
            ("milk_tea_free", "Free milk tea", 10, 14),
            ("milkshake_free", "Free milkshake", 5, 14),
            ("coffee_free", "Free coffee", 5, 14),
        ];

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for wheel in [WheelType::Welcome, WheelType::Birthday] {
            for (code, title, weight, expiry_days) in defaults {
                // Codes are globally unique, so the birthday copy gets its own
                let code = match wheel {
                    WheelType::Welcome => code.to_string(),
                    WheelType::Birthday => format!("bday_{}", code),
                };
                sqlx::query(
                    r#"INSERT INTO prizes (code, title, wheel, weight, expiry_days)
                       VALUES ($1, $2, $3, $4, $5)"#,
                )
                .bind(&code)
                .bind(title)
                .bind(i16::from(wheel))
                .bind(weight)
                .bind(expiry_days)
                .execute(&mut *tx)
                .await?;
                inserted += 1;
            }
        }
        tx.commit().await?;

        tracing::info!(inserted, "Seeded default prize catalog");
        Ok(inserted)
    }
}
