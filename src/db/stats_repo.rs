// src/db/stats_repo.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{db_utils::begin_tenant_transaction, error::AppError},
    models::records::{EventStatus, RevenueRecord, REVENUE_INVOICE_STATUS, REVENUE_INVOICE_TYPE},
    stats::Interval,
};

/// Leituras que o dashboard faz no banco, sempre escopadas por tenant.
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Notas de venda concluídas com `created_at` em `[start, end)`.
    async fn fetch_revenue_records(
        &self,
        tenant_id: Uuid,
        interval: Interval,
    ) -> Result<Vec<RevenueRecord>, AppError>;

    /// Eventos com `event_date` em `[start, end)`, qualquer status.
    async fn fetch_event_count(&self, tenant_id: Uuid, interval: Interval) -> Result<i64, AppError>;

    /// Eventos não cancelados com `event_date` em `[max(start, now), end)`.
    async fn fetch_pending_event_count(
        &self,
        tenant_id: Uuid,
        interval: Interval,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError>;
}

#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsStore for PgStatsRepository {
    async fn fetch_revenue_records(
        &self,
        tenant_id: Uuid,
        interval: Interval,
    ) -> Result<Vec<RevenueRecord>, AppError> {
        let mut tx = begin_tenant_transaction(&self.pool, tenant_id).await?;

        let records = sqlx::query_as::<_, RevenueRecord>(
            r#"
            SELECT total, created_at
            FROM invoices
            WHERE tenant_id = $1
              AND "type" = $2
              AND status = $3
              AND created_at >= $4
              AND created_at < $5
            ORDER BY created_at ASC
            "#,
        )
            .bind(tenant_id)
            .bind(REVENUE_INVOICE_TYPE)
            .bind(REVENUE_INVOICE_STATUS)
            .bind(interval.start)
            .bind(interval.end)
            .fetch_all(&mut *tx)
            .await?;

        // Só leitura, mas commit fecha a transação de forma limpa
        tx.commit().await?;

        Ok(records)
    }

    async fn fetch_event_count(
        &self,
        tenant_id: Uuid,
        interval: Interval,
    ) -> Result<i64, AppError> {
        let mut tx = begin_tenant_transaction(&self.pool, tenant_id).await?;

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM events
            WHERE tenant_id = $1
              AND event_date >= $2
              AND event_date < $3
            "#,
        )
            .bind(tenant_id)
            .bind(interval.start)
            .bind(interval.end)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(count)
    }

    async fn fetch_pending_event_count(
        &self,
        tenant_id: Uuid,
        interval: Interval,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        // Evento no passado nunca é pendente, seja qual for o status gravado
        let Some(window) = interval.starting_no_earlier_than(now) else {
            return Ok(0);
        };

        let mut tx = begin_tenant_transaction(&self.pool, tenant_id).await?;

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM events
            WHERE tenant_id = $1
              AND event_date >= $2
              AND event_date < $3
              AND status <> $4
            "#,
        )
            .bind(tenant_id)
            .bind(window.start)
            .bind(window.end)
            .bind(EventStatus::Cancelled)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(count)
    }
}
