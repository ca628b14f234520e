// src/db/memory_store.rs
//
// StatsStore em memória para os testes do serviço e das rotas.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::StatsStore,
    models::records::{EventStatus, InvoiceStatus, InvoiceType, RevenueRecord},
    stats::Interval,
};

#[derive(Debug, Clone)]
pub struct StoredInvoice {
    pub tenant_id: Uuid,
    pub invoice_type: InvoiceType,
    pub status: InvoiceStatus,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub tenant_id: Uuid,
    pub event_date: DateTime<Utc>,
    pub status: EventStatus,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub invoices: Vec<StoredInvoice>,
    pub events: Vec<StoredEvent>,
    /// Faz toda leitura falhar como se o banco tivesse caído.
    pub failing: bool,
    /// Atraso artificial por leitura.
    pub delay: Option<Duration>,
    reads: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sale(mut self, tenant_id: Uuid, total: Decimal, created_at: DateTime<Utc>) -> Self {
        self.invoices.push(StoredInvoice {
            tenant_id,
            invoice_type: InvoiceType::SaleNote,
            status: InvoiceStatus::Completed,
            total,
            created_at,
        });
        self
    }

    pub fn with_invoice(mut self, invoice: StoredInvoice) -> Self {
        self.invoices.push(invoice);
        self
    }

    pub fn with_event(
        mut self,
        tenant_id: Uuid,
        event_date: DateTime<Utc>,
        status: EventStatus,
    ) -> Self {
        self.events.push(StoredEvent {
            tenant_id,
            event_date,
            status,
        });
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    async fn begin_read(&self) -> Result<(), AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl StatsStore for InMemoryStore {
    async fn fetch_revenue_records(
        &self,
        tenant_id: Uuid,
        interval: Interval,
    ) -> Result<Vec<RevenueRecord>, AppError> {
        self.begin_read().await?;
        let mut records: Vec<RevenueRecord> = self
            .invoices
            .iter()
            .filter(|invoice| invoice.tenant_id == tenant_id)
            .filter(|invoice| invoice.invoice_type.is_revenue(invoice.status))
            .filter(|invoice| interval.contains(invoice.created_at))
            .map(|invoice| RevenueRecord {
                total: invoice.total,
                created_at: invoice.created_at,
            })
            .collect();
        records.sort_by_key(|record| record.created_at);
        Ok(records)
    }

    async fn fetch_event_count(
        &self,
        tenant_id: Uuid,
        interval: Interval,
    ) -> Result<i64, AppError> {
        self.begin_read().await?;
        let count = self
            .events
            .iter()
            .filter(|event| event.tenant_id == tenant_id && interval.contains(event.event_date))
            .count();
        Ok(count as i64)
    }

    async fn fetch_pending_event_count(
        &self,
        tenant_id: Uuid,
        interval: Interval,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        self.begin_read().await?;
        let Some(window) = interval.starting_no_earlier_than(now) else {
            return Ok(0);
        };
        let count = self
            .events
            .iter()
            .filter(|event| event.tenant_id == tenant_id)
            .filter(|event| event.status != EventStatus::Cancelled)
            .filter(|event| window.contains(event.event_date))
            .count();
        Ok(count as i64)
    }
}
