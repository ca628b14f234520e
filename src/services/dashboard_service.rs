// src/services/dashboard_service.rs

use std::{future::Future, sync::Arc, time::Duration};

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::StatsStore,
    models::dashboard::DashboardStats,
    stats::{
        aggregate, bucketize, build_series, percent_change, resolve_period, Language,
        ReportingPeriod,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn StatsStore>,
    fetch_timeout: Duration,
    reporting_offset: FixedOffset,
}

impl DashboardService {
    pub fn new(
        store: Arc<dyn StatsStore>,
        fetch_timeout: Duration,
        reporting_offset: FixedOffset,
    ) -> Self {
        Self {
            store,
            fetch_timeout,
            reporting_offset,
        }
    }

    /// Indicadores do dashboard para o período atual, comparados ao anterior.
    ///
    /// Sem tenant resolvido devolve o estado vazio em vez de erro. Qualquer
    /// falha de leitura derruba o cálculo inteiro: não há resultado parcial.
    pub async fn get_dashboard_stats(
        &self,
        tenant_id: Option<Uuid>,
        period: ReportingPeriod,
        now: DateTime<Utc>,
        lang: Language,
    ) -> Result<DashboardStats, AppError> {
        let Some(tenant_id) = tenant_id else {
            tracing::debug!("Dashboard sem tenant resolvido, devolvendo estado vazio");
            return Ok(DashboardStats::empty());
        };

        let tz = self.reporting_offset;
        let current = resolve_period(period, now, tz)?;
        let previous = current.previous();

        tracing::debug!(
            %tenant_id,
            period = period.as_str(),
            start = %current.start,
            end = %current.end,
            "Calculando estatísticas do dashboard"
        );

        let store = &self.store;
        let (
            current_revenue,
            current_events,
            current_pending,
            previous_revenue,
            previous_events,
            previous_pending,
        ) = tokio::try_join!(
            self.bounded("revenue_current", store.fetch_revenue_records(tenant_id, current)),
            self.bounded("events_current", store.fetch_event_count(tenant_id, current)),
            self.bounded(
                "pending_current",
                store.fetch_pending_event_count(tenant_id, current, now)
            ),
            self.bounded("revenue_previous", store.fetch_revenue_records(tenant_id, previous)),
            self.bounded("events_previous", store.fetch_event_count(tenant_id, previous)),
            self.bounded(
                "pending_previous",
                store.fetch_pending_event_count(tenant_id, previous, now)
            ),
        )?;

        let total_revenue = aggregate(current_revenue.iter().map(|record| record.total));
        let previous_total = aggregate(previous_revenue.iter().map(|record| record.total));

        let current_buckets = bucketize(
            current_revenue.iter().map(|record| (record.created_at, record.total)),
            &current,
            period,
            tz,
            lang,
        )?;
        let previous_buckets = bucketize(
            previous_revenue.iter().map(|record| (record.created_at, record.total)),
            &previous,
            period,
            tz,
            lang,
        )?;

        Ok(DashboardStats {
            total_revenue,
            total_events: current_events,
            pending_events: current_pending,
            revenue_change: percent_change(total_revenue, previous_total),
            events_change: percent_change(
                Decimal::from(current_events),
                Decimal::from(previous_events),
            ),
            pending_change: percent_change(
                Decimal::from(current_pending),
                Decimal::from(previous_pending),
            ),
            chart_data: build_series(&current_buckets, &previous_buckets),
        })
    }

    // Aplica o tempo limite a uma leitura
    async fn bounded<T, F>(&self, read: &'static str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(self.fetch_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    read,
                    timeout = ?self.fetch_timeout,
                    "Leitura do dashboard excedeu o tempo limite"
                );
                Err(AppError::StoreTimeout(read))
            }
        }
    }
}
