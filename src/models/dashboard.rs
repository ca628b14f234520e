// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{common::error::AppError, stats::ReportingPeriod};

// 1. Linha do gráfico comparativo (período atual x anterior)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    #[schema(example = "03 ago")]
    pub name: String,
    #[schema(example = "1000.00")]
    pub current: Decimal,
    #[schema(example = "500.00")]
    pub previous: Decimal,
}

// 2. Resposta completa do dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[schema(example = "1000.00")]
    pub total_revenue: Decimal,
    #[schema(example = 12)]
    pub total_events: i64,
    #[schema(example = 4)]
    pub pending_events: i64,
    // Variações em porcentagem
    #[schema(example = "100")]
    pub revenue_change: Decimal,
    #[schema(example = "-50")]
    pub events_change: Decimal,
    #[schema(example = "0")]
    pub pending_change: Decimal,
    pub chart_data: Vec<ChartPoint>,
}

impl DashboardStats {
    /// Estado vazio devolvido quando não há tenant resolvido.
    pub fn empty() -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            total_events: 0,
            pending_events: 0,
            revenue_change: Decimal::ZERO,
            events_change: Decimal::ZERO,
            pending_change: Decimal::ZERO,
            chart_data: Vec::new(),
        }
    }
}

// 3. Query string de GET /api/dashboard/stats
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// daily, weekly, monthly ou yearly (padrão: monthly)
    #[param(example = "monthly")]
    pub period: Option<String>,
}

impl DashboardQuery {
    pub fn reporting_period(&self) -> Result<ReportingPeriod, AppError> {
        match self.period.as_deref() {
            None => Ok(ReportingPeriod::Monthly),
            Some(value) => value.parse(),
        }
    }
}
