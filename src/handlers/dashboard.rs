// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::CurrentTenant, i18n::Locale},
    // Importamos os models para referenciar no Swagger
    models::dashboard::{DashboardQuery, DashboardStats},
};

// GET /api/dashboard/stats
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Indicadores e gráfico comparativo (zerado sem autenticação)", body = DashboardStats),
        (status = 400, description = "Período inválido"),
        (status = 500, description = "Falha ao ler o banco de dados"),
        (status = 504, description = "Banco de dados não respondeu a tempo")
    ),
    security(
        (),
        ("api_jwt" = [])
    )
)]
pub async fn get_dashboard_stats(
    State(app_state): State<AppState>,
    Locale(lang): Locale,
    CurrentTenant(tenant_id): CurrentTenant,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    // Período inválido é rejeitado antes de qualquer leitura
    let period = query.reporting_period()?;

    let stats = app_state
        .dashboard_service
        .get_dashboard_stats(tenant_id, period, Utc::now(), lang)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
