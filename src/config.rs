// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use chrono::FixedOffset;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{PgStatsRepository, StatsStore},
    services::{AuthService, DashboardService},
    stats::Language,
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub stats_fetch_timeout: Duration,
    pub reporting_offset: FixedOffset,
    pub default_language: Language,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: {}", value))?,
            None => 5,
        };

        let timeout_secs: u64 = match lookup("STATS_FETCH_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("STATS_FETCH_TIMEOUT_SECS inválido: {}", value))?,
            None => 10,
        };

        let reporting_offset = match lookup("REPORTING_UTC_OFFSET") {
            Some(value) => value
                .parse::<FixedOffset>()
                .map_err(|e| anyhow::anyhow!("REPORTING_UTC_OFFSET inválido ({}): {}", value, e))?,
            None => FixedOffset::east_opt(0).context("offset UTC")?,
        };

        let default_language = match lookup("DEFAULT_LOCALE") {
            Some(value) => value.parse()?,
            None => Language::Es,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            db_max_connections,
            stats_fetch_timeout: Duration::from_secs(timeout_secs),
            reporting_offset,
            default_language,
        })
    }

    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(self.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&self.database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        Ok(db_pool)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub dashboard_service: DashboardService,
    pub default_language: Language,
}

impl AppState {
    pub fn new(settings: &Settings, db_pool: PgPool) -> Self {
        Self::with_store(settings, Arc::new(PgStatsRepository::new(db_pool)))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_store(settings: &Settings, store: Arc<dyn StatsStore>) -> Self {
        let dashboard_service = DashboardService::new(
            store,
            settings.stats_fetch_timeout,
            settings.reporting_offset,
        );
        let auth_service = AuthService::new(settings.jwt_secret.clone());

        Self {
            auth_service,
            dashboard_service,
            default_language: settings.default_language,
        }
    }
}
