//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use rental_dashboard::{
    config::{AppState, Settings},
    router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let settings = Settings::from_env()?;
    let db_pool = settings.connect().await?;

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!().run(&db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app_state = AppState::new(&settings, db_pool);
    let app = router::create_router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!(
        "🚀 Servidor escutando em {} (fuso de relatório {}, idioma padrão {})",
        listener.local_addr()?,
        settings.reporting_offset,
        settings.default_language.as_str()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
