// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Período inválido: '{0}'")]
    InvalidPeriod(String),

    #[error("Token inválido")]
    InvalidToken,

    // Uma das leituras do dashboard estourou o tempo limite
    #[error("Tempo esgotado na leitura '{0}'")]
    StoreTimeout(&'static str),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::StoreTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_message = match &self {
            AppError::InvalidPeriod(value) => format!(
                "Período '{}' inválido. Use daily, weekly, monthly ou yearly.",
                value
            ),
            AppError::InvalidToken => "Token de autenticação inválido ou ausente.".to_string(),
            AppError::StoreTimeout(_) => {
                tracing::error!("Erro Interno do Servidor: {}", self);
                "O banco de dados demorou demais para responder.".to_string()
            }
            // DatabaseError e InternalServerError viram 500.
            // O `tracing` loga a mensagem detalhada, o cliente recebe uma genérica.
            e => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                "Ocorreu um erro inesperado.".to_string()
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
