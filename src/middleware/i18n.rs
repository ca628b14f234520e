// src/middleware/i18n.rs

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};

use crate::{config::AppState, stats::Language};

// Extrator de idioma para os rótulos do gráfico
pub struct Locale(pub Language);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let default_lang = AppState::from_ref(state).default_language;

        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                // Já vem ordenado pela qualidade (q=); pega o primeiro que suportamos
                accept_language::parse(header_str)
                    .iter()
                    .find_map(|tag| Language::from_tag(tag))
            })
            .unwrap_or(default_lang);

        Ok(Locale(lang))
    }
}
