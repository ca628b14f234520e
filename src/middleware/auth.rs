// src/middleware/auth.rs

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::config::AppState;

/// Tenant do usuário autenticado, se houver.
///
/// Nunca rejeita a requisição: sem cabeçalho `Authorization` ou com token
/// inválido o resultado é `None`, e o dashboard responde com o estado vazio.
#[derive(Debug, Clone, Copy)]
pub struct CurrentTenant(pub Option<Uuid>);

impl<S> FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Ok(CurrentTenant(None));
        };

        let app_state = AppState::from_ref(state);
        let tenant_id = app_state.auth_service.validate_token(bearer.token()).ok();

        Ok(CurrentTenant(tenant_id))
    }
}
