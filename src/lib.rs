//! Backend do dashboard das agências de locação: receita, eventos e gráfico
//! comparativo por período, escopados por tenant.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod stats;
