// src/models/records.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invoice_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    Quote,    // Cotização
    SaleNote, // Nota de venda (cotização confirmada)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invoice_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Completed,
    Cancelled,
}

// Só notas de venda concluídas contam como receita.
pub const REVENUE_INVOICE_TYPE: InvoiceType = InvoiceType::SaleNote;
pub const REVENUE_INVOICE_STATUS: InvoiceStatus = InvoiceStatus::Completed;

impl InvoiceType {
    pub fn is_revenue(&self, status: InvoiceStatus) -> bool {
        *self == REVENUE_INVOICE_TYPE && status == REVENUE_INVOICE_STATUS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

// --- Linhas lidas pelo dashboard ---

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RevenueRecord {
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}
