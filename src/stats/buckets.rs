// src/stats/buckets.rs

use std::collections::HashMap;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Months, NaiveDateTime, NaiveTime, Timelike, Utc,
};
use rust_decimal::Decimal;

use super::{
    labels::{slot_label, Language},
    period::{utc_to_local, Interval, ReportingPeriod},
};
use crate::common::error::AppError;

/// Largura de cada fatia do gráfico.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotUnit {
    Hour,
    Day,
    Month,
}

impl SlotUnit {
    pub fn for_period(period: ReportingPeriod) -> Self {
        match period {
            ReportingPeriod::Daily => SlotUnit::Hour,
            ReportingPeriod::Weekly | ReportingPeriod::Monthly => SlotUnit::Day,
            ReportingPeriod::Yearly => SlotUnit::Month,
        }
    }

    /// Início do slot que contém `local`.
    pub fn truncate(&self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        let midnight = local.date().and_time(NaiveTime::MIN);
        match self {
            SlotUnit::Hour => midnight.with_hour(local.hour()),
            SlotUnit::Day => Some(midnight),
            SlotUnit::Month => midnight.with_day(1),
        }
    }

    fn next(&self, slot: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            SlotUnit::Hour => slot.checked_add_signed(Duration::hours(1)),
            SlotUnit::Day => slot.checked_add_signed(Duration::days(1)),
            SlotUnit::Month => slot.checked_add_months(Months::new(1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Início do slot no relógio local; é a chave do bucket.
    pub slot: NaiveDateTime,
    pub label: String,
    pub value: Decimal,
}

/// Chave do slot de um instante, no fuso de relatório.
pub fn slot_key(instant: DateTime<Utc>, unit: SlotUnit, tz: FixedOffset) -> Option<NaiveDateTime> {
    unit.truncate(utc_to_local(instant, tz))
}

/// Um bucket zerado por slot de `[start, end)`, em ordem cronológica.
pub fn empty_buckets(
    interval: &Interval,
    period: ReportingPeriod,
    tz: FixedOffset,
    lang: Language,
) -> Result<Vec<Bucket>, AppError> {
    let unit = SlotUnit::for_period(period);
    let end = utc_to_local(interval.end, tz);
    let out_of_range = || {
        AppError::InternalServerError(anyhow::anyhow!(
            "Falha ao gerar os slots {} de {} a {}",
            period.as_str(),
            interval.start,
            interval.end
        ))
    };

    let mut buckets = Vec::new();
    let mut slot = unit
        .truncate(utc_to_local(interval.start, tz))
        .ok_or_else(out_of_range)?;
    while slot < end {
        buckets.push(Bucket {
            slot,
            label: slot_label(slot, period, lang),
            value: Decimal::ZERO,
        });
        slot = unit.next(slot).ok_or_else(out_of_range)?;
    }
    Ok(buckets)
}

/// Distribui `(instante, valor)` nos buckets do intervalo.
///
/// Registros cujo slot não existe no intervalo são descartados.
pub fn bucketize<I>(
    records: I,
    interval: &Interval,
    period: ReportingPeriod,
    tz: FixedOffset,
    lang: Language,
) -> Result<Vec<Bucket>, AppError>
where
    I: IntoIterator<Item = (DateTime<Utc>, Decimal)>,
{
    let unit = SlotUnit::for_period(period);
    let mut buckets = empty_buckets(interval, period, tz, lang)?;
    let positions: HashMap<NaiveDateTime, usize> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| (bucket.slot, index))
        .collect();

    let mut dropped = 0usize;
    for (instant, value) in records {
        let position = slot_key(instant, unit, tz).and_then(|key| positions.get(&key));
        match position {
            Some(&index) => buckets[index].value += value,
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(
            dropped,
            period = period.as_str(),
            start = %interval.start,
            end = %interval.end,
            "Registros fora dos slots do período foram descartados"
        );
    }

    Ok(buckets)
}
