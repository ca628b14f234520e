// src/stats/compare.rs

use rust_decimal::Decimal;

use super::buckets::Bucket;
use crate::models::dashboard::ChartPoint;

/// Junta as duas séries pela posição, não pelo significado no calendário.
///
/// O primeiro bucket do período atual é comparado com o primeiro do anterior,
/// seja qual for o dia ou hora que cada um representa. O tamanho da série é o
/// do período atual: buckets anteriores que faltarem valem zero e os que
/// sobrarem são ignorados.
pub fn build_series(current: &[Bucket], previous: &[Bucket]) -> Vec<ChartPoint> {
    current
        .iter()
        .enumerate()
        .map(|(index, bucket)| ChartPoint {
            name: bucket.label.clone(),
            current: bucket.value,
            previous: previous
                .get(index)
                .map(|prev| prev.value)
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}
