// src/stats/aggregate.rs

use rust_decimal::Decimal;

pub fn aggregate<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().sum()
}

/// Variação percentual entre dois períodos.
///
/// Com `previous == 0` não há base de comparação: sair do zero para qualquer
/// valor positivo conta como 100%, e o resto como 0%.
pub fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }

    (current - previous) / previous * Decimal::ONE_HUNDRED
}
