// src/stats/period.rs

use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Days, Duration, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime,
    Utc, Weekday,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::error::AppError;

/// Seletor de período do dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ReportingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportingPeriod::Daily => "daily",
            ReportingPeriod::Weekly => "weekly",
            ReportingPeriod::Monthly => "monthly",
            ReportingPeriod::Yearly => "yearly",
        }
    }
}

impl FromStr for ReportingPeriod {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(ReportingPeriod::Daily),
            "weekly" => Ok(ReportingPeriod::Weekly),
            "monthly" => Ok(ReportingPeriod::Monthly),
            "yearly" => Ok(ReportingPeriod::Yearly),
            _ => Err(AppError::InvalidPeriod(value.to_string())),
        }
    }
}

/// Menor unidade de tempo do banco (timestamptz guarda microssegundos).
pub fn tick() -> Duration {
    Duration::microseconds(1)
}

/// Intervalo semiaberto `[start, end)` em UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Período imediatamente anterior, com a mesma duração em tempo decorrido.
    ///
    /// Termina exatamente onde este começa. Em meses de tamanhos diferentes o
    /// período anterior não coincide com o mês civil anterior.
    pub fn previous(&self) -> Interval {
        Interval {
            start: self.start - self.duration(),
            end: self.start,
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn last_instant(&self) -> DateTime<Utc> {
        self.end - tick()
    }

    /// Recorta o início para `max(start, from)`. `None` se nada sobrar.
    pub fn starting_no_earlier_than(&self, from: DateTime<Utc>) -> Option<Interval> {
        let start = self.start.max(from);
        (start < self.end).then_some(Interval { start, end: self.end })
    }
}

/// Converte o seletor em `[start, end)` no relógio local do fuso de relatório.
pub fn resolve_period(
    period: ReportingPeriod,
    now: DateTime<Utc>,
    tz: FixedOffset,
) -> Result<Interval, AppError> {
    fn inner(period: ReportingPeriod, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match period {
            ReportingPeriod::Daily => Some((today, today.checked_add_days(Days::new(1))?)),
            ReportingPeriod::Weekly => {
                // Semanas começam na segunda-feira
                let monday = today.week(Weekday::Mon).first_day();
                Some((monday, monday.checked_add_days(Days::new(7))?))
            }
            ReportingPeriod::Monthly => {
                let first = today.with_day(1)?;
                Some((first, first.checked_add_months(Months::new(1))?))
            }
            ReportingPeriod::Yearly => {
                let first = today.with_ordinal(1)?;
                Some((first, first.checked_add_months(Months::new(12))?))
            }
        }
    }

    let today = now.with_timezone(&tz).date_naive();
    let (first_day, next_first_day) = inner(period, today).ok_or_else(|| {
        AppError::InternalServerError(anyhow::anyhow!(
            "Falha ao calcular o período {} para {}",
            period.as_str(),
            today
        ))
    })?;

    Ok(Interval {
        start: local_to_utc(first_day.and_time(NaiveTime::MIN), tz),
        end: local_to_utc(next_first_day.and_time(NaiveTime::MIN), tz),
    })
}

pub(crate) fn local_to_utc(local: NaiveDateTime, tz: FixedOffset) -> DateTime<Utc> {
    (local - Duration::seconds(i64::from(tz.local_minus_utc()))).and_utc()
}

pub(crate) fn utc_to_local(instant: DateTime<Utc>, tz: FixedOffset) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn resolve(period: ReportingPeriod, now: DateTime<Utc>) -> Interval {
        resolve_period(period, now, utc()).unwrap()
    }

    #[test]
    fn parses_selectors_case_insensitively() {
        assert_eq!("daily".parse::<ReportingPeriod>().unwrap(), ReportingPeriod::Daily);
        assert_eq!(" Weekly ".parse::<ReportingPeriod>().unwrap(), ReportingPeriod::Weekly);
        assert_eq!("MONTHLY".parse::<ReportingPeriod>().unwrap(), ReportingPeriod::Monthly);
        assert_eq!("yearly".parse::<ReportingPeriod>().unwrap(), ReportingPeriod::Yearly);
        assert!(matches!(
            "hourly".parse::<ReportingPeriod>(),
            Err(AppError::InvalidPeriod(value)) if value == "hourly"
        ));
    }

    #[test]
    fn daily_covers_the_calendar_day() {
        let interval = resolve(ReportingPeriod::Daily, at(2026, 10, 19, 15, 30));
        assert_eq!(interval.start, at(2026, 10, 19, 0, 0));
        assert_eq!(interval.end, at(2026, 10, 20, 0, 0));
    }

    #[test]
    fn weekly_starts_on_monday() {
        // 2026-10-22 é uma quinta-feira
        let interval = resolve(ReportingPeriod::Weekly, at(2026, 10, 22, 9, 0));
        assert_eq!(interval.start, at(2026, 10, 19, 0, 0));
        assert_eq!(interval.start.weekday(), Weekday::Mon);
        assert_eq!(interval.end, at(2026, 10, 26, 0, 0));

        // No próprio domingo ainda pertence à semana que começou seis dias antes
        let sunday = resolve(ReportingPeriod::Weekly, at(2026, 10, 25, 23, 59));
        assert_eq!(sunday.start, at(2026, 10, 19, 0, 0));

        let monday = resolve(ReportingPeriod::Weekly, at(2026, 10, 19, 0, 0));
        assert_eq!(monday.start, at(2026, 10, 19, 0, 0));
    }

    #[test]
    fn monthly_spans_to_first_of_next_month() {
        let interval = resolve(ReportingPeriod::Monthly, at(2026, 12, 31, 23, 0));
        assert_eq!(interval.start, at(2026, 12, 1, 0, 0));
        assert_eq!(interval.end, at(2027, 1, 1, 0, 0));

        let leap_february = resolve(ReportingPeriod::Monthly, at(2028, 2, 10, 0, 0));
        assert_eq!(leap_february.end, at(2028, 3, 1, 0, 0));
        assert_eq!(leap_february.duration(), Duration::days(29));
    }

    #[test]
    fn yearly_spans_whole_year() {
        let interval = resolve(ReportingPeriod::Yearly, at(2024, 7, 4, 12, 0));
        assert_eq!(interval.start, at(2024, 1, 1, 0, 0));
        assert_eq!(interval.end, at(2025, 1, 1, 0, 0));
        assert_eq!(interval.duration(), Duration::days(366));
    }

    #[test]
    fn resolves_on_the_reporting_timezone_wall_clock() {
        let mexico = FixedOffset::west_opt(6 * 3600).unwrap();
        // 03:00 UTC do dia 20 ainda é dia 19 às 21:00 no fuso -06:00
        let interval =
            resolve_period(ReportingPeriod::Daily, at(2026, 10, 20, 3, 0), mexico).unwrap();
        assert_eq!(interval.start, at(2026, 10, 19, 6, 0));
        assert_eq!(interval.end, at(2026, 10, 20, 6, 0));
    }

    #[test]
    fn previous_interval_is_contiguous_and_equal_length() {
        let now = at(2026, 3, 15, 10, 0);
        for period in [
            ReportingPeriod::Daily,
            ReportingPeriod::Weekly,
            ReportingPeriod::Monthly,
            ReportingPeriod::Yearly,
        ] {
            let current = resolve(period, now);
            let previous = current.previous();
            assert!(current.end > current.start, "{:?}", period);
            assert_eq!(previous.end, current.start, "{:?}", period);
            assert_eq!(previous.duration(), current.duration(), "{:?}", period);
            assert_eq!(previous.last_instant() + tick(), current.start);
        }
    }

    #[test]
    fn previous_month_is_measured_in_elapsed_time() {
        // Março tem 31 dias, então o "mês anterior" começa em 29/01
        let march = resolve(ReportingPeriod::Monthly, at(2026, 3, 15, 0, 0));
        assert_eq!(march.previous().start, at(2026, 1, 29, 0, 0));

        let august = resolve(ReportingPeriod::Monthly, at(2026, 8, 15, 0, 0));
        assert_eq!(august.previous().start, at(2026, 7, 1, 0, 0));
    }

    #[test]
    fn half_open_bounds() {
        let interval = resolve(ReportingPeriod::Daily, at(2026, 10, 19, 8, 0));
        assert!(interval.contains(interval.start));
        assert!(interval.contains(interval.last_instant()));
        assert!(!interval.contains(interval.end));
    }

    #[test]
    fn clamps_start_to_a_later_instant() {
        let interval = resolve(ReportingPeriod::Daily, at(2026, 10, 19, 8, 0));

        let clamped = interval.starting_no_earlier_than(at(2026, 10, 19, 8, 0)).unwrap();
        assert_eq!(clamped.start, at(2026, 10, 19, 8, 0));
        assert_eq!(clamped.end, interval.end);

        let untouched = interval.starting_no_earlier_than(at(2026, 10, 1, 0, 0)).unwrap();
        assert_eq!(untouched, interval);

        assert!(interval.starting_no_earlier_than(interval.end).is_none());
    }

    #[test]
    fn monthly_length_follows_the_calendar() {
        let cases = [(2026, 2, 28), (2028, 2, 29), (2100, 2, 28), (2000, 2, 29), (2026, 9, 30)];
        for (y, m, days) in cases {
            let interval = resolve(ReportingPeriod::Monthly, at(y, m, 10, 0, 0));
            assert_eq!(interval.duration(), Duration::days(days), "{}-{}", y, m);
        }

        let common_year = resolve(ReportingPeriod::Yearly, at(2100, 6, 1, 0, 0));
        assert_eq!(common_year.duration(), Duration::days(365));
    }

    #[test]
    fn now_always_falls_inside_its_period() {
        let offsets = [-12 * 3600, -3 * 3600, 0, 5 * 3600 + 1800, 14 * 3600];
        let instants = [
            at(2025, 12, 31, 23, 59),
            at(2026, 1, 1, 0, 0),
            at(2024, 2, 29, 12, 0),
            at(2025, 3, 1, 0, 0),
        ];
        for seconds in offsets {
            let tz = FixedOffset::east_opt(seconds).unwrap();
            for now in instants {
                for period in [
                    ReportingPeriod::Daily,
                    ReportingPeriod::Weekly,
                    ReportingPeriod::Monthly,
                    ReportingPeriod::Yearly,
                ] {
                    let interval = resolve_period(period, now, tz).unwrap();
                    assert!(interval.contains(now), "{:?} {} {}", period, now, tz);
                }
            }
        }
    }
}
