// src/stats/labels.rs

use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::period::ReportingPeriod;

/// Idiomas suportados nos rótulos do gráfico.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Es,
    En,
    Pt,
}

impl Language {
    /// Aceita uma tag BCP 47 ("pt-BR", "es", "en-US") e olha só o idioma primário.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::from_tag(value).ok_or_else(|| anyhow::anyhow!("Idioma não suportado: {}", value))
    }
}

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

const WEEKDAYS_ES: [&str; 7] = ["LUN", "MAR", "MIÉ", "JUE", "VIE", "SÁB", "DOM"];
const WEEKDAYS_EN: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
const WEEKDAYS_PT: [&str; 7] = ["SEG", "TER", "QUA", "QUI", "SEX", "SÁB", "DOM"];

fn month_abbr(month0: u32, lang: Language) -> &'static str {
    let table = match lang {
        Language::Es => &MONTHS_ES,
        Language::En => &MONTHS_EN,
        Language::Pt => &MONTHS_PT,
    };
    table[month0 as usize % 12]
}

fn weekday_abbr(days_from_monday: u32, lang: Language) -> &'static str {
    let table = match lang {
        Language::Es => &WEEKDAYS_ES,
        Language::En => &WEEKDAYS_EN,
        Language::Pt => &WEEKDAYS_PT,
    };
    table[days_from_monday as usize % 7]
}

/// Rótulo de exibição de um slot (hora, dia ou mês, conforme o período).
pub fn slot_label(slot: NaiveDateTime, period: ReportingPeriod, lang: Language) -> String {
    match period {
        ReportingPeriod::Daily => match lang {
            Language::En => slot.format("%I:%M %p").to_string(),
            Language::Es | Language::Pt => format!("{:02}:{:02}", slot.hour(), slot.minute()),
        },
        ReportingPeriod::Weekly => {
            weekday_abbr(slot.weekday().num_days_from_monday(), lang).to_string()
        }
        ReportingPeriod::Monthly => {
            format!("{:02} {}", slot.day(), month_abbr(slot.month0(), lang))
        }
        ReportingPeriod::Yearly => month_abbr(slot.month0(), lang).to_uppercase(),
    }
}
