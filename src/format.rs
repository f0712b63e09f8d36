use crate::config::Locale;
use crate::models::DelinquencyReport;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn format_with_separator(value: u64, separator: char) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(separator);
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `Bs. 1,234,567`. A missing or non-finite amount formats as zero; at most
/// two fraction digits are shown, without trailing zeros.
pub fn format_currency(amount: Option<f64>, symbol: &str, locale: Locale) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    let whole = format_with_separator(cents / 100, locale.thousands_separator());
    let fraction = cents % 100;
    let digits = if fraction == 0 {
        whole
    } else if fraction % 10 == 0 {
        format!("{}{}{}", whole, locale.decimal_separator(), fraction / 10)
    } else {
        format!("{}{}{:02}", whole, locale.decimal_separator(), fraction)
    };

    format!("{}{} {}", sign, symbol, digits)
}

pub fn format_count(count: Option<u64>, locale: Locale) -> String {
    format_with_separator(count.unwrap_or(0), locale.thousands_separator())
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // the day as written, not shifted into the viewer's zone
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Calendar date only. Input that is not a recognizable timestamp is shown as-is.
pub fn format_date(timestamp: &str, locale: Locale) -> String {
    match parse_calendar_date(timestamp) {
        Some(date) => date.format(locale.date_pattern()).to_string(),
        None => timestamp.to_string(),
    }
}

pub fn summary_line(report: &DelinquencyReport, symbol: &str, locale: Locale) -> String {
    format!(
        "Al día: {}, En Observación: {}, Morosos: {}, Deuda Total: {}",
        format_count(report.resumen.al_dia, locale),
        format_count(report.resumen.en_observacion, locale),
        format_count(report.resumen.morosos, locale),
        format_currency(report.total_deuda_general, symbol, locale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(
            format_currency(Some(1234567.0), "Bs.", Locale::EnUs),
            "Bs. 1,234,567"
        );
        assert_eq!(format_currency(Some(999.0), "Bs.", Locale::EnUs), "Bs. 999");
        assert_eq!(
            format_currency(Some(1234567.0), "Bs.", Locale::EsBo),
            "Bs. 1.234.567"
        );
    }

    #[test]
    fn missing_amount_is_zero() {
        assert_eq!(
            format_currency(None, "Bs.", Locale::EnUs),
            format_currency(Some(0.0), "Bs.", Locale::EnUs)
        );
        assert_eq!(format_currency(None, "Bs.", Locale::EnUs), "Bs. 0");
        assert_eq!(format_currency(Some(f64::NAN), "Bs.", Locale::EnUs), "Bs. 0");
    }

    #[test]
    fn keeps_up_to_two_fraction_digits() {
        assert_eq!(format_currency(Some(500.5), "Bs.", Locale::EnUs), "Bs. 500.5");
        assert_eq!(format_currency(Some(1500.25), "Bs.", Locale::EnUs), "Bs. 1,500.25");
        assert_eq!(format_currency(Some(1500.25), "Bs.", Locale::EsBo), "Bs. 1.500,25");
        assert_eq!(format_currency(Some(10.004), "Bs.", Locale::EnUs), "Bs. 10");
    }

    #[test]
    fn negative_amounts_carry_a_sign() {
        assert_eq!(format_currency(Some(-2500.0), "Bs.", Locale::EnUs), "-Bs. 2,500");
        assert_eq!(format_currency(Some(-0.001), "Bs.", Locale::EnUs), "Bs. 0");
    }

    #[test]
    fn formats_calendar_date_per_locale() {
        assert_eq!(format_date("2024-03-05T00:00:00Z", Locale::EnUs), "3/5/2024");
        assert_eq!(format_date("2024-03-05T00:00:00Z", Locale::EsBo), "05/03/2024");
    }

    #[test]
    fn accepts_offsets_and_naive_timestamps() {
        assert_eq!(format_date("2024-03-05T23:30:00-04:00", Locale::EsBo), "05/03/2024");
        assert_eq!(format_date("2024-03-05T08:15:00", Locale::EsBo), "05/03/2024");
        assert_eq!(format_date("2024-03-05", Locale::EsBo), "05/03/2024");
    }

    #[test]
    fn unparseable_date_is_returned_unchanged() {
        assert_eq!(format_date("pendiente", Locale::EnUs), "pendiente");
    }

    #[test]
    fn zeroed_report_summary() {
        let report = DelinquencyReport::default();
        assert_eq!(
            summary_line(&report, "Bs.", Locale::EnUs),
            "Al día: 0, En Observación: 0, Morosos: 0, Deuda Total: Bs. 0"
        );
    }
}
