//! Date and time formatting in pt-BR

use chrono::{DateTime, NaiveDate, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}

/// Human distance between two instants, without direction
/// Example: 180 seconds -> "3 minutos"
pub fn format_distance(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = (to - from).num_seconds().abs();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 1 {
        return "menos de um minuto".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "1 minuto", "{} minutos");
    }
    if minutes < 90 {
        return "cerca de 1 hora".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        return plural(hours, "cerca de 1 hora", "cerca de {} horas");
    }
    if minutes < 2520 {
        return "1 dia".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        return plural(days, "1 dia", "{} dias");
    }
    if minutes < 2 * MINUTES_IN_MONTH {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        return plural(months, "cerca de 1 mês", "cerca de {} meses");
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return plural(months, "1 mês", "{} meses");
    }
    let years = months / 12;
    match months % 12 {
        0..=2 => plural(years, "cerca de 1 ano", "cerca de {} anos"),
        3..=8 => plural(years, "mais de 1 ano", "mais de {} anos"),
        _ => plural(years + 1, "quase 1 ano", "quase {} anos"),
    }
}

/// Relative time with suffix
/// Example: three minutes ago -> "há 3 minutos"
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let distance = format_distance(at, now);
    if at > now {
        format!("em {}", distance)
    } else {
        format!("há {}", distance)
    }
}

/// Relative to the current clock
pub fn format_relative_now(at: DateTime<Utc>) -> String {
    format_relative(at, Utc::now())
}

/// Format date to DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format ISO date string to DD/MM, used on chart axes
/// Example: "2024-03-15" -> "15/03"
pub fn format_day_month(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-15T14:02:26Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ago(d: Duration) -> String {
        format_relative(now() - d, now())
    }

    #[test]
    fn test_minutes() {
        assert_eq!(ago(Duration::seconds(10)), "há menos de um minuto");
        assert_eq!(ago(Duration::seconds(70)), "há 1 minuto");
        assert_eq!(ago(Duration::minutes(3)), "há 3 minutos");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(ago(Duration::minutes(60)), "há cerca de 1 hora");
        assert_eq!(ago(Duration::hours(5)), "há cerca de 5 horas");
        assert_eq!(ago(Duration::hours(30)), "há 1 dia");
        assert_eq!(ago(Duration::days(4)), "há 4 dias");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(ago(Duration::days(40)), "há cerca de 1 mês");
        assert_eq!(ago(Duration::days(100)), "há 3 meses");
        assert_eq!(ago(Duration::days(370)), "há cerca de 1 ano");
        assert_eq!(ago(Duration::days(550)), "há mais de 1 ano");
        assert_eq!(ago(Duration::days(700)), "há quase 2 anos");
    }

    #[test]
    fn test_future_uses_em() {
        assert_eq!(format_relative(now() + Duration::minutes(3), now()), "em 3 minutos");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2024");
        assert_eq!(format_day_month("2024-03-15"), "15/03");
        assert_eq!(format_day_month("invalid"), "invalid");
    }
}
