//! pt-BR display formatting for money, counts and period deltas

/// Colour of a delta indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTone {
    Positive,
    Negative,
}

impl DeltaTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            DeltaTone::Positive => "metric-delta metric-delta--positive",
            DeltaTone::Negative => "metric-delta metric-delta--negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaDisplay {
    pub text: String,
    pub tone: DeltaTone,
}

/// Groups digits with `.` every 3 positions: 1234567 -> "1.234.567"
fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats an amount in cents as Brazilian reais: 123456 -> "R$ 1.234,56"
pub fn format_brl_cents(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(abs / 100), abs % 100)
}

/// Same as [`format_brl_cents`] for an amount already in reais
pub fn format_brl(value: f64) -> String {
    format_brl_cents((value * 100.0).round() as i64)
}

/// Integer count with pt-BR grouping
pub fn format_count(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(n.unsigned_abs()))
}

/// Percentage delta versus the previous period. Non-negative deltas get a
/// leading `+`, negative ones keep their own sign.
pub fn format_delta(delta: f64) -> DeltaDisplay {
    let rounded = (delta * 100.0).round() / 100.0;
    // -0.0 would otherwise print as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let number = format!("{}", rounded).replace('.', ",");

    if rounded >= 0.0 {
        DeltaDisplay {
            text: format!("+{}%", number),
            tone: DeltaTone::Positive,
        }
    } else {
        DeltaDisplay {
            text: format!("{}%", number),
            tone: DeltaTone::Negative,
        }
    }
}
