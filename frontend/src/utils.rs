/// Parses a headcount typed into a number field.
///
/// Blank or unparseable input counts as 0, like a browser's numeric
/// coercion of an empty field. Fractions are rounded to the nearest person.
pub fn parse_headcount(raw: &str) -> u32 {
    match parse_non_negative(raw) {
        Some(value) if value >= u32::MAX as f64 => u32::MAX,
        Some(value) => value.round() as u32,
        None => 0,
    }
}

/// Parses an hourly wage typed into a number field. Blank, negative or
/// unparseable input counts as 0.
pub fn parse_hourly_wage(raw: &str) -> f64 {
    parse_non_negative(raw).unwrap_or(0.0)
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        Ok(_) => None,
        Err(e) => {
            log::debug!("ignoring non-numeric input {:?}: {}", raw, e);
            None
        }
    }
}

/// Formats a whole-euro amount with `.` thousands separators, e.g. `€163.800`.
pub fn format_euro(amount: f64) -> String {
    format!("€{}", group_thousands(amount))
}

pub fn format_hours(hours: f64) -> String {
    format!("{}h", group_thousands(hours))
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
