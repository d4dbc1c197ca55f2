use crate::models::CellValue;
use crate::parsing::SECS_PER_DAY;

/// Parse a call length into whole seconds.
///
/// Numbers (and numeric text without a colon) are fractions of a day.
/// Clock text is `HH:MM:SS` or `MM:SS`. Negative values are passed through.
/// A numeric zero counts as an empty cell; the text `"0"` is a zero-length call.
pub fn parse_duration(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Number(days) if *days == 0.0 => None,
        CellValue::Number(days) => fraction_of_day(*days),
        CellValue::Text(text) => parse_duration_text(text),
        CellValue::Empty | CellValue::Bool(_) | CellValue::DateTime(_) => None,
    }
}

fn parse_duration_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if !text.contains(':') {
        return text.parse::<f64>().ok().and_then(fraction_of_day);
    }

    let parts: Vec<&str> = text.split(':').collect();
    match parts.as_slice() {
        [hours, minutes, seconds] => {
            let total = clock_part(hours)?
                .checked_mul(3600)?
                .checked_add(clock_part(minutes)?.checked_mul(60)?)?;
            total.checked_add(clock_part(seconds)?)
        }
        [minutes, seconds] => clock_part(minutes)?
            .checked_mul(60)?
            .checked_add(clock_part(seconds)?),
        _ => None,
    }
}

fn fraction_of_day(days: f64) -> Option<i64> {
    if !days.is_finite() {
        return None;
    }
    let secs = (days * SECS_PER_DAY).round();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    Some(secs as i64)
}

/// One `:`-separated field. Fractional seconds (`05.7`) are truncated.
fn clock_part(part: &str) -> Option<i64> {
    let part = part.trim();
    if let Ok(whole) = part.parse::<i64>() {
        return Some(whole);
    }
    let value = part.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}
