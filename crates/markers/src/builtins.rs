//! Built-in marker implementations: date/time, math, text and random.
//!
//! Every built-in is a pure function of its string parameters (plus host
//! wall-clock time where noted) and is total: malformed numeric or date
//! input flows through as `NaN`-style text in the output, never as an error.

use crate::error::MarkerError;
use crate::registry::MarkerRegistry;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Seeds `registry` with the built-in catalog.
pub fn register_builtins(registry: &mut MarkerRegistry) {
    // Date & time
    registry.register("current_year", func_current_year);
    registry.register("current_month", func_current_month);
    registry.register("current_date", func_current_date);
    registry.register("current_time", func_current_time);
    registry.register("timestamp", func_timestamp);
    registry.register("days_since", func_days_since);
    registry.register("days_until", func_days_until);
    registry.register("years_since", func_years_since);
    registry.register("age", func_age);
    registry.register("relative_time", func_relative_time);
    // Math
    registry.register("add", func_add);
    registry.register("subtract", func_subtract);
    registry.register("multiply", func_multiply);
    registry.register("divide", func_divide);
    registry.register("random", func_random);
    // Text
    registry.register("capitalize", func_capitalize);
    registry.register("upper", func_upper);
    registry.register("lower", func_lower);
    registry.register("format_number", func_format_number);
}

// --- Helpers ---

fn first_param(params: &[String]) -> &str {
    params.first().map_or("", String::as_str)
}

fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parses the date formats accepted by the date-taking built-ins:
/// RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD`,
/// `YYYY/MM/DD` and `MM/DD/YYYY`. Date-only inputs resolve to midnight.
fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(input, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Renders a computed number the way a host prints it: integral finite
/// values without a fractional part, everything else via `f64` display
/// (which yields `NaN` and `inf` for the non-finite cases).
fn format_number_plain(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

// --- Date & Time Markers ---

fn func_current_year(_params: &[String]) -> Result<String, MarkerError> {
    Ok(Local::now().format("%Y").to_string())
}

fn func_current_month(_params: &[String]) -> Result<String, MarkerError> {
    Ok(Local::now().format("%B").to_string())
}

fn func_current_date(_params: &[String]) -> Result<String, MarkerError> {
    Ok(Local::now().format("%B %-d, %Y").to_string())
}

fn func_current_time(_params: &[String]) -> Result<String, MarkerError> {
    Ok(Local::now().format("%H:%M:%S").to_string())
}

fn func_timestamp(_params: &[String]) -> Result<String, MarkerError> {
    Ok(Local::now().timestamp_millis().to_string())
}

fn func_days_since(params: &[String]) -> Result<String, MarkerError> {
    let Some(date) = parse_date(first_param(params)) else {
        return Ok("NaN".to_string());
    };
    let diff_ms = (Local::now().naive_local() - date).num_milliseconds() as f64;
    Ok(((diff_ms.abs() / MS_PER_DAY).floor() as i64).to_string())
}

fn func_days_until(params: &[String]) -> Result<String, MarkerError> {
    let Some(date) = parse_date(first_param(params)) else {
        return Ok("NaN".to_string());
    };
    let diff_ms = (date - Local::now().naive_local()).num_milliseconds() as f64;
    Ok(((diff_ms / MS_PER_DAY).ceil() as i64).to_string())
}

fn func_years_since(params: &[String]) -> Result<String, MarkerError> {
    let input = first_param(params).trim();
    // A bare 4-digit input is a year; a dashed date contributes its first
    // segment; anything else goes through full date parsing.
    let target_year = if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        input.parse::<i32>().ok()
    } else if input.split('-').count() >= 3 {
        input.split('-').next().and_then(|y| y.trim().parse::<i32>().ok())
    } else {
        parse_date(input).map(|d| d.year())
    };
    Ok(match target_year {
        // Pure calendar-year subtraction, no day-precision adjustment.
        Some(year) => (Local::now().year() - year).to_string(),
        None => "NaN".to_string(),
    })
}

fn func_age(params: &[String]) -> Result<String, MarkerError> {
    let Some(birth) = parse_date(first_param(params)) else {
        return Ok("NaN".to_string());
    };
    let now = Local::now();
    let mut years = now.year() - birth.year();
    if (now.month(), now.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Ok(years.to_string())
}

fn func_relative_time(params: &[String]) -> Result<String, MarkerError> {
    let Some(date) = parse_date(first_param(params)) else {
        return Ok("NaN".to_string());
    };
    let diff_ms = (date - Local::now().naive_local()).num_milliseconds() as f64;
    let days = (diff_ms / MS_PER_DAY).floor() as i64;

    let phrase = match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 1 => {
            if d < 7 {
                format!("in {}", plural(d, "day"))
            } else if d < 30 {
                format!("in {}", plural(d / 7, "week"))
            } else if d < 365 {
                format!("in {}", plural(d / 30, "month"))
            } else {
                format!("in {}", plural(d / 365, "year"))
            }
        }
        d => {
            let n = -d;
            if n < 7 {
                format!("{} ago", plural(n, "day"))
            } else if n < 30 {
                format!("{} ago", plural(n / 7, "week"))
            } else if n < 365 {
                format!("{} ago", plural(n / 30, "month"))
            } else {
                format!("{} ago", plural(n / 365, "year"))
            }
        }
    };
    Ok(phrase)
}

// --- Math Markers ---

fn func_add(params: &[String]) -> Result<String, MarkerError> {
    let sum: f64 = params.iter().map(|p| parse_number(p)).sum();
    Ok(format_number_plain(sum))
}

fn func_subtract(params: &[String]) -> Result<String, MarkerError> {
    let Some((first, rest)) = params.split_first() else {
        return Ok("0".to_string());
    };
    let result = rest
        .iter()
        .fold(parse_number(first), |acc, p| acc - parse_number(p));
    Ok(format_number_plain(result))
}

fn func_multiply(params: &[String]) -> Result<String, MarkerError> {
    let product: f64 = params.iter().map(|p| parse_number(p)).product();
    Ok(format_number_plain(product))
}

fn func_divide(params: &[String]) -> Result<String, MarkerError> {
    let Some((first, rest)) = params.split_first() else {
        return Ok("0".to_string());
    };
    let result = rest
        .iter()
        .fold(parse_number(first), |acc, p| acc / parse_number(p));
    Ok(format_number_plain(result))
}

fn func_random(params: &[String]) -> Result<String, MarkerError> {
    let min = parse_number(first_param(params));
    let max = parse_number(params.get(1).map_or("", String::as_str));
    if !min.is_finite() || !max.is_finite() {
        return Ok("NaN".to_string());
    }
    let (lo, hi) = (min.floor() as i64, max.floor() as i64);
    // An inverted range cannot be sampled.
    if lo > hi {
        return Ok("NaN".to_string());
    }
    Ok(rand::rng().random_range(lo..=hi).to_string())
}

// --- Text Markers ---

fn func_capitalize(params: &[String]) -> Result<String, MarkerError> {
    let text = first_param(params);
    let mut chars = text.chars();
    Ok(match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    })
}

fn func_upper(params: &[String]) -> Result<String, MarkerError> {
    Ok(first_param(params).to_uppercase())
}

fn func_lower(params: &[String]) -> Result<String, MarkerError> {
    Ok(first_param(params).to_lowercase())
}

fn func_format_number(params: &[String]) -> Result<String, MarkerError> {
    let n = parse_number(first_param(params));
    if !n.is_finite() {
        return Ok(n.to_string());
    }
    let text = format_number_plain(n);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    Ok(match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    })
}
