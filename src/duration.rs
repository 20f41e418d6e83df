/// Format a duration in whole seconds as `H:MM:SS`, or `M:SS` when under an
/// hour. Minutes are only zero padded when an hour component is present, so
/// `90` renders as `1:30` while `3690` renders as `1:01:30`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let remainder = seconds % 3600;
    let minutes = remainder / 60;
    let secs = remainder % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Parse YouTube's ISO 8601 duration format (e.g. `PT1H30M15S`) to whole
/// seconds. Returns `None` for anything that does not start with `PT`.
pub fn parse_iso8601_duration(duration: &str) -> Option<u64> {
    let duration = duration.strip_prefix("PT")?;
    let mut total_seconds = 0u64;

    let mut current_num = String::new();
    for ch in duration.chars() {
        if ch.is_ascii_digit() {
            current_num.push(ch);
        } else {
            if let Ok(num) = current_num.parse::<u64>() {
                match ch {
                    'H' => total_seconds += num * 3600,
                    'M' => total_seconds += num * 60,
                    'S' => total_seconds += num,
                    _ => return None,
                }
            }
            current_num.clear();
        }
    }

    Some(total_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_under_a_minute() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(3599), "59:59");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3661), "1:01:01");
    }

    #[test]
    fn test_format_duration_minutes_not_padded_without_hours() {
        assert_eq!(format_duration(90), "1:30");
        assert_eq!(format_duration(3690), "1:01:30");
    }

    #[test]
    fn test_parse_iso8601_duration() {
        assert_eq!(parse_iso8601_duration("PT15M33S"), Some(933));
        assert_eq!(parse_iso8601_duration("PT1H30M15S"), Some(5415));
        assert_eq!(parse_iso8601_duration("PT45S"), Some(45));
        assert_eq!(parse_iso8601_duration("PT2H"), Some(7200));
        assert_eq!(parse_iso8601_duration("PT30M"), Some(1800));
        assert_eq!(parse_iso8601_duration("PT0S"), Some(0));
    }

    #[test]
    fn test_parse_iso8601_duration_invalid() {
        assert_eq!(parse_iso8601_duration("INVALID"), None);
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("P1DT2H"), None);
    }
}
