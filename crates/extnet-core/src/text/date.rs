//! Date validation against chrono layouts.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::FormatError;

/// Layouts tried by [`is_date`] after RFC 3339 and RFC 2822.
const COMMON_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d.%m.%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%b %d, %Y",
];

/// W3C date-time profile with time, after `Z` has been rewritten to `+00:00`.
const W3C_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
];

/// Lenient check: RFC 3339, RFC 2822 or a common calendar layout.
pub fn is_date(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_rfc2822(value).is_ok()
        || COMMON_LAYOUTS.iter().any(|layout| parses_with(value, layout))
}

/// True if `value` parses under any of `formats` (chrono strftime syntax).
///
/// Each layout is tried as a date-time with offset, a naive date-time and a
/// naive date. An empty list is an invalid argument.
pub fn is_date_with_formats<S: AsRef<str>>(value: &str, formats: &[S]) -> Result<bool, FormatError> {
    if formats.is_empty() {
        return Err(FormatError::invalid("formats", "no date formats given"));
    }
    Ok(formats
        .iter()
        .any(|layout| parses_with(value, layout.as_ref())))
}

/// W3C date-time check: `YYYY-MM-DD` or `YYYY-MM-DDThh:mm[:ss[.s]]TZD`.
pub fn is_w3c_date(value: &str) -> bool {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return true;
    }
    let value = match value.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => value.to_string(),
    };
    W3C_TIME_LAYOUTS
        .iter()
        .any(|layout| DateTime::parse_from_str(&value, layout).is_ok())
}

fn parses_with(value: &str, layout: &str) -> bool {
    DateTime::parse_from_str(value, layout).is_ok()
        || NaiveDateTime::parse_from_str(value, layout).is_ok()
        || NaiveDate::parse_from_str(value, layout).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_accepts_common_shapes() {
        assert!(is_date("2024-03-09"));
        assert!(is_date("2024-03-09 14:13:26"));
        assert!(is_date("2014-09-03T14:13:26+01:00"));
        assert!(is_date("Tue, 1 Jul 2003 10:52:37 +0200"));
        assert!(is_date("09/03/2014"));
        assert!(is_date("3 September 2014"));
    }

    #[test]
    fn lenient_rejects() {
        assert!(!is_date(""));
        assert!(!is_date("   "));
        assert!(!is_date("yesterday"));
        assert!(!is_date("2024-02-30"));
    }

    #[test]
    fn explicit_formats() {
        assert_eq!(is_date_with_formats("2024-03-09", &["%Y-%m-%d"]), Ok(true));
        assert_eq!(is_date_with_formats("09.03.2024", &["%Y-%m-%d"]), Ok(false));
        assert_eq!(
            is_date_with_formats("09.03.2024", &["%Y-%m-%d", "%d.%m.%Y"]),
            Ok(true)
        );
        assert_eq!(
            is_date_with_formats("2024-03-09 10:00", &["%Y-%m-%d %H:%M"]),
            Ok(true)
        );
        assert_eq!(
            is_date_with_formats("2024-03-09 10:00 +0100", &["%Y-%m-%d %H:%M %z"]),
            Ok(true)
        );
    }

    #[test]
    fn explicit_formats_empty_list() {
        let none: [&str; 0] = [];
        assert!(matches!(
            is_date_with_formats("2024-03-09", &none),
            Err(FormatError::InvalidArgument { name: "formats", .. })
        ));
    }

    #[test]
    fn w3c_profile() {
        assert!(is_w3c_date("1997-07-16"));
        assert!(is_w3c_date("1997-07-16T19:20+01:00"));
        assert!(is_w3c_date("1997-07-16T19:20:30+01:00"));
        assert!(is_w3c_date("1997-07-16T19:20:30.45+01:00"));
        assert!(is_w3c_date("1997-07-16T19:20:30Z"));
        assert!(is_w3c_date("1997-07-16T19:20Z"));
    }

    #[test]
    fn w3c_rejects() {
        assert!(!is_w3c_date("1997-07-16T19:20:30"));
        assert!(!is_w3c_date("16/07/1997"));
        assert!(!is_w3c_date("1997-07-16 19:20:30+01:00"));
        assert!(!is_w3c_date(""));
    }
}
