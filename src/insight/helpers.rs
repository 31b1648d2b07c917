//! Small shared helpers for the insight core.

use chrono::Local;

/// Wall-clock call time as the fixed-width stamp used in reports.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Round to one decimal place, the display precision for vitals.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parse a `"systolic/diastolic"` reading. None for anything malformed.
pub fn parse_blood_pressure(reading: &str) -> Option<(f64, f64)> {
    let (systolic, diastolic) = reading.split_once('/')?;
    Some((
        systolic.trim().parse().ok()?,
        diastolic.trim().parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_stamp_is_fixed_width() {
        let stamp = now_stamp();
        assert_eq!(stamp.len(), 19);
        assert!(
            chrono::NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S").is_ok(),
            "unparseable stamp: {stamp}"
        );
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(98.64), 98.6);
        assert_eq!(round1(98.65), 98.7);
        assert_eq!(round1(100.0), 100.0);
    }

    #[test]
    fn parse_blood_pressure_valid() {
        assert_eq!(parse_blood_pressure("120/80"), Some((120.0, 80.0)));
        assert_eq!(parse_blood_pressure("135/85"), Some((135.0, 85.0)));
    }

    #[test]
    fn parse_blood_pressure_malformed() {
        assert_eq!(parse_blood_pressure("120"), None);
        assert_eq!(parse_blood_pressure("120/"), None);
        assert_eq!(parse_blood_pressure("high/low"), None);
        assert_eq!(parse_blood_pressure(""), None);
    }
}
