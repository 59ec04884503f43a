use sunpath_core::{SolarError, SolarResult};

#[derive(Debug, Clone)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

pub fn parse_iso8601(s: &str) -> SolarResult<ParsedDateTime> {
    let s = s.trim();

    const MAX_ISO8601_LENGTH: usize = 32;
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(SolarError::parse("input too long"));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let separator_pos = s.find('T').or_else(|| s.find(' ')).ok_or_else(|| {
        SolarError::parse(format!(
            "invalid datetime '{}': expected YYYY-MM-DDTHH:MM:SS",
            s
        ))
    })?;

    let (date_part, time_with_sep) = s.split_at(separator_pos);
    let time_part = &time_with_sep[1..];

    let date_fields: Vec<&str> = date_part.split('-').collect();
    if date_fields.len() != 3 {
        return Err(SolarError::parse(format!(
            "invalid date '{}': expected YYYY-MM-DD",
            date_part
        )));
    }

    if date_fields[0].len() != 4 {
        return Err(SolarError::parse(format!(
            "invalid year '{}': expected four digits",
            date_fields[0]
        )));
    }
    let year: i32 = date_fields[0]
        .parse()
        .map_err(|_| SolarError::parse(format!("invalid year '{}'", date_fields[0])))?;

    let month = parse_component(date_fields[1], "month", 1, 12)?;
    let day = parse_component(date_fields[2], "day", 1, 31)?;

    let time_fields: Vec<&str> = time_part.split(':').collect();
    if time_fields.len() < 2 || time_fields.len() > 3 {
        return Err(SolarError::parse(format!(
            "invalid time '{}': expected HH:MM[:SS[.sss]]",
            time_part
        )));
    }

    let hour = parse_component(time_fields[0], "hour", 0, 23)?;
    let minute = parse_component(time_fields[1], "minute", 0, 59)?;

    let second: f64 = if time_fields.len() == 3 {
        let sec = time_fields[2]
            .parse::<f64>()
            .map_err(|_| SolarError::parse(format!("invalid seconds '{}'", time_fields[2])))?;
        if !(0.0..60.0).contains(&sec) {
            return Err(SolarError::parse(format!(
                "seconds {} outside [0, 60)",
                sec
            )));
        }
        sec
    } else {
        0.0
    };

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn parse_component(field: &str, name: &str, min: u8, max: u8) -> SolarResult<u8> {
    let value: u8 = field
        .parse()
        .map_err(|_| SolarError::parse(format!("invalid {} '{}'", name, field)))?;
    if value < min || value > max {
        return Err(SolarError::parse(format!(
            "{} {} outside [{}, {}]",
            name, value, min, max
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_datetime() {
        let parsed = parse_iso8601("2024-03-20T12:08:41.199Z").unwrap();
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.month, 3);
        assert_eq!(parsed.day, 20);
        assert_eq!(parsed.hour, 12);
        assert_eq!(parsed.minute, 8);
        assert!((parsed.second - 41.199).abs() < 1e-9);
    }

    #[test]
    fn test_space_separator_and_no_seconds() {
        let parsed = parse_iso8601("2025-06-21 09:26").unwrap();
        assert_eq!(parsed.hour, 9);
        assert_eq!(parsed.minute, 26);
        assert_eq!(parsed.second, 0.0);
    }

    #[test]
    fn test_malformed_inputs_error() {
        for bad in [
            "",
            "2024-03-20",
            "12:00:00",
            "2024-13-01T00:00:00",
            "2024-03-32T00:00:00",
            "2024-03-20T25:00:00",
            "2024-03-20T12:61:00",
            "2024-03-20T12:00:60",
            "24-03-20T12:00:00",
            "2024-03-20T12:00:00ZZZZZZZZZZZZZZZZZZ",
        ] {
            assert!(parse_iso8601(bad).is_err(), "'{}' should not parse", bad);
        }
    }
}
