use chrono::{DateTime, Utc};

/// Key that ties votes to one fixture: `{team}-{opponent}-{YYYY-MM-DD}`.
///
/// The date part is the UTC calendar day of the kickoff, so the same fixture
/// always yields the same identifier no matter when or where it is computed.
pub fn generate_match_id(team_code: &str, opponent_code: &str, kickoff: &DateTime<Utc>) -> String {
    format!(
        "{}-{}-{}",
        team_code,
        opponent_code,
        kickoff.date_naive().format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_match_id_format() {
        let kickoff = Utc.with_ymd_and_hms(2025, 3, 9, 16, 30, 0).unwrap();
        assert_eq!(
            generate_match_id("MUN", "ARS", &kickoff),
            "MUN-ARS-2025-03-09"
        );
    }

    #[test]
    fn test_match_id_is_deterministic() {
        let kickoff: DateTime<Utc> = "2025-04-06T15:30:00Z".parse().unwrap();
        let first = generate_match_id("MUN", "LIV", &kickoff);
        let second = generate_match_id("MUN", "LIV", &kickoff);
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_match_id_uses_utc_day() {
        // 23:30 at UTC-2 is already the next day in UTC.
        let kickoff: DateTime<Utc> = DateTime::parse_from_rfc3339("2025-04-05T23:30:00-02:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(generate_match_id("MUN", "LIV", &kickoff), "MUN-LIV-2025-04-06");
    }
}
