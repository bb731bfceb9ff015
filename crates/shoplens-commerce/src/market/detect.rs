//! Country resolution for a searching user.
//!
//! Order of precedence: the country saved on the user's profile, then the
//! locale, then the timezone, then the default market.

use super::registry::DEFAULT_MARKET;

/// Resolve the country a search should run in.
pub fn resolve_country(
    profile_country: Option<&str>,
    timezone: Option<&str>,
    locale: Option<&str>,
) -> String {
    match profile_country.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_uppercase(),
        _ => detect_country(timezone, locale).to_string(),
    }
}

/// Guess a country code from a timezone name and a locale tag.
///
/// Locale wins over timezone when both say something.
pub fn detect_country(timezone: Option<&str>, locale: Option<&str>) -> &'static str {
    let mut detected = DEFAULT_MARKET;

    if let Some(tz) = timezone {
        if tz.contains("Asia/Kolkata") || tz.contains("Asia/Calcutta") {
            detected = "IN";
        } else if tz.contains("Europe/London") {
            detected = "GB";
        } else if tz.contains("Europe/") {
            detected = "GB";
        } else if tz.contains("Asia/") {
            detected = "IN";
        }
    }

    if let Some(locale) = locale {
        // POSIX locales look like "en_IN.UTF-8".
        let locale = locale.replace('_', "-");
        if locale.contains("en-IN") || locale.starts_with("hi") {
            detected = "IN";
        } else if locale.contains("en-GB") {
            detected = "GB";
        }
    }

    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_country_wins() {
        assert_eq!(resolve_country(Some("gb"), Some("Asia/Kolkata"), None), "GB");
        assert_eq!(resolve_country(Some("  "), Some("Asia/Kolkata"), None), "IN");
        assert_eq!(resolve_country(None, None, None), "US");
    }

    #[test]
    fn test_timezone_detection() {
        assert_eq!(detect_country(Some("Asia/Calcutta"), None), "IN");
        assert_eq!(detect_country(Some("Europe/London"), None), "GB");
        assert_eq!(detect_country(Some("Europe/Berlin"), None), "GB");
        assert_eq!(detect_country(Some("Asia/Tokyo"), None), "IN");
        assert_eq!(detect_country(Some("America/New_York"), None), "US");
    }

    #[test]
    fn test_locale_overrides_timezone() {
        assert_eq!(detect_country(Some("Europe/London"), Some("en_IN.UTF-8")), "IN");
        assert_eq!(detect_country(Some("Asia/Kolkata"), Some("en-GB")), "GB");
        assert_eq!(detect_country(None, Some("hi-IN")), "IN");
        assert_eq!(detect_country(None, Some("en-US")), "US");
    }
}
