use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// IANA timezone used to date-stamp the completed view.
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            timezone: detect_system_timezone(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("hoteldo.toml"))
            .merge(Env::prefixed("HOTELDO_"))
            .extract()
    }

    /// The configured timezone, falling back to UTC when the name does
    /// not parse.
    pub fn display_timezone(&self) -> Tz {
        self.timezone.parse().unwrap_or(chrono_tz::UTC)
    }
}

fn default_database_path() -> String {
    "hoteldo.db".to_string()
}

/// Detects the system timezone, falling back to UTC if detection fails.
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if tz.parse::<Tz>().is_ok() {
            return tz;
        }
    }

    if let Ok(tz) = iana_time_zone::get_timezone() {
        if tz.parse::<Tz>().is_ok() {
            return tz;
        }
    }

    "UTC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timezone_falls_back_to_utc() {
        let config = Config {
            database_path: default_database_path(),
            timezone: "Not/AZone".to_string(),
        };
        assert_eq!(config.display_timezone(), chrono_tz::UTC);
    }

    #[test]
    fn valid_timezone_is_used() {
        let config = Config {
            database_path: default_database_path(),
            timezone: "Europe/Paris".to_string(),
        };
        assert_eq!(config.display_timezone(), chrono_tz::Europe::Paris);
    }
}
