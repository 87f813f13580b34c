//! Pure display derivations of a [`WeatherPayload`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::model::WeatherPayload;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Weekday, date and 24-hour time at the location, e.g. "Thursday, January 1, 1970 01:25".
pub fn local_date_time(dt: i64, timezone: i64) -> String {
    format_shifted(dt, timezone, "%A, %B %-d, %Y %H:%M")
}

/// `HH:mm` at the location.
pub fn local_clock(ts: i64, timezone: i64) -> String {
    format_shifted(ts, timezone, "%H:%M")
}

// The offset is applied to the instant and the result read back as UTC wall-clock time.
fn format_shifted(ts: i64, timezone: i64, fmt: &str) -> String {
    DateTime::<Utc>::from_timestamp(ts.saturating_add(timezone), 0)
        .map(|t| t.format(fmt).to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Qualitative background derived from the condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Warm,
    Neutral,
    Slate,
    Stone,
    NeutralLight,
    Gray,
    Default,
}

pub fn theme_for(condition: &str) -> Theme {
    let c = condition.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| c.contains(w));

    if has(&["clear"]) {
        Theme::Warm
    } else if has(&["cloud"]) {
        Theme::Neutral
    } else if has(&["rain", "drizzle"]) {
        Theme::Slate
    } else if has(&["thunder"]) {
        Theme::Stone
    } else if has(&["snow"]) {
        Theme::NeutralLight
    } else if has(&["mist", "fog", "haze", "smoke"]) {
        Theme::Gray
    } else {
        Theme::Default
    }
}

/// Terminal styling for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub name: &'static str,
    pub accent: &'static str,
}

/// Interchangeable visual treatments for the same data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Classic,
    Glass,
}

impl Palette {
    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Classic => "classic",
            Palette::Glass => "glass",
        }
    }

    pub const fn all() -> &'static [Palette] {
        &[Palette::Classic, Palette::Glass]
    }

    pub fn style(&self, theme: Theme) -> ThemeStyle {
        let (name, accent) = match (self, theme) {
            (Palette::Classic, Theme::Warm) => ("amber", "\x1b[33m"),
            (Palette::Classic, Theme::Neutral) => ("sky", "\x1b[36m"),
            (Palette::Classic, Theme::Slate) => ("slate", "\x1b[34m"),
            (Palette::Classic, Theme::Stone) => ("stone", "\x1b[35m"),
            (Palette::Classic, Theme::NeutralLight) => ("frost", "\x1b[97m"),
            (Palette::Classic, Theme::Gray) => ("haze", "\x1b[37m"),
            (Palette::Classic, Theme::Default) => ("plain", "\x1b[90m"),
            (Palette::Glass, Theme::Warm) => ("sunlit glass", "\x1b[93m"),
            (Palette::Glass, Theme::Neutral) => ("cloud glass", "\x1b[96m"),
            (Palette::Glass, Theme::Slate) => ("rain glass", "\x1b[94m"),
            (Palette::Glass, Theme::Stone) => ("storm glass", "\x1b[95m"),
            (Palette::Glass, Theme::NeutralLight) => ("snow glass", "\x1b[2;97m"),
            (Palette::Glass, Theme::Gray) => ("fog glass", "\x1b[2;37m"),
            (Palette::Glass, Theme::Default) => ("glass", "\x1b[2m"),
        };

        ThemeStyle { name, accent }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Palette {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "classic" => Ok(Palette::Classic),
            "glass" => Ok(Palette::Glass),
            _ => Err(anyhow::anyhow!(
                "Unknown palette '{value}'. Supported palettes: classic, glass."
            )),
        }
    }
}

/// Multi-line card for a terminal.
pub fn render_card(payload: &WeatherPayload, palette: Palette) -> String {
    let style = palette.style(theme_for(&payload.condition));
    let place = if payload.country.is_empty() {
        payload.city.clone()
    } else {
        format!("{}, {}", payload.city, payload.country)
    };

    let lines = [
        format!("{BOLD}{}{place}{RESET}", style.accent),
        local_date_time(payload.dt, payload.timezone),
        format!(
            "{}{}°C{RESET}  feels like {}°C",
            style.accent, payload.temp_c, payload.feels_c
        ),
        format!("{} · {}  [{}]", payload.condition, payload.description, payload.icon),
        format!("Humidity {}%   Wind {} km/h", payload.humidity, payload.wind_kmh),
        format!(
            "Sunrise {}   Sunset {}",
            local_clock(payload.sunrise, payload.timezone),
            local_clock(payload.sunset, payload.timezone)
        ),
    ];

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(condition: &str) -> WeatherPayload {
        WeatherPayload {
            city: "Paris".into(),
            country: "FR".into(),
            temp_c: 20,
            feels_c: 20,
            condition: condition.into(),
            description: "clear sky".into(),
            icon: "01d".into(),
            humidity: 55,
            wind_kmh: 18,
            sunrise: 1000,
            sunset: 2000,
            timezone: 3600,
            dt: 1500,
        }
    }

    #[test]
    fn date_time_applies_offset_before_formatting() {
        assert_eq!(local_date_time(1500, 3600), "Thursday, January 1, 1970 01:25");
        assert_eq!(local_date_time(1_700_000_000, -18000), "Tuesday, November 14, 2023 17:13");
    }

    #[test]
    fn clock_is_24_hour() {
        assert_eq!(local_clock(1000, 3600), "01:16");
        assert_eq!(local_clock(1_700_000_000, 0), "22:13");
        assert_eq!(local_clock(0, -3600), "23:00");
    }

    #[test]
    fn theme_follows_priority_rules() {
        let cases = [
            ("Clear", Theme::Warm),
            ("Clouds", Theme::Neutral),
            ("Rain", Theme::Slate),
            ("Drizzle", Theme::Slate),
            ("Thunderstorm", Theme::Stone),
            ("SNOW", Theme::NeutralLight),
            ("Mist", Theme::Gray),
            ("Fog", Theme::Gray),
            ("Haze", Theme::Gray),
            ("Smoke", Theme::Gray),
            ("Tornado", Theme::Default),
            ("", Theme::Default),
        ];

        for (condition, theme) in cases {
            assert_eq!(theme_for(condition), theme, "condition {condition:?}");
        }
    }

    #[test]
    fn palette_parses_case_insensitively() {
        assert_eq!("Glass".parse::<Palette>().unwrap(), Palette::Glass);
        for p in Palette::all() {
            assert_eq!(p.as_str().parse::<Palette>().unwrap(), *p);
        }
        assert!("neon".parse::<Palette>().is_err());
    }

    #[test]
    fn palettes_differ_only_in_style() {
        let p = payload("Clear");
        let classic = render_card(&p, Palette::Classic);
        let glass = render_card(&p, Palette::Glass);

        assert_ne!(classic, glass);
        for card in [&classic, &glass] {
            assert!(card.contains("Paris, FR"));
            assert!(card.contains("Thursday, January 1, 1970 01:25"));
            assert!(card.contains("Wind 18 km/h"));
            assert!(card.contains("Sunrise 01:16   Sunset 01:33"));
        }
    }
}
