//! Weather icon lookup
//!
//! Translates MET Norway symbol codes
//! (<https://api.met.no/weatherapi/weathericon/2.0/documentation>) to
//! identifiers from the weather-icons set
//! (<https://erikflowers.github.io/weather-icons/>). The icons themselves are
//! bundled with the dashboard as static SVG assets.

use tracing::warn;

/// Icon identifier used when a symbol code has no mapping
pub const FALLBACK_ICON: &str = "wi-na";

/// Look up the icon identifier for a symbol code
///
/// Returns `None` for codes outside the known vocabulary.
#[must_use]
pub fn icon_identifier(code: &str) -> Option<&'static str> {
    let icon = match code {
        "clearsky" | "clearsky_day" => "wi-day-sunny",
        "clearsky_night" => "wi-night-clear",

        "cloudy" => "wi-cloudy",
        "fair" | "partlycloudy_day" => "wi-day-cloudy",
        "fair_night" | "partlycloudy_night" => "wi-night-alt-cloudy",
        "partlycloudy" => "day-cloudy",
        "fog" => "wi-fog",

        "heavyrain" | "rain" | "rainandthunder" | "rainshowers" | "rainshowersandthunder" => {
            "wi-rain"
        }
        "heavyrainandthunder" | "heavysleetandthunder" => "wi-storm-showers",
        "heavyrainshowers" => "wi-day-showers",
        "heavyrainshowersandthunder" => "wi-day-storm-showers",

        "heavysleet" | "heavysleetshowers" | "lightsleet" | "lightsleetandthunder"
        | "lightsleetshowers" | "lightssleetshowersandthunder" | "lightssnowshowersandthunder"
        | "sleet" | "sleetandthunder" | "sleetshowers" | "sleetshowersandthunder" => "wi-sleet",
        "heavysleetshowersandthunder" => "wi-day-sleet-storm",

        "heavysnow" | "heavysnowandthunder" | "heavysnowshowers" | "heavysnowshowersandthunder"
        | "lightsnow" | "lightsnowandthunder" | "lightsnowshowers" | "snow" | "snowandthunder"
        | "snowshowers" | "snowshowersandthunder" => "wi-snow",

        "lightrain" | "lightrainandthunder" | "lightrainshowers"
        | "lightrainshowersandthunder" => "wi-sprinkle",
        "lightrainshowers_night" => "wi-night-alt-sprinkle",

        _ => return None,
    };

    Some(icon)
}

/// Resolve a symbol code to an icon identifier, falling back to
/// [`FALLBACK_ICON`]
///
/// An unknown code is logged so that it can be added to the mapping; it never
/// fails the fetch.
#[must_use]
pub fn resolve_icon(code: &str) -> &'static str {
    icon_identifier(code).unwrap_or_else(|| {
        warn!(code, "No weather icon found for symbol code");
        FALLBACK_ICON
    })
}

/// Wrap an icon identifier into the reference the presentation layer
/// resolves to a bundled SVG asset
#[must_use]
pub fn icon_reference(identifier: &str) -> String {
    format!("image:///weather-icons/{identifier}.svg")
}
