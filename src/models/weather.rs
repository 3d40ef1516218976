use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Current and daily weather for one location, in metric units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub fetched_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>, // ordered, today first
}

impl WeatherReport {
    /// Forecast entries for the first `days` days
    pub fn next_days(&self, days: usize) -> &[DailyForecast] {
        &self.daily[..days.min(self.daily.len())]
    }

    /// First day within `days` whose precipitation probability exceeds
    /// `threshold_percent`
    pub fn rain_expected_within(&self, days: usize, threshold_percent: f64) -> Option<&DailyForecast> {
        self.next_days(days)
            .iter()
            .find(|d| d.precipitation_probability > threshold_percent)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_ms: f64,
    pub wind_direction_deg: f64,
    pub pressure_hpa: f64,
    pub visibility_km: f64,
    pub uv_index: f64,
    pub condition: WeatherCode,
}

impl CurrentConditions {
    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed_ms * 3.6
    }

    pub fn wind_direction(&self) -> &'static str {
        wind_direction(self.wind_direction_deg)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub high_c: f64,
    pub low_c: f64,
    pub condition: WeatherCode,
    pub precipitation_probability: f64, // 0-100
}

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass name for a bearing in degrees
pub fn wind_direction(degrees: f64) -> &'static str {
    let index = (degrees / 22.5).round().rem_euclid(16.0) as usize;
    COMPASS[index % 16]
}

/// Weather condition codes from the Tomorrow.io API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCode {
    Unknown,
    #[default]
    Clear,
    Cloudy,
    MostlyClear,
    PartlyCloudy,
    MostlyCloudy,
    Fog,
    LightFog,
    LightWind,
    Wind,
    StrongWind,
    Drizzle,
    Rain,
    LightRain,
    HeavyRain,
    Snow,
    Flurries,
    LightSnow,
    HeavySnow,
    FreezingDrizzle,
    FreezingRain,
    LightFreezingRain,
    HeavyFreezingRain,
    IcePellets,
    HeavyIcePellets,
    LightIcePellets,
    Thunderstorm,
}

impl WeatherCode {
    /// Unlisted codes are reported as clear sky.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => WeatherCode::Unknown,
            1000 => WeatherCode::Clear,
            1001 => WeatherCode::Cloudy,
            1100 => WeatherCode::MostlyClear,
            1101 => WeatherCode::PartlyCloudy,
            1102 => WeatherCode::MostlyCloudy,
            2000 => WeatherCode::Fog,
            2100 => WeatherCode::LightFog,
            3000 => WeatherCode::LightWind,
            3001 => WeatherCode::Wind,
            3002 => WeatherCode::StrongWind,
            4000 => WeatherCode::Drizzle,
            4001 => WeatherCode::Rain,
            4200 => WeatherCode::LightRain,
            4201 => WeatherCode::HeavyRain,
            5000 => WeatherCode::Snow,
            5001 => WeatherCode::Flurries,
            5100 => WeatherCode::LightSnow,
            5101 => WeatherCode::HeavySnow,
            6000 => WeatherCode::FreezingDrizzle,
            6001 => WeatherCode::FreezingRain,
            6200 => WeatherCode::LightFreezingRain,
            6201 => WeatherCode::HeavyFreezingRain,
            7000 => WeatherCode::IcePellets,
            7101 => WeatherCode::HeavyIcePellets,
            7102 => WeatherCode::LightIcePellets,
            8000 => WeatherCode::Thunderstorm,
            _ => WeatherCode::Clear,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCode::Unknown => "Unknown",
            WeatherCode::Clear => "Clear",
            WeatherCode::Cloudy => "Cloudy",
            WeatherCode::MostlyClear => "Mostly Clear",
            WeatherCode::PartlyCloudy => "Partly Cloudy",
            WeatherCode::MostlyCloudy => "Mostly Cloudy",
            WeatherCode::Fog => "Fog",
            WeatherCode::LightFog => "Light Fog",
            WeatherCode::LightWind => "Light Wind",
            WeatherCode::Wind => "Wind",
            WeatherCode::StrongWind => "Strong Wind",
            WeatherCode::Drizzle => "Drizzle",
            WeatherCode::Rain => "Rain",
            WeatherCode::LightRain => "Light Rain",
            WeatherCode::HeavyRain => "Heavy Rain",
            WeatherCode::Snow => "Snow",
            WeatherCode::Flurries => "Flurries",
            WeatherCode::LightSnow => "Light Snow",
            WeatherCode::HeavySnow => "Heavy Snow",
            WeatherCode::FreezingDrizzle => "Freezing Drizzle",
            WeatherCode::FreezingRain => "Freezing Rain",
            WeatherCode::LightFreezingRain => "Light Freezing Rain",
            WeatherCode::HeavyFreezingRain => "Heavy Freezing Rain",
            WeatherCode::IcePellets => "Ice Pellets",
            WeatherCode::HeavyIcePellets => "Heavy Ice Pellets",
            WeatherCode::LightIcePellets => "Light Ice Pellets",
            WeatherCode::Thunderstorm => "Thunderstorm",
        }
    }

    /// Whether this condition involves precipitation
    pub fn has_precipitation(&self) -> bool {
        matches!(
            self,
            WeatherCode::Drizzle
                | WeatherCode::Rain
                | WeatherCode::LightRain
                | WeatherCode::HeavyRain
                | WeatherCode::Snow
                | WeatherCode::Flurries
                | WeatherCode::LightSnow
                | WeatherCode::HeavySnow
                | WeatherCode::FreezingDrizzle
                | WeatherCode::FreezingRain
                | WeatherCode::LightFreezingRain
                | WeatherCode::HeavyFreezingRain
                | WeatherCode::IcePellets
                | WeatherCode::HeavyIcePellets
                | WeatherCode::LightIcePellets
                | WeatherCode::Thunderstorm
        )
    }
}

impl std::fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: i64, rain: f64) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap() + chrono::Duration::days(offset),
            high_c: 22.0,
            low_c: 12.0,
            condition: WeatherCode::Clear,
            precipitation_probability: rain,
        }
    }

    fn report(daily: Vec<DailyForecast>) -> WeatherReport {
        WeatherReport {
            fetched_at: Utc::now(),
            latitude: 19.07,
            longitude: 72.87,
            current: CurrentConditions {
                temperature_c: 20.0,
                humidity_percent: 60.0,
                wind_speed_ms: 3.0,
                wind_direction_deg: 90.0,
                pressure_hpa: 1013.0,
                visibility_km: 10.0,
                uv_index: 4.0,
                condition: WeatherCode::Clear,
            },
            daily,
        }
    }

    #[test]
    fn weather_code_from_code() {
        assert_eq!(WeatherCode::from_code(0), WeatherCode::Unknown);
        assert_eq!(WeatherCode::from_code(1000), WeatherCode::Clear);
        assert_eq!(WeatherCode::from_code(4201), WeatherCode::HeavyRain);
        assert_eq!(WeatherCode::from_code(8000), WeatherCode::Thunderstorm);
        assert_eq!(WeatherCode::from_code(9999), WeatherCode::Clear);
        assert_eq!(WeatherCode::from_code(7102).as_str(), "Light Ice Pellets");
    }

    #[test]
    fn weather_code_has_precipitation() {
        assert!(WeatherCode::Rain.has_precipitation());
        assert!(WeatherCode::Thunderstorm.has_precipitation());
        assert!(!WeatherCode::Clear.has_precipitation());
        assert!(!WeatherCode::StrongWind.has_precipitation());
    }

    #[test]
    fn wind_direction_compass_points() {
        assert_eq!(wind_direction(0.0), "N");
        assert_eq!(wind_direction(11.0), "N");
        assert_eq!(wind_direction(12.0), "NNE");
        assert_eq!(wind_direction(90.0), "E");
        assert_eq!(wind_direction(225.0), "SW");
        assert_eq!(wind_direction(350.0), "N");
        assert_eq!(wind_direction(360.0), "N");
    }

    #[test]
    fn rain_expected_only_looks_at_window() {
        let r = report(vec![day(0, 10.0), day(1, 20.0), day(2, 50.0), day(3, 90.0)]);
        assert!(r.rain_expected_within(3, 50.0).is_none());
        assert_eq!(r.rain_expected_within(4, 50.0).map(|d| d.precipitation_probability), Some(90.0));
    }

    #[test]
    fn next_days_clamps_to_available() {
        let r = report(vec![day(0, 0.0)]);
        assert_eq!(r.next_days(7).len(), 1);
    }
}
