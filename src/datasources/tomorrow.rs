use crate::config::WeatherConfig;
use crate::error::{GardenOpsError, Result};
use crate::models::{CurrentConditions, DailyForecast, WeatherCode, WeatherReport};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.tomorrow.io/v4/weather";
const FORECAST_DAYS: usize = 7;

pub struct TomorrowIoClient {
    client: reqwest::Client,
    config: WeatherConfig,
    base_url: String,
}

// Tomorrow.io API response structures
#[derive(Debug, Deserialize)]
struct RealtimeResponse {
    data: RealtimeData,
}

#[derive(Debug, Deserialize)]
struct RealtimeData {
    values: RealtimeValues,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RealtimeValues {
    temperature: f64,
    #[serde(default)]
    humidity: f64,
    #[serde(default)]
    wind_speed: f64, // m/s
    #[serde(default)]
    wind_direction: f64,
    #[serde(default)]
    pressure_sea_level: Option<f64>,
    #[serde(default)]
    pressure_surface_level: Option<f64>,
    #[serde(default)]
    visibility: Option<f64>,
    #[serde(default)]
    uv_index: Option<f64>,
    #[serde(default)]
    weather_code: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    timelines: Timelines,
}

#[derive(Debug, Deserialize)]
struct Timelines {
    #[serde(default)]
    daily: Vec<DailyInterval>,
}

#[derive(Debug, Deserialize)]
struct DailyInterval {
    time: DateTime<Utc>,
    values: DailyValues,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyValues {
    temperature_max: f64,
    temperature_min: f64,
    #[serde(default)]
    weather_code_max: Option<u32>,
    #[serde(default)]
    weather_code: Option<u32>,
    #[serde(default)]
    precipitation_probability_max: Option<f64>,
    #[serde(default)]
    precipitation_probability: Option<f64>,
}

impl TomorrowIoClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            base_url: API_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions
    pub async fn fetch_realtime(&self) -> Result<CurrentConditions> {
        let response: RealtimeResponse = self.get("realtime").await?;
        Ok(convert_realtime(response.data.values))
    }

    /// Fetch the daily forecast, at most seven days
    pub async fn fetch_forecast(&self) -> Result<Vec<DailyForecast>> {
        let response: ForecastResponse = self.get("forecast").await?;
        Ok(convert_daily(response.timelines.daily))
    }

    /// Fetch current conditions and forecast concurrently
    pub async fn fetch_report(&self) -> Result<WeatherReport> {
        let (current, daily) = tokio::try_join!(self.fetch_realtime(), self.fetch_forecast())?;
        tracing::debug!(days = daily.len(), "Fetched Tomorrow.io weather");

        Ok(WeatherReport {
            fetched_at: Utc::now(),
            latitude: self.config.latitude,
            longitude: self.config.longitude,
            current,
            daily,
        })
    }

    /// Test connection to the Tomorrow.io API
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.url("realtime"))
            .send()
            .await
            .map_err(|e| GardenOpsError::DataSourceUnavailable(format!("Tomorrow.io: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?location={},{}&units=metric&apikey={}",
            self.base_url, endpoint, self.config.latitude, self.config.longitude, self.config.api_key
        )
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| GardenOpsError::DataSourceUnavailable(format!("Tomorrow.io: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GardenOpsError::DataSourceUnavailable(format!(
                "Tomorrow.io returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            GardenOpsError::DataSourceUnavailable(format!(
                "Failed to parse Tomorrow.io {} response: {}",
                endpoint, e
            ))
        })
    }
}

fn convert_realtime(values: RealtimeValues) -> CurrentConditions {
    CurrentConditions {
        temperature_c: values.temperature,
        humidity_percent: values.humidity,
        wind_speed_ms: values.wind_speed,
        wind_direction_deg: values.wind_direction,
        pressure_hpa: values
            .pressure_sea_level
            .or(values.pressure_surface_level)
            .unwrap_or(1013.0),
        visibility_km: values.visibility.unwrap_or(10.0),
        uv_index: values.uv_index.unwrap_or(0.0),
        condition: WeatherCode::from_code(values.weather_code.unwrap_or(0)),
    }
}

fn convert_daily(intervals: Vec<DailyInterval>) -> Vec<DailyForecast> {
    intervals
        .into_iter()
        .take(FORECAST_DAYS)
        .map(|day| {
            let v = day.values;
            DailyForecast {
                date: day.time.date_naive(),
                high_c: v.temperature_max,
                low_c: v.temperature_min,
                condition: WeatherCode::from_code(v.weather_code_max.or(v.weather_code).unwrap_or(0)),
                precipitation_probability: v
                    .precipitation_probability_max
                    .or(v.precipitation_probability)
                    .unwrap_or(0.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const REALTIME_JSON: &str = r#"{
        "data": {
            "time": "2024-06-01T09:00:00Z",
            "values": {
                "temperature": 31.4,
                "humidity": 38,
                "windSpeed": 4.2,
                "windDirection": 247,
                "pressureSurfaceLevel": 1002.5,
                "uvIndex": 9,
                "weatherCode": 1100
            }
        },
        "location": { "lat": 28.61, "lon": 77.21 }
    }"#;

    fn forecast_json(days: usize) -> String {
        let intervals: Vec<String> = (0..days)
            .map(|i| {
                format!(
                    r#"{{ "time": "2024-06-{:02}T06:00:00Z", "values": {{
                        "temperatureMax": 33.0, "temperatureMin": 24.5,
                        "weatherCodeMax": 4001, "precipitationProbabilityMax": {} }} }}"#,
                    i + 1,
                    i * 10
                )
            })
            .collect();
        format!(r#"{{ "timelines": {{ "daily": [{}] }} }}"#, intervals.join(","))
    }

    fn sample_config() -> WeatherConfig {
        WeatherConfig {
            api_key: "test_key".to_string(),
            latitude: 28.61,
            longitude: 77.21,
            enabled: true,
        }
    }

    #[test]
    fn converts_realtime_values() {
        let response: RealtimeResponse = serde_json::from_str(REALTIME_JSON).unwrap();
        let current = convert_realtime(response.data.values);
        assert_eq!(current.temperature_c, 31.4);
        assert_eq!(current.humidity_percent, 38.0);
        assert_eq!(current.pressure_hpa, 1002.5);
        assert_eq!(current.visibility_km, 10.0);
        assert_eq!(current.condition, WeatherCode::MostlyClear);
        assert_eq!(current.wind_direction(), "WSW");
    }

    #[test]
    fn forecast_is_capped_at_seven_days() {
        let response: ForecastResponse = serde_json::from_str(&forecast_json(10)).unwrap();
        let daily = convert_daily(response.timelines.daily);
        assert_eq!(daily.len(), 7);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(daily[6].precipitation_probability, 60.0);
        assert_eq!(daily[0].condition, WeatherCode::Rain);
    }

    #[test]
    fn daily_falls_back_to_plain_fields() {
        let json = r#"{ "timelines": { "daily": [ { "time": "2024-06-01T00:00:00Z",
            "values": { "temperatureMax": 20, "temperatureMin": 10,
                        "weatherCode": 1001, "precipitationProbability": 35 } } ] } }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        let daily = convert_daily(response.timelines.daily);
        assert_eq!(daily[0].condition, WeatherCode::Cloudy);
        assert_eq!(daily[0].precipitation_probability, 35.0);
    }

    #[test]
    fn url_includes_location_and_key() {
        let client = TomorrowIoClient::new(sample_config()).with_base_url("http://localhost:9");
        let url = client.url("forecast");
        assert_eq!(
            url,
            "http://localhost:9/forecast?location=28.61,77.21&units=metric&apikey=test_key"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_unavailable() {
        let client = TomorrowIoClient::new(sample_config()).with_base_url("http://127.0.0.1:9");
        let err = client.fetch_realtime().await.unwrap_err();
        assert!(matches!(err, GardenOpsError::DataSourceUnavailable(_)));
    }
}
