use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::forecast::{CurrentWeather, ForecastSample, Units, WeatherSnapshot};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("weather service returned {0}")]
    Status(StatusCode),
    #[error("failed to decode weather payload: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Runs both endpoint calls concurrently. The search fails as a whole if
    /// either request fails; partial results are never surfaced.
    pub async fn fetch_snapshot(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherSnapshot, FetchError> {
        let (current, samples) =
            tokio::try_join!(self.fetch_current(city, units), self.fetch_forecast(city, units))?;

        Ok(WeatherSnapshot {
            current,
            samples,
            fetched_at: Utc::now(),
        })
    }

    pub async fn fetch_current(
        &self,
        city: &str,
        units: Units,
    ) -> Result<CurrentWeather, FetchError> {
        let payload: CurrentResponse = self.get_json("weather", city, units).await?;

        Ok(CurrentWeather {
            location: payload.location,
            temperature: payload.temperature,
            description: payload.description,
            humidity: payload.humidity,
            wind_speed: payload.wind_speed,
            icon: payload.icon,
        })
    }

    pub async fn fetch_forecast(
        &self,
        city: &str,
        units: Units,
    ) -> Result<Vec<ForecastSample>, FetchError> {
        let payload: ForecastResponse = self.get_json("forecast", city, units).await?;
        Ok(payload.forecast.into_iter().map(into_sample).collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
        units: Units,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{endpoint}", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .query(&[("city_name", city), ("units", units.as_query())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json::<T>().await.map_err(FetchError::Decode)
    }
}

fn into_sample(entry: SampleEntry) -> ForecastSample {
    ForecastSample {
        timestamp: entry.datetime,
        temperature: entry.temperature,
        description: entry.description,
        icon: entry.icon,
        humidity: entry.humidity,
        wind_speed: entry.wind_speed,
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: String,
    temperature: f64,
    description: String,
    humidity: f64,
    wind_speed: f64,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    forecast: Vec<SampleEntry>,
}

#[derive(Debug, Deserialize)]
struct SampleEntry {
    datetime: String,
    temperature: f64,
    description: String,
    icon: String,
    #[serde(default)]
    humidity: Option<f64>,
    #[serde(default)]
    wind_speed: Option<f64>,
}
