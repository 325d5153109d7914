//! Responses of the air quality API, and the chart data drawn from
//! them.
//!
//! All fields tolerate being absent or `null`: a partial response
//! decodes to a value with empty collections rather than failing.

use rgb::RGB8;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::health::Recommendations;
use crate::{select_preferred, AirQualityIndex, Reading, Result};

/// Number of hours a forecast chart shows.
pub const FORECAST_HOURS: usize = 24;

fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    let value = serde_json::from_str(json)?;
    debug!(bytes = json.len(), "decoded air quality payload");
    Ok(value)
}

fn nullable<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where D: Deserializer<'de>, T: Default + Deserialize<'de> {
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Conditions at a place right now.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub indexes: Vec<AirQualityIndex>,
    #[serde(default, deserialize_with = "nullable")]
    pub pollutants: Vec<Pollutant>,
    #[serde(default)]
    pub health_recommendations: Option<Recommendations>,
}

impl CurrentConditions {
    /// Decode a response of the `current` endpoint.
    ///
    /// ```
    /// use aqi_scale::conditions::CurrentConditions;
    /// let c = CurrentConditions::from_json(
    ///     r#"{"indexes": [{"code": "uaqi", "aqi": 42}]}"#)?;
    /// assert_eq!(c.reading().map(|r| r.value), Some(42));
    /// # Ok::<(), aqi_scale::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> { decode(json) }

    /// The index to display, see [`select_preferred`].
    pub fn preferred(&self) -> Option<&AirQualityIndex> {
        select_preferred(&self.indexes)
    }

    /// What the gauge shows, or `None` when no index applies.
    pub fn reading(&self) -> Option<Reading<RGB8>> {
        self.preferred().and_then(Reading::<RGB8>::of)
    }
}

/// Indexes reported for one hour of a history or a forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hour {
    #[serde(default)]
    pub date_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub indexes: Vec<AirQualityIndex>,
}

impl Hour {
    pub fn preferred(&self) -> Option<&AirQualityIndex> {
        select_preferred(&self.indexes)
    }

    /// Preferred AQI value of the hour.
    pub fn aqi(&self) -> Option<i32> {
        self.preferred().and_then(|i| i.aqi)
    }

    /// Lines of the chart tooltip for this hour.
    pub fn tooltip(&self) -> Vec<String> {
        let index = match self.preferred() {
            Some(i) => i,
            None => return vec!["No data".to_string()],
        };
        let value = match index.aqi {
            Some(v) => v.to_string(),
            None => "N/A".to_string(),
        };
        let mut lines = vec![format!("AQI: {value} - {}", index.category)];
        if let Some(p) = index.dominant_upper() {
            lines.push(format!("Dominant: {p}"));
        }
        lines
    }

    /// Category line of the forecast tooltip.
    pub fn category_line(&self) -> String {
        match self.preferred() {
            Some(i) => format!("Category: {}", i.category),
            None => "No category".to_string(),
        }
    }
}

/// Preferred AQI of each hour, `None` where no index applies.
pub fn series(hours: &[Hour]) -> Vec<Option<i32>> {
    hours.iter().map(Hour::aqi).collect()
}

/// Whether a series has at least one point to draw.
pub fn has_data(series: &[Option<i32>]) -> bool {
    series.iter().any(Option::is_some)
}

/// Past conditions, one entry per hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    #[serde(default, deserialize_with = "nullable")]
    pub hours_info: Vec<Hour>,
}

impl History {
    pub fn from_json(json: &str) -> Result<Self> { decode(json) }

    pub fn series(&self) -> Vec<Option<i32>> { series(&self.hours_info) }
}

/// Forecast conditions, one entry per hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    #[serde(default, deserialize_with = "nullable")]
    pub hourly_forecasts: Vec<Hour>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Forecast {
    pub fn from_json(json: &str) -> Result<Self> { decode(json) }

    /// `None` when there is no hour to show.
    pub fn into_non_empty(self) -> Option<Self> {
        if self.hourly_forecasts.is_empty() {
            warn!("forecast has no hourly data");
            None
        } else {
            Some(self)
        }
    }

    /// The hours shown in the chart: at most [`FORECAST_HOURS`].
    pub fn hours(&self) -> &[Hour] {
        let n = self.hourly_forecasts.len().min(FORECAST_HOURS);
        &self.hourly_forecasts[.. n]
    }

    pub fn series(&self) -> Vec<Option<i32>> { series(self.hours()) }
}

/// A pollutant and its concentration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pollutant {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration: Option<Concentration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concentration {
    #[serde(default)]
    pub value: f64,
    /// E.g. `MICROGRAMS_PER_CUBIC_METER` or `PARTS_PER_BILLION`.
    #[serde(default)]
    pub units: String,
}

impl Concentration {
    /// Short unit for display.
    pub fn unit_label(&self) -> &'static str {
        if self.units.contains("MICROGRAMS") { "μg/m³" } else { "ppb" }
    }
}
