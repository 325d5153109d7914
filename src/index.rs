//! Air quality indexes as reported by the upstream API, and the
//! choice of the one index to display.

use rgb::RGB8;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Code of India's National Air Quality Index (NAQI), preferred for
/// display whenever it is reported.
pub const PRIMARY_REGIONAL_CODE: &str = "ind_cpcb";

/// Code of the Universal AQI, used when the regional index is missing.
pub const UNIVERSAL_CODE: &str = "uaqi";

/// One index reported for a location and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityIndex {
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Raw value.  Usually in \[0, 500\] but not bounded by the source.
    #[serde(default)]
    pub aqi: Option<i32>,
    /// Severity label, as supplied by the source.
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_pollutant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SuppliedColor>,
}

impl AirQualityIndex {
    /// An index with the given `code` and value and no other data.
    pub fn new(code: impl Into<String>, aqi: i32) -> Self {
        AirQualityIndex {
            code: code.into(),
            display_name: None,
            aqi: Some(aqi),
            category: String::new(),
            dominant_pollutant: None,
            color: None,
        }
    }

    /// Set the severity label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the dominant pollutant code.
    pub fn with_dominant(mut self, pollutant: impl Into<String>) -> Self {
        self.dominant_pollutant = Some(pollutant.into());
        self
    }

    /// Set the color supplied by the source.
    pub fn with_color(mut self, color: SuppliedColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Title shown above the gauge for this index.
    pub fn title(&self) -> &str {
        match self.code.as_str() {
            PRIMARY_REGIONAL_CODE => "NAQI (India)",
            UNIVERSAL_CODE => "Universal AQI",
            _ => self.display_name.as_deref().unwrap_or(&self.code),
        }
    }

    /// Dominant pollutant in upper case (e.g. `"PM25"`), if known.
    pub fn dominant_upper(&self) -> Option<String> {
        self.dominant_pollutant.as_ref().map(|p| p.to_uppercase())
    }
}

/// A color as sent by the source.
///
/// Channels are either fractions in \[0, 1\] or integers in
/// \[0, 255\]; the source does not say which.  Absent channels are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuppliedColor {
    #[serde(default)]
    pub red: f64,
    #[serde(default)]
    pub green: f64,
    #[serde(default)]
    pub blue: f64,
}

impl SuppliedColor {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        SuppliedColor { red, green, blue }
    }

    /// Convert to 8 bit channels.  A channel greater than 1 is taken
    /// to be in \[0, 255\] already, otherwise it is a fraction of 255.
    ///
    /// ```
    /// use aqi_scale::SuppliedColor;
    /// let c = SuppliedColor::new(1., 0.5, 0.).normalize();
    /// assert_eq!((c.r, c.g, c.b), (255, 128, 0));
    /// ```
    pub fn normalize(&self) -> RGB8 {
        RGB8 { r: channel(self.red),
               g: channel(self.green),
               b: channel(self.blue) }
    }
}

fn channel(v: f64) -> u8 {
    let v = if v > 1. { v } else { v * 255. };
    // NaN casts to 0.
    v.round().clamp(0., 255.) as u8
}

/// Which index codes to display, in order of preference.
///
/// The default prefers [`PRIMARY_REGIONAL_CODE`] and falls back to
/// [`UNIVERSAL_CODE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    primary: String,
    fallback: String,
}

impl Default for Preference {
    fn default() -> Self {
        Preference { primary: PRIMARY_REGIONAL_CODE.to_string(),
                     fallback: UNIVERSAL_CODE.to_string() }
    }
}

impl Preference {
    /// Prefer indexes with this `code`.
    pub fn primary(mut self, code: impl Into<String>) -> Self {
        self.primary = code.into();
        self
    }

    /// Use indexes with this `code` when no primary one is reported.
    pub fn fallback(mut self, code: impl Into<String>) -> Self {
        self.fallback = code.into();
        self
    }

    /// Return the first index with the primary code, or else the first
    /// with the fallback code.  The result is always an element of
    /// `indexes`.
    pub fn select<'a>(&self, indexes: &'a [AirQualityIndex])
                      -> Option<&'a AirQualityIndex> {
        if indexes.is_empty() {
            debug!("no AQI indexes provided");
            return None
        }
        let found = indexes.iter().find(|i| i.code == self.primary)
            .or_else(|| indexes.iter().find(|i| i.code == self.fallback));
        if found.is_none() {
            let codes: Vec<&str> = indexes.iter()
                .map(|i| i.code.as_str()).collect();
            warn!(?codes, primary = %self.primary, fallback = %self.fallback,
                  "no matching AQI index");
        }
        found
    }
}

/// Select the index to display with the default [`Preference`].
///
/// ```
/// use aqi_scale::{select_preferred, AirQualityIndex};
/// let indexes = [AirQualityIndex::new("uaqi", 80),
///                AirQualityIndex::new("ind_cpcb", 120)];
/// assert_eq!(select_preferred(&indexes).map(|i| i.aqi), Some(Some(120)));
/// ```
pub fn select_preferred(indexes: &[AirQualityIndex])
                        -> Option<&AirQualityIndex> {
    Preference::default().select(indexes)
}
