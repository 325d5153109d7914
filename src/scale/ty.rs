use rgb::RGB8;

/// Upper end of a scale segment and the color reached there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorStop {
    pub upper_bound: u16,
    pub rgb: RGB8,
}

impl ColorStop {
    pub(crate) const fn new(upper_bound: u16, r: u8, g: u8, b: u8) -> Self {
        ColorStop { upper_bound, rgb: RGB8 { r, g, b } }
    }
}

/// Severity bucket of an AQI value.
///
/// The numeric boundaries are fixed: 0–50, 51–100, 101–200, 201–300,
/// 301–400 and 401 upwards.  How a bucket is named depends on the
/// [`Legend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl Category {
    /// All categories, from the least to the most severe.
    pub const ALL: [Category; 6] = [
        Category::Good, Category::Satisfactory, Category::Moderate,
        Category::Poor, Category::VeryPoor, Category::Severe];

    /// Bucket of `aqi`.  Fractional values go to the first bucket
    /// whose upper bound they do not exceed; negative values are
    /// [`Good`](Category::Good).
    pub fn of(aqi: f64) -> Category {
        use Category::*;
        if aqi <= 50. { Good }
        else if aqi <= 100. { Satisfactory }
        else if aqi <= 200. { Moderate }
        else if aqi <= 300. { Poor }
        else if aqi <= 400. { VeryPoor }
        else if aqi.is_nan() { Good }
        else { Severe }
    }

    /// Position in [`Category::ALL`].
    pub fn rank(self) -> usize { self as usize }

    /// The range of values of the bucket, as printed in the legend.
    pub fn range(self) -> &'static str {
        ["0-50", "51-100", "101-200", "201-300", "301-400", "401-500+"]
            [self.rank()]
    }

    /// Color of the bucket in the gauge legend.
    pub fn swatch(self) -> RGB8 {
        const SWATCHES: [RGB8; 6] = [
            RGB8 { r: 0x40, g: 0xC0, b: 0x57 },
            RGB8 { r: 0x85, g: 0xD6, b: 0x6A },
            RGB8 { r: 0xFF, g: 0xD4, b: 0x3B },
            RGB8 { r: 0xF0, g: 0x8C, b: 0x00 },
            RGB8 { r: 0xE0, g: 0x31, b: 0x31 },
            RGB8 { r: 0x8B, g: 0x1A, b: 0x99 }];
        SWATCHES[self.rank()]
    }

    /// Label of the bucket in `legend`.
    pub fn label(self, legend: Legend) -> &'static str {
        legend.labels()[self.rank()]
    }
}

/// Naming scheme of the categories.
///
/// The two schemes agree on the boundaries but not on the names: the
/// gauge calls 51–100 "Satisfactory" while the map overlay already
/// calls it "Moderate".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Legend {
    /// Names used by the circular gauge and its legend.
    #[default]
    Gauge,
    /// Names used by the map overlay and marker tooltips.
    Map,
}

impl Legend {
    fn labels(self) -> &'static [&'static str; 6] {
        match self {
            Legend::Gauge => &["Good", "Satisfactory", "Moderate", "Poor",
                               "Very Poor", "Severe"],
            Legend::Map => &["Good", "Moderate", "Poor", "Unhealthy",
                             "Very Unhealthy", "Hazardous"],
        }
    }
}
