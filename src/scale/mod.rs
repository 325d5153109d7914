//! The AQI scale: colors, categories and gauge geometry.

use std::marker::PhantomData;
use lazy_static::lazy_static;
use rgb::RGB8;

use crate::{AirQualityIndex, ColorRange, ScaleColor};

pub(crate) mod ty;
use ty::{Category, ColorStop, Legend};

/// Top of the scale.  Larger values are shown with the color and
/// needle position of `MAX_AQI`.
pub const MAX_AQI: f64 = 500.;

lazy_static! {
    // Invariant: non-empty, increasing upper bounds, last one is MAX_AQI.
    static ref STOPS: Vec<ColorStop> = vec![
        ColorStop::new(50, 64, 192, 87),
        ColorStop::new(100, 255, 212, 59),
        ColorStop::new(150, 240, 140, 0),
        ColorStop::new(200, 224, 49, 49),
        ColorStop::new(300, 139, 26, 153),
        ColorStop::new(500, 126, 0, 35),
    ];
}

/// Clamp `aqi` to \[0, [`MAX_AQI`]\].  NaN goes to 0.
///
/// Only positions and colors are clamped; displayed values are not.
#[inline]
pub fn clamp_aqi(aqi: f64) -> f64 {
    if aqi.is_nan() { 0. } else { aqi.clamp(0., MAX_AQI) }
}

/// Color of `aqi` on the AQI scale.
///
/// ```
/// use rgb::RGB8;
/// assert_eq!(aqi_scale::color_for(600.), aqi_scale::color_for(500.));
/// assert_eq!(aqi_scale::color_for(0.), RGB8::new(64, 192, 87));
/// ```
#[inline]
pub fn color_for(aqi: f64) -> RGB8 { interpolate(&STOPS, aqi) }

/// Category of `aqi`.  Same as [`Category::of`].
#[inline]
pub fn category_for(aqi: f64) -> Category { Category::of(aqi) }

/// Angle, in degrees, of the needle of a half circle gauge: 0° for
/// 0 and 180° for [`MAX_AQI`] and above.
#[inline]
pub fn needle_angle(aqi: f64) -> f64 { clamp_aqi(aqi) / MAX_AQI * 180. }

fn interpolate(stops: &[ColorStop], aqi: f64) -> RGB8 {
    let aqi = clamp_aqi(aqi);
    let i = match stops.iter().position(|s| aqi <= s.upper_bound as f64) {
        Some(i) => i,
        None => return stops.last().map(|s| s.rgb).unwrap_or_default(),
    };
    let end = stops[i];
    let start = if i == 0 { ColorStop { upper_bound: 0, rgb: end.rgb } }
                else { stops[i - 1] };
    let range = (end.upper_bound - start.upper_bound) as f64;
    let pos = if range == 0. { 1. }
              else { (aqi - start.upper_bound as f64) / range };
    let mix = |c0: u8, c1: u8| {
        let (c0, c1) = (c0 as f64, c1 as f64);
        (c0 + (c1 - c0) * pos).round() as u8
    };
    RGB8 { r: mix(start.rgb.r, end.rgb.r),
           g: mix(start.rgb.g, end.rgb.g),
           b: mix(start.rgb.b, end.rgb.b) }
}

/// The AQI color scale, producing colors of type `Color`.
///
/// Created by [`ScaleColor::scale`].  See also the [`ColorRange`]
/// trait.
#[derive(Clone, Copy)]
pub struct Scale<Color> {
    stops: &'static [ColorStop],
    color: PhantomData<Color>,
}

impl<Color: ScaleColor> Default for Scale<Color> {
    fn default() -> Self { Self::new() }
}

impl<Color: ScaleColor> Scale<Color> {
    pub fn new() -> Self {
        Scale { stops: &STOPS, color: PhantomData }
    }

    /// The stops of the scale, in increasing order.
    pub fn stops(&self) -> &'static [ColorStop] { self.stops }

    /// Color of `aqi`, interpolated linearly between the two stops
    /// around it.  `aqi` is clamped to \[0, [`MAX_AQI`]\] first.
    pub fn color_for(&self, aqi: f64) -> Color {
        Color::from_rgb8(interpolate(self.stops, aqi))
    }

    /// Category of `aqi`.
    pub fn category_for(&self, aqi: f64) -> Category { Category::of(aqi) }

    /// Stops of a left-to-right gradient painting the gauge arc: the
    /// colors of the scale at evenly spaced offsets in \[0, 1\].
    pub fn gradient_stops(&self) -> Vec<(f64, Color)> {
        let last = (self.stops.len() - 1).max(1) as f64;
        self.stops.iter().enumerate()
            .map(|(i, s)| (i as f64 / last, Color::from_rgb8(s.rgb)))
            .collect()
    }

    /// Rows of the gauge legend, from the least to the most severe
    /// category.
    pub fn legend(&self, legend: Legend) -> Vec<LegendRow<Color>> {
        Category::ALL.iter()
            .map(|&category| LegendRow {
                category,
                label: category.label(legend),
                range: category.range(),
                swatch: Color::from_rgb8(category.swatch()) })
            .collect()
    }

    /// What to display for `index`, or `None` if it has no value.
    ///
    /// The color is the one supplied with the index when there is one,
    /// otherwise the color of the value on the scale.
    pub fn reading(&self, index: &AirQualityIndex) -> Option<Reading<Color>> {
        let value = index.aqi?;
        let color = match index.color {
            Some(c) => Color::from_rgb8(c.normalize()),
            None => self.color_for(value as f64),
        };
        Some(Reading { value,
                       category: Category::of(value as f64),
                       color,
                       angle: needle_angle(value as f64) })
    }
}

impl<Color: ScaleColor> ColorRange<Color> for Scale<Color> {
    fn bounds(&self) -> (f64, f64) { (0., MAX_AQI) }

    fn color_at(&self, x: f64) -> Color { self.color_for(x) }
}

/// The AQI categories as flat bands of their legend colors.
///
/// Created by [`ScaleColor::bands`].
#[derive(Clone, Copy, Default)]
pub struct Bands<Color> { color: PhantomData<Color> }

impl<Color: ScaleColor> Bands<Color> {
    pub fn new() -> Self { Bands { color: PhantomData } }
}

impl<Color: ScaleColor> ColorRange<Color> for Bands<Color> {
    fn bounds(&self) -> (f64, f64) { (0., MAX_AQI) }

    fn color_at(&self, x: f64) -> Color {
        Color::from_rgb8(Category::of(clamp_aqi(x)).swatch())
    }
}

/// One row of the gauge legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow<Color> {
    pub category: Category,
    pub label: &'static str,
    pub range: &'static str,
    pub swatch: Color,
}

/// An index ready to be displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading<Color> {
    /// The value as reported, never clamped.
    pub value: i32,
    pub category: Category,
    pub color: Color,
    /// Needle angle in degrees, see [`needle_angle`].
    pub angle: f64,
}

impl Reading<RGB8> {
    /// Reading of `index` with 8 bit colors.
    ///
    /// ```
    /// use aqi_scale::{AirQualityIndex, Category, Reading};
    /// let r = Reading::of(&AirQualityIndex::new("uaqi", 600)).unwrap();
    /// assert_eq!(r.label(), "600");
    /// assert_eq!(r.category, Category::Severe);
    /// assert_eq!(r.angle, 180.);
    /// ```
    pub fn of(index: &AirQualityIndex) -> Option<Self> {
        Scale::new().reading(index)
    }
}

impl<Color> Reading<Color> {
    /// The value as shown to the user.
    pub fn label(&self) -> String { self.value.to_string() }

    /// Name of the category in `legend`.
    pub fn category_label(&self, legend: Legend) -> &'static str {
        self.category.label(legend)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::SuppliedColor;

    #[test]
    fn stops_are_increasing() {
        let stops = Scale::<RGB8>::new().stops();
        assert_eq!(stops.len(), 6);
        assert!(stops.windows(2).all(|w| w[0].upper_bound < w[1].upper_bound));
        assert_eq!(stops[5].upper_bound as f64, MAX_AQI);
    }

    #[test]
    fn first_bucket_is_flat() {
        assert_eq!(color_for(0.), RGB8::new(64, 192, 87));
        assert_eq!(color_for(25.), RGB8::new(64, 192, 87));
        assert_eq!(color_for(50.), RGB8::new(64, 192, 87));
    }

    #[test]
    fn blends_between_stops() {
        let c = color_for(75.);
        assert_eq!(c, RGB8::new(160, 202, 73));
        assert!(64 < c.r && c.r < 255);
        assert!(192 < c.g && c.g < 212);
        assert!(59 < c.b && c.b < 87);
        assert_eq!(color_for(100.), RGB8::new(255, 212, 59));
        assert_eq!(color_for(250.), RGB8::new(182, 38, 101));
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(color_for(600.), color_for(500.));
        assert_eq!(color_for(500.), RGB8::new(126, 0, 35));
        assert_eq!(color_for(-10.), color_for(0.));
        assert_eq!(color_for(f64::NAN), color_for(0.));
        assert_eq!(color_for(f64::INFINITY), color_for(500.));
    }

    #[test]
    fn pure() {
        for x in [0., 33.3, 75., 151., 499.9, 1e6] {
            assert_eq!(color_for(x), color_for(x));
        }
    }

    #[test]
    fn degenerate_segment() {
        let stops = [ColorStop::new(0, 1, 2, 3), ColorStop::new(10, 11, 12, 13)];
        assert_eq!(interpolate(&stops, 0.), RGB8::new(1, 2, 3));
        assert_eq!(interpolate(&stops, 5.), RGB8::new(6, 7, 8));
        assert_eq!(interpolate(&stops, 20.), RGB8::new(11, 12, 13));
        assert_eq!(interpolate(&[], 20.), RGB8::default());
    }

    #[test]
    fn category_boundaries() {
        use Category::*;
        let cases = [(0., Good), (50., Good), (51., Satisfactory),
                     (100., Satisfactory), (101., Moderate), (200., Moderate),
                     (201., Poor), (300., Poor), (301., VeryPoor),
                     (400., VeryPoor), (401., Severe), (900., Severe),
                     (-3., Good), (50.5, Satisfactory)];
        for (aqi, cat) in cases {
            assert_eq!(category_for(aqi), cat, "aqi = {aqi}");
        }
    }

    #[test]
    fn legends_differ_on_names_only() {
        assert_eq!(Category::Satisfactory.label(Legend::Gauge), "Satisfactory");
        assert_eq!(Category::Satisfactory.label(Legend::Map), "Moderate");
        assert_eq!(Category::Severe.label(Legend::Map), "Hazardous");
        let rows = RGB8::scale().legend(Legend::Gauge);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5].range, "401-500+");
        assert_eq!(rows[1].swatch.hex(), "#85d66a");
    }

    #[test]
    fn needle() {
        assert_eq!(needle_angle(0.), 0.);
        assert_eq!(needle_angle(250.), 90.);
        assert_eq!(needle_angle(600.), 180.);
        assert_eq!(needle_angle(-5.), 0.);
    }

    #[test]
    fn gradient_uses_stop_colors() {
        let g = RGB8::scale().gradient_stops();
        assert_eq!(g.len(), 6);
        assert_eq!(g[0], (0., RGB8::new(64, 192, 87)));
        assert_eq!(g[5], (1., RGB8::new(126, 0, 35)));
        assert!((g[1].0 - 0.2).abs() < 1e-12);
    }

    #[test]
    fn reading_prefers_supplied_color() {
        let idx = AirQualityIndex::new("ind_cpcb", 75);
        assert_eq!(Reading::of(&idx).map(|r| r.color), Some(color_for(75.)));
        let idx = idx.with_color(SuppliedColor::new(1., 0.5, 0.));
        let r = Reading::of(&idx).unwrap();
        assert_eq!(r.color, RGB8::new(255, 128, 0));
        assert_eq!(r.category_label(Legend::Gauge), "Satisfactory");
        assert!((r.angle - 27.).abs() < 1e-9);
    }

    #[test]
    fn reading_without_value() {
        let mut idx = AirQualityIndex::new("uaqi", 0);
        idx.aqi = None;
        assert_eq!(Reading::of(&idx), None);
    }

    #[test]
    fn bands_are_stepped() {
        let bands = RGB8::bands();
        assert_eq!(bands.color_at(10.), Category::Good.swatch());
        assert_eq!(bands.color_at(99.), Category::Satisfactory.swatch());
        assert_eq!(bands.color_at(1000.), Category::Severe.swatch());
    }
}
