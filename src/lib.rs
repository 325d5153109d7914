//! Air quality index semantics shared by every dashboard surface.
//!
//! - [`select_preferred`] picks the index to display among those
//!   reported for a place and time (see [`Preference`]).
//! - [`Scale`] maps an AQI value to a [`Category`] and to a color
//!   interpolated along the six stops of the AQI scale.
//! - [`Reading`] combines both for a gauge, a map marker or a tooltip.
//!
//! Around these sit the typed API responses ([`conditions`]) and the
//! health recommendation tabs ([`health`]).

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGB16, RGBA8};

pub mod conditions;
mod error;
pub mod health;
mod index;
mod scale;

pub use error::{Error, Result};
pub use index::{select_preferred, AirQualityIndex, Preference, SuppliedColor,
                PRIMARY_REGIONAL_CODE, UNIVERSAL_CODE};
pub use scale::ty::{Category, ColorStop, Legend};
pub use scale::{category_for, clamp_aqi, color_for, needle_angle,
                Bands, LegendRow, Reading, Scale, MAX_AQI};

/// A range of colors over a numeric domain.
pub trait ColorRange<Color> {
    /// Smallest and largest values of the domain.
    fn bounds(&self) -> (f64, f64);

    /// Returns the color corresponding to `x`.  Values outside
    /// [`bounds`](ColorRange::bounds) get the color of the nearest
    /// bound.
    fn color_at(&self, x: f64) -> Color;

    /// Return an iterator yielding `n` evenly spaced values from `a`
    /// to `b` (both included) together with their colors.  It is not
    /// required that `a <= b`.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use aqi_scale::{ColorRange, ScaleColor};
    /// let legend: Vec<_> = RGB8::scale().samples(0., 500., 6).collect();
    /// assert_eq!(legend[1].0, 100.);
    /// ```
    fn samples(self, a: f64, b: f64, n: usize) -> Samples<Self, Color>
    where Self: Sized {
        let a = if a.is_finite() { a } else { self.bounds().0 };
        let b = if b.is_finite() { b } else { self.bounds().1 };
        if n == 0 {
            Samples { range: self, color: PhantomData,
                      a, b, last: 0, i: 1, j: 0 } // Empty iterator
        } else {
            Samples { range: self, color: PhantomData,
                      a, b, last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Samples spanning the whole domain.
    fn sweep(self, n: usize) -> Samples<Self, Color>
    where Self: Sized {
        let (a, b) = self.bounds();
        self.samples(a, b, n)
    }
}

/// An iterator yielding values of a [`ColorRange`] domain together
/// with their colors.
pub struct Samples<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64,
    b: f64,
    last: usize,
    i: usize, // first position to be consumed
    j: usize, // last position to be consumed
}

impl<R, Color> Samples<R, Color> where R: ColorRange<Color> {
    fn at(&self, k: usize) -> (f64, Color) {
        let x = {
            if k == 0 { self.a }
            else if k == self.last { self.b }
            else {
                let t = k as f64 / self.last as f64;
                self.a + t * (self.b - self.a)
            } };
        (x, self.range.color_at(x))
    }
}

impl<R, Color> Iterator for Samples<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.at(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.i > self.j { 0 } else { self.j - self.i + 1 };
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Samples<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Samples<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.at(self.j);
        if self.j == 0 { self.i = 1 } else { self.j -= 1 }
        Some(item)
    }
}

/// Color encodings the scale can produce.
pub trait ScaleColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Create an opaque color from 8 bit channels.
    fn from_rgb8(c: RGB8) -> Self {
        Self::from_rgba(RGBA { r: c.r as f64, g: c.g as f64, b: c.b as f64,
                               a: 255. })
    }

    /// The AQI color scale.
    ///
    /// ```
    /// use rgb::RGB8;
    /// use aqi_scale::ScaleColor;
    /// assert_eq!(RGB8::scale().color_for(0.), RGB8::new(64, 192, 87));
    /// ```
    #[inline]
    fn scale() -> Scale<Self> { Scale::new() }

    /// The AQI categories as flat color bands.
    #[inline]
    fn bands() -> Bands<Self> { Bands::new() }

    /// CSS functional notation, e.g. `rgb(64, 192, 87)`.
    fn css(&self) -> String {
        let RGBA { r, g, b, .. } = self.to_rgba();
        format!("rgb({}, {}, {})", r.round(), g.round(), b.round())
    }

    /// CSS hexadecimal notation, e.g. `#40c057`.
    fn hex(&self) -> String {
        let RGBA { r, g, b, .. } = self.to_rgba();
        let byte = |x: f64| x.round().clamp(0., 255.) as u8;
        format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA { r, g, b, a } = self.to_rgba();
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA { r: x, g: x, b: x, a })
    }
}

impl ScaleColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl ScaleColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8, g: c.g.round() as u8, b: c.b.round() as u8 }
    }

    #[inline]
    fn from_rgb8(c: RGB8) -> Self { c }
}

impl ScaleColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: c.r.round() as u16, g: c.g.round() as u16,
                b: c.b.round() as u16 }
    }
}

impl ScaleColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA { r: self.r as f64, g: self.g as f64, b: self.b as f64,
               a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8, g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_samples() {
        for (i, (x, c)) in RGB8::scale().samples(0., 500., 11).enumerate() {
            assert!((x - 50. * i as f64).abs() <= 1e-12,
                    "{} ≉ {}", x, 50. * i as f64);
            assert_eq!(RGB8::scale().color_at(x), c);
        }
    }

    #[test]
    fn samples_both_ends() {
        let mut s = RGB8::scale().samples(500., 0., 3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.next_back().map(|(x, _)| x), Some(0.));
        assert_eq!(s.next().map(|(x, _)| x), Some(500.));
        assert_eq!(s.next().map(|(x, _)| x), Some(250.));
        assert_eq!(s.len(), 0);
        assert!(s.next().is_none());
        assert!(s.next_back().is_none());
        assert_eq!(RGB8::scale().samples(0., 1., 0).count(), 0);
        assert_eq!(RGB8::scale().samples(7., 1., 1).collect::<Vec<_>>(),
                   vec![(7., RGB8::new(64, 192, 87))]);
    }

    #[test]
    fn infinite_bounds_use_domain() {
        let xs: Vec<f64> = RGB8::scale()
            .samples(f64::NEG_INFINITY, f64::INFINITY, 2)
            .map(|(x, _)| x).collect();
        assert_eq!(xs, vec![0., 500.]);
    }

    #[test]
    fn css_notations() {
        let c = RGB8::new(64, 192, 87);
        assert_eq!(c.css(), "rgb(64, 192, 87)");
        assert_eq!(c.hex(), "#40c057");
        let g = RGBA8::new(100, 100, 100, 7).to_gray();
        assert_eq!(g, RGBA8::new(100, 100, 100, 7));
    }

    #[test]
    fn encodings_agree() {
        let c8: RGB8 = RGB8::scale().color_for(75.);
        let c16: RGB16 = RGB16::scale().color_for(75.);
        let cf: RGBA<f64> = RGBA::<f64>::scale().color_for(75.);
        assert_eq!((c16.r, c16.g, c16.b), (c8.r as u16, c8.g as u16, c8.b as u16));
        assert_eq!(cf.hex(), c8.hex());
        assert_eq!(cf.a, 255.);
    }
}
