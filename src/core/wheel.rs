//! Roulette wheel layout: equal wedges, their geometry and colors.

use crate::core::aggregator::{CategoryFilter, FlattenedDrink};
use crate::core::constants::{LABEL_RADIUS_RATIO, MAX_WEDGES};
use crate::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB wedge color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Wedge colors, assigned by index and repeated once exhausted.
pub const PALETTE: [Rgb; 20] = [
    Rgb(0xFF, 0x6B, 0x6B),
    Rgb(0x4E, 0xCD, 0xC4),
    Rgb(0x45, 0xB7, 0xD1),
    Rgb(0x96, 0xCE, 0xB4),
    Rgb(0xFF, 0xEA, 0xA7),
    Rgb(0xDD, 0xA0, 0xDD),
    Rgb(0x98, 0xD8, 0xC8),
    Rgb(0xF7, 0xDC, 0x6F),
    Rgb(0xBB, 0x8F, 0xCE),
    Rgb(0x85, 0xC1, 0xE9),
    Rgb(0xF8, 0xC4, 0x71),
    Rgb(0x82, 0xE0, 0xAA),
    Rgb(0xF1, 0x94, 0x8A),
    Rgb(0x85, 0xC1, 0xE9),
    Rgb(0xD2, 0xB4, 0xDE),
    Rgb(0xAE, 0xD6, 0xF1),
    Rgb(0xA3, 0xE4, 0xD7),
    Rgb(0xF9, 0xE7, 0x9F),
    Rgb(0xFA, 0xDB, 0xD8),
    Rgb(0xD5, 0xDB, 0xDB),
];

/// Color of wedge `index`
pub fn wedge_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `degrees`.
    ///
    /// Screen convention: 0° points right and angles grow clockwise because
    /// y grows downward.
    pub fn polar(self, radius: f64, degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: radius.mul_add(radians.cos(), self.x),
            y: radius.mul_add(radians.sin(), self.y),
        }
    }
}

/// Drawable geometry of one wedge
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    pub index: usize,
    /// Screen angle where the wedge starts, wedge 0 starting at -90° (top)
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub arc_start: Point,
    pub arc_end: Point,
    pub label_anchor: Point,
    pub large_arc: bool,
    pub color: Rgb,
}

impl Wedge {
    pub fn mid_degrees(&self) -> f64 {
        (self.start_degrees + self.end_degrees) / 2.0
    }

    /// SVG path data for a pie slice centred on `center`
    pub fn svg_path(&self, center: Point, radius: f64) -> String {
        format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            center.x,
            center.y,
            self.arc_start.x,
            self.arc_start.y,
            radius,
            radius,
            u8::from(self.large_arc),
            self.arc_end.x,
            self.arc_end.y
        )
    }
}

/// The drinks on the wheel and the angle each wedge covers
#[derive(Clone, Debug, PartialEq)]
pub struct WedgeSet {
    items: Vec<FlattenedDrink>,
    angle_per_wedge: f64,
}

impl WedgeSet {
    /// Build a wheel from a filtered selection using the default wedge limit
    pub fn build(drinks: &[FlattenedDrink]) -> Result<Self> {
        Self::build_with_limit(drinks, MAX_WEDGES, &CategoryFilter::All)
    }

    /// Build a wheel from at most `max_wedges` drinks selected by `filter`.
    ///
    /// Longer selections keep their first `max_wedges` entries in order.
    pub fn build_with_limit(
        drinks: &[FlattenedDrink],
        max_wedges: usize,
        filter: &CategoryFilter,
    ) -> Result<Self> {
        let count = drinks.len().min(max_wedges.max(1));
        if count == 0 {
            return Err(MenuError::empty_selection(filter.to_string()));
        }

        Ok(Self {
            items: drinks[..count].to_vec(),
            angle_per_wedge: 360.0 / count as f64,
        })
    }

    pub fn items(&self) -> &[FlattenedDrink] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn angle_per_wedge(&self) -> f64 {
        self.angle_per_wedge
    }

    pub fn get(&self, index: usize) -> Option<&FlattenedDrink> {
        self.items.get(index)
    }

    /// Wedge angular interval `[i*angle, (i+1)*angle)` clockwise from the pointer
    pub fn wedge_span(&self, index: usize) -> (f64, f64) {
        let start = index as f64 * self.angle_per_wedge;
        (start, start + self.angle_per_wedge)
    }

    /// Geometry of every wedge on a wheel of `radius` centred on `center`
    pub fn geometry(&self, center: Point, radius: f64) -> Vec<Wedge> {
        (0..self.len())
            .map(|index| {
                let (start, end) = self.wedge_span(index);
                let start_degrees = start - 90.0;
                let end_degrees = end - 90.0;
                let mid = (start_degrees + end_degrees) / 2.0;

                Wedge {
                    index,
                    start_degrees,
                    end_degrees,
                    arc_start: center.polar(radius, start_degrees),
                    arc_end: center.polar(radius, end_degrees),
                    label_anchor: center.polar(radius * LABEL_RADIUS_RATIO, mid),
                    large_arc: self.angle_per_wedge > 180.0,
                    color: wedge_color(index),
                }
            })
            .collect()
    }

    /// Index of the wedge under the pointer when the wheel rests at
    /// `rotation_degrees` (clockwise).
    pub fn wedge_at_pointer(&self, rotation_degrees: f64) -> usize {
        // Wheel-space angle currently under the pointer
        let under_pointer = (-rotation_degrees).rem_euclid(360.0);
        let index = ((under_pointer + 1e-9) / self.angle_per_wedge).floor() as usize;
        index % self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    fn drinks(count: usize) -> Vec<FlattenedDrink> {
        (0..count)
            .map(|i| FlattenedDrink {
                item: Item {
                    name: format!("Drink {i}"),
                    description: String::new(),
                    image: String::new(),
                    tags: None,
                },
                category_name: "Coffee".into(),
                category_id: "coffee".into(),
                subcategory_name: None,
                subcategory_id: None,
            })
            .collect()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_wedges_cover_full_circle() {
        for count in 1..=8 {
            let wheel = WedgeSet::build(&drinks(count)).unwrap();
            assert_close(wheel.angle_per_wedge() * wheel.len() as f64, 360.0);
            assert_close(wheel.wedge_span(count - 1).1, 360.0);
        }
    }

    #[test]
    fn test_empty_selection_is_error() {
        assert!(matches!(
            WedgeSet::build(&[]),
            Err(MenuError::EmptySelection { .. })
        ));
    }

    #[test]
    fn test_empty_selection_names_filter() {
        let err = WedgeSet::build_with_limit(&[], 8, &"juice".into()).unwrap_err();
        assert!(matches!(&err, MenuError::EmptySelection { filter } if filter == "juice"));
        assert_eq!(err.to_string(), "No drinks match filter 'juice'");
    }

    #[test]
    fn test_truncates_to_first_eight() {
        let input = drinks(10);
        let wheel = WedgeSet::build(&input).unwrap();

        assert_eq!(wheel.len(), 8);
        assert_eq!(wheel.items(), &input[..8]);
        assert_close(wheel.angle_per_wedge(), 45.0);
    }

    #[test]
    fn test_custom_limit() {
        let wheel = WedgeSet::build_with_limit(&drinks(5), 3, &CategoryFilter::All).unwrap();
        assert_eq!(wheel.len(), 3);
        assert_close(wheel.angle_per_wedge(), 120.0);
    }

    #[test]
    fn test_geometry_starts_at_top_and_runs_clockwise() {
        let wheel = WedgeSet::build(&drinks(4)).unwrap();
        let center = Point::new(150.0, 150.0);
        let wedges = wheel.geometry(center, 140.0);

        // Wedge 0 starts straight up
        assert_close(wedges[0].start_degrees, -90.0);
        assert_close(wedges[0].arc_start.x, 150.0);
        assert_close(wedges[0].arc_start.y, 10.0);
        // ...and ends at 3 o'clock
        assert_close(wedges[0].arc_end.x, 290.0);
        assert_close(wedges[0].arc_end.y, 150.0);

        // Label at 65% radius along the mid-angle (-45°)
        let expected = center.polar(140.0 * 0.65, -45.0);
        assert_close(wedges[0].label_anchor.x, expected.x);
        assert_close(wedges[0].label_anchor.y, expected.y);
        assert!(wedges[0].label_anchor.x > 150.0 && wedges[0].label_anchor.y < 150.0);

        assert!(wedges.iter().all(|w| !w.large_arc));
        for pair in wedges.windows(2) {
            assert_close(pair[0].end_degrees, pair[1].start_degrees);
        }
    }

    #[test]
    fn test_single_wedge_uses_large_arc() {
        let wheel = WedgeSet::build(&drinks(1)).unwrap();
        let wedge = &wheel.geometry(Point::new(0.0, 0.0), 1.0)[0];
        assert!(wedge.large_arc);
        assert!(wedge.svg_path(Point::new(0.0, 0.0), 1.0).contains(" 0 1 1 "));
    }

    #[test]
    fn test_palette_repeats_by_index() {
        assert_eq!(wedge_color(0), Rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(wedge_color(0).to_hex(), "#FF6B6B");
        assert_eq!(wedge_color(20), wedge_color(0));
        assert_eq!(wedge_color(23), wedge_color(3));

        let wheel = WedgeSet::build(&drinks(8)).unwrap();
        let colors: Vec<Rgb> = wheel
            .geometry(Point::new(0.0, 0.0), 1.0)
            .iter()
            .map(|w| w.color)
            .collect();
        assert_eq!(colors.as_slice(), &PALETTE[..8]);
    }

    #[test]
    fn test_wedge_at_pointer() {
        let wheel = WedgeSet::build(&drinks(5)).unwrap();

        assert_eq!(wheel.wedge_at_pointer(0.0), 0);
        for index in 0..5 {
            for turns in 4..=6 {
                let rotation = 360.0 * turns as f64 - index as f64 * 72.0;
                assert_eq!(wheel.wedge_at_pointer(rotation), index);
            }
        }
        // A little past the boundary still reads the same wedge
        assert_eq!(wheel.wedge_at_pointer(-72.0 - 10.0), 1);
    }
}
