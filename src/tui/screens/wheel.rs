//! Roulette wheel drawn on a braille canvas.

use crate::core::wheel::{Point, Wedge, WedgeSet};
use crate::tui::theme::{THEME, wedge_color};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Span,
    widgets::{
        Widget,
        canvas::{Canvas, Painter, Shape},
    },
};

const RADIUS: f64 = 1.0;
const LABEL_WIDTH: usize = 10;

/// Filled pie slice, rotated by the wheel angle.
///
/// Canvas y grows upward, so screen angles are mirrored on the way in.
#[derive(Debug, Clone)]
pub struct WedgeShape {
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub radius: f64,
    pub color: Color,
}

impl WedgeShape {
    pub fn new(wedge: &Wedge, rotation: f64, radius: f64) -> Self {
        Self {
            start_degrees: wedge.start_degrees + rotation,
            end_degrees: wedge.end_degrees + rotation,
            radius,
            color: wedge_color(wedge.color),
        }
    }
}

impl Shape for WedgeShape {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let center = Point::new(0.0, 0.0);
        let steps = ((self.end_degrees - self.start_degrees) * 2.0).ceil().max(1.0) as usize;
        let rings = 24;

        for step in 0..=steps {
            let degrees = self.start_degrees
                + (self.end_degrees - self.start_degrees) * step as f64 / steps as f64;
            for ring in 1..=rings {
                let point = center.polar(self.radius * ring as f64 / rings as f64, degrees);
                if let Some((x, y)) = painter.get_point(point.x, -point.y) {
                    painter.paint(x, y, self.color);
                }
            }
        }
    }
}

/// Wheel with its labels and the fixed pointer at the top
pub struct WheelWidget<'a> {
    pub wheel: &'a WedgeSet,
    pub rotation: f64,
}

impl Widget for WheelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let center = Point::new(0.0, 0.0);
        let wedges = self.wheel.geometry(center, RADIUS);

        // Terminal cells are about twice as tall as wide
        let aspect = f64::from(area.width) / (f64::from(area.height.max(1)) * 2.0);
        let half_width = (RADIUS * 1.2 * aspect).max(RADIUS * 1.2);
        let half_height = (half_width / aspect).max(RADIUS * 1.2);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-half_height, half_height])
            .paint(|ctx| {
                for wedge in &wedges {
                    ctx.draw(&WedgeShape::new(wedge, self.rotation, RADIUS));
                }
                ctx.layer();

                for (wedge, drink) in wedges.iter().zip(self.wheel.items()) {
                    let anchor = center.polar(RADIUS * 0.65, wedge.mid_degrees() + self.rotation);
                    let label: String = drink.name().chars().take(LABEL_WIDTH).collect();
                    let offset = label.chars().count() as f64 / 2.0 * (2.0 * half_width)
                        / f64::from(area.width.max(1));
                    ctx.print(
                        anchor.x - offset,
                        -anchor.y,
                        Span::styled(label, THEME.normal.bg(Color::Black)),
                    );
                }

                ctx.print(0.0, RADIUS * 1.1, Span::styled("▼", THEME.pointer));
            })
            .render(area, buf);
    }
}
