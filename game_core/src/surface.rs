//! Rendering abstraction over a pixel surface
//!
//! Callers describe what to draw in logical coordinates with [`Vec2`] and
//! [`Color`]; implementations own the pixels. Nothing is retained between
//! calls apart from the single click handler.

use crate::{Color, Vec2};

/// Callback receiving a click position in logical coordinates
pub type ClickHandler = Box<dyn FnMut(Vec2)>;

/// Whether a circle is filled or outlined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillMode {
    #[default]
    Fill,
    Stroke,
}

/// How a rectangle is anchored at its point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RectPosition {
    /// Point is the top-left corner
    #[default]
    Origin,
    /// Point is the center
    Centered,
}

/// Where the draw position sits relative to the text's bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    TopLeft,
    BaselineLeft,
    TopRight,
    BaselineRight,
    Center,
}

/// Measured extent of a run of text, in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl TextMetrics {
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

impl TextAnchor {
    /// Offset to add to the requested position to get the baseline-left
    /// origin the backend draws from
    pub fn offset(self, metrics: TextMetrics) -> Vec2 {
        match self {
            TextAnchor::BaselineLeft => Vec2::ZERO,
            TextAnchor::TopLeft => Vec2::new(0.0, metrics.ascent),
            TextAnchor::TopRight => Vec2::new(-metrics.width, metrics.ascent),
            TextAnchor::BaselineRight => Vec2::new(-metrics.width, 0.0),
            TextAnchor::Center => Vec2::new(
                -metrics.width / 2.0,
                -metrics.height() / 2.0 + metrics.ascent,
            ),
        }
    }
}

/// Per-call text settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub opacity: f64, // Applies to this call only
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            anchor: TextAnchor::TopLeft,
            opacity: 1.0,
        }
    }
}

impl TextStyle {
    pub fn new(font_size: f64, anchor: TextAnchor) -> Self {
        Self {
            font_size,
            anchor,
            ..Self::default()
        }
    }

    pub fn centered(font_size: f64) -> Self {
        Self::new(font_size, TextAnchor::Center)
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// CSS font shorthand for this size
    pub fn font(&self) -> String {
        format!("{}px Arial", self.font_size)
    }
}

/// Translate a host click position into the surface's logical space
///
/// `surface_origin` is the surface's top-left corner in the same host
/// coordinates as `client`.
pub fn client_to_logical(client: Vec2, surface_origin: Vec2) -> Vec2 {
    client - surface_origin
}

/// A 2D drawing target in logical (density independent) coordinates
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Fill the whole logical area
    fn clear(&mut self, color: &Color);

    fn draw_circle(&mut self, origin: Vec2, radius: f64, color: &Color, mode: FillMode);

    fn draw_rect(
        &mut self,
        point: Vec2,
        width: f64,
        height: f64,
        color: &Color,
        position: RectPosition,
    );

    /// One logical pixel at `point`
    fn draw_point(&mut self, point: Vec2, color: &Color);

    fn draw_text(&mut self, text: &str, color: &Color, position: Vec2, style: TextStyle);

    /// Install the click handler, replacing any previous one
    fn set_click_handler(&mut self, handler: ClickHandler);

    fn midpoint(&self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Radius of the largest circle that fits inside the surface
    fn inscribed_radius(&self) -> f64 {
        self.width().min(self.height()) / 2.0
    }

    /// Half of the diagonal
    fn circumscribed_radius(&self) -> f64 {
        self.midpoint().length()
    }
}
