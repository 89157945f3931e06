//! Immutable RGB color with HSV conversion and a memoized hex form
//!
//! Channels are conventionally in `[0, 1]` but are never clamped on
//! construction; [`Color::clamp`] is the explicit opt-in.

use std::cell::OnceCell;
use std::fmt;

/// Luma weights used to project a color onto perceived brightness
const LUMA_WEIGHTS: (f64, f64, f64) = (0.299, 0.587, 0.114);

/// RGB color value
///
/// Every operation returns a new `Color`. The hex string is computed on the
/// first call to [`Color::hex_string`] and cached for the life of the value.
#[derive(Clone)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    hex: OnceCell<String>,
}

/// HSV triple with every component in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64, // [0, 1), not degrees
    pub saturation: f64,
    pub value: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            hex: OnceCell::new(),
        }
    }

    pub const fn grey(value: f64) -> Self {
        Self::new(value, value, value)
    }

    pub const fn white() -> Self {
        Self::grey(1.0)
    }

    pub const fn black() -> Self {
        Self::grey(0.0)
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Parse `#rgb`, `rgb`, `#rrggbb` or `rrggbb` (case insensitive)
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let (r, g, b) = match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
                (nibble(0)?, nibble(1)?, nibble(2)?)
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                (byte(0)?, byte(2)?, byte(4)?)
            }
            _ => return None,
        };

        Some(Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ))
    }

    /// Parse a hex color, falling back to black on malformed input
    pub fn from_hex_string(s: &str) -> Self {
        Self::parse_hex(s).unwrap_or_else(Self::black)
    }

    pub fn add(&self, other: &Color) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    pub fn sub(&self, other: &Color) -> Self {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// Divide every channel by `k`; dividing by zero yields black
    pub fn scale_div(&self, k: f64) -> Self {
        if k == 0.0 {
            Self::black()
        } else {
            Self::new(self.r / k, self.g / k, self.b / k)
        }
    }

    pub fn clamp(&self, min: f64, max: f64) -> Self {
        let c = |x: f64| x.min(max).max(min);
        Self::new(c(self.r), c(self.g), c(self.b))
    }

    /// Clamp every channel to `[0, 1]`
    pub fn clamp01(&self) -> Self {
        self.clamp(0.0, 1.0)
    }

    pub fn dot(&self, other: &Color) -> f64 {
        self.r * other.r + self.g * other.g + self.b * other.b
    }

    /// `self + (other - self) * t`; `t` is not clamped
    pub fn lerp(&self, other: &Color, t: f64) -> Self {
        self.add(&other.sub(self).scale(t))
    }

    pub fn greyscale_value(&self) -> f64 {
        let (r, g, b) = LUMA_WEIGHTS;
        self.dot(&Self::new(r, g, b))
    }

    pub fn greyscale(&self) -> Self {
        Self::grey(self.greyscale_value())
    }

    /// `#rrggbb` form, computed once per instance
    pub fn hex_string(&self) -> &str {
        self.hex.get_or_init(|| {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel_byte(self.r),
                channel_byte(self.g),
                channel_byte(self.b)
            )
        })
    }

    pub fn to_hsv(&self) -> Hsv {
        let Self { r, g, b, .. } = *self;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };
        // rem_euclid can round up to exactly 6 for tiny negative inputs
        let hue = if hue >= 1.0 { 0.0 } else { hue };

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            hue,
            saturation,
            value: max,
        }
    }

    /// Build a color from HSV; hue wraps into `[0, 1)`
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let c = value * saturation;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = value - c;

        let (r, g, b) = if h < 1.0 {
            (c, x, 0.0)
        } else if h < 2.0 {
            (x, c, 0.0)
        } else if h < 3.0 {
            (0.0, c, x)
        } else if h < 4.0 {
            (0.0, x, c)
        } else if h < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::new(r + m, g + m, b + m)
    }
}

fn channel_byte(c: f64) -> u8 {
    // `as` saturates, NaN maps to 0
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .finish()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex_string())
    }
}
