use rand::seq::SliceRandom;
use rand::Rng;
use ratatui::style::Color;

/// Fallback palette when the configured colors cannot be parsed
const FALLBACK_COLORS: [Color; 3] = [
    Color::Rgb(0x94, 0x00, 0xD3),
    Color::Rgb(0xFF, 0x14, 0x93),
    Color::Rgb(0x00, 0x94, 0xD3),
];

/// Background colors cycled on each swipe
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from configured hex strings, skipping entries that
    /// fail to parse. An empty result falls back to the built-in palette.
    pub fn from_config(hex_colors: &[String]) -> Self {
        let mut colors: Vec<Color> = hex_colors
            .iter()
            .filter_map(|hex| match parse_hex_color(hex) {
                Some(color) => Some(color),
                None => {
                    tracing::warn!(color = %hex, "ignoring unparseable palette color");
                    None
                }
            })
            .collect();

        if colors.is_empty() {
            colors = FALLBACK_COLORS.to_vec();
        }

        Self { colors }
    }

    /// Randomize the color order once at startup
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.colors.shuffle(rng);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

/// Parse a "#RRGGBB" or "RRGGBB" hex string
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#9400D3"), Some(Color::Rgb(0x94, 0x00, 0xD3)));
        assert_eq!(parse_hex_color("ff1493"), Some(Color::Rgb(0xFF, 0x14, 0x93)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("not a color"), None);
    }

    #[test]
    fn test_invalid_entries_fall_back() {
        let palette = Palette::from_config(&["nope".to_string()]);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_color_wraps_by_index() {
        let palette = Palette::from_config(&[
            "#9400D3".to_string(),
            "#FF1493".to_string(),
        ]);
        assert_eq!(palette.color(0), palette.color(2));
    }
}
