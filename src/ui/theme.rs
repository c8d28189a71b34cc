//! Theme provider
//!
//! Named colour and typography tokens. Screens only ever ask for a token,
//! never for a literal colour.

use crate::animation::Lerp;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const GRAY: Rgb = Rgb(0x88, 0x88, 0x88);
    pub const RED: Rgb = Rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb(0x00, 0xFF, 0x00);

    /// Composite this colour at `alpha` over an opaque `background`.
    /// Terminals have no per-cell alpha, so opacity becomes a blend.
    pub fn over(self, background: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let channel = |bg: u8, fg: u8| -> u8 {
            let v = bg as f32 + (fg as f32 - bg as f32) * alpha;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            channel(background.0, self.0),
            channel(background.1, self.1),
            channel(background.2, self.2),
        )
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

/// Colour tweens run in Oklab so the midpoints keep their lightness
impl Lerp for Rgb {
    fn lerp(self, to: Self, t: f32) -> Self {
        if t <= 0.0 || self == to {
            return self;
        }
        if t >= 1.0 {
            return to;
        }
        let from = Oklab::from(self);
        let to = Oklab::from(to);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Oklab {
            l: mix(from.l, to.l),
            a: mix(from.a, to.a),
            b: mix(from.b, to.b),
        }
        .into()
    }
}

/// Perceptual colour coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
struct Oklab {
    l: f32,
    a: f32,
    b: f32,
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let v = if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<Rgb> for Oklab {
    fn from(rgb: Rgb) -> Self {
        let (r, g, b) = (
            srgb_to_linear(rgb.0),
            srgb_to_linear(rgb.1),
            srgb_to_linear(rgb.2),
        );
        let l = (0.412_221_47 * r + 0.536_332_55 * g + 0.051_445_99 * b).cbrt();
        let m = (0.211_903_5 * r + 0.680_699_5 * g + 0.107_396_96 * b).cbrt();
        let s = (0.088_302_46 * r + 0.281_718_85 * g + 0.629_978_7 * b).cbrt();
        Oklab {
            l: 0.210_454_26 * l + 0.793_617_8 * m - 0.004_072_047 * s,
            a: 1.977_998_5 * l - 2.428_592_2 * m + 0.450_593_7 * s,
            b: 0.025_904_037 * l + 0.782_771_77 * m - 0.808_675_77 * s,
        }
    }
}

impl From<Oklab> for Rgb {
    fn from(lab: Oklab) -> Self {
        let l = (lab.l + 0.396_337_78 * lab.a + 0.215_803_76 * lab.b).powi(3);
        let m = (lab.l - 0.105_561_346 * lab.a - 0.063_854_17 * lab.b).powi(3);
        let s = (lab.l - 0.089_484_18 * lab.a - 1.291_485_5 * lab.b).powi(3);
        Rgb(
            linear_to_srgb(4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s),
            linear_to_srgb(-1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s),
            linear_to_srgb(-0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s),
        )
    }
}

/// Available palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

/// Colour tokens plus typography derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: Rgb,
    pub on_background: Rgb,
    pub primary: Rgb,
    pub on_primary: Rgb,
    pub muted: Rgb,
    pub positive: Rgb,
    pub like_inactive: Rgb,
    pub like_active: Rgb,
    pub focus: Rgb,
}

impl Theme {
    pub fn new(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Rgb(0x1C, 0x1B, 0x1F),
            on_background: Rgb(0xE6, 0xE1, 0xE5),
            primary: Rgb(0xD0, 0xBC, 0xFF),
            on_primary: Rgb(0x38, 0x1E, 0x72),
            muted: Rgb::GRAY,
            positive: Rgb::GREEN,
            like_inactive: Rgb::GRAY,
            like_active: Rgb::RED,
            focus: Rgb(0xFF, 0xD8, 0x6B),
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Rgb(0xFF, 0xFB, 0xFE),
            on_background: Rgb(0x1C, 0x1B, 0x1F),
            primary: Rgb(0x66, 0x50, 0xA4),
            on_primary: Rgb::WHITE,
            muted: Rgb::GRAY,
            positive: Rgb::GREEN,
            like_inactive: Rgb::GRAY,
            like_active: Rgb::RED,
            focus: Rgb(0x7D, 0x52, 0x60),
        }
    }

    /// Full-surface container style
    pub fn surface(&self) -> Style {
        Style::default()
            .fg(self.on_background.to_color())
            .bg(self.background.to_color())
    }

    /// Screen headings
    pub fn headline(&self) -> Style {
        self.surface().add_modifier(Modifier::BOLD)
    }

    /// Prominent single-line values, e.g. a person's name
    pub fn title(&self) -> Style {
        self.surface()
    }

    pub fn body(&self) -> Style {
        self.surface()
    }

    /// Button labels
    pub fn label(&self) -> Style {
        Style::default()
            .fg(self.on_primary.to_color())
            .bg(self.primary.to_color())
    }

    /// Button label when the button has keyboard focus
    pub fn label_focused(&self) -> Style {
        self.label().add_modifier(Modifier::BOLD)
    }

    pub fn focus_border(&self) -> Style {
        Style::default()
            .fg(self.focus.to_color())
            .bg(self.background.to_color())
    }

    pub fn border(&self) -> Style {
        Style::default()
            .fg(self.primary.to_color())
            .bg(self.background.to_color())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_lerp_endpoints() {
        assert_eq!(Rgb::GRAY.lerp(Rgb::RED, 0.0), Rgb::GRAY);
        assert_eq!(Rgb::GRAY.lerp(Rgb::RED, 1.0), Rgb::RED);
    }

    #[test]
    fn test_rgb_lerp_is_perceptual() {
        // Oklab lightness 0.5 is darker than the sRGB channel midpoint
        let mid = Rgb::BLACK.lerp(Rgb::WHITE, 0.5);
        assert!(mid.0 > 0x58 && mid.0 < 0x6C, "got {:?}", mid);
        assert_eq!(mid.0, mid.1);
        assert_eq!(mid.1, mid.2);
    }

    #[test]
    fn test_oklab_round_trip() {
        for rgb in [Rgb::GRAY, Rgb::RED, Rgb::GREEN, Rgb::BLACK, Rgb::WHITE] {
            assert_eq!(Rgb::from(Oklab::from(rgb)), rgb);
        }
    }

    #[test]
    fn test_gray_to_red_midpoints() {
        let mut previous = Rgb::GRAY;
        for step in 1..10 {
            let tint = Rgb::GRAY.lerp(Rgb::RED, step as f32 / 10.0);
            assert!(tint.0 >= previous.0, "red channel dips at step {}", step);
            assert!(tint.1 <= previous.1 && tint.2 <= previous.2);
            previous = tint;
        }
        // Warmer than the per-channel blend halfway through
        let mid = Rgb::GRAY.lerp(Rgb::RED, 0.5);
        assert!(mid.0 > 0xC3 && mid.1 > 0x44, "got {:?}", mid);
    }

    #[test]
    fn test_alpha_over_background() {
        assert_eq!(Rgb::WHITE.over(Rgb::BLACK, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.over(Rgb::BLACK, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::WHITE.over(Rgb::BLACK, 0.6), Rgb(0x99, 0x99, 0x99));
    }

    #[test]
    fn test_like_tokens_match_across_themes() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_eq!(theme.like_inactive, Rgb::GRAY);
            assert_eq!(theme.like_active, Rgb::RED);
            assert_eq!(theme.positive, Rgb::GREEN);
        }
    }

    #[test]
    fn test_theme_from_kind() {
        assert_eq!(Theme::new(ThemeKind::Light).kind, ThemeKind::Light);
        assert_eq!(Theme::default().kind, ThemeKind::Dark);
    }

    #[test]
    fn test_headline_is_bold() {
        let theme = Theme::dark();
        assert!(theme.headline().add_modifier.contains(Modifier::BOLD));
        assert!(!theme.body().add_modifier.contains(Modifier::BOLD));
    }
}
