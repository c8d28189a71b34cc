//! Icon resources
//!
//! Screens refer to images by [`IconId`]; [`resolve`] turns an id into a
//! renderable [`Icon`]. Shapes are rasterised from implicit curves, so an
//! icon can be drawn at any scale without stored bitmaps.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Glyph for a covered cell
const FILL: char = '█';
/// Glyph for the avatar's backdrop inside its circular clip
const BACKDROP: char = '░';

/// Opaque image identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    /// Like icon on the start screen
    Heart,
    /// Profile picture, clipped to a circle
    Avatar,
}

/// A resolved, renderable image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    id: IconId,
    /// Size in cells at scale 1.0. Cells are about twice as tall as wide.
    base_width: u16,
    base_height: u16,
}

/// Resolve an identifier to its image
pub fn resolve(id: IconId) -> Icon {
    match id {
        IconId::Heart => Icon {
            id,
            base_width: 14,
            base_height: 7,
        },
        IconId::Avatar => Icon {
            id,
            base_width: 20,
            base_height: 10,
        },
    }
}

impl Icon {
    pub fn id(&self) -> IconId {
        self.id
    }

    /// Cell size at `scale`
    pub fn size_at(&self, scale: f32) -> (u16, u16) {
        let scale = scale.max(0.0);
        let w = (self.base_width as f32 * scale).round() as u16;
        let h = (self.base_height as f32 * scale).round() as u16;
        (w.max(1), h.max(1))
    }

    /// Rasterise into rows of glyphs; spaces are transparent
    pub fn raster(&self, scale: f32) -> Vec<String> {
        let (width, height) = self.size_at(scale);
        (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        // Cell centre in [-1, 1]^2, y pointing up. Mirrored
                        // columns get exactly negated x.
                        let x = (2 * col as i32 + 1 - width as i32) as f32 / width as f32;
                        let y = (height as i32 - 1 - 2 * row as i32) as f32 / height as f32;
                        self.glyph(x, y)
                    })
                    .collect()
            })
            .collect()
    }

    fn glyph(&self, x: f32, y: f32) -> char {
        match self.id {
            IconId::Heart => {
                // (x^2 + y^2 - 1)^3 - x^2 y^3 <= 0 over x in [-1.3, 1.3], y in [-1.1, 1.3]
                let x = x * 1.3;
                let y = 0.1 + y * 1.2;
                let a = x * x + y * y - 1.0;
                if a * a * a - x * x * y * y * y <= 0.0 {
                    FILL
                } else {
                    ' '
                }
            }
            IconId::Avatar => {
                if x * x + y * y > 1.0 {
                    return ' ';
                }
                let head = x * x + (y - 0.3) * (y - 0.3) <= 0.12;
                let shoulders = y < -0.35 && x * x + (y + 1.0) * (y + 1.0) <= 0.45;
                if head || shoulders {
                    FILL
                } else {
                    BACKDROP
                }
            }
        }
    }

    /// Widget drawing this icon centred in its area
    pub fn view(&self, scale: f32, style: Style) -> IconView {
        IconView {
            icon: *self,
            scale,
            style,
        }
    }
}

/// Place a `width` x `height` box at the centre of `area`, clipped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// An icon drawn at a given scale and tint
#[derive(Debug, Clone, Copy)]
pub struct IconView {
    icon: Icon,
    scale: f32,
    style: Style,
}

impl IconView {
    /// The cells this view covers when rendered into `area`
    pub fn footprint(&self, area: Rect) -> Rect {
        let (w, h) = self.icon.size_at(self.scale);
        centered(area, w, h)
    }
}

impl Widget for IconView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let target = self.footprint(area);
        let (full_w, full_h) = self.icon.size_at(self.scale);
        // Crop evenly when the area is smaller than the icon
        let skip_x = ((full_w - target.width) / 2) as usize;
        let skip_y = ((full_h - target.height) / 2) as usize;

        let rows = self.icon.raster(self.scale);
        for (dy, line) in rows.iter().skip(skip_y).take(target.height as usize).enumerate() {
            for (dx, glyph) in line
                .chars()
                .skip(skip_x)
                .take(target.width as usize)
                .enumerate()
            {
                if glyph == ' ' {
                    continue;
                }
                buf.get_mut(target.x + dx as u16, target.y + dy as u16)
                    .set_char(glyph)
                    .set_style(self.style);
            }
        }
    }
}
