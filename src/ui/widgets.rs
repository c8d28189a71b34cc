//! Shared widgets and layout helpers
//!
//! Buttons, keyboard focus and mouse hit-testing used by every screen.

use super::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Height of a bordered button
pub const BUTTON_HEIGHT: u16 = 3;
/// Horizontal padding inside a button, per side
const BUTTON_PADDING: u16 = 2;

/// Keyboard focus over a fixed number of widgets, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    index: usize,
}

impl FocusRing {
    /// Focus starts on the widget at `index`
    pub fn new(len: usize, index: usize) -> Self {
        Self {
            len,
            index: if len == 0 { 0 } else { index.min(len - 1) },
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }

    /// Move focus down
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.index < self.len - 1 {
            self.index += 1;
        } else {
            self.index = 0;
        }
    }

    /// Move focus up
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.index > 0 {
            self.index -= 1;
        } else {
            self.index = self.len - 1;
        }
    }

    /// Focus a specific widget, e.g. the one just clicked
    pub fn focus(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Screen areas of clickable widgets as of the last render
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    areas: Vec<(Rect, usize)>,
}

impl HitAreas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame's layout
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn record(&mut self, area: Rect, widget: usize) {
        if area.width > 0 && area.height > 0 {
            self.areas.push((area, widget));
        }
    }

    /// Widget under a terminal cell; later records win on overlap
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        self.areas
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, widget)| *widget)
    }

    /// Area recorded for `widget`, if it was rendered
    pub fn area_of(&self, widget: usize) -> Option<Rect> {
        self.areas
            .iter()
            .find(|(_, w)| *w == widget)
            .map(|(area, _)| *area)
    }
}

/// Stack rows of the given heights in the vertical centre of `area`.
/// Rows that do not fit come back with zero height.
pub fn column(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let total: u16 = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));
    let mut y = area.y + area.height.saturating_sub(total) / 2;
    let bottom = area.y + area.height;

    heights
        .iter()
        .map(|h| {
            let height = (*h).min(bottom.saturating_sub(y));
            let row = Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            };
            y = y.saturating_add(height);
            row
        })
        .collect()
}

/// A bordered, centred push button
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Cells the button occupies inside a row of `area`
    pub fn footprint(&self, area: Rect) -> Rect {
        let width = self.label.chars().count() as u16 + 2 * BUTTON_PADDING + 2;
        super::resources::centered(area, width, BUTTON_HEIGHT)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let target = self.footprint(area);
        let (label_style, border_style) = if self.focused {
            (self.theme.label_focused(), self.theme.focus_border())
        } else {
            (self.theme.label(), self.theme.border())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(label_style);

        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(label_style)
            .block(block)
            .render(target, buf);
    }
}

/// Centred single-line text
pub fn text_line<'a>(text: &'a str, style: ratatui::style::Style) -> Paragraph<'a> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
}
