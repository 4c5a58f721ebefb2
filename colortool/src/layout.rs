use crate::{
    config::Config,
    font::{self, Cell},
};

/// Window geometry: the swatch on top, a text box with the caption below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub swatch_size: u32,
    text_box_height: u32,
    text_scale: u32,
}

impl Layout {
    pub fn new(config: &Config) -> Layout {
        Layout {
            width: config.swatch_size,
            height: config.swatch_size + config.text_box_height,
            swatch_size: config.swatch_size,
            text_box_height: config.text_box_height,
            text_scale: config.text_scale.max(1),
        }
    }

    /// Caption pixels, centered in the text box. Text wider than the window
    /// starts at the left edge and is clipped by the window.
    pub fn caption(&self, text: &str) -> Vec<Cell> {
        let text_height = font::GLYPH_HEIGHT * self.text_scale;
        let text_width = font::text_width(text, self.text_scale);
        let x = self.width.saturating_sub(text_width) / 2;
        let y = self.swatch_size + self.text_box_height.saturating_sub(text_height) / 2;
        font::rasterize(text, x as i32, y as i32, self.text_scale)
    }
}
