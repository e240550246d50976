//! Wheel widget — rasterises the wheel's draw commands and blits them onto
//! terminal cells, two vertically stacked pixels per cell using `▀`.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
    widgets::Widget,
};

use crate::core::geometry::WheelGeometry;
use crate::core::render::{DrawCommand, PixelCanvas};
use crate::ui::theme::Theme;

pub struct WheelWidget<'a> {
    pub commands: &'a [DrawCommand],
    pub geometry: &'a WheelGeometry,
}

impl<'a> WheelWidget<'a> {
    /// Rasterise for an `area` of cells.
    pub fn rasterise(&self, area: Rect) -> PixelCanvas {
        let mut canvas = PixelCanvas::new(
            area.width as usize,
            area.height as usize * 2,
            self.geometry.width,
            self.geometry.height,
        );
        canvas.execute(self.commands);
        canvas
    }
}

impl<'a> Widget for WheelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let canvas = self.rasterise(area);
        let color = |x: usize, y: usize| canvas.pixel(x, y).map_or(Color::Reset, Theme::rgb);

        for row in 0..area.height {
            let yt = row as usize * 2;
            for col in 0..area.width {
                let fg = color(col as usize, yt);
                let bg = color(col as usize, yt + 1);
                if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                    cell.set_char('▀').set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}
