//! Drawing primitives
//!
//! The glyph renderer only needs lines, dots and rectangles. Anything that
//! can draw those implements [`Canvas`]; the SSD1353 driver is one, and tests
//! use a recorder.

use crate::color::Rgb;

/// Addressable width in pixels
pub const WIDTH: u8 = 160;
/// Addressable height in pixels
pub const HEIGHT: u8 = 128;

/// Surface that accepts primitive draw operations
///
/// Coordinates are passed through as-is. Implementations must not clip or
/// reorder corners; that is the controller's business.
pub trait Canvas {
    /// Draw a line from `(x0, y0)` to `(x1, y1)`
    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Rgb);

    /// Draw a single pixel
    ///
    /// A dot is a line whose end points coincide.
    fn draw_dot(&mut self, x: u8, y: u8, color: Rgb) {
        self.draw_line(x, y, x, y, color);
    }

    /// Draw a rectangle between two opposite corners
    ///
    /// The border uses `line`; when `use_fill` is set the interior is
    /// painted with `fill`.
    #[allow(clippy::too_many_arguments)]
    fn draw_rectangle(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        line: Rgb,
        fill: Rgb,
        use_fill: bool,
    );

    /// Fill the whole surface with one colour
    fn fill_screen(&mut self, color: Rgb) {
        self.draw_rectangle(0, 0, WIDTH - 1, HEIGHT - 1, color, color, true);
    }

    /// Fill the whole surface with black
    fn clear_screen(&mut self) {
        self.fill_screen(Rgb::BLACK);
    }
}
