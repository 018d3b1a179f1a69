//! Text rendering with the built-in font
//!
//! Characters are drawn stroke by stroke through a [`Canvas`]. Strings are
//! laid out one cell per byte, advancing a fixed 6 pixels (5 pixel cell plus
//! 1 pixel gap) regardless of glyph shape. Bytes of a multi-byte UTF-8
//! sequence each get their own cell and draw the unknown box. There is no
//! wrapping; multi-line layout is up to the caller.

use core::fmt;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::glyph::{self, Stroke};

/// Horizontal advance per character in pixels
pub const CHAR_ADVANCE: u8 = 6;

/// X coordinate of the character at `index` in a string starting at `x`
fn column_x(x: u8, index: usize) -> u8 {
    x.wrapping_add((index as u8).wrapping_mul(CHAR_ADVANCE))
}

/// Draw one character with its bottom-left corner at `(x, y)`
pub fn render_char<C: Canvas + ?Sized>(canvas: &mut C, x: u8, y: u8, ch: char, color: Rgb) {
    for stroke in glyph::strokes(ch) {
        match stroke.offset(x, y) {
            Stroke::Line { x0, y0, x1, y1 } => canvas.draw_line(x0, y0, x1, y1, color),
            Stroke::Dot { x, y } => canvas.draw_dot(x, y, color),
            Stroke::Frame { x0, y0, x1, y1 } => {
                canvas.draw_rectangle(x0, y0, x1, y1, color, color, false)
            }
        }
    }
}

/// Draw a string with the first byte's bottom-left corner at `(x, y)`
pub fn render_string<C: Canvas + ?Sized>(canvas: &mut C, text: &str, x: u8, y: u8, color: Rgb) {
    for (i, byte) in text.bytes().enumerate() {
        render_char(canvas, column_x(x, i), y, char::from(byte), color);
    }
}

/// Text drawing for any [`Canvas`]
pub trait TextExt: Canvas {
    /// Draw one character with its bottom-left corner at `(x, y)`
    fn render_char(&mut self, x: u8, y: u8, ch: char, color: Rgb) {
        render_char(self, x, y, ch, color);
    }

    /// Draw a string with the first byte's bottom-left corner at `(x, y)`
    fn render_string(&mut self, text: &str, x: u8, y: u8, color: Rgb) {
        render_string(self, text, x, y, color);
    }
}

impl<C: Canvas + ?Sized> TextExt for C {}

/// Cursor for formatted text
///
/// Implements [`fmt::Write`] so `write!` can render straight to the
/// display without an intermediate buffer:
///
/// ```ignore
/// let mut cursor = TextCursor::new(&mut display, 0, 120, Rgb::WHITE);
/// write!(cursor, "T={}C", temperature)?;
/// ```
pub struct TextCursor<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    x: u8,
    y: u8,
    color: Rgb,
}

impl<'a, C: Canvas + ?Sized> TextCursor<'a, C> {
    /// Create a cursor at `(x, y)`
    pub fn new(canvas: &'a mut C, x: u8, y: u8, color: Rgb) -> Self {
        Self {
            canvas,
            x,
            y,
            color,
        }
    }

    /// Current position (bottom-left of the next character)
    pub fn position(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    /// Move the cursor
    pub fn move_to(&mut self, x: u8, y: u8) {
        self.x = x;
        self.y = y;
    }

    /// Change the text colour
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

impl<C: Canvas + ?Sized> fmt::Write for TextCursor<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            render_char(&mut *self.canvas, self.x, self.y, char::from(byte), self.color);
            self.x = self.x.wrapping_add(CHAR_ADVANCE);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Prim {
        Line(u8, u8, u8, u8, Rgb),
        Rect(u8, u8, u8, u8, Rgb, Rgb, bool),
    }

    /// Canvas that records primitives
    #[derive(Default)]
    struct Trace(Vec<Prim>);

    impl Canvas for Trace {
        fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, color: Rgb) {
            self.0.push(Prim::Line(x0, y0, x1, y1, color));
        }

        fn draw_rectangle(
            &mut self,
            x0: u8,
            y0: u8,
            x1: u8,
            y1: u8,
            line: Rgb,
            fill: Rgb,
            use_fill: bool,
        ) {
            self.0.push(Prim::Rect(x0, y0, x1, y1, line, fill, use_fill));
        }
    }

    const C: Rgb = Rgb::new(10, 20, 30);

    fn chars(x: u8, y: u8, text: &str) -> Vec<Prim> {
        let mut trace = Trace::default();
        trace.render_string(text, x, y, C);
        trace.0
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut trace = Trace::default();
        trace.render_char(10, 10, ' ', C);
        assert!(trace.0.is_empty());
    }

    #[test]
    fn test_unknown_draws_box() {
        let mut trace = Trace::default();
        trace.render_char(20, 30, '`', C);
        assert_eq!(
            trace.0,
            vec![
                Prim::Line(20, 30, 20, 36, C),
                Prim::Line(21, 30, 23, 30, C),
                Prim::Line(21, 36, 23, 36, C),
                Prim::Line(24, 30, 24, 36, C),
            ]
        );
    }

    #[test]
    fn test_dot_is_degenerate_line() {
        let mut trace = Trace::default();
        trace.render_char(50, 60, '.', C);
        assert_eq!(trace.0, vec![Prim::Line(52, 60, 52, 60, C)]);
    }

    #[test]
    fn test_percent_draws_unfilled_frames() {
        let mut trace = Trace::default();
        trace.render_char(0, 0, '%', C);
        assert_eq!(
            trace.0,
            vec![
                Prim::Line(0, 1, 4, 5, C),
                Prim::Rect(0, 5, 1, 6, C, C, false),
                Prim::Rect(3, 0, 4, 1, C, C, false),
            ]
        );
    }

    #[test]
    fn test_string_is_chars_at_six_pixel_stride() {
        let mut expected = Trace::default();
        expected.render_char(7, 9, 'A', C);
        expected.render_char(13, 9, 'B', C);

        assert_eq!(chars(7, 9, "AB"), expected.0);
    }

    #[test]
    fn test_string_lays_out_one_cell_per_byte() {
        let mut expected = Trace::default();
        expected.render_char(0, 0, '\u{80}', C);
        expected.render_char(6, 0, '\u{80}', C);
        expected.render_char(12, 0, 'I', C);

        let drawn = chars(0, 0, "éI");
        assert_eq!(drawn.len(), 9);
        assert_eq!(drawn[8], Prim::Line(14, 0, 14, 6, C));
        assert_eq!(drawn, expected.0);
    }

    #[test]
    fn test_cursor_lays_out_one_cell_per_byte() {
        let mut trace = Trace::default();
        {
            let mut cursor = TextCursor::new(&mut trace, 0, 0, C);
            cursor.write_str("éI").unwrap();
            assert_eq!(cursor.position(), (3 * CHAR_ADVANCE, 0));
        }

        assert_eq!(trace.0, chars(0, 0, "éI"));
    }

    #[test]
    fn test_string_x_wraps() {
        let mut expected = Trace::default();
        expected.render_char(250, 0, 'I', C);
        expected.render_char(0, 0, 'I', C);

        assert_eq!(chars(250, 0, "II"), expected.0);
    }

    #[test]
    fn test_empty_string() {
        assert!(chars(0, 0, "").is_empty());
    }

    #[test]
    fn test_cursor_matches_render_string() {
        let mut trace = Trace::default();
        {
            let mut cursor = TextCursor::new(&mut trace, 4, 100, C);
            write!(cursor, "T={}", 42).unwrap();
            assert_eq!(cursor.position(), (4 + 4 * CHAR_ADVANCE, 100));
        }

        assert_eq!(trace.0, chars(4, 100, "T=42"));
    }

    #[test]
    fn test_cursor_move_and_color() {
        let mut trace = Trace::default();
        {
            let mut cursor = TextCursor::new(&mut trace, 0, 0, C);
            cursor.move_to(30, 40);
            cursor.set_color(Rgb::RED);
            cursor.write_str("-").unwrap();
        }

        assert_eq!(trace.0, vec![Prim::Line(30, 43, 34, 43, Rgb::RED)]);
    }

    proptest! {
        #[test]
        fn prop_string_advances_six_per_char(text in "[ -~]{0,12}", x in any::<u8>(), y in any::<u8>()) {
            let mut expected = Trace::default();
            for (i, byte) in text.bytes().enumerate() {
                expected.render_char(x.wrapping_add(6 * i as u8), y, char::from(byte), C);
            }

            prop_assert_eq!(chars(x, y, &text), expected.0);
        }
    }
}
