//! Built-in 5x7 vector font
//!
//! Each glyph is a list of strokes relative to the bottom-left corner of a
//! 5-wide, 7-tall cell (x 0..=4, y 0..=6, y growing upwards). Printable
//! ASCII from space to tilde is covered except the backtick; anything else
//! draws [`UNKNOWN`], a box outline filling the cell.

/// Cell width in pixels
pub const CELL_WIDTH: u8 = 5;
/// Cell height in pixels
pub const CELL_HEIGHT: u8 = 7;

/// One primitive of a glyph, in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stroke {
    /// Line between two points
    Line { x0: u8, y0: u8, x1: u8, y1: u8 },
    /// Single pixel
    Dot { x: u8, y: u8 },
    /// Unfilled rectangle between two opposite corners
    Frame { x0: u8, y0: u8, x1: u8, y1: u8 },
}

impl Stroke {
    /// Move the stroke by `(dx, dy)`, wrapping at 256
    pub fn offset(self, dx: u8, dy: u8) -> Self {
        match self {
            Stroke::Line { x0, y0, x1, y1 } => Stroke::Line {
                x0: x0.wrapping_add(dx),
                y0: y0.wrapping_add(dy),
                x1: x1.wrapping_add(dx),
                y1: y1.wrapping_add(dy),
            },
            Stroke::Dot { x, y } => Stroke::Dot {
                x: x.wrapping_add(dx),
                y: y.wrapping_add(dy),
            },
            Stroke::Frame { x0, y0, x1, y1 } => Stroke::Frame {
                x0: x0.wrapping_add(dx),
                y0: y0.wrapping_add(dy),
                x1: x1.wrapping_add(dx),
                y1: y1.wrapping_add(dy),
            },
        }
    }
}

const fn line(x0: u8, y0: u8, x1: u8, y1: u8) -> Stroke {
    Stroke::Line { x0, y0, x1, y1 }
}

const fn dot(x: u8, y: u8) -> Stroke {
    Stroke::Dot { x, y }
}

const fn frame(x0: u8, y0: u8, x1: u8, y1: u8) -> Stroke {
    Stroke::Frame { x0, y0, x1, y1 }
}

/// Glyph for characters outside the font
pub const UNKNOWN: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 0, 3, 0),
    line(1, 6, 3, 6),
    line(4, 0, 4, 6),
];

const SPACE: &[Stroke] = &[];
const EXCLAMATION: &[Stroke] = &[dot(2, 0), line(2, 2, 2, 6)];
const QUOTE: &[Stroke] = &[line(1, 5, 1, 6), line(3, 5, 3, 6)];
const HASH: &[Stroke] = &[
    line(0, 2, 4, 2),
    line(0, 4, 4, 4),
    line(1, 0, 1, 6),
    line(3, 0, 3, 6),
];
const DOLLAR: &[Stroke] = &[
    line(0, 1, 3, 1),
    dot(0, 4),
    line(1, 3, 3, 3),
    line(1, 5, 4, 5),
    line(2, 0, 2, 6),
    dot(4, 2),
];
const PERCENT: &[Stroke] = &[line(0, 1, 4, 5), frame(0, 5, 1, 6), frame(3, 0, 4, 1)];
const AMPERSAND: &[Stroke] = &[
    line(0, 1, 0, 2),
    line(0, 4, 0, 5),
    line(1, 0, 2, 0),
    line(1, 3, 4, 0),
    line(2, 4, 2, 5),
    dot(1, 6),
    dot(4, 2),
];
const APOSTROPHE: &[Stroke] = &[line(2, 5, 2, 6)];
const PAREN_LEFT: &[Stroke] = &[line(2, 1, 2, 5), dot(3, 0), dot(3, 6)];
const PAREN_RIGHT: &[Stroke] = &[dot(1, 0), dot(1, 6), line(2, 1, 2, 5)];
const ASTERISK: &[Stroke] = &[
    line(0, 1, 4, 5),
    line(0, 3, 4, 3),
    line(0, 5, 4, 1),
    line(2, 1, 2, 5),
];
const PLUS: &[Stroke] = &[line(0, 3, 4, 3), line(2, 1, 2, 5)];
const COMMA: &[Stroke] = &[dot(1, 0), line(2, 1, 2, 2)];
const MINUS: &[Stroke] = &[line(0, 3, 4, 3)];
const PERIOD: &[Stroke] = &[dot(2, 0)];
const SLASH: &[Stroke] = &[line(0, 0, 4, 6)];

const DIGIT_0: &[Stroke] = &[
    line(0, 1, 0, 5),
    line(1, 0, 3, 0),
    line(1, 2, 3, 4),
    line(1, 6, 3, 6),
    line(4, 1, 4, 5),
];
const DIGIT_1: &[Stroke] = &[line(0, 0, 4, 0), dot(0, 4), dot(1, 5), line(2, 1, 2, 6)];
const DIGIT_2: &[Stroke] = &[
    line(0, 0, 4, 0),
    dot(0, 1),
    dot(1, 2),
    line(2, 3, 3, 3),
    line(4, 4, 4, 5),
    line(1, 6, 3, 6),
    dot(0, 5),
];
const DIGIT_3: &[Stroke] = &[
    dot(0, 1),
    dot(0, 5),
    line(1, 0, 3, 0),
    line(2, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 1, 4, 2),
    line(4, 4, 4, 5),
];
const DIGIT_4: &[Stroke] = &[
    line(0, 2, 4, 2),
    dot(0, 3),
    dot(1, 4),
    dot(2, 5),
    line(3, 0, 3, 6),
];
const DIGIT_5: &[Stroke] = &[
    dot(0, 1),
    line(1, 0, 3, 0),
    line(4, 1, 4, 3),
    line(0, 4, 3, 4),
    dot(0, 5),
    line(0, 6, 4, 6),
];
const DIGIT_6: &[Stroke] = &[
    line(0, 1, 0, 5),
    line(1, 0, 3, 0),
    line(1, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 1, 4, 2),
    dot(4, 5),
];
const DIGIT_7: &[Stroke] = &[line(0, 6, 4, 6), line(3, 4, 4, 5), line(2, 0, 2, 3)];
const DIGIT_8: &[Stroke] = &[
    line(0, 1, 0, 2),
    line(0, 4, 0, 5),
    line(1, 0, 3, 0),
    line(1, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 1, 4, 2),
    line(4, 4, 4, 5),
];
const DIGIT_9: &[Stroke] = &[
    dot(0, 1),
    line(0, 4, 0, 5),
    line(1, 0, 3, 0),
    line(1, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 1, 4, 5),
];

const COLON: &[Stroke] = &[line(2, 1, 2, 2), line(2, 4, 2, 5)];
const SEMICOLON: &[Stroke] = &[line(2, 1, 2, 2), line(2, 4, 2, 5), dot(1, 0)];
const LESS: &[Stroke] = &[line(0, 3, 3, 6), line(1, 2, 3, 0)];
const EQUALS: &[Stroke] = &[line(0, 2, 4, 2), line(0, 4, 4, 4)];
const GREATER: &[Stroke] = &[line(1, 0, 4, 3), line(1, 6, 3, 4)];
const QUESTION: &[Stroke] = &[
    dot(0, 5),
    line(1, 6, 3, 6),
    dot(2, 0),
    line(2, 2, 4, 4),
    dot(4, 5),
];
const AT: &[Stroke] = &[
    line(0, 1, 0, 5),
    line(1, 0, 3, 0),
    line(1, 6, 3, 6),
    line(2, 2, 2, 4),
    dot(3, 4),
    dot(3, 2),
    line(4, 3, 4, 5),
];

const UPPER_A: &[Stroke] = &[
    line(0, 0, 0, 5),
    line(1, 2, 3, 2),
    line(1, 6, 3, 6),
    line(4, 0, 4, 5),
];
const UPPER_B: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 0, 3, 0),
    line(1, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 1, 4, 2),
    line(4, 4, 4, 5),
];
const UPPER_C: &[Stroke] = &[
    line(0, 1, 0, 5),
    line(1, 0, 3, 0),
    line(1, 6, 3, 6),
    dot(4, 1),
    dot(4, 5),
];
const UPPER_D: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 0, 3, 0),
    line(1, 6, 3, 6),
    line(4, 1, 4, 5),
];
const UPPER_E: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 0, 4, 0),
    line(1, 3, 3, 3),
    line(1, 6, 4, 6),
];
const UPPER_F: &[Stroke] = &[line(0, 0, 0, 6), line(1, 3, 3, 3), line(1, 6, 4, 6)];
const UPPER_G: &[Stroke] = &[
    line(0, 1, 0, 5),
    line(1, 0, 3, 0),
    line(2, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 1, 4, 3),
    dot(4, 5),
];
const UPPER_H: &[Stroke] = &[line(0, 0, 0, 6), line(1, 3, 3, 3), line(4, 0, 4, 6)];
const UPPER_I: &[Stroke] = &[line(2, 0, 2, 6)];
const UPPER_J: &[Stroke] = &[dot(0, 1), line(1, 0, 2, 0), line(3, 1, 3, 6)];
const UPPER_K: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 3, 2, 3),
    dot(3, 2),
    dot(3, 4),
    line(4, 0, 4, 1),
    line(4, 5, 4, 6),
];
const UPPER_L: &[Stroke] = &[line(0, 0, 0, 6), line(1, 0, 4, 0)];
const UPPER_M: &[Stroke] = &[
    line(0, 0, 0, 6),
    dot(1, 5),
    line(2, 3, 2, 4),
    dot(3, 5),
    line(4, 0, 4, 6),
];
const UPPER_N: &[Stroke] = &[line(0, 0, 0, 6), line(1, 4, 3, 2), line(4, 0, 4, 6)];
const UPPER_O: &[Stroke] = &[
    line(0, 1, 0, 5),
    line(1, 0, 3, 0),
    line(1, 6, 3, 6),
    line(4, 1, 4, 5),
];
const UPPER_P: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 4, 4, 5),
];
const UPPER_Q: &[Stroke] = &[
    line(0, 1, 0, 5),
    line(1, 0, 3, 0),
    line(1, 6, 3, 6),
    line(2, 2, 4, 0),
    line(4, 1, 4, 5),
];
const UPPER_R: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 3, 3, 3),
    line(1, 6, 3, 6),
    line(4, 4, 4, 5),
    line(4, 0, 4, 2),
];
const UPPER_S: &[Stroke] = &[
    line(0, 0, 3, 0),
    line(4, 1, 4, 2),
    line(1, 3, 3, 3),
    line(0, 4, 0, 5),
    line(1, 6, 4, 6),
];
const UPPER_T: &[Stroke] = &[line(2, 0, 2, 5), line(0, 6, 4, 6)];
const UPPER_U: &[Stroke] = &[line(0, 1, 0, 6), line(1, 0, 3, 0), line(4, 1, 4, 6)];
const UPPER_V: &[Stroke] = &[
    line(0, 2, 0, 6),
    line(1, 1, 2, 0),
    dot(3, 1),
    line(4, 2, 4, 6),
];
const UPPER_W: &[Stroke] = &[
    line(0, 0, 0, 6),
    dot(1, 1),
    line(2, 2, 2, 3),
    dot(3, 1),
    line(4, 0, 4, 6),
];
const UPPER_X: &[Stroke] = &[
    line(0, 0, 0, 1),
    line(0, 5, 0, 6),
    line(1, 2, 3, 4),
    dot(1, 4),
    dot(3, 2),
    line(4, 0, 4, 1),
    line(4, 5, 4, 6),
];
const UPPER_Y: &[Stroke] = &[
    line(0, 5, 0, 6),
    dot(1, 4),
    line(2, 0, 2, 3),
    dot(3, 4),
    line(4, 5, 4, 6),
];
const UPPER_Z: &[Stroke] = &[line(0, 0, 4, 0), line(0, 1, 4, 5), line(0, 6, 4, 6)];

const BRACKET_LEFT: &[Stroke] = &[line(2, 0, 2, 6), dot(3, 0), dot(3, 6)];
const BACKSLASH: &[Stroke] = &[line(0, 6, 4, 0)];
const BRACKET_RIGHT: &[Stroke] = &[dot(1, 0), dot(1, 6), line(2, 0, 2, 6)];
const CARET: &[Stroke] = &[line(0, 4, 2, 6), line(3, 5, 4, 4)];
const UNDERSCORE: &[Stroke] = &[line(0, 0, 4, 0)];

// Lowercase glyphs sit on the baseline with x-height 5 (y 0..=4)
const LOWER_A: &[Stroke] = &[
    line(0, 1, 0, 1),
    line(1, 0, 3, 0),
    line(1, 2, 3, 2),
    line(1, 4, 3, 4),
    line(4, 0, 4, 3),
];
const LOWER_B: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 0, 3, 0),
    line(1, 3, 3, 3),
    line(4, 1, 4, 2),
];
const LOWER_C: &[Stroke] = &[
    line(0, 1, 0, 3),
    line(1, 0, 3, 0),
    line(1, 4, 3, 4),
    dot(4, 1),
    dot(4, 3),
];
const LOWER_D: &[Stroke] = &[
    line(0, 1, 0, 2),
    line(1, 0, 3, 0),
    line(1, 3, 3, 3),
    line(4, 0, 4, 6),
];
const LOWER_E: &[Stroke] = &[
    line(0, 1, 0, 3),
    line(1, 0, 4, 0),
    line(1, 2, 4, 2),
    line(1, 4, 3, 4),
    dot(4, 3),
];
const LOWER_F: &[Stroke] = &[
    line(1, 0, 1, 5),
    line(0, 3, 2, 3),
    line(2, 6, 3, 6),
    dot(4, 5),
];
const LOWER_G: &[Stroke] = &[
    dot(0, 3),
    line(1, 0, 3, 0),
    line(1, 2, 3, 2),
    line(1, 4, 3, 4),
    line(4, 1, 4, 3),
];
const LOWER_H: &[Stroke] = &[line(0, 0, 0, 6), line(1, 3, 3, 3), line(4, 0, 4, 2)];
const LOWER_I: &[Stroke] = &[line(1, 0, 3, 0), dot(1, 4), line(2, 1, 2, 4), dot(2, 6)];
const LOWER_J: &[Stroke] = &[
    dot(0, 1),
    line(1, 0, 2, 0),
    dot(2, 4),
    line(3, 1, 3, 4),
    dot(3, 6),
];
const LOWER_K: &[Stroke] = &[
    line(0, 0, 0, 6),
    line(1, 2, 2, 2),
    dot(3, 1),
    dot(3, 3),
    dot(4, 0),
    dot(4, 4),
];
const LOWER_L: &[Stroke] = &[line(1, 0, 3, 0), dot(1, 6), line(2, 1, 2, 6)];
const LOWER_M: &[Stroke] = &[
    line(0, 0, 0, 3),
    line(0, 4, 3, 4),
    line(2, 0, 2, 3),
    line(4, 0, 4, 3),
];
const LOWER_N: &[Stroke] = &[line(0, 0, 0, 3), line(0, 4, 3, 4), line(4, 0, 4, 3)];
const LOWER_O: &[Stroke] = &[
    line(0, 1, 0, 3),
    line(1, 0, 3, 0),
    line(1, 4, 3, 4),
    line(4, 1, 4, 3),
];
const LOWER_P: &[Stroke] = &[
    line(1, 0, 1, 4),
    line(2, 2, 3, 2),
    line(2, 4, 3, 4),
    dot(4, 3),
];
const LOWER_Q: &[Stroke] = &[
    line(3, 0, 3, 4),
    line(1, 2, 2, 2),
    line(1, 4, 2, 4),
    dot(0, 3),
];
const LOWER_R: &[Stroke] = &[line(0, 0, 0, 4), dot(1, 3), line(2, 4, 4, 4)];
const LOWER_S: &[Stroke] = &[
    line(0, 0, 3, 0),
    dot(0, 3),
    line(1, 2, 3, 2),
    line(1, 4, 4, 4),
    dot(4, 1),
];
const LOWER_T: &[Stroke] = &[line(2, 1, 2, 6), line(1, 4, 3, 4), line(3, 0, 4, 0)];
const LOWER_U: &[Stroke] = &[
    line(0, 1, 0, 4),
    line(1, 0, 2, 0),
    dot(3, 1),
    line(4, 0, 4, 4),
];
const LOWER_V: &[Stroke] = &[
    line(0, 2, 0, 4),
    line(1, 1, 2, 0),
    dot(3, 1),
    line(4, 2, 4, 4),
];
const LOWER_W: &[Stroke] = &[
    line(0, 0, 0, 4),
    dot(1, 1),
    line(2, 0, 2, 2),
    dot(3, 1),
    line(4, 0, 4, 4),
];
const LOWER_X: &[Stroke] = &[
    dot(0, 0),
    dot(0, 4),
    line(1, 1, 3, 3),
    dot(1, 3),
    dot(3, 1),
    dot(4, 0),
    dot(4, 4),
];
const LOWER_Y: &[Stroke] = &[
    line(0, 0, 3, 0),
    line(0, 3, 0, 4),
    line(1, 2, 3, 2),
    line(4, 1, 4, 4),
];
const LOWER_Z: &[Stroke] = &[line(0, 0, 4, 0), line(1, 1, 3, 3), line(0, 4, 4, 4)];

const BRACE_LEFT: &[Stroke] = &[line(1, 3, 3, 6), line(1, 3, 3, 0)];
const BAR: &[Stroke] = &[line(2, 0, 2, 6)];
const BRACE_RIGHT: &[Stroke] = &[line(1, 0, 3, 3), line(1, 6, 3, 3)];
const TILDE: &[Stroke] = &[dot(0, 3), dot(1, 4), dot(2, 3), dot(3, 2), dot(4, 3)];

/// First character in the table
const FIRST: u32 = 0x20;
/// Last character in the table
const LAST: u32 = 0x7E;

/// Glyphs for 0x20..=0x7E, indexed by `code - 0x20`
static GLYPHS: [Option<&[Stroke]>; 95] = [
    Some(SPACE),         // ' '
    Some(EXCLAMATION),   // '!'
    Some(QUOTE),         // '"'
    Some(HASH),          // '#'
    Some(DOLLAR),        // '$'
    Some(PERCENT),       // '%'
    Some(AMPERSAND),     // '&'
    Some(APOSTROPHE),    // '\''
    Some(PAREN_LEFT),    // '('
    Some(PAREN_RIGHT),   // ')'
    Some(ASTERISK),      // '*'
    Some(PLUS),          // '+'
    Some(COMMA),         // ','
    Some(MINUS),         // '-'
    Some(PERIOD),        // '.'
    Some(SLASH),         // '/'
    Some(DIGIT_0),       // '0'
    Some(DIGIT_1),       // '1'
    Some(DIGIT_2),       // '2'
    Some(DIGIT_3),       // '3'
    Some(DIGIT_4),       // '4'
    Some(DIGIT_5),       // '5'
    Some(DIGIT_6),       // '6'
    Some(DIGIT_7),       // '7'
    Some(DIGIT_8),       // '8'
    Some(DIGIT_9),       // '9'
    Some(COLON),         // ':'
    Some(SEMICOLON),     // ';'
    Some(LESS),          // '<'
    Some(EQUALS),        // '='
    Some(GREATER),       // '>'
    Some(QUESTION),      // '?'
    Some(AT),            // '@'
    Some(UPPER_A),       // 'A'
    Some(UPPER_B),       // 'B'
    Some(UPPER_C),       // 'C'
    Some(UPPER_D),       // 'D'
    Some(UPPER_E),       // 'E'
    Some(UPPER_F),       // 'F'
    Some(UPPER_G),       // 'G'
    Some(UPPER_H),       // 'H'
    Some(UPPER_I),       // 'I'
    Some(UPPER_J),       // 'J'
    Some(UPPER_K),       // 'K'
    Some(UPPER_L),       // 'L'
    Some(UPPER_M),       // 'M'
    Some(UPPER_N),       // 'N'
    Some(UPPER_O),       // 'O'
    Some(UPPER_P),       // 'P'
    Some(UPPER_Q),       // 'Q'
    Some(UPPER_R),       // 'R'
    Some(UPPER_S),       // 'S'
    Some(UPPER_T),       // 'T'
    Some(UPPER_U),       // 'U'
    Some(UPPER_V),       // 'V'
    Some(UPPER_W),       // 'W'
    Some(UPPER_X),       // 'X'
    Some(UPPER_Y),       // 'Y'
    Some(UPPER_Z),       // 'Z'
    Some(BRACKET_LEFT),  // '['
    Some(BACKSLASH),     // '\\'
    Some(BRACKET_RIGHT), // ']'
    Some(CARET),         // '^'
    Some(UNDERSCORE),    // '_'
    None,                // '`'
    Some(LOWER_A),       // 'a'
    Some(LOWER_B),       // 'b'
    Some(LOWER_C),       // 'c'
    Some(LOWER_D),       // 'd'
    Some(LOWER_E),       // 'e'
    Some(LOWER_F),       // 'f'
    Some(LOWER_G),       // 'g'
    Some(LOWER_H),       // 'h'
    Some(LOWER_I),       // 'i'
    Some(LOWER_J),       // 'j'
    Some(LOWER_K),       // 'k'
    Some(LOWER_L),       // 'l'
    Some(LOWER_M),       // 'm'
    Some(LOWER_N),       // 'n'
    Some(LOWER_O),       // 'o'
    Some(LOWER_P),       // 'p'
    Some(LOWER_Q),       // 'q'
    Some(LOWER_R),       // 'r'
    Some(LOWER_S),       // 's'
    Some(LOWER_T),       // 't'
    Some(LOWER_U),       // 'u'
    Some(LOWER_V),       // 'v'
    Some(LOWER_W),       // 'w'
    Some(LOWER_X),       // 'x'
    Some(LOWER_Y),       // 'y'
    Some(LOWER_Z),       // 'z'
    Some(BRACE_LEFT),    // '{'
    Some(BAR),           // '|'
    Some(BRACE_RIGHT),   // '}'
    Some(TILDE),         // '~'
];

/// Strokes for `ch`, if the font has a glyph for it
pub fn lookup(ch: char) -> Option<&'static [Stroke]> {
    let code = ch as u32;
    if !(FIRST..=LAST).contains(&code) {
        return None;
    }
    GLYPHS.get((code - FIRST) as usize).copied().flatten()
}

/// Strokes for `ch`, falling back to [`UNKNOWN`]
pub fn strokes(ch: char) -> &'static [Stroke] {
    lookup(ch).unwrap_or(UNKNOWN)
}

/// Check if the font has a glyph for `ch`
pub fn is_supported(ch: char) -> bool {
    lookup(ch).is_some()
}
