//! 按字形切分与按宽度截断文本。
//!
//! 字形由一个基字符和附着在它后面的组合符号组成。截断只发生在字形边界上，
//! 带间距组合符号（`Mc`）的字形占 2 个宽度单位，其余字形占 1 个。
//!
//! ```
//! use glyphstring::GlyphString;
//!
//! let label = GlyphString::from("abcdefghijklmnop");
//! assert_eq!(label.truncate(6), "abcdef");
//! assert_eq!(label.ellipsize(6), "abcde…");
//! ```

pub use error::{ClassifierError, TableError};
pub use glyphstring::{
    tables, Category, CharacterClassifier, CodepointRangeTable, Glyph, GlyphIterator, GlyphString,
    GlyphWidth, Utf16Glyph, Utf16GlyphIterator, Utf16GlyphString,
};
pub use prelude::ELLIPSIS;

mod error;
mod glyphstring;
pub mod prelude;
