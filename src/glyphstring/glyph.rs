use std::fmt::{self, Display};

use crate::prelude::*;

/// 字形占用的宽度预算
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GlyphWidth {
    /// 基字符加任意个非间距符号
    Single,
    /// 附带了一个间距组合符号
    Double,
}

impl GlyphWidth {
    pub const fn from_spacing_mark(has_spacing_mark: bool) -> Self {
        if has_spacing_mark {
            Self::Double
        } else {
            Self::Single
        }
    }

    pub const fn saturating_add(self, other: Units) -> Units {
        match self {
            Self::Single => other.saturating_add(1),
            Self::Double => other.saturating_add(2),
        }
    }
}

impl From<GlyphWidth> for Units {
    fn from(width: GlyphWidth) -> Self {
        match width {
            GlyphWidth::Single => 1,
            GlyphWidth::Double => 2,
        }
    }
}

/// 一个字形：基字符及其后附着的组合符号。
///
/// `text` 直接借用源字符串，不做拷贝。
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Glyph<'a> {
    // 字形在源字符串中的原始内容
    pub text: &'a str,
    // 字形起始字节索引
    pub start: ByteIdx,
    // 是否附着了间距组合符号
    pub has_spacing_mark: bool,
}

impl Glyph<'_> {
    pub const fn width(&self) -> GlyphWidth {
        GlyphWidth::from_spacing_mark(self.has_spacing_mark)
    }

    /// 字形结束字节索引（不含）
    pub const fn end(&self) -> ByteIdx {
        self.start.saturating_add(self.text.len())
    }
}

impl Display for Glyph<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.text)
    }
}

impl PartialEq<&str> for Glyph<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
