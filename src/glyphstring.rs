use std::{
    fmt::{self, Display},
    ops::Deref,
};

use log::trace;

use crate::prelude::*;
pub use classifier::{tables, Category, CharacterClassifier, CodepointRangeTable};
pub use glyph::{Glyph, GlyphWidth};
pub use glyphiterator::GlyphIterator;
pub use utf16::{Utf16Glyph, Utf16GlyphIterator, Utf16GlyphString};

mod classifier;
mod glyph;
mod glyphiterator;
mod truncation;
mod utf16;

/// 按字形（基字符 + 组合符号）处理的字符串。
///
/// 截断和省略只在字形边界上进行，绝不会把组合符号和它的基字符拆开。
#[derive(Clone, Debug)]
pub struct GlyphString<'c> {
    string: String,
    classifier: &'c CharacterClassifier,
}

impl<'c> GlyphString<'c> {
    /// 使用指定的分类器创建
    pub fn with_classifier(string: &str, classifier: &'c CharacterClassifier) -> Self {
        Self {
            string: String::from(string),
            classifier,
        }
    }

    /// 返回一个新的、独立的字形迭代器
    pub fn char_iterator(&self) -> GlyphIterator<'_> {
        GlyphIterator::new(&self.string, self.classifier)
    }

    /// 按顺序对每个字形调用一次 `callback`
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&str),
    {
        self.char_iterator().for_each(|glyph| callback(glyph.text));
    }

    /// 截断到不超过 `max_units` 个宽度单位。
    ///
    /// 普通字形占 1 个单位，带间距组合符号的字形占 2 个单位。
    /// 第一个放不下的字形连同之后的所有字形都会被丢弃。
    pub fn truncate(&self, max_units: Units) -> String {
        let fit = truncation::fit_prefix(self.widths(), max_units);
        trace!(
            "truncate to {max_units} units keeps {} of {} bytes",
            fit.end,
            self.string.len()
        );
        self.string.get(..fit.end).unwrap_or_default().to_string()
    }

    /// 截断并在末尾追加 `…`，省略号占 1 个单位。
    ///
    /// 原文本身放得下时原样返回，不追加省略号。
    pub fn ellipsize(&self, max_units: Units) -> String {
        if max_units == 0 {
            return String::new();
        }
        match truncation::ellipsis_cut(self.widths(), max_units) {
            None => self.string.clone(),
            Some(end) => {
                trace!("ellipsize to {max_units} units cuts at byte {end}");
                let mut result = self.string.get(..end).unwrap_or_default().to_string();
                result.push(ELLIPSIS);
                result
            }
        }
    }

    /// 总宽度
    pub fn width(&self) -> Units {
        self.char_iterator()
            .fold(0, |units, glyph| glyph.width().saturating_add(units))
    }

    /// 字形个数
    pub fn glyph_count(&self) -> GlyphIdx {
        self.char_iterator().count()
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub const fn classifier(&self) -> &'c CharacterClassifier {
        self.classifier
    }

    fn widths(&self) -> impl Iterator<Item = (ByteIdx, GlyphWidth)> + Clone + '_ {
        self.char_iterator().map(|glyph| (glyph.end(), glyph.width()))
    }
}

impl From<&str> for GlyphString<'static> {
    fn from(string: &str) -> Self {
        Self::with_classifier(string, CharacterClassifier::builtin())
    }
}

impl From<String> for GlyphString<'static> {
    fn from(string: String) -> Self {
        Self {
            string,
            classifier: CharacterClassifier::builtin(),
        }
    }
}

impl Display for GlyphString<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.string)
    }
}

impl Deref for GlyphString<'_> {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.string
    }
}

impl<'a> IntoIterator for &'a GlyphString<'_> {
    type Item = Glyph<'a>;
    type IntoIter = GlyphIterator<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.char_iterator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_each_visits_glyphs_in_order() {
        let mut seen = Vec::new();
        GlyphString::from("aA\u{308}a").for_each(|glyph| seen.push(glyph.to_string()));
        assert_eq!(seen, vec!["a", "A\u{308}", "a"]);
    }

    #[test]
    fn for_each_on_empty_string_never_calls_back() {
        let mut calls = 0;
        GlyphString::from("").for_each(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn iterators_are_independent() {
        let glyph_string = GlyphString::from("abc");
        let mut first = glyph_string.char_iterator();
        first.next();
        first.next();
        let mut second = glyph_string.char_iterator();
        assert_eq!(second.next().map(|glyph| glyph.text), Some("a"));
        assert_eq!(first.next().map(|glyph| glyph.text), Some("c"));
    }

    #[test]
    fn truncate_keeps_whole_string_when_it_fits() {
        let glyph_string = GlyphString::from("abc");
        assert_eq!(glyph_string.truncate(3), "abc");
        assert_eq!(glyph_string.truncate(100), "abc");
        assert_eq!(glyph_string.truncate(0), "");
    }

    #[test]
    fn ellipsize_edge_budgets() {
        let glyph_string = GlyphString::from("abcdef");
        assert_eq!(glyph_string.ellipsize(0), "");
        assert_eq!(glyph_string.ellipsize(1), "\u{2026}");
        assert_eq!(glyph_string.ellipsize(2), "a\u{2026}");
        assert_eq!(glyph_string.ellipsize(5), "abcd\u{2026}");
        assert_eq!(glyph_string.ellipsize(6), "abcdef");
        assert_eq!(GlyphString::from("").ellipsize(3), "");
    }

    #[test]
    fn width_counts_spacing_marks_twice() {
        // ಭೆ ನಿ ಬೇ ನಿೇ
        let glyph_string = GlyphString::from("ಭೆನಿಬೇನಿೇ");
        assert_eq!(glyph_string.glyph_count(), 4);
        assert_eq!(glyph_string.width(), 6);
    }

    #[test]
    fn custom_classifier_changes_segmentation() {
        let classifier = CharacterClassifier::default();
        let glyph_string = GlyphString::with_classifier("aA\u{308}", &classifier);
        assert_eq!(glyph_string.glyph_count(), 3);
        assert_eq!(glyph_string.truncate(2), "aA");
    }

    #[test]
    fn derefs_and_displays_as_source_text() {
        let glyph_string = GlyphString::from(String::from("hello"));
        assert_eq!(glyph_string.len(), 5);
        assert_eq!(glyph_string.to_string(), "hello");
        assert_eq!(glyph_string.as_str(), "hello");
        let glyphs: Vec<&str> = (&glyph_string).into_iter().map(|glyph| glyph.text).collect();
        assert_eq!(glyphs, vec!["h", "e", "l", "l", "o"]);
    }
}
