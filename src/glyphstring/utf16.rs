use std::iter::FusedIterator;

use super::{glyphiterator::scan_glyph, truncation, CharacterClassifier, GlyphWidth};
use crate::prelude::*;

/// UTF-16 码元序列中的一个字形
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Utf16Glyph<'a> {
    pub units: &'a [u16],
    // 字形起始码元索引
    pub start: UnitIdx,
    pub has_spacing_mark: bool,
}

impl Utf16Glyph<'_> {
    pub const fn width(&self) -> GlyphWidth {
        GlyphWidth::from_spacing_mark(self.has_spacing_mark)
    }

    pub const fn end(&self) -> UnitIdx {
        self.start.saturating_add(self.units.len())
    }

    /// 转成 Rust 字符串，落单的代理码元替换为 U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.units)
    }
}

/// UTF-16 字形迭代器。
///
/// 高代理后紧跟低代理时合并为一个标量值；落单的代理码元按独立的基字符处理。
#[derive(Clone)]
pub struct Utf16GlyphIterator<'a> {
    units: &'a [u16],
    classifier: &'a CharacterClassifier,
    current_idx: UnitIdx,
}

impl<'a> Utf16GlyphIterator<'a> {
    pub const fn new(units: &'a [u16], classifier: &'a CharacterClassifier) -> Self {
        Self {
            units,
            classifier,
            current_idx: 0,
        }
    }

    pub const fn has_next(&self) -> bool {
        self.current_idx < self.units.len()
    }
}

impl<'a> Iterator for Utf16GlyphIterator<'a> {
    type Item = Utf16Glyph<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let start = self.current_idx;
        let (end, has_spacing_mark) = scan_glyph(self.units, start, self.classifier)?;
        self.current_idx = end;

        Some(Utf16Glyph {
            units: self.units.get(start..end)?,
            start,
            has_spacing_mark,
        })
    }
}

impl FusedIterator for Utf16GlyphIterator<'_> {}

/// 以 UTF-16 码元保存的字形字符串，语义与 [`GlyphString`](crate::GlyphString) 相同
#[derive(Clone, Debug)]
pub struct Utf16GlyphString<'c> {
    units: Vec<u16>,
    classifier: &'c CharacterClassifier,
}

impl<'c> Utf16GlyphString<'c> {
    pub fn with_classifier(units: &[u16], classifier: &'c CharacterClassifier) -> Self {
        Self {
            units: units.to_vec(),
            classifier,
        }
    }

    pub fn char_iterator(&self) -> Utf16GlyphIterator<'_> {
        Utf16GlyphIterator::new(&self.units, self.classifier)
    }

    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&[u16]),
    {
        self.char_iterator().for_each(|glyph| callback(glyph.units));
    }

    pub fn truncate(&self, max_units: Units) -> Vec<u16> {
        let fit = truncation::fit_prefix(self.widths(), max_units);
        self.units.get(..fit.end).unwrap_or_default().to_vec()
    }

    pub fn ellipsize(&self, max_units: Units) -> Vec<u16> {
        if max_units == 0 {
            return Vec::new();
        }
        match truncation::ellipsis_cut(self.widths(), max_units) {
            None => self.units.clone(),
            Some(end) => {
                let mut result = self.units.get(..end).unwrap_or_default().to_vec();
                // clippy::as_conversions: U+2026 在基本多文种平面内，只占一个码元
                #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
                result.push(ELLIPSIS as u16);
                result
            }
        }
    }

    pub fn width(&self) -> Units {
        self.char_iterator()
            .fold(0, |units, glyph| glyph.width().saturating_add(units))
    }

    pub fn glyph_count(&self) -> GlyphIdx {
        self.char_iterator().count()
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    fn widths(&self) -> impl Iterator<Item = (UnitIdx, GlyphWidth)> + Clone + '_ {
        self.char_iterator().map(|glyph| (glyph.end(), glyph.width()))
    }
}

impl Utf16GlyphString<'static> {
    pub fn from_utf16(units: &[u16]) -> Self {
        Self::with_classifier(units, CharacterClassifier::builtin())
    }
}

impl From<&str> for Utf16GlyphString<'static> {
    fn from(string: &str) -> Self {
        Self {
            units: string.encode_utf16().collect(),
            classifier: CharacterClassifier::builtin(),
        }
    }
}
