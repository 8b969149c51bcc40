use std::iter::FusedIterator;

use super::{Category, CharacterClassifier, Glyph};
use crate::prelude::*;

/// 可以按标量值逐个读取的码元序列
pub(super) trait CodeUnits {
    fn unit_len(&self) -> usize;

    /// 读取 `idx` 处的标量值，返回码点和它占用的码元数
    fn scalar_at(&self, idx: usize) -> Option<(u32, usize)>;
}

impl CodeUnits for str {
    fn unit_len(&self) -> usize {
        self.len()
    }

    fn scalar_at(&self, idx: ByteIdx) -> Option<(u32, usize)> {
        self.get(idx..)?
            .chars()
            .next()
            .map(|character| (u32::from(character), character.len_utf8()))
    }
}

impl CodeUnits for [u16] {
    fn unit_len(&self) -> usize {
        self.len()
    }

    fn scalar_at(&self, idx: UnitIdx) -> Option<(u32, usize)> {
        let high = u32::from(*self.get(idx)?);
        if (0xD800..=0xDBFF).contains(&high) {
            if let Some(&low) = self.get(idx.saturating_add(1)) {
                let low = u32::from(low);
                if (0xDC00..=0xDFFF).contains(&low) {
                    let codepoint = 0x1_0000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    return Some((codepoint, 2));
                }
            }
        }
        // 非代理码元，或落单的代理码元，都按一个独立的标量值处理
        Some((high, 1))
    }
}

/// 从 `start` 开始切出一个字形，返回 `(结束索引, 是否带间距组合符号)`
pub(super) fn scan_glyph<T: CodeUnits + ?Sized>(
    units: &T,
    start: usize,
    classifier: &CharacterClassifier,
) -> Option<(usize, bool)> {
    // 第一个标量值总是基字符，不检查它的分类
    let (_, base_len) = units.scalar_at(start)?;
    let mut end = start.saturating_add(base_len);
    let mut has_spacing_mark = false;

    while let Some((codepoint, len)) = units.scalar_at(end) {
        match classifier.classify(codepoint) {
            Category::NonspacingMark | Category::EnclosingMark => {}
            Category::SpacingMark if !has_spacing_mark => has_spacing_mark = true,
            // 基字符或第二个间距组合符号属于下一个字形
            Category::SpacingMark | Category::Base => break,
        }
        end = end.saturating_add(len);
    }

    debug_assert!(end <= units.unit_len());
    Some((end, has_spacing_mark))
}

/// 字形迭代器
///
/// # 字段
/// - `string`: 被迭代的源字符串。
/// - `classifier`: 用于判断组合符号的分类器。
/// - `current_idx`: 下一个字形的起始字节索引，只属于本迭代器。
#[derive(Clone)]
pub struct GlyphIterator<'a> {
    string: &'a str,
    classifier: &'a CharacterClassifier,
    current_idx: ByteIdx,
}

impl<'a> GlyphIterator<'a> {
    pub const fn new(string: &'a str, classifier: &'a CharacterClassifier) -> Self {
        Self {
            string,
            classifier,
            current_idx: 0,
        }
    }

    /// 是否还有字形
    pub const fn has_next(&self) -> bool {
        self.current_idx < self.string.len()
    }
}

impl<'a> Iterator for GlyphIterator<'a> {
    type Item = Glyph<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let start = self.current_idx;
        let (end, has_spacing_mark) = scan_glyph(self.string, start, self.classifier)?;
        self.current_idx = end;

        Some(Glyph {
            text: self.string.get(start..end)?,
            start,
            has_spacing_mark,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.string.len().saturating_sub(self.current_idx);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for GlyphIterator<'_> {}
