use std::{borrow::Cow, cmp::Ordering};

use super::Category;
use crate::TableError;

/// Unicode 码点空间的上界
const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// 单一分类的码点区间表。
///
/// 区间为闭区间 `(start, end)`，按起点严格递增且互不重叠，
/// 构造时校验，之后只读。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodepointRangeTable {
    category: Category,
    ranges: Cow<'static, [(u32, u32)]>,
}

impl CodepointRangeTable {
    /// 校验并创建区间表
    pub fn new(
        category: Category,
        ranges: impl Into<Cow<'static, [(u32, u32)]>>,
    ) -> Result<Self, TableError> {
        let ranges = ranges.into();
        let mut previous_end: Option<u32> = None;
        for &(start, end) in ranges.iter() {
            if start > end {
                return Err(TableError::InvertedRange { category, start, end });
            }
            if end > MAX_CODEPOINT {
                return Err(TableError::OutOfRange { category, start, end });
            }
            if let Some(previous_end) = previous_end {
                if start <= previous_end {
                    return Err(TableError::Unsorted {
                        category,
                        start,
                        previous_end,
                    });
                }
            }
            previous_end = Some(end);
        }
        Ok(Self { category, ranges })
    }

    /// 空表，不包含任何码点
    pub const fn empty(category: Category) -> Self {
        Self {
            category,
            ranges: Cow::Borrowed(&[]),
        }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// 二分查找码点是否落在某个区间内
    pub fn contains(&self, codepoint: u32) -> bool {
        self.ranges
            .binary_search_by(|&(start, end)| {
                if end < codepoint {
                    Ordering::Less
                } else if start > codepoint {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_codepoints_at_range_edges() {
        let table =
            CodepointRangeTable::new(Category::NonspacingMark, vec![(0x300, 0x36F), (0x483, 0x487)])
                .unwrap();
        assert!(table.contains(0x300));
        assert!(table.contains(0x36F));
        assert!(table.contains(0x485));
        assert!(!table.contains(0x2FF));
        assert!(!table.contains(0x370));
        assert!(!table.contains(0x488));
    }

    #[test]
    fn empty_table_contains_nothing() {
        let table = CodepointRangeTable::empty(Category::EnclosingMark);
        assert!(table.is_empty());
        assert!(!table.contains(0));
        assert!(!table.contains(0x20DD));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = CodepointRangeTable::new(Category::SpacingMark, vec![(0x940, 0x93E)]).unwrap_err();
        assert_eq!(
            err,
            TableError::InvertedRange {
                category: Category::SpacingMark,
                start: 0x940,
                end: 0x93E
            }
        );
    }

    #[test]
    fn rejects_codepoints_beyond_unicode() {
        let err =
            CodepointRangeTable::new(Category::NonspacingMark, vec![(0x10_FFFF, 0x11_0000)]).unwrap_err();
        assert!(matches!(err, TableError::OutOfRange { .. }));
    }

    #[test]
    fn rejects_overlapping_and_unsorted_ranges() {
        let overlapping =
            CodepointRangeTable::new(Category::NonspacingMark, vec![(0x300, 0x36F), (0x36F, 0x370)]);
        assert!(matches!(
            overlapping,
            Err(TableError::Unsorted {
                start: 0x36F,
                previous_end: 0x36F,
                ..
            })
        ));

        let descending =
            CodepointRangeTable::new(Category::NonspacingMark, vec![(0x483, 0x487), (0x300, 0x36F)]);
        assert!(matches!(descending, Err(TableError::Unsorted { .. })));
    }
}
