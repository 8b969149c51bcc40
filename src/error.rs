use std::io;

use thiserror::Error;

use crate::Category;

/// 码点区间表的校验错误。
///
/// 区间表只在加载时校验一次，运行期的分类查询不会再产生错误。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("{category:?} range U+{start:04X}..U+{end:04X} ends before it starts")]
    InvertedRange { category: Category, start: u32, end: u32 },

    #[error("{category:?} range U+{start:04X}..U+{end:04X} lies outside the Unicode codespace")]
    OutOfRange { category: Category, start: u32, end: u32 },

    #[error("{category:?} range starting at U+{start:04X} overlaps or precedes the range ending at U+{previous_end:04X}")]
    Unsorted {
        category: Category,
        start: u32,
        previous_end: u32,
    },

    #[error("U+{codepoint:04X} is listed as both {first:?} and {second:?}")]
    CategoryConflict {
        codepoint: u32,
        first: Category,
        second: Category,
    },
}

/// 加载分类器数据文件时的错误
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("could not read classifier data: {0}")]
    Io(#[from] io::Error),

    #[error("malformed classifier data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid classifier table: {0}")]
    Table(#[from] TableError),
}
