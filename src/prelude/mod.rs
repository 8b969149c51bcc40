/// 字形索引
pub type GlyphIdx = usize;
/// UTF-8 字节索引
pub type ByteIdx = usize;
/// UTF-16 码元索引
pub type UnitIdx = usize;
/// 宽度预算单位（普通字形 1，带间距组合符号的字形 2）
pub type Units = usize;

/// 省略号 `…`，固定占用 1 个宽度单位
pub const ELLIPSIS: char = '\u{2026}';

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
