/// 注释/标注类型
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AnnotationType {
    // 普通字形，与 AlternateGlyph 交替使用以区分相邻字形
    Glyph,
    AlternateGlyph,
    // 附带间距组合符号、占 2 个单位的字形
    SpacingGlyph,
    // 截断后追加的省略号
    Ellipsis,
}
