use glyphstring::{prelude::*, Glyph, GlyphString};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::annotatedstring::{AnnotatedString, AnnotationType};
use super::config::Command;

/// 一次命令的输出，按行排列
pub type Report = Vec<AnnotatedString>;

/// 根据命令生成输出行
pub fn render(command: Command, string: &GlyphString<'_>) -> Report {
    match command {
        Command::Glyphs => glyphs(string),
        Command::Width => vec![width(string)],
        Command::Truncate(max_units) => vec![truncate(string, max_units)],
        Command::Ellipsize(max_units) => vec![ellipsize(string, max_units)],
        Command::Help => Vec::new(),
    }
}

/// 给每个字形加注释，相邻字形交替着色，带间距组合符号的字形单独着色
pub fn annotate_glyphs(string: &GlyphString<'_>) -> AnnotatedString {
    let mut annotated = AnnotatedString::from(string.as_str());
    for (idx, glyph) in string.char_iterator().enumerate() {
        let annotation_type = if glyph.has_spacing_mark {
            AnnotationType::SpacingGlyph
        } else if idx % 2 == 0 {
            AnnotationType::Glyph
        } else {
            AnnotationType::AlternateGlyph
        };
        annotated.add_annotation(annotation_type, glyph.start, glyph.end());
    }
    annotated
}

fn glyphs(string: &GlyphString<'_>) -> Report {
    let mut report = vec![annotate_glyphs(string)];
    for (idx, glyph) in string.char_iterator().enumerate() {
        report.push(AnnotatedString::from(&describe_glyph(idx, &glyph)));
    }
    report.push(AnnotatedString::from(&format!(
        "{} glyphs, {} units, {} graphemes, {} columns",
        string.glyph_count(),
        string.width(),
        string.graphemes(true).count(),
        string.as_str().width(),
    )));
    report
}

// 形如 `  1 @3 2u 1c  U+0C95 U+0CC6`
fn describe_glyph(idx: GlyphIdx, glyph: &Glyph<'_>) -> String {
    let mut line = format!(
        "{idx:>3} @{} {}u {}c ",
        glyph.start,
        Units::from(glyph.width()),
        glyph.text.width(),
    );
    for character in glyph.text.chars() {
        line.push_str(&format!(" U+{:04X}", u32::from(character)));
    }
    line
}

fn width(string: &GlyphString<'_>) -> AnnotatedString {
    let mut annotated = annotate_glyphs(string);
    annotated.append(
        &format!(
            "  {} units, {} columns",
            string.width(),
            string.as_str().width()
        ),
        None,
    );
    annotated
}

fn truncate(string: &GlyphString<'_>, max_units: Units) -> AnnotatedString {
    let truncated = string.truncate(max_units);
    let mut annotated = annotate_glyphs(string);
    annotated.truncate_right_from(truncated.len());
    annotated.append(&summary(&truncated, string), None);
    annotated
}

fn ellipsize(string: &GlyphString<'_>, max_units: Units) -> AnnotatedString {
    let ellipsized = string.ellipsize(max_units);
    let mut annotated = annotate_glyphs(string);
    if ellipsized != string.as_str() {
        if let Some(kept) = ellipsized.strip_suffix(ELLIPSIS) {
            let start = kept.len();
            annotated.replace(start, string.len(), &ellipsized[start..]);
            annotated.add_annotation(AnnotationType::Ellipsis, start, ellipsized.len());
        } else {
            annotated.truncate_right_from(0);
        }
    }
    annotated.append(&summary(&ellipsized, string), None);
    annotated
}

// 结果的宽度单位与终端列数
fn summary(result: &str, source: &GlyphString<'_>) -> String {
    let result = GlyphString::with_classifier(result, source.classifier());
    format!(
        "  ({} units, {} columns)",
        result.width(),
        result.as_str().width()
    )
}
