use std::{borrow::Cow, fs::read_to_string, path::Path};

use log::debug;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::{ClassifierError, TableError};
pub use rangetable::CodepointRangeTable;

mod rangetable;
pub mod tables;

/// 码点的组合分类
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Category {
    /// 基字符：不属于任何组合符号表的码点
    Base,
    /// `Mn`：不占用额外显示位置
    NonspacingMark,
    /// `Mc`：与基字符组合，但额外占用一个显示位置
    SpacingMark,
    /// `Me`：按非间距符号处理
    EnclosingMark,
}

impl Category {
    pub const fn is_mark(self) -> bool {
        !matches!(self, Self::Base)
    }
}

/// 内置分类器，首次使用时校验一次
static BUILTIN: Lazy<CharacterClassifier> = Lazy::new(|| {
    match CharacterClassifier::new(
        tables::NONSPACING_MARK,
        tables::SPACING_MARK,
        tables::ENCLOSING_MARK,
    ) {
        Ok(classifier) => {
            let (major, minor, patch) = tables::UNICODE_VERSION;
            debug!("loaded builtin mark tables (Unicode {major}.{minor}.{patch})");
            classifier
        }
        Err(err) => {
            #[cfg(debug_assertions)]
            {
                panic!("builtin mark tables are corrupt: {err}");
            }
            #[cfg(not(debug_assertions))]
            {
                log::error!("builtin mark tables are corrupt, treating every codepoint as base: {err}");
                CharacterClassifier::default()
            }
        }
    }
});

/// 分类器数据文件的 JSON 形式：分类名 -> `[start, end]` 闭区间数组
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
struct ClassifierData {
    #[serde(rename = "NonspacingMark", default)]
    nonspacing_mark: Vec<(u32, u32)>,
    #[serde(rename = "SpacingMark", default)]
    spacing_mark: Vec<(u32, u32)>,
    #[serde(rename = "EnclosingMark", default)]
    enclosing_mark: Vec<(u32, u32)>,
}

/// 码点到组合分类的查找服务。
///
/// 三张区间表互不相交；不在任何表中的码点都是 [`Category::Base`]。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterClassifier {
    nonspacing_mark: CodepointRangeTable,
    spacing_mark: CodepointRangeTable,
    enclosing_mark: CodepointRangeTable,
}

impl Default for CharacterClassifier {
    fn default() -> Self {
        Self {
            nonspacing_mark: CodepointRangeTable::empty(Category::NonspacingMark),
            spacing_mark: CodepointRangeTable::empty(Category::SpacingMark),
            enclosing_mark: CodepointRangeTable::empty(Category::EnclosingMark),
        }
    }
}

impl CharacterClassifier {
    /// 由 UCD 生成的内置分类器
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// 校验三张区间表并创建分类器
    pub fn new(
        nonspacing_mark: impl Into<Cow<'static, [(u32, u32)]>>,
        spacing_mark: impl Into<Cow<'static, [(u32, u32)]>>,
        enclosing_mark: impl Into<Cow<'static, [(u32, u32)]>>,
    ) -> Result<Self, TableError> {
        let classifier = Self {
            nonspacing_mark: CodepointRangeTable::new(Category::NonspacingMark, nonspacing_mark)?,
            spacing_mark: CodepointRangeTable::new(Category::SpacingMark, spacing_mark)?,
            enclosing_mark: CodepointRangeTable::new(Category::EnclosingMark, enclosing_mark)?,
        };
        classifier.check_disjoint()?;
        Ok(classifier)
    }

    /// 从 JSON 数据创建分类器
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let data: ClassifierData = serde_json::from_str(json)?;
        let classifier = Self::new(data.nonspacing_mark, data.spacing_mark, data.enclosing_mark)?;
        debug!(
            "loaded classifier data: {} nonspacing, {} spacing, {} enclosing ranges",
            classifier.nonspacing_mark.ranges().len(),
            classifier.spacing_mark.ranges().len(),
            classifier.enclosing_mark.ranges().len(),
        );
        Ok(classifier)
    }

    /// 从 JSON 文件创建分类器
    pub fn from_path(path: &Path) -> Result<Self, ClassifierError> {
        let json = read_to_string(path)?;
        Self::from_json(&json)
    }

    /// 对单个码点分类。总是返回结果，未知码点视为基字符。
    pub fn classify(&self, codepoint: u32) -> Category {
        if self.nonspacing_mark.contains(codepoint) {
            Category::NonspacingMark
        } else if self.spacing_mark.contains(codepoint) {
            Category::SpacingMark
        } else if self.enclosing_mark.contains(codepoint) {
            Category::EnclosingMark
        } else {
            Category::Base
        }
    }

    pub fn classify_char(&self, character: char) -> Category {
        self.classify(u32::from(character))
    }

    pub const fn table(&self, category: Category) -> Option<&CodepointRangeTable> {
        match category {
            Category::Base => None,
            Category::NonspacingMark => Some(&self.nonspacing_mark),
            Category::SpacingMark => Some(&self.spacing_mark),
            Category::EnclosingMark => Some(&self.enclosing_mark),
        }
    }

    /// 确保同一个码点不会同时出现在两张表里
    fn check_disjoint(&self) -> Result<(), TableError> {
        let mut all: Vec<(u32, u32, Category)> = [
            &self.nonspacing_mark,
            &self.spacing_mark,
            &self.enclosing_mark,
        ]
        .into_iter()
        .flat_map(|table| {
            table
                .ranges()
                .iter()
                .map(move |&(start, end)| (start, end, table.category()))
        })
        .collect();
        all.sort_unstable_by_key(|&(start, _, _)| start);

        // 每张表内部已经有序且不重叠，只需要和目前为止延伸最远的区间比较
        let mut furthest: Option<(u32, Category)> = None;
        for (start, end, category) in all {
            if let Some((furthest_end, furthest_category)) = furthest {
                if start <= furthest_end {
                    return Err(TableError::CategoryConflict {
                        codepoint: start,
                        first: furthest_category,
                        second: category,
                    });
                }
            }
            furthest = Some((end, category));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        let all_tables = [tables::NONSPACING_MARK, tables::SPACING_MARK, tables::ENCLOSING_MARK];
        assert!(all_tables.iter().all(|table| !table.is_empty()));
        assert!(CharacterClassifier::new(
            tables::NONSPACING_MARK,
            tables::SPACING_MARK,
            tables::ENCLOSING_MARK
        )
        .is_ok());
    }

    #[test]
    fn classifies_latin_marks() {
        let classifier = CharacterClassifier::builtin();
        assert_eq!(classifier.classify_char('a'), Category::Base);
        assert_eq!(classifier.classify(0x0308), Category::NonspacingMark);
        assert_eq!(classifier.classify(0x0323), Category::NonspacingMark);
        assert_eq!(classifier.classify(0x20DD), Category::EnclosingMark);
        assert_eq!(classifier.classify(0x0488), Category::EnclosingMark);
    }

    #[test]
    fn only_base_is_not_a_mark() {
        assert!(!Category::Base.is_mark());
        assert!(Category::NonspacingMark.is_mark());
        assert!(Category::SpacingMark.is_mark());
        assert!(Category::EnclosingMark.is_mark());
        let classifier = CharacterClassifier::builtin();
        assert!(classifier.classify_char('\u{0CC7}').is_mark());
        assert!(!classifier.classify_char('k').is_mark());
    }

    #[test]
    fn classifies_indic_vowel_signs() {
        let classifier = CharacterClassifier::builtin();
        // Devanagari: ै 是 Mn, ो 是 Mc
        assert_eq!(classifier.classify(0x0948), Category::NonspacingMark);
        assert_eq!(classifier.classify(0x094B), Category::SpacingMark);
        // Kannada
        assert_eq!(classifier.classify(0x0CBF), Category::NonspacingMark);
        assert_eq!(classifier.classify(0x0CC6), Category::NonspacingMark);
        assert_eq!(classifier.classify(0x0CC7), Category::SpacingMark);
        // Thai
        assert_eq!(classifier.classify(0x0E31), Category::NonspacingMark);
        assert_eq!(classifier.classify(0x0E2A), Category::Base);
    }

    #[test]
    fn unknown_and_supplementary_codepoints_are_base() {
        let classifier = CharacterClassifier::builtin();
        assert_eq!(classifier.classify(0x10302), Category::Base);
        assert_eq!(classifier.classify(0x10_FFFF), Category::Base);
        assert_eq!(classifier.classify(0xD800), Category::Base);
        assert_eq!(classifier.classify(u32::MAX), Category::Base);
        assert_eq!(classifier.classify(0xE0100), Category::NonspacingMark);
    }

    #[test]
    fn default_classifier_treats_everything_as_base() {
        let classifier = CharacterClassifier::default();
        assert_eq!(classifier.classify(0x0308), Category::Base);
        assert_eq!(classifier.classify(0x094B), Category::Base);
    }

    #[test]
    fn loads_json_data() {
        let classifier = CharacterClassifier::from_json(
            r#"{ "NonspacingMark": [[768, 879]], "SpacingMark": [[2366, 2368]] }"#,
        )
        .unwrap();
        assert_eq!(classifier.classify(0x0301), Category::NonspacingMark);
        assert_eq!(classifier.classify(0x093F), Category::SpacingMark);
        assert_eq!(classifier.classify(0x20DD), Category::Base);
        assert!(classifier.table(Category::EnclosingMark).unwrap().is_empty());
        assert!(classifier.table(Category::Base).is_none());
    }

    #[test]
    fn rejects_unknown_json_keys() {
        let err = CharacterClassifier::from_json(r#"{ "Letter": [[65, 90]] }"#).unwrap_err();
        assert!(matches!(err, ClassifierError::Json(_)));
    }

    #[test]
    fn rejects_codepoint_in_two_tables() {
        let err = CharacterClassifier::from_json(
            r#"{ "NonspacingMark": [[768, 879]], "EnclosingMark": [[800, 800]] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::Table(TableError::CategoryConflict {
                codepoint: 800,
                first: Category::NonspacingMark,
                second: Category::EnclosingMark,
            })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CharacterClassifier::from_path(Path::new("/nonexistent/marks.json")).unwrap_err();
        assert!(matches!(err, ClassifierError::Io(_)));
    }
}
