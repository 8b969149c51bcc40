use std::{
    cmp::min,
    fmt::{self, Display},
};

use glyphstring::prelude::ByteIdx;

use annotatedstringiterator::AnnotatedStringIterator;
use annotation::Annotation;
pub use annotatedstringpart::AnnotatedStringPart;
pub use annotationtype::AnnotationType;

mod annotatedstringiterator;
mod annotatedstringpart;
mod annotation;
mod annotationtype;

/// 带字节区间注释的字符串，用来给终端输出着色
#[derive(Default, Debug)]
pub struct AnnotatedString {
    string: String,
    annotations: Vec<Annotation>,
}

impl AnnotatedString {
    pub fn from(string: &str) -> Self {
        Self {
            string: String::from(string),
            annotations: Vec::new(),
        }
    }

    /// 新增注释
    pub fn add_annotation(&mut self, annotation_type: AnnotationType, start: ByteIdx, end: ByteIdx) {
        debug_assert!(start <= end);
        self.annotations.push(Annotation {
            annotation_type,
            start,
            end,
        });
    }

    /// 在末尾追加内容，可选地为追加部分加注释
    pub fn append(&mut self, string: &str, annotation_type: Option<AnnotationType>) {
        let start = self.string.len();
        self.string.push_str(string);
        if let Some(annotation_type) = annotation_type {
            self.add_annotation(annotation_type, start, self.string.len());
        }
    }

    /// 清空对应字节索引右侧字符内容
    pub fn truncate_right_from(&mut self, from: ByteIdx) {
        self.replace(from, self.string.len(), "");
    }

    /// 用 `new_string` 替换 `start..end`，并调整注释的索引。
    ///
    /// 与替换区间重叠的注释被裁剪到区间起点，区间之后的注释整体平移。
    pub fn replace(&mut self, start: ByteIdx, end: ByteIdx, new_string: &str) {
        let end = min(end, self.string.len());
        debug_assert!(start <= end);
        if start > end || !self.string.is_char_boundary(start) || !self.string.is_char_boundary(end)
        {
            return;
        }

        self.string.replace_range(start..end, new_string);

        let removed_len = end.saturating_sub(start);
        let inserted_len = new_string.len();
        let shifted = |idx: ByteIdx| idx.saturating_sub(removed_len).saturating_add(inserted_len);

        self.annotations.iter_mut().for_each(|annotation| {
            annotation.start = if annotation.start >= end {
                shifted(annotation.start)
            } else if annotation.start > start {
                start
            } else {
                annotation.start
            };
            annotation.end = if annotation.end > end {
                shifted(annotation.end)
            } else if annotation.end > start {
                start
            } else {
                annotation.end
            };
        });

        // 过滤掉空注释或超出字符串长度的注释
        let len = self.string.len();
        self.annotations
            .retain(|annotation| annotation.start < annotation.end && annotation.start < len);
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }
}

impl Display for AnnotatedString {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.string)
    }
}

impl<'a> IntoIterator for &'a AnnotatedString {
    type Item = AnnotatedStringPart<'a>;
    type IntoIter = AnnotatedStringIterator<'a>;
    fn into_iter(self) -> Self::IntoIter {
        AnnotatedStringIterator {
            annotated_string: self,
            current_idx: 0,
        }
    }
}
