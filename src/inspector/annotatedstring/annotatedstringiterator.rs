use std::cmp::min;

use glyphstring::prelude::ByteIdx;

use super::{AnnotatedString, AnnotatedStringPart};

/// 注释字符串迭代器，按注释边界把字符串切成若干段
pub struct AnnotatedStringIterator<'a> {
    pub annotated_string: &'a AnnotatedString,
    pub current_idx: ByteIdx,
}

impl<'a> Iterator for AnnotatedStringIterator<'a> {
    type Item = AnnotatedStringPart<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let string = &self.annotated_string.string;
        if self.current_idx >= string.len() {
            return None;
        }
        let start_idx = self.current_idx;

        // 覆盖当前位置的注释，后添加的优先
        if let Some(annotation) = self
            .annotated_string
            .annotations
            .iter()
            .filter(|annotation| annotation.start <= start_idx && annotation.end > start_idx)
            .last()
        {
            let end_idx = min(annotation.end, string.len());
            self.current_idx = end_idx;
            return Some(AnnotatedStringPart {
                string: string.get(start_idx..end_idx)?,
                annotation_type: Some(annotation.annotation_type),
            });
        }

        // 没有注释时一直延伸到下一个注释的起点
        let end_idx = self
            .annotated_string
            .annotations
            .iter()
            .map(|annotation| annotation.start)
            .filter(|&start| start > start_idx)
            .fold(string.len(), min);
        self.current_idx = end_idx;

        Some(AnnotatedStringPart {
            string: string.get(start_idx..end_idx)?,
            annotation_type: None,
        })
    }
}
