use super::AnnotationType;

/// 注释字符串中的一段，直接借用原字符串
#[derive(Debug, PartialEq, Eq)]
pub struct AnnotatedStringPart<'a> {
    pub string: &'a str,
    pub annotation_type: Option<AnnotationType>,
}
