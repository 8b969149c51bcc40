use log::trace;

use super::GlyphWidth;
use crate::prelude::*;

/// 在宽度预算内能容纳的最长字形前缀
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Fit {
    /// 前缀结束索引（字节或码元，取决于来源）
    pub end: usize,
    /// 前缀占用的宽度
    pub units: Units,
    /// 是否容纳了全部字形
    pub complete: bool,
}

/// 按顺序累加每个字形的宽度，遇到第一个放不下的字形就停止。
///
/// 放不下的字形整体丢弃，之后的字形也不再考虑，即使它们更窄。
///
/// # 参数
/// - `glyphs`: 依次给出每个字形的 `(结束索引, 宽度)`。
/// - `max_units`: 宽度预算。
pub fn fit_prefix<I>(glyphs: I, max_units: Units) -> Fit
where
    I: IntoIterator<Item = (usize, GlyphWidth)>,
{
    let mut fit = Fit {
        end: 0,
        units: 0,
        complete: true,
    };
    for (end, width) in glyphs {
        let units = width.saturating_add(fit.units);
        if units > max_units {
            trace!("glyph ending at {end} needs {units} units, budget is {max_units}");
            fit.complete = false;
            break;
        }
        fit.end = end;
        fit.units = units;
    }
    fit
}

/// 省略号要追加在哪里；`None` 表示原文不需要截断
pub fn ellipsis_cut<I>(glyphs: I, max_units: Units) -> Option<usize>
where
    I: IntoIterator<Item = (usize, GlyphWidth)> + Clone,
{
    if fit_prefix(glyphs.clone(), max_units).complete {
        return None;
    }
    // 给省略号预留 1 个单位
    Some(fit_prefix(glyphs, max_units.saturating_sub(1)).end)
}
