use std::io::{stdout, Error, Write};

use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{queue, Command};

use super::annotatedstring::AnnotatedString;
use attribute::Attribute;

mod attribute;

/// 表示标准输出终端。
/// 所有输出先进入缓冲区，调用 `execute` 后才真正写出。
pub struct Terminal;

impl Terminal {
    // 打印
    pub fn print(string: &str) -> Result<(), Error> {
        Self::queue_command(Print(string))?;
        Ok(())
    }

    // 打印一行
    pub fn print_line(string: &str) -> Result<(), Error> {
        Self::print(string)?;
        Self::print("\n")
    }

    /// 打印带注释的一行。`color` 为 false 时忽略注释，只输出文本。
    pub fn print_annotated_line(annotated_string: &AnnotatedString, color: bool) -> Result<(), Error> {
        for part in annotated_string {
            match part.annotation_type {
                Some(annotation_type) if color => {
                    let attribute: Attribute = annotation_type.into();
                    Self::set_attribute(&attribute)?;
                    Self::print(part.string)?;
                    Self::reset_color()?;
                }
                _ => Self::print(part.string)?,
            }
        }
        Self::print("\n")
    }

    // 设置颜色属性
    fn set_attribute(attribute: &Attribute) -> Result<(), Error> {
        if let Some(foreground_color) = attribute.foreground {
            Self::queue_command(SetForegroundColor(foreground_color))?;
        }
        if let Some(background_color) = attribute.background {
            Self::queue_command(SetBackgroundColor(background_color))?;
        }
        Ok(())
    }

    // 恢复默认颜色
    fn reset_color() -> Result<(), Error> {
        Self::queue_command(ResetColor)?;
        Ok(())
    }

    // 执行刷新缓冲区
    pub fn execute() -> Result<(), Error> {
        stdout().flush()?;
        Ok(())
    }

    // 执行命令
    fn queue_command<T: Command>(command: T) -> Result<(), Error> {
        queue!(stdout(), command)?;
        Ok(())
    }
}
