use std::{env, path::PathBuf};

use glyphstring::prelude::Units;

use super::InspectorError;

/// 未指定 `--classifier` 时读取的环境变量
pub const CLASSIFIER_ENV: &str = "GLYPHSTRING_CLASSIFIER";
/// 设置后关闭颜色输出
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// 要执行的命令
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Help,
    Glyphs,
    Width,
    Truncate(Units),
    Ellipsize(Units),
}

impl Command {
    /// 命令本身占用的位置参数个数
    const fn arity(self) -> usize {
        match self {
            Self::Truncate(_) | Self::Ellipsize(_) => 2,
            Self::Help | Self::Glyphs | Self::Width => 1,
        }
    }

    fn budget(argument: Option<&String>) -> Result<Units, InspectorError> {
        let budget =
            argument.ok_or_else(|| InspectorError::Usage(String::from("missing unit budget")))?;
        budget
            .parse::<Units>()
            .map_err(|_err| InspectorError::InvalidBudget(budget.clone()))
    }
}

/// 由位置参数解析命令：命令名，以及截断类命令的宽度预算
impl TryFrom<&[String]> for Command {
    type Error = InspectorError;
    fn try_from(positional: &[String]) -> Result<Self, Self::Error> {
        let Some(name) = positional.first() else {
            return Err(InspectorError::Usage(String::from("missing command")));
        };
        match name.as_str() {
            "glyphs" => Ok(Self::Glyphs),
            "width" => Ok(Self::Width),
            "truncate" => Self::budget(positional.get(1)).map(Self::Truncate),
            "ellipsize" => Self::budget(positional.get(1)).map(Self::Ellipsize),
            "help" => Ok(Self::Help),
            _ => Err(InspectorError::Usage(format!("unknown command `{name}`"))),
        }
    }
}

/// 命令行配置
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub command: Command,
    // 要处理的文本；为 None 时逐行读取标准输入
    pub text: Option<String>,
    pub classifier_path: Option<PathBuf>,
    pub color: bool,
}

impl Config {
    /// 从进程参数和环境变量读取配置
    pub fn from_env() -> Result<Self, InspectorError> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse(&args, |key| env::var(key).ok())
    }

    /// 解析参数（不含程序名），`lookup` 用来读取环境变量
    pub fn parse<F>(args: &[String], lookup: F) -> Result<Self, InspectorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut classifier_path = None;
        let mut color = lookup(NO_COLOR_ENV).map_or(true, |value| value.is_empty());
        let mut positional: Vec<String> = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--classifier" => {
                    let path = iter.next().ok_or_else(|| {
                        InspectorError::Usage(String::from("--classifier needs a file"))
                    })?;
                    classifier_path = Some(PathBuf::from(path));
                }
                "--no-color" => color = false,
                "-h" | "--help" => positional.insert(0, String::from("help")),
                // 之后的参数全部当作文本
                "--" => positional.extend(iter.by_ref().cloned()),
                _ if arg.starts_with("--") => {
                    return Err(InspectorError::Usage(format!("unknown option `{arg}`")));
                }
                _ => positional.push(arg.clone()),
            }
        }

        let command = Command::try_from(positional.as_slice())?;
        let text = positional
            .get(command.arity()..)
            .filter(|rest| !rest.is_empty())
            .map(|rest| rest.join(" "));

        Ok(Self {
            command,
            text,
            classifier_path: classifier_path
                .or_else(|| lookup(CLASSIFIER_ENV).filter(|path| !path.is_empty()).map(PathBuf::from)),
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn parses_truncate_with_text() {
        let config = Config::parse(&args(&["truncate", "6", "abc", "def"]), no_env).unwrap();
        assert_eq!(config.command, Command::Truncate(6));
        assert_eq!(config.text.as_deref(), Some("abc def"));
        assert!(config.color);
        assert!(config.classifier_path.is_none());
    }

    #[test]
    fn reads_stdin_when_text_is_missing() {
        let config = Config::parse(&args(&["glyphs"]), no_env).unwrap();
        assert_eq!(config.command, Command::Glyphs);
        assert!(config.text.is_none());
    }

    #[test]
    fn options_may_appear_anywhere() {
        let config = Config::parse(
            &args(&["ellipsize", "--no-color", "4", "--classifier", "marks.json", "text"]),
            no_env,
        )
        .unwrap();
        assert_eq!(config.command, Command::Ellipsize(4));
        assert_eq!(config.text.as_deref(), Some("text"));
        assert_eq!(config.classifier_path, Some(PathBuf::from("marks.json")));
        assert!(!config.color);
    }

    #[test]
    fn double_dash_keeps_option_like_text() {
        let config = Config::parse(&args(&["width", "--", "--no-color"]), no_env).unwrap();
        assert_eq!(config.text.as_deref(), Some("--no-color"));
        assert!(config.color);
    }

    #[test]
    fn environment_supplies_defaults() {
        let lookup = |key: &str| match key {
            CLASSIFIER_ENV => Some(String::from("/etc/marks.json")),
            NO_COLOR_ENV => Some(String::from("1")),
            _ => None,
        };
        let config = Config::parse(&args(&["width", "x"]), lookup).unwrap();
        assert_eq!(config.classifier_path, Some(PathBuf::from("/etc/marks.json")));
        assert!(!config.color);

        let config =
            Config::parse(&args(&["width", "--classifier", "local.json", "x"]), lookup).unwrap();
        assert_eq!(config.classifier_path, Some(PathBuf::from("local.json")));
    }

    #[test]
    fn help_flag_wins() {
        let config = Config::parse(&args(&["--help"]), no_env).unwrap();
        assert_eq!(config.command, Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Config::parse(&args(&[]), no_env),
            Err(InspectorError::Usage(_))
        ));
        assert!(matches!(
            Config::parse(&args(&["shorten", "x"]), no_env),
            Err(InspectorError::Usage(_))
        ));
        assert!(matches!(
            Config::parse(&args(&["truncate"]), no_env),
            Err(InspectorError::Usage(_))
        ));
        assert!(matches!(
            Config::parse(&args(&["truncate", "-1", "x"]), no_env),
            Err(InspectorError::InvalidBudget(budget)) if budget == "-1"
        ));
        assert!(matches!(
            Config::parse(&args(&["glyphs", "--classifier"]), no_env),
            Err(InspectorError::Usage(_))
        ));
        assert!(matches!(
            Config::parse(&args(&["glyphs", "--verbose"]), no_env),
            Err(InspectorError::Usage(_))
        ));
    }
}
