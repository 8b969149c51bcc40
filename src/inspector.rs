use std::io::{self, stdin, BufRead};

use glyphstring::{prelude::*, CharacterClassifier, ClassifierError, GlyphString};
use log::{debug, info, trace};
use thiserror::Error;

use annotatedstring::AnnotatedString;
pub use config::Config;
use config::Command;
use terminal::Terminal;

mod annotatedstring;
mod config;
mod report;
mod terminal;

pub const USAGE: &str = "\
usage: glyphstring [--classifier <file.json>] [--no-color] <command> [text...]

commands:
  glyphs             list the glyphs of each line
  width              print the width of each line in units
  truncate <units>   cut each line to at most <units>
  ellipsize <units>  cut each line to at most <units>, ending with an ellipsis
  help               print this message

without text, lines are read from standard input.";

#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),
    #[error("invalid unit budget `{0}`")]
    InvalidBudget(String),
    #[error("failed to load classifier: {0}")]
    Classifier(#[from] ClassifierError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// 命令行检查工具：对每一行输入执行同一个命令并着色输出
pub struct Inspector {
    config: Config,
    // 通过 `--classifier` 加载的自定义分类器
    classifier: Option<CharacterClassifier>,
}

impl Inspector {
    pub fn new(config: Config) -> Result<Self, InspectorError> {
        let classifier = match &config.classifier_path {
            Some(path) => {
                info!("loading classifier from {}", path.display());
                Some(CharacterClassifier::from_path(path)?)
            }
            None => None,
        };
        Ok(Self { config, classifier })
    }

    fn classifier(&self) -> &CharacterClassifier {
        self.classifier
            .as_ref()
            .unwrap_or_else(|| CharacterClassifier::builtin())
    }

    pub fn run(&self) -> Result<(), InspectorError> {
        if self.config.command == Command::Help {
            Terminal::print_line(&format!("{NAME} {VERSION}"))?;
            Terminal::print_line(USAGE)?;
            return Terminal::execute().map_err(InspectorError::from);
        }
        debug!("running {:?}", self.config.command);

        match &self.config.text {
            Some(text) => self.inspect(text)?,
            None => {
                for line in stdin().lock().lines() {
                    self.inspect(&line?)?;
                }
            }
        }
        Terminal::execute()?;
        Ok(())
    }

    // 处理一行输入
    fn inspect(&self, line: &str) -> Result<(), InspectorError> {
        let string = GlyphString::with_classifier(line, self.classifier());
        let lines: Vec<AnnotatedString> = report::render(self.config.command, &string);
        for annotated in &lines {
            trace!("{:?}", annotated.as_str());
            Terminal::print_annotated_line(annotated, self.config.color)?;
        }
        Ok(())
    }
}
