//! Run configuration
//!
//! 运行配置

use crate::split::{BoundaryLocator, LocatorOptions, Result, SplitOutcome, Splitter, WrittenPart};
use std::path::PathBuf;
use tracing::debug;

/// Everything a single split run needs
///
/// 一次拆分运行所需的全部配置
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitConfig {
    /// Regular expression marking the start of each part
    ///
    /// 标记每个分段起点的正则表达式
    pub pattern: String,

    /// File to split
    ///
    /// 要拆分的文件
    pub input: PathBuf,

    /// Directory in which the run directory is created
    ///
    /// 创建运行目录的基础目录
    pub output_dir: PathBuf,

    /// How the pattern is compiled
    ///
    /// 正则表达式的编译方式
    pub locator: LocatorOptions,
}

impl SplitConfig {
    /// Config writing into the current directory with default matching options
    ///
    /// 输出到当前目录、使用默认匹配选项的配置
    pub fn new(pattern: impl Into<String>, input: impl Into<PathBuf>) -> Self {
        Self {
            pattern: pattern.into(),
            input: input.into(),
            output_dir: PathBuf::from("."),
            locator: LocatorOptions::default(),
        }
    }
}

/// Locate boundaries and split the input described by `config`
///
/// 按 `config` 定位边界并拆分输入文件
///
/// The pattern is compiled before the input is opened, so an invalid pattern
/// never touches the filesystem.
///
/// 正则表达式在打开输入前编译，因此无效的正则表达式不会触及文件系统。
pub fn run<F>(config: &SplitConfig, on_part: F) -> Result<SplitOutcome>
where
    F: FnMut(&WrittenPart),
{
    let locator = BoundaryLocator::new(&config.pattern, &config.locator)?;
    let offsets = locator.locate(&config.input)?;
    debug!(matches = offsets.len(), "boundary scan finished");

    Splitter::new().split_by_offsets_with(&config.input, &config.output_dir, offsets, on_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_parts() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("notes.md");
        fs::write(&input, "# a\ntext\n# b\nmore\n").unwrap();

        let mut config = SplitConfig::new("^# ", &input);
        config.output_dir = dir.path().to_path_buf();

        let mut seen = 0;
        let outcome = run(&config, |_| seen += 1).unwrap();

        let SplitOutcome::Written(report) = outcome else {
            panic!("expected a written split");
        };
        assert_eq!(seen, 2);
        assert_eq!(fs::read_to_string(&report.parts[1].path).unwrap(), "# b\nmore\n");
    }

    #[test]
    fn test_run_without_matches() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plain.txt");
        fs::write(&input, "nothing here").unwrap();

        let mut config = SplitConfig::new("XYZ", &input);
        config.output_dir = dir.path().to_path_buf();

        assert_eq!(run(&config, |_| {}).unwrap(), SplitOutcome::NoMatches);
    }

    #[test]
    fn test_invalid_pattern_fails_before_reading_input() {
        let dir = tempdir().unwrap();
        let config = SplitConfig::new("[", dir.path().join("missing.txt"));

        let err = run(&config, |_| {}).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_defaults() {
        let config = SplitConfig::new("x", "in.txt");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.locator, LocatorOptions::default());
    }
}
