//! Boundary locator based on regex and memmap2
//!
//! 基于 regex 与 memmap2 的边界定位器

use super::error::Result;
use memmap2::Mmap;
use regex::bytes::{Regex, RegexBuilder};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Options controlling how the pattern is compiled
///
/// 控制正则表达式编译方式的选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatorOptions {
    /// Match letters regardless of case
    ///
    /// 忽略大小写匹配
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries, not only at the ends of the file
    ///
    /// `^` 和 `$` 匹配行边界，而不仅是文件首尾
    pub multi_line: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: true,
        }
    }
}

/// Finds the byte offsets where a pattern starts matching
///
/// 查找正则表达式开始匹配的字节偏移
///
/// Matching runs over raw bytes, so the input does not need to be valid UTF-8.
/// Matches are leftmost-first and non-overlapping; empty matches are skipped.
///
/// 匹配作用于原始字节，输入无需是合法的 UTF-8。
/// 匹配为最左优先且不重叠；空匹配会被跳过。
///
/// # Examples
///
/// ```
/// # use regex_splitter::{BoundaryLocator, LocatorOptions, Result};
/// # fn main() -> Result<()> {
/// let locator = BoundaryLocator::new("^== ", &LocatorOptions::default())?;
/// let offsets = locator.locate_in(b"intro\n== one\nbody\n== two\n");
/// assert_eq!(offsets, vec![6, 18]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BoundaryLocator {
    regex: Regex,
}

impl BoundaryLocator {
    /// Compile a pattern
    ///
    /// 编译正则表达式
    ///
    /// # Errors
    /// Returns [`Error::Pattern`](super::Error::Pattern) if the pattern is invalid
    ///
    /// # Errors
    /// 如果正则表达式无效，返回 [`Error::Pattern`](super::Error::Pattern)
    pub fn new(pattern: &str, options: &LocatorOptions) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .build()?;
        debug!(pattern = regex.as_str(), ?options, "compiled pattern");
        Ok(Self { regex })
    }

    /// The pattern as it was compiled
    ///
    /// 编译时使用的正则表达式
    #[inline]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Start offsets of all matches in `haystack`, in increasing order
    ///
    /// `haystack` 中所有匹配的起始偏移，按升序排列
    pub fn locate_in(&self, haystack: &[u8]) -> Vec<u64> {
        self.regex
            .find_iter(haystack)
            .filter(|m| !m.is_empty())
            .map(|m| m.start() as u64)
            .collect()
    }

    /// Start offsets of all matches in the file at `path`
    ///
    /// 文件 `path` 中所有匹配的起始偏移
    ///
    /// The file is mapped read-only for the duration of the scan. An empty file
    /// yields no offsets.
    ///
    /// 扫描期间文件以只读方式映射。空文件不产生任何偏移。
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be opened or mapped
    ///
    /// # Errors
    /// 如果文件无法打开或映射，返回 I/O 错误
    pub fn locate(&self, path: impl AsRef<Path>) -> Result<Vec<u64>> {
        let path = path.as_ref();
        let file = File::open(path)?;

        // Zero-length mappings are rejected on some platforms
        // 部分平台不允许映射零长度文件
        if file.metadata()?.len() == 0 {
            debug!(path = %path.display(), "input is empty");
            return Ok(Vec::new());
        }

        // Safety: the map is read-only and dropped before this function returns;
        // concurrent truncation by another process is outside our control
        // Safety: 映射为只读，并在函数返回前释放；其他进程的并发截断不在控制范围内
        let mmap = unsafe { Mmap::map(&file)? };
        let offsets = self.locate_in(&mmap);

        debug!(path = %path.display(), matches = offsets.len(), "located boundaries");
        Ok(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::Error;

    fn locator(pattern: &str) -> BoundaryLocator {
        BoundaryLocator::new(pattern, &LocatorOptions::default()).unwrap()
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(locator("zzz").locate_in(b"abcabc").is_empty());
    }

    #[test]
    fn test_offsets_are_match_starts() {
        assert_eq!(locator("bc").locate_in(b"abcabc"), vec![1, 4]);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        assert_eq!(locator("aa").locate_in(b"aaaaa"), vec![0, 2]);
    }

    #[test]
    fn test_empty_matches_are_skipped() {
        assert!(locator("x*").locate_in(b"abc").is_empty());
        assert_eq!(locator("x*").locate_in(b"axxb"), vec![1]);
    }

    #[test]
    fn test_line_anchor_matches_every_line() {
        assert_eq!(locator("^#").locate_in(b"#a\n#b\nc\n#d"), vec![0, 3, 8]);
    }

    #[test]
    fn test_single_line_mode() {
        let options = LocatorOptions {
            multi_line: false,
            ..LocatorOptions::default()
        };
        let locator = BoundaryLocator::new("^#", &options).unwrap();
        assert_eq!(locator.locate_in(b"#a\n#b"), vec![0]);
    }

    #[test]
    fn test_case_insensitive() {
        let options = LocatorOptions {
            case_insensitive: true,
            ..LocatorOptions::default()
        };
        let locator = BoundaryLocator::new("chapter", &options).unwrap();
        assert_eq!(locator.locate_in(b"Chapter 1 CHAPTER 2"), vec![0, 10]);
    }

    #[test]
    fn test_non_utf8_input() {
        assert_eq!(locator("SEP").locate_in(b"\xff\xfeSEP\x00"), vec![2]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = BoundaryLocator::new("(unclosed", &LocatorOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_pattern_accessor() {
        assert_eq!(locator("a+b").pattern(), "a+b");
    }
}
