//! Regex-driven file splitting
//!
//! 基于正则表达式的文件拆分
//!
//! A run has two stages:
//! 1. [`BoundaryLocator`] scans the input (memory-mapped with memmap2) and returns
//!    the byte offsets where the pattern starts matching
//! 2. [`Splitter`] normalizes those offsets into a [`BoundarySet`] and writes every
//!    [`Partition`] into its own file inside a freshly allocated directory
//!
//! 一次运行分为两个阶段：
//! 1. [`BoundaryLocator`] 扫描输入（通过 memmap2 映射），返回正则表达式开始匹配的字节偏移
//! 2. [`Splitter`] 将偏移规范化为 [`BoundarySet`]，并把每个 [`Partition`] 写入新分配目录中的独立文件
//!
//! # Output Layout
//!
//! ```text
//! <out_base>/splitter-XXXXXX/
//!     00-input.log
//!     01-input.log
//!     ...
//!     11-input.log
//! ```
//!
//! Index prefixes are zero-padded to a common width, so sorting the names sorts
//! the parts. Concatenating the files in name order reproduces the input exactly.
//!
//! 序号前缀补零到相同宽度，因此按文件名排序即按分段顺序排序。
//! 按文件名顺序拼接所有文件可以精确还原输入文件。
//!
//! # Example
//!
//! ```
//! # use regex_splitter::{BoundaryLocator, LocatorOptions, Splitter, SplitOutcome, Result};
//! # use tempfile::tempdir;
//! # fn main() -> Result<()> {
//! # let dir = tempdir()?;
//! # let input = dir.path().join("book.txt");
//! std::fs::write(&input, "Preface\nChapter 1\nfoo\nChapter 2\nbar\n")?;
//!
//! let locator = BoundaryLocator::new("^Chapter", &LocatorOptions::default())?;
//! let offsets = locator.locate(&input)?;
//!
//! match Splitter::new().split_by_offsets(&input, dir.path(), offsets)? {
//!     SplitOutcome::Written(report) => assert_eq!(report.parts.len(), 3),
//!     SplitOutcome::NoMatches => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

mod boundary;
mod error;
mod locator;
mod naming;
mod outdir;
mod partition;
mod writer;


// Re-export public API
// 重新导出公共 API
pub use boundary::BoundarySet;
pub use error::{Error, Result};
pub use locator::{BoundaryLocator, LocatorOptions};
pub use naming::{pad_width, part_file_name};
pub use outdir::{DEFAULT_PREFIX, OutputDirAllocator, TempDirAllocator};
pub use partition::Partition;
pub use writer::{SplitOutcome, SplitReport, Splitter, WrittenPart};
