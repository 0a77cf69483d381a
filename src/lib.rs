//! Split a file into contiguous byte ranges at regex match offsets
//!
//! 在正则表达式匹配位置将文件拆分为连续的字节段
//!
//! The input is scanned once for the pattern, the match start offsets become
//! partition boundaries, and each partition is copied verbatim into its own file.
//! No byte of the input is transformed.
//!
//! 输入文件只扫描一次，匹配的起始偏移成为分段边界，每个分段原样复制到独立的文件中。
//! 不会修改输入的任何字节。
//!
//! # Features
//!
//! - **Byte-level matching**: patterns run over raw bytes, input need not be UTF-8
//! - **Valid partitions**: offsets are filtered, deduplicated and sorted, so no part is empty
//! - **Sortable names**: index prefixes are zero-padded to a common width
//! - **Isolated runs**: every run writes into its own freshly created directory
//!
//! # 特性
//!
//! - **字节级匹配**：正则表达式作用于原始字节，输入无需是 UTF-8
//! - **有效分段**：偏移经过过滤、去重和排序，不会产生空分段
//! - **可排序的文件名**：序号前缀补零到相同宽度
//! - **运行隔离**：每次运行写入新创建的独立目录
//!
//! # Quick Start
//!
//! ```
//! use regex_splitter::{run, SplitConfig, SplitOutcome, Result};
//! # use tempfile::tempdir;
//! # fn main() -> Result<()> {
//! # let dir = tempdir()?;
//! # let input = dir.path().join("mail.mbox");
//! std::fs::write(&input, "From a\nhello\nFrom b\nbye\n")?;
//!
//! let mut config = SplitConfig::new("^From ", &input);
//! config.output_dir = dir.path().to_path_buf();
//!
//! if let SplitOutcome::Written(report) = run(&config, |part| println!("{part}"))? {
//!     assert_eq!(report.parts.len(), 2);
//!     assert_eq!(report.total_bytes(), 24);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Main Types
//!
//! - [`BoundaryLocator`]: Finds match start offsets in a file
//! - [`BoundarySet`]: Normalized partition boundaries
//! - [`Partition`]: One half-open byte range of the input
//! - [`Splitter`]: Writes partitions into a new directory
//! - [`OutputDirAllocator`]: Creates the per-run directory
//!
//! # 主要类型
//!
//! - [`BoundaryLocator`][]: 查找文件中的匹配起始偏移
//! - [`BoundarySet`][]: 规范化后的分段边界
//! - [`Partition`][]: 输入文件的一个左闭右开字节区间
//! - [`Splitter`][]: 将分段写入新目录
//! - [`OutputDirAllocator`][]: 创建每次运行的目录

mod config;
mod split;

pub use config::{SplitConfig, run};
pub use split::{
    BoundaryLocator, BoundarySet, DEFAULT_PREFIX, Error, LocatorOptions, OutputDirAllocator,
    Partition, Result, SplitOutcome, SplitReport, Splitter, TempDirAllocator, WrittenPart,
    pad_width, part_file_name,
};
