//! Partition writer
//!
//! 分段写入器

use super::boundary::BoundarySet;
use super::error::{Error, Result};
use super::naming::part_file_name;
use super::outdir::{OutputDirAllocator, TempDirAllocator};
use super::partition::Partition;
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A part that has been written to disk
///
/// 已写入磁盘的分段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPart {
    /// Byte range of the input file this part holds
    ///
    /// 此分段对应的输入文件字节范围
    pub partition: Partition,

    /// Path of the output file
    ///
    /// 输出文件路径
    pub path: PathBuf,

    /// Total number of parts in the run
    ///
    /// 本次运行的分段总数
    pub total: usize,
}

impl fmt::Display for WrittenPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Writing {} bytes (starting from {}) into file \"{}\" ({} of {})",
            self.partition.len(),
            self.partition.start(),
            self.path.display(),
            self.partition.index() + 1,
            self.total
        )
    }
}

/// Summary of a completed split
///
/// 一次完成的拆分的汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Directory holding all parts of this run
    ///
    /// 存放本次运行所有分段的目录
    pub output_dir: PathBuf,

    /// Parts in index order
    ///
    /// 按序号排列的分段
    pub parts: Vec<WrittenPart>,
}

impl SplitReport {
    /// Total number of bytes written
    ///
    /// 写入的总字节数
    pub fn total_bytes(&self) -> u64 {
        self.parts.iter().map(|part| part.partition.len()).sum()
    }
}

/// Result of splitting by raw match offsets
///
/// 按原始匹配偏移拆分的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The pattern never matched; nothing was written
    ///
    /// 没有任何匹配，未写入任何内容
    NoMatches,

    /// All parts were written
    ///
    /// 所有分段已写入
    Written(SplitReport),
}

/// Writes each partition of an input file into its own file
///
/// 将输入文件的每个分段写入独立的文件
///
/// Every run gets a fresh directory from the [`OutputDirAllocator`]. The input is
/// opened once and each part is copied with a seek followed by a bounded read.
/// A failure stops the run; parts already written stay on disk.
///
/// 每次运行都从 [`OutputDirAllocator`] 获得新的目录。输入文件只打开一次，
/// 每个分段通过定位后有界读取来复制。出错时运行停止，已写入的分段保留在磁盘上。
///
/// # Examples
///
/// ```
/// # use regex_splitter::{Splitter, SplitOutcome, Result};
/// # use tempfile::tempdir;
/// # fn main() -> Result<()> {
/// # let dir = tempdir()?;
/// # let input = dir.path().join("data.txt");
/// std::fs::write(&input, b"aaaa|bbbb|cc")?;
///
/// let outcome = Splitter::new().split_by_offsets(&input, dir.path(), [4, 9])?;
/// let SplitOutcome::Written(report) = outcome else { panic!("expected parts") };
///
/// assert_eq!(report.parts.len(), 3);
/// assert_eq!(std::fs::read(&report.parts[1].path)?, b"|bbbb");
/// assert!(report.parts[2].path.ends_with("2-data.txt"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Splitter<A = TempDirAllocator> {
    allocator: A,
}

impl Splitter {
    /// Splitter using [`TempDirAllocator`] with the default prefix
    ///
    /// 使用默认前缀 [`TempDirAllocator`] 的拆分器
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: OutputDirAllocator> Splitter<A> {
    /// Splitter using a custom directory allocator
    ///
    /// 使用自定义目录分配器的拆分器
    pub fn with_allocator(allocator: A) -> Self {
        Self { allocator }
    }

    /// Normalize raw offsets against the input size and write the parts
    ///
    /// 根据输入文件大小规范化原始偏移并写入分段
    ///
    /// Returns [`SplitOutcome::NoMatches`] without creating any directory if
    /// `raw` is empty or the input is empty.
    ///
    /// 如果 `raw` 为空或输入文件为空，返回 [`SplitOutcome::NoMatches`]，不创建任何目录。
    pub fn split_by_offsets<I>(
        &self,
        input: impl AsRef<Path>,
        out_base: impl AsRef<Path>,
        raw: I,
    ) -> Result<SplitOutcome>
    where
        I: IntoIterator<Item = u64>,
    {
        self.split_by_offsets_with(input, out_base, raw, |_| {})
    }

    /// Same as [`split_by_offsets`](Self::split_by_offsets), reporting each part as it is written
    ///
    /// 与 [`split_by_offsets`](Self::split_by_offsets) 相同，每写完一个分段即回调通知
    pub fn split_by_offsets_with<I, F>(
        &self,
        input: impl AsRef<Path>,
        out_base: impl AsRef<Path>,
        raw: I,
        on_part: F,
    ) -> Result<SplitOutcome>
    where
        I: IntoIterator<Item = u64>,
        F: FnMut(&WrittenPart),
    {
        let input = input.as_ref();
        let file_size = std::fs::metadata(input)?.len();

        let Some(bounds) = BoundarySet::normalize(raw, file_size) else {
            debug!(path = %input.display(), file_size, "nothing to split");
            return Ok(SplitOutcome::NoMatches);
        };
        debug!(offsets = ?bounds.offsets(), "normalized boundaries");

        self.split(input, out_base, &bounds, on_part)
            .map(SplitOutcome::Written)
    }

    /// Write every partition of `bounds` into a new directory under `out_base`
    ///
    /// 将 `bounds` 的每个分段写入 `out_base` 下的新目录
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] if `input` has no file name
    /// - [`Error::Io`] if the directory cannot be created, the input cannot be
    ///   read, or a part cannot be written
    ///
    /// # Errors
    /// - 如果 `input` 没有文件名，返回 [`Error::InvalidInput`]
    /// - 如果无法创建目录、读取输入或写入分段，返回 [`Error::Io`]
    pub fn split<F>(
        &self,
        input: impl AsRef<Path>,
        out_base: impl AsRef<Path>,
        bounds: &BoundarySet,
        mut on_part: F,
    ) -> Result<SplitReport>
    where
        F: FnMut(&WrittenPart),
    {
        let input = input.as_ref();
        let basename = input
            .file_name()
            .ok_or_else(|| Error::InvalidInput(input.to_path_buf()))?;

        let mut source = File::open(input)?;
        let output_dir = self.allocator.allocate(out_base.as_ref())?;
        debug!(dir = %output_dir.display(), "allocated output directory");

        let total = bounds.partition_count();
        let mut parts = Vec::with_capacity(total);

        for partition in bounds.partitions() {
            let path = output_dir.join(part_file_name(partition.index(), total, basename));
            copy_partition(&mut source, partition, &path)?;

            let part = WrittenPart {
                partition,
                path,
                total,
            };
            info!(
                index = partition.index(),
                start = partition.start(),
                len = partition.len(),
                path = %part.path.display(),
                "wrote part"
            );
            on_part(&part);
            parts.push(part);
        }

        info!(dir = %output_dir.display(), parts = parts.len(), "split complete");
        Ok(SplitReport { output_dir, parts })
    }
}

/// Copy exactly `partition.len()` bytes starting at `partition.start()` into a new file
///
/// 从 `partition.start()` 开始复制恰好 `partition.len()` 字节到新文件
fn copy_partition<R: Read + Seek>(source: &mut R, partition: Partition, dest: &Path) -> Result<()> {
    source.seek(SeekFrom::Start(partition.start()))?;

    let mut out = File::create(dest)?;
    let copied = io::copy(&mut source.by_ref().take(partition.len()), &mut out)?;
    if copied != partition.len() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "expected {} bytes at offset {}, input ended after {}",
                partition.len(),
                partition.start(),
                copied
            ),
        )
        .into());
    }

    out.sync_all()?;
    Ok(())
}
