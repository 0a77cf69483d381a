//! Partition type
//!
//! 分段类型

use std::ops::Range;

/// One contiguous slice of the input file destined for one output file
///
/// 输入文件中的一段连续字节，对应一个输出文件
///
/// Represents a half-open range `[start, end)` produced by a
/// [`BoundarySet`](super::BoundarySet). This type can only be created through the
/// boundary set, guaranteeing that partitions are non-empty, non-overlapping and
/// together cover the whole file.
///
/// 表示由 [`BoundarySet`](super::BoundarySet) 生成的左闭右开区间 `[start, end)`。
/// 此类型只能通过边界集合创建，保证分段非空、不重叠且完整覆盖整个文件。
///
/// # Examples
///
/// ```
/// # use regex_splitter::BoundarySet;
/// let bounds = BoundarySet::normalize([40], 100).unwrap();
/// let parts: Vec<_> = bounds.partitions().collect();
///
/// assert_eq!(parts[0].index(), 0);
/// assert_eq!(parts[0].as_range(), 0..40);
/// assert_eq!(parts[1].start(), 40);
/// assert_eq!(parts[1].len(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Position among all partitions of the run (0-based)
    ///
    /// 在本次运行所有分段中的位置（从 0 开始）
    index: usize,

    /// Start offset (inclusive)
    ///
    /// 起始偏移（包含）
    start: u64,

    /// End offset (exclusive)
    ///
    /// 结束偏移（不包含）
    end: u64,
}

impl Partition {
    /// Internal constructor (crate-visible only, no validation)
    ///
    /// 内部构造函数（仅 crate 内可见，不进行验证）
    #[inline]
    pub(crate) fn from_bounds_unchecked(index: usize, start: u64, end: u64) -> Self {
        Self { index, start, end }
    }

    /// Get the partition index
    ///
    /// 获取分段序号
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the start offset
    ///
    /// 获取起始偏移
    #[inline]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Get the end offset (exclusive)
    ///
    /// 获取结束偏移（不包含）
    #[inline]
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Get the length of the partition in bytes
    ///
    /// 获取分段长度（字节数）
    #[inline]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Check if the partition is empty
    ///
    /// Always `false` for partitions produced by a normalized boundary set.
    ///
    /// 检查分段是否为空。由规范化边界集合生成的分段总是非空。
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a standard `Range<u64>`
    ///
    /// 转换为标准库的 `Range<u64>`
    #[inline]
    pub fn as_range(&self) -> Range<u64> {
        self.start..self.end
    }

    /// Convert to a `(start, end)` tuple
    ///
    /// 转换为 `(start, end)` 元组
    #[inline]
    pub fn as_range_tuple(&self) -> (u64, u64) {
        (self.start, self.end)
    }
}

impl From<Partition> for Range<u64> {
    #[inline]
    fn from(partition: Partition) -> Self {
        partition.as_range()
    }
}
