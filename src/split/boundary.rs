//! Boundary normalization
//!
//! 边界规范化

use super::partition::Partition;
use std::collections::BTreeSet;

/// Normalized, strictly increasing set of partition boundaries
///
/// 规范化后严格递增的分段边界集合
///
/// The first offset is always `0`, the last is always the file size, and every
/// offset in between lies strictly inside `(0, file_size)`. Consecutive pairs of
/// offsets describe the [`Partition`]s of the file.
///
/// 第一个偏移总是 `0`，最后一个总是文件大小，中间的偏移都严格位于 `(0, file_size)` 之内。
/// 相邻的两个偏移描述文件的一个 [`Partition`]。
///
/// # Example
///
/// ```
/// # use regex_splitter::BoundarySet;
/// // Unsorted, duplicated and out-of-range offsets are tolerated
/// // 允许乱序、重复和越界的偏移
/// let bounds = BoundarySet::normalize([70, 0, 40, 40, 100, 250], 100).unwrap();
/// assert_eq!(bounds.offsets(), &[0, 40, 70, 100]);
/// assert_eq!(bounds.partition_count(), 3);
///
/// // No raw offsets at all means there is nothing to split
/// // 没有任何原始偏移意味着无需拆分
/// assert!(BoundarySet::normalize([], 100).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundarySet {
    offsets: Vec<u64>,
}

impl BoundarySet {
    /// Build a boundary set from raw match offsets
    ///
    /// 从原始匹配偏移构建边界集合
    ///
    /// Offsets outside `(0, file_size)` are dropped, the rest are deduplicated and
    /// sorted, then `0` and `file_size` are added at the ends.
    ///
    /// 丢弃 `(0, file_size)` 之外的偏移，其余偏移去重并排序，然后在两端补上 `0` 和 `file_size`。
    ///
    /// # Returns
    /// `None` if `raw` is empty (no match) or the file is empty
    ///
    /// # 返回值
    /// 如果 `raw` 为空（没有匹配）或文件为空，返回 `None`
    pub fn normalize<I>(raw: I, file_size: u64) -> Option<Self>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut raw = raw.into_iter().peekable();
        if raw.peek().is_none() || file_size == 0 {
            return None;
        }

        let inner: BTreeSet<u64> = raw.filter(|&offset| 0 < offset && offset < file_size).collect();

        let mut offsets = Vec::with_capacity(inner.len() + 2);
        offsets.push(0);
        offsets.extend(inner);
        offsets.push(file_size);

        Some(Self { offsets })
    }

    /// All boundary offsets, starting with `0` and ending with the file size
    ///
    /// 所有边界偏移，以 `0` 开头、以文件大小结尾
    #[inline]
    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    /// Size of the file the boundaries were computed for
    ///
    /// 计算边界时所用的文件大小
    #[inline]
    pub fn file_size(&self) -> u64 {
        // normalize() always pushes file_size last
        self.offsets[self.offsets.len() - 1]
    }

    /// Number of partitions described by this set
    ///
    /// 此集合描述的分段数量
    #[inline]
    pub fn partition_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Iterate over the partitions in index order
    ///
    /// 按序号顺序遍历分段
    pub fn partitions(&self) -> impl ExactSizeIterator<Item = Partition> + '_ {
        self.offsets
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Partition::from_bounds_unchecked(index, pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_match_gives_two_partitions() {
        let bounds = BoundarySet::normalize([40], 100).unwrap();
        assert_eq!(bounds.offsets(), &[0, 40, 100]);

        let parts: Vec<_> = bounds.partitions().map(|p| p.as_range_tuple()).collect();
        assert_eq!(parts, vec![(0, 40), (40, 100)]);
    }

    #[test]
    fn test_edge_offsets_are_discarded() {
        let bounds = BoundarySet::normalize([0, 100], 100).unwrap();
        assert_eq!(bounds.offsets(), &[0, 100]);
        assert_eq!(bounds.partition_count(), 1);
    }

    #[test]
    fn test_duplicates_do_not_create_empty_partitions() {
        let bounds = BoundarySet::normalize([30, 30, 60, 30], 90).unwrap();
        assert_eq!(bounds.offsets(), &[0, 30, 60, 90]);
        assert!(bounds.partitions().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let bounds = BoundarySet::normalize([80, 10, 50], 100).unwrap();
        assert_eq!(bounds.offsets(), &[0, 10, 50, 80, 100]);
    }

    #[test]
    fn test_out_of_range_offsets_are_dropped() {
        let bounds = BoundarySet::normalize([5, 1000, u64::MAX], 10).unwrap();
        assert_eq!(bounds.offsets(), &[0, 5, 10]);
    }

    #[test]
    fn test_empty_raw_means_no_matches() {
        assert!(BoundarySet::normalize(Vec::new(), 10).is_none());
    }

    #[test]
    fn test_empty_file_means_nothing_to_split() {
        assert!(BoundarySet::normalize([0], 0).is_none());
    }

    #[test]
    fn test_file_size_accessor() {
        let bounds = BoundarySet::normalize([3], 7).unwrap();
        assert_eq!(bounds.file_size(), 7);
    }

    proptest! {
        #[test]
        fn prop_normalized_set_is_valid(
            raw in prop::collection::vec(any::<u64>(), 1..64),
            file_size in 1u64..10_000,
        ) {
            let raw: Vec<u64> = raw.into_iter().map(|x| x % (file_size * 2)).collect();
            let bounds = BoundarySet::normalize(raw, file_size).unwrap();
            let offsets = bounds.offsets();

            prop_assert_eq!(offsets[0], 0);
            prop_assert_eq!(*offsets.last().unwrap(), file_size);
            prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(offsets.iter().all(|&o| o <= file_size));
        }

        #[test]
        fn prop_normalization_is_idempotent(
            raw in prop::collection::vec(0u64..500, 1..32),
            file_size in 1u64..500,
        ) {
            let once = BoundarySet::normalize(raw, file_size).unwrap();
            let twice = BoundarySet::normalize(once.offsets().to_vec(), file_size).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_partitions_cover_file(
            raw in prop::collection::vec(0u64..2_000, 1..32),
            file_size in 1u64..2_000,
        ) {
            let bounds = BoundarySet::normalize(raw, file_size).unwrap();
            let mut expected_start = 0;
            for (i, part) in bounds.partitions().enumerate() {
                prop_assert_eq!(part.index(), i);
                prop_assert_eq!(part.start(), expected_start);
                prop_assert!(part.len() > 0);
                expected_start = part.end();
            }
            prop_assert_eq!(expected_start, file_size);
        }
    }
}
