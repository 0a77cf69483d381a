//! Output file naming
//!
//! 输出文件命名

use std::ffi::{OsStr, OsString};

/// Number of digits used for the index prefix of `total` parts
///
/// `total` 个分段的序号前缀所用的位数
///
/// Equals the number of decimal digits of the largest index `total - 1`, with a
/// minimum of one digit. Padding every index to this width keeps lexicographic
/// order of file names equal to numeric order of indices.
///
/// 等于最大序号 `total - 1` 的十进制位数，最少为 1 位。
/// 所有序号补齐到此宽度后，文件名的字典序与序号的数值顺序一致。
///
/// ```
/// # use regex_splitter::pad_width;
/// assert_eq!(pad_width(1), 1);
/// assert_eq!(pad_width(10), 1);
/// assert_eq!(pad_width(12), 2);
/// assert_eq!(pad_width(101), 3);
/// ```
#[inline]
pub fn pad_width(total: usize) -> usize {
    total
        .saturating_sub(1)
        .checked_ilog10()
        .map_or(1, |digits| digits as usize + 1)
}

/// Build the file name of the part at `index` out of `total`
///
/// 构建第 `index` 个分段（共 `total` 个）的文件名
///
/// The name is `<padded index>-<basename>`.
///
/// ```
/// # use regex_splitter::part_file_name;
/// # use std::ffi::OsStr;
/// assert_eq!(part_file_name(3, 12, OsStr::new("log.txt")), "03-log.txt");
/// ```
pub fn part_file_name(index: usize, total: usize, basename: &OsStr) -> OsString {
    let width = pad_width(total);
    let mut name = OsString::from(format!("{index:0width$}-"));
    name.push(basename);
    name
}
