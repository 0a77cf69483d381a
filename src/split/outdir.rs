//! Output directory allocation
//!
//! 输出目录分配

use std::io;
use std::path::{Path, PathBuf};

/// Default prefix of run directories
///
/// 运行目录的默认前缀
pub const DEFAULT_PREFIX: &str = "splitter-";

/// Capability to create a fresh, uniquely named directory for one run
///
/// 为一次运行创建新的、名称唯一的目录的能力
///
/// Implementations must return a directory that did not exist before the call, so
/// that concurrent runs sharing a base directory never write into each other's
/// output. The directory must outlive the allocator.
///
/// 实现必须返回调用前不存在的目录，使共享同一基础目录的并发运行不会互相覆盖输出。
/// 目录的生命周期必须长于分配器。
pub trait OutputDirAllocator {
    /// Create a new directory inside `base` and return its path
    ///
    /// 在 `base` 中创建新目录并返回其路径
    fn allocate(&self, base: &Path) -> io::Result<PathBuf>;
}

/// Allocates `<prefix><random suffix>` directories using `tempfile`
///
/// 使用 `tempfile` 分配 `<前缀><随机后缀>` 形式的目录
///
/// The directories are kept on disk; they are not removed when dropped.
///
/// 目录会保留在磁盘上，不会在释放时删除。
#[derive(Debug, Clone)]
pub struct TempDirAllocator {
    prefix: String,
}

impl TempDirAllocator {
    /// Allocator with a custom directory name prefix
    ///
    /// 使用自定义目录名前缀的分配器
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The directory name prefix
    ///
    /// 目录名前缀
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for TempDirAllocator {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

impl OutputDirAllocator for TempDirAllocator {
    fn allocate(&self, base: &Path) -> io::Result<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix(&self.prefix)
            .tempdir_in(base)?;
        Ok(dir.keep())
    }
}

impl<A: OutputDirAllocator + ?Sized> OutputDirAllocator for &A {
    fn allocate(&self, base: &Path) -> io::Result<PathBuf> {
        (**self).allocate(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_allocates_prefixed_directory() {
        let base = tempdir().unwrap();
        let dir = TempDirAllocator::default().allocate(base.path()).unwrap();

        assert!(dir.is_dir());
        assert_eq!(dir.parent().unwrap(), base.path());
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(DEFAULT_PREFIX));
        assert!(name.len() > DEFAULT_PREFIX.len());
    }

    #[test]
    fn test_each_allocation_is_unique() {
        let base = tempdir().unwrap();
        let allocator = TempDirAllocator::with_prefix("run-");
        let first = allocator.allocate(base.path()).unwrap();
        let second = allocator.allocate(base.path()).unwrap();

        assert_ne!(first, second);
        assert!(first.is_dir() && second.is_dir());
    }

    #[test]
    fn test_missing_base_is_an_error() {
        let base = tempdir().unwrap();
        let missing = base.path().join("does-not-exist");
        assert!(TempDirAllocator::default().allocate(&missing).is_err());
    }
}
