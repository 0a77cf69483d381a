//! Error types for regex-splitter
//!
//! regex-splitter 的错误类型

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for locate and split operations
///
/// 定位与拆分操作的错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading the input or writing a part
    ///
    /// 读取输入或写入分段时的 I/O 错误
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The pattern could not be compiled
    ///
    /// 正则表达式无法编译
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Input path has no file name to derive part names from
    ///
    /// 输入路径没有可用于生成分段文件名的文件名
    #[error("input path {} has no file name", .0.display())]
    InvalidInput(PathBuf),
}

/// Convert from Error to io::Error for compatibility
///
/// 从 Error 转换到 io::Error 以保持兼容性
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(io_err) => io_err,
            Error::Pattern(_) | Error::InvalidInput(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
            }
        }
    }
}

/// Result type alias using our custom Error type
///
/// 使用自定义 Error 类型的 Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;
