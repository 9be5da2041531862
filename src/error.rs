//! # 统一错误处理模块
//!
//! 定义 dirnamer 的所有错误类型，使用 `thiserror` 派生。
//!
//! `main.rs` 只打印 `Display`，因此底层原因直接写进消息文本。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// dirnamer 统一错误类型
#[derive(Error, Debug)]
pub enum RenamerError {
    // ─────────────────────────────────────────────────────────────
    // 重命名核心错误
    // ─────────────────────────────────────────────────────────────
    #[error("Path unavailable: {path}: {source}")]
    PathUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No free name left for base name '{base_name}'")]
    NameSpaceExhausted { base_name: String },

    #[error("Failed to move '{from}' to '{to}': {source}")]
    MoveFailure {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 报告输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenamerError>;
