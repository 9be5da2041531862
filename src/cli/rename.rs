//! # 重命名参数 CLI 定义
//!
//! 模式选择（目录/单文件）与输出选项。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 重命名模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Mode {
    /// Rename every file directly inside a directory
    Dir,
    /// Rename a single file inside its directory
    File,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Dir => write!(f, "dir"),
            Mode::File => write!(f, "file"),
        }
    }
}

/// 重命名参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// What PATH refers to
    #[arg(short, long, value_enum)]
    pub mode: Mode,

    /// Directory (dir mode) or file (file mode) to rename
    pub path: PathBuf,

    /// Show the planned renames without touching any file
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Write an original,renamed CSV report after a successful run
    #[arg(short, long, value_name = "CSV")]
    pub report: Option<PathBuf>,

    /// Print every rename as it happens
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
