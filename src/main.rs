//! # dirnamer - 以目录名统一重命名文件
//!
//! 将目录中的文件重命名为 `<n>_<目录名>` 形式，`n` 取第一个未被占用的编号，
//! 保证重复运行不会覆盖已有文件。
//!
//! ## 模式
//! - `--mode dir`  - 重命名目录下所有直接文件
//! - `--mode file` - 只重命名单个文件（成功时静默）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (文件收集、批量重命名、报告)
//!   │     └── naming/  (基名推导、空闲名分配)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod naming;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = commands::run(cli.rename) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
