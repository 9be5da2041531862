//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! - `dirnamer --mode dir <DIR>`: 重命名目录下所有文件
//! - `dirnamer --mode file <FILE>`: 只重命名单个文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename

pub mod rename;

use clap::Parser;

/// dirnamer - 以目录名为文件统一命名
#[derive(Parser)]
#[command(name = "dirnamer")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Rename files after their directory with collision-free numeric prefixes",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub rename: rename::RenameArgs,

    /// Disable colored output
    #[arg(long, env = "DIRNAMER_NO_COLOR", default_value_t = false, value_parser = clap::builder::BoolishValueParser::new())]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::rename::Mode;
    use super::*;

    #[test]
    fn test_parse_dir_mode() {
        let cli = Cli::try_parse_from(["dirnamer", "--mode", "dir", "/data/My Folder"]).unwrap();
        assert_eq!(cli.rename.mode, Mode::Dir);
        assert_eq!(cli.rename.path, std::path::PathBuf::from("/data/My Folder"));
        assert!(!cli.rename.dry_run);
        assert!(cli.rename.report.is_none());
    }

    #[test]
    fn test_parse_file_mode_with_options() {
        let cli = Cli::try_parse_from([
            "dirnamer", "-m", "file", "report.csv", "-n", "-v", "--report", "out.csv",
        ])
        .unwrap();
        assert_eq!(cli.rename.mode, Mode::File);
        assert!(cli.rename.dry_run);
        assert!(cli.rename.verbose);
        assert_eq!(cli.rename.report, Some(std::path::PathBuf::from("out.csv")));
    }

    #[test]
    fn test_mode_required() {
        assert!(Cli::try_parse_from(["dirnamer", "somewhere"]).is_err());
        assert!(Cli::try_parse_from(["dirnamer", "--mode", "tree", "x"]).is_err());
    }
}
