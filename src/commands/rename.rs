//! # rename 命令实现
//!
//! 以工作目录名为基名，批量或单个重命名文件。
//!
//! ## 功能
//! - 校验路径与模式是否匹配
//! - 目录模式：处理全部直接文件，成功后打印一次确认
//! - 单文件模式：成功时不输出任何内容
//! - dry-run 规划表格与 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{report, BatchRenamer, BatchReport, FileCollector};
use crate::cli::rename::{Mode, RenameArgs};
use crate::error::{RenamerError, Result};
use crate::naming::stem::file_name_of;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 规划表格行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Renamed")]
    renamed: String,
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    validate_path(args.mode, &args.path)?;

    let is_dir_mode = args.mode == Mode::Dir;
    let collector = FileCollector::new(args.path.clone());
    let renamer = BatchRenamer::new(collector.working_directory()?)?
        .dry_run(args.dry_run)
        .verbose(args.verbose)
        .show_progress(is_dir_mode && !args.dry_run);

    if is_dir_mode {
        output::print_header(&format!(
            "Renaming files in '{}'",
            renamer.directory().display()
        ));
    }

    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files to rename in '{}'",
            renamer.directory().display()
        ));
        return Ok(());
    }

    if is_dir_mode {
        output::print_info(&format!(
            "Found {} file(s), base name '{}'",
            files.len(),
            renamer.base_name()
        ));
    }

    let batch = renamer.run(&files)?;

    if let Some(ref report_path) = args.report {
        report::to_csv(&batch, report_path)?;
        if is_dir_mode {
            output::print_success(&format!("Report saved to '{}'", report_path.display()));
        }
    }

    if batch.dry_run {
        print_plan(&batch);
        return Ok(());
    }

    if is_dir_mode {
        output::print_done(&format!(
            "Renamed {} file(s) in '{}'",
            batch.total(),
            renamer.directory().display()
        ));
    }

    Ok(())
}

/// 校验路径存在且与模式匹配
fn validate_path(mode: Mode, path: &Path) -> Result<()> {
    match mode {
        Mode::Dir => {
            if !path.exists() {
                return Err(RenamerError::DirectoryNotFound {
                    path: path.display().to_string(),
                });
            }
            if !path.is_dir() {
                return Err(RenamerError::InvalidArgument(format!(
                    "'{}' is not a directory (mode: {})",
                    path.display(),
                    mode
                )));
            }
        }
        Mode::File => {
            if !path.exists() {
                return Err(RenamerError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            if !path.is_file() {
                return Err(RenamerError::InvalidArgument(format!(
                    "'{}' is not a file (mode: {})",
                    path.display(),
                    mode
                )));
            }
        }
    }
    Ok(())
}

/// 打印 dry-run 规划
fn print_plan(batch: &BatchReport) {
    let rows: Vec<PlanRow> = batch
        .renamed
        .iter()
        .enumerate()
        .map(|(i, outcome)| PlanRow {
            index: i + 1,
            original: file_name_of(&outcome.from),
            renamed: file_name_of(&outcome.to),
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
    output::print_info(&format!("Dry run: {} file(s) would be renamed", rows.len()));
}
