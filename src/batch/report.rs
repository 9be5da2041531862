//! # 重命名报告导出
//!
//! 将批量重命名记录写入 CSV（original, renamed），作为无撤销功能下的审计记录。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `batch/renamer.rs` 的 BatchReport 结构
//! - 使用 `csv` + `serde` 写入

use crate::batch::BatchReport;
use crate::error::{RenamerError, Result};

use serde::Serialize;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct ReportRow {
    original: String,
    renamed: String,
}

/// 导出重命名记录为 CSV
pub fn to_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for outcome in &report.renamed {
        wtr.serialize(ReportRow {
            original: outcome.from.display().to_string(),
            renamed: outcome.to.display().to_string(),
        })?;
    }

    // 空报告时 serialize 不会写表头
    if report.renamed.is_empty() {
        wtr.write_record(["original", "renamed"])?;
    }

    wtr.flush().map_err(|e| RenamerError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::renamer::RenameOutcome;
    use std::path::PathBuf;

    #[test]
    fn test_to_csv() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("report.csv");
        let report = BatchReport {
            renamed: vec![
                RenameOutcome {
                    from: PathBuf::from("/data/My Folder/a.txt"),
                    to: PathBuf::from("/data/My Folder/1_my_folder.txt"),
                },
                RenameOutcome {
                    from: PathBuf::from("/data/My Folder/b.txt"),
                    to: PathBuf::from("/data/My Folder/2_my_folder.txt"),
                },
            ],
            dry_run: false,
        };

        to_csv(&report, &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "original,renamed");
        assert_eq!(
            lines[1],
            "/data/My Folder/a.txt,/data/My Folder/1_my_folder.txt"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_to_csv_empty_has_header() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("empty.csv");

        to_csv(&BatchReport::default(), &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content.trim(), "original,renamed");
    }
}
