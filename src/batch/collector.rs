//! # 文件收集器
//!
//! 根据输入路径收集待重命名的文件，并确定工作目录。
//!
//! ## 功能
//! - 单文件输入：只处理该文件，工作目录为其所在目录
//! - 目录输入：处理目录下的直接文件（非递归，跳过子目录）
//! - 按文件名排序，保证处理顺序确定
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{RenamerError, Result};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }

    /// 检查输入是否为单文件
    pub fn is_single_file(&self) -> bool {
        self.input.is_file()
    }

    /// 检查输入是否为目录
    pub fn is_directory(&self) -> bool {
        self.input.is_dir()
    }

    /// 工作目录的规范化绝对路径
    ///
    /// 目录输入取自身，文件输入取所在目录。
    pub fn working_directory(&self) -> Result<PathBuf> {
        let dir = if self.is_directory() {
            self.input.as_path()
        } else {
            match self.input.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            }
        };

        fs::canonicalize(dir).map_err(|e| RenamerError::PathUnavailable {
            path: dir.display().to_string(),
            source: e,
        })
    }

    /// 收集所有待处理文件（绝对路径）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let dir = self.working_directory()?;

        if self.is_single_file() {
            // 只规范化目录部分，文件本身若是符号链接则保持不变
            return match self.input.file_name() {
                Some(name) => Ok(vec![dir.join(name)]),
                None => Err(RenamerError::InvalidArgument(format!(
                    "'{}' does not name a file",
                    self.input.display()
                ))),
            };
        }

        if !self.is_directory() {
            return Err(RenamerError::FileNotFound {
                path: self.input.display().to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| RenamerError::PathUnavailable {
                path: dir.display().to_string(),
                source: e.into(),
            })?;

            // 跟随符号链接判断，指向普通文件的链接也会被处理
            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_collect_directory_sorted_and_flat() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("c"), "c").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("d.txt"), "d").unwrap();

        let collector = FileCollector::new(temp.path().to_path_buf());
        assert!(collector.is_directory());
        let files = collector.collect().unwrap();

        assert_eq!(names(&files), vec!["a.txt", "b.txt", "c"]);
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_collect_single_file() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("report.csv");
        fs::write(&file, "x").unwrap();
        fs::write(temp.path().join("other.csv"), "y").unwrap();

        let collector = FileCollector::new(file);
        assert!(collector.is_single_file());
        let files = collector.collect().unwrap();

        assert_eq!(names(&files), vec!["report.csv"]);
        assert_eq!(
            collector.working_directory().unwrap(),
            fs::canonicalize(temp.path()).unwrap()
        );
    }

    #[test]
    fn test_collect_empty_directory() {
        let temp = tempfile::tempdir().unwrap();
        let files = FileCollector::new(temp.path().to_path_buf())
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_file_in_existing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let collector = FileCollector::new(temp.path().join("ghost.txt"));
        assert!(matches!(
            collector.collect(),
            Err(RenamerError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_input() {
        let temp = tempfile::tempdir().unwrap();
        let collector = FileCollector::new(temp.path().join("nope").join("x.txt"));
        assert!(matches!(
            collector.working_directory(),
            Err(RenamerError::PathUnavailable { .. })
        ));
    }
}
