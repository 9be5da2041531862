//! # 批量重命名器
//!
//! 顺序处理文件列表，为每个文件分配空闲名称并移动。
//!
//! ## 功能
//! - 每个文件都重新枚举目录，后处理的文件能看到先前分配的名称
//! - 第一个失败立即中止，剩余文件保持不变
//! - 目标路径被占用时（竞争或同名子目录）排除该文件名后重试
//! - dry-run：在内存快照上模拟整批移动，不触碰文件系统
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `naming/` 分配名称
//! - 使用 `utils/progress.rs`, `utils/output.rs`

use crate::error::{RenamerError, Result};
use crate::naming::stem::file_name_of;
use crate::naming::{base_name_of, NameAllocator, NameSet};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 单个文件的最大分配尝试次数
pub const MAX_ALLOCATION_ATTEMPTS: usize = 8;

/// 单个文件的重命名结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    /// 原路径
    pub from: PathBuf,
    /// 新路径
    pub to: PathBuf,
}

/// 批量重命名结果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 按处理顺序排列的重命名记录
    pub renamed: Vec<RenameOutcome>,
    /// 是否为 dry-run 规划
    pub dry_run: bool,
}

impl BatchReport {
    /// 总处理数量
    pub fn total(&self) -> usize {
        self.renamed.len()
    }
}

/// 批量重命名器
pub struct BatchRenamer {
    /// 工作目录（绝对路径）
    directory: PathBuf,
    /// 由目录名推导的基名
    base_name: String,
    dry_run: bool,
    verbose: bool,
    show_progress: bool,
}

impl BatchRenamer {
    /// 为工作目录创建重命名器，基名在此计算一次
    pub fn new(directory: PathBuf) -> Result<Self> {
        let base_name = base_name_of(&directory)?;
        Ok(Self {
            directory,
            base_name,
            dry_run: false,
            verbose: false,
            show_progress: false,
        })
    }

    /// 只规划不移动
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 逐个打印重命名记录
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 多文件时显示进度条
    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// 处理文件列表，遇到第一个错误即返回
    pub fn run(&self, files: &[PathBuf]) -> Result<BatchReport> {
        let pb = if self.show_progress && files.len() > 1 {
            progress::create_progress_bar(files.len() as u64, "Renaming")
        } else {
            ProgressBar::hidden()
        };

        let result = if self.dry_run {
            self.plan(files, &pb)
        } else {
            self.rename_all(files, &pb)
        };

        pb.finish_and_clear();
        result
    }

    fn rename_all(&self, files: &[PathBuf], pb: &ProgressBar) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for file in files {
            let outcome = self.rename_one(file)?;
            self.log_outcome(&outcome, pb);
            report.renamed.push(outcome);
            pb.inc(1);
        }

        Ok(report)
    }

    /// 在单个快照上模拟整批移动
    fn plan(&self, files: &[PathBuf], pb: &ProgressBar) -> Result<BatchReport> {
        let mut names = NameSet::scan(&self.directory)?;
        let mut report = BatchReport {
            dry_run: true,
            ..Default::default()
        };

        for file in files {
            // 文件已在快照中跟踪，只有子目录会在文件系统上占位
            let dest = self.allocate_unoccupied(file, &names, |p| {
                p.symlink_metadata().map(|m| m.is_dir()).unwrap_or(false)
            })?;

            if let Some(name) = file.file_name() {
                names.remove(name);
            }
            if let Some(name) = dest.file_name() {
                names.insert(name);
            }

            let outcome = RenameOutcome {
                from: file.clone(),
                to: dest,
            };
            self.log_outcome(&outcome, pb);
            report.renamed.push(outcome);
            pb.inc(1);
        }

        Ok(report)
    }

    /// 为单个文件分配名称并移动
    pub fn rename_one(&self, file: &Path) -> Result<RenameOutcome> {
        let allocator = NameAllocator::new(&self.directory, &self.base_name);
        let mut dest = allocator.allocate(file)?;

        if dest.symlink_metadata().is_ok() {
            // 目标被占用（竞争或同名子目录）
            let names = NameSet::scan(&self.directory)?;
            dest = self.allocate_unoccupied(file, &names, |p| p.symlink_metadata().is_ok())?;
        }

        move_file(file, &dest)?;

        Ok(RenameOutcome {
            from: file.to_path_buf(),
            to: dest,
        })
    }

    /// 分配目标路径；若路径被占用则排除该文件名重试
    fn allocate_unoccupied<F>(&self, file: &Path, names: &NameSet, occupied: F) -> Result<PathBuf>
    where
        F: Fn(&Path) -> bool,
    {
        let allocator = NameAllocator::new(&self.directory, &self.base_name);
        let mut names = names.clone();
        let mut last = PathBuf::new();

        for _ in 0..MAX_ALLOCATION_ATTEMPTS {
            let dest = allocator.allocate_in(file, &names)?;
            if !occupied(&dest) {
                return Ok(dest);
            }
            if let Some(name) = dest.file_name() {
                names.insert(name);
            }
            last = dest;
        }

        Err(RenamerError::MoveFailure {
            from: file.display().to_string(),
            to: last.display().to_string(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "destination is occupied"),
        })
    }

    fn log_outcome(&self, outcome: &RenameOutcome, pb: &ProgressBar) {
        if self.verbose {
            pb.suspend(|| {
                output::print_rename(&file_name_of(&outcome.from), &file_name_of(&outcome.to));
            });
        }
    }
}

/// 同目录内移动文件
fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            RenamerError::PathUnavailable {
                path: from.display().to_string(),
                source: e,
            }
        } else {
            RenamerError::MoveFailure {
                from: from.display().to_string(),
                to: to.display().to_string(),
                source: e,
            }
        }
    })
}
