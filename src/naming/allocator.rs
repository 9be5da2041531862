//! # 空闲文件名分配器
//!
//! 给定目录和基名，计算下一个未被占用的 `<n>_<base>` 文件名。
//!
//! ## 算法
//! - 非递归枚举目录，子目录不计入
//! - 候选 `<n>_<base>` 被占用，当且仅当某个条目名等于它或以 `候选.` 开头
//! - 从 n = 1 开始线性递增，返回第一个未被占用的候选
//! - 保留原文件扩展名（原始字节）
//!
//! 基名不含 `.` 时，上述规则与"按第一个 `.` 取 stem 比较"完全一致；
//! 基名含 `.`（如目录 `v1.2`）时仍能识别 `1_v1.2.txt` 占用了 `1_v1.2`。
//!
//! 搜索本身是 `NameSet` 上的纯函数，调用方可以自行维护快照
//! （dry-run 规划、冲突重试）。
//!
//! ## 依赖关系
//! - 被 `batch/renamer.rs` 调用
//! - 使用 `walkdir` 枚举目录

use crate::error::{RenamerError, Result};
use crate::naming::stem::{dot_prefixes, extension_of};

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 目录中已存在的文件名集合
///
/// 以每个文件名的全部 `.` 前缀为键并计数：`a.txt` 和 `a.csv` 共享前缀 `a`，
/// 移走其中一个后 `a` 仍被占用。
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    prefixes: HashMap<Vec<u8>, usize>,
}

impl NameSet {
    /// 枚举目录，收集所有非目录条目的名字
    pub fn scan(directory: &Path) -> Result<Self> {
        let mut names = Self::default();

        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| RenamerError::PathUnavailable {
                path: directory.display().to_string(),
                source: e.into(),
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            names.insert(entry.file_name());
        }

        Ok(names)
    }

    /// 从文件名列表构建
    #[cfg(test)]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name.as_ref());
        }
        set
    }

    pub fn insert(&mut self, name: &OsStr) {
        for prefix in dot_prefixes(name.as_encoded_bytes()) {
            *self.prefixes.entry(prefix.to_vec()).or_insert(0) += 1;
        }
    }

    pub fn remove(&mut self, name: &OsStr) {
        for prefix in dot_prefixes(name.as_encoded_bytes()) {
            if let Some(count) = self.prefixes.get_mut(prefix) {
                *count -= 1;
                if *count == 0 {
                    self.prefixes.remove(prefix);
                }
            }
        }
    }

    /// 候选名是否已被某个条目占用
    pub fn is_taken(&self, candidate: &str) -> bool {
        self.prefixes.contains_key(candidate.as_bytes())
    }
}

/// 返回第一个未被占用的候选 `<n>_<base>`
pub fn first_free_candidate(names: &NameSet, base_name: &str) -> Result<String> {
    first_free_up_to(names, base_name, u64::MAX)
}

fn first_free_up_to(names: &NameSet, base_name: &str, limit: u64) -> Result<String> {
    let mut n: u64 = 1;
    loop {
        let candidate = format!("{}_{}", n, base_name);
        if !names.is_taken(&candidate) {
            return Ok(candidate);
        }
        if n >= limit {
            return Err(RenamerError::NameSpaceExhausted {
                base_name: base_name.to_string(),
            });
        }
        n += 1;
    }
}

/// 空闲文件名分配器
pub struct NameAllocator<'a> {
    /// 目标目录（绝对路径）
    directory: &'a Path,
    /// 规范化后的基名
    base_name: &'a str,
}

impl<'a> NameAllocator<'a> {
    pub fn new(directory: &'a Path, base_name: &'a str) -> Self {
        Self {
            directory,
            base_name,
        }
    }

    /// 重新枚举目录并为 `file` 分配目标路径
    pub fn allocate(&self, file: &Path) -> Result<PathBuf> {
        let names = NameSet::scan(self.directory)?;
        self.allocate_in(file, &names)
    }

    /// 基于给定快照为 `file` 分配目标路径（不访问文件系统）
    pub fn allocate_in(&self, file: &Path, names: &NameSet) -> Result<PathBuf> {
        let mut file_name = OsString::from(first_free_candidate(names, self.base_name)?);
        file_name.push(extension_of(file));
        Ok(self.directory.join(file_name))
    }
}
