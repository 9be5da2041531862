//! # 批量处理模块
//!
//! 提供单文件/整目录的批量重命名能力。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集待处理文件列表
//! - 顺序重命名，首个失败即中止
//! - CSV 报告导出
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `naming/` 分配名称
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod renamer;
pub mod report;

pub use collector::FileCollector;
pub use renamer::{BatchRenamer, BatchReport};
