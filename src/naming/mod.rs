//! # 命名模块
//!
//! 负责从目录名推导基名、拆分文件名以及分配空闲的新文件名。
//!
//! ## 依赖关系
//! - 被 `batch/` 模块使用
//! - 子模块: base_name, stem, allocator

pub mod allocator;
pub mod base_name;
pub mod stem;

pub use allocator::{NameAllocator, NameSet};
pub use base_name::base_name_of;
