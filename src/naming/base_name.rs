//! # 基名推导
//!
//! 基名 = 目录名转小写，空格替换为下划线。每批次只计算一次。

use crate::error::{RenamerError, Result};
use crate::naming::stem::file_name_of;

use std::path::Path;

/// 规范化目录名
pub fn normalize(dir_name: &str) -> String {
    dir_name.to_lowercase().replace(' ', "_")
}

/// 从目录路径推导基名
///
/// 目录应已是绝对路径（规范化后）；根目录没有名字，返回错误。
pub fn base_name_of(directory: &Path) -> Result<String> {
    let name = file_name_of(directory);
    if name.is_empty() {
        return Err(RenamerError::InvalidArgument(format!(
            "Cannot derive a base name from '{}'",
            directory.display()
        )));
    }
    Ok(normalize(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("My Folder"), "my_folder");
        assert_eq!(normalize("Holiday  Photos 2024"), "holiday__photos_2024");
        assert_eq!(normalize("already_normal"), "already_normal");
    }

    #[test]
    fn test_normalize_keeps_other_whitespace() {
        assert_eq!(normalize("Tab\tName"), "tab\tname");
    }

    #[test]
    fn test_base_name_of_path() {
        let base = base_name_of(Path::new("/data/My Folder")).unwrap();
        assert_eq!(base, "my_folder");
    }

    #[test]
    fn test_base_name_of_root_fails() {
        assert!(base_name_of(Path::new("/")).is_err());
    }
}
