//! # 文件名拆分
//!
//! 按第一个 `.` 拆分文件名：之前为 stem，之后（含 `.`）为扩展名。
//! `archive.tar.gz` 的 stem 为 `archive`，扩展名为 `.tar.gz`。
//!
//! 以原始字节处理，非 UTF-8 的扩展名原样保留。

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// 第一个 `.` 的字节位置
pub fn first_dot(name: &[u8]) -> Option<usize> {
    name.iter().position(|&b| b == b'.')
}

/// 文件名在每个 `.` 之前的前缀，以及完整文件名
///
/// `1_v1.2.txt` 依次产生 `1_v1`, `1_v1.2`, `1_v1.2.txt`。
/// 第一个前缀即 stem。
pub fn dot_prefixes<'a>(name: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
    name.iter()
        .enumerate()
        .filter(|(_, b)| **b == b'.')
        .map(move |(i, _)| &name[..i])
        .chain(std::iter::once(name))
}

/// 取路径最后一段作为字符串（仅用于显示，非 UTF-8 字符按 lossy 处理）
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(OsStr::to_string_lossy)
        .map(|s| s.into_owned())
        .unwrap_or_default()
}

/// 路径对应文件的扩展名（含前导 `.`，可能为空），字节不变
pub fn extension_of(path: &Path) -> OsString {
    match path.file_name() {
        Some(name) => extension_os(name),
        None => OsString::new(),
    }
}

#[cfg(unix)]
fn extension_os(name: &OsStr) -> OsString {
    use std::os::unix::ffi::OsStrExt;

    let bytes = name.as_bytes();
    match first_dot(bytes) {
        Some(idx) => OsStr::from_bytes(&bytes[idx..]).to_os_string(),
        None => OsString::new(),
    }
}

#[cfg(not(unix))]
fn extension_os(name: &OsStr) -> OsString {
    let name = name.to_string_lossy();
    match first_dot(name.as_bytes()) {
        Some(idx) => OsString::from(&name[idx..]),
        None => OsString::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(name: &str) -> Vec<&str> {
        dot_prefixes(name.as_bytes())
            .map(|p| std::str::from_utf8(p).unwrap())
            .collect()
    }

    #[test]
    fn test_first_dot() {
        assert_eq!(first_dot(b"report.csv"), Some(6));
        assert_eq!(first_dot(b"Makefile"), None);
        assert_eq!(first_dot(b".bashrc"), Some(0));
    }

    #[test]
    fn test_dot_prefixes() {
        assert_eq!(prefixes("1_v1.2.txt"), vec!["1_v1", "1_v1.2", "1_v1.2.txt"]);
        assert_eq!(prefixes("Makefile"), vec!["Makefile"]);
        assert_eq!(prefixes(".bashrc"), vec!["", ".bashrc"]);
    }

    #[test]
    fn test_extension_simple() {
        assert_eq!(extension_of(Path::new("report.csv")), OsString::from(".csv"));
    }

    #[test]
    fn test_extension_none() {
        assert_eq!(extension_of(Path::new("Makefile")), OsString::new());
    }

    #[test]
    fn test_extension_multiple_dots() {
        assert_eq!(
            extension_of(Path::new("/data/archive.tar.gz")),
            OsString::from(".tar.gz")
        );
        assert_eq!(
            extension_of(Path::new("1_my_folder.v2.txt")),
            OsString::from(".v2.txt")
        );
    }

    #[test]
    fn test_extension_dotfile_and_trailing_dot() {
        assert_eq!(extension_of(Path::new(".bashrc")), OsString::from(".bashrc"));
        assert_eq!(extension_of(Path::new("notes.")), OsString::from("."));
    }

    #[cfg(unix)]
    #[test]
    fn test_extension_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"a.\xff\xfe"));
        assert_eq!(extension_of(path).as_bytes(), b".\xff\xfe");
    }

    #[test]
    fn test_file_name_of() {
        let path = Path::new("/data/My Folder/photo.raw.jpg");
        assert_eq!(file_name_of(path), "photo.raw.jpg");
    }
}
