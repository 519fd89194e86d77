use std::path::{Path, PathBuf};

pub const LOGO_FILE_NAME: &str = "logo.png";
/// 相对于脚本目录的上一级目录
pub const OUTPUT_RELATIVE_PATH: &str = "include/69/resource/Logo.h";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoPaths {
    pub logo: PathBuf,
    pub output: PathBuf,
}

impl LogoPaths {
    /// `dir/logo.png` in, `<parent of dir>/include/69/resource/Logo.h` out.
    pub fn from_script_dir(dir: &Path) -> Self {
        let root = match dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => dir.join(".."),
        };
        Self {
            logo: dir.join(LOGO_FILE_NAME),
            output: root.join(OUTPUT_RELATIVE_PATH),
        }
    }
}

/// 以编译时的 crate 目录作为脚本目录, 复制到别处的二进制仍读写构建目录
impl Default for LogoPaths {
    fn default() -> Self {
        Self::from_script_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}
