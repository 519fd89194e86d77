use std::{fs, io, path::Path};

use log::debug;

use crate::array::{DEFAULT_BYTES_PER_LINE, bytes_to_array};

/// The `Logo.h` resource header for one image.
#[derive(Debug, Clone, Copy)]
pub struct LogoHeader<'a> {
    pub width: u32,
    pub height: u32,
    pub bytes: &'a [u8],
}

impl<'a> LogoHeader<'a> {
    pub fn new(width: u32, height: u32, bytes: &'a [u8]) -> Self {
        Self { width, height, bytes }
    }

    pub fn array_len(&self) -> usize {
        self.bytes.len()
    }

    /// 生成完整的头文件内容
    pub fn render(&self) -> String {
        let body = bytes_to_array(self.bytes, DEFAULT_BYTES_PER_LINE);
        format!(
            "#pragma once\n\
             \n\
             namespace resource\n\
             {{\n\
             \n\
             inline int s_LogoWidth = {width};\n\
             inline int s_LogoHeight = {height};\n\
             \n\
             inline unsigned char s_Logo[{len}] = {{\n\
             {body}\n\
             }};\n\
             \n\
             }} // namespace resource\n",
            width = self.width,
            height = self.height,
            len = self.array_len(),
        )
    }
}

/// Write `contents` to `path` in a single call, creating parent directories
/// first. An existing file is overwritten.
pub fn write_header(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
