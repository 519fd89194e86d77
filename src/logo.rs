use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;

use crate::{
    dimensions::{Dimensions, read_dimensions},
    header::{LogoHeader, write_header},
    paths::LogoPaths,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub dimensions: Dimensions,
    pub array_len: usize,
    pub dimensions_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written(Summary),
    /// 输入文件不存在, 没有写入任何内容
    InputMissing,
}

pub fn read_logo_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Convert the logo at `paths.logo` into the header at `paths.output`.
pub fn run(paths: &LogoPaths) -> Result<RunOutcome> {
    // 先检查输入, 缺失时不做任何读写
    if !paths.logo.exists() {
        return Ok(RunOutcome::InputMissing);
    }

    let reading = read_dimensions(&paths.logo);

    info!("Reading {}", paths.logo.display());
    let bytes = read_logo_bytes(&paths.logo)?;

    info!("Creating C++ header file");
    let header = LogoHeader::new(reading.dimensions.width, reading.dimensions.height, &bytes);
    let contents = header.render();
    write_header(&paths.output, &contents)
        .with_context(|| format!("Failed to write {}", paths.output.display()))?;

    Ok(RunOutcome::Written(Summary {
        output: paths.output.clone(),
        dimensions: reading.dimensions,
        array_len: header.array_len(),
        dimensions_fallback: reading.is_fallback(),
    }))
}
