use crate::error::RenamerError;
use anyhow::Result;
use std::path::Path;

/// 執行前檢查：目標路徑必須存在且是資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() || !path.is_dir() {
        return Err(RenamerError::DirectoryNotFound(path.to_path_buf()).into());
    }
    Ok(())
}
