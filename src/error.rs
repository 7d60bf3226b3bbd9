//! 重新命名錯誤分類
//!
//! `Display` 字串即為輸出到終端機的訊息，不可隨意更動格式

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenamerError {
    /// 致命錯誤：目錄不存在，執行前檢查，不產生任何副作用
    #[error("Error: Directory '{}' does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    /// 致命錯誤：目錄內沒有任何圖片檔案，執行前檢查，不產生任何副作用
    #[error("No image files found in '{}'.", .0.display())]
    NoImagesFound(PathBuf),

    /// 可恢復錯誤：目標檔名已存在，跳過該檔案
    #[error("Warning: '{new_name}' already exists. Skipping '{old_name}'.")]
    TargetNameCollision { old_name: String, new_name: String },

    /// 可恢復錯誤：重新命名作業失敗（權限、來源檔案消失等），跳過該檔案
    #[error("Error renaming '{old_name}' to '{new_name}': {source}")]
    RenameOperationFailed {
        old_name: String,
        new_name: String,
        source: std::io::Error,
    },
}
