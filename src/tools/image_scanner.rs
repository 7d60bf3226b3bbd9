use crate::config::ImageTypeTable;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageFileInfo {
    pub path: PathBuf,
    pub file_name: String,
}

/// 掃描目錄下第一層的圖片檔案，按檔名排序（字典序，由小到大）
///
/// 回傳的是掃描當下的快照，之後的重新命名不會影響候選清單。
/// 檔案類型判斷會追蹤符號連結：指向一般檔案的連結是候選，
/// 指向目錄或已失效的連結不是
pub fn scan_image_files(directory: &Path, table: &ImageTypeTable) -> Result<Vec<ImageFileInfo>> {
    let mut files: Vec<ImageFileInfo> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_str()?.to_string();
            table.is_image_file(&file_name).then(|| ImageFileInfo {
                path: entry.into_path(),
                file_name,
            })
        })
        .collect();

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}
