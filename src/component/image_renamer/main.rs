//! 圖片重新命名主模組
//!
//! 協調圖片掃描、排序和重新命名的整體流程

use super::name_builder::TargetNameBuilder;
use crate::config::Config;
use crate::error::RenamerError;
use crate::tools::{scan_image_files, validate_directory_exists};
use anyhow::Result;
use console::style;
use log::{error, info, warn};
use std::fs;
use std::path::Path;

/// 圖片重新命名器
pub struct ImageRenamer {
    config: Config,
    name_builder: TargetNameBuilder,
}

/// 重新命名結果統計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed_count: usize,
    pub skip_count: usize,
    pub error_count: usize,
}

impl ImageRenamer {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            name_builder: TargetNameBuilder::new(),
        }
    }

    /// 將目錄內的圖片檔案依字典序重新編號為 hotel1.jpg、hotel2.jpg、…
    ///
    /// 兩種致命錯誤（目錄不存在、找不到圖片）會在任何改動前回傳 Err；
    /// 單一檔案的衝突或失敗只記錄並跳過，整個流程一定會跑完
    pub fn run(&self, directory: &Path) -> Result<RenameSummary> {
        validate_directory_exists(directory)?;

        let image_files = scan_image_files(directory, &self.config.image_type_table)?;
        if image_files.is_empty() {
            return Err(RenamerError::NoImagesFound(directory.to_path_buf()).into());
        }

        info!(
            "Found {} image files in '{}'",
            image_files.len(),
            directory.display()
        );

        let mut summary = RenameSummary::default();
        // 編號只在重新命名成功時前進，跳過與失敗都沿用同一個編號
        let mut counter: usize = 1;

        for image in &image_files {
            let new_name = self.name_builder.format_target_name(counter);
            let new_path = directory.join(&new_name);

            if new_path.exists() {
                let collision = RenamerError::TargetNameCollision {
                    old_name: image.file_name.clone(),
                    new_name,
                };
                println!("{}", style(collision.to_string()).yellow());
                warn!("Target collision, skipped '{}'", image.file_name);
                summary.skip_count += 1;
                continue;
            }

            match fs::rename(&image.path, &new_path) {
                Ok(()) => {
                    println!("Renamed '{}' to '{}'", image.file_name, new_name);
                    info!("Renamed '{}' to '{}'", image.file_name, new_name);
                    summary.renamed_count += 1;
                    counter += 1;
                }
                Err(source) => {
                    let failure = RenamerError::RenameOperationFailed {
                        old_name: image.file_name.clone(),
                        new_name,
                        source,
                    };
                    println!("{}", style(failure.to_string()).red());
                    error!("Rename failed for '{}'", image.file_name);
                    summary.error_count += 1;
                }
            }
        }

        println!(
            "Renaming complete. Processed {} images.",
            summary.renamed_count
        );
        info!(
            "Renaming complete: {} renamed, {} skipped, {} failed",
            summary.renamed_count, summary.skip_count, summary.error_count
        );

        Ok(summary)
    }
}
