//! 圖片依檔名排序重新編號元件
//!
//! 掃描圖片檔案，依字典序排序後重新命名為 hotel{N}.jpg

mod main;
mod name_builder;

pub use main::{ImageRenamer, RenameSummary};
pub use name_builder::TargetNameBuilder;
