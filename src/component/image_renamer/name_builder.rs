//! 目標檔名產生模組
//!
//! 負責依序號組出 `hotel{N}.jpg` 形式的新檔名

/// 目標檔名前綴
const TARGET_PREFIX: &str = "hotel";

/// 固定輸出副檔名，與來源副檔名無關
const TARGET_EXTENSION: &str = "jpg";

/// 目標檔名產生器
pub struct TargetNameBuilder {
    prefix: &'static str,
    extension: &'static str,
}

impl Default for TargetNameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetNameBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix: TARGET_PREFIX,
            extension: TARGET_EXTENSION,
        }
    }

    /// 產生指定序號的目標檔名
    #[must_use]
    pub fn format_target_name(&self, index: usize) -> String {
        format!("{}{}.{}", self.prefix, index, self.extension)
    }
}
