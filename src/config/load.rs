use crate::config::types::{Config, ImageTypeTable};
use anyhow::{Context, Result};

/// 編譯時嵌入的圖片類型設定（不需要外部檔案）
const IMAGE_TYPE_TABLE_JSON: &str = include_str!("../data/image_type_table.json");

impl Config {
    pub fn new() -> Result<Self> {
        let image_type_table = Self::load_embedded_image_type_table()?;

        Ok(Self { image_type_table })
    }

    /// 從編譯時嵌入的 JSON 載入圖片類型表
    fn load_embedded_image_type_table() -> Result<ImageTypeTable> {
        serde_json::from_str(IMAGE_TYPE_TABLE_JSON).context("無法解析嵌入的圖片類型設定")
    }
}
