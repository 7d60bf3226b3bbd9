use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageTypeTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
}

impl ImageTypeTable {
    /// 判斷檔名是否為圖片檔案（不分大小寫，比對結尾）
    #[must_use]
    pub fn is_image_file(&self, file_name: &str) -> bool {
        let lowered = file_name.to_lowercase();
        self.image_file.iter().any(|ext| lowered.ends_with(ext))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub image_type_table: ImageTypeTable,
}
