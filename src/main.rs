use console::style;
use hotel_image_renamer::component::image_renamer::ImageRenamer;
use hotel_image_renamer::config::Config;
use hotel_image_renamer::init;
use log::{error, info};
use std::path::PathBuf;
use std::process;

fn main() {
    init::init();

    // 目標目錄可由第一個參數指定，預設為目前目錄
    let directory = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            process::exit(1);
        }
    };

    let renamer = ImageRenamer::new(config);

    match renamer.run(&directory) {
        Ok(summary) => {
            info!("Program exited normally ({} renamed)", summary.renamed_count);
        }
        Err(e) => {
            // 致命錯誤：Display 字串本身就是要輸出的訊息
            eprintln!("{}", style(e.to_string()).red());
            error!("Program error: {e}");
            process::exit(1);
        }
    }
}
