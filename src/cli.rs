use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slide-inventory")]
#[command(about = "Scan a folder of TIFF scans and write an .xlsx inventory with drop-down lists", long_about = None)]
pub struct Cli {
    /// TIFFを探すフォルダ（サブフォルダも含む）
    pub folder: PathBuf,

    /// 出力ファイル（拡張子は .xlsx にそろえる）
    pub output: PathBuf,

    /// 分類ルールJSON（省略時は ~/.config/slide-inventory/rules.json または組み込み）
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
