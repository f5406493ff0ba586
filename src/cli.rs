use crate::scanner::ScanOrder;
use clap::{Parser, Subcommand};
use photo_jsonld_common::HemispherePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-jsonld")]
#[command(about = "写真のEXIF GPSからschema.org JSON-LDを生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内の画像ごとにJSON-LDを生成
    Generate {
        /// 写真フォルダのパス（metadata.jsonを含む）
        #[arg(required = true)]
        folder: PathBuf,

        /// contentUrlのベースURL（設定値を上書き）
        #[arg(long)]
        base_url: Option<String>,

        /// contentUrlの相対パスの基準（デフォルト: カレントディレクトリ）
        #[arg(long)]
        root: Option<PathBuf>,

        /// キーワード（複数指定可、設定値を上書き）
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// 走査順序 (name/listing)
        #[arg(long, value_enum)]
        order: Option<ScanOrder>,

        /// 南緯・西経の符号 (ignore/apply)
        #[arg(long)]
        hemisphere: Option<HemispherePolicy>,

        /// ディレクトリ既定値のファイル名
        #[arg(long)]
        metadata_file: Option<String>,

        /// 書き出さずに結果だけ表示
        #[arg(long)]
        dry_run: bool,
    },

    /// 1枚の画像のGPSタグと変換結果を表示
    Inspect {
        /// 画像ファイル
        #[arg(required = true)]
        image: PathBuf,

        /// 南緯・西経の符号 (ignore/apply)
        #[arg(long, default_value = "ignore")]
        hemisphere: HemispherePolicy,
    },

    /// 設定を表示/編集
    Config {
        /// contentUrlのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
