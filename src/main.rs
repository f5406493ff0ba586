use anyhow::Context;
use clap::Parser;
use photo_jsonld::{cli, config, pipeline, scanner};
use cli::{Cli, Commands};
use config::Config;
use photo_jsonld_common::extract_coordinates;
use std::path::PathBuf;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load_or_default();

    match cli.command {
        Commands::Generate { folder, base_url, root, keywords, order, hemisphere, metadata_file, dry_run } => {
            println!("📸 photo-jsonld - JSON-LD生成\n");

            let mut config = config;
            if let Some(url) = base_url {
                config.base_url = url;
            }
            if !keywords.is_empty() {
                config.keywords = keywords;
            }
            if let Some(order) = order {
                config.order = order;
            }
            if let Some(policy) = hemisphere {
                config.hemisphere = policy;
            }
            if let Some(name) = metadata_file {
                config.metadata_file_name = name;
            }

            let url_root = match root {
                Some(r) => r,
                None => std::env::current_dir().context("カレントディレクトリを取得できません")?,
            };

            let options = pipeline::RunOptions { url_root, dry_run };
            let summary = pipeline::generate(&folder, &config, &scanner::KamadakExif, &options)
                .with_context(|| format!("{} を処理できません", folder.display()))?;

            println!("✔ {}枚の写真を処理（GPSあり: {}枚）", summary.processed, summary.with_coordinates);
            if dry_run {
                for (path, json) in &summary.previews {
                    println!("--- {}", path.display());
                    println!("{}", json);
                }
                println!("- dry-run: 書き出しは行っていません");
            } else {
                println!("✔ {}件のJSON-LDを書き出し", summary.written.len());
            }

            if !summary.failed.is_empty() {
                println!("\n⚠ {}件の書き出しに失敗:", summary.failed.len());
                for (path, reason) in &summary.failed {
                    println!("  {}: {}", path.display(), reason);
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Inspect { image, hemisphere } => {
            let tags = scanner::read_tags(&scanner::KamadakExif, &image)
                .with_context(|| format!("EXIFを読み込めません: {}", image.display()))?;

            println!("{}:", image.display());
            for (name, value) in tags.iter().filter(|(name, _)| name.starts_with("GPS ")) {
                println!("  {} = {}", name, value);
            }

            match extract_coordinates(&tags, hemisphere) {
                Some(c) => println!("  → latitude: {}, longitude: {}", c.latitude, c.longitude),
                None => println!("  → 座標なし"),
            }
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                let path = Config::config_path().unwrap_or_else(|_| PathBuf::from("?"));
                println!("設定 ({}):", path.display());
                println!("  ベースURL: {}", config.base_url);
                println!("  キーワード: {}", config.keywords.join(", "));
                println!("  about: {} ({})", config.about_name, config.about_id);
                println!("  metadataファイル: {}", config.metadata_file_name);
                println!("  拡張子: {}", config.extensions.join(", "));
                println!("  走査順序: {:?}", config.order);
                println!("  方位の符号: {}", config.hemisphere);
            }
        }
    }

    Ok(())
}
