mod commands;

use armpath_catalog::Catalog;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "armpath")]
#[command(about = "リソースIDを、読む。書く。確かめる。", long_about = None)]
struct Cli {
    /// catalog ファイル（未指定時は自動探索）
    #[arg(long, global = true, env = "ARMPATH_CATALOG")]
    catalog: Option<PathBuf>,

    /// デバッグログを stderr に出力
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// リソースIDをパースしてフィールドを表示
    Parse {
        /// リソースタイプ名 (例: provisioned-cluster-instance)
        resource_type: String,
        /// リソースID
        id: String,
        /// キーワードの大文字小文字を区別しない
        #[arg(short, long)]
        insensitive: bool,
        /// JSON で出力
        #[arg(long)]
        json: bool,
    },
    /// リソースIDを正規形に変換（キーワードの大文字小文字を揃える）
    Normalize {
        /// リソースタイプ名
        resource_type: String,
        /// リソースID
        id: String,
    },
    /// フィールド値からリソースIDを組み立てる
    Format {
        /// リソースタイプ名
        resource_type: String,
        /// フィールド値 (field=value)
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// リソースIDを検証
    Validate {
        /// リソースタイプ名
        resource_type: String,
        /// リソースID（複数指定可）
        #[arg(required = true)]
        ids: Vec<String>,
        /// エラーメッセージに使うラベル
        #[arg(short, long, default_value = "id")]
        label: String,
    },
    /// リソースIDに一致するリソースタイプを探す
    Identify {
        /// リソースID
        id: String,
    },
    /// リソースタイプの一覧を表示
    Schemas {
        /// JSON で出力
        #[arg(long)]
        json: bool,
    },
    /// バージョン情報を表示
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Versionコマンドは catalog 不要
    if matches!(cli.command, Commands::Version) {
        println!("armpath {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let catalog = load_catalog(cli.catalog)?;

    match cli.command {
        Commands::Parse {
            resource_type,
            id,
            insensitive,
            json,
        } => {
            commands::parse::handle(&catalog, &resource_type, &id, insensitive, json)?;
        }
        Commands::Normalize { resource_type, id } => {
            commands::normalize::handle(&catalog, &resource_type, &id)?;
        }
        Commands::Format {
            resource_type,
            fields,
        } => {
            commands::format::handle(&catalog, &resource_type, &fields)?;
        }
        Commands::Validate {
            resource_type,
            ids,
            label,
        } => {
            commands::validate::handle(&catalog, &resource_type, &ids, &label)?;
        }
        Commands::Identify { id } => {
            commands::identify::handle(&catalog, &id)?;
        }
        Commands::Schemas { json } => {
            commands::schemas::handle(&catalog, json)?;
        }
        Commands::Version => {
            unreachable!("Version is handled before catalog loading");
        }
    }

    Ok(())
}

/// stdout は出力結果専用なので、ログは stderr に出す
fn init_tracing(verbose: bool) {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if verbose {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// 組み込み catalog に、指定または自動探索した catalog ファイルを重ねる
fn load_catalog(explicit: Option<PathBuf>) -> anyhow::Result<Catalog> {
    let path = match explicit {
        Some(path) => Some(path),
        None => armpath_config::find_catalog_file()?,
    };

    Ok(armpath_catalog::load_catalog(path.as_deref())?)
}
