//! Catalog 読み込み
//!
//! 組み込みリソースタイプにユーザー定義の KDL ファイルを重ねる。

use crate::error::Result;
use crate::model::Catalog;
use crate::parser::parse_catalog_file;
use std::path::Path;
use tracing::{debug, info};

/// 組み込み Catalog に KDL ファイルの定義を追加して返す
///
/// `path` が `None` の場合は組み込みリソースタイプのみ。
/// 組み込みと同名の resource を定義すると `DuplicateResourceType` になる。
#[tracing::instrument]
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();

    let Some(path) = path else {
        debug!("No catalog file, using built-in resource types only");
        return Ok(catalog);
    };

    let custom = parse_catalog_file(path)?;
    let added = custom.len();
    catalog.name = custom.name.clone();
    catalog.extend(custom)?;

    info!(
        catalog = %catalog.name,
        added,
        total = catalog.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}
