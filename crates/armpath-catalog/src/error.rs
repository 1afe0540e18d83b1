//! Catalog エラー型

use armpath_core::SchemaError;
use std::path::PathBuf;

/// Catalog のエラー
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("KDL パースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("不正な Catalog 定義: {0}")]
    InvalidConfig(String),

    #[error("resource '{name}' のスキーマが不正です: {source}")]
    InvalidSchema {
        name: String,
        #[source]
        source: SchemaError,
    },

    #[error("resource type '{0}' が見つかりません")]
    ResourceTypeNotFound(String),

    #[error("resource type '{0}' は既に定義されています")]
    DuplicateResourceType(String),

    #[error("IO エラー: {path}\n理由: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
