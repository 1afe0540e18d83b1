//! armpath Catalog: リソースタイプとスキーマの対応表
//!
//! Catalog は、リソースタイプ名（`provisioned-cluster-instance` など）から
//! [`armpath_core::IdentifierSchema`] を引くための表です。
//!
//! # 概要
//!
//! - **組み込み**: Hybrid AKS / Azure Stack HCI 系の 15 種類（[`builtin`]）
//! - **型付きID**: 組み込みスキーマごとの構造体（[`ids`]）
//! - **ユーザー定義**: KDL ファイルで追加するリソースタイプ（[`parser`]）

pub mod builtin;
pub mod error;
pub mod ids;
pub mod load;
pub mod model;
pub mod parser;

pub use error::*;
pub use ids::*;
pub use load::*;
pub use model::*;
pub use parser::*;
