//! Catalog データモデル

use crate::builtin::builtin_types;
use crate::error::{CatalogError, Result};
use armpath_core::{IdentifierSchema, ParsedIdentifier};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// リソースタイプ名 → 識別子スキーマの対応表
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    /// Catalog名
    pub name: String,

    /// リソースタイプ（名前順）
    types: BTreeMap<String, ResourceType>,
}

/// 1つのリソースタイプ定義
#[derive(Debug, Clone, Serialize)]
pub struct ResourceType {
    /// リソースタイプ名（kebab-case）
    pub name: String,

    /// 説明（オプション）
    pub description: Option<String>,

    /// パス形状
    pub schema: IdentifierSchema,

    /// 定義元
    pub origin: Origin,
}

/// リソースタイプの定義元
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Builtin => write!(f, "builtin"),
            Origin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Catalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: BTreeMap::new(),
        }
    }

    /// 組み込みリソースタイプのみを持つ Catalog
    pub fn builtin() -> Self {
        let mut catalog = Self::new("builtin");
        for (name, description, schema) in builtin_types() {
            catalog.types.insert(
                name.to_string(),
                ResourceType {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    schema: schema.clone(),
                    origin: Origin::Builtin,
                },
            );
        }
        catalog
    }

    /// リソースタイプを追加する（同名の定義があればエラー）
    pub fn insert(&mut self, resource: ResourceType) -> Result<()> {
        if self.types.contains_key(&resource.name) {
            return Err(CatalogError::DuplicateResourceType(resource.name));
        }
        self.types.insert(resource.name.clone(), resource);
        Ok(())
    }

    /// 別の Catalog の定義を取り込む
    pub fn extend(&mut self, other: Catalog) -> Result<()> {
        for (_, resource) in other.types {
            self.insert(resource)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&ResourceType> {
        self.types
            .get(name)
            .ok_or_else(|| CatalogError::ResourceTypeNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// 識別子を（大文字小文字を区別せずに）受理するリソースタイプを探す
    pub fn identify(&self, input: &str) -> Vec<(&ResourceType, ParsedIdentifier)> {
        self.types
            .values()
            .filter_map(|r| r.schema.parse_insensitive(input).ok().map(|p| (r, p)))
            .collect()
    }
}
