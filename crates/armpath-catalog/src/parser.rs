//! catalog KDL パーサー
//!
//! ユーザー定義のリソースタイプを KDL から読み込む。
//!
//! ```kdl
//! catalog "my-resources"
//!
//! resource "storage-container" {
//!     description "HCI storage container"
//!     path "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroup}/providers/Microsoft.AzureStackHCI/storageContainers/{storageContainerName}"
//! }
//!
//! resource "explicit" {
//!     segment "static" "subscriptions"
//!     segment "subscription" "subscriptionId"
//!     segment "static" "resourceGroups" name="staticGroups"
//!     segment "resource-group" "resourceGroupName"
//! }
//! ```

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Origin, ResourceType};
use armpath_core::{IdentifierSchema, Segment};
use kdl::{KdlDocument, KdlNode};
use std::path::Path;
use tracing::{debug, info};

/// KDLファイルを Catalog にパース
#[tracing::instrument]
pub fn parse_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog_with_origin(&content, Origin::File(path.to_path_buf()))?;
    info!(catalog = %catalog.name, types = catalog.len(), "Loaded catalog file");
    Ok(catalog)
}

/// KDL文字列を Catalog にパース
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    parse_catalog_with_origin(content, Origin::File("<inline>".into()))
}

fn parse_catalog_with_origin(content: &str, origin: Origin) -> Result<Catalog> {
    let doc: KdlDocument = content.parse()?;

    let mut catalog = Catalog::new("custom");

    for node in doc.nodes() {
        match node.name().value() {
            "catalog" => {
                if let Some(name) = first_string(node) {
                    catalog.name = name.to_string();
                }
            }
            "resource" => {
                let resource = parse_resource(node, &origin)?;
                debug!(resource = %resource.name, template = %resource.schema, "Parsed resource type");
                catalog.insert(resource)?;
            }
            other => {
                // 不明なノードはスキップ
                debug!(node = other, "Skipping unknown catalog node");
            }
        }
    }

    Ok(catalog)
}

/// resource ノードをパース
fn parse_resource(node: &KdlNode, origin: &Origin) -> Result<ResourceType> {
    let name = first_string(node)
        .ok_or_else(|| CatalogError::InvalidConfig("resource には名前が必要です".to_string()))?
        .to_string();

    let mut description = None;
    let mut template = None;
    let mut segments = Vec::new();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "description" => {
                    description = first_string(child).map(|s| s.to_string());
                }
                "path" => {
                    template = Some(first_string(child).ok_or_else(|| {
                        CatalogError::InvalidConfig(format!(
                            "resource '{}' の path には文字列が必要です",
                            name
                        ))
                    })?);
                }
                "segment" => {
                    segments.push(parse_segment(child, &name)?);
                }
                _ => {}
            }
        }
    }

    let schema = match (template, segments.is_empty()) {
        (Some(template), true) => IdentifierSchema::from_template(template),
        (None, false) => IdentifierSchema::new(segments),
        (Some(_), false) => {
            return Err(CatalogError::InvalidConfig(format!(
                "resource '{}' に path と segment の両方が指定されています",
                name
            )));
        }
        (None, true) => {
            return Err(CatalogError::InvalidConfig(format!(
                "resource '{}' には path か segment が必要です",
                name
            )));
        }
    }
    .map_err(|source| CatalogError::InvalidSchema {
        name: name.clone(),
        source,
    })?;

    Ok(ResourceType {
        name,
        description,
        schema,
        origin: origin.clone(),
    })
}

/// segment ノードをパース
///
/// `segment "<kind>" "<literal or field>" [name="<diagnostic name>"]`
fn parse_segment(node: &KdlNode, resource: &str) -> Result<Segment> {
    let mut positional = node
        .entries()
        .iter()
        .filter(|e| e.name().is_none())
        .filter_map(|e| e.value().as_string());

    let (Some(kind), Some(text)) = (positional.next(), positional.next()) else {
        return Err(CatalogError::InvalidConfig(format!(
            "resource '{}': segment には種類と値が必要です",
            resource
        )));
    };

    let explicit_name = node
        .entries()
        .iter()
        .find(|e| e.name().is_some_and(|n| n.value() == "name"))
        .and_then(|e| e.value().as_string());

    let segment = match kind {
        "static" => match explicit_name {
            Some(name) => Segment::named_literal(name, text),
            None => Segment::static_literal(text),
        },
        "provider" => Segment::resource_provider(text),
        "subscription" => Segment::subscription_id(text),
        "resource-group" => Segment::resource_group_name(text),
        "name" => Segment::user_specified(text),
        other => {
            return Err(CatalogError::InvalidConfig(format!(
                "resource '{}': 不明な segment の種類 '{}'",
                resource, other
            )));
        }
    };

    Ok(segment)
}

fn first_string(node: &KdlNode) -> Option<&str> {
    node.entries().first().and_then(|e| e.value().as_string())
}
