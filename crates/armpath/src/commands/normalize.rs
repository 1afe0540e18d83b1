use anyhow::Context;
use armpath_catalog::Catalog;

/// キーワードの大文字小文字を無視してパースし、正規形を出力
///
/// 値の大文字小文字はそのまま保持される。
pub fn handle(catalog: &Catalog, resource_type: &str, id: &str) -> anyhow::Result<()> {
    let resource = catalog.get(resource_type)?;

    let parsed = resource
        .schema
        .parse_insensitive(id)
        .with_context(|| format!("'{}' として解析できません", resource.name))?;

    println!("{}", resource.schema.format(&parsed));
    Ok(())
}
