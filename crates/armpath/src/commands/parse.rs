use anyhow::Context;
use armpath_catalog::Catalog;
use colored::Colorize;

pub fn handle(
    catalog: &Catalog,
    resource_type: &str,
    id: &str,
    insensitive: bool,
    json: bool,
) -> anyhow::Result<()> {
    let resource = catalog.get(resource_type)?;

    let parsed = if insensitive {
        resource.schema.parse_insensitive(id)
    } else {
        resource.schema.parse(id)
    }
    .with_context(|| format!("'{}' として解析できません", resource.name))?;

    if json {
        let output = serde_json::json!({
            "resourceType": resource.name,
            "id": parsed.canonical(),
            "fields": parsed.values(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "✓".green().bold(), resource.name.cyan().bold());
    let width = resource
        .schema
        .field_names()
        .map(str::len)
        .max()
        .unwrap_or(0);
    // スキーマ上の順序で表示する
    for field in resource.schema.field_names() {
        let value = parsed.get(field).unwrap_or_default();
        println!("  {}  {}", format!("{:width$}", field).dimmed(), value);
    }

    if parsed.canonical() != parsed.input() {
        println!();
        println!("正規形: {}", parsed.canonical().yellow());
    }

    Ok(())
}
