use anyhow::bail;
use armpath_catalog::Catalog;
use colored::Colorize;

/// catalog の全リソースタイプに対してパースを試み、受理したものを表示
pub fn handle(catalog: &Catalog, id: &str) -> anyhow::Result<()> {
    let matches = catalog.identify(id);
    if matches.is_empty() {
        bail!("'{}' に一致するリソースタイプがありません", id);
    }

    for (resource, parsed) in matches {
        println!("{} {}", "✓".green().bold(), resource.name.cyan().bold());
        println!("  {}", parsed.canonical());
    }
    Ok(())
}
