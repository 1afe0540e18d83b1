use armpath_catalog::Catalog;
use colored::Colorize;

pub fn handle(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    if json {
        let entries: Vec<_> = catalog
            .iter()
            .map(|resource| {
                serde_json::json!({
                    "name": resource.name,
                    "description": resource.description,
                    "template": resource.schema.template(),
                    "fields": resource.schema.field_names().collect::<Vec<_>>(),
                    "origin": resource.origin.to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} ({}種類)", "リソースタイプ:".bold(), catalog.len());
    for resource in catalog.iter() {
        println!();
        println!("  {} [{}]", resource.name.cyan().bold(), resource.origin);
        if let Some(description) = &resource.description {
            println!("    {}", description.dimmed());
        }
        println!("    {}", resource.schema.template());
    }
    Ok(())
}
