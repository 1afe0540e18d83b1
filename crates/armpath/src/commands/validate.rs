use anyhow::bail;
use armpath_catalog::Catalog;
use armpath_core::{
    IdentifierSchema, RESOURCE_GROUP_FIELD, SUBSCRIPTION_ID_FIELD, check_resource_group_name,
    check_subscription_id,
};
use colored::Colorize;
use serde_json::Value;

pub fn handle(
    catalog: &Catalog,
    resource_type: &str,
    ids: &[String],
    label: &str,
) -> anyhow::Result<()> {
    let resource = catalog.get(resource_type)?;
    println!(
        "{} {} ({}件)",
        "検証中:".blue(),
        resource.name.cyan(),
        ids.len()
    );

    let mut error_count = 0;
    for id in ids {
        let (mut warnings, errors) = resource
            .schema
            .validate(&Value::String(id.clone()), label);
        if errors.is_empty() {
            warnings.extend(format_warnings(&resource.schema, id, label));
        }

        if errors.is_empty() {
            println!("  {} {}", "✓".green(), id);
        } else {
            println!("  {} {}", "✗".red(), id);
        }
        for warning in &warnings {
            println!("    {} {}", "warning:".yellow(), warning);
        }
        for error in &errors {
            eprintln!("    {} {}", "error:".red().bold(), error);
        }
        error_count += errors.len();
    }

    if error_count > 0 {
        bail!("{}件のエラーがあります", error_count);
    }

    println!("{}", "✓ 全てのIDは正常です".green().bold());
    Ok(())
}

/// 構造は正しいが、値の書式が Azure の規則に合わないものを警告する
fn format_warnings(schema: &IdentifierSchema, id: &str, label: &str) -> Vec<String> {
    let Ok(parsed) = schema.parse(id) else {
        return Vec::new();
    };

    let mut warnings = Vec::new();
    if let Some(Err(e)) = parsed
        .get(SUBSCRIPTION_ID_FIELD)
        .map(|v| check_subscription_id(v, label))
    {
        warnings.push(e.to_string());
    }
    if let Some(Err(e)) = parsed
        .get(RESOURCE_GROUP_FIELD)
        .map(|v| check_resource_group_name(v, label))
    {
        warnings.push(e.to_string());
    }
    warnings
}
