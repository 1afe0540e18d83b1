use anyhow::{Context, bail};
use armpath_catalog::Catalog;
use std::collections::BTreeMap;

/// `field=value` の組からリソースIDを組み立てる
///
/// ライブラリの Formatter は欠けた値を空文字で埋めるが、
/// CLI では不足・未知のフィールドをエラーとして扱う。
pub fn handle(catalog: &Catalog, resource_type: &str, fields: &[String]) -> anyhow::Result<()> {
    let resource = catalog.get(resource_type)?;
    let values = parse_assignments(fields)?;

    let unknown: Vec<&str> = values
        .keys()
        .map(String::as_str)
        .filter(|name| !resource.schema.has_field(name))
        .collect();
    if !unknown.is_empty() {
        bail!(
            "'{}' に存在しないフィールド: {}",
            resource.name,
            unknown.join(", ")
        );
    }

    let missing: Vec<&str> = resource
        .schema
        .field_names()
        .filter(|name| !values.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        bail!("必須フィールドが不足しています: {}", missing.join(", "));
    }

    let id = resource.schema.format(&values);

    // 値に '/' や空文字が含まれると、組み立てた結果をパースし直せない
    resource
        .schema
        .parse(&id)
        .with_context(|| format!("組み立てたIDが '{}' として解析できません", resource.name))?;

    println!("{}", id);
    Ok(())
}

fn parse_assignments(fields: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for field in fields {
        let Some((name, value)) = field.split_once('=') else {
            bail!("'{}' は field=value の形式ではありません", field);
        };
        if values.insert(name.to_string(), value.to_string()).is_some() {
            bail!("フィールド '{}' が重複しています", name);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignments() {
        let values = parse_assignments(&[
            "subscriptionId=sub".to_string(),
            "resourceGroup=rg=1".to_string(),
        ])
        .unwrap();
        assert_eq!(values["subscriptionId"], "sub");
        // 最初の '=' で分割する
        assert_eq!(values["resourceGroup"], "rg=1");
    }

    #[test]
    fn test_parse_assignments_rejects_bare_word() {
        assert!(parse_assignments(&["subscriptionId".to_string()]).is_err());
    }

    #[test]
    fn test_parse_assignments_rejects_duplicate() {
        let fields = ["a=1".to_string(), "a=2".to_string()];
        assert!(parse_assignments(&fields).is_err());
    }
}
