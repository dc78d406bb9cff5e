//! Portfolio entry shape
//!
//! Field names follow the `portfolio` content type in the CMS:
//! `judul` (title), `desc`, `service` and the linked `picture` asset.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::model::PortfolioItem;

#[derive(Debug, Deserialize)]
struct PortfolioEntry {
    fields: PortfolioFields,
}

#[derive(Debug, Deserialize)]
struct PortfolioFields {
    #[serde(alias = "title")]
    judul: String,
    #[serde(default, alias = "description")]
    desc: String,
    service: String,
    picture: AssetRef,
}

#[derive(Debug, Deserialize)]
struct AssetRef {
    fields: AssetFields,
}

#[derive(Debug, Deserialize)]
struct AssetFields {
    file: AssetFile,
}

#[derive(Debug, Deserialize)]
struct AssetFile {
    url: String,
}

/// Convert one resolved entry. Fails if the picture link was not resolved.
pub fn to_portfolio_item(resolved: Value) -> Result<PortfolioItem> {
    let entry: PortfolioEntry = serde_json::from_value(resolved)?;
    let fields = entry.fields;
    Ok(PortfolioItem::new(
        fields.judul,
        fields.desc,
        fields.service,
        &fields.picture.fields.file.url,
    ))
}

/// `sys.id` for log lines
pub fn entry_id(resolved: &Value) -> &str {
    resolved
        .pointer("/sys/id")
        .and_then(Value::as_str)
        .unwrap_or("<unknown>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_converts_resolved_entry() {
        let entry = json!({
            "sys": { "id": "e1" },
            "fields": {
                "judul": "Kopi Nusantara",
                "desc": "Packaging and label design",
                "service": "Digital Design",
                "picture": { "fields": { "file": { "url": "//images.ctfassets.net/k.jpg" } } }
            }
        });

        let item = to_portfolio_item(entry).unwrap();
        assert_eq!(item.title, "Kopi Nusantara");
        assert_eq!(item.description, "Packaging and label design");
        assert_eq!(item.service_category, "Digital Design");
        assert_eq!(item.image_url, "https://images.ctfassets.net/k.jpg");
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let entry = json!({
            "fields": {
                "judul": "Tote",
                "service": "Merchandise Production",
                "picture": { "fields": { "file": { "url": "//x/t.png" } } }
            }
        });
        assert_eq!(to_portfolio_item(entry).unwrap().description, "");
    }

    #[test]
    fn test_unresolved_picture_fails() {
        let entry = json!({
            "sys": { "id": "e9" },
            "fields": {
                "judul": "Broken",
                "service": "Event Organizer",
                "picture": { "sys": { "type": "Link", "linkType": "Asset", "id": "gone" } }
            }
        });
        assert_eq!(entry_id(&entry), "e9");
        assert!(to_portfolio_item(entry).is_err());
    }
}
