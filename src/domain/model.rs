use serde::{Deserialize, Deserializer, Serialize};

/// `chaos-bugbounty-list.json` 的最外層物件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaosInventory {
    pub programs: Vec<ChaosProgram>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosProgram {
    pub name: String,
    pub url: String,
    // 解碼時保留，輸出不使用
    #[serde(default)]
    pub bounty: bool,
    #[serde(default)]
    pub swag: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domains: Vec<String>,
}

/// One row of `chaos-targets.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaosTarget {
    pub domain: String,
    pub name: String,
    pub platform_url: String,
    #[serde(rename = "ZIP")]
    pub zip: String,
}

/// trickest inventory 的 `targets.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrickestInventory {
    pub targets: Vec<TrickestTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrickestTarget {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domains: Vec<String>,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub wildcard_filters: Vec<String>,
}

/// One row of `trickest-targets.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickestOutput {
    pub domain: String,
    pub name: String,
    pub platform_url: String,
    pub github_url: String,
    pub hostnames: String,
    pub dns_report: String,
    pub server_report: String,
    pub servers: String,
}

/// A JSON `null` list decodes the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaos_program_decodes_with_unused_flags() {
        let program: ChaosProgram = serde_json::from_value(serde_json::json!({
            "name": "Acme Corp",
            "url": "https://acme.example",
            "bounty": true,
            "swag": false,
            "domains": ["acme.com", "acme.com"]
        }))
        .unwrap();

        assert!(program.bounty);
        assert!(!program.swag);
        // duplicates are kept as-is
        assert_eq!(program.domains, vec!["acme.com", "acme.com"]);
    }

    #[test]
    fn test_missing_or_null_domains_decode_as_empty() {
        let inventory: TrickestInventory = serde_json::from_value(serde_json::json!({
            "targets": [
                {"name": "A", "url": "https://a.example"},
                {"name": "B", "url": "https://b.example", "domains": null, "wildcard_filters": null}
            ]
        }))
        .unwrap();

        assert!(inventory.targets[0].domains.is_empty());
        assert!(inventory.targets[1].domains.is_empty());
        assert!(inventory.targets[1].wildcard_filters.is_empty());
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let result = serde_json::from_value::<ChaosInventory>(serde_json::json!({
            "programs": [{"name": "A", "url": "https://a.example", "domains": "a.com"}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_chaos_target_field_names() {
        let row = ChaosTarget {
            domain: "acme.com".to_string(),
            name: "Acme Corp".to_string(),
            platform_url: "https://acme.example".to_string(),
            zip: "https://chaos-data.projectdiscovery.io/acme_corp.zip".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"domain":"acme.com","name":"Acme Corp","platform_url":"https://acme.example","ZIP":"https://chaos-data.projectdiscovery.io/acme_corp.zip"}"#
        );
    }
}
