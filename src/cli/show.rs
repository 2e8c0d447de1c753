//! `docsite show`: print the resolved configuration as JSON.

use crate::config::SiteConfig;
use anyhow::Result;

pub fn to_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}

pub fn show_config(config: &SiteConfig, pretty: bool) -> Result<()> {
    println!("{}", to_json(config, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_output() {
        let config = SiteConfig::resolve(
            "[site]\ntitle = \"Atlas\"\nurl = \"https://example.io\"\nbase_url = \"/site/\"",
        )
        .unwrap();

        let value: Value = serde_json::from_str(&to_json(&config, false).unwrap()).unwrap();
        assert_eq!(value["site"]["title"], "Atlas");
        assert_eq!(value["site"]["url"], "https://example.io");
        assert_eq!(value["site"]["base_url"], "/site/");
        assert_eq!(value["i18n"]["locales"], serde_json::json!(["en"]));
        assert!(value.get("config_path").is_none());

        let pretty = to_json(&config, true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&pretty).unwrap(), value);
    }
}
