use log::warn;
use prevos_shared::constants::SITE_CONFIG_ID;
use prevos_shared::{Result, SiteConfig, UiError};
use web_sys::Document;

/// Reads overrides from `<script id="site-config" type="application/json">`.
/// Pages without the block get the defaults; a broken block is logged and
/// ignored.
pub fn load(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match parse(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("{}; using defaults", err);
            SiteConfig::default()
        }
    }
}

fn parse(raw: &str) -> Result<SiteConfig> {
    let config: SiteConfig =
        serde_json::from_str(raw).map_err(|e| UiError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
