use log::warn;
use serde::Deserialize;

/// Id of the JSON `<script>` block in `index.html` that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub founded_year: i32,
    pub founded_month: u32,
    pub sales_email: String,
    pub diagnosis: DiagnosisConfig,
    pub diagram: DiagramConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DiagnosisConfig {
    /// Upper bound on rendered guard icons; `null` renders all of them.
    pub icon_cap: Option<usize>,
    pub animation_ms: u32,
    pub guard_count_max: u32,
    pub default_guard_count: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DiagramConfig {
    pub resize_debounce_ms: u32,
    pub settle_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            founded_year: 1991,
            founded_month: 2,
            sales_email: "sales@keibi-pro.jp".to_string(),
            diagnosis: DiagnosisConfig::default(),
            diagram: DiagramConfig::default(),
        }
    }
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            icon_cap: Some(50),
            animation_ms: 500,
            guard_count_max: 300,
            default_guard_count: 50,
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 200,
            settle_delay_ms: 500,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the embedded config block, falling back to defaults when it is
    /// missing or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring invalid site config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
