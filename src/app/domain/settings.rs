use serde::{Deserialize, Deserializer, Serialize};

/// Configuration namespace the host stores these settings under.
pub const CONFIG_NAMESPACE: &str = "byesig";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Opacity applied to signature text, 0.0 (invisible) to 1.0.
    /// Accepts a JSON number or a numeric string.
    #[serde(default = "default_opacity", deserialize_with = "deserialize_opacity")]
    pub opacity: f32,

    /// Any CSS-style color the host understands.
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

fn default_enabled() -> bool {
    true
}

fn default_opacity() -> f32 {
    0.3
}

fn default_background_color() -> String {
    "transparent".to_string()
}

fn deserialize_opacity<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawOpacity {
        Number(f32),
        Text(String),
    }

    match RawOpacity::deserialize(deserializer)? {
        RawOpacity::Number(n) => Ok(n),
        RawOpacity::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl Default for SigSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            opacity: default_opacity(),
            background_color: default_background_color(),
        }
    }
}

impl SigSettings {
    /// Build settings from the host's configuration section.
    ///
    /// Missing keys take their defaults. A section that cannot be parsed at
    /// all is logged and replaced by the defaults.
    pub fn from_section(section: serde_json::Value) -> Self {
        if section.is_null() {
            return Self::default();
        }
        match serde_json::from_value(section) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse {CONFIG_NAMESPACE} settings: {e}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Style parameters for a new decoration token.
    pub fn decoration_options(&self) -> DecorationOptions {
        DecorationOptions {
            opacity: self.opacity.clamp(0.0, 1.0),
            background_color: self.background_color.clone(),
        }
    }
}

/// Immutable style parameters of one decoration token.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationOptions {
    pub opacity: f32,
    pub background_color: String,
}
