#![warn(clippy::pedantic)]

use aiofitness_domain::EmbedOptions;

pub mod diagram;
pub mod log;
pub mod panel;
pub mod videos;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub autoplay: bool,
    pub privacy_enhanced_embeds: bool,
    pub log_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autoplay: true,
            privacy_enhanced_embeds: false,
            log_capacity: 100,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn embed_options(&self) -> EmbedOptions {
        EmbedOptions {
            autoplay: self.autoplay,
            privacy_enhanced: self.privacy_enhanced_embeds,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_settings_default() {
        assert_eq!(Settings::default().embed_options(), EmbedOptions::default());
    }

    #[test]
    fn test_settings_deserialize() {
        let settings: Settings =
            serde_json::from_str(r#"{"privacy_enhanced_embeds": true, "log_capacity": 10}"#)
                .unwrap();

        assert_eq!(
            settings,
            Settings {
                autoplay: true,
                privacy_enhanced_embeds: true,
                log_capacity: 10,
            }
        );
        assert_eq!(
            serde_json::from_str::<Settings>(&serde_json::to_string(&settings).unwrap()).unwrap(),
            settings
        );
    }
}
