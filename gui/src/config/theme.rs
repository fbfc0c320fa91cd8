// Theme specific configurations (colors)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    // Grouped form sections sit on this
    pub section_background: String,
    pub primary: String,
    pub on_primary: String,
    pub muted: String,
    pub border: String,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::default_dark(),
            Theme::Light => Self::default_light(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#000000".to_string(),
            foreground: "#f2f2f7".to_string(),
            section_background: "#1c1c1e".to_string(),
            primary: "#0a84ff".to_string(),
            on_primary: "#ffffff".to_string(),
            muted: "#8e8e93".to_string(),
            border: "#38383a".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#f2f2f7".to_string(),
            foreground: "#000000".to_string(),
            section_background: "#ffffff".to_string(),
            primary: "#007aff".to_string(),
            on_primary: "#ffffff".to_string(),
            muted: "#6d6d72".to_string(),
            border: "#c6c6c8".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_deserializes_lowercase() {
        let theme: Theme = serde_json::from_str(r#""dark""#).unwrap();
        assert_eq!(theme, Theme::Dark);
        assert!(serde_json::from_str::<Theme>(r#""Sepia""#).is_err());
    }

    #[test]
    fn test_for_theme() {
        assert_eq!(ThemePalette::for_theme(Theme::Light), ThemePalette::default_light());
        assert_eq!(ThemePalette::for_theme(Theme::Dark), ThemePalette::default_dark());
    }
}
