// Configuration type definitions

use serde::{Deserialize, Serialize};

/// Which widget a field row uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Suggest,
    Dropdown,
}

/// One field on the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub kind: FieldKind,
    /// Placeholder for suggestion fields, initial label for dropdowns
    pub label: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldConfig {
    pub fn suggest(label: &str, options: &[&str]) -> Self {
        Self {
            kind: FieldKind::Suggest,
            label: label.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn dropdown(label: &str, options: &[&str]) -> Self {
        Self {
            kind: FieldKind::Dropdown,
            ..Self::suggest(label, options)
        }
    }
}

/// Page section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_field_width")]
    pub field_width: u16,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            title: default_title(),
            field_width: default_field_width(),
        }
    }
}

fn default_title() -> String {
    "Prompt".to_string()
}

fn default_field_width() -> u16 {
    22
}

/// Panel section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PanelConfig {
    /// Rows shown before the list scrolls
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            max_visible: default_max_visible(),
        }
    }
}

fn default_max_visible() -> usize {
    6
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page: PageConfig::default(),
            panel: PanelConfig::default(),
            fields: default_fields(),
        }
    }
}

pub fn default_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::suggest(
            "Lighting",
            &[
                "Natural light",
                "Soft studio",
                "Hard shadows",
                "Golden hour",
                "Blue hour",
                "Neon",
                "Backlit",
            ],
        ),
        FieldConfig::suggest(
            "Mood",
            &[
                "Moody", "Vibrant", "Minimal", "Cinematic", "Dreamy", "Noir", "Playful", "Serene",
                "Gritty", "Surreal",
            ],
        ),
        FieldConfig::suggest(
            "Style",
            &[
                "Analog film",
                "Cyberpunk",
                "Baroque",
                "Futuristic",
                "Abstract",
                "Watercolor",
                "Isometric",
                "Vector",
                "Photorealistic",
                "Impressionist",
            ],
        ),
        FieldConfig::dropdown("Aspect", &["1:1", "3:2", "4:3", "16:9", "9:16"]),
    ]
}
