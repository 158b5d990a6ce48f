//! Choices offered by the card form: templates, fonts and colour schemes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FontChoice {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorScheme {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default = "default_templates")]
    pub templates: Vec<CardTemplate>,
    #[serde(default = "default_fonts")]
    pub fonts: Vec<FontChoice>,
    #[serde(default = "default_colors")]
    pub colors: Vec<ColorScheme>,
    /// Template preselected on a fresh form
    #[serde(default = "default_template_id")]
    pub default_template: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            fonts: default_fonts(),
            colors: default_colors(),
            default_template: default_template_id(),
        }
    }
}

impl Catalog {
    pub fn template(&self, id: &str) -> Option<&CardTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}

fn default_template_id() -> String {
    "modern".to_string()
}

fn template(id: &str, name: &str, description: &str) -> CardTemplate {
    CardTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn font(id: &str, name: &str) -> FontChoice {
    FontChoice {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn color(id: &str, name: &str, primary: &str, secondary: &str) -> ColorScheme {
    ColorScheme {
        id: id.to_string(),
        name: name.to_string(),
        primary: primary.to_string(),
        secondary: secondary.to_string(),
    }
}

pub fn default_templates() -> Vec<CardTemplate> {
    vec![
        template("modern", "Modern", "Clean and minimalist design"),
        template("classic", "Classic", "Traditional business card layout"),
        template("creative", "Creative", "Bold and colorful design"),
        template("elegant", "Elegant", "Sophisticated and professional"),
        template("tech", "Tech", "Modern technology-focused design"),
        template("corporate", "Corporate", "Professional business style"),
        template("artistic", "Artistic", "Creative with artistic flair"),
        template("minimal", "Minimal", "Ultra-clean simple design"),
        template("bold", "Bold", "Strong visual impact design"),
        template("vintage", "Vintage", "Retro classic appearance"),
        template("geometric", "Geometric", "Modern geometric patterns"),
        template("gradient", "Gradient", "Smooth color transitions"),
        template("executive", "Executive", "Premium luxury design"),
    ]
}

pub fn default_fonts() -> Vec<FontChoice> {
    vec![
        font("Arial", "Arial"),
        font("Helvetica", "Helvetica"),
        font("Times", "Times New Roman"),
        font("Georgia", "Georgia"),
        font("Verdana", "Verdana"),
        font("Calibri", "Calibri"),
        font("Trebuchet", "Trebuchet MS"),
        font("Tahoma", "Tahoma"),
        font("Impact", "Impact"),
        font("Palatino", "Palatino"),
        font("Garamond", "Garamond"),
        font("Century", "Century Gothic"),
    ]
}

pub fn default_colors() -> Vec<ColorScheme> {
    vec![
        color("blue", "Blue", "#007bff", "#6c757d"),
        color("red", "Red", "#dc3545", "#6c757d"),
        color("green", "Green", "#28a745", "#6c757d"),
        color("purple", "Purple", "#6f42c1", "#6c757d"),
        color("orange", "Orange", "#fd7e14", "#6c757d"),
        color("black", "Black", "#000000", "#6c757d"),
        color("teal", "Teal", "#20c997", "#6c757d"),
        color("indigo", "Indigo", "#6610f2", "#6c757d"),
        color("pink", "Pink", "#e83e8c", "#6c757d"),
        color("yellow", "Yellow", "#ffc107", "#495057"),
        color("cyan", "Cyan", "#17a2b8", "#6c757d"),
        color("brown", "Brown", "#8d4925", "#6c757d"),
        color("navy", "Navy", "#1e3a8a", "#64748b"),
        color("emerald", "Emerald", "#059669", "#6b7280"),
        color("rose", "Rose", "#e11d48", "#6b7280"),
        color("amber", "Amber", "#f59e0b", "#374151"),
        color("violet", "Violet", "#8b5cf6", "#6b7280"),
        color("slate", "Slate", "#475569", "#94a3b8"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_sizes() {
        let catalog = Catalog::default();
        assert_eq!(catalog.templates.len(), 13);
        assert_eq!(catalog.fonts.len(), 12);
        assert_eq!(catalog.colors.len(), 18);
        assert!(catalog.template(&catalog.default_template).is_some());
    }

    #[test]
    fn test_partial_catalog_fills_missing_lists() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"templates": [{"id": "plain", "name": "Plain"}], "default_template": "plain"}"#,
        )
        .unwrap();
        assert_eq!(catalog.templates.len(), 1);
        assert_eq!(catalog.templates[0].description, "");
        assert_eq!(catalog.fonts, default_fonts());
        assert_eq!(catalog.colors.len(), 18);
    }
}
