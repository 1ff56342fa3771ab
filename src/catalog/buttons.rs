use serde::{Deserialize, Serialize};

use super::Categorized;
use crate::css::{parse_declarations, StyleDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonCategory {
    pub id: &'static str,
    pub name: &'static str,
}

pub const BUTTON_CATEGORIES: &[ButtonCategory] = &[
    ButtonCategory { id: "all", name: "All Buttons" },
    ButtonCategory { id: "standard", name: "Standard" },
    ButtonCategory { id: "modern", name: "Modern" },
    ButtonCategory { id: "fancy", name: "Fancy" },
    ButtonCategory { id: "interactive", name: "Interactive" },
];

/// One gallery entry. Each `css*` field holds newline separated
/// declarations for one selector of the button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    pub id: String,
    pub name: String,
    pub category: String,
    pub css: String,
    #[serde(default)]
    pub css_hover: Option<String>,
    #[serde(default)]
    pub css_active: Option<String>,
    #[serde(default)]
    pub css_after: Option<String>,
    #[serde(default)]
    pub css_hover_after: Option<String>,
    #[serde(default)]
    pub css_loading: Option<String>,
    #[serde(default)]
    pub css_after_loading: Option<String>,
    #[serde(default)]
    pub keyframes: Option<String>,
    pub html: String,
    #[serde(default)]
    pub txt: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ButtonSpec {
    pub fn class_name(&self) -> String {
        format!("btn-{}", self.id)
    }

    /// Every fragment composed into a stylesheet, one rule per selector,
    /// keyframes last.
    pub fn full_css(&self) -> String {
        let class = format!(".{}", self.class_name());
        let fragments = [
            (String::new(), Some(&self.css)),
            (":hover".to_owned(), self.css_hover.as_ref()),
            (":active".to_owned(), self.css_active.as_ref()),
            ("::after".to_owned(), self.css_after.as_ref()),
            (":hover::after".to_owned(), self.css_hover_after.as_ref()),
            (".loading".to_owned(), self.css_loading.as_ref()),
            (".loading::after".to_owned(), self.css_after_loading.as_ref()),
        ];

        let mut rules: Vec<String> = fragments
            .into_iter()
            .filter_map(|(suffix, body)| {
                body.map(|body| format!("{class}{suffix} {{\n  {}\n}}", body.replace('\n', "\n  ")))
            })
            .collect();
        if let Some(keyframes) = &self.keyframes {
            rules.push(keyframes.clone());
        }
        rules.join("\n\n")
    }

    /// The base declarations as a preview style.
    pub fn preview_style(&self) -> StyleDescriptor {
        StyleDescriptor::from_declarations(&parse_declarations(&self.css))
    }

    /// Text shown on the preview button.
    pub fn label(&self) -> &str {
        self.txt
            .as_deref()
            .or(self.icon.as_deref())
            .unwrap_or("Click me")
    }

    pub fn has_loading_state(&self) -> bool {
        self.css_loading.is_some() || self.css_after_loading.is_some()
    }
}

impl Categorized for ButtonSpec {
    fn category(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::StyleProperty;
    use pretty_assertions::assert_eq;

    fn button() -> ButtonSpec {
        ButtonSpec {
            id: "primary".into(),
            name: "Primary".into(),
            category: "standard".into(),
            css: "background-color: #3b82f6;\ncolor: white;\npadding: 10px 20px;".into(),
            css_hover: Some("background-color: #2563eb;".into()),
            css_active: None,
            css_after: None,
            css_hover_after: None,
            css_loading: None,
            css_after_loading: None,
            keyframes: Some("@keyframes pulse { from { opacity: 1; } to { opacity: 0.5; } }".into()),
            html: "<button class=\"btn-primary\">Click me</button>".into(),
            txt: None,
            icon: None,
        }
    }

    #[test]
    fn test_full_css_composition() {
        assert_eq!(
            button().full_css(),
            ".btn-primary {\n  background-color: #3b82f6;\n  color: white;\n  padding: 10px 20px;\n}\n\n\
             .btn-primary:hover {\n  background-color: #2563eb;\n}\n\n\
             @keyframes pulse { from { opacity: 1; } to { opacity: 0.5; } }"
        );
    }

    #[test]
    fn test_preview_style_uses_property_table() {
        let style = button().preview_style();
        assert_eq!(style.get(StyleProperty::BackgroundColor), Some("#3b82f6"));
        assert_eq!(style.get(StyleProperty::Padding), Some("10px 20px"));
        assert_eq!(style.len(), 3);
        assert_eq!(button().label(), "Click me");
    }
}
