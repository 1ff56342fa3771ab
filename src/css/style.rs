use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::declaration::Declaration;

/// Every CSS property a preview can carry. The mapping to property names is
/// an explicit table so previews and emitted code can be compared field by
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StyleProperty {
    Display,
    Position,
    Overflow,
    Width,
    Height,
    Padding,
    Margin,
    Background,
    BackgroundColor,
    BackgroundImage,
    BackgroundSize,
    BackgroundClip,
    WebkitBackgroundClip,
    BackdropFilter,
    WebkitBackdropFilter,
    Border,
    BorderRadius,
    BoxShadow,
    Outline,
    Color,
    Opacity,
    Cursor,
    Transition,
    Transform,
    FontSize,
    FontWeight,
    FontFamily,
    LineHeight,
    LetterSpacing,
    TextTransform,
    TextDecoration,
    TextShadow,
    FlexDirection,
    JustifyContent,
    AlignItems,
    AlignSelf,
    FlexWrap,
    FlexGrow,
    FlexShrink,
    Order,
    Gap,
    RowGap,
    ColumnGap,
    GridTemplateRows,
    GridTemplateColumns,
    GridRow,
    GridColumn,
}

impl StyleProperty {
    pub const ALL: &'static [StyleProperty] = &[
        Self::Display,
        Self::Position,
        Self::Overflow,
        Self::Width,
        Self::Height,
        Self::Padding,
        Self::Margin,
        Self::Background,
        Self::BackgroundColor,
        Self::BackgroundImage,
        Self::BackgroundSize,
        Self::BackgroundClip,
        Self::WebkitBackgroundClip,
        Self::BackdropFilter,
        Self::WebkitBackdropFilter,
        Self::Border,
        Self::BorderRadius,
        Self::BoxShadow,
        Self::Outline,
        Self::Color,
        Self::Opacity,
        Self::Cursor,
        Self::Transition,
        Self::Transform,
        Self::FontSize,
        Self::FontWeight,
        Self::FontFamily,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::TextTransform,
        Self::TextDecoration,
        Self::TextShadow,
        Self::FlexDirection,
        Self::JustifyContent,
        Self::AlignItems,
        Self::AlignSelf,
        Self::FlexWrap,
        Self::FlexGrow,
        Self::FlexShrink,
        Self::Order,
        Self::Gap,
        Self::RowGap,
        Self::ColumnGap,
        Self::GridTemplateRows,
        Self::GridTemplateColumns,
        Self::GridRow,
        Self::GridColumn,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Position => "position",
            Self::Overflow => "overflow",
            Self::Width => "width",
            Self::Height => "height",
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::Background => "background",
            Self::BackgroundColor => "background-color",
            Self::BackgroundImage => "background-image",
            Self::BackgroundSize => "background-size",
            Self::BackgroundClip => "background-clip",
            Self::WebkitBackgroundClip => "-webkit-background-clip",
            Self::BackdropFilter => "backdrop-filter",
            Self::WebkitBackdropFilter => "-webkit-backdrop-filter",
            Self::Border => "border",
            Self::BorderRadius => "border-radius",
            Self::BoxShadow => "box-shadow",
            Self::Outline => "outline",
            Self::Color => "color",
            Self::Opacity => "opacity",
            Self::Cursor => "cursor",
            Self::Transition => "transition",
            Self::Transform => "transform",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::FontFamily => "font-family",
            Self::LineHeight => "line-height",
            Self::LetterSpacing => "letter-spacing",
            Self::TextTransform => "text-transform",
            Self::TextDecoration => "text-decoration",
            Self::TextShadow => "text-shadow",
            Self::FlexDirection => "flex-direction",
            Self::JustifyContent => "justify-content",
            Self::AlignItems => "align-items",
            Self::AlignSelf => "align-self",
            Self::FlexWrap => "flex-wrap",
            Self::FlexGrow => "flex-grow",
            Self::FlexShrink => "flex-shrink",
            Self::Order => "order",
            Self::Gap => "gap",
            Self::RowGap => "row-gap",
            Self::ColumnGap => "column-gap",
            Self::GridTemplateRows => "grid-template-rows",
            Self::GridTemplateColumns => "grid-template-columns",
            Self::GridRow => "grid-row",
            Self::GridColumn => "grid-column",
        }
    }

    pub fn from_css_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.iter().copied().find(|p| p.css_name() == name)
    }
}

/// Collapses whitespace and drops the spaces around commas and parentheses,
/// so `rgba(0,0,0,0.2)` and `rgba(0, 0, 0, 0.2)` compare equal.
pub fn normalize_value(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .replace(" ,", ",")
        .replace(", ", ",")
        .replace("( ", "(")
        .replace(" )", ")")
        .trim_end_matches(';')
        .to_owned()
}

/// Structured description of what a preview applies to its element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    entries: BTreeMap<StyleProperty, String>,
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.entries.insert(property, value.into());
        self
    }

    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        self.entries.insert(property, value.into());
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.entries.get(&property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Builds a descriptor from parsed declarations, skipping any property
    /// outside the table. Later declarations win.
    pub fn from_declarations(declarations: &[Declaration]) -> Self {
        let mut descriptor = Self::new();
        for decl in declarations {
            match StyleProperty::from_css_name(&decl.property) {
                Some(property) => descriptor.set(property, decl.value.clone()),
                None => log::debug!("Skipping untracked CSS property: {}", decl.property),
            }
        }
        descriptor
    }

    /// Declarations whose property this descriptor also carries but with a
    /// different (normalized) value. Empty means the two agree.
    pub fn mismatches<'a>(&self, declarations: &'a [Declaration]) -> Vec<&'a Declaration> {
        declarations
            .iter()
            .filter(|decl| {
                StyleProperty::from_css_name(&decl.property)
                    .and_then(|p| self.get(p))
                    .is_some_and(|value| normalize_value(value) != normalize_value(&decl.value))
            })
            .collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_round_trips() {
        for property in StyleProperty::ALL {
            assert_eq!(StyleProperty::from_css_name(property.css_name()), Some(*property));
        }
        assert_eq!(StyleProperty::from_css_name("grid-area"), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize_value("0px 4px 8px 0px rgba(0, 0, 0, 0.2)"),
            normalize_value("0px  4px 8px 0px rgba(0,0,0,0.2)")
        );
    }

    #[test]
    fn test_mismatches() {
        let preview = StyleDescriptor::new()
            .with(StyleProperty::Width, "100px")
            .with(StyleProperty::Color, "red");
        let decls = vec![
            Declaration::new("width", "100px"),
            Declaration::new("color", "blue"),
            Declaration::new("cursor", "pointer"),
        ];
        let mismatched = preview.mismatches(&decls);
        assert_eq!(mismatched.len(), 1);
        assert_eq!(mismatched[0].property, "color");
    }
}
