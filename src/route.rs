use serde::{Deserialize, Serialize};

/// Every page of the app, addressed by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    Gradient,
    BoxShadow,
    BorderRadius,
    TailwindColors,
    Transform,
    Flexbox,
    CssGrid,
    GradientText,
    Neumorphism,
    Glassmorphism,
    ButtonGallery,
}

impl Route {
    /// Navigation order: home first, then the tool catalog order.
    pub const ALL: &'static [Route] = &[
        Self::Home,
        Self::Gradient,
        Self::BoxShadow,
        Self::BorderRadius,
        Self::TailwindColors,
        Self::Transform,
        Self::Flexbox,
        Self::CssGrid,
        Self::GradientText,
        Self::Neumorphism,
        Self::Glassmorphism,
        Self::ButtonGallery,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Gradient => "/gradient-generator",
            Self::BoxShadow => "/box-shadow",
            Self::BorderRadius => "/border-radius",
            Self::TailwindColors => "/tailwind-colors",
            Self::Transform => "/transform",
            Self::Flexbox => "/flexbox",
            Self::CssGrid => "/css-grid",
            Self::GradientText => "/gradient-text",
            Self::Neumorphism => "/neumorphism",
            Self::Glassmorphism => "/glassmorphism",
            Self::ButtonGallery => "/button-gallery",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.path() == path)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gradient => "Gradient Generator",
            Self::BoxShadow => "Box Shadow Tool",
            Self::BorderRadius => "Border Radius Tool",
            Self::TailwindColors => "Tailwind Color Chart",
            Self::Transform => "CSS Transform",
            Self::Flexbox => "Flexbox Playground",
            Self::CssGrid => "CSS Grid Generator",
            Self::GradientText => "Gradient Text Generator",
            Self::Neumorphism => "Neumorphism Generator",
            Self::Glassmorphism => "Glassmorphism Generator",
            Self::ButtonGallery => "Button Gallery",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Home => "A collection of handy tools for frontend developers",
            Self::Gradient => "Create and customize beautiful CSS gradients with live preview",
            Self::BoxShadow => "Design and tweak box shadows with real-time preview",
            Self::BorderRadius => "Create custom shapes with precise control of each corner radius",
            Self::TailwindColors => "Explore and pick from Tailwind CSS color palette",
            Self::Transform => "Experiment with rotate, scale, skew, and translate transformations",
            Self::Flexbox => "Experiment with flexbox layouts and properties in real-time",
            Self::CssGrid => "Visually create grid layouts and get the corresponding CSS code",
            Self::GradientText => "Apply beautiful gradient effects to text with live preview",
            Self::Neumorphism => "Create soft UI elements with depth and shadow effects",
            Self::Glassmorphism => "Create modern UI elements with the frosted glass effect",
            Self::ButtonGallery => {
                "Collection of beautiful buttons from standard to fancy with copy functionality"
            }
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Gradient => "🌈",
            Self::BoxShadow => "🔳",
            Self::BorderRadius => "⬜",
            Self::TailwindColors => "🎨",
            Self::Transform => "🔄",
            Self::Flexbox => "↔",
            Self::CssGrid => "▦",
            Self::GradientText => "🔤",
            Self::Neumorphism => "🔘",
            Self::Glassmorphism => "🔍",
            Self::ButtonGallery => "🖱",
        }
    }

    /// Shown as a card on the home page. The button gallery is reachable from
    /// the sidebar only.
    pub fn on_home_page(self) -> bool {
        !matches!(self, Self::Home | Self::ButtonGallery)
    }
}

/// Home page cards whose title or description contains `term`, ignoring case.
/// An empty term matches everything.
pub fn search(term: &str) -> Vec<Route> {
    let term = term.trim().to_lowercase();
    Route::ALL
        .iter()
        .copied()
        .filter(|r| r.on_home_page())
        .filter(|r| {
            term.is_empty()
                || r.title().to_lowercase().contains(&term)
                || r.description().to_lowercase().contains(&term)
        })
        .collect()
}
