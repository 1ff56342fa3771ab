//! One module per generator. Each tool owns its editable state and
//! implements [`crate::generator::Generator`]; the button gallery and the
//! Tailwind palette only browse the catalog.

pub mod border_radius;
pub mod button_gallery;
pub mod flexbox;
pub mod glassmorphism;
pub mod gradient;
pub mod gradient_text;
pub mod grid;
pub mod neumorphism;
pub mod shadow;
pub mod tailwind;
pub mod transform;

pub use border_radius::BorderRadiusTool;
pub use button_gallery::ButtonGallery;
pub use flexbox::FlexboxTool;
pub use glassmorphism::GlassmorphismTool;
pub use gradient::GradientTool;
pub use gradient_text::GradientTextTool;
pub use grid::GridTool;
pub use neumorphism::NeumorphismTool;
pub use shadow::ShadowTool;
pub use tailwind::TailwindColors;
pub use transform::TransformTool;
