#![warn(clippy::all, rust_2018_idioms)]

//! CSS generators for frontend work: gradients, shadows, shapes, layouts and
//! effects, each editable with live preview.
//!
//! The engine (`css`, `tools`, `catalog`, `generator`) knows nothing about
//! egui. `app`, `panels`, `widgets` and `renderer` put it on screen through
//! eframe.

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod collection;
pub mod components;
pub mod config;
pub mod css;
pub mod error;
pub mod export;
pub mod generator;
pub mod id_generator;
pub mod notify;
pub mod panels;
pub mod policy;
pub mod renderer;
pub mod route;
pub mod tools;
pub mod util;
pub mod widgets;

pub use app::ToolboxApp;
pub use catalog::Catalog;
pub use config::ToolboxConfig;
pub use error::ToolboxError;
pub use generator::{Generator, ToolKind};
pub use renderer::Renderer;
pub use route::Route;
