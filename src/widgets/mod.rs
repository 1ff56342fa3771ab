//! Small reusable controls shared by the tool panels.

mod code_block;
mod fields;

pub use code_block::CodeBlock;
pub use fields::{color_field, keyword_combo, numeric_field, text_field};
