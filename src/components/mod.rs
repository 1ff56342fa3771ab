mod tool_card;

pub use tool_card::ToolCard;
