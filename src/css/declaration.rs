use serde::{Deserialize, Serialize};

/// One `property: value;` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Accumulates comment and declaration lines and renders them either bare
/// (one declaration per line) or wrapped in a selector.
#[derive(Debug, Clone, Default)]
pub struct CssBlock {
    comment: Option<String>,
    declarations: Vec<Declaration>,
}

impl CssBlock {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn declaration(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    pub fn push(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.push(Declaration::new(property, value));
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Bare declarations, one per line, preceded by the comment if any.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.declarations.len() + 1);
        if let Some(comment) = &self.comment {
            lines.push(format!("/* {comment} */"));
        }
        lines.extend(self.declarations.iter().map(Declaration::to_string));
        lines.join("\n")
    }

    /// Declarations indented by two spaces inside `selector { ... }`.
    pub fn render_rule(&self, selector: &str) -> String {
        let body = self
            .declarations
            .iter()
            .map(|decl| format!("  {decl}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{selector} {{\n{body}\n}}")
    }
}

/// Splits `input` on `separator` while ignoring separators nested inside
/// parentheses. A space separator splits on any run of whitespace and drops
/// empty pieces.
pub fn split_top_level(input: &str, separator: char) -> Vec<String> {
    let whitespace = separator == ' ';
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for c in input.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if depth == 0 && (c == separator || (whitespace && c.is_whitespace())) => {
                parts.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    parts.push(current);

    let parts = parts.into_iter().map(|p| p.trim().to_owned());
    if whitespace {
        parts.filter(|p| !p.is_empty()).collect()
    } else {
        parts.collect()
    }
}

/// Extracts every `property: value` pair from a stylesheet fragment.
///
/// Comments are dropped and selectors are skipped, which is all that is
/// needed to read back what the emitters produce.
pub fn parse_declarations(css: &str) -> Vec<Declaration> {
    let mut stripped = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        stripped.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }
    stripped.push_str(rest);

    stripped
        .split(|c| c == ';' || c == '{' || c == '}')
        .filter_map(|chunk| {
            let (property, value) = chunk.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            let is_property = !property.is_empty()
                && property
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-');
            (is_property && !value.is_empty()).then(|| Declaration::new(property, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_render() {
        let block = CssBlock::new()
            .comment("Container")
            .declaration("display", "flex")
            .declaration("gap", "10px");
        assert_eq!(block.render(), "/* Container */\ndisplay: flex;\ngap: 10px;");
        assert_eq!(
            block.render_rule(".box"),
            ".box {\n  display: flex;\n  gap: 10px;\n}"
        );
    }

    #[test]
    fn test_split_respects_parentheses() {
        assert_eq!(
            split_top_level("80px repeat(2, 1fr)  80px", ' '),
            vec!["80px", "repeat(2, 1fr)", "80px"]
        );
        assert_eq!(
            split_top_level("to right, rgba(0, 0, 0, 0.1) 0%, #fff 100%", ','),
            vec!["to right", "rgba(0, 0, 0, 0.1) 0%", "#fff 100%"]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_selectors() {
        let css = "/* Item: Header */\ngrid-row: 1 / 2;\n.btn:hover {\n  color: red;\n}\nbackground: url('https://x.y/z.png');";
        let decls = parse_declarations(css);
        assert_eq!(
            decls,
            vec![
                Declaration::new("grid-row", "1 / 2"),
                Declaration::new("color", "red"),
                Declaration::new("background", "url('https://x.y/z.png')"),
            ]
        );
    }
}
