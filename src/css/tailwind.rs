//! Helpers for writing Tailwind arbitrary-value utilities.

/// Escapes a CSS value for use inside `[...]`: Tailwind reads underscores
/// as spaces, so whitespace runs become `_`.
pub fn arbitrary(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

/// `prefix-[value]` with the value escaped.
pub fn utility(prefix: &str, value: &str) -> String {
    format!("{prefix}-[{}]", arbitrary(value))
}

/// The first family of a font stack, without quotes.
pub fn primary_font(family: &str) -> String {
    family
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arbitrary_values() {
        assert_eq!(utility("grid-rows", "1fr 1fr 1fr"), "grid-rows-[1fr_1fr_1fr]");
        assert_eq!(utility("bg", "#3b82f6"), "bg-[#3b82f6]");
        assert_eq!(utility("font", &primary_font("Times New Roman, serif")), "font-[Times_New_Roman]");
    }
}
