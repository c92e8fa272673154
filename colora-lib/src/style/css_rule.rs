// src/style/css_rule.rs: one parsed rule block, before it is folded into a Theme.
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRule {
    /// e.g. ".hljs-keyword", "#header", "pre code"
    pub selectors: Vec<String>,
    /// In source order, duplicates included; the last one wins when folded.
    pub declarations: Vec<ParsedDeclaration>,
    /// Segments of the block that had no `property: value` shape.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDeclaration {
    pub property: String,
    pub value: String,
}

impl ParsedRule {
    /// Build a rule from the raw text before `{` and the raw text between `{` and `}`.
    pub fn from_parts(header: &str, body: &str) -> Self {
        let selectors = header
            .split(',')
            .map(str::trim)
            .filter(|selector| !selector.is_empty())
            .map(str::to_string)
            .collect();

        let mut declarations = Vec::new();
        let mut skipped = Vec::new();
        for segment in body.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            match ParsedDeclaration::parse(segment) {
                Some(decl) => declarations.push(decl),
                None => skipped.push(segment.to_string()),
            }
        }

        ParsedRule {
            selectors,
            declarations,
            skipped,
        }
    }
}

impl ParsedDeclaration {
    /// Split `property: value` on the first colon. `None` for a segment without
    /// a colon or with an empty property name.
    pub fn parse(segment: &str) -> Option<Self> {
        let (property, value) = segment.split_once(':')?;
        let property = property.trim();
        if property.is_empty() {
            return None;
        }
        Some(ParsedDeclaration {
            property: property.to_string(),
            value: value.trim().to_string(),
        })
    }
}

impl fmt::Display for ParsedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selectors: {:?}", self.selectors)?;
        for decl in &self.declarations {
            writeln!(f, "  {}", decl)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParsedDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decl(property: &str, value: &str) -> ParsedDeclaration {
        ParsedDeclaration {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_selector_list_is_split_and_trimmed() {
        let rule = ParsedRule::from_parts(" .hljs-keyword ,\n.hljs-doctag,, .hljs-strong ", "");
        assert_eq!(
            rule.selectors,
            vec![".hljs-keyword", ".hljs-doctag", ".hljs-strong"]
        );
        assert!(rule.declarations.is_empty());
    }

    #[test]
    fn test_declarations_split_on_first_colon() {
        let rule = ParsedRule::from_parts(
            "a",
            " background: url(http://example.com/x.png) ; color:red;; ",
        );
        assert_eq!(
            rule.declarations,
            vec![
                decl("background", "url(http://example.com/x.png)"),
                decl("color", "red"),
            ]
        );
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let rule = ParsedRule::from_parts("a", "color red; : blue; font-weight: bold");
        assert_eq!(rule.declarations, vec![decl("font-weight", "bold")]);
        assert_eq!(rule.skipped, vec!["color red", ": blue"]);
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(ParsedDeclaration::parse("content:"), Some(decl("content", "")));
    }

    #[test]
    fn test_display() {
        let rule = ParsedRule::from_parts(".a, .b", "color: red");
        assert_eq!(rule.to_string(), "Selectors: [\".a\", \".b\"]\n  color: red\n");
    }
}
