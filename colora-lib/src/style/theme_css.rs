//! Flat CSS parsing into a [`Theme`].
//!
//! Only the `selector-list { property: value; ... }` subset is understood:
//! `/* */` comments are dropped, at-rules and nested blocks are not supported.
//! Every declaration of a block is copied onto every selector of its list.

use crate::error::{Error, Result};
use crate::style::css_rule::ParsedRule;
use crate::theme::Theme;
use log::{debug, warn};

/// Counters collected while folding rules into a theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Rule blocks folded into the theme.
    pub rules: usize,
    /// Declaration segments skipped because they had no `property: value` shape.
    pub skipped_declarations: usize,
}

/// Completion signal of one parse (or load) call.
///
/// `ok()` is true exactly when `description()` is `None`. Rules folded before
/// a failure stay in the theme and are still counted in `stats()`.
#[derive(Debug)]
pub struct ParseResult {
    stats: ParseStats,
    error: Option<Error>,
}

impl ParseResult {
    pub(crate) fn new(stats: ParseStats, error: Option<Error>) -> Self {
        ParseResult { stats, error }
    }

    pub fn ok(&self) -> bool {
        self.error.is_none()
    }

    /// Human readable diagnostic for a failed call.
    pub fn description(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn into_result(self) -> Result<ParseStats> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.stats),
        }
    }
}

/// Parse `css_text` and fold every rule into `theme`.
pub fn parse(css_text: &str, theme: &mut Theme) -> ParseResult {
    let mut stats = ParseStats::default();
    let error = fold_rules(css_text, theme, &mut stats).err();

    match &error {
        None => debug!(
            "theme '{}': {} rules, {} selectors, {} declarations",
            theme.name(),
            stats.rules,
            theme.selector_count(),
            theme.declaration_count()
        ),
        Some(err) => debug!("theme '{}': parse stopped: {}", theme.name(), err),
    }
    ParseResult::new(stats, error)
}

/// Split `css_text` into rule blocks without touching a theme.
pub fn parse_rules(css_text: &str) -> Result<Vec<ParsedRule>> {
    let stripped = strip_comments(css_text)?;
    RuleBlocks::new(&stripped).collect()
}

fn fold_rules(css_text: &str, theme: &mut Theme, stats: &mut ParseStats) -> Result<()> {
    let stripped = strip_comments(css_text)?;
    for rule in RuleBlocks::new(&stripped) {
        fold_rule(&rule?, theme, stats)?;
    }
    Ok(())
}

fn fold_rule(rule: &ParsedRule, theme: &mut Theme, stats: &mut ParseStats) -> Result<()> {
    for segment in &rule.skipped {
        warn!(
            "theme '{}': skipping malformed declaration '{}'",
            theme.name(),
            segment
        );
    }
    stats.skipped_declarations += rule.skipped.len();

    if rule.selectors.is_empty() {
        debug!("theme '{}': block without selectors ignored", theme.name());
        return Ok(());
    }

    for selector in &rule.selectors {
        theme.add_selector(selector);
        for decl in &rule.declarations {
            theme.set_declaration(selector, &decl.property, &decl.value)?;
        }
    }
    debug!(
        "theme '{}': rule with {} selectors, {} declarations",
        theme.name(),
        rule.selectors.len(),
        rule.declarations.len()
    );
    stats.rules += 1;
    Ok(())
}

/// Replace every `/* ... */` comment with blanks, keeping newlines so that
/// line and column numbers still point into the original text.
fn strip_comments(css_text: &str) -> Result<String> {
    let mut stripped = String::with_capacity(css_text.len());
    let mut rest = css_text;

    while let Some(start) = rest.find("/*") {
        stripped.push_str(&rest[..start]);
        let comment = &rest[start..];
        let end = match comment[2..].find("*/") {
            Some(close) => close + 4,
            None => {
                let (line, column) = position(css_text, css_text.len() - comment.len());
                return Err(Error::UnterminatedComment { line, column });
            }
        };
        stripped.extend(
            comment[..end]
                .chars()
                .map(|c| if c == '\n' { '\n' } else { ' ' }),
        );
        rest = &comment[end..];
    }
    stripped.push_str(rest);
    Ok(stripped)
}

/// 1-indexed line and column (in chars) of a byte offset.
fn position(text: &str, offset: usize) -> (u32, u32) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
    let column = before[line_start..].chars().count() + 1;
    (line as u32, column as u32)
}

/// Iterator over the rule blocks of comment-free text. Stops after the first
/// structural error.
struct RuleBlocks<'a> {
    text: &'a str,
    cursor: usize,
    failed: bool,
}

impl<'a> RuleBlocks<'a> {
    fn new(text: &'a str) -> Self {
        RuleBlocks {
            text,
            cursor: 0,
            failed: false,
        }
    }

    fn error_at(&mut self, message: String, offset: usize) -> Error {
        self.failed = true;
        let (line, column) = position(self.text, offset);
        Error::unbalanced(message, line, column)
    }

    fn next_block(&mut self) -> Result<Option<ParsedRule>> {
        let text = self.text;
        let rest = &text[self.cursor..];

        let open = match rest.find(['{', '}']) {
            Some(idx) if rest[idx..].starts_with('}') => {
                let offset = self.cursor + idx;
                return Err(self.error_at("'}' without an open block".to_string(), offset));
            }
            Some(idx) => idx,
            None => {
                let trailing = rest.trim();
                if trailing.is_empty() {
                    self.cursor = text.len();
                    return Ok(None);
                }
                let offset = self.cursor + (rest.len() - rest.trim_start().len());
                return Err(self.error_at(
                    format!("selector list '{}' has no declaration block", trailing),
                    offset,
                ));
            }
        };

        let body_start = open + 1;
        let close = match rest[body_start..].find(['{', '}']) {
            Some(idx) if rest[body_start + idx..].starts_with('}') => body_start + idx,
            Some(idx) => {
                let offset = self.cursor + body_start + idx;
                return Err(self.error_at("nested blocks are not supported".to_string(), offset));
            }
            None => {
                let offset = self.cursor + open;
                return Err(self.error_at("'{' is never closed".to_string(), offset));
            }
        };

        let rule = ParsedRule::from_parts(&rest[..open], &rest[body_start..close]);
        self.cursor += close + 1;
        Ok(Some(rule))
    }
}

impl Iterator for RuleBlocks<'_> {
    type Item = Result<ParsedRule>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.next_block().transpose()
    }
}
