use crate::error::Error;
use crate::style::theme_css::{self, ParseResult, ParseStats};
use crate::theme::Theme;

pub mod colora_theme {
    use super::*;
    use std::fs;

    /// Read the file named by `theme.locator()` and parse it into `theme`.
    pub fn load(theme: &mut Theme) -> ParseResult {
        match fs::read_to_string(theme.locator()) {
            Ok(css_text) => {
                // UTF-8 byte-order mark
                let css_text = css_text.strip_prefix('\u{feff}').unwrap_or(&css_text);
                theme_css::parse(css_text, theme)
            }
            Err(e) => {
                log::debug!("theme '{}': read failed: {}", theme.name(), e);
                ParseResult::new(ParseStats::default(), Some(Error::io(theme.locator(), e)))
            }
        }
    }

    /// Like [`load`], handing the completion signal to `on_done` once the
    /// whole file has been read and parsed.
    pub fn load_with<F>(theme: &mut Theme, on_done: F)
    where
        F: FnOnce(&Theme, &ParseResult),
    {
        let result = load(theme);
        on_done(theme, &result);
    }

    pub fn load_theme(name: &str, path: &str) -> (Theme, ParseResult) {
        let mut theme = Theme::new(name, path);
        let result = load(&mut theme);
        (theme, result)
    }
}
