//! Parse highlight.js-style CSS themes into a selector => declarations model.

pub mod error;
pub mod style;
pub mod theme;
pub mod theme_load;

pub use error::{Error, Result};
pub use style::theme_css::{parse, ParseResult, ParseStats};
pub use theme::{Declarations, Theme};
