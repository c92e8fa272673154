pub mod css_rule;
pub mod theme_css;
