use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().magenta().bold());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static BANNER: Lazy<Style> = Lazy::new(|| Style::new().bold());
