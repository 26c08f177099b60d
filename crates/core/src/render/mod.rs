pub mod markdown;

pub use markdown::{HighlightDetail, render, render_bullet};
