pub mod resume;
pub mod style;

pub use resume::{resume, Resume};
pub use style::InlineStyle;
