use maud::{html, Markup, Render};

use super::style::InlineStyle;

pub const RESUME_EMBED_URL: &str = "https://seabassjh.github.io/latex-resume/resume-embed.html";
pub const RESUME_FRAME_TITLE: &str = "resumeFrame";

pub const CONTAINER_BACKGROUND: &str = "#CCCCCC11";
pub const CONTAINER_BORDER_WIDTH: &str = "3px";
pub const CONTAINER_BORDER_STYLE: &str = "solid";
pub const CONTAINER_BORDER_COLOR: &str = "#CCCCCC";
pub const CONTAINER_BORDER_RADIUS: &str = "10px";

pub const FRAME_WIDTH: &str = "100vw";
pub const FRAME_MAX_WIDTH: &str = "8.5in";
pub const FRAME_HEIGHT: &str = "100vh";
pub const FRAME_MAX_HEIGHT: &str = "11in";

pub fn container_style() -> InlineStyle {
    InlineStyle::new()
        .with("background-color", CONTAINER_BACKGROUND)
        .with("border-width", CONTAINER_BORDER_WIDTH)
        .with("border-style", CONTAINER_BORDER_STYLE)
        .with("border-color", CONTAINER_BORDER_COLOR)
        .with("border-radius", CONTAINER_BORDER_RADIUS)
        .with("overflow", "hidden")
        .with("display", "flex")
        .with("justify-content", "center")
        .with("align-items", "center")
        .with("flex-direction", "column")
}

/// Fills the viewport but never grows past a Letter page.
pub fn frame_style() -> InlineStyle {
    InlineStyle::new()
        .with("border", "0")
        .with("width", FRAME_WIDTH)
        .with("max-width", FRAME_MAX_WIDTH)
        .with("height", FRAME_HEIGHT)
        .with("max-height", FRAME_MAX_HEIGHT)
}

/// A rounded, bordered box with the resume page embedded in it.
///
/// Loading the embedded page is left entirely to the browser. Nothing here
/// fetches, watches or retries it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resume;

impl Render for Resume {
    fn render(&self) -> Markup {
        html! {
          div style=(container_style()) {
            iframe src=(RESUME_EMBED_URL) title=(RESUME_FRAME_TITLE) style=(frame_style()) {}
          }
        }
    }
}

pub fn resume() -> Markup {
    Resume.render()
}
