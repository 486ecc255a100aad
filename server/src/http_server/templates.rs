use maud::{html, Markup, DOCTYPE};

use crate::components::InlineStyle;

pub struct PageMeta {
    pub title: &'static str,
    pub canonical_url: String,
}

pub fn head(meta: &PageMeta) -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (meta.title) }
        link rel="canonical" href=(meta.canonical_url);
      }
    }
}

fn body_style() -> InlineStyle {
    InlineStyle::new()
        .with("margin", "0")
        .with("min-height", "100vh")
        .with("display", "flex")
        .with("justify-content", "center")
        .with("align-items", "center")
}

/// Wraps a page body in a full document. The body only centers `inner`.
pub fn base(inner: Markup, meta: &PageMeta) -> Markup {
    html! {
      (DOCTYPE)
      html lang="en" {
        (head(meta))

        body style=(body_style()) {
          (inner)
        }
      }
    }
}
