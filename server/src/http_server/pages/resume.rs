use axum::extract::State;
use maud::Markup;

use crate::{
    components::resume,
    http_server::templates::{base, PageMeta},
    AppConfig,
};

pub(crate) async fn resume_page(State(config): State<AppConfig>) -> Markup {
    base(
        resume(),
        &PageMeta {
            title: "Resume",
            canonical_url: config.app_url("/"),
        },
    )
}

/// Just the component, for pages that bring their own document.
pub(crate) async fn resume_embed() -> Markup {
    resume()
}
