use color_eyre::eyre::{bail, ensure, WrapErr};
use scraper::{ElementRef, Html};
use url::Url;

use crate::{
    components::resume::{self, container_style, frame_style, RESUME_EMBED_URL},
    Result,
};

pub(crate) fn validate() -> Result<()> {
    let rendered = resume::resume().into_string();
    let fragment = Html::parse_fragment(&rendered);

    println!("Validating resume component...");
    let (container, frame) = check_structure(&fragment)?;
    println!("One container, one frame ✅");

    check_source(frame)?;
    println!("Frame source {RESUME_EMBED_URL} ✅");

    check_styles(container, frame)?;
    println!("Container and frame styles ✅");

    ensure!(
        resume::resume().into_string() == rendered,
        "Rendering twice produced different markup"
    );
    println!("Rendering is stable ✅");

    Ok(())
}

fn element_children(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// Finds the container and its frame, which must be the only elements in the fragment.
fn check_structure(fragment: &Html) -> Result<(ElementRef<'_>, ElementRef<'_>)> {
    let top_level = element_children(fragment.root_element());
    let [container] = top_level.as_slice() else {
        bail!(
            "Expected exactly one top-level element, found {}",
            top_level.len()
        );
    };
    ensure!(
        container.value().name() == "div",
        "Expected the container to be a div, found {}",
        container.value().name()
    );

    let inside = element_children(*container);
    let [frame] = inside.as_slice() else {
        bail!(
            "The frame must be the only thing inside the container, found {} elements",
            inside.len()
        );
    };
    ensure!(
        frame.value().name() == "iframe",
        "Expected an embedded frame inside the container, found {}",
        frame.value().name()
    );

    Ok((*container, *frame))
}

fn check_source(frame: ElementRef<'_>) -> Result<()> {
    let url = Url::parse(RESUME_EMBED_URL).wrap_err("Resume url is not parsable")?;
    ensure!(url.scheme() == "https", "Resume url must be https");

    ensure!(
        frame.value().attr("src") == Some(RESUME_EMBED_URL),
        "Frame does not point at {}",
        RESUME_EMBED_URL
    );

    Ok(())
}

fn check_styles(container: ElementRef<'_>, frame: ElementRef<'_>) -> Result<()> {
    let expected_container = container_style();
    for (property, expected) in [
        ("border-width", "3px"),
        ("border-style", "solid"),
        ("border-color", "#CCCCCC"),
        ("border-radius", "10px"),
        ("overflow", "hidden"),
        ("display", "flex"),
        ("justify-content", "center"),
        ("align-items", "center"),
        ("flex-direction", "column"),
    ] {
        ensure!(
            expected_container.get(property) == Some(expected),
            "Container {} should be {}",
            property,
            expected
        );
    }

    let expected_frame = frame_style();
    for (property, expected) in [
        ("border", "0"),
        ("width", "100vw"),
        ("max-width", "8.5in"),
        ("height", "100vh"),
        ("max-height", "11in"),
    ] {
        ensure!(
            expected_frame.get(property) == Some(expected),
            "Frame {} should be {}",
            property,
            expected
        );
    }

    for (element, style) in [(container, expected_container), (frame, expected_frame)] {
        let css = style.to_css();
        ensure!(
            element.value().attr("style") == Some(css.as_str()),
            "Rendered {} is missing `{}`",
            element.value().name(),
            css
        );
    }

    Ok(())
}
