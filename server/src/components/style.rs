use maud::{html, Markup, Render};

/// An ordered list of CSS declarations destined for a `style` attribute.
///
/// Values are kept verbatim. Colours with an alpha channel or mixed units are
/// never normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, &'static str)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, property: &'static str, value: &'static str) -> Self {
        self.declarations.push((property, value));
        self
    }

    /// Looks up a property. A later declaration overrides an earlier one, same as in CSS.
    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.declarations
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.declarations.iter().copied()
    }

    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Render for InlineStyle {
    fn render(&self) -> Markup {
        html! { (self.to_css()) }
    }
}
