//! Items: carriable, stackable-on-the-floor objects.

use crate::glyph::Glyph;

/// A carriable object.
///
/// Items are inert values: they have a look and a description but no
/// behavior of their own. Cells stack them in arrival order, inventories
/// hold them in slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    glyph: Glyph,
    description: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        glyph: Glyph,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            glyph,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Short description with an indefinite article: "a rock".
    pub fn describe_a(&self) -> String {
        format!("{} {}", indefinite_article(&self.name), self.name)
    }
}

/// Chooses the indefinite article by leading vowel.
pub(crate) fn indefinite_article(name: &str) -> &'static str {
    match name.chars().next() {
        Some(c) if "aeiouAEIOU".contains(c) => "an",
        _ => "a",
    }
}
