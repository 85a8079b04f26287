use serde::Serialize;
use std::borrow::Cow;

/// Token replaced with the copyright line when a license text or header is rendered.
pub const COPYRIGHT_PLACEHOLDER: &str = "{copyright}";

/// A software license a generated project or source file can carry.
///
/// Built-in catalog entries borrow `'static` data; custom licenses own the strings read from
/// configuration. An empty `text` and `header` means "no license".
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Human-readable name (e.g. `MIT License`). Empty for custom licenses.
    pub name: Cow<'static, str>,
    /// Names a user may type to select this license, compared case-insensitively.
    pub possible_matches: Vec<Cow<'static, str>>,
    /// Full license text.
    pub text: Cow<'static, str>,
    /// Short notice intended for the top of source files.
    pub header: Cow<'static, str>,
}

impl License {
    /// Creates a license record.
    pub fn new<A>(
        name: impl Into<Cow<'static, str>>,
        possible_matches: impl IntoIterator<Item = A>,
        text: impl Into<Cow<'static, str>>,
        header: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        A: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            possible_matches: possible_matches.into_iter().map(Into::into).collect(),
            text: text.into(),
            header: header.into(),
        }
    }

    /// Synthesizes a custom license from user-supplied header and text.
    ///
    /// The result has no name and no aliases; it never comes from the registry.
    pub fn custom(header: impl Into<Cow<'static, str>>, text: impl Into<Cow<'static, str>>) -> Self {
        Self { header: header.into(), text: text.into(), ..Self::default() }
    }

    /// Returns `true` when there is nothing to stamp (empty text and header).
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.text.is_empty() && self.header.is_empty()
    }

    /// Tests whether `name` is one of this license's aliases, ignoring case.
    ///
    /// An empty `name` never matches.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let folded = fold_alias(name);
        self.possible_matches.iter().any(|alias| fold_alias(alias) == folded)
    }

    /// Returns the license text with [`COPYRIGHT_PLACEHOLDER`] replaced by `copyright`.
    #[must_use]
    pub fn render_text(&self, copyright: &str) -> Cow<'_, str> {
        render(&self.text, copyright)
    }

    /// Returns the source header with [`COPYRIGHT_PLACEHOLDER`] replaced by `copyright`.
    #[must_use]
    pub fn render_header(&self, copyright: &str) -> Cow<'_, str> {
        render(&self.header, copyright)
    }
}

/// Normalizes an alias for comparison (Unicode lowercase).
#[must_use]
pub fn fold_alias(alias: &str) -> String {
    alias.to_lowercase()
}

fn render<'a>(template: &'a str, copyright: &str) -> Cow<'a, str> {
    if template.contains(COPYRIGHT_PLACEHOLDER) {
        Cow::Owned(template.replace(COPYRIGHT_PLACEHOLDER, copyright))
    } else {
        Cow::Borrowed(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_leaves_text_without_placeholder_borrowed() {
        let license = License::custom("", "plain text");
        assert!(matches!(license.render_text("Copyright © 2020 A"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn fold_alias_handles_non_ascii() {
        assert_eq!(fold_alias("ÄGPL"), "ägpl");
    }
}
