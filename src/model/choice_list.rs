/// A named, ordered set of selectable strings plus the prefix typed so far.
///
/// The loaded entries never change after construction; the filtered view is
/// recomputed from them every time it is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceList {
    source: String,
    items: Vec<String>,
    prefix: String,
}

impl ChoiceList {
    /// Creates a choice list for `source` with the given entries and an empty prefix.
    pub fn new(source: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            source: source.into(),
            items,
            prefix: String::new(),
        }
    }

    /// Returns the source name this list was loaded from (e.g. `role.txt`).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the display label: the source name without its file-type suffix.
    pub fn label(&self) -> &str {
        label_for_source(&self.source)
    }

    /// Returns all entries in load order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the text currently typed into the field.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the typed text for in-place editing.
    pub fn prefix_mut(&mut self) -> &mut String {
        &mut self.prefix
    }

    /// Replaces the typed text.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Returns the entries matching the current prefix, in load order.
    pub fn filtered(&self) -> Vec<&str> {
        filter(&self.items, &self.prefix)
    }
}

/// Returns every entry of `items` that starts with `prefix`, ignoring case.
///
/// Order is preserved. An empty prefix matches every entry.
pub fn filter<'a>(items: &'a [String], prefix: &str) -> Vec<&'a str> {
    items
        .iter()
        .map(String::as_str)
        .filter(|item| starts_with_ignore_case(item, prefix))
        .collect()
}

/// Case-insensitive `starts_with`, comparing the upper-case form of each character.
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    let mut chars = s.chars();
    prefix.chars().all(|p| {
        chars
            .next()
            .is_some_and(|c| c.to_uppercase().eq(p.to_uppercase()))
    })
}

/// Strips the file-type suffix (everything from the last `.`) from a source name.
pub fn label_for_source(source: &str) -> &str {
    source
        .rfind('.')
        .map_or(source, |dot| &source[..dot])
}
