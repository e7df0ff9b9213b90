/// An insertion-ordered cookie mapping.
///
/// The portals we scrape key page state off cookies (a calendar year
/// preference, for instance), so updates are insert-or-replace: an existing
/// name keeps its position, a new name is appended. Rendering preserves that
/// order.
#[derive(Debug, Default, Clone)]
pub struct CookieJar {
    entries: Vec<(String, String)>,
}

impl CookieJar {
    pub fn new() -> Self {
        CookieJar { entries: Vec::new() }
    }

    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render a `Cookie` request header value: `name=value;` pairs joined
    /// by single spaces, in insertion order. Values are passed through
    /// unescaped.
    pub fn header(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{}={};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
