use std::collections::HashMap;

/// Name-to-identifier table for the banks whose listings we ingest.
///
/// Built once at startup and handed to the aggregator; lookups are exact,
/// with no trimming or case folding. A name that does not resolve means the
/// row's price observation is excluded from the output.
pub struct BankDirectory {
    ids: HashMap<String, String>,
}

impl BankDirectory {
    /// The production table. Identifiers match the bank records already
    /// seeded in the client database.
    pub fn builtin() -> Self {
        [
            ("JMMB", "8fc8081e-32cf-4f27-90ec-8e440ea6dcd4"),
            ("NCB", "cf984f5d-4bf8-405d-93f4-c518e258f7fe"),
            ("CIBC", "33ff7536-112c-4a40-9b16-a60666ac7d4f"),
        ]
        .into_iter()
        .collect()
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }
}

impl<N: Into<String>, I: Into<String>> FromIterator<(N, I)> for BankDirectory {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        Self {
            ids: iter
                .into_iter()
                .map(|(name, id)| (name.into(), id.into()))
                .collect(),
        }
    }
}
