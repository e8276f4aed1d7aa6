use url::Url;

/// Query string pairs, kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallQuery {
    pairs: Vec<(String, String)>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `name=value` pair.
    ///
    /// An empty value still emits `name=`.
    pub fn add_pair(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Checks if the query is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Appends the pairs to the URL query, percent-encoding them.
    pub(in crate::client) fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
    }
}
