//! I define [`PrefixMap`], associating prefixes to namespace IRIs,
//! as declared in Turtle documents or SPARQL prologues.

/// An insertion-ordered map from prefixes (without the trailing `:`)
/// to namespace IRIs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixMap(Vec<(String, String)>);

impl PrefixMap {
    /// An empty prefix map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `prefix` to `namespace`.
    ///
    /// If `prefix` is already declared, its namespace is replaced,
    /// but it keeps its original position.
    pub fn insert<P: Into<String>, N: Into<String>>(&mut self, prefix: P, namespace: N) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.0.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = namespace,
            None => self.0.push((prefix, namespace)),
        }
    }

    /// Return the namespace associated to `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, n)| n.as_str())
    }

    /// Expand a prefixed name such as `foaf:name` into a full IRI.
    ///
    /// Return `None` if `pname` contains no `:`, or if its prefix is not declared.
    pub fn expand(&self, pname: &str) -> Option<String> {
        let (prefix, suffix) = pname.split_once(':')?;
        self.get(prefix).map(|ns| format!("{ns}{suffix}"))
    }

    /// Iterate over the (prefix, namespace) pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// The number of declared prefixes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no prefix is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>, N: Into<String>> FromIterator<(P, N)> for PrefixMap {
    fn from_iter<T: IntoIterator<Item = (P, N)>>(iter: T) -> Self {
        let mut map = PrefixMap::new();
        for (p, n) in iter {
            map.insert(p, n);
        }
        map
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insertion_order() {
        let mut map = PrefixMap::new();
        map.insert("foaf", "http://xmlns.com/foaf/0.1/");
        map.insert("", "http://example.org/");
        map.insert("ex", "http://example.com/");
        map.insert("foaf", "http://xmlns.com/foaf/0.2/");
        let prefixes: Vec<_> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, ["foaf", "", "ex"]);
        assert_eq!(map.get("foaf"), Some("http://xmlns.com/foaf/0.2/"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn expand() {
        let map: PrefixMap = [("foaf", "http://xmlns.com/foaf/0.1/"), ("", "http://example.org/")]
            .into_iter()
            .collect();
        assert_eq!(
            map.expand("foaf:name").as_deref(),
            Some("http://xmlns.com/foaf/0.1/name")
        );
        assert_eq!(map.expand(":x").as_deref(), Some("http://example.org/x"));
        assert_eq!(map.expand("dc:title"), None);
        assert_eq!(map.expand("title"), None);
    }
}
