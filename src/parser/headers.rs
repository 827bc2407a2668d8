//! An ordered, multi-valued header collection.

/// HTTP header fields in the order they were added.
///
/// A name may appear more than once; each occurrence is a separate value.
/// Lookups compare names ASCII case-insensitively, but names are stored
/// exactly as they were given so they can be written back unchanged.
/// Values are kept as raw bytes: a field value may carry obs-text
/// (`0x80..=0xFF`) that is not valid UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, Vec<u8>)>,
}

impl HeaderMap {
    /// Create an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `name`, keeping any existing values.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Replace every value of `name` with a single value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) {
        let name = name.into();
        self.remove(&name);
        self.entries.push((name, value.into()));
    }

    /// Remove every value of `name`, returning how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        before - self.entries.len()
    }

    /// The first value of `name`, if any, as raw bytes.
    pub fn get_bytes(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_slice())
    }

    /// The first value of `name`, if any and if it is valid UTF-8.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_bytes(name).and_then(|v| std::str::from_utf8(v).ok())
    }

    /// Every value of `name` as raw bytes, in the order they were added.
    pub fn get_all_bytes<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a [u8]> + 'n
    where
        'a: 'n,
    {
        self.entries
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_slice())
    }

    /// Every UTF-8 value of `name`, in the order they were added.
    pub fn get_all<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a str> + 'n
    where
        'a: 'n,
    {
        self.get_all_bytes(name).filter_map(|v| std::str::from_utf8(v).ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_bytes(name).is_some()
    }

    /// Whether any comma-separated element of `name` equals `token`, ignoring case.
    pub fn has_token(&self, name: &str, token: &str) -> bool {
        self.get_all(name)
            .flat_map(|v| v.split(','))
            .any(|t| t.trim().eq_ignore_ascii_case(token))
    }

    /// All `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a [u8]);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a [u8])> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.append("Content-Type", "text/plain");

        assert_eq!(headers.get("content-type"), Some("text/plain"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("text/plain"));
        assert!(headers.contains("Content-type"));
        assert!(!headers.contains("Content-Length"));
    }

    #[test]
    fn test_append_keeps_every_value_in_order() {
        let mut headers = HeaderMap::new();
        headers.append("X-Test", "a");
        headers.append("Accept", "*/*");
        headers.append("x-test", "b");

        let values: Vec<&str> = headers.get_all("X-Test").collect();
        assert_eq!(values, vec!["a", "b"]);
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_insert_replaces_all_values() {
        let mut headers = HeaderMap::new();
        headers.append("Content-Length", "1");
        headers.append("content-length", "2");
        headers.insert("Content-Length", "7");

        let values: Vec<&str> = headers.get_all("Content-Length").collect();
        assert_eq!(values, vec!["7"]);
    }

    #[test]
    fn test_names_are_stored_as_given() {
        let mut headers = HeaderMap::new();
        headers.append("x-lower", "1");

        let pairs: Vec<(&str, &[u8])> = headers.iter().collect();
        assert_eq!(pairs, vec![("x-lower", &b"1"[..])]);
    }

    #[test]
    fn test_non_utf8_values_are_kept_as_bytes() {
        let mut headers = HeaderMap::new();
        headers.append("X-Name", &b"caf\xe9"[..]);

        assert_eq!(headers.get_bytes("x-name"), Some(&b"caf\xe9"[..]));
        assert_eq!(headers.get("X-Name"), None);
        assert!(headers.contains("X-Name"));
    }

    #[test]
    fn test_has_token() {
        let mut headers = HeaderMap::new();
        headers.append("Connection", "Upgrade, Keep-Alive");

        assert!(headers.has_token("connection", "keep-alive"));
        assert!(headers.has_token("Connection", "upgrade"));
        assert!(!headers.has_token("Connection", "close"));
    }
}
