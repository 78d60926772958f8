//! Parse the tag string configuring a field.

/// The tag key that excludes a field.
///
pub const EXCLUDE: &str = "-";

/// The tag keys that are not passed through as HTML attributes.
///
pub const RESERVED_KEYS: [&str; 7] =
    ["name", "label", "placeholder", "type", "id", "footer", "class"];

/// A parsed tag string, an ordered mapping from option key to value.
///
/// The tag string is a number of `;`-separated `key=value` pairs.  Key and
/// value are trimmed, and only the first `=` separates them.  Segments
/// without `=` are ignored, unless the segment is `-`, which excludes the
/// field regardless of any other segments.
///
/// ```
/// use formfields::Tags;
///
/// let tags = Tags::parse("label=Full Name; id = name ;bogus;data-x=a=b");
/// assert_eq!(tags.get("label"), Some("Full Name"));
/// assert_eq!(tags.get("id"), Some("name"));
/// assert_eq!(tags.get("bogus"), None);
/// assert_eq!(tags.get("data-x"), Some("a=b"));
/// assert!(!tags.excluded());
///
/// assert!(Tags::parse("label=Secret;-").excluded());
/// assert!(Tags::parse("   ").is_empty());
/// ```
///
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tags(Vec<(String, String)>);

impl Tags {
    /// Parse `tags` as described for the type.
    ///
    pub fn parse(tags: &str) -> Self {
        let mut result = Self::default();
        let tags = tags.trim();
        if tags.is_empty() {
            return result;
        }
        for segment in tags.split(';') {
            match segment.split_once('=') {
                Some((key, _)) if key.trim() == EXCLUDE => (),
                Some((key, value)) => result.insert(key.trim(), value.trim()),
                None if segment.trim() == EXCLUDE => {
                    return Self(vec![(
                        EXCLUDE.to_string(),
                        "this field is ignored".to_string(),
                    )]);
                }
                None => (),
            }
        }
        result
    }

    /// The field should not be visited.
    ///
    pub fn excluded(&self) -> bool {
        self.get(EXCLUDE).is_some()
    }

    /// The value for `key`, if any.
    ///
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set the value for `key`.  An existing key keeps its position.
    ///
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the pairs in the order they were first given.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over the pairs whose keys are not in `consumed`.
    ///
    pub fn unreserved<'a>(
        &'a self,
        consumed: &'a [&'a str],
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.iter().filter(move |(k, _)| !consumed.contains(k))
    }
}
