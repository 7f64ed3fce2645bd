/// A named section of a KeyValues document.
///
/// Attributes and children keep document order, and duplicate keys are
/// preserved rather than merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvSection {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<KvSection>,
}

impl KvSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(key, value);
        self
    }

    pub fn with_child(mut self, child: KvSection) -> Self {
        self.push_child(child);
        self
    }

    pub fn push_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    pub fn push_child(&mut self, child: KvSection) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All attributes as `(key, value)` pairs.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value stored under `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes_named(key).next()
    }

    /// Every value stored under `key`, in document order.
    pub fn attributes_named<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.attributes
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[KvSection] {
        &self.children
    }

    /// First child section called `name`.
    pub fn child(&self, name: &str) -> Option<&KvSection> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Every child section called `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a KvSection> {
        self.children.iter().filter(move |c| c.name == name)
    }
}
