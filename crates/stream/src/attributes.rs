use tagstream_types::Markup;

/// A supplied attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain text, escaped on render.
    Text(String),
    /// A trusted value, rendered verbatim.
    Markup(Markup),
    /// A switch: `true` renders `name="name"`, `false` omits the attribute.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Text(s.clone())
    }
}

impl From<Markup> for AttrValue {
    fn from(m: Markup) -> Self {
        AttrValue::Markup(m)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttrValue {
                fn from(n: $t) -> Self {
                    AttrValue::Text(n.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u8, u16, u32, u64, usize, f32, f64);

/// Attributes supplied for one element, in supplied order.
///
/// Names are lower-cased. Setting a name twice replaces the earlier value in
/// place. An attribute that should not be rendered is simply never set; see
/// [`Attributes::set_opt`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets the attribute only when `value` is `Some`.
    pub fn set_opt<V: Into<AttrValue>>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(name, value);
        }
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<AttrValue>) {
        let name = name.to_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let name = name.to_lowercase();
        let idx = self.entries.iter().position(|(n, _)| *n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        let name = name.to_lowercase();
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges `other` into `self`; values in `other` win.
    pub fn extend(&mut self, other: Attributes) {
        for (name, value) in other.entries {
            self.insert(&name, value);
        }
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(name.as_ref(), value);
        }
        attrs
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
