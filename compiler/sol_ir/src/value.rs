//! The Sol value universe.

use indexmap::IndexMap;

/// A Sol value: one node of the tree produced by the reader and
/// consumed by the emitter.
///
/// The variants mirror the language's surface forms. `Frozen` wraps a
/// value that the runtime must treat as literal data rather than as an
/// application; the reader produces it for `(…)` lists, `:` prefixes,
/// and the arguments of dotted-getter chains.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Ordered sequence of values with dispatch/freeze flags.
    List(List),
    /// Identifier. Non-empty; never contains whitespace or any of
    /// `( ) [ ] { } ; "`.
    Token(String),
    /// String literal contents after escape decoding.
    Str(String),
    /// Numeric literal.
    Number(f64),
    /// Wrapper marking the inner value as literal data.
    Frozen(Box<Value>),
    /// Object literal: optional parent name plus ordered entries.
    Object(ObjectLiteral),
}

impl Value {
    /// Build a token value.
    pub fn token(identifier: impl Into<String>) -> Self {
        Value::Token(identifier.into())
    }

    /// Build a string value.
    pub fn string(contents: impl Into<String>) -> Self {
        Value::Str(contents.into())
    }

    /// Build a number value.
    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    /// Wrap a value in a freeze marker.
    pub fn frozen(inner: Value) -> Self {
        Value::Frozen(Box::new(inner))
    }

    /// The token identifier, if this value is a token.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Value::Token(identifier) => Some(identifier),
            _ => None,
        }
    }

    /// The list, if this value is a list.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

/// Ordered sequence of values.
///
/// Two flags ride along for the runtime's benefit:
///
/// - `object_mode` selects object-style dispatch (`[…]` read with the
///   `@` modifier, and the lists synthesised by the dotted-getter
///   rewrite) over function-style dispatch.
/// - `freeze_count` is the runtime's freeze counter. The reader only
///   ever leaves it at `0` (the default) or sets it to `-1`, meaning
///   "implicitly frozen for as long as this list appears in code".
///
/// The invariant `freeze_count >= -1` is maintained by keeping the
/// field private; the reader marks implicit freezing through
/// [`mark_implicitly_frozen`](List::mark_implicitly_frozen).
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    /// Object-style dispatch flag.
    pub object_mode: bool,
    freeze_count: i32,
    items: Vec<Value>,
}

impl List {
    /// Create an empty list with the given dispatch mode.
    pub fn new(object_mode: bool) -> Self {
        Self {
            object_mode,
            freeze_count: 0,
            items: Vec::new(),
        }
    }

    /// Create a list from existing items.
    pub fn with_items(object_mode: bool, items: Vec<Value>) -> Self {
        Self {
            object_mode,
            freeze_count: 0,
            items,
        }
    }

    /// Append a value.
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Number of child values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the list has no children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Child at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// The children as a slice.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Iterate over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// The runtime freeze counter (`-1` = implicitly frozen).
    pub fn freeze_count(&self) -> i32 {
        self.freeze_count
    }

    /// Mark the list as implicitly frozen while it appears in code.
    pub fn mark_implicitly_frozen(&mut self) {
        self.freeze_count = -1;
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Object literal: `{…}`, `@{…}` or `@name{…}`.
///
/// Entries keep insertion order. Writing a key that already exists
/// replaces the value in place ("ordered overwrite"): the entry stays
/// at the position of its first insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLiteral {
    parent: Option<String>,
    entries: IndexMap<String, Value>,
}

impl ObjectLiteral {
    /// Create an empty literal. `parent` is `None` for a bare `{…}`,
    /// `Some("Object")` for `@{…}`, and the named token for
    /// `@name{…}`.
    pub fn new(parent: Option<String>) -> Self {
        Self {
            parent,
            entries: IndexMap::new(),
        }
    }

    /// The parent token name, if one was given.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Insert an entry. An existing key keeps its position and gets
    /// the new value.
    pub fn insert(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the literal has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
}

#[cfg(test)]
mod tests;
