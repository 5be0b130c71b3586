use crate::codec;
use crate::compat::{BTreeMap, String, ToOwned, Vec};
use crate::config::{Config, OptionValue};
use crate::error::{ConfigError, Result};
use crate::source::PathInfoSource;

/// A named field with one or more decoded values, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    values: Vec<String>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First value. Always present for a field held by a [`PathInfo`].
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// Value assigned to a field with [`PathInfo::set_one`] and friends.
///
/// Borrowed lists are copied, so later changes to the caller's list never
/// reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    List(Vec<String>),
}

impl FieldValue {
    fn into_values(self) -> Vec<String> {
        match self {
            Self::Single(value) => vec_of(value),
            Self::List(values) => values,
        }
    }
}

fn vec_of(value: String) -> Vec<String> {
    let mut values = Vec::with_capacity(1);
    values.push(value);
    values
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Single(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        Self::Single(s.clone())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl From<&[String]> for FieldValue {
    fn from(values: &[String]) -> Self {
        Self::List(values.to_vec())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(values: &[&str]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

/// Fields in first-seen order plus a name index into them.
#[derive(Debug, Clone, Default)]
struct FieldTable {
    fields: Vec<Field>,
    index: BTreeMap<String, usize>,
}

impl FieldTable {
    fn clear(&mut self) {
        self.fields.clear();
        self.index.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    fn get(&self, name: &str) -> Option<&Field> {
        self.position(name).map(|idx| &self.fields[idx])
    }

    fn push_value(&mut self, name: String, value: String) {
        match self.position(&name) {
            Some(idx) => self.fields[idx].values.push(value),
            None => self.insert(name, vec_of(value)),
        }
    }

    fn replace(&mut self, name: &str, values: Vec<String>) {
        match self.position(name) {
            Some(idx) => self.fields[idx].values = values,
            None => self.insert(name.to_owned(), values),
        }
    }

    fn insert(&mut self, name: String, values: Vec<String>) {
        self.index.insert(name.clone(), self.fields.len());
        self.fields.push(Field { name, values });
    }

    fn remove(&mut self, name: &str) {
        let Some(idx) = self.index.remove(name) else {
            return;
        };
        self.fields.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
    }
}

/// Parameters decoded from a path-information string such as `/a-1/b-2`.
///
/// Field names keep the order in which they were first seen; each name can
/// carry several values.
#[derive(Debug, Clone, Default)]
pub struct PathInfo {
    config: Config,
    table: FieldTable,
}

impl PathInfo {
    /// Decode `raw` with the default configuration (`/` between pairs,
    /// `-` between name and value).
    pub fn new(raw: &str) -> Self {
        Self::with_config(raw, Config::default())
    }

    pub fn with_config(raw: &str, config: Config) -> Self {
        let mut params = Self {
            config,
            table: FieldTable::default(),
        };
        params.decode(raw);
        params
    }

    /// Decode whatever `source` currently exposes as path information.
    /// The source is read once.
    pub fn from_source<S>(source: &S, config: Config) -> Self
    where
        S: PathInfoSource + ?Sized,
    {
        Self::with_config(&source.path_info(), config)
    }

    /// Decode `raw` using named options (see [`Config::from_options`]).
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from the options; nothing is decoded in that case.
    pub fn from_options<I, K, V>(raw: &str, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        Ok(Self::with_config(raw, Config::from_options(options)?))
    }

    /// Replace every field with those decoded from `raw`.
    ///
    /// Never fails: a tuple without a key/value separator is skipped and a
    /// malformed percent-escape is kept literally.
    pub fn decode(&mut self, raw: &str) {
        let Self { config, table } = self;
        table.clear();

        let pair_sep = config.pair_separator();
        let kv_sep = config.key_value_separator();

        let mut input = raw;
        if config.strips_leading() {
            input = pair_sep.trim_start(input);
        }
        if config.strips_trailing() {
            input = pair_sep.trim_end(input);
        }
        if input.is_empty() {
            log::debug!("path info {raw:?} holds no fields");
            return;
        }

        for tuple in pair_sep.split(input) {
            let Some((name, value)) = kv_sep.split_once(tuple) else {
                log::debug!("dropping tuple {tuple:?}: no key/value separator");
                continue;
            };
            let (name, value) = (codec::decode(name), codec::decode(value));
            log::trace!("decoded field {name:?} = {value:?}");
            table.push_value(name, value);
        }
        log::debug!("decoded {} field(s) from {raw:?}", table.fields.len());
    }

    /// Field names in first-seen order.
    pub fn names(&self) -> Vec<&str> {
        self.table.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// First value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Field::first)
    }

    /// All values of `name`, empty when the field is absent.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.field(name)
            .map(|f| f.values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.position(name).is_some()
    }

    /// Replace the values of `name`.
    ///
    /// A new name goes to the end of the field order; an existing one keeps
    /// its position. Assigning an empty list removes the field.
    pub fn set_one(&mut self, name: &str, value: impl Into<FieldValue>) {
        let values = value.into().into_values();
        if values.is_empty() {
            self.delete(name);
            return;
        }
        self.table.replace(name, values);
    }

    /// Apply several assignments in iteration order.
    pub fn set_many<I, K, V>(&mut self, assignments: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        for (name, value) in assignments {
            self.set_one(name.as_ref(), value);
        }
    }

    /// Apply a flat `name, value, name, value, ...` list.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OddArgumentCount`] if the arguments do not pair up.
    /// The store is left untouched in that case.
    pub fn set_flat<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        if args.len() % 2 != 0 {
            return Err(ConfigError::OddArgumentCount(args.len()));
        }
        for pair in args.chunks_exact(2) {
            self.set_one(pair[0].as_ref(), pair[1].as_ref());
        }
        Ok(())
    }

    /// Remove `name` and all its values.
    pub fn delete(&mut self, name: &str) {
        self.table.remove(name);
    }

    /// Number of distinct field names.
    pub fn len(&self) -> usize {
        self.table.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.fields.is_empty()
    }

    pub fn fields(&self) -> &[Field] {
        &self.table.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.table.fields
            .iter()
            .map(|f| (f.name.as_str(), f.values.as_slice()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Write the fields back out as path information, one tuple per value,
    /// with names and values encoded by [`codec::encode`].
    pub fn to_path_string(&self) -> String {
        let (pair_sep, kv_sep) = self.config.serialized_separators();
        let mut result = String::new();
        for field in &self.table.fields {
            let name = codec::encode(&field.name);
            for value in &field.values {
                result.push_str(pair_sep);
                result.push_str(&name);
                result.push_str(kv_sep);
                result.push_str(&codec::encode(value));
            }
        }
        result
    }
}

impl core::fmt::Display for PathInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_path_string())
    }
}

impl From<&str> for PathInfo {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PathInfo {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::{format, vec};

    #[test]
    fn test_decode_empty() {
        assert!(PathInfo::new("").is_empty());
        assert!(PathInfo::new("///").is_empty());
    }

    #[test]
    fn test_decode_order_and_first_value() {
        let params = PathInfo::new("/a-1/b-2/c-3");
        assert_eq!(params.names(), vec!["a", "b", "c"]);
        assert_eq!(params.get("b"), Some("2"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_decode_repeated_names() {
        let params = PathInfo::new("/x-1/y-0/x-2/x-3/");
        assert_eq!(params.names(), vec!["x", "y"]);
        assert_eq!(params.get_all("x"), vec!["1", "2", "3"]);
        assert!(params.get_all("missing").is_empty());
    }

    #[test]
    fn test_tuple_without_separator_is_dropped() {
        let params = PathInfo::new("/a-1/orphan/b-2");
        assert_eq!(params.names(), vec!["a", "b"]);
        assert!(!params.contains("orphan"));
    }

    #[test]
    fn test_only_first_separator_splits() {
        let params = PathInfo::new("/date-2024-01-31");
        assert_eq!(params.get("date"), Some("2024-01-31"));
    }

    #[test]
    fn test_empty_name_is_legal() {
        let params = PathInfo::new("/-/-v");
        assert_eq!(params.names(), vec![""]);
        assert_eq!(params.get_all(""), vec!["", "v"]);
    }

    #[test]
    fn test_percent_decoded_halves() {
        let params = PathInfo::new("/first%20name-John+Smith/q-100%");
        assert_eq!(params.get("first name"), Some("John Smith"));
        assert_eq!(params.get("q"), Some("100%"));
    }

    #[test]
    fn test_redecode_resets() {
        let mut params = PathInfo::new("/a-1/b-2");
        params.set_one("c", "3");
        params.decode("/d-4");
        assert_eq!(params.names(), vec!["d"]);
        assert_eq!(params.get("a"), None);
        assert_eq!(params.get("c"), None);
    }

    #[test]
    fn test_set_one_replaces_in_place() {
        let mut params = PathInfo::new("/a-1/b-2/a-3");
        params.set_one("a", "9");
        assert_eq!(params.names(), vec!["a", "b"]);
        assert_eq!(params.get_all("a"), vec!["9"]);

        params.set_one("new", "v");
        assert_eq!(params.names(), vec!["a", "b", "new"]);
    }

    #[test]
    fn test_set_copies_borrowed_list() {
        let mut params = PathInfo::new("");
        let mut list = vec!["1".to_owned(), "2".to_owned()];
        params.set_one("p", list.as_slice());
        list.push("3".to_owned());
        list[0].push('x');
        assert_eq!(params.get_all("p"), vec!["1", "2"]);
    }

    #[test]
    fn test_set_empty_list_removes_field() {
        let mut params = PathInfo::new("/a-1/b-2");
        params.set_one("a", Vec::<String>::new());
        assert_eq!(params.names(), vec!["b"]);
    }

    #[test]
    fn test_set_flat() {
        let mut params = PathInfo::new("/a-1");
        params.set_flat(&["b", "2", "a", "3"]).unwrap();
        assert_eq!(params.names(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some("3"));

        let err = params.set_flat(&["c", "1", "d"]).unwrap_err();
        assert_eq!(err, ConfigError::OddArgumentCount(3));
        assert!(!params.contains("c"));
    }

    #[test]
    fn test_many_distinct_names() {
        let raw: String = (0..20_000).map(|i| format!("/k{i}-v{i}")).collect();
        let params = PathInfo::new(&raw);
        assert_eq!(params.len(), 20_000);
        assert_eq!(params.names()[0], "k0");
        assert_eq!(params.names()[19_999], "k19999");
        assert_eq!(params.get("k12345"), Some("v12345"));
    }

    #[test]
    fn test_delete_keeps_lookup_in_step() {
        let mut params = PathInfo::new("/a-1/b-2/c-3/d-4");
        params.delete("b");
        params.delete("missing");
        assert_eq!(params.names(), vec!["a", "c", "d"]);
        assert_eq!(params.get("c"), Some("3"));
        assert_eq!(params.get("d"), Some("4"));

        params.set_one("d", "9");
        params.set_one("b", "new");
        assert_eq!(params.names(), vec!["a", "c", "d", "b"]);
        assert_eq!(params.get_all("d"), vec!["9"]);
        assert_eq!(params.get("b"), Some("new"));
    }

    #[test]
    fn test_to_path_string() {
        let mut params = PathInfo::new("/a-1/a-2/b-x y");
        params.set_one("c/d", "e-f");
        assert_eq!(params.to_path_string(), "/a-1/a-2/b-x%20y/c%2Fd-e%2Df");
        assert_eq!(PathInfo::new("").to_path_string(), "");
    }
}
