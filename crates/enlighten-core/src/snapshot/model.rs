//! Snapshot value model

/// A runtime value recorded during a test run
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// Null scalar
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Integer(i64),
    /// Floating point scalar
    Float(f64),
    /// String scalar
    String(String),
    /// List whose keys are exactly 0..n-1
    Sequence(Vec<Snapshot>),
    /// Ordered key/value pairs that do not form a sequence
    Mapping(Vec<(Key, Snapshot)>),
    /// Object with class name and attributes
    Object(ObjectSnapshot),
    /// Callable signature
    Function(FunctionSnapshot),
    /// Shape the decoder could not classify; renders as nothing
    Unrecognized,
}

impl Snapshot {
    /// Build a container from ordered entries.
    ///
    /// Entries whose keys are the integers `0..n` in order become a
    /// [`Snapshot::Sequence`]; anything else keeps its keys as a
    /// [`Snapshot::Mapping`]. An empty list is a sequence.
    pub fn from_entries(entries: Vec<(Key, Snapshot)>) -> Self {
        let is_sequence = entries
            .iter()
            .enumerate()
            .all(|(index, (key, _))| key.is_index(index));

        if is_sequence {
            Snapshot::Sequence(entries.into_iter().map(|(_, value)| value).collect())
        } else {
            Snapshot::Mapping(entries)
        }
    }

    /// Build a container from string-keyed entries, normalizing numeric keys
    pub fn from_named<K: AsRef<str>>(entries: impl IntoIterator<Item = (K, Snapshot)>) -> Self {
        Self::from_entries(
            entries
                .into_iter()
                .map(|(key, value)| (Key::from_name(key.as_ref()), value))
                .collect(),
        )
    }

    /// Check whether this is the null scalar
    pub fn is_null(&self) -> bool {
        matches!(self, Snapshot::Null)
    }
}

impl From<bool> for Snapshot {
    fn from(value: bool) -> Self {
        Snapshot::Bool(value)
    }
}

impl From<i64> for Snapshot {
    fn from(value: i64) -> Self {
        Snapshot::Integer(value)
    }
}

impl From<f64> for Snapshot {
    fn from(value: f64) -> Self {
        Snapshot::Float(value)
    }
}

impl From<&str> for Snapshot {
    fn from(value: &str) -> Self {
        Snapshot::String(value.to_string())
    }
}

impl From<String> for Snapshot {
    fn from(value: String) -> Self {
        Snapshot::String(value)
    }
}

impl From<Vec<Snapshot>> for Snapshot {
    fn from(items: Vec<Snapshot>) -> Self {
        Snapshot::Sequence(items)
    }
}

impl From<ObjectSnapshot> for Snapshot {
    fn from(object: ObjectSnapshot) -> Self {
        Snapshot::Object(object)
    }
}

impl From<FunctionSnapshot> for Snapshot {
    fn from(function: FunctionSnapshot) -> Self {
        Snapshot::Function(function)
    }
}

/// Key of a mapping entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key
    Str(String),
}

impl Key {
    /// Create a key from its textual form.
    ///
    /// Canonical decimal integers (`"7"`, `"-3"`) become [`Key::Int`];
    /// `"07"`, `"+7"`, `"-0"` and out-of-range numbers stay strings.
    pub fn from_name(name: &str) -> Self {
        match parse_canonical_int(name) {
            Some(value) => Key::Int(value),
            None => Key::Str(name.to_string()),
        }
    }

    fn is_index(&self, index: usize) -> bool {
        match self {
            Key::Int(value) => usize::try_from(*value).map_or(false, |v| v == index),
            Key::Str(_) => false,
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::from_name(value)
    }
}

fn parse_canonical_int(name: &str) -> Option<i64> {
    let digits = name.strip_prefix('-').unwrap_or(name);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros and negative zero are not canonical
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if digits == "0" && name.starts_with('-') {
        return None;
    }

    name.parse().ok()
}

/// Recorded object: class name plus ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSnapshot {
    /// Fully qualified class name
    pub class_name: String,
    /// Attributes in declaration order
    pub attributes: Vec<(String, Snapshot)>,
}

impl ObjectSnapshot {
    /// Create an object snapshot without attributes
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Snapshot>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

/// Recorded callable signature
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSnapshot {
    /// Function or method name
    pub function: String,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterSnapshot>,
    /// Declared return type
    pub return_type: Option<String>,
}

impl FunctionSnapshot {
    /// Create a signature without parameters or return type
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Append a parameter
    pub fn parameter(mut self, parameter: ParameterSnapshot) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the return type (empty means "not declared")
    pub fn returns(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = non_empty(return_type.into());
        self
    }
}

/// A single parameter of a [`FunctionSnapshot`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSnapshot {
    /// Parameter name, without the `$` sigil
    pub parameter: String,
    /// Declared type
    pub type_name: Option<String>,
    /// Whether the parameter may be omitted
    pub optional: bool,
    /// Default value; a null default is stored as `None`
    pub default: Option<Snapshot>,
}

impl ParameterSnapshot {
    /// Create a required, untyped parameter
    pub fn new(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            type_name: None,
            optional: false,
            default: None,
        }
    }

    /// Set the declared type (empty means "not declared")
    pub fn typed(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = non_empty(type_name.into());
        self
    }

    /// Mark the parameter as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the default value (null means "no default")
    pub fn with_default(mut self, value: impl Into<Snapshot>) -> Self {
        let value = value.into();
        self.default = if value.is_null() { None } else { Some(value) };
        self
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
