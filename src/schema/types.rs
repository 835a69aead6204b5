//! Schema model: named record types and their property rules
//!
//! Supported property types:
//! - string: UTF-8 string, optional `minLength` and `startsWith`
//! - number: JSON number, optional `isInteger`
//! - boolean
//! - object: nested property set
//! - array: homogeneous elements described by `items`, optional `minLength`
//! - any other name: reference to another type declared in the same schema
//!
//! Property order is preserved exactly as declared. It fixes the order in
//! which properties are checked and errors are reported.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use super::errors::{GenerationError, SchemaResult};

/// A sanitizing step applied to a property value before it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    /// Strip leading and trailing whitespace
    Trim,
    /// Case-fold to lowercase
    Lowercase,
    /// Parse into a whole number
    ToInteger,
}

impl Transform {
    /// Returns the name used in schema documents
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Trim => "trim",
            Transform::Lowercase => "lowercase",
            Transform::ToInteger => "toInteger",
        }
    }
}

/// Declared type of a property, with the rules that only apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    String {
        min_length: Option<usize>,
        starts_with: Option<String>,
    },
    Number {
        is_integer: bool,
    },
    Boolean,
    Object {
        properties: PropertySet,
    },
    Array {
        min_length: Option<usize>,
        /// Element spec (boxed for recursion)
        items: Box<PropertySpec>,
    },
    /// Another type declared in the same schema, validated as an object.
    Named(String),
}

impl PropertyType {
    /// Returns the category name used in documents and messages
    pub fn type_name(&self) -> &str {
        match self {
            PropertyType::String { .. } => "string",
            PropertyType::Number { .. } => "number",
            PropertyType::Boolean => "boolean",
            PropertyType::Object { .. } => "object",
            PropertyType::Array { .. } => "array",
            PropertyType::Named(name) => name,
        }
    }
}

/// Rule set for one property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPropertySpec")]
pub struct PropertySpec {
    /// Declared type and its type-specific rules
    pub property_type: PropertyType,
    /// Whether the property must be present (default true)
    pub required: bool,
    /// Transforms applied in order before any check
    pub transform: Vec<Transform>,
}

impl PropertySpec {
    fn of(property_type: PropertyType) -> Self {
        Self {
            property_type,
            required: true,
            transform: Vec::new(),
        }
    }

    /// Create a required string property
    pub fn string() -> Self {
        Self::of(PropertyType::String {
            min_length: None,
            starts_with: None,
        })
    }

    /// Create a required number property
    pub fn number() -> Self {
        Self::of(PropertyType::Number { is_integer: false })
    }

    /// Create a required boolean property
    pub fn boolean() -> Self {
        Self::of(PropertyType::Boolean)
    }

    /// Create a required object property
    pub fn object(properties: PropertySet) -> Self {
        Self::of(PropertyType::Object { properties })
    }

    /// Create a required array property
    pub fn array(items: PropertySpec) -> Self {
        Self::of(PropertyType::Array {
            min_length: None,
            items: Box::new(items),
        })
    }

    /// Create a required property referencing another declared type
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::of(PropertyType::Named(type_name.into()))
    }

    /// Marks the property optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Appends a transform to the pipeline
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform.push(transform);
        self
    }

    /// Sets `minLength`; ignored unless the property is a string or array
    pub fn min_length(mut self, n: usize) -> Self {
        match &mut self.property_type {
            PropertyType::String { min_length, .. } | PropertyType::Array { min_length, .. } => {
                *min_length = Some(n);
            }
            _ => {}
        }
        self
    }

    /// Sets `startsWith`; ignored unless the property is a string
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        if let PropertyType::String { starts_with, .. } = &mut self.property_type {
            *starts_with = Some(prefix.into());
        }
        self
    }

    /// Sets `isInteger`; ignored unless the property is a number
    pub fn integer(mut self) -> Self {
        if let PropertyType::Number { is_integer } = &mut self.property_type {
            *is_integer = true;
        }
        self
    }
}

fn default_required() -> bool {
    true
}

/// Document form of a property spec. Unrecognized fields are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPropertySpec {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default = "default_required")]
    required: bool,
    min_length: Option<usize>,
    is_integer: Option<bool>,
    starts_with: Option<String>,
    properties: Option<PropertySet>,
    items: Option<Box<PropertySpec>>,
    #[serde(default)]
    transform: Vec<Transform>,
}

impl RawPropertySpec {
    /// Names of rule fields that are set but meaningless for the declared type.
    fn misplaced_rules(&self) -> Vec<&'static str> {
        let t = self.type_name.as_str();
        let mut misplaced = Vec::new();
        if self.min_length.is_some() && t != "string" && t != "array" {
            misplaced.push("minLength");
        }
        if self.is_integer.is_some() && t != "number" {
            misplaced.push("isInteger");
        }
        if self.starts_with.is_some() && t != "string" {
            misplaced.push("startsWith");
        }
        if self.properties.is_some() && t != "object" {
            misplaced.push("properties");
        }
        if self.items.is_some() && t != "array" {
            misplaced.push("items");
        }
        misplaced
    }
}

impl TryFrom<RawPropertySpec> for PropertySpec {
    type Error = String;

    fn try_from(raw: RawPropertySpec) -> Result<Self, Self::Error> {
        for rule in raw.misplaced_rules() {
            tracing::warn!(
                rule,
                property_type = %raw.type_name,
                "ignoring rule that does not apply to this type"
            );
        }

        let property_type = match raw.type_name.as_str() {
            "string" => PropertyType::String {
                min_length: raw.min_length,
                starts_with: raw.starts_with,
            },
            "number" => PropertyType::Number {
                is_integer: raw.is_integer.unwrap_or(false),
            },
            "boolean" => PropertyType::Boolean,
            "object" => PropertyType::Object {
                properties: raw
                    .properties
                    .ok_or("type 'object' requires 'properties'")?,
            },
            "array" => PropertyType::Array {
                min_length: raw.min_length,
                items: raw.items.ok_or("type 'array' requires 'items'")?,
            },
            "" => return Err("'type' must not be empty".into()),
            other => PropertyType::Named(other.to_string()),
        };

        Ok(Self {
            property_type,
            required: raw.required,
            transform: raw.transform,
        })
    }
}

/// Ordered mapping from property name to spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    properties: Vec<(String, PropertySpec)>,
}

impl PropertySet {
    /// Creates an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property, keeping declaration order.
    ///
    /// Fails if the name is already declared.
    pub fn insert(&mut self, name: impl Into<String>, spec: PropertySpec) -> SchemaResult<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(GenerationError::malformed(format!(
                "duplicate property '{}'",
                name
            )));
        }
        self.properties.push((name, spec));
        Ok(())
    }

    /// Builder form of [`PropertySet::insert`]
    pub fn with(mut self, name: impl Into<String>, spec: PropertySpec) -> SchemaResult<Self> {
        self.insert(name, spec)?;
        Ok(self)
    }

    /// Gets a property spec by name
    pub fn get(&self, name: &str) -> Option<&PropertySpec> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Iterates properties in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.properties.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'de> Deserialize<'de> for PropertySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let properties = deserializer.deserialize_map(OrderedEntries::new("property"))?;
        Ok(Self { properties })
    }
}

/// Complete schema: every declared record type, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    types: Vec<(String, PropertySet)>,
}

impl Schema {
    /// Creates an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from an in-memory JSON mapping of type name to properties.
    pub fn from_value(value: &Value) -> SchemaResult<Self> {
        Self::deserialize(value).map_err(GenerationError::from)
    }

    /// Parses a schema from JSON text.
    pub fn from_json(text: &str) -> SchemaResult<Self> {
        serde_json::from_str(text).map_err(GenerationError::from)
    }

    /// Declares a type. Fails if the name is empty or already declared.
    pub fn insert(&mut self, name: impl Into<String>, properties: PropertySet) -> SchemaResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(GenerationError::malformed("type name must not be empty"));
        }
        if self.get(&name).is_some() {
            return Err(GenerationError::malformed(format!(
                "duplicate type '{}'",
                name
            )));
        }
        self.types.push((name, properties));
        Ok(())
    }

    /// Builder form of [`Schema::insert`]
    pub fn with(mut self, name: impl Into<String>, properties: PropertySet) -> SchemaResult<Self> {
        self.insert(name, properties)?;
        Ok(self)
    }

    /// Gets a type's property set by name
    pub fn get(&self, name: &str) -> Option<&PropertySet> {
        self.types
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, set)| set)
    }

    /// Iterates declared types in order
    pub fn types(&self) -> impl Iterator<Item = (&str, &PropertySet)> {
        self.types.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let types = deserializer.deserialize_map(OrderedEntries::new("type"))?;
        if types.iter().any(|(name, _)| name.is_empty()) {
            return Err(de::Error::custom("type name must not be empty"));
        }
        Ok(Self { types })
    }
}

/// Map visitor that keeps entries in document order and rejects duplicate keys.
struct OrderedEntries<V> {
    what: &'static str,
    marker: std::marker::PhantomData<V>,
}

impl<V> OrderedEntries<V> {
    fn new(what: &'static str) -> Self {
        Self {
            what,
            marker: std::marker::PhantomData,
        }
    }
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedEntries<V> {
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of {} names to definitions", self.what)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, V)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(de::Error::custom(format!(
                    "duplicate {} '{}'",
                    self.what, key
                )));
            }
            let value = map.next_value::<V>()?;
            entries.push((key, value));
        }
        Ok(entries)
    }
}
