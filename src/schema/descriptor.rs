use std::collections::HashMap;
use std::fmt::{self, Display};
use std::sync::OnceLock;

use serde_json::Value;

/// JSON value kinds a [`TypeDescriptor::Primitive`] can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Number,
    /// A number without a fractional part, including notations such as `1.0`
    /// and `1e3`.
    Integer,
    Boolean,
    Null,
}

impl PrimitiveKind {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            PrimitiveKind::String => value.is_string(),
            PrimitiveKind::Number => value.is_number(),
            PrimitiveKind::Integer => {
                value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0)
            },
            PrimitiveKind::Boolean => value.is_boolean(),
            PrimitiveKind::Null => value.is_null(),
        }
    }

    /// The matched value as a cast hands it on. Integral floats that fit an
    /// `i64` become plain integers; everything else is unchanged.
    pub fn canonical(self, value: &Value) -> Value {
        match (self, value) {
            (PrimitiveKind::Integer, Value::Number(n)) if n.is_f64() => match n.as_f64() {
                Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Value::from(f as i64),
                _ => value.clone(),
            },
            _ => value.clone(),
        }
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::String => write!(f, "string"),
            PrimitiveKind::Number => write!(f, "number"),
            PrimitiveKind::Integer => write!(f, "integer"),
            PrimitiveKind::Boolean => write!(f, "boolean"),
            PrimitiveKind::Null => write!(f, "null"),
        }
    }
}

/// Declarative description of an expected JSON shape.
///
/// Descriptors are plain data. They are interpreted by
/// [`cast`](super::cast) and [`uncast`](super::uncast), which match on every
/// variant, so adding a variant forces the interpreter to handle it.
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    /// A string equal to one of the listed cases.
    Literal(Vec<String>),
    /// An array whose every element matches the inner descriptor.
    Sequence(Box<TypeDescriptor>),
    /// Alternatives tried in order; the first that matches wins.
    Union(Vec<TypeDescriptor>),
    Record(RecordDescriptor),
    /// A string holding a parseable timestamp, or `null`.
    TemporalString,
    /// A named definition looked up in the registry at validation time.
    Reference(String),
    Any,
}

impl TypeDescriptor {
    pub fn string() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::String)
    }

    pub fn number() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Number)
    }

    pub fn integer() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Integer)
    }

    pub fn boolean() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Boolean)
    }

    pub fn null() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::Null)
    }

    pub fn any() -> Self {
        TypeDescriptor::Any
    }

    pub fn temporal() -> Self {
        TypeDescriptor::TemporalString
    }

    pub fn literal<I, S>(cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypeDescriptor::Literal(cases.into_iter().map(Into::into).collect())
    }

    pub fn sequence(of: TypeDescriptor) -> Self {
        TypeDescriptor::Sequence(Box::new(of))
    }

    pub fn union<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        TypeDescriptor::Union(alternatives.into_iter().collect())
    }

    /// `descriptor | null`, with the non-null reading tried first.
    pub fn nullable(descriptor: TypeDescriptor) -> Self {
        TypeDescriptor::union([descriptor, TypeDescriptor::null()])
    }

    pub fn reference(name: impl Into<String>) -> Self {
        TypeDescriptor::Reference(name.into())
    }

    /// An object with no declared fields whose values all match `values`.
    pub fn map(values: TypeDescriptor) -> Self {
        RecordBuilder::new().additional(values).build()
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => write!(f, "{kind}"),
            TypeDescriptor::Literal(cases) => {
                write!(f, "one of [")?;
                for (i, case) in cases.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{case:?}")?;
                }
                write!(f, "]")
            },
            TypeDescriptor::Sequence(of) => match of.as_ref() {
                TypeDescriptor::Union(_) => write!(f, "array of ({of})"),
                _ => write!(f, "array of {of}"),
            },
            TypeDescriptor::Union(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{alternative}")?;
                }
                Ok(())
            },
            TypeDescriptor::Record(_) => write!(f, "object"),
            TypeDescriptor::TemporalString => write!(f, "date-time string"),
            TypeDescriptor::Reference(name) => write!(f, "{name}"),
            TypeDescriptor::Any => write!(f, "any"),
        }
    }
}

/// Which of a field's two keys to read.
///
/// The source key is the name used in the JSON document, the target key the
/// name used on the typed side. [`cast`](super::cast) reads source keys and
/// writes target keys, [`uncast`](super::uncast) the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySide {
    Source,
    Target,
}

impl KeySide {
    pub fn opposite(self) -> Self {
        match self {
            KeySide::Source => KeySide::Target,
            KeySide::Target => KeySide::Source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    source: String,
    target: String,
    descriptor: TypeDescriptor,
    required: bool,
}

impl FieldDescriptor {
    pub fn required(key: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        let key = key.into();
        Self {
            target: key.clone(),
            source: key,
            descriptor,
            required: true,
        }
    }

    pub fn optional(key: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            required: false,
            ..Self::required(key, descriptor)
        }
    }

    /// Gives the field a different key on the typed side.
    pub fn renamed(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn key(&self, side: KeySide) -> &str {
        match side {
            KeySide::Source => &self.source,
            KeySide::Target => &self.target,
        }
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Policy for object keys a record does not declare.
#[derive(Debug, Clone)]
pub enum AdditionalFields {
    Reject,
    /// Keep the key, validating its value against the descriptor.
    Allow(Box<TypeDescriptor>),
}

/// A structural record: declared fields plus a policy for everything else.
///
/// Key lookups go through per-side indexes that are built on first use and
/// then reused. Building an index is pure, so two threads racing on first
/// use produce identical tables and either may win.
#[derive(Debug, Clone)]
pub struct RecordDescriptor {
    fields: Vec<FieldDescriptor>,
    additional: AdditionalFields,
    source_index: OnceLock<HashMap<String, usize>>,
    target_index: OnceLock<HashMap<String, usize>>,
}

impl RecordDescriptor {
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn additional(&self) -> &AdditionalFields {
        &self.additional
    }

    /// Looks up a declared field by its key on the given side.
    pub fn field(&self, side: KeySide, key: &str) -> Option<&FieldDescriptor> {
        self.index(side).get(key).map(|&i| &self.fields[i])
    }

    fn index(&self, side: KeySide) -> &HashMap<String, usize> {
        let cell = match side {
            KeySide::Source => &self.source_index,
            KeySide::Target => &self.target_index,
        };
        cell.get_or_init(|| {
            self.fields
                .iter()
                .enumerate()
                .map(|(i, field)| (field.key(side).to_owned(), i))
                .collect()
        })
    }
}

/// Builder for [`TypeDescriptor::Record`].
///
/// Records reject undeclared keys unless [`additional`](Self::additional)
/// says otherwise.
#[derive(Debug)]
pub struct RecordBuilder {
    fields: Vec<FieldDescriptor>,
    additional: AdditionalFields,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            additional: AdditionalFields::Reject,
        }
    }

    pub fn required(self, key: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.field(FieldDescriptor::required(key, descriptor))
    }

    pub fn optional(self, key: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.field(FieldDescriptor::optional(key, descriptor))
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn additional(mut self, descriptor: TypeDescriptor) -> Self {
        self.additional = AdditionalFields::Allow(Box::new(descriptor));
        self
    }

    pub fn reject_additional(mut self) -> Self {
        self.additional = AdditionalFields::Reject;
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::Record(RecordDescriptor {
            fields: self.fields,
            additional: self.additional,
            source_index: OnceLock::new(),
            target_index: OnceLock::new(),
        })
    }
}
