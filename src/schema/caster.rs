use log::trace;
use serde_json::{Map, Value};

use super::descriptor::{AdditionalFields, KeySide, RecordDescriptor, TypeDescriptor};
use super::error::{CastError, FieldPath, PathSegment};
use super::registry::SchemaRegistry;
use crate::utils::timestamp::parse_timestamp;

/// Direction of a structural transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// JSON document to typed shape: reads source keys, writes target keys.
    Cast,
    /// Typed shape back to JSON document: reads target keys, writes source keys.
    Uncast,
}

impl Direction {
    fn input_side(self) -> KeySide {
        match self {
            Direction::Cast => KeySide::Source,
            Direction::Uncast => KeySide::Target,
        }
    }
}

/// Validates `value` against `descriptor`, resolving references through
/// `registry`.
///
/// On success the returned value has the same runtime shape as the input,
/// with record keys mapped from their source to their target names.
pub fn cast(value: &Value, descriptor: &TypeDescriptor, registry: &SchemaRegistry) -> Result<Value, CastError> {
    Transformer::new(registry, Direction::Cast).transform(value, descriptor)
}

/// Inverse of [`cast`]: validates a typed-side value and maps record keys
/// back to their source names.
pub fn uncast(value: &Value, descriptor: &TypeDescriptor, registry: &SchemaRegistry) -> Result<Value, CastError> {
    Transformer::new(registry, Direction::Uncast).transform(value, descriptor)
}

struct Transformer<'r> {
    registry: &'r SchemaRegistry,
    direction: Direction,
    path: Vec<PathSegment>,
}

impl<'r> Transformer<'r> {
    fn new(registry: &'r SchemaRegistry, direction: Direction) -> Self {
        Self {
            registry,
            direction,
            path: Vec::new(),
        }
    }

    fn transform(&mut self, value: &Value, descriptor: &TypeDescriptor) -> Result<Value, CastError> {
        let label = match descriptor {
            TypeDescriptor::Reference(name) => Some(name.as_str()),
            _ => None,
        };
        let registry = self.registry;
        let resolved = registry.resolve(descriptor)?;

        match resolved {
            TypeDescriptor::Any => Ok(value.clone()),
            TypeDescriptor::Primitive(kind) => {
                if kind.matches(value) {
                    Ok(kind.canonical(value))
                } else {
                    Err(self.invalid(label, resolved, value))
                }
            },
            TypeDescriptor::Literal(cases) => match value.as_str() {
                Some(text) if cases.iter().any(|case| case == text) => Ok(value.clone()),
                _ => Err(self.invalid(label, resolved, value)),
            },
            TypeDescriptor::TemporalString => match value {
                Value::Null => Ok(Value::Null),
                Value::String(text) if parse_timestamp(text).is_some() => Ok(value.clone()),
                _ => Err(self.invalid(label, resolved, value)),
            },
            TypeDescriptor::Sequence(of) => {
                let items = value.as_array().ok_or_else(|| self.invalid(label, resolved, value))?;
                let mut output = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    output.push(self.descend(PathSegment::Index(index), |this| this.transform(item, of))?);
                }
                Ok(Value::Array(output))
            },
            TypeDescriptor::Union(alternatives) => self.transform_union(value, alternatives),
            TypeDescriptor::Record(record) => {
                let object = value.as_object().ok_or_else(|| self.invalid(label, resolved, value))?;
                self.transform_record(object, record)
            },
            TypeDescriptor::Reference(name) => Err(CastError::UnresolvedReference(name.clone())),
        }
    }

    fn transform_union(&mut self, value: &Value, alternatives: &[TypeDescriptor]) -> Result<Value, CastError> {
        for alternative in alternatives {
            match self.transform(value, alternative) {
                Ok(output) => return Ok(output),
                Err(CastError::UnresolvedReference(name)) => return Err(CastError::UnresolvedReference(name)),
                Err(e) => trace!(path:% = self.current_path(), error:% = e; "Union alternative rejected"),
            }
        }
        Err(CastError::NoMatchingAlternative {
            path: self.current_path(),
            alternatives: alternatives.iter().map(ToString::to_string).collect(),
            actual: value.clone(),
        })
    }

    fn transform_record(&mut self, object: &Map<String, Value>, record: &RecordDescriptor) -> Result<Value, CastError> {
        let input_side = self.direction.input_side();
        let output_side = input_side.opposite();
        let mut output = Map::new();

        for field in record.fields() {
            let input_key = field.key(input_side);
            match object.get(input_key) {
                Some(value) => {
                    let transformed = self.descend(PathSegment::Key(input_key.to_owned()), |this| {
                        this.transform(value, field.descriptor())
                    })?;
                    output.insert(field.key(output_side).to_owned(), transformed);
                },
                None if field.is_required() => {
                    return Err(CastError::MissingField {
                        path: self.path_with(input_key),
                        expected: field.descriptor().to_string(),
                    });
                },
                None => {},
            }
        }

        for (key, value) in object {
            if record.field(input_side, key).is_some() {
                continue;
            }
            match record.additional() {
                AdditionalFields::Reject => {
                    return Err(CastError::UnexpectedField {
                        path: self.path_with(key),
                        actual: value.clone(),
                    });
                },
                AdditionalFields::Allow(descriptor) => {
                    let transformed =
                        self.descend(PathSegment::Key(key.clone()), |this| this.transform(value, descriptor))?;
                    output.insert(key.clone(), transformed);
                },
            }
        }

        Ok(Value::Object(output))
    }

    fn descend<T>(
        &mut self,
        segment: PathSegment,
        f: impl FnOnce(&mut Self) -> Result<T, CastError>,
    ) -> Result<T, CastError> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    fn current_path(&self) -> FieldPath {
        FieldPath::from(self.path.clone())
    }

    fn path_with(&self, key: &str) -> FieldPath {
        let mut segments = self.path.clone();
        segments.push(PathSegment::Key(key.to_owned()));
        FieldPath::from(segments)
    }

    fn invalid(&self, label: Option<&str>, resolved: &TypeDescriptor, value: &Value) -> CastError {
        let expected = match (label, resolved) {
            (Some(name), TypeDescriptor::Record(_)) => name.to_owned(),
            (Some(name), _) => format!("{name} ({resolved})"),
            (None, _) => resolved.to_string(),
        };
        CastError::InvalidValue {
            path: self.current_path(),
            expected,
            actual: value.clone(),
        }
    }
}
