use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde_json::Value;

use super::caster::{cast, uncast};
use super::descriptor::{AdditionalFields, TypeDescriptor};
use super::error::{CastError, RegistryError};

/// Immutable table of named descriptors for one payload kind.
///
/// A registry can only be obtained through [`RegistryBuilder::build`], which
/// guarantees that every reference resolves and that no chain of references
/// loops without passing through a record or sequence.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    root: TypeDescriptor,
    definitions: BTreeMap<String, TypeDescriptor>,
}

impl SchemaRegistry {
    pub fn builder(root: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            root: root.into(),
            definitions: BTreeMap::new(),
        }
    }

    /// Name of the definition describing a whole document.
    pub fn root(&self) -> &str {
        match &self.root {
            TypeDescriptor::Reference(name) => name,
            _ => "",
        }
    }

    /// A reference to the root definition, ready to hand to [`cast`].
    pub fn root_descriptor(&self) -> &TypeDescriptor {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.definitions.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Names of the definitions a document can reach from the root.
    pub fn reachable(&self) -> BTreeSet<&str> {
        let mut seen = BTreeSet::new();
        let mut pending = vec![self.root()];
        while let Some(name) = pending.pop() {
            if !seen.insert(name) {
                continue;
            }
            if let Some(descriptor) = self.definitions.get(name) {
                collect_references(descriptor, &mut pending);
            }
        }
        seen
    }

    /// Follows references until a structural descriptor is reached.
    pub fn resolve<'a>(&'a self, descriptor: &'a TypeDescriptor) -> Result<&'a TypeDescriptor, CastError> {
        let mut current = descriptor;
        while let TypeDescriptor::Reference(name) = current {
            current = self
                .definitions
                .get(name)
                .ok_or_else(|| CastError::UnresolvedReference(name.clone()))?;
        }
        Ok(current)
    }

    /// Validates a whole document against the root definition.
    pub fn cast(&self, value: &Value) -> Result<Value, CastError> {
        cast(value, &self.root, self)
    }

    /// Validates a typed-side document against the root definition and
    /// restores its source keys.
    pub fn uncast(&self, value: &Value) -> Result<Value, CastError> {
        uncast(value, &self.root, self)
    }
}

#[derive(Debug)]
pub struct RegistryBuilder {
    root: String,
    definitions: BTreeMap<String, TypeDescriptor>,
}

impl RegistryBuilder {
    /// Adds a named definition, replacing any earlier one with that name.
    pub fn define(mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.definitions.insert(name.into(), descriptor);
        self
    }

    pub fn build(self) -> Result<SchemaRegistry, RegistryError> {
        if !self.definitions.contains_key(&self.root) {
            return Err(RegistryError::MissingRoot(self.root));
        }

        for (from, descriptor) in &self.definitions {
            let mut references = Vec::new();
            collect_references(descriptor, &mut references);
            if let Some(missing) = references.into_iter().find(|name| !self.definitions.contains_key(*name)) {
                return Err(RegistryError::UnresolvedReference {
                    from: from.clone(),
                    name: missing.to_owned(),
                });
            }
        }

        check_alias_cycles(&self.definitions)?;

        Ok(SchemaRegistry {
            root: TypeDescriptor::Reference(self.root),
            definitions: self.definitions,
        })
    }
}

fn collect_references<'a>(descriptor: &'a TypeDescriptor, out: &mut Vec<&'a str>) {
    match descriptor {
        TypeDescriptor::Reference(name) => out.push(name),
        TypeDescriptor::Sequence(of) => collect_references(of, out),
        TypeDescriptor::Union(alternatives) => {
            for alternative in alternatives {
                collect_references(alternative, out);
            }
        },
        TypeDescriptor::Record(record) => {
            for field in record.fields() {
                collect_references(field.descriptor(), out);
            }
            if let AdditionalFields::Allow(descriptor) = record.additional() {
                collect_references(descriptor, out);
            }
        },
        TypeDescriptor::Primitive(_) | TypeDescriptor::Literal(_) | TypeDescriptor::TemporalString | TypeDescriptor::Any => {},
    }
}

/// References reachable without descending into the input value.
fn collect_aliases<'a>(descriptor: &'a TypeDescriptor, out: &mut Vec<&'a str>) {
    match descriptor {
        TypeDescriptor::Reference(name) => out.push(name),
        TypeDescriptor::Union(alternatives) => {
            for alternative in alternatives {
                collect_aliases(alternative, out);
            }
        },
        _ => {},
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

fn check_alias_cycles(definitions: &BTreeMap<String, TypeDescriptor>) -> Result<(), RegistryError> {
    let edges: HashMap<&str, Vec<&str>> = definitions
        .iter()
        .map(|(name, descriptor)| {
            let mut aliases = Vec::new();
            collect_aliases(descriptor, &mut aliases);
            (name.as_str(), aliases)
        })
        .collect();

    let mut marks = HashMap::new();
    let mut stack = Vec::new();
    for name in definitions.keys() {
        visit(name, &edges, &mut marks, &mut stack)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    edges: &HashMap<&'a str, Vec<&'a str>>,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> Result<(), RegistryError> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => {
            let start = stack.iter().position(|entry| *entry == name).unwrap_or(0);
            let mut cycle: Vec<String> = stack[start..].iter().map(|entry| entry.to_string()).collect();
            cycle.push(name.to_owned());
            return Err(RegistryError::ReferenceCycle(cycle));
        },
        None => {},
    }

    marks.insert(name, Mark::InProgress);
    stack.push(name);
    for &next in edges.get(name).into_iter().flatten() {
        visit(next, edges, marks, stack)?;
    }
    stack.pop();
    marks.insert(name, Mark::Done);
    Ok(())
}
