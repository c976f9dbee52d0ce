//! Format-agnostic data model for extracted signatures.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single function reference entry.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    /// One-line summary from `<refpurpose>`
    pub description: Option<String>,
    pub params: Params,
    #[serde(rename = "return")]
    pub returns: ReturnValue,
}

/// One `<methodparam>` of a synopsis.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Parameter {
    #[serde(skip)]
    pub name: String,
    /// Type tokens; more than one means a union
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub optional: bool,
    /// `<initializer>` or `<constant>` literal
    pub default: Option<String>,
    pub variadic: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ReturnValue {
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub description: Option<String>,
}

/// Parameters in declaration order, keyed by name.
///
/// Inserting a name that is already present replaces the earlier entry in
/// place, so iteration order stays the order of first declaration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params(Vec<Parameter>);

impl Params {
    pub fn insert(&mut self, param: Parameter) {
        match self.0.iter_mut().find(|p| p.name == param.name) {
            Some(slot) => *slot = param,
            None => self.0.push(param),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for param in &self.0 {
            map.serialize_entry(&param.name, param)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, ty: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            types: vec![ty.to_string()],
            ..Parameter::default()
        }
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let mut params = Params::default();
        params.insert(param("a", "int"));
        params.insert(param("b", "int"));
        params.insert(param("a", "string"));
        assert_eq!(params.names(), vec!["a", "b"]);
        assert_eq!(params.get("a").unwrap().types, vec!["string"]);
    }

    #[test]
    fn serializes_params_as_ordered_map() {
        let mut params = Params::default();
        params.insert(param("zeta", "int"));
        params.insert(param("alpha", "bool"));
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            r#"{"zeta":{"type":["int"],"optional":false,"default":null,"variadic":false},"alpha":{"type":["bool"],"optional":false,"default":null,"variadic":false}}"#
        );
    }
}
