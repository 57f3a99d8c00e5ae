use super::Field;
use crate::{Error, Result};

use serde::Deserialize;

/// An SObject describe result: the object's name and its fields in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SObject {
    pub name: String,
    pub fields: Vec<Field>,
}

impl SObject {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> SObject {
        SObject {
            name: name.into(),
            fields,
        }
    }

    /// Parses a describe document.
    ///
    /// Keys the translation does not use are ignored.
    pub fn from_json(src: &str) -> Result<SObject> {
        serde_json::from_str(src).map_err(|err| {
            Error::from(err).context(Error::invalid_schema("malformed SObject describe document"))
        })
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
