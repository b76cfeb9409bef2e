//! Each color model is its own type with named fields. The field names are
//! the ones used on the wire and in control ids, so every model can be read
//! from and written to a flat mapping of field name to string value.

use std::{collections::BTreeMap, str::FromStr};

use crate::Error;

mod cmyk;
mod hls;
mod rgb;

pub use cmyk::Cmyk;
pub use hls::Hls;
pub use rgb::Rgb;

/// A flat mapping of field name to its string value.
pub type FieldValues = BTreeMap<String, String>;

/// Access to the named fields of a color model.
pub trait Fields: Sized {
    /// The names of the fields, in presentation order.
    const FIELDS: &'static [&'static str];

    /// Return the value of the named field formatted as a string.
    fn field(&self, name: &str) -> Option<String>;

    /// Build a model from field values. Every field must be present.
    fn from_values(values: &FieldValues) -> Result<Self, Error>;

    /// Return all the fields of the model as a [`FieldValues`].
    fn values(&self) -> FieldValues {
        Self::FIELDS
            .iter()
            .filter_map(|&name| self.field(name).map(|value| (name.to_string(), value)))
            .collect()
    }
}

/// Parse a single named field out of `values`.
pub fn parse_field<T: FromStr>(values: &FieldValues, field: &'static str) -> Result<T, Error> {
    let value = values.get(field).ok_or(Error::MissingField { field })?;
    value.trim().parse().map_err(|_| Error::InvalidField {
        field,
        value: value.clone(),
    })
}
