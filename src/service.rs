//! The conversion endpoint. It receives the fields of the model a user edited
//! and answers with the color in every model.
//!
//! On the wire a request is a form with two fields: `source_model`, the name
//! of the edited model, and `values`, a JSON object mapping each field of that
//! model to its value as a string.

use std::collections::BTreeMap;

use crate::{
    color::{ColorState, Model},
    models::{Cmyk, FieldValues, Fields, Hls, Rgb},
    Error,
};

/// Path the conversion endpoint is served on.
pub const CONVERT_PATH: &str = "/convert";

/// A request for the conversion endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertRequest {
    /// The model the values belong to.
    pub source_model: Model,
    /// The values of every field of the source model.
    pub values: FieldValues,
}

impl ConvertRequest {
    /// Create a new request.
    pub fn new(source_model: Model, values: FieldValues) -> Self {
        Self {
            source_model,
            values,
        }
    }

    /// Create a request carrying every field of `model` from `state`.
    pub fn from_state(model: Model, state: &ColorState) -> Self {
        Self::new(model, state.values(model))
    }

    /// The `values` form field, the field values encoded as a JSON object.
    pub fn encoded_values(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.values)?)
    }

    /// The form fields sent to the endpoint.
    pub fn form(&self) -> Result<[(&'static str, String); 2], Error> {
        Ok([
            ("source_model", self.source_model.to_string()),
            ("values", self.encoded_values()?),
        ])
    }
}

/// Handle the form fields of a request to the conversion endpoint.
pub fn convert(source_model: &str, values: &str) -> Result<ColorState, Error> {
    let result = source_model
        .parse::<Model>()
        .and_then(|model| Ok((model, parse_values(values)?)))
        .and_then(|(model, values)| convert_values(model, &values));

    if let Err(err) = &result {
        tracing::warn!(source_model, values, "conversion rejected: {err}");
    }
    result
}

/// Compute the color in every model from the field values of one model.
///
/// The values of the source model are kept as submitted, the other models are
/// derived from them.
pub fn convert_values(model: Model, values: &FieldValues) -> Result<ColorState, Error> {
    let state = match model {
        Model::Rgb => ColorState::from_rgb(Rgb::from_values(values)?),
        Model::Cmyk => {
            let cmyk = Cmyk::from_values(values)?;
            cmyk.check()?;
            ColorState::from_cmyk(cmyk)
        }
        Model::Hls => {
            let hls = Hls::from_values(values)?;
            hls.check()?;
            ColorState::from_hls(hls)
        }
    };

    tracing::debug!(%model, ?state, "converted");
    Ok(state)
}

/// Decode the `values` form field. Values may be JSON strings or numbers,
/// anything else is dropped.
pub fn parse_values(values: &str) -> Result<FieldValues, Error> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(values)?;
    Ok(raw
        .into_iter()
        .filter_map(|(field, value)| match value {
            serde_json::Value::String(s) => Some((field, s)),
            serde_json::Value::Number(n) => Some((field, n.to_string())),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn convert_from_rgb() {
        let state = convert("rgb", r#"{"r":"118","g":"84","b":"32"}"#).unwrap();
        assert_eq!(state, ColorState::initial());
    }

    #[test]
    fn convert_from_cmyk_keeps_cmyk() {
        let state = convert("cmyk", r#"{"c":"0","m":"0.5","y":"1","k":"0"}"#).unwrap();
        assert_eq!(state.cmyk, Cmyk::new(0.0, 0.5, 1.0, 0.0));
        assert_eq!(state.rgb, Rgb::new(255, 128, 0));
        assert_eq!(state.hls.h, 30);
    }

    #[test]
    fn convert_from_hls_keeps_hls() {
        let state = convert("hls", r#"{"h":"240","l":"0.5","s":"1"}"#).unwrap();
        assert_eq!(state.hls, Hls::new(240, 0.5, 1.0));
        assert_eq!(state.rgb, Rgb::new(0, 0, 255));
        assert_component_eq!(state.cmyk.c, 1.0);
    }

    #[test]
    fn numbers_are_accepted() {
        let state = convert("rgb", r#"{"r":255,"g":0,"b":0}"#).unwrap();
        assert_eq!(state.rgb, Rgb::new(255, 0, 0));
    }

    #[test]
    fn rejected_requests() {
        assert!(matches!(
            convert("hsv", r#"{}"#),
            Err(Error::UnknownModel(_))
        ));
        assert!(matches!(convert("rgb", "not json"), Err(Error::Json(_))));
        assert!(matches!(
            convert("rgb", r#"{"r":"1","g":"2"}"#),
            Err(Error::MissingField { field: "b" })
        ));
        assert!(matches!(
            convert("rgb", r#"{"r":"1","g":"2","b":"300"}"#),
            Err(Error::InvalidField { field: "b", .. })
        ));
        assert!(matches!(
            convert("cmyk", r#"{"c":"0","m":"0","y":"0","k":"2"}"#),
            Err(Error::OutOfRange { field: "k", .. })
        ));
        assert!(matches!(
            convert("hls", r#"{"h":"400","l":"0","s":"0"}"#),
            Err(Error::OutOfRange { field: "h", .. })
        ));
    }

    #[test]
    fn request_form_fields() {
        let request = ConvertRequest::from_state(Model::Rgb, &ColorState::initial());
        let [(source_key, source), (values_key, values)] = request.form().unwrap();
        assert_eq!(source_key, "source_model");
        assert_eq!(source, "rgb");
        assert_eq!(values_key, "values");
        assert_eq!(values, r#"{"b":"32","g":"84","r":"118"}"#);
        assert_eq!(parse_values(&values).unwrap(), request.values);
    }
}
