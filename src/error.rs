use thiserror::Error;

/// Errors raised while converting colors or talking to a conversion endpoint.
#[derive(Debug, Error)]
pub enum Error {
    /// The source model named in a request is not one of `rgb`, `cmyk` or
    /// `hls`.
    #[error("unknown color model `{0}`")]
    UnknownModel(String),

    /// A field of the source model is missing from the submitted values.
    #[error("missing field `{field}`")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field could not be parsed as a number of the expected kind.
    #[error("invalid value `{value}` for field `{field}`")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// The value as it was submitted.
        value: String,
    },

    /// A field was parsed but lies outside the range of its model.
    #[error("value {value} for field `{field}` is out of range")]
    OutOfRange {
        /// Name of the field.
        field: &'static str,
        /// The parsed value.
        value: String,
    },

    /// Field values or a response body are not the expected JSON.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// The conversion endpoint answered with a status other than 2xx.
    #[error("conversion endpoint answered with status {0}")]
    Status(u16),

    /// The request to the conversion endpoint could not be completed.
    #[error("request to conversion endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a configuration file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
