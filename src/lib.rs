//! colorsync keeps one color in sync across the RGB, CMYK and HLS models of a
//! form, with a conversion endpoint doing the color math.

#![deny(missing_docs)]

pub mod client;
mod color;
pub mod config;
mod convert;
mod error;
pub mod form;
mod hex;
mod math;
pub mod mirror;
pub mod models;
pub mod service;
pub mod session;
pub mod transport;

#[cfg(test)]
mod test;

pub use client::{ConversionClient, Outcome, PendingConversion};
pub use color::{ColorState, Component, Model, Views};
pub use config::ClientConfig;
pub use convert::PLACES;
pub use error::Error;
pub use form::{FieldBag, MemoryForm};
pub use mirror::SuppressionGuard;
pub use models::{Cmyk, Hls, Rgb};
pub use service::ConvertRequest;
pub use session::Session;
pub use transport::{HttpTransport, LocalTransport, Transport};
