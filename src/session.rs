//! A [`Session`] keeps a form in sync with a conversion endpoint.
//!
//! ```rust
//! use colorsync::{ClientConfig, ColorState, LocalTransport, MemoryForm, Model, Session};
//! # futures::executor::block_on(async {
//! let config = ClientConfig { guard_window_ms: 0, ..Default::default() };
//! let mut session = Session::new(MemoryForm::new(), LocalTransport, &config);
//! session.start(&ColorState::initial());
//!
//! let outcome = session.slider_moved(Model::Rgb, "r", "255").await;
//! assert!(outcome.is_applied());
//! # });
//! ```

use std::time::Instant;

use futures::future::BoxFuture;

use crate::{
    client::{ConversionClient, Outcome, PendingConversion},
    color::{ColorState, Model, Views},
    config::ClientConfig,
    form::{Control, FieldBag, FieldId},
    mirror::{self, SuppressionGuard},
    transport::Transport,
    Error,
};

/// Owns a form and the state needed to keep it in sync.
pub struct Session<F, T> {
    form: F,
    transport: T,
    client: ConversionClient,
    guard: SuppressionGuard,
}

impl<F: FieldBag, T: Transport> Session<F, T> {
    /// Create a session. The form is empty until [`Session::start`] is called.
    pub fn new(form: F, transport: T, config: &ClientConfig) -> Self {
        Self {
            form,
            transport,
            client: ConversionClient::new(),
            guard: SuppressionGuard::new(config.guard_window()),
        }
    }

    /// Show the seed state. Called once, before any edit.
    pub fn start(&mut self, seed: &ColorState) -> Views {
        self.apply_state(seed)
    }

    /// The form being kept in sync.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Consume the session, returning its form.
    pub fn into_form(self) -> F {
        self.form
    }

    /// The guard suppressing requests after programmatic updates.
    pub fn guard(&self) -> &SuppressionGuard {
        &self.guard
    }

    /// A slider was moved: the paired input follows it and the model is sent
    /// for conversion.
    pub async fn slider_moved(&mut self, model: Model, field: &str, value: &str) -> Outcome {
        self.edit(FieldId::new(model, field, Control::Slider), value)
            .await
    }

    /// An input was changed: the paired slider follows it and the model is
    /// sent for conversion.
    pub async fn input_changed(&mut self, model: Model, field: &str, value: &str) -> Outcome {
        self.edit(FieldId::new(model, field, Control::Input), value)
            .await
    }

    /// A color was picked with the hex color picker. It is written to the RGB
    /// fields and sent as an RGB edit.
    pub async fn picker_changed(&mut self, hex: &str) -> Outcome {
        let rgb = mirror::apply_picker(&mut self.form, hex);
        tracing::debug!(hex, %rgb, "color picked");
        self.submit(Model::Rgb).await
    }

    /// Send the fields of `model` for conversion and apply the answer.
    pub async fn submit(&mut self, model: Model) -> Outcome {
        let Some(pending) = self.begin(model) else {
            return Outcome::Suppressed;
        };
        let result = self.send(&pending).await;
        self.complete(pending.generation, result)
    }

    /// Issue a request for `model` without sending it. Together with
    /// [`Session::send`] and [`Session::complete`] this allows several
    /// requests to be in flight.
    pub fn begin(&mut self, model: Model) -> Option<PendingConversion> {
        self.client
            .begin(model, &self.form, &self.guard, Instant::now())
    }

    /// Send an issued request to the conversion endpoint.
    pub fn send(&self, pending: &PendingConversion) -> BoxFuture<'static, Result<ColorState, Error>> {
        self.transport.convert(pending.request.clone())
    }

    /// Apply the result of an issued request, unless a newer request has been
    /// issued since or the request failed.
    pub fn complete(&mut self, generation: u64, result: Result<ColorState, Error>) -> Outcome {
        match self.client.finish(generation, result) {
            Ok(state) => Outcome::Applied(self.apply_state(&state)),
            Err(outcome) => outcome,
        }
    }

    async fn edit(&mut self, id: FieldId<'_>, value: &str) -> Outcome {
        self.form.set(&id.to_string(), value.to_string());
        mirror::echo(&mut self.form, id);
        self.submit(id.model).await
    }

    fn apply_state(&mut self, state: &ColorState) -> Views {
        let views = mirror::apply(&mut self.form, state);
        self.guard.arm(Instant::now());
        tracing::debug!(?views, rgb = %state.rgb, "applied color state");
        views
    }
}
