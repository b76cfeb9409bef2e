//! Bookkeeping for requests to the conversion endpoint.
//!
//! Every request gets a generation number. Several requests can be in flight
//! while a slider is dragged and their responses may arrive in any order; only
//! the response to the latest request is applied.

use std::time::Instant;

use crate::{
    color::{ColorState, Model, Views},
    form::FieldBag,
    mirror::{self, SuppressionGuard},
    service::ConvertRequest,
    Error,
};

/// A request that was issued and has not completed yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingConversion {
    /// The generation the request was issued with.
    pub generation: u64,
    /// What to send to the conversion endpoint.
    pub request: ConvertRequest,
}

/// What happened to an edit of the form.
#[derive(Debug)]
pub enum Outcome {
    /// The form was being updated programmatically, no request was issued.
    Suppressed,
    /// The response was applied, replacing the listed views.
    Applied(Views),
    /// A newer request was issued before the response arrived, so the
    /// response was dropped.
    Stale {
        /// Generation of the dropped response.
        generation: u64,
        /// Generation of the latest request.
        latest: u64,
    },
    /// The request failed. The form was left as it was.
    Failed(Error),
}

impl Outcome {
    /// Whether the form now shows the response of the endpoint.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Issues generation numbers and decides which responses to apply.
#[derive(Clone, Debug, Default)]
pub struct ConversionClient {
    latest: u64,
}

impl ConversionClient {
    /// Create a client that has not issued any request.
    pub fn new() -> Self {
        Self::default()
    }

    /// The generation of the most recently issued request, 0 if none was.
    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// Issue a request carrying the fields of `model` as shown in `form`.
    ///
    /// Returns `None` without issuing anything while `guard` is active.
    pub fn begin(
        &mut self,
        model: Model,
        form: &impl FieldBag,
        guard: &SuppressionGuard,
        now: Instant,
    ) -> Option<PendingConversion> {
        if guard.is_active(now) {
            tracing::debug!(%model, "edit suppressed while applying a state");
            return None;
        }

        self.latest += 1;
        let pending = PendingConversion {
            generation: self.latest,
            request: ConvertRequest::new(model, mirror::read_fields(form, model)),
        };
        tracing::debug!(
            %model,
            generation = pending.generation,
            values = ?pending.request.values,
            "requesting conversion"
        );
        Some(pending)
    }

    /// Decide what to do with the result of a request. Returns the state to
    /// apply, or the outcome when there is nothing to apply.
    pub fn finish(
        &self,
        generation: u64,
        result: Result<ColorState, Error>,
    ) -> Result<ColorState, Outcome> {
        match result {
            Err(err) => {
                tracing::warn!(generation, "color conversion failed: {err}");
                Err(Outcome::Failed(err))
            }
            Ok(_) if generation != self.latest => {
                tracing::debug!(generation, latest = self.latest, "dropping stale response");
                Err(Outcome::Stale {
                    generation,
                    latest: self.latest,
                })
            }
            Ok(state) => Ok(state),
        }
    }
}
