//! Mirror a [`ColorState`] into a form.
//!
//! Writing a state into the controls of a form looks the same to a UI as a
//! user editing them. A [`SuppressionGuard`] is armed after every programmatic
//! update so those writes are not sent back to the conversion endpoint.

use std::time::{Duration, Instant};

use crate::{
    color::{ColorState, Model, Views},
    form::{Control, FieldBag, FieldId, PICKER_ID, SWATCH_ID},
    models::{Fields, Rgb},
};

/// How long outgoing requests are suppressed after a programmatic update.
pub const DEFAULT_GUARD_WINDOW: Duration = Duration::from_millis(50);

/// A short window during which edits of the form are not user originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuppressionGuard {
    window: Duration,
    until: Option<Instant>,
}

impl Default for SuppressionGuard {
    fn default() -> Self {
        Self::new(DEFAULT_GUARD_WINDOW)
    }
}

impl SuppressionGuard {
    /// Create a released guard that stays active for `window` once armed.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            until: None,
        }
    }

    /// The length of the window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Start suppressing at `now`.
    pub fn arm(&mut self, now: Instant) {
        self.until = Some(now + self.window);
    }

    /// Stop suppressing immediately.
    pub fn release(&mut self) {
        self.until = None;
    }

    /// Whether requests are suppressed at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        matches!(self.until, Some(until) if now < until)
    }
}

/// Write every field of every model, the swatch and the color picker.
///
/// Both controls of a field receive the same value.
pub fn apply(form: &mut impl FieldBag, state: &ColorState) -> Views {
    let views = Model::ALL
        .into_iter()
        .fold(Views::empty(), |views, model| {
            write_fields(form, model, &state.values(model));
            views | model.view()
        });

    write_swatch(form, &state.rgb);

    views | Views::SWATCH
}

/// Copy the value of the control `from` into its paired control. Returns the
/// copied value.
pub fn echo(form: &mut impl FieldBag, from: FieldId<'_>) -> Option<String> {
    let value = form.get(&from.to_string())?;
    form.set(&from.paired().to_string(), value.clone());
    Some(value)
}

/// Apply a value picked with the hex color picker to the RGB fields.
///
/// Invalid hex input is treated as black.
pub fn apply_picker(form: &mut impl FieldBag, hex: &str) -> Rgb {
    let rgb = Rgb::from_hex(hex);
    write_fields(form, Model::Rgb, &rgb.values());
    rgb
}

/// Read the fields of a model from the form. The input control is preferred,
/// the slider is used for fields without an input. Fields with neither are
/// left out.
pub fn read_fields(form: &impl FieldBag, model: Model) -> crate::models::FieldValues {
    model
        .fields()
        .iter()
        .filter_map(|&field| {
            [Control::Input, Control::Slider]
                .into_iter()
                .find_map(|control| form.get(&FieldId::new(model, field, control).to_string()))
                .map(|value| (field.to_string(), value))
        })
        .collect()
}

fn write_fields(form: &mut impl FieldBag, model: Model, values: &crate::models::FieldValues) {
    for (field, value) in values {
        for control in [Control::Slider, Control::Input] {
            form.set(
                &FieldId::new(model, field, control).to_string(),
                value.clone(),
            );
        }
    }
}

fn write_swatch(form: &mut impl FieldBag, rgb: &Rgb) {
    form.set(SWATCH_ID, rgb.to_string());
    form.set(PICKER_ID, rgb.to_hex());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;

    #[test]
    fn guard_window() {
        let start = Instant::now();
        let mut guard = SuppressionGuard::new(Duration::from_millis(50));
        assert!(!guard.is_active(start));

        guard.arm(start);
        assert!(guard.is_active(start));
        assert!(guard.is_active(start + Duration::from_millis(49)));
        assert!(!guard.is_active(start + Duration::from_millis(50)));

        guard.arm(start);
        guard.release();
        assert!(!guard.is_active(start));
    }

    #[test]
    fn default_guard_window() {
        assert_eq!(SuppressionGuard::default().window(), DEFAULT_GUARD_WINDOW);
    }

    #[test]
    fn apply_writes_every_pair() {
        let mut form = MemoryForm::new();
        let state = ColorState::initial();

        let views = apply(&mut form, &state);
        assert_eq!(views, Views::all());

        for (id, value) in form.controls() {
            let value = value.unwrap_or_else(|| panic!("{id} was not written"));
            let paired = form.field(id.model, id.field, id.control.paired());
            assert_eq!(Some(value), paired, "{id}");
        }

        assert_eq!(form.field(Model::Rgb, "g", Control::Input), Some("84"));
        assert_eq!(form.field(Model::Cmyk, "k", Control::Slider), Some("0.53725"));
        assert_eq!(form.field(Model::Hls, "h", Control::Input), Some("36"));
        assert_eq!(form.get(SWATCH_ID).as_deref(), Some("rgb(118, 84, 32)"));
        assert_eq!(form.get(PICKER_ID).as_deref(), Some("#765420"));
    }

    #[test]
    fn echo_copies_to_the_paired_control() {
        let mut form = MemoryForm::new();
        form.set("rgb-r-slider", "200".to_string());

        let id = FieldId::new(Model::Rgb, "r", Control::Slider);
        assert_eq!(echo(&mut form, id).as_deref(), Some("200"));
        assert_eq!(form.field(Model::Rgb, "r", Control::Input), Some("200"));

        let missing = FieldId::new(Model::Rgb, "g", Control::Input);
        assert_eq!(echo(&mut form, missing), None);
        assert_eq!(form.field(Model::Rgb, "g", Control::Slider), None);
    }

    #[test]
    fn picker_writes_rgb_fields() {
        let mut form = MemoryForm::new();
        assert_eq!(apply_picker(&mut form, "#1a2b3c"), Rgb::new(26, 43, 60));
        assert_eq!(form.field(Model::Rgb, "r", Control::Slider), Some("26"));
        assert_eq!(form.field(Model::Rgb, "b", Control::Input), Some("60"));

        apply_picker(&mut form, "#12");
        assert_eq!(read_fields(&form, Model::Rgb), Rgb::BLACK.values());
    }

    #[test]
    fn read_fields_prefers_inputs() {
        let mut form = MemoryForm::new();
        form.set("hls-h-slider", "10".to_string());
        form.set("hls-h-input", "20".to_string());
        form.set("hls-l-slider", "0.5".to_string());

        let values = read_fields(&form, Model::Hls);
        assert_eq!(values.len(), 2);
        assert_eq!(values["h"], "20");
        assert_eq!(values["l"], "0.5");
    }
}
