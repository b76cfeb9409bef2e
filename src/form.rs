//! A form is addressed as a bag of string values keyed by control id. This
//! keeps the sync logic free of any particular UI toolkit.
//!
//! Control ids follow the markup of the color form: every field of a model has
//! a slider `<model>-<field>-slider` and a numeric input `<model>-<field>-input`.
//! The swatch and the native color picker have fixed ids.

use std::{collections::HashMap, fmt};

use crate::color::Model;

/// Id of the element showing the current color.
pub const SWATCH_ID: &str = "color-swatch";

/// Id of the native hex color picker.
pub const PICKER_ID: &str = "html-color-picker";

/// Get and set control values by id.
pub trait FieldBag {
    /// Return the current value of the control, if it exists.
    fn get(&self, id: &str) -> Option<String>;

    /// Set the value of the control.
    fn set(&mut self, id: &str, value: String);
}

/// The two controls bound to every field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// A range slider.
    Slider,
    /// A numeric input.
    Input,
}

impl Control {
    /// The other control bound to the same field.
    pub fn paired(&self) -> Control {
        match self {
            Control::Slider => Control::Input,
            Control::Input => Control::Slider,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            Control::Slider => "slider",
            Control::Input => "input",
        }
    }
}

/// Identifies one control of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId<'a> {
    /// The model the field belongs to.
    pub model: Model,
    /// Name of the field within its model.
    pub field: &'a str,
    /// Which of the two controls of the field.
    pub control: Control,
}

impl<'a> FieldId<'a> {
    /// Create an id for a control.
    pub fn new(model: Model, field: &'a str, control: Control) -> Self {
        Self {
            model,
            field,
            control,
        }
    }

    /// The id of the other control of the same field.
    pub fn paired(&self) -> Self {
        Self::new(self.model, self.field, self.control.paired())
    }
}

impl fmt::Display for FieldId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.model, self.field, self.control.suffix())
    }
}

/// Id of the element grouping the controls of a model.
pub fn container_id(model: Model) -> String {
    format!("model-{model}")
}

/// A form held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryForm {
    values: HashMap<String, String>,
}

impl MemoryForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value of a field control.
    pub fn field(&self, model: Model, field: &str, control: Control) -> Option<&str> {
        self.values
            .get(&FieldId::new(model, field, control).to_string())
            .map(String::as_str)
    }

    /// Iterate over every field control of the form in presentation order,
    /// together with its value.
    pub fn controls(&self) -> impl Iterator<Item = (FieldId<'static>, Option<&str>)> + '_ {
        Model::ALL.into_iter().flat_map(move |model| {
            model.fields().iter().flat_map(move |&field| {
                [Control::Slider, Control::Input].map(move |control| {
                    let id = FieldId::new(model, field, control);
                    (id, self.field(model, field, control))
                })
            })
        })
    }
}

impl FieldBag for MemoryForm {
    fn get(&self, id: &str) -> Option<String> {
        self.values.get(id).cloned()
    }

    fn set(&mut self, id: &str, value: String) {
        self.values.insert(id.to_string(), value);
    }
}
