use crate::input::is_numeric;
use crate::units::{Category, Unit};
use serde::{Deserialize, Serialize};

/// Everything the converter form currently holds.
/// Selections are `None` until the user picks something.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FormState {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub from: Option<Unit>,
    #[serde(default)]
    pub to: Option<Unit>,
    #[serde(default)]
    pub value: String,
}

/// Which controls of the form are usable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    pub units_enabled: bool,
    pub value_enabled: bool,
    pub convert_enabled: bool,
}

/// An entry of a unit picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitOption {
    pub value: &'static str,
    pub label: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the category. Unit selections and the value are cleared.
    pub fn select_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.from = None;
        self.to = None;
        self.value.clear();
    }

    pub fn select_from(&mut self, unit: Option<Unit>) {
        self.from = unit;
    }

    pub fn select_to(&mut self, unit: Option<Unit>) {
        self.to = unit;
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn status(&self) -> FormStatus {
        let units_enabled = self.category.is_some();
        let value_enabled = units_enabled && self.from.is_some() && self.to.is_some();
        let convert_enabled =
            value_enabled && !self.value.trim().is_empty() && is_numeric(&self.value);

        FormStatus {
            units_enabled,
            value_enabled,
            convert_enabled,
        }
    }

    /// Picker entries for the selected category, empty when none is selected
    pub fn unit_options(&self) -> Vec<UnitOption> {
        self.category.map(unit_options).unwrap_or_default()
    }
}

pub fn unit_options(category: Category) -> Vec<UnitOption> {
    category
        .units()
        .iter()
        .map(|unit| UnitOption {
            value: unit.symbol(),
            label: unit.label(),
        })
        .collect()
}
