// WebAssembly bindings for the converter web form
use crate::config::Config;
use crate::convert;
use crate::display;
use crate::form::{self, FormState};
use crate::units::{Category, Unit};
use js_sys::Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    config: Config,
}

#[wasm_bindgen]
impl ConverterWasm {
    /// Create a converter, optionally from TOML config content
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<ConverterWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };

        Ok(Self { config })
    }

    /// Category names, e.g. ["height", "weight"]
    #[wasm_bindgen]
    pub fn categories(&self) -> Array {
        Category::ALL
            .iter()
            .map(|c| JsValue::from_str(c.as_str()))
            .collect()
    }

    /// Unit symbols of a category, in display order
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<Array, JsValue> {
        let category = parse_category(category)?;
        Ok(category
            .units()
            .iter()
            .map(|u| JsValue::from_str(u.symbol()))
            .collect())
    }

    /// Picker entries for a category
    /// Returns JSON array of {"value": "cm", "label": "Centimeters (cm)"}
    #[wasm_bindgen]
    pub fn unit_options(&self, category: &str) -> Result<String, JsValue> {
        let options = form::unit_options(parse_category(category)?);
        serde_json::to_string(&options)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize options: {}", e)))
    }

    /// Convert the text of the value field
    #[wasm_bindgen]
    pub fn convert(
        &self,
        category: &str,
        from: &str,
        to: &str,
        value: &str,
    ) -> Result<f64, JsValue> {
        convert::convert_str(category, from, to, value).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Which form controls are enabled for the given field contents
    /// Empty strings count as "nothing selected"
    /// Returns JSON {"units_enabled", "value_enabled", "convert_enabled"}
    #[wasm_bindgen]
    pub fn form_status(
        &self,
        category: Option<String>,
        from: Option<String>,
        to: Option<String>,
        value: &str,
    ) -> Result<String, JsValue> {
        let state = form_from_fields(category, from, to, value)?;
        serde_json::to_string(&state.status())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize status: {}", e)))
    }

    /// Submit the form
    /// Returns JSON {"conversion": ..., "original": "100 Centimeters =", "converted": "1.00 Meters"}
    /// or rejects with the message to show in the error area
    #[wasm_bindgen]
    pub fn submit(
        &self,
        category: Option<String>,
        from: Option<String>,
        to: Option<String>,
        value: &str,
    ) -> Result<String, JsValue> {
        let state = form_from_fields(category, from, to, value)?;
        let conversion = state
            .submit()
            .map_err(|e| JsValue::from_str(e.user_message()))?;

        let prefs = &self.config.display;
        let result_obj = serde_json::json!({
            "conversion": conversion,
            "original": display::format_original(&conversion, prefs),
            "converted": display::format_converted(&conversion, prefs),
        });

        serde_json::to_string(&result_obj)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }
}

fn parse_category(category: &str) -> Result<Category, JsValue> {
    category
        .parse::<Category>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn selected(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

fn form_from_fields(
    category: Option<String>,
    from: Option<String>,
    to: Option<String>,
    value: &str,
) -> Result<FormState, JsValue> {
    let mut state = FormState::new();

    let category = selected(category).map(|c| parse_category(&c)).transpose()?;
    state.select_category(category);

    let parse_unit = |s: String| {
        s.parse::<Unit>()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    };
    state.select_from(selected(from).map(parse_unit).transpose()?);
    state.select_to(selected(to).map(parse_unit).transpose()?);
    state.set_value(value);

    Ok(state)
}
