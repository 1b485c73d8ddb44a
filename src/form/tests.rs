#[cfg(test)]
mod tests {
    use super::super::state::{unit_options, FormState, FormStatus};
    use super::super::submit::FormError;
    use crate::units::{Category, Unit};

    fn filled(category: Category, from: Unit, to: Unit, value: &str) -> FormState {
        let mut form = FormState::new();
        form.select_category(Some(category));
        form.select_from(Some(from));
        form.select_to(Some(to));
        form.set_value(value);
        form
    }

    #[test]
    fn test_empty_form_is_disabled() {
        assert_eq!(FormState::new().status(), FormStatus::default());
        assert!(FormState::new().unit_options().is_empty());
    }

    #[test]
    fn test_status_follows_selections() {
        let mut form = FormState::new();
        form.select_category(Some(Category::Height));
        let status = form.status();
        assert!(status.units_enabled);
        assert!(!status.value_enabled);
        assert!(!status.convert_enabled);

        form.select_from(Some(Unit::Centimeters));
        assert!(!form.status().value_enabled);

        form.select_to(Some(Unit::Meters));
        let status = form.status();
        assert!(status.value_enabled);
        assert!(!status.convert_enabled);

        form.set_value("abc");
        assert!(!form.status().convert_enabled);

        form.set_value("100");
        assert!(form.status().convert_enabled);
    }

    #[test]
    fn test_changing_category_resets_selections() {
        let mut form = filled(Category::Height, Unit::Centimeters, Unit::Meters, "100");
        form.select_category(Some(Category::Weight));

        assert_eq!(form.category, Some(Category::Weight));
        assert_eq!(form.from, None);
        assert_eq!(form.to, None);
        assert!(form.value.is_empty());

        form.select_category(None);
        assert_eq!(form.status(), FormStatus::default());
    }

    #[test]
    fn test_unit_options_for_category() {
        let options = unit_options(Category::Weight);
        let values: Vec<_> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["g", "kg", "oz", "lb"]);
        assert_eq!(options[1].label, "Kilograms (kg)");
    }

    #[test]
    fn test_submit_converts() {
        let form = filled(Category::Weight, Unit::Kilograms, Unit::Grams, "2");
        let conversion = form.submit().unwrap();
        assert_eq!(conversion.value, 2.0);
        assert_eq!(conversion.result, 2000.0);
        assert_eq!(conversion.from, Unit::Kilograms);
        assert_eq!(conversion.to, Unit::Grams);
    }

    #[test]
    fn test_submit_incomplete() {
        let mut form = FormState::new();
        form.select_category(Some(Category::Height));
        form.set_value("5");
        assert_eq!(form.submit(), Err(FormError::Incomplete));
    }

    #[test]
    fn test_submit_same_units_checked_before_value() {
        let form = filled(Category::Height, Unit::Feet, Unit::Feet, "not a number");
        let err = form.submit().unwrap_err();
        assert_eq!(err, FormError::SameUnits);
        assert_eq!(
            err.user_message(),
            "Please select different units for conversion."
        );
    }

    #[test]
    fn test_submit_invalid_number() {
        let form = filled(Category::Weight, Unit::Kilograms, Unit::Grams, "NaN");
        let err = form.submit().unwrap_err();
        assert_eq!(err, FormError::InvalidNumber);
        assert_eq!(err.user_message(), "Please enter a valid number.");
    }

    #[test]
    fn test_submit_unit_outside_category_fails() {
        let form = filled(Category::Height, Unit::Centimeters, Unit::Pounds, "5");
        let err = form.submit().unwrap_err();
        assert!(matches!(err, FormError::Failed(ref e) if e.is_unsupported()));
        assert_eq!(err.user_message(), "Conversion failed. Please try again.");
    }

    #[test]
    fn test_state_deserializes_from_json() {
        let form: FormState = serde_json::from_str(
            r#"{"category": "height", "from": "in", "to": "ft", "value": "12"}"#,
        )
        .unwrap();
        assert_eq!(form.category, Some(Category::Height));
        assert_eq!(form.from, Some(Unit::Inches));

        let empty: FormState = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FormState::default());
    }
}
