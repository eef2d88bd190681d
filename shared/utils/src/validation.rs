use validator::{Validate, ValidationErrors};

use crate::error::{MasterDataError, MasterDataResult};

/// Runs the validator-derive rules of a model and folds any failures into a
/// single `Validation` error.
pub fn validate_model<T: Validate>(model: &T) -> MasterDataResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(MasterDataError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match (&error.message, error.code.as_ref()) {
                (Some(message), _) => message.to_string(),
                (None, "length") => format!("Length validation failed for field '{}'", field),
                (None, "range") => format!("Value out of range for field '{}'", field),
                (None, "required") => format!("Field '{}' is required", field),
                (None, code) => format!("Validation failed for field '{}': {}", field, code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name must not be empty"))]
        name: String,
        #[validate(range(min = 0.0))]
        weight: f64,
    }

    #[test]
    fn test_validate_model_passes_valid_input() {
        let sample = Sample {
            name: "Table Leg".to_string(),
            weight: 1.5,
        };
        assert!(validate_model(&sample).is_ok());
    }

    #[test]
    fn test_validate_model_surfaces_custom_message() {
        let sample = Sample {
            name: String::new(),
            weight: 1.5,
        };
        let error = validate_model(&sample).unwrap_err();
        match error {
            MasterDataError::Validation { message, .. } => {
                assert!(message.contains("Name must not be empty"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_model_reports_range_failures() {
        let sample = Sample {
            name: "Table Leg".to_string(),
            weight: -2.0,
        };
        assert!(validate_model(&sample).is_err());
    }
}
