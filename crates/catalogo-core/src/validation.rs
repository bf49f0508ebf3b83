// ── Local form validation ──
//
// Every create/update/search/delete input is checked here before any
// request leaves the process. Messages are user-facing and in Spanish.

use strum::Display;
use thiserror::Error;

/// Form field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    #[strum(to_string = "identificador")]
    Id,
    #[strum(to_string = "nombre")]
    Name,
    #[strum(to_string = "descripción")]
    Description,
    #[strum(to_string = "precio")]
    Price,
    #[strum(to_string = "SKU")]
    Sku,
}

/// A local validation failure. Blocks the request entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: Field },

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: Field, value: String },

    #[error("{field} must not be negative")]
    Negative { field: Field },

    #[error("barcode payload is empty")]
    InvalidBarcode,
}

impl ValidationError {
    /// Notification title shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Required { field } => format!("El campo {field} es obligatorio"),
            Self::NotANumber { field, .. } => format!("El campo {field} debe ser un número"),
            Self::Negative { field } => format!("El campo {field} no puede ser negativo"),
            Self::InvalidBarcode => "Se ha producido un error".into(),
        }
    }

    /// Optional second line for the notification.
    pub fn user_detail(&self) -> Option<String> {
        match self {
            Self::InvalidBarcode => Some("El código de barras no es correcto".into()),
            _ => None,
        }
    }
}

/// Trim `value` and reject it when nothing is left.
pub fn validate_required(field: Field, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_owned())
}

/// Parse a user-typed price. Accepts a decimal comma.
pub fn parse_price(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: Field::Price,
        });
    }

    let price: f64 = trimmed
        .replace(',', ".")
        .parse()
        .ok()
        .filter(|p: &f64| p.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: Field::Price,
            value: value.to_owned(),
        })?;

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: Field::Price,
        });
    }
    Ok(price)
}

pub fn validate_search_id(id: &str) -> Result<String, ValidationError> {
    validate_required(Field::Id, id)
}

pub fn validate_barcode(code: &str) -> Result<String, ValidationError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidBarcode);
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(validate_required(Field::Name, "  Foo ").unwrap(), "Foo");
        assert_eq!(
            validate_required(Field::Name, "   "),
            Err(ValidationError::Required { field: Field::Name })
        );
    }

    #[test]
    fn price_parses_decimal_comma() {
        assert!((parse_price("9,99").unwrap() - 9.99).abs() < f64::EPSILON);
        assert!((parse_price(" 0 ").unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn price_rejects_garbage() {
        assert!(matches!(
            parse_price("abc"),
            Err(ValidationError::NotANumber { field: Field::Price, .. })
        ));
        assert!(matches!(
            parse_price("NaN"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert_eq!(
            parse_price("-1"),
            Err(ValidationError::Negative {
                field: Field::Price
            })
        );
    }

    #[test]
    fn barcode_messages_are_spanish() {
        let err = validate_barcode("").unwrap_err();
        assert_eq!(err.user_message(), "Se ha producido un error");
        assert_eq!(
            err.user_detail().as_deref(),
            Some("El código de barras no es correcto")
        );
    }

    #[test]
    fn required_message_names_field() {
        let err = validate_search_id("").unwrap_err();
        assert_eq!(err.user_message(), "El campo identificador es obligatorio");
    }
}
