//! Validation rules keyed by field name

use dynaform_schema::FieldDescriptor;

/// Result of applying a rule to one field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl FieldResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Whether a raw value counts as blank (empty or whitespace-only)
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Apply the content rule registered for a field name.
///
/// Field names without a rule always pass. Blank values are the caller's
/// concern; see [`validate_field`].
#[must_use]
pub fn validate_value(field_name: &str, value: &str) -> FieldResult {
    match field_name {
        "age" => validate_age(value),
        "zipCode" => validate_exact_digits(field_name, value, 6),
        "cardNumber" => validate_exact_digits(field_name, value, 16),
        "cvv" => validate_exact_digits(field_name, value, 3),
        "expiryDate" => validate_future_date(field_name, value),
        _ => FieldResult::valid(),
    }
}

/// Age must be numeric and between 1 and 120 inclusive
#[must_use]
pub fn validate_age(value: &str) -> FieldResult {
    let in_range = value
        .trim()
        .parse::<f64>()
        .is_ok_and(|age| (1.0..=120.0).contains(&age));
    if in_range {
        FieldResult::valid()
    } else {
        FieldResult::invalid("age must be between 1 and 120.")
    }
}

/// Value must be exactly `digits` ASCII digits
#[must_use]
pub fn validate_exact_digits(field_name: &str, value: &str, digits: usize) -> FieldResult {
    use regex::Regex;

    let pattern = format!(r"^[0-9]{{{digits}}}$");
    let matched = Regex::new(&pattern).is_ok_and(|re| re.is_match(value));
    if matched {
        FieldResult::valid()
    } else {
        FieldResult::invalid(format!("{field_name} must be a {digits}-digit number."))
    }
}

/// Value must parse as `YYYY-MM-DD` and lie strictly in the future.
///
/// Calendar dates compare at their UTC midnight, so today's date is already
/// in the past. Unparseable input fails with the same message.
#[must_use]
pub fn validate_future_date(field_name: &str, value: &str) -> FieldResult {
    use chrono::{NaiveDate, NaiveTime, Utc};

    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) if date.and_time(NaiveTime::MIN).and_utc() > Utc::now() => FieldResult::valid(),
        _ => FieldResult::invalid(format!("{field_name} must be a valid future date.")),
    }
}

/// Validate one field the way the form does on every change: the required
/// rule for blank values, the field's content rule otherwise.
///
/// Content rules apply to optional fields too; only the blank case differs.
#[must_use]
pub fn validate_field(field: &FieldDescriptor, value: &str) -> FieldResult {
    if is_blank(value) {
        if field.required {
            FieldResult::invalid(format!("{} is required.", field.name))
        } else {
            FieldResult::valid()
        }
    } else {
        validate_value(&field.name, value)
    }
}
