use crate::utils::error::{FillerError, Result};
use ipnet::Ipv4Net;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FillerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FillerError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FillerError::MissingConfig {
        field: field_name.to_string(),
    })
}

/// The narrower range must sit inside the wider one for a diff to make sense.
pub fn validate_subnet_pair(wider: &Ipv4Net, narrower: &Ipv4Net) -> Result<()> {
    if !wider.contains(narrower) {
        return Err(FillerError::InvalidRange {
            wider: wider.to_string(),
            narrower: narrower.to_string(),
        });
    }
    Ok(())
}
