use crate::utils::error::{DashError, Result};
use std::collections::HashSet;
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_bind_address(field_name: &str, addr: &str) -> Result<SocketAddr> {
    if addr.trim().is_empty() {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    addr.parse::<SocketAddr>()
        .map_err(|e| DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DashError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DashError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_ordered_bounds<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    min: T,
    max: T,
) -> Result<()> {
    if min >= max {
        return Err(DashError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("min ({}) must be lower than max ({})", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("server.bind_address", "127.0.0.1:8050").is_ok());
        assert!(validate_bind_address("server.bind_address", "[::1]:8050").is_ok());
        assert!(validate_bind_address("server.bind_address", "").is_err());
        assert!(validate_bind_address("server.bind_address", "localhost").is_err());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("data.path", "launches.csv").is_ok());
        let err = validate_required("data.path", "  ").unwrap_err();
        assert!(matches!(err, DashError::MissingConfigError { ref field } if field == "data.path"));
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("data.path", "spacex_launch_dash.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("data.path", "LAUNCHES.CSV", &["csv"]).is_ok());
        assert!(validate_file_extension("data.path", "launches.json", &["csv"]).is_err());
        assert!(validate_file_extension("data.path", "launches", &["csv"]).is_err());
    }

    #[test]
    fn test_validate_range_and_bounds() {
        assert!(validate_range("slider.marks", 2500.0, 0.0, 10000.0).is_ok());
        assert!(validate_range("slider.marks", 12000.0, 0.0, 10000.0).is_err());
        assert!(validate_ordered_bounds("slider", 0.0, 10000.0).is_ok());
        assert!(validate_ordered_bounds("slider", 5.0, 5.0).is_err());
    }
}
