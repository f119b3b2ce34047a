//! Input validation limits for store layouts

/// Maximum length for location names (128 bytes)
pub const MAX_LOCATION_NAME_LEN: usize = 128;

/// Maximum length for item names (128 bytes)
pub const MAX_ITEM_NAME_LEN: usize = 128;

/// Maximum locations in a single layout (1000)
pub const MAX_LOCATIONS: usize = 1000;

/// Maximum items in a single layout (10000)
pub const MAX_ITEMS: usize = 10_000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    LocationNameTooLong { len: usize, max: usize },
    ItemNameTooLong { len: usize, max: usize },
    TooManyLocations { count: usize, max: usize },
    TooManyItems { count: usize, max: usize },
    EmptyLocationName,
    EmptyItemName,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationNameTooLong { len, max } => {
                write!(f, "Location name too long: {} bytes (max {})", len, max)
            }
            Self::ItemNameTooLong { len, max } => {
                write!(f, "Item name too long: {} bytes (max {})", len, max)
            }
            Self::TooManyLocations { count, max } => {
                write!(f, "Too many locations in layout: {} (max {})", count, max)
            }
            Self::TooManyItems { count, max } => {
                write!(f, "Too many items in layout: {} (max {})", count, max)
            }
            Self::EmptyLocationName => write!(f, "Location name cannot be empty"),
            Self::EmptyItemName => write!(f, "Item name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate location name
pub fn validate_location_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyLocationName);
    }
    if name.len() > MAX_LOCATION_NAME_LEN {
        return Err(ValidationError::LocationNameTooLong {
            len: name.len(),
            max: MAX_LOCATION_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate item name
pub fn validate_item_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyItemName);
    }
    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::ItemNameTooLong {
            len: name.len(),
            max: MAX_ITEM_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate layout size before building
pub fn validate_layout_size(locations: usize, items: usize) -> Result<(), ValidationError> {
    if locations > MAX_LOCATIONS {
        return Err(ValidationError::TooManyLocations {
            count: locations,
            max: MAX_LOCATIONS,
        });
    }
    if items > MAX_ITEMS {
        return Err(ValidationError::TooManyItems {
            count: items,
            max: MAX_ITEMS,
        });
    }
    Ok(())
}
