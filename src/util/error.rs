//! Error types for DTU document reading.

use thiserror::Error;

/// Fatal conditions that abort a document parse.
///
/// Missing or empty input files are not errors; they are reported through
/// [`DocumentState`](crate::core::DocumentState) on the returned document.
#[derive(Error, Debug)]
pub enum Error {
    /// A `Color` or `Texture` property carries a value that is not a color
    #[error("Invalid color encoding in material '{material}', property '{property}': {raw:?}")]
    InvalidColor {
        material: String,
        property: String,
        raw: String,
    },

    /// A property declares a `Data Type` outside the supported set
    #[error("Unsupported property data type {data_type:?} in material '{material}', property '{property}'")]
    UnsupportedDataType {
        material: String,
        property: String,
        data_type: String,
    },

    /// Document text is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid color error.
    pub fn invalid_color(
        material: impl Into<String>,
        property: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self::InvalidColor {
            material: material.into(),
            property: property.into(),
            raw: raw.into(),
        }
    }

    /// Create an unsupported data type error.
    pub fn unsupported(
        material: impl Into<String>,
        property: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self::UnsupportedDataType {
            material: material.into(),
            property: property.into(),
            data_type: data_type.into(),
        }
    }
}

/// Result type alias for DTU operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::invalid_color("Torso", "Diffuse Color", "not-a-color");
        let msg = e.to_string();
        assert!(msg.contains("Torso"));
        assert!(msg.contains("Diffuse Color"));
        assert!(msg.contains("not-a-color"));

        let e = Error::unsupported("Face", "Glossiness", "Bogus");
        assert!(e.to_string().contains("Bogus"));
        assert!(e.to_string().contains("Glossiness"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
