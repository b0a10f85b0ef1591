//! Typed property values.

use glam::Vec4;
use std::fmt;

use crate::util::color::{self, Rgba};

/// Declared data type of a property value.
///
/// Mirrors the `"Data Type"` tag carried by every property entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
    Double,
    Color,
    String,
    Texture,
}

impl ValueType {
    /// All supported types.
    pub const ALL: [ValueType; 6] = [
        Self::Integer,
        Self::Float,
        Self::Double,
        Self::Color,
        Self::String,
        Self::Texture,
    ];

    /// Tag used for this type in documents.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Color => "Color",
            Self::String => "String",
            Self::Texture => "Texture",
        }
    }

    /// Parse a document `"Data Type"` tag. Tags are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A property value. Exactly one representation is held.
///
/// Accessors never fail: reading a representation other than the active one
/// yields a derived value (numbers broadcast to grayscale colors, non-numeric
/// variants read as zero). This keeps call sites that pull well-known
/// parameters by name simple, whatever the document declared.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i32),
    Float(f32),
    Double(f64),
    /// RGBA color, channels in `0..=1`.
    Color(Vec4),
    String(String),
    /// Swatch color stored alongside a texture reference.
    Texture(Vec4),
}

impl Default for Value {
    fn default() -> Self {
        Value::Integer(0)
    }
}

impl Value {
    /// Create a color value.
    pub fn color(c: Vec4) -> Self {
        Value::Color(c)
    }

    /// Create a texture swatch value.
    pub fn texture(c: Vec4) -> Self {
        Value::Texture(c)
    }

    /// The variant's data type.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Double(_) => ValueType::Double,
            Value::Color(_) => ValueType::Color,
            Value::String(_) => ValueType::String,
            Value::Texture(_) => ValueType::Texture,
        }
    }

    /// Numeric value in double precision. Colors and strings read as 0.
    pub fn as_double(&self) -> f64 {
        match self {
            Value::Integer(v) => *v as f64,
            Value::Float(v) => *v as f64,
            Value::Double(v) => *v,
            Value::Color(_) | Value::String(_) | Value::Texture(_) => 0.0,
        }
    }

    /// Numeric value in single precision.
    #[inline]
    pub fn as_float(&self) -> f32 {
        self.as_double() as f32
    }

    /// Numeric value truncated toward zero.
    pub fn as_int(&self) -> i32 {
        match self {
            Value::Integer(v) => *v,
            other => other.as_double() as i32,
        }
    }

    /// `true` when the numeric value exceeds 0.5.
    #[inline]
    pub fn as_bool(&self) -> bool {
        self.as_double() > 0.5
    }

    /// Color representation.
    ///
    /// Numeric variants broadcast to an opaque gray; strings are transparent black.
    pub fn as_color(&self) -> Vec4 {
        match self {
            Value::Color(c) | Value::Texture(c) => *c,
            Value::String(_) => Vec4::ZERO,
            numeric => {
                let v = numeric.as_float();
                Vec4::new(v, v, v, 1.0)
            }
        }
    }

    /// Text of a string value; empty for everything else.
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    /// Intensity of the color representation.
    #[inline]
    pub fn color_strength(&self) -> f32 {
        self.color_strength_with(color::strength)
    }

    /// Intensity of the color representation using a custom extractor.
    #[inline]
    pub fn color_strength_with(&self, strength: color::StrengthFn) -> f32 {
        strength(self.as_color())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "int:{}", v),
            Value::Float(v) => write!(f, "float:{}", v),
            Value::Double(v) => write!(f, "double:{}", v),
            Value::Color(c) => write!(f, "color:{}", Rgba(*c)),
            Value::String(s) => f.write_str(s),
            Value::Texture(c) => write!(f, "texture:{}", Rgba(*c)),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags() {
        for ty in ValueType::ALL {
            assert_eq!(ValueType::from_name(ty.name()), Some(ty));
        }
        assert_eq!(ValueType::from_name("double"), None);
        assert_eq!(ValueType::from_name("Bogus"), None);
        assert_eq!(Value::from(1.5f64).value_type(), ValueType::Double);
    }

    #[test]
    fn test_numeric_accessors() {
        let v = Value::Double(0.42);
        assert!((v.as_double() - 0.42).abs() < 1e-12);
        assert!(!v.as_bool());
        assert_eq!(v.as_int(), 0);

        let v = Value::Integer(3);
        assert_eq!(v.as_double(), 3.0);
        assert!(v.as_bool());

        let v = Value::Float(2.75);
        assert_eq!(v.as_int(), 2);
        assert_eq!(Value::Double(-1.9).as_int(), -1);

        assert_eq!(Value::String("1".into()).as_double(), 0.0);
        assert_eq!(Value::Color(Vec4::ONE).as_double(), 0.0);
    }

    #[test]
    fn test_bool_threshold() {
        assert!(!Value::Double(0.5).as_bool());
        assert!(Value::Double(0.51).as_bool());
        assert!(Value::Integer(1).as_bool());
        assert!(!Value::Integer(0).as_bool());
    }

    #[test]
    fn test_color_broadcast() {
        assert_eq!(Value::Double(0.25).as_color(), Vec4::new(0.25, 0.25, 0.25, 1.0));
        assert_eq!(Value::Integer(1).as_color(), Vec4::ONE);

        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert_eq!(Value::color(red).as_color(), red);
        assert_eq!(Value::texture(red).as_color(), red);
        assert_eq!(Value::from("x").as_color(), Vec4::ZERO);
    }

    #[test]
    fn test_color_strength() {
        let v = Value::color(Vec4::new(0.0, 0.5, 1.0, 1.0));
        assert!((v.color_strength() - 0.5).abs() < 1e-6);
        assert_eq!(v.color_strength_with(|c| c.max_element()), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Double(0.5).to_string(), "double:0.5");
        assert_eq!(Value::Integer(7).to_string(), "int:7");
        assert_eq!(Value::Float(1.25).to_string(), "float:1.25");
        assert_eq!(Value::from("Hair").to_string(), "Hair");
        assert_eq!(
            Value::color(Vec4::new(1.0, 0.0, 0.0, 1.0)).to_string(),
            "color:RGBA(1.000, 0.000, 0.000, 1.000)"
        );
        assert_eq!(
            Value::texture(Vec4::ONE).to_string(),
            "texture:RGBA(1.000, 1.000, 1.000, 1.000)"
        );
    }

    #[test]
    fn test_default_is_zero() {
        let v = Value::default();
        assert_eq!(v.as_double(), 0.0);
        assert_eq!(v.as_int(), 0);
        assert!(!v.as_bool());
    }
}
