//! Material properties.

use glam::Vec4;

use super::Value;
use crate::util::color::StrengthFn;

/// A named shading parameter of a material.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Property {
    /// Property name, e.g. `"Diffuse Color"`.
    pub name: String,
    /// Typed value.
    pub value: Value,
    /// Texture path relative to the import folder; empty when untextured.
    pub texture: String,
    /// True if this property was read from a document rather than synthesized
    /// by a fallback lookup.
    pub exists: bool,
}

impl Property {
    /// Create a property as found in a document.
    pub fn new(name: impl Into<String>, value: Value, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            texture: texture.into(),
            exists: true,
        }
    }

    /// Create a stand-in for a property that is absent from its material.
    pub fn missing(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            texture: String::new(),
            exists: false,
        }
    }

    /// Texture reference, if any.
    pub fn texture(&self) -> Option<&str> {
        if self.texture.is_empty() {
            None
        } else {
            Some(&self.texture)
        }
    }

    /// Check if a texture is attached.
    #[inline]
    pub fn has_texture(&self) -> bool {
        !self.texture.is_empty()
    }

    #[inline]
    pub fn color(&self) -> Vec4 {
        self.value.as_color()
    }

    #[inline]
    pub fn color_strength(&self) -> f32 {
        self.value.color_strength()
    }

    #[inline]
    pub fn color_strength_with(&self, strength: StrengthFn) -> f32 {
        self.value.color_strength_with(strength)
    }

    #[inline]
    pub fn float(&self) -> f32 {
        self.value.as_float()
    }

    #[inline]
    pub fn boolean(&self) -> bool {
        self.value.as_bool()
    }
}
