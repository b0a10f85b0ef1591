//! Materials and their property index.

use std::borrow::Cow;
use std::collections::HashMap;

use super::{Property, Value};

/// One shading definition of a document.
///
/// Properties keep their document order. A name index is maintained alongside
/// the sequence on every insertion, so lookups never rebuild anything and a
/// shared `&Material` is safe to query from several threads.
#[derive(Clone, Debug, Default)]
pub struct Material {
    /// Material format version.
    pub version: f32,
    /// Product name, copied from the document.
    pub product_name: String,
    /// Product component name, copied from the document.
    pub product_component_name: String,
    pub asset_name: String,
    pub material_name: String,
    /// Shader family, e.g. `"Iray Uber"`.
    pub material_type: String,
    /// Raw `"Value"` text of the material entry.
    pub value: String,
    properties: Vec<Property>,
    index: HashMap<String, usize>,
}

impl Material {
    /// Create a material with no properties.
    pub fn new(material_name: impl Into<String>) -> Self {
        Self {
            material_name: material_name.into(),
            ..Default::default()
        }
    }

    /// Create a material from a property sequence.
    pub fn with_properties(material_name: impl Into<String>, properties: Vec<Property>) -> Self {
        let mut mat = Self::new(material_name);
        for prop in properties {
            mat.push_property(prop);
        }
        mat
    }

    /// Append a property. A later property with the same name shadows an
    /// earlier one in lookups; both stay in [`properties`](Self::properties).
    pub fn push_property(&mut self, property: Property) {
        self.index.insert(property.name.clone(), self.properties.len());
        self.properties.push(property);
    }

    /// All properties in document order.
    #[inline]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Number of properties, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Distinct property names.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|s| s.as_str())
    }

    /// Check if a property with exactly this name exists.
    #[inline]
    pub fn has_property(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.index.get(name).map(|&i| &self.properties[i])
    }

    /// Get a property by name, or a zero-valued stand-in with `exists == false`.
    pub fn get(&self, name: &str) -> Cow<'_, Property> {
        self.get_or(name, Value::default())
    }

    /// Get a property by name, or a stand-in carrying `default` with
    /// `exists == false`.
    pub fn get_or(&self, name: &str, default: Value) -> Cow<'_, Property> {
        match self.property(name) {
            Some(prop) => Cow::Borrowed(prop),
            None => Cow::Owned(Property::missing(name, default)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn sample() -> Material {
        Material::with_properties(
            "Torso",
            vec![
                Property::new("Diffuse Color", Value::color(Vec4::ONE), "torso_d.jpg"),
                Property::new("Glossy Roughness", Value::Double(0.4), ""),
                Property::new("Glossy Roughness", Value::Double(0.6), ""),
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let mat = sample();
        assert!(mat.has_property("Diffuse Color"));
        assert!(!mat.has_property("diffuse color"));
        assert_eq!(mat.property("Diffuse Color").map(|p| p.has_texture()), Some(true));
        assert!(mat.get("Diffuse Color").exists);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let mat = sample();
        assert_eq!(mat.len(), 3);
        assert_eq!(mat.property_names().count(), 2);
        assert_eq!(mat.get("Glossy Roughness").value, Value::Double(0.6));
    }

    #[test]
    fn test_fallbacks() {
        let mat = sample();

        let p = mat.get("Cutout Opacity");
        assert!(!p.exists);
        assert_eq!(p.value.as_double(), 0.0);

        let p = mat.get_or("Cutout Opacity", Value::Double(1.0));
        assert!(!p.exists);
        assert_eq!(p.value, Value::Double(1.0));

        // Present properties ignore the default
        let p = mat.get_or("Glossy Roughness", Value::Double(1.0));
        assert!(p.exists);
        assert_eq!(p.value, Value::Double(0.6));
    }

    #[test]
    fn test_empty_material() {
        let mat = Material::new("Empty");
        assert!(mat.is_empty());
        assert!(!mat.has_property("anything"));
        assert!(!mat.get("anything").exists);
    }
}
