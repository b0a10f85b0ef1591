//! Top-level DTU document.

use std::path::PathBuf;

use super::Material;

/// How a document came to be returned by the parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentState {
    /// Parsed from document text.
    #[default]
    Loaded,
    /// The file does not exist.
    Missing,
    /// The file exists but holds no text.
    Empty,
}

/// An asset description and its materials.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub asset_id: String,
    pub asset_name: String,
    pub asset_type: String,
    pub product_name: String,
    pub product_component_name: String,
    /// FBX file exported next to the document.
    pub fbx_file: String,
    pub import_folder: String,
    /// Materials in document order.
    pub materials: Vec<Material>,
    /// Path the document was read from.
    pub dtu_path: PathBuf,
    pub use_shared_material_dir: bool,
    pub use_shared_texture_dir: bool,
    pub state: DocumentState,
}

impl Document {
    /// Create an empty document for a source path.
    pub fn new(dtu_path: impl Into<PathBuf>, state: DocumentState) -> Self {
        Self {
            dtu_path: dtu_path.into(),
            state,
            ..Default::default()
        }
    }

    /// Check if the document was parsed from actual text.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.state == DocumentState::Loaded
    }

    /// First material with the given material name.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.material_name == name)
    }

    /// Materials of a given shader family.
    pub fn materials_of_type<'a>(&'a self, ty: &'a str) -> impl Iterator<Item = &'a Material> + 'a {
        self.materials.iter().filter(move |m| m.material_type == ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_document() {
        let doc = Document::new("missing.dtu", DocumentState::Missing);
        assert!(!doc.is_loaded());
        assert!(doc.materials.is_empty());
        assert!(!doc.use_shared_material_dir);
        assert!(!doc.use_shared_texture_dir);
        assert_eq!(doc.dtu_path, PathBuf::from("missing.dtu"));
    }

    #[test]
    fn test_material_queries() {
        let mut doc = Document::new("a.dtu", DocumentState::Loaded);
        for (name, ty) in [("Skin", "Iray Uber"), ("Hair", "OmUberSurface"), ("Eyes", "Iray Uber")] {
            let mut mat = Material::new(name);
            mat.material_type = ty.to_string();
            doc.materials.push(mat);
        }

        assert!(doc.is_loaded());
        assert_eq!(doc.material("Hair").map(|m| m.material_type.as_str()), Some("OmUberSurface"));
        assert!(doc.material("Teeth").is_none());

        let iray: Vec<_> = doc.materials_of_type("Iray Uber").map(|m| m.material_name.as_str()).collect();
        assert_eq!(iray, ["Skin", "Eyes"]);
    }
}
