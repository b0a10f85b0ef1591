//! DTU document parser.

use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use super::Node;
use crate::core::{Document, DocumentState, Material, Property, Value, ValueType};
use crate::util::color::parse_html_color;
use crate::util::{Error, Result};

// Document keys
const ASSET_ID: &str = "Asset Id";
const ASSET_NAME: &str = "Asset Name";
const ASSET_TYPE: &str = "Asset Type";
const PRODUCT_NAME: &str = "Product Name";
const PRODUCT_COMPONENT_NAME: &str = "Product Component Name";
const FBX_FILE: &str = "FBX File";
const IMPORT_FOLDER: &str = "Import Folder";
const MATERIALS: &str = "Materials";

// Material keys
const VERSION: &str = "Version";
const MATERIAL_NAME: &str = "Material Name";
const MATERIAL_TYPE: &str = "Material Type";
const PROPERTIES: &str = "Properties";

// Property keys
const NAME: &str = "Name";
const DATA_TYPE: &str = "Data Type";
const TEXTURE: &str = "Texture";
const VALUE: &str = "Value";

/// Read a DTU document from disk.
///
/// A missing or empty file is logged and returned as an empty document whose
/// [`state`](Document::state) says why. Malformed JSON, a bad color encoding
/// or an unknown property data type abort the parse with an [`Error`].
pub fn parse(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();

    if !path.is_file() {
        error!(path = %path.display(), "DTU file does not exist");
        return Ok(Document::new(path, DocumentState::Missing));
    }

    let text = std::fs::read_to_string(path)?;
    parse_str(&text, path)
}

/// Parse DTU document text. `path` is recorded as the document's source.
pub fn parse_str(text: &str, path: impl Into<PathBuf>) -> Result<Document> {
    let path = path.into();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    if text.trim().is_empty() {
        error!(path = %path.display(), "DTU file is empty");
        return Ok(Document::new(path, DocumentState::Empty));
    }

    let json: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        error!(path = %path.display(), "DTU file is not valid JSON: {e}");
        e
    })?;
    let root = Node::new(&json);

    let mut doc = Document::new(path, DocumentState::Loaded);
    doc.asset_id = root.get(ASSET_ID).as_text();
    doc.asset_name = root.get(ASSET_NAME).as_text();
    doc.asset_type = root.get(ASSET_TYPE).as_text();
    doc.product_name = root.get(PRODUCT_NAME).as_text();
    doc.product_component_name = root.get(PRODUCT_COMPONENT_NAME).as_text();
    doc.fbx_file = root.get(FBX_FILE).as_text();
    doc.import_folder = root.get(IMPORT_FOLDER).as_text();

    let materials = root.get(MATERIALS);
    if !materials.is_missing() && !matches!(materials.json(), Some(serde_json::Value::Array(_))) {
        warn!(path = %doc.dtu_path.display(), "\"{}\" is not an array", MATERIALS);
    }

    for node in materials.members() {
        let mat = parse_material(node, &doc)?;
        doc.materials.push(mat);
    }

    debug!(
        path = %doc.dtu_path.display(),
        asset = %doc.asset_name,
        materials = doc.materials.len(),
        "parsed DTU document"
    );
    Ok(doc)
}

fn parse_material(node: Node<'_>, doc: &Document) -> Result<Material> {
    let mut mat = Material::new(required(node, MATERIAL_NAME, &doc.asset_name).as_text());
    mat.version = node.get(VERSION).as_float();
    mat.product_name = doc.product_name.clone();
    mat.product_component_name = doc.product_component_name.clone();
    mat.asset_name = node.get(ASSET_NAME).as_text();
    mat.material_type = node.get(MATERIAL_TYPE).as_text();
    mat.value = node.get(VALUE).as_text();

    for prop in node.get(PROPERTIES).members() {
        let prop = parse_property(prop, &mat.material_name)?;
        mat.push_property(prop);
    }

    debug!(material = %mat.material_name, properties = mat.len(), "parsed material");
    Ok(mat)
}

fn parse_property(node: Node<'_>, material: &str) -> Result<Property> {
    let name = required(node, NAME, material).as_text();
    let texture = node.get(TEXTURE).as_text();
    let value = parse_value(node, material, &name)?;
    Ok(Property::new(name, value, texture))
}

/// Decode a property's `"Value"` according to its declared `"Data Type"`.
fn parse_value(node: Node<'_>, material: &str, property: &str) -> Result<Value> {
    let data_type = required(node, DATA_TYPE, material).as_text();
    let raw = required(node, VALUE, material);

    let Some(ty) = ValueType::from_name(&data_type) else {
        error!(material, property, data_type = %data_type, "unsupported property data type");
        return Err(Error::unsupported(material, property, data_type));
    };

    let value = match ty {
        ValueType::Double => Value::Double(raw.as_double()),
        ValueType::Integer => Value::Integer(raw.as_int()),
        // Float tags carry no precision distinction for consumers
        ValueType::Float => Value::Double(raw.as_float() as f64),
        ValueType::String => Value::String(raw.as_text()),
        ValueType::Color => Value::Color(parse_color(raw, material, property)?),
        ValueType::Texture => Value::Texture(parse_color(raw, material, property)?),
    };
    Ok(value)
}

/// Child `key` of an entry that should always carry it. Absence is not an
/// error; the caller reads the default.
fn required<'a>(node: Node<'a>, key: &str, owner: &str) -> Node<'a> {
    let child = node.get(key);
    if child.is_missing() {
        debug!(owner, key, "missing required key, using default");
    }
    child
}

fn parse_color(raw: Node<'_>, material: &str, property: &str) -> Result<glam::Vec4> {
    let text = raw.as_text();
    parse_html_color(&text).ok_or_else(|| {
        error!(material, property, raw = %text, "failed to parse color hex code");
        Error::invalid_color(material, property, text)
    })
}
