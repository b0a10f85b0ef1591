//! Loosely-typed view over a parsed JSON tree.
//!
//! DTU documents are written by a tool that is not strict about scalar types:
//! numbers may arrive as strings and optional keys are simply left out. `Node`
//! absorbs that by coercing on read and returning a type default whenever a
//! node is absent or not coercible.

use serde_json::Value as Json;

/// A possibly-absent JSON node.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(Option<&'a Json>);

impl<'a> Node<'a> {
    /// Wrap a JSON value.
    #[inline]
    pub fn new(json: &'a Json) -> Self {
        Self(Some(json))
    }

    /// An absent node.
    #[inline]
    pub const fn missing() -> Self {
        Self(None)
    }

    /// Underlying JSON value, if present.
    #[inline]
    pub fn json(&self) -> Option<&'a Json> {
        self.0
    }

    /// Check if the node is absent or `null`.
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self.0, None | Some(Json::Null))
    }

    /// Child by key. Non-objects have no children.
    pub fn get(&self, key: &str) -> Node<'a> {
        Node(self.0.and_then(|j| j.get(key)))
    }

    /// Child nodes: array elements, or object member values, both in
    /// document order. Scalars and absent nodes yield nothing.
    pub fn members(&self) -> Box<dyn Iterator<Item = Node<'a>> + 'a> {
        match self.0 {
            Some(Json::Array(items)) => Box::new(items.iter().map(Node::new)),
            Some(Json::Object(map)) => Box::new(map.values().map(Node::new)),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Text form: strings verbatim, numbers and booleans rendered, anything
    /// else empty.
    pub fn as_text(&self) -> String {
        match self.0 {
            Some(Json::String(s)) => s.clone(),
            Some(Json::Number(n)) => n.to_string(),
            Some(Json::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Double-precision number; numeric strings are parsed.
    pub fn as_double(&self) -> f64 {
        match self.0 {
            Some(Json::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Json::String(s)) => s.trim().parse().unwrap_or(0.0),
            Some(Json::Bool(b)) => f64::from(u8::from(*b)),
            _ => 0.0,
        }
    }

    /// Single-precision number; numeric strings are parsed at single precision.
    pub fn as_float(&self) -> f32 {
        match self.0 {
            Some(Json::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => self.as_double() as f32,
        }
    }

    /// Integer; fractional values are truncated toward zero.
    pub fn as_int(&self) -> i32 {
        match self.0 {
            Some(Json::Number(n)) => match n.as_i64() {
                Some(i) => i.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                None => self.as_double() as i32,
            },
            Some(Json::String(s)) => match s.trim().parse::<i32>() {
                Ok(i) => i,
                Err(_) => self.as_double() as i32,
            },
            _ => self.as_double() as i32,
        }
    }
}

impl<'a> From<&'a Json> for Node<'a> {
    fn from(json: &'a Json) -> Self {
        Node::new(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys() {
        let j = json!({"Name": "Diffuse Color"});
        let n = Node::new(&j);
        assert!(n.get("Texture").is_missing());
        assert_eq!(n.get("Texture").as_text(), "");
        assert_eq!(n.get("Texture").get("deeper").as_double(), 0.0);
        assert_eq!(n.get("Name").as_text(), "Diffuse Color");
        assert!(Node::missing().is_missing());
    }

    #[test]
    fn test_text_coercion() {
        let j = json!({"a": 1.5, "b": true, "c": null, "d": [1], "e": 7});
        let n = Node::new(&j);
        assert_eq!(n.get("a").as_text(), "1.5");
        assert_eq!(n.get("b").as_text(), "true");
        assert_eq!(n.get("c").as_text(), "");
        assert_eq!(n.get("d").as_text(), "");
        assert_eq!(n.get("e").as_text(), "7");
    }

    #[test]
    fn test_number_coercion() {
        let j = json!({"s": "0.42", "n": 0.42, "i": "12", "f": "3.9", "neg": -2.7, "bad": "abc", "t": true});
        let n = Node::new(&j);
        assert!((n.get("s").as_double() - 0.42).abs() < 1e-12);
        assert!((n.get("n").as_double() - 0.42).abs() < 1e-12);
        assert_eq!(n.get("s").as_float(), 0.42f32);
        assert_eq!(n.get("i").as_int(), 12);
        assert_eq!(n.get("f").as_int(), 3);
        assert_eq!(n.get("neg").as_int(), -2);
        assert_eq!(n.get("bad").as_double(), 0.0);
        assert_eq!(n.get("bad").as_int(), 0);
        assert_eq!(n.get("t").as_double(), 1.0);
    }

    #[test]
    fn test_members() {
        let j = json!({"arr": [{"x": 1}, {"x": 2}], "obj": {"k1": 3, "k2": 4}, "s": "x"});
        let n = Node::new(&j);
        let xs: Vec<i32> = n.get("arr").members().map(|m| m.get("x").as_int()).collect();
        assert_eq!(xs, [1, 2]);
        assert_eq!(n.get("obj").members().count(), 2);
        assert_eq!(n.get("s").members().count(), 0);
        assert_eq!(n.get("none").members().count(), 0);
    }

    #[test]
    fn test_object_members_keep_document_order() {
        let j: Json = serde_json::from_str(r#"{"z": {"x": 1}, "m": {"x": 2}, "a": {"x": 3}}"#).unwrap();
        let xs: Vec<i32> = Node::new(&j).members().map(|m| m.get("x").as_int()).collect();
        assert_eq!(xs, [1, 2, 3]);
    }
}
