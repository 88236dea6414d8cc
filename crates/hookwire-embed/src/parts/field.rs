use super::{EmbedPart, PartKind};
use crate::format::WireFormat;
use crate::fragment::{Fragment, Node};

/// A single name/value entry in the embed's field grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }

    pub fn is_present(&self) -> bool {
        !self.name.is_empty() || !self.value.is_empty() || self.inline
    }

    /// Field object, or `None` for a blank field
    pub fn render(&self, format: WireFormat) -> Option<Node> {
        if !self.is_present() {
            return None;
        }

        let mut field = Fragment::new();
        if !self.name.is_empty() {
            field.push("name", self.name.as_str());
        }
        if !self.value.is_empty() {
            field.push("value", self.value.as_str());
        }
        if self.inline {
            field.push("inline", format.flag(true));
        }
        Some(Node::Object(field))
    }
}

/// Ordered list of embed fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(pub Vec<Field>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field) {
        self.0.push(field);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl EmbedPart for Fields {
    fn kind(&self) -> PartKind {
        PartKind::Fields
    }

    fn is_present(&self) -> bool {
        self.0.iter().any(Field::is_present)
    }

    fn render_entries(&self, format: WireFormat) -> Fragment {
        let fields: Vec<Node> = self.0.iter().filter_map(|f| f.render(format)).collect();
        Fragment::single("fields", fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_dropped() {
        let fields = Fields::from(vec![
            Field::new("n1", "v1", true),
            Field::new("n2", "v2", false),
            Field::new("", "", false),
        ]);

        assert_eq!(
            fields.render(WireFormat::Compat).to_json().unwrap(),
            r#"{"fields":[{"name":"n1","value":"v1","inline":"true"},{"name":"n2","value":"v2"}]}"#
        );
    }

    #[test]
    fn test_fields_keep_caller_order() {
        let fields: Fields = ["c", "a", "b"]
            .iter()
            .map(|name| Field::new(*name, "v", false))
            .collect();

        let fragment = fields.render(WireFormat::Typed);
        let names: Vec<_> = fragment
            .get("fields")
            .and_then(Node::as_array)
            .unwrap()
            .iter()
            .map(|f| f.as_object().unwrap().get("name").and_then(Node::as_str).unwrap())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_only_blank_fields_is_absent() {
        let fields = Fields::from(vec![Field::default(), Field::default()]);
        assert!(!fields.is_present());
        assert!(fields.render(WireFormat::Compat).is_empty());
    }

    #[test]
    fn test_inline_only_field_is_present() {
        let field = Field::new("", "", true);
        assert_eq!(
            Fragment::single("f", field.render(WireFormat::Typed).unwrap())
                .to_json()
                .unwrap(),
            r#"{"f":{"inline":true}}"#
        );
    }
}
