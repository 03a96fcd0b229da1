use std::sync::Arc;

/// An ordered list of labels defining a categorical field's integer encoding.
///
/// Cloning a table shares the underlying labels; tables never change once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    labels: Arc<[String]>,
}

impl CategoryTable {
    /// Creates a new `CategoryTable`.
    ///
    /// # Arguments
    /// * `labels` - The labels in encoding order.
    ///
    /// # Returns
    /// A new `CategoryTable` instance.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the zero-based position of `label`, if present.
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.encode(label).is_some()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// How a categorical selection turns into a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryEncoding {
    /// The label's position in the lookup table.
    Ordinal,
    /// Every label in the table maps to the same code.
    ///
    /// Reproduces the reference yes/no selectors, whose real encoding was never
    /// defined. The selection is still checked against the table.
    Constant(f64),
}

/// The value kind of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free-form text that must parse as a decimal number.
    Numeric,
    /// A single selection out of a fixed table.
    Categorical {
        table: CategoryTable,
        encoding: CategoryEncoding,
    },
}

/// One input of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub default: String,
}

impl FieldDef {
    /// Creates a numeric field.
    pub fn numeric(name: &str, label: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Numeric,
            default: default.to_string(),
        }
    }

    /// Creates a categorical field encoded by table position.
    pub fn categorical(name: &str, label: &str, table: CategoryTable, default: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Categorical {
                table,
                encoding: CategoryEncoding::Ordinal,
            },
            default: default.to_string(),
        }
    }

    /// Replaces the encoding policy of a categorical field.
    ///
    /// Numeric fields are returned unchanged.
    pub fn with_encoding(mut self, policy: CategoryEncoding) -> Self {
        if let FieldKind::Categorical { encoding, .. } = &mut self.kind {
            *encoding = policy;
        }
        self
    }

    /// Returns the lookup table of a categorical field.
    pub fn table(&self) -> Option<&CategoryTable> {
        match &self.kind {
            FieldKind::Categorical { table, .. } => Some(table),
            FieldKind::Numeric => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_returns_position() {
        let table = CategoryTable::new(["Android", "Others", "iOS", "Windows"]);

        assert_eq!(table.encode("Android"), Some(0));
        assert_eq!(table.encode("iOS"), Some(2));
        assert_eq!(table.encode("Windows"), Some(3));
        assert_eq!(table.encode("android"), None);
    }

    #[test]
    fn encode_is_idempotent() {
        let table = CategoryTable::new(["a", "b", "c"]);
        let first = table.encode("b");

        for _ in 0..3 {
            assert_eq!(table.encode("b"), first);
        }
    }

    #[test]
    fn cloned_fields_share_their_table() {
        let field = FieldDef::categorical("os", "OS", CategoryTable::new(["x", "y"]), "x");
        let copy = field.clone();

        let (a, b) = (field.table().unwrap(), copy.table().unwrap());
        assert!(std::ptr::eq(a.labels().as_ptr(), b.labels().as_ptr()));
    }

    #[test]
    fn with_encoding_ignores_numeric_fields() {
        let field = FieldDef::numeric("ram", "RAM", "3").with_encoding(CategoryEncoding::Constant(0.0));
        assert_eq!(field.kind, FieldKind::Numeric);
    }
}
