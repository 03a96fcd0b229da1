use ndarray::{Array1, ArrayView1};

use crate::{
    error::{FormError, Result},
    fields::{CategoryEncoding, FieldDef, FieldKind},
};

/// The fixed-order numeric encoding of every field of a form.
///
/// Built once per prediction request and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f64>);

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(Array1::from_vec(values))
    }
}

/// Turns a single field value into its numeric feature.
///
/// # Errors
/// Returns `FormError::InputFormat` for unparseable numeric text and
/// `FormError::Encoding` for a label outside the field's table.
pub fn encode_field(field: &FieldDef, value: &str) -> Result<f64> {
    match &field.kind {
        FieldKind::Numeric => value.trim().parse::<f64>().map_err(|_| FormError::InputFormat {
            field: field.name.clone(),
            value: value.to_string(),
        }),
        FieldKind::Categorical { table, encoding } => {
            let code = table.encode(value).ok_or_else(|| FormError::Encoding {
                field: field.name.clone(),
                label: value.to_string(),
            })?;

            Ok(match encoding {
                CategoryEncoding::Ordinal => code as f64,
                CategoryEncoding::Constant(c) => *c,
            })
        }
    }
}

/// Assembles the feature vector for `fields`, reading each value from `values`.
///
/// Fields and values are paired by position; the first failing field stops the
/// assembly.
///
/// # Errors
/// Returns `FormError::Configuration` if there is not exactly one value per
/// field, otherwise the error of the first field that cannot be encoded.
pub fn assemble<'a, I>(fields: &[FieldDef], values: I) -> Result<FeatureVector>
where
    I: IntoIterator<Item = &'a str>,
{
    let values = values.into_iter().collect::<Vec<_>>();
    if values.len() != fields.len() {
        return Err(FormError::Configuration(format!(
            "expected {} field values, got {}",
            fields.len(),
            values.len()
        )));
    }

    let features = fields
        .iter()
        .zip(values)
        .map(|(field, value)| encode_field(field, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(features.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CategoryTable;

    fn yes_no() -> CategoryTable {
        CategoryTable::new(["Yes", "No"])
    }

    #[test]
    fn numeric_values_are_trimmed_before_parsing() {
        let f = FieldDef::numeric("weight", "Weight (g)", "6.8");
        assert_eq!(encode_field(&f, " 6.8 ").unwrap(), 6.8);
    }

    #[test]
    fn unparseable_numeric_names_the_field() {
        let f = FieldDef::numeric("screenSize", "Screen Size", "5.7");
        let err = encode_field(&f, "abc").unwrap_err();

        assert!(matches!(&err, FormError::InputFormat { field, .. } if field == "screenSize"));
        assert!(err.to_string().contains("screenSize"));
    }

    #[test]
    fn constant_policy_ignores_the_selection() {
        let f = FieldDef::categorical("fourG", "4G", yes_no(), "Yes")
            .with_encoding(CategoryEncoding::Constant(0.0));

        assert_eq!(encode_field(&f, "Yes").unwrap(), 0.0);
        assert_eq!(encode_field(&f, "No").unwrap(), 0.0);
    }

    #[test]
    fn constant_policy_still_rejects_unknown_labels() {
        let f = FieldDef::categorical("fiveG", "5G", yes_no(), "No")
            .with_encoding(CategoryEncoding::Constant(0.0));

        assert!(matches!(
            encode_field(&f, "Maybe"),
            Err(FormError::Encoding { .. })
        ));
    }

    #[test]
    fn assemble_keeps_field_order() {
        let fields = [
            FieldDef::categorical("os", "OS", CategoryTable::new(["a", "b", "c"]), "a"),
            FieldDef::numeric("ram", "RAM", "3"),
            FieldDef::numeric("battery", "Battery", "4000"),
        ];

        let v = assemble(&fields, ["c", "4", "5000"]).unwrap();
        assert_eq!(v.to_vec(), vec![2.0, 4.0, 5000.0]);
    }

    #[test]
    fn assemble_rejects_missing_values() {
        let fields = [
            FieldDef::numeric("ram", "RAM", "3"),
            FieldDef::numeric("battery", "Battery", "4000"),
        ];

        assert!(matches!(
            assemble(&fields, ["3"]),
            Err(FormError::Configuration(_))
        ));
    }

    #[test]
    fn assemble_rejects_surplus_values() {
        let fields = [FieldDef::numeric("ram", "RAM", "3")];

        assert!(matches!(
            assemble(&fields, ["3", "not-a-number", "extra"]),
            Err(FormError::Configuration(_))
        ));
    }
}
