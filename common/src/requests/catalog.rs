use std::collections::HashSet;

use serde::Deserialize;

use crate::model::category::Category;

/// Response of `GET /api/catalogo/`, reduced to what category discovery needs.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<CatalogProduct>>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogProduct {
    #[serde(default)]
    pub categoria: Option<ProductCategory>,
}

/// The catalog has shipped the category both as a bare name and as a record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductCategory {
    Named(String),
    Record {
        id: i64,
        #[serde(alias = "name")]
        nombre: String,
    },
    Unrecognized(serde_json::Value),
}

impl CatalogEnvelope {
    /// Distinct, non-empty categories in first-seen order.
    pub fn categories(self) -> Vec<Category> {
        if !self.success {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        self.data
            .unwrap_or_default()
            .into_iter()
            .filter_map(|product| match product.categoria? {
                ProductCategory::Named(name) => Some(Category::named(name)),
                ProductCategory::Record { id, nombre } => Some(Category {
                    id: Some(id),
                    name: nombre,
                }),
                ProductCategory::Unrecognized(_) => None,
            })
            .filter(|category| !category.name.is_empty())
            .filter(|category| seen.insert(category.name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_in_first_seen_order() {
        let envelope: CatalogEnvelope = serde_json::from_str(
            r#"{"success":true,"data":[
                {"categoria":"Vinos"},{"categoria":"Cervezas"},{"categoria":"Vinos"},
                {"categoria":""},{"categoria":null},{"nombre":"sin categoria"}
            ]}"#,
        )
        .unwrap();
        let names: Vec<_> = envelope.categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Vinos", "Cervezas"]);
    }

    #[test]
    fn record_categories_keep_their_id() {
        let envelope: CatalogEnvelope = serde_json::from_str(
            r#"{"success":true,"data":[
                {"categoria":{"id":3,"nombre":"Licores"}},{"categoria":42}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            envelope.categories(),
            vec![Category {
                id: Some(3),
                name: "Licores".to_string()
            }]
        );
    }

    #[test]
    fn unsuccessful_catalog_yields_nothing() {
        let envelope: CatalogEnvelope =
            serde_json::from_str(r#"{"success":false,"data":[{"categoria":"Vinos"}]}"#).unwrap();
        assert!(envelope.categories().is_empty());
    }
}
