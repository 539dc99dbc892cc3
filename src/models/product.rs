use serde::{Deserialize, Serialize};

use crate::utils::i18n::t;

/// Producto tal como se guarda en el object store
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    /// Clave del store (autoIncrement); ausente hasta que IndexedDB la asigna
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    // Registros antiguos usaban "exprityDate"
    #[serde(rename = "expiryDate", alias = "exprityDate", default)]
    pub expiry_date: String,
    /// Imagen embebida como data URL (null si no hay foto)
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, expiry_date: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            expiry_date: expiry_date.into(),
            image: None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|img| !img.is_empty())
    }

    pub fn with_image(mut self, data_url: impl Into<String>) -> Self {
        self.image = Some(data_url.into());
        self
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Proyección para el bloque de datos
    pub fn summary(&self, lang: &str) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name.clone(),
            has_image: t(if self.has_image() { "si" } else { "no" }, lang),
        }
    }
}

/// Resumen mostrado en `#data-output`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProductSummary {
    pub id: Option<u32>,
    pub name: String,
    #[serde(rename = "hasImage")]
    pub has_image: String,
}

/// Productos de prueba
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Молоко", "2025-12-25"),
        Product::new("Йогурт", "2025-12-15"),
    ]
}

/// Solo se aceptan ficheros `image/*`
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_product_omits_id_and_stores_null_image() {
        let value = serde_json::to_value(Product::new("Молоко", "2025-12-25")).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Молоко", "expiryDate": "2025-12-25", "image": null })
        );
    }

    #[test]
    fn stored_product_keeps_its_id() {
        let mut product = Product::new("Йогурт", "2025-12-15").with_image("data:image/png;base64,AA==");
        product.id = Some(7);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], json!(7));
        assert_eq!(value["image"], json!("data:image/png;base64,AA=="));
    }

    #[test]
    fn legacy_misspelled_expiry_field_is_read() {
        let product: Product = serde_json::from_value(json!({
            "id": 3,
            "name": "Молоко",
            "exprityDate": "2025-12-25",
            "image": null
        }))
        .unwrap();
        assert_eq!(product.id, Some(3));
        assert_eq!(product.expiry_date, "2025-12-25");
        assert!(!product.has_image());

        // Al volver a guardar se escribe con el nombre correcto
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["expiryDate"], json!("2025-12-25"));
        assert!(value.get("exprityDate").is_none());
    }

    #[test]
    fn empty_image_counts_as_no_photo() {
        let product = Product::new("Сыр", "2026-01-01").with_image("");
        assert!(!product.has_image());
    }

    #[test]
    fn summary_uses_localized_yes_no() {
        let mut product = Product::new("Молоко", "2025-12-25").with_image("data:image/jpeg;base64,/9j/");
        product.id = Some(1);

        let summary = product.summary("RU");
        assert_eq!(summary.has_image, "Да");
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({ "id": 1, "name": "Молоко", "hasImage": "Да" })
        );

        product.clear_image();
        assert_eq!(product.summary("EN").has_image, "No");
        assert_eq!(product.summary("RU").has_image, "Нет");
    }

    #[test]
    fn samples_are_milk_then_yogurt() {
        let samples = sample_products();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "Молоко");
        assert_eq!(samples[0].expiry_date, "2025-12-25");
        assert_eq!(samples[1].name, "Йогурт");
        assert_eq!(samples[1].expiry_date, "2025-12-15");
        assert!(samples.iter().all(|p| p.id.is_none() && p.image.is_none()));
    }

    #[test]
    fn only_image_mime_types_are_accepted() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }
}
