// ============================================================================
// CATALOG VIEWMODEL - LÓGICA DEL CATÁLOGO
// ============================================================================
// Sin DOM: opera sobre un ProductStore y devuelve valores.
// La app decide cuándo re-renderizar.
// ============================================================================

use std::rc::Rc;

use crate::error::Result;
use crate::models::{sample_products, Product, ProductSummary};
use crate::services::ProductStore;

pub struct CatalogViewModel<S: ProductStore> {
    store: Rc<S>,
}

impl<S: ProductStore> Clone for CatalogViewModel<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: ProductStore> CatalogViewModel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load_products(&self) -> Result<Vec<Product>> {
        let products = self.store.get_all().await?;
        log::debug!("[CATALOG] {} productos cargados", products.len());
        Ok(products)
    }

    /// Agrega los productos de prueba en orden; se detiene en el primer error
    pub async fn add_sample_products(&self) -> Result<Vec<u32>> {
        let mut ids = Vec::new();
        for product in sample_products() {
            ids.push(self.store.add(&product).await?);
        }
        log::info!("🧪 [CATALOG] Productos de prueba agregados: {:?}", ids);
        Ok(ids)
    }

    /// Guarda la foto en el producto. `Ok(false)` si el producto no existe.
    pub async fn attach_photo(&self, id: u32, data_url: String) -> Result<bool> {
        let Some(product) = self.store.get(id).await? else {
            log::warn!("⚠️ [CATALOG] Producto {} no encontrado", id);
            return Ok(false);
        };

        self.store.put(&product.with_image(data_url)).await?;
        log::info!("📷 [CATALOG] Foto guardada en producto {}", id);
        Ok(true)
    }

    /// Quita la foto (image = null). `Ok(false)` si el producto no existe.
    pub async fn remove_photo(&self, id: u32) -> Result<bool> {
        let Some(mut product) = self.store.get(id).await? else {
            log::warn!("⚠️ [CATALOG] Producto {} no encontrado", id);
            return Ok(false);
        };

        product.clear_image();
        self.store.put(&product).await?;
        log::info!("🧹 [CATALOG] Foto eliminada del producto {}", id);
        Ok(true)
    }

    pub async fn delete_product(&self, id: u32) -> Result<()> {
        self.store.delete(id).await
    }
}

/// Proyección del catálogo para el bloque de datos
pub fn summaries(products: &[Product], lang: &str) -> Vec<ProductSummary> {
    products.iter().map(|p| p.summary(lang)).collect()
}
