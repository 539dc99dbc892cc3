use async_trait::async_trait;

use crate::error::Result;
use crate::models::Product;

/// Operaciones por clave sobre el almacén de productos.
///
/// En el navegador lo implementa [`IndexedDbService`](super::IndexedDbService);
/// los tests del viewmodel usan una versión en memoria.
#[async_trait(?Send)]
pub trait ProductStore {
    /// Inserta el producto y devuelve la clave generada
    async fn add(&self, product: &Product) -> Result<u32>;

    /// Todos los productos en orden de clave
    async fn get_all(&self) -> Result<Vec<Product>>;

    async fn get(&self, id: u32) -> Result<Option<Product>>;

    /// Inserta o reemplaza por clave
    async fn put(&self, product: &Product) -> Result<()>;

    /// Borrar una clave inexistente no es un error
    async fn delete(&self, id: u32) -> Result<()>;
}
