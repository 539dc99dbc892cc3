// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Idiomas soportados (código, etiqueta para el selector)
pub const LANGUAGES: &[(&str, &str)] = &[("RU", "Русский"), ("ES", "Español"), ("EN", "English")];

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            // App
            translations.insert("titulo", "Productos");
            translations.insert("agregar_ejemplos", "Agregar productos de prueba");
            translations.insert("idioma", "Idioma");
            translations.insert("datos", "Datos");
            translations.insert("lista_vacia", "No hay productos");

            // Product card
            translations.insert("caducidad", "Caducidad");
            translations.insert("sin_foto", "Sin foto");
            translations.insert("subir_foto", "Subir foto");
            translations.insert("eliminar_foto", "Eliminar foto");
            translations.insert("eliminar_producto", "Eliminar producto");

            // Diálogos
            translations.insert("confirmar_eliminar", "¿Eliminar este producto?");
            translations.insert("elegir_imagen", "¡Seleccione un archivo de imagen!");

            // Data output
            translations.insert("si", "Sí");
            translations.insert("no", "No");
        }
        "EN" => {
            translations.insert("titulo", "Products");
            translations.insert("agregar_ejemplos", "Add sample products");
            translations.insert("idioma", "Language");
            translations.insert("datos", "Data");
            translations.insert("lista_vacia", "No products yet");

            translations.insert("caducidad", "Expires");
            translations.insert("sin_foto", "No photo");
            translations.insert("subir_foto", "Upload photo");
            translations.insert("eliminar_foto", "Remove photo");
            translations.insert("eliminar_producto", "Delete product");

            translations.insert("confirmar_eliminar", "Delete this product?");
            translations.insert("elegir_imagen", "Please choose an image file!");

            translations.insert("si", "Yes");
            translations.insert("no", "No");
        }
        _ => {
            // RU (por defecto): textos de la UI original
            translations.insert("titulo", "Продукты");
            translations.insert("agregar_ejemplos", "Добавить тестовые продукты");
            translations.insert("idioma", "Язык");
            translations.insert("datos", "Данные");
            translations.insert("lista_vacia", "Нет продуктов");

            translations.insert("caducidad", "Срок");
            translations.insert("sin_foto", "Нет фото");
            translations.insert("subir_foto", "Загрузить фото");
            translations.insert("eliminar_foto", "Удалить фото");
            translations.insert("eliminar_producto", "Удалить продукт");

            translations.insert("confirmar_eliminar", "Удалить этот продукт?");
            translations.insert("elegir_imagen", "Выберите файл для изображения!");

            translations.insert("si", "Да");
            translations.insert("no", "Нет");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("RU", "ES" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

/// Normaliza un código de idioma; desconocido => RU
pub fn normalize_language(lang: &str) -> String {
    let upper = lang.trim().to_uppercase();
    if LANGUAGES.iter().any(|(code, _)| *code == upper) {
        upper
    } else {
        "RU".to_string()
    }
}
