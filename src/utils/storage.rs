use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Preferencia guardada en localStorage (idioma, etc.)
pub fn load_string_pref(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn save_string_pref(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("Error guardando '{}' en localStorage", key))
}
