// ============================================================================
// PATHS - Normalización y troceado de ubicaciones
// ============================================================================
// Las rutas se comparan sin distinguir mayúsculas y sin barra final,
// igual que el modo no estricto de los routers SPA habituales.
// ============================================================================

/// Separa `path?query#hash` en sus tres partes
pub fn split_location(raw: &str) -> (&str, Option<&str>, Option<&str>) {
    let (before_hash, hash) = match raw.split_once('#') {
        Some((before, hash)) => (before, Some(hash)),
        None => (raw, None),
    };
    let (path, query) = match before_hash.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (before_hash, None),
    };
    (path, query, hash)
}

/// Forma canónica de un path para comparar rutas
pub fn normalize_path(raw: &str) -> String {
    let (path, _, _) = split_location(raw);
    let segments: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!("/{}", segments.join("/"))
}

/// Asegura la barra inicial de una ubicación pedida por el usuario
pub fn ensure_leading_slash(raw: &str) -> String {
    if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{}", raw)
    }
}

/// Base del historial: con barra inicial, sin barra final, vacía para la raíz
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        ensure_leading_slash(trimmed)
    }
}

/// Quita la base de un pathname del navegador. Si no empieza por la base se deja igual.
pub fn strip_base<'a>(pathname: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#') => rest,
        _ => pathname,
    }
}
