/// Convert a locale code from the file/URL form (`es-es`) to the form Open
/// Graph expects (`es_ES`).
///
/// Codes without a region pass through unchanged. Only two-part codes are
/// supported: anything after a second `-` is ignored.
pub fn to_open_graph_format(code: &str) -> String {
    let mut parts = code.split('-');
    let language = parts.next().unwrap_or_default();
    match parts.next() {
        Some(region) => format!("{}_{}", language, region.to_uppercase()),
        None => code.to_string(),
    }
}
