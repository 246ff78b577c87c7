//! # Contenido Estático
//! src/content/static_files.rs
//!
//! Transferencia de archivos desde el document root con framing HTTP/1.0.
//!
//! ## Máquina de estados
//!
//! ```text
//! {validate} → {send-headers} → {send-body} → done
//! ```
//!
//! Los headers (incluyendo Content-Length) se comprometen antes de abrir el
//! archivo; un error de I/O posterior ya no puede convertirse en página de
//! error y aborta la conexión.

use crate::http::{Method, Response, StatusCode};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::os::unix::fs::PermissionsExt;

/// Tabla fija de content types por sufijo; el primer match gana
const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".gif", "image/gif"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".mp4", "video/mp4"),
];

/// Determina el content type de un archivo por el sufijo de su nombre
///
/// Sufijos desconocidos caen en `text/plain`.
///
/// # Ejemplo
/// ```
/// use miniweb::content::static_files::content_type;
///
/// assert_eq!(content_type("/site/home.html"), "text/html");
/// assert_eq!(content_type("/site/notes.txt"), "text/plain");
/// ```
pub fn content_type(path: &str) -> &'static str {
    for (suffix, mime) in CONTENT_TYPES {
        if path.ends_with(suffix) {
            return mime;
        }
    }

    "text/plain"
}

/// Sirve un archivo estático sobre el stream del cliente
///
/// Valida la ruta resuelta (existencia, archivo regular, bit de lectura del
/// dueño), envía el bloque de headers con el tamaño consultado una sola vez,
/// y para GET transfiere el contenido completo en una sola escritura lógica.
/// HEAD envía exactamente los mismos headers y ningún byte de body.
///
/// Retorna el status servido para el log del servidor. Los errores de I/O
/// posteriores al envío de headers se propagan y abortan la conexión.
pub fn serve(stream: &mut impl Write, path: &str, method: Method) -> io::Result<StatusCode> {
    // {validate}: metadatos frescos por request
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(_) => {
            let response = Response::error_page(
                StatusCode::NotFound,
                path,
                "Not found",
                "Server could not find this file",
            );
            stream.write_all(&response.to_bytes())?;
            stream.flush()?;
            return Ok(StatusCode::NotFound);
        }
    };

    if !meta.is_file() || meta.permissions().mode() & 0o400 == 0 {
        let response = Response::error_page(
            StatusCode::Forbidden,
            path,
            "Forbidden",
            "Server could not read this file",
        );
        stream.write_all(&response.to_bytes())?;
        stream.flush()?;
        return Ok(StatusCode::Forbidden);
    }

    // {send-headers}: el tamaño se consulta una sola vez, antes de leer
    let size = meta.len();
    let preamble = Response::new(StatusCode::Ok)
        .with_server_headers()
        .with_header("Content-Length", &size.to_string())
        .with_header("Content-Type", content_type(path));
    stream.write_all(&preamble.to_bytes())?;

    // {send-body}: solo para GET; HEAD termina con los headers
    if method == Method::GET {
        // Buffer transitorio dimensionado al tamaño ya consultado
        let mut contents = vec![0u8; size as usize];
        File::open(path)?.read_exact(&mut contents)?;
        stream.write_all(&contents)?;
    }

    stream.flush()?;
    Ok(StatusCode::Ok)
}
