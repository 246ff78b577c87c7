//! # Construcción de Respuestas HTTP
//!
//! Este módulo proporciona una API para construir respuestas HTTP/1.0
//! de forma programática y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato de una respuesta HTTP/1.0
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Server: MiniWeb-HTTP/1.0\r\n
//! Connection: close\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <html>...</html>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use miniweb::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_server_headers()
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Hello");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::{StatusCode, SERVER_NAME};
use std::collections::HashMap;

/// Representa una respuesta HTTP/1.0 completa
///
/// Cada respuesta se construye desde cero por petición; nunca se reutiliza
/// entre requests.
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers HTTP (Content-Type, Content-Length, etc.)
    /// Usamos HashMap para evitar duplicados
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok);
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/html");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Agrega los headers comunes a toda respuesta construida por el servidor
    ///
    /// `Server` identifica al servidor y `Connection: close` indica que la
    /// conexión se cierra tras esta respuesta (siempre, en HTTP/1.0 iterativo).
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok).with_server_headers();
    /// assert_eq!(response.headers().get("Connection").map(String::as_str), Some("close"));
    /// ```
    pub fn with_server_headers(self) -> Self {
        self.with_header("Server", SERVER_NAME)
            .with_header("Connection", "close")
    }

    /// Establece el cuerpo de la respuesta desde un string
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body("Hello World");
    /// ```
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self.headers.insert(
            "Content-Length".to_string(),
            self.body.len().to_string(),
        );
        self
    }

    /// Construye una página de error HTML completa
    ///
    /// Recibe el valor que causó el error, el código de estado, la frase
    /// corta y la explicación larga, y arma el body HTML más el bloque de
    /// headers completo (Content-Type, Content-Length, Server, Connection).
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::{Response, StatusCode};
    ///
    /// let response = Response::error_page(
    ///     StatusCode::NotFound,
    ///     "/missing.html",
    ///     "Not found",
    ///     "Server could not find this file",
    /// );
    ///
    /// let text = String::from_utf8(response.to_bytes()).unwrap();
    /// assert!(text.contains("Not found"));
    /// ```
    pub fn error_page(status: StatusCode, cause: &str, shortmsg: &str, longmsg: &str) -> Self {
        let body = format!(
            "<html>\r\n<head><title>MiniWeb Error</title></head>\r\n\
             <body bgcolor=\"ffffff\">\r\n\
             {}: {}\r\n\
             <p>{}: {}</p>\r\n\
             <hr /><em>{}</em>\r\n\
             </body>\r\n</html>\r\n",
            status.as_u16(),
            shortmsg,
            longmsg,
            cause,
            SERVER_NAME,
        );

        Self::new(status)
            .with_server_headers()
            .with_header("Content-Type", "text/html")
            .with_body(&body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo HTTP/1.0:
    /// - Status line: `HTTP/1.0 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body("Hello");
    ///
    /// let bytes = response.to_bytes();
    /// // bytes contiene: "HTTP/1.0 200 OK\r\n...\r\n\r\nHello"
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        // Formato: HTTP/1.0 200 OK\r\n
        let status_line = format!("HTTP/1.0 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers
        // Formato: Header-Name: Value\r\n
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_with_header() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("X-Custom", "value");

        assert_eq!(response.headers().get("Content-Type"), Some(&"text/plain".to_string()));
        assert_eq!(response.headers().get("X-Custom"), Some(&"value".to_string()));
    }

    #[test]
    fn test_with_server_headers() {
        let response = Response::new(StatusCode::Ok).with_server_headers();

        assert_eq!(response.headers().get("Server"), Some(&SERVER_NAME.to_string()));
        assert_eq!(response.headers().get("Connection"), Some(&"close".to_string()));
    }

    #[test]
    fn test_with_body() {
        let response = Response::new(StatusCode::Ok)
            .with_body("Hello World");

        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.headers().get("Content-Length"), Some(&"11".to_string()));
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("Test");

        let bytes = response.to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        // Verificar que contiene los elementos clave
        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.contains("Content-Type: text/plain\r\n"));
        assert!(text.contains("Content-Length: 4\r\n"));
        assert!(text.ends_with("\r\n\r\nTest"));
    }

    #[test]
    fn test_headers_only_response() {
        // Forma de una respuesta HEAD: headers con Content-Length pero sin body
        let response = Response::new(StatusCode::Ok)
            .with_server_headers()
            .with_header("Content-Length", "1024")
            .with_header("Content-Type", "image/png");

        let bytes = response.to_bytes();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("Content-Length: 1024\r\n"));
        // Debe terminar con \r\n\r\n (sin body)
        assert!(text.ends_with("\r\n\r\n"));
    }

    // ==================== Error Pages ====================

    #[test]
    fn test_error_page_status_and_headers() {
        let response = Response::error_page(
            StatusCode::Forbidden,
            "/secret.html",
            "Forbidden",
            "Server could not read this file",
        );

        assert_eq!(response.status(), StatusCode::Forbidden);
        assert_eq!(response.headers().get("Content-Type"), Some(&"text/html".to_string()));
        assert_eq!(response.headers().get("Connection"), Some(&"close".to_string()));
    }

    #[test]
    fn test_error_page_body_contents() {
        let response = Response::error_page(
            StatusCode::NotFound,
            "/missing.html",
            "Not found",
            "Server could not find this file",
        );

        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body.contains("Not found"));
        assert!(body.contains("/missing.html"));
        assert!(body.contains("404"));
    }

    #[test]
    fn test_error_page_content_length_matches_body() {
        let response = Response::error_page(
            StatusCode::NotImplemented,
            "POST",
            "Not implemented",
            "Server does not implement this method",
        );

        let declared: usize = response
            .headers()
            .get("Content-Length")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(declared, response.body().len());
    }
}
