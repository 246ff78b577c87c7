//! # Parsing de Requests HTTP/1.0
//! src/http/request.rs
//!
//! Este módulo implementa la lectura de la request line HTTP/1.0.
//!
//! ## Formato de un Request HTTP/1.0
//!
//! ```text
//! GET /path?param1=value1&param2=value2 HTTP/1.0\r\n
//! Host: localhost:8080\r\n
//! User-Agent: curl/7.68.0\r\n
//! \r\n
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /target HTTP/1.0` — única línea con semántica
//! 2. **Headers**: Pares `Name: Value`, leídos y descartados (solo se imprimen
//!    como diagnóstico, no se interpretan)
//! 3. **Empty Line**: `\r\n` que marca el fin de los headers
//!
//! El target se guarda crudo; la clasificación estático/dinámico y la
//! separación del query string ocurren en el módulo `router`.

use std::io::{self, BufRead};

/// Métodos HTTP soportados
///
/// Cualquier otro método produce [`ParseError::UnsupportedMethod`] y el
/// servidor responde 501 sin leer nada más de esa conexión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso (headers + body)
    GET,

    /// HEAD - Como GET pero solo retorna headers
    HEAD,
}

impl Method {
    /// Parsea un método HTTP desde un string (case-insensitive)
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es soportado; el error conserva la
    /// escritura original para reportarla en la página de error.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }
}

/// Representa un request HTTP/1.0 parseado
///
/// Se construye una vez por conexión y es de solo lectura después.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET o HEAD)
    method: Method,

    /// Target crudo de la petición (ej: "/cgi-bin/adder?fnum=1&snum=2")
    target: String,

    /// Versión HTTP tal como llegó (no se valida)
    version: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug)]
pub enum ParseError {
    /// El peer cerró la conexión sin enviar nada (o envió solo una línea vacía)
    EmptyRequest,

    /// La request line no tiene exactamente 3 campos
    InvalidRequestLine(String),

    /// Método HTTP no soportado (conserva la escritura original)
    UnsupportedMethod(String),

    /// Error de I/O leyendo del stream
    Io(io::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine(l) => write!(f, "Invalid request line: {}", l),
            ParseError::UnsupportedMethod(m) => write!(f, "Unsupported HTTP method: {}", m),
            ParseError::Io(e) => write!(f, "I/O error reading request: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Lee un request HTTP/1.0 desde un stream bufereado
    ///
    /// Lee una línea terminada en CRLF y la separa por espacios en
    /// método/target/versión. Luego lee y descarta las líneas de headers
    /// hasta encontrar la línea vacía; cada header se imprime solo como
    /// diagnóstico.
    ///
    /// Si el método no es GET ni HEAD se retorna el error de inmediato,
    /// sin leer los headers de esa conexión.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use std::io::Cursor;
    /// use miniweb::http::{Method, Request};
    ///
    /// let raw = b"GET /home.html HTTP/1.0\r\nHost: localhost\r\n\r\n".to_vec();
    /// let request = Request::read_from(&mut Cursor::new(raw)).unwrap();
    ///
    /// assert_eq!(request.method(), Method::GET);
    /// assert_eq!(request.target(), "/home.html");
    /// assert_eq!(request.version(), "HTTP/1.0");
    /// ```
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, ParseError> {
        // 1. Leer la request line (primera línea)
        let mut line = String::new();
        let bytes_read = reader.read_line(&mut line).map_err(ParseError::Io)?;
        if bytes_read == 0 || line.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // 2. Separar por espacios: debe tener exactamente 3 partes
        let line = line.trim_end();
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidRequestLine(line.to_string()));
        }

        // 3. Parsear método; si no es GET/HEAD terminamos aquí mismo
        let method = Method::from_str(parts[0])?;
        let target = parts[1].to_string();
        let version = parts[2].to_string();

        // 4. Leer y descartar headers hasta la línea vacía
        Self::discard_headers(reader)?;

        Ok(Request {
            method,
            target,
            version,
        })
    }

    /// Lee las líneas de headers hasta la línea vacía (o EOF)
    ///
    /// Los headers no se interpretan; solo se imprimen como diagnóstico.
    fn discard_headers(reader: &mut impl BufRead) -> Result<(), ParseError> {
        loop {
            let mut header = String::new();
            let bytes_read = reader.read_line(&mut header).map_err(ParseError::Io)?;
            if bytes_read == 0 {
                // EOF antes de la línea vacía; no hay más headers
                break;
            }

            let header = header.trim_end();
            if header.is_empty() {
                break;
            }

            println!("   📋 {}", header);
        }

        Ok(())
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el target crudo del request
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene la versión HTTP tal como llegó
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(raw: &[u8]) -> Result<Request, ParseError> {
        Request::read_from(&mut Cursor::new(raw.to_vec()))
    }

    #[test]
    fn test_parse_simple_get() {
        let request = read(b"GET / HTTP/1.0\r\n\r\n").unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.target(), "/");
        assert_eq!(request.version(), "HTTP/1.0");
    }

    #[test]
    fn test_parse_head() {
        let request = read(b"HEAD /home.html HTTP/1.0\r\n\r\n").unwrap();

        assert_eq!(request.method(), Method::HEAD);
        assert_eq!(request.target(), "/home.html");
    }

    #[test]
    fn test_parse_method_case_insensitive() {
        let request = read(b"get / HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.method(), Method::GET);

        let request = read(b"Head / HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.method(), Method::HEAD);
    }

    #[test]
    fn test_parse_keeps_raw_target() {
        // El query string no se separa ni se decodifica aquí
        let request = read(b"GET /cgi-bin/adder?fnum=1&snum=2 HTTP/1.0\r\n\r\n").unwrap();
        assert_eq!(request.target(), "/cgi-bin/adder?fnum=1&snum=2");
    }

    #[test]
    fn test_parse_keeps_raw_version() {
        // La versión no se valida
        let request = read(b"GET / HTTP/9.9\r\n\r\n").unwrap();
        assert_eq!(request.version(), "HTTP/9.9");
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET / HTTP/1.0\r\nHost: localhost:8080\r\nUser-Agent: test\r\n\r\n";
        let request = read(raw).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.target(), "/");
    }

    #[test]
    fn test_headers_consumed_until_empty_line() {
        // Lo que sigue a la línea vacía debe quedar sin leer en el stream
        let raw = b"GET / HTTP/1.0\r\nHost: x\r\n\r\nresto".to_vec();
        let mut reader = Cursor::new(raw);

        Request::read_from(&mut reader).unwrap();

        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "resto");
    }

    #[test]
    fn test_unsupported_method() {
        let result = read(b"POST / HTTP/1.0\r\n\r\n");

        match result {
            Err(ParseError::UnsupportedMethod(m)) => assert_eq!(m, "POST"),
            other => panic!("Expected UnsupportedMethod, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_method_keeps_spelling() {
        let result = read(b"delete / HTTP/1.0\r\n\r\n");

        match result {
            Err(ParseError::UnsupportedMethod(m)) => assert_eq!(m, "delete"),
            other => panic!("Expected UnsupportedMethod, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_method_stops_reading() {
        // Tras el 501 no debe haber más lecturas: los headers quedan en el stream
        let raw = b"POST / HTTP/1.0\r\nHost: x\r\n\r\n".to_vec();
        let mut reader = Cursor::new(raw);

        let result = Request::read_from(&mut reader);
        assert!(matches!(result, Err(ParseError::UnsupportedMethod(_))));

        let mut next = String::new();
        reader.read_line(&mut next).unwrap();
        assert_eq!(next, "Host: x\r\n");
    }

    #[test]
    fn test_invalid_request_line() {
        // Falta target y versión
        let result = read(b"GET\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
    }

    #[test]
    fn test_invalid_request_line_too_many_fields() {
        let result = read(b"GET / HTTP/1.0 extra\r\n\r\n");
        assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
    }

    #[test]
    fn test_empty_request() {
        let result = read(b"");
        assert!(matches!(result, Err(ParseError::EmptyRequest)));
    }

    #[test]
    fn test_blank_request_line() {
        let result = read(b"\r\n");
        assert!(matches!(result, Err(ParseError::EmptyRequest)));
    }
}
