//! # Contenido Dinámico (CGI)
//! src/content/cgi.rs
//!
//! Ejecución de programas externos por petición.
//!
//! ## Máquina de estados
//!
//! ```text
//! {validate} → {send-preamble} → {execute} → {wait} → done
//! ```
//!
//! El servidor se compromete con `200 OK` antes de ejecutar el programa, por
//! lo que un programa que falla ya no puede convertirse en página de error.
//! El contrato con el programa externo es estrecho y estable:
//!
//! - Entrada: variables de entorno `QUERY_STRING` y `REQUEST_METHOD`
//! - Salida: su stdout, conectado directamente al socket del cliente
//!
//! El programa es responsable de completar el bloque de headers
//! (Content-Type, Content-Length, línea vacía) en su propia salida.

use crate::http::{Method, Response, StatusCode, SERVER_NAME};
use std::fs;
use std::io::{self, Write};
use std::net::TcpStream;
use std::os::fd::OwnedFd;
use std::os::unix::fs::PermissionsExt;
use std::process::{Command, Stdio};

/// Sirve contenido dinámico ejecutando el programa resuelto
///
/// Valida la ruta (existencia, archivo regular, bit de ejecución del dueño),
/// envía el preámbulo `200 OK` + `Server`, lanza el proceso hijo con el
/// stdout redirigido al socket, y bloquea hasta que el hijo termina antes de
/// retornar (el accept loop no avanza mientras el CGI corre).
///
/// Retorna el status servido para el log del servidor. Un fallo al crear o
/// esperar el proceso se propaga como error de I/O y aborta la conexión
/// (el preámbulo ya está en el cable).
pub fn serve(stream: &mut TcpStream, path: &str, query: &str, method: Method) -> io::Result<StatusCode> {
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

    if !meta.is_file() || meta.permissions().mode() & 0o100 == 0 {
        let response = Response::error_page(
            StatusCode::Forbidden,
            path,
            "Forbidden",
            "Server could not run the CGI program",
        );
        stream.write_all(&response.to_bytes())?;
        stream.flush()?;
        return Ok(StatusCode::Forbidden);
    }

    // {send-preamble}: compromiso con 200 antes de ejecutar; el programa
    // completa el bloque de headers en su propio stdout
    let preamble = format!("HTTP/1.0 {}\r\nServer: {}\r\n", StatusCode::Ok, SERVER_NAME);
    stream.write_all(preamble.as_bytes())?;
    stream.flush()?;

    // {execute}: el stdout del hijo es el socket del cliente
    println!("   🚀 Ejecutando CGI: {}", path);
    let child_stdout: OwnedFd = stream.try_clone()?.into();
    let mut child = Command::new(path)
        .env("QUERY_STRING", query)
        .env("REQUEST_METHOD", method.as_str())
        .stdout(Stdio::from(child_stdout))
        .spawn()?;

    // {wait}: el padre bloquea hasta que el hijo termina
    let status = child.wait()?;
    if !status.success() {
        println!("   ⚠️  CGI {} terminó con {}", path, status);
    }

    Ok(StatusCode::Ok)
}
