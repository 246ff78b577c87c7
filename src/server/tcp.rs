//! # Servidor TCP Iterativo
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja una conexión a la vez: acepta,
//! atiende el request completo (incluyendo la espera del CGI si lo hay) y
//! recién entonces acepta la siguiente conexión. No hay threads ni I/O
//! asíncrono; la única concurrencia es el proceso hijo CGI, y el padre
//! siempre lo espera.

use crate::config::Config;
use crate::content::{cgi, static_files};
use crate::http::{ParseError, Request, Response, StatusCode};
use crate::router::ResolvedTarget;
use std::io::{self, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::time::Instant;

/// Servidor HTTP/1.0 iterativo
pub struct Server {
    config: Config,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            listener: None,
        }
    }

    /// Crea el socket de escucha y retorna la dirección local efectiva
    ///
    /// Separado de `run` para que los tests puedan usar el puerto 0
    /// (efímero) y conocer el puerto asignado.
    pub fn bind(&mut self) -> io::Result<SocketAddr> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        let local_addr = listener.local_addr()?;
        println!("[+] Servidor escuchando en {}", local_addr);

        self.listener = Some(listener);
        Ok(local_addr)
    }

    /// Corre el accept loop indefinidamente
    ///
    /// Un error al atender una conexión se registra y el loop continúa;
    /// nunca termina el proceso del servidor.
    pub fn run(&mut self) -> io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        println!("[*] Modo iterativo: una conexión a la vez\n");

        let listener = self.listener.as_ref().unwrap();

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    // El fallo de una conexión nunca tumba el accept loop
                    if let Err(e) = Self::handle_connection(&self.config, stream) {
                        eprintln!("   ❌ Error en la conexión: {}", e);
                    }
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: parseo, clasificación y despacho
    ///
    /// Los errores de protocolo se responden con páginas de error; los
    /// errores de I/O posteriores al compromiso de headers se propagan y
    /// cierran solo esta conexión.
    fn handle_connection(config: &Config, mut stream: TcpStream) -> io::Result<()> {
        let start = Instant::now();

        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        println!(" ✅ Nueva conexión desde: {}", peer_addr);

        // Leer la request line y descartar los headers
        let mut reader = BufReader::new(stream.try_clone()?);
        let request = match Request::read_from(&mut reader) {
            Ok(request) => request,
            Err(ParseError::EmptyRequest) => {
                println!("   ✅ Conexión cerrada sin request\n");
                return Ok(());
            }
            Err(ParseError::UnsupportedMethod(method)) => {
                // 501 antes de tocar el filesystem
                let response = Response::error_page(
                    StatusCode::NotImplemented,
                    &method,
                    "Not implemented",
                    "Server does not implement this method",
                );
                stream.write_all(&response.to_bytes())?;
                stream.flush()?;
                println!("   ❌ 501 método no soportado: {}\n", method);
                return Ok(());
            }
            Err(ParseError::InvalidRequestLine(line)) => {
                let response = Response::error_page(
                    StatusCode::BadRequest,
                    &line,
                    "Bad request",
                    "Server could not parse the request line",
                );
                stream.write_all(&response.to_bytes())?;
                stream.flush()?;
                println!("   ❌ 400 request line inválida\n");
                return Ok(());
            }
            Err(ParseError::Io(e)) => return Err(e),
        };

        println!(
            "   ✅ {} {} {}",
            request.method().as_str(),
            request.target(),
            request.version()
        );

        // Clasificar el target y despachar al servidor de contenido
        let status = match ResolvedTarget::resolve(request.target(), config) {
            ResolvedTarget::Static { path } => {
                static_files::serve(&mut stream, &path, request.method())?
            }
            ResolvedTarget::Dynamic { path, query } => {
                cgi::serve(&mut stream, &path, &query, request.method())?
            }
        };

        let latency = start.elapsed();
        println!("   ✅ {} ({:.2}ms)\n", status, latency.as_secs_f64() * 1000.0);

        Ok(())
    }
}
