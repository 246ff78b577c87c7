//! # MiniWeb
//! src/lib.rs
//!
//! Servidor HTTP/1.0 iterativo implementado desde cero: atiende una conexión
//! a la vez y sirve dos tipos de contenido desde un directorio raíz:
//!
//! - **Estático**: archivos transferidos tal cual (HTML, imágenes, video).
//! - **Dinámico**: la salida estándar de un programa CGI ejecutado por
//!   petición, con el contexto del request expuesto vía variables de entorno.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y manejo del protocolo HTTP/1.0
//! - `router`: Clasificación de URIs en contenido estático o dinámico
//! - `content`: Servido de archivos estáticos y ejecución de programas CGI
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use miniweb::server::Server;
//! use miniweb::config::Config;
//!
//! let config = Config::new(); // parsea argumentos CLI
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod http;
pub mod config;
pub mod router;
pub mod content;
pub mod server;
