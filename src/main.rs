//! # MiniWeb - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.0 iterativo.

use miniweb::config::Config;
use miniweb::server::Server;

fn main() {
    println!("=================================");
    println!("  MiniWeb HTTP/1.0 Server");
    println!("  Contenido estático + CGI");
    println!("=================================\n");

    // Crear configuración desde argumentos CLI / variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor
    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
