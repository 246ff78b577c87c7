//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP con soporte para
//! argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./miniweb 8080 \
//!   --root ./site \
//!   --index home.html \
//!   --cgi-dir cgi-bin
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_HOST=0.0.0.0 DOC_ROOT=./site ./miniweb 8080
//! ```

use clap::Parser;

/// Configuración del servidor HTTP/1.0
#[derive(Debug, Clone, Parser)]
#[command(name = "miniweb")]
#[command(about = "Servidor HTTP/1.0 iterativo con contenido estático y CGI")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (argumento posicional obligatorio)
    #[arg(env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz de documentos; todos los targets se resuelven bajo él
    #[arg(long, default_value = ".", env = "DOC_ROOT")]
    pub root: String,

    /// Documento por defecto cuando el target termina en "/"
    #[arg(long, default_value = "home.html", env = "DEFAULT_DOC")]
    pub index: String,

    /// Segmento que marca un target como contenido dinámico (CGI)
    #[arg(long = "cgi-dir", default_value = "cgi-bin", env = "CGI_DIR")]
    pub cgi_dir: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// Si falta el puerto (o algún argumento es inválido), clap imprime el
    /// usage en stderr y termina el proceso con estado distinto de cero.
    ///
    /// # Ejemplo
    /// ```no_run
    /// use miniweb::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use miniweb::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.root.is_empty() {
            return Err("Document root must not be empty".to_string());
        }
        if self.index.is_empty() {
            return Err("Default document must not be empty".to_string());
        }
        if self.index.contains('/') {
            return Err("Default document must be a file name, not a path".to_string());
        }
        if self.cgi_dir.is_empty() {
            return Err("CGI marker segment must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║        MiniWeb HTTP/1.0 Configuration        ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!();
        println!("📁 Content:");
        println!("   Doc root:     {}", self.root);
        println!("   Default doc:  {}", self.index);
        println!("   CGI marker:   {}", self.cgi_dir);
        println!();
        println!("════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            root: ".".to_string(),
            index: "home.html".to_string(),
            cgi_dir: "cgi-bin".to_string(),
        }
    }
}
