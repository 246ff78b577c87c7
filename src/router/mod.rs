//! # Clasificación de URIs
//! src/router/mod.rs
//!
//! Este módulo decide si un target pedido nombra contenido estático o
//! dinámico, y deriva la ruta en el filesystem más el query string para CGI.
//!
//! ## Arquitectura
//!
//! ```text
//! Request.target → ResolvedTarget::{Static, Dynamic} → content::{static_files, cgi}
//! ```
//!
//! La clasificación es determinística: si el target contiene el segmento
//! marcador de CGI (por defecto `cgi-bin`) es dinámico; si no, estático.
//! La ruta resuelta es siempre document root + target por concatenación de
//! strings, sin normalización de `..` (limitación conocida, ver DESIGN.md).

use crate::config::Config;

/// Resultado de clasificar el target de un request
///
/// Se deriva una vez por request a partir del target crudo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// Archivo servido tal cual desde el document root
    Static {
        /// Ruta en el filesystem (root + target, más el documento por
        /// defecto si el target termina en "/")
        path: String,
    },

    /// Programa CGI ejecutado por petición
    Dynamic {
        /// Ruta del ejecutable en el filesystem (root + target sin query)
        path: String,

        /// Query string crudo (lo que sigue al primer "?"); vacío si no hay "?"
        query: String,
    },
}

impl ResolvedTarget {
    /// Clasifica un target crudo y deriva su ruta en el filesystem
    ///
    /// - Estático: ruta = root + target; si el target termina en "/" se
    ///   agrega el documento por defecto.
    /// - Dinámico: se corta en el *primer* "?"; lo que sigue es el query
    ///   string, que se pasa sin modificar (sin URL-decoding). Sin "?" el
    ///   query queda vacío.
    ///
    /// # Ejemplo
    /// ```
    /// use miniweb::config::Config;
    /// use miniweb::router::ResolvedTarget;
    ///
    /// let config = Config::default();
    ///
    /// let resolved = ResolvedTarget::resolve("/cgi-bin/adder?fnum=1&snum=2", &config);
    /// assert_eq!(resolved, ResolvedTarget::Dynamic {
    ///     path: "./cgi-bin/adder".to_string(),
    ///     query: "fnum=1&snum=2".to_string(),
    /// });
    /// ```
    pub fn resolve(target: &str, config: &Config) -> Self {
        if target.contains(config.cgi_dir.as_str()) {
            // Contenido dinámico: separar ruta y query en el primer '?'
            let (program, query) = match target.find('?') {
                Some(pos) => (&target[..pos], &target[pos + 1..]),
                None => (target, ""),
            };

            ResolvedTarget::Dynamic {
                path: format!("{}{}", config.root, program),
                query: query.to_string(),
            }
        } else {
            // Contenido estático: root + target, con documento por defecto
            // cuando el target nombra un directorio
            let mut path = format!("{}{}", config.root, target);
            if target.ends_with('/') {
                path.push_str(&config.index);
            }

            ResolvedTarget::Static { path }
        }
    }
}
