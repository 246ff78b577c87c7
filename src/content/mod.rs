//! # Servidores de Contenido
//!
//! Este módulo contiene los dos servidores de contenido del proyecto:
//!
//! - **static_files**: valida y transfiere archivos tal cual desde el
//!   document root, con los headers de framing correctos.
//! - **cgi**: valida y ejecuta un programa externo por petición, exponiendo
//!   el contexto del request vía variables de entorno y conectando el stdout
//!   del hijo directamente al socket del cliente.
//!
//! Cada servidor valida su propia ruta resuelta (existencia, archivo regular,
//! bit de permiso del dueño) y responde la página de error 403/404
//! correspondiente cuando la validación falla. Los metadatos se consultan
//! frescos en cada request; nunca se cachean.

pub mod static_files;
pub mod cgi;
