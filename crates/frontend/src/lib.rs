//! Cristal admin frontend
//!
//! Browser (WASM) application built with Yew. The session layer lives in
//! `cristal-core` and `cristal-http`; this crate wires it to the browser:
//! a cookie-backed token store, an auth context/provider, a route guard,
//! and the feature views.

pub mod app;
pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod storage;

pub use app::App;

use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Route tracing output to the browser console
pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();
}
