// ============================================================================
// VENTAS PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: presentación de avisos
// - ViewModels: lógica de login, navegación y formulario de clientes
// - Services: SOLO comunicación API y localStorage
// - State: State Management con Rc<RefCell>
// - Models: sobres de la API, sesión, secciones
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la app (hilo único del navegador)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Ventas PWA - Rust Puro + MVVM ({})", CONFIG.environment);

    let app = App::new(&CONFIG);
    app.start();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Copia de la app para usar fuera del borrow (p. ej. a través de un await)
fn current_app() -> Option<App> {
    let app = APP.with(|app_cell| app_cell.borrow().clone());
    if app.is_none() {
        log::warn!("⚠️ [APP] App no está inicializada");
    }
    app
}

/// Botón "Iniciar sesión"
#[wasm_bindgen(js_name = iniciarSesion)]
pub fn iniciar_sesion() {
    if let Some(app) = current_app() {
        spawn_local(async move {
            let notice = app.session().login().await;
            views::present(&notice);
        });
    }
}

#[wasm_bindgen]
pub fn logout() {
    if let Some(app) = current_app() {
        views::present(&app.session().logout());
    }
}

#[wasm_bindgen(js_name = showSection)]
pub fn show_section(name: &str) {
    if let Some(app) = current_app() {
        views::present_if_any(app.navigation().show_section_named(name));
    }
}

#[wasm_bindgen(js_name = showCustomerSection)]
pub fn show_customer_section(name: &str) {
    if let Some(app) = current_app() {
        views::present_if_any(app.navigation().show_customer_section_named(name));
    }
}

/// Botón "AGREGAR CLIENTE"
#[wasm_bindgen(js_name = guardarNuevoCliente)]
pub fn guardar_nuevo_cliente() {
    if let Some(app) = current_app() {
        spawn_local(async move {
            let notice = app.customers().save().await;
            views::present(&notice);
        });
    }
}

#[wasm_bindgen(js_name = limpiarFormularioCliente)]
pub fn limpiar_formulario_cliente() {
    if let Some(app) = current_app() {
        views::present(&app.customers().clear());
    }
}
