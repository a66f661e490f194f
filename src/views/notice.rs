// ============================================================================
// NOTICE VIEW - Presentación de avisos al usuario
// ============================================================================

use crate::dom::window;
use crate::models::{Notice, NoticeLevel};

/// Mostrar un aviso (alert del navegador) y dejar rastro en consola
pub fn present(notice: &Notice) {
    let message = notice.message();

    match notice.level() {
        NoticeLevel::Info => log::info!("💬 [UI] {}", message),
        NoticeLevel::Warning => log::warn!("⚠️ [UI] {}", message),
        NoticeLevel::Error => log::error!("❌ [UI] {}", message),
    }

    if let Some(win) = window() {
        if let Err(e) = win.alert_with_message(&message) {
            log::warn!("⚠️ [UI] No se pudo mostrar alert: {:?}", e);
        }
    }
}

/// Igual que `present` para resultados opcionales (navegación)
pub fn present_if_any(notice: Option<Notice>) {
    if let Some(notice) = notice {
        present(&notice);
    }
}
