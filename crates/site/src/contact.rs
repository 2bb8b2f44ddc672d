//! Outbound contact links and peso formatting.
//!
//! Builds prefilled WhatsApp deep links (project-wide and per-lot inquiries)
//! against the fixed sales phone target, and triggers the host's print flow
//! for the brochure export.

use bevy::prelude::*;

use crate::lots::Lot;

/// Fixed sales line target for wa.me links.
pub const WHATSAPP_PHONE: &str = "573000000000";

pub const PROJECT_NAME: &str = "Anaiwa Eco Reserva";

/// es-CO peso formatting: `$ 250.000.000`, no decimals.
pub fn format_cop(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("$ {grouped}")
}

pub fn project_inquiry_message() -> String {
    format!(
        "Hola, estoy interesado en el proyecto {PROJECT_NAME} y quisiera recibir más información."
    )
}

pub fn lot_inquiry_message(lot: &Lot) -> String {
    format!(
        "Hola, estoy interesado en el Lote {} de {PROJECT_NAME} con un precio de {}.",
        lot.number,
        format_cop(lot.price_cop)
    )
}

/// Prefilled wa.me deep link with the message percent-encoded.
pub fn wa_link(message: &str) -> String {
    format!(
        "https://wa.me/{WHATSAPP_PHONE}?text={}",
        urlencoding::encode(message)
    )
}

/// Open a link in the host browser (new tab on wasm). Failures are logged
/// and otherwise ignored.
pub fn open_link(url: &str) {
    #[cfg(not(target_arch = "wasm32"))]
    if let Err(e) = webbrowser::open(url) {
        warn!("failed to open {url}: {e}");
    }

    #[cfg(target_arch = "wasm32")]
    match web_sys::window() {
        Some(window) => {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                warn!("failed to open {url}");
            }
        }
        None => warn!("failed to open {url}: no window"),
    }
}

/// Trigger the host's native print/export flow. Pagination beyond the
/// browser's own is out of scope.
pub fn print_page() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if window.print().is_err() {
            warn!("print request rejected by the browser");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    info!("print/export uses the browser's print dialog; run the wasm build");
}
