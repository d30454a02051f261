//! src/app/theme.rs
//!
//! Préférence clair/sombre, persistée via `eframe::Storage`
//! (fichier en natif, localStorage sur le web).
//!
//! Indépendant du moteur : ne fait que choisir les visuels egui.

use eframe::egui;
use log::{debug, info, warn};

/// Clé fixe de la préférence.
pub const CLE_THEME_SOMBRE: &str = "calculatrice.theme_sombre";

/// Sans préférence enregistrée : thème clair.
pub const THEME_SOMBRE_DEFAUT: bool = false;

/// Lue une seule fois au démarrage.
pub fn charger(storage: Option<&dyn eframe::Storage>) -> bool {
    let Some(storage) = storage else {
        return THEME_SOMBRE_DEFAUT;
    };

    let sombre = match storage.get_string(CLE_THEME_SOMBRE).as_deref() {
        Some("true") => true,
        Some("false") => false,
        Some(autre) => {
            warn!("préférence de thème illisible ({autre:?}), thème par défaut");
            THEME_SOMBRE_DEFAUT
        }
        None => THEME_SOMBRE_DEFAUT,
    };
    info!("thème chargé : {}", if sombre { "sombre" } else { "clair" });
    sombre
}

/// Écrite à chaque bascule.
pub fn sauver(storage: &mut dyn eframe::Storage, sombre: bool) {
    storage.set_string(CLE_THEME_SOMBRE, sombre.to_string());
    storage.flush();
    debug!("thème enregistré : {}", if sombre { "sombre" } else { "clair" });
}

pub fn appliquer(ctx: &egui::Context, sombre: bool) {
    ctx.set_theme(if sombre {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
}
