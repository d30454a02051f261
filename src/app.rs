// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + theme.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : géré ici, globalement (aucun champ texte ne prend le focus).

pub mod etat;
pub mod theme;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());
        for t in AppCalc::touches_depuis_evenements(&events) {
            self.touche(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        // Bascule demandée par la vue : appliquer + écrire tout de suite.
        if self.theme_a_sauver {
            self.theme_a_sauver = false;
            theme::appliquer(ctx, self.theme_sombre);
            match frame.storage_mut() {
                Some(storage) => theme::sauver(storage, self.theme_sombre),
                None => log::warn!("pas de stockage eframe : thème non persisté"),
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        theme::sauver(storage, self.theme_sombre);
    }
}
