//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir le moteur de calcul et la préférence de thème.
//! La vue lit `moteur` à chaque frame et ne le modifie que par des commandes.

use eframe::egui;
use log::debug;

use crate::noyau::{Commande, Moteur, Touche};

use super::theme;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- préférence ---
    pub theme_sombre: bool,

    // Posé par la vue quand l’utilisateur bascule le thème ;
    // app.rs l’applique et l’enregistre (il a accès au Frame).
    pub theme_a_sauver: bool,
}

impl AppCalc {
    /// Construit l’app : thème lu une fois dans le stockage eframe, puis appliqué.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme_sombre = theme::charger(cc.storage);
        theme::appliquer(&cc.egui_ctx, theme_sombre);

        Self {
            theme_sombre,
            ..Self::default()
        }
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    /// Seul chemin d’écriture vers le moteur.
    pub fn commande(&mut self, cmd: Commande) {
        self.moteur.appliquer(cmd);
    }

    /// Touche clavier : filtrée par la table, sinon ignorée.
    pub fn touche(&mut self, t: Touche) {
        match Commande::depuis_touche(t) {
            Some(cmd) => self.commande(cmd),
            None => debug!("touche ignorée : {t:?}"),
        }
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
        self.theme_a_sauver = true;
    }

    /// Traduit les événements clavier egui en `Touche`.
    ///
    /// Caractères via `Event::Text` ('0'-'9', + - * /, '=', 'c') ;
    /// touches nommées via `Event::Key` (Entrée, Échap, Suppr, Retour arrière).
    pub fn touches_depuis_evenements(events: &[egui::Event]) -> Vec<Touche> {
        let mut out = Vec::new();
        for ev in events {
            match ev {
                egui::Event::Text(texte) => out.extend(texte.chars().map(Touche::Caractere)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Touche::Entree),
                    egui::Key::Escape => out.push(Touche::Echap),
                    egui::Key::Delete => out.push(Touche::Suppr),
                    egui::Key::Backspace => out.push(Touche::RetourArriere),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    }
}
