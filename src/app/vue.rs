// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Boutons et clavier passent par la même table (noyau::clavier)
// - Affichage + historique relus à chaque frame (mode immédiat, pas de réactivité)
// - Bascule clair/sombre (enregistrée par app.rs)

use eframe::egui;

use crate::noyau::format::format_nombre;
use crate::noyau::{Touche, ERREUR};

use super::etat::AppCalc;

/// Pavé 4×4 : (libellé, touche émise).
const PAVE: [[(&str, Touche); 4]; 4] = [
    [
        ("7", Touche::Caractere('7')),
        ("8", Touche::Caractere('8')),
        ("9", Touche::Caractere('9')),
        ("/", Touche::Caractere('/')),
    ],
    [
        ("4", Touche::Caractere('4')),
        ("5", Touche::Caractere('5')),
        ("6", Touche::Caractere('6')),
        ("*", Touche::Caractere('*')),
    ],
    [
        ("1", Touche::Caractere('1')),
        ("2", Touche::Caractere('2')),
        ("3", Touche::Caractere('3')),
        ("-", Touche::Caractere('-')),
    ],
    [
        ("C", Touche::Echap),
        ("0", Touche::Caractere('0')),
        ("DEL", Touche::RetourArriere),
        ("+", Touche::Caractere('+')),
    ],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.ui_bouton_theme(ui);
            });
        });
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_historique(ui);
    }

    fn ui_bouton_theme(&mut self, ui: &mut egui::Ui) {
        let label = if self.theme_sombre {
            "☀ Clair"
        } else {
            "🌙 Sombre"
        };
        if ui
            .button(label)
            .on_hover_text("Bascule clair / sombre (mémorisé)")
            .clicked()
        {
            self.basculer_theme();
        }
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let etat = self.moteur.instantane();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Opération en attente ("7 +"), vide sinon
                let en_attente = match (etat.premier_operande, etat.operateur) {
                    (Some(premier), Some(op)) => format!("{} {op}", format_nombre(premier)),
                    _ => String::new(),
                };
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.weak(egui::RichText::new(en_attente).monospace());

                    let texte = egui::RichText::new(&etat.affichage).monospace().size(32.0);
                    let texte = if etat.affichage == ERREUR {
                        texte.color(ui.visuals().error_fg_color)
                    } else {
                        texte
                    };
                    ui.add(egui::Label::new(texte).truncate());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (label, touche) in rangee {
                        self.bouton(ui, label, touche);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        let largeur = TAILLE_BOUTON[0] * 4.0 + 6.0 * 3.0;
        if ui
            .add_sized([largeur, TAILLE_BOUTON[1]], egui::Button::new("="))
            .clicked()
        {
            self.touche(Touche::Entree);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let texte = egui::RichText::new(label).size(20.0);
        if ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(texte))
            .clicked()
        {
            self.touche(touche);
        }
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new(format!("Historique ({})", self.moteur.historique().len()))
            .default_open(true)
            .show(ui, |ui| {
                if self.moteur.historique().is_empty() {
                    ui.weak("Aucun calcul");
                    return;
                }
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for texte in self.moteur.historique().textes() {
                            ui.monospace(texte);
                        }
                    });
            });
    }
}
