//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - jetons.rs     : Chiffre / Operateur validés + erreurs de conversion
//! - clavier.rs    : touche brute -> commande
//! - lecture.rs    : texte affiché -> f64
//! - format.rs     : f64 -> texte affiché
//! - eval.rs       : a op b (division par zéro => "Error")
//! - historique.rs : journal des calculs, plus récent en tête
//! - moteur.rs     : machine à états (les cinq commandes)

pub mod clavier;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod lecture;
pub mod moteur;


#[cfg(test)]
mod tests_fuzz_safe;

/// Sentinelle d’erreur, affichée et consignée telle quelle.
pub const ERREUR: &str = "Error";

// API publique minimale
pub use clavier::{Commande, Touche};
pub use moteur::Moteur;
