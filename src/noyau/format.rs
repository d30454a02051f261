// src/noyau/format.rs

use super::ERREUR;

/// Texte d’un nombre pour l’affichage et l’historique.
///
/// - entiers sans point décimal (10, -3, 1000000000000000000000)
/// - sinon la plus courte écriture décimale qui relit le même f64 (0.30000000000000004)
/// - jamais de notation exponentielle
/// - -0 devient 0
pub fn format_nombre(x: f64) -> String {
    if !x.is_finite() {
        return ERREUR.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}
