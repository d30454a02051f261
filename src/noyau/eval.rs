//! Noyau — évaluation d’une opération binaire en f64.
//!
//! Seule erreur possible : division par zéro, rendue en bande par `Resultat::Erreur`.
//! Un résultat non fini (dépassement vers ±∞) est traité de la même façon,
//! pour que l’affichage reste toujours un numéral ou "Error".

use super::format::format_nombre;
use super::jetons::Operateur;
use super::ERREUR;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resultat {
    Nombre(f64),
    Erreur,
}

impl Resultat {
    /// Texte affiché (et consigné dans l’historique).
    pub fn texte(self) -> String {
        match self {
            Resultat::Nombre(x) => format_nombre(x),
            Resultat::Erreur => ERREUR.to_string(),
        }
    }
}

/// Applique `a op b`.
pub fn calculer(a: f64, op: Operateur, b: f64) -> Resultat {
    let brut = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Resultat::Erreur;
            }
            a / b
        }
    };

    if brut.is_finite() {
        Resultat::Nombre(brut)
    } else {
        Resultat::Erreur
    }
}
