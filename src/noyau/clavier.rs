// src/noyau/clavier.rs
//
// Adaptateur d’entrée : touche brute -> commande moteur.
// Indépendant d’egui ; la vue traduit ses événements en `Touche`.

use super::jetons::{Chiffre, Operateur};

/// Touche brute, déjà décodée par la couche UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Caractere(char),
    Entree,
    Echap,
    Suppr,
    RetourArriere,
}

/// Les cinq commandes du moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Egal,
    Effacer,
    RetourArriere,
}

impl Commande {
    /// Table clavier :
    /// - '0'..'9'        -> chiffre
    /// - + - * /         -> opérateur
    /// - Entrée ou '='   -> égal
    /// - Échap, 'c', Suppr -> effacer
    /// - Retour arrière  -> retour arrière
    ///
    /// Toute autre touche : None (filtrée avant le moteur).
    pub fn depuis_touche(touche: Touche) -> Option<Commande> {
        match touche {
            Touche::Entree => Some(Commande::Egal),
            Touche::Echap | Touche::Suppr => Some(Commande::Effacer),
            Touche::RetourArriere => Some(Commande::RetourArriere),
            Touche::Caractere(c) => Self::depuis_caractere(c),
        }
    }

    fn depuis_caractere(c: char) -> Option<Commande> {
        match c {
            '=' => Some(Commande::Egal),
            'c' => Some(Commande::Effacer),
            _ => Chiffre::try_from(c)
                .map(Commande::Chiffre)
                .or_else(|_| Operateur::try_from(c).map(Commande::Operateur))
                .ok(),
        }
    }
}
