// src/noyau/historique.rs
//
// Journal des calculs terminés : le plus récent en tête, croissance non bornée.
// Une entrée n’est jamais modifiée ni déplacée après insertion.

use std::collections::VecDeque;
use std::fmt;

/// Une ligne "<premier> <op> <second> = <résultat>", figée à la création.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique(String);

impl EntreeHistorique {
    pub(crate) fn nouvelle(premier: &str, op: char, second: &str, resultat: &str) -> Self {
        Self(format!("{premier} {op} {second} = {resultat}"))
    }

    pub fn texte(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    /// Seul point d’écriture : insertion en tête.
    pub(crate) fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.push_front(entree);
    }

    /// Du plus récent au plus ancien.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> + '_ {
        self.entrees.iter()
    }

    pub fn textes(&self) -> Vec<&str> {
        self.iter().map(EntreeHistorique::texte).collect()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
