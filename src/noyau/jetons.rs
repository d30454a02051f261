// src/noyau/jetons.rs

use std::fmt;

use thiserror::Error;

/// Erreurs de conversion à la frontière (caractère -> jeton).
///
/// Le moteur lui-même ne peut pas échouer : ces erreurs n’existent
/// que pour l’adaptateur d’entrée, qui filtre avant d’appeler le moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEntree {
    #[error("caractère {0:?} : pas un chiffre (attendu 0-9)")]
    PasUnChiffre(char),

    #[error("caractère {0:?} : pas un opérateur (attendu + - * /)")]
    PasUnOperateur(char),
}

/* ------------------------ Chiffre ------------------------ */

/// Un chiffre décimal validé ('0'..='9').
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurEntree;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Chiffre(d as u8))
            .ok_or(ErreurEntree::PasUnChiffre(c))
    }
}

impl fmt::Display for Chiffre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/* ------------------------ Opérateur ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole ASCII, tel qu’il apparaît dans l’historique.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurEntree;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            autre => Err(ErreurEntree::PasUnOperateur(autre)),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
