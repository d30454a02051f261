// src/noyau/lecture.rs

use super::ERREUR;

/// Lit le texte affiché comme un nombre.
///
/// None pour la sentinelle "Error", un texte non numérique ("-" seul),
/// ou un nombre trop long pour un f64 fini.
pub fn lire_affichage(affichage: &str) -> Option<f64> {
    if affichage == ERREUR {
        return None;
    }
    // `parse::<f64>` accepte "inf" / "NaN" : on n’autorise que chiffres, signe et point.
    if !affichage
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == '.')
    {
        return None;
    }
    affichage.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Vrai si le texte est un numéral décimal valide (ou la sentinelle).
///
/// Contrôle purement textuel : `-?chiffres(.chiffres*)?`, sans borne de longueur.
pub fn affichage_valide(affichage: &str) -> bool {
    if affichage == ERREUR {
        return true;
    }
    let corps = affichage.strip_prefix('-').unwrap_or(affichage);
    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };
    !entier.is_empty()
        && entier.chars().all(|c| c.is_ascii_digit())
        && frac.chars().all(|c| c.is_ascii_digit())
}
