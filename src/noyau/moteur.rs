//! Noyau — moteur de la calculatrice (machine à états).
//!
//! Quatre variables : affichage, premier opérande, opérateur en attente,
//! attente du second opérande. Plus l’historique des calculs terminés.
//!
//! Deux macro-états :
//! - saisie du premier opérande (pas d’opérateur en attente)
//! - opérateur en attente / saisie du second opérande
//!
//! `egal` et `effacer` sont les seuls retours vers le premier.
//!
//! Contrats :
//! - les cinq commandes sont totales : aucune panique, aucun `Result`
//! - l’affichage est toujours un numéral décimal ou exactement "Error"
//! - l’historique n’est jamais touché par `effacer`

use log::{debug, warn};

use super::clavier::Commande;
use super::eval::{calculer, Resultat};
use super::format::format_nombre;
use super::historique::{EntreeHistorique, Historique};
use super::jetons::{Chiffre, Operateur};
use super::lecture::{affichage_valide, lire_affichage};
use super::ERREUR;

const AFFICHAGE_INITIAL: &str = "0";

/// Copie figée des quatre variables d’état (pour la vue et les tests).
#[derive(Clone, Debug, PartialEq)]
pub struct Instantane {
    pub affichage: String,
    pub premier_operande: Option<f64>,
    pub operateur: Option<Operateur>,
    pub attente_second_operande: bool,
}

/// Moteur de calcul, une instance par session.
///
/// Mono-thread : chaque commande prend `&mut self` et s’exécute jusqu’au bout.
/// Aucun verrou interne ; un partage entre threads demande une
/// synchronisation externe (ex. `Mutex<Moteur>`).
#[derive(Clone, Debug)]
pub struct Moteur {
    affichage: String,
    premier_operande: Option<f64>,
    operateur: Option<Operateur>,
    attente_second_operande: bool,
    historique: Historique,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            premier_operande: None,
            operateur: None,
            attente_second_operande: false,
            historique: Historique::default(),
        }
    }
}

impl Moteur {
    /* ------------------------ Observables ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn instantane(&self) -> Instantane {
        Instantane {
            affichage: self.affichage.clone(),
            premier_operande: self.premier_operande,
            operateur: self.operateur,
            attente_second_operande: self.attente_second_operande,
        }
    }

    /* ------------------------ Commandes ------------------------ */

    /// Point d’entrée unique pour l’adaptateur d’entrée.
    pub fn appliquer(&mut self, commande: Commande) {
        match commande {
            Commande::Chiffre(d) => self.chiffre(d),
            Commande::Operateur(op) => self.operateur(op),
            Commande::Egal => self.egal(),
            Commande::Effacer => self.effacer(),
            Commande::RetourArriere => self.retour_arriere(),
        }
        debug_assert!(
            affichage_valide(&self.affichage),
            "affichage invalide après {commande:?} : {:?}",
            self.affichage
        );
    }

    pub fn chiffre(&mut self, d: Chiffre) {
        if self.affichage == ERREUR || self.attente_second_operande {
            self.affichage = d.to_string();
            self.attente_second_operande = false;
        } else if self.affichage == AFFICHAGE_INITIAL {
            self.affichage = d.to_string();
        } else {
            self.affichage.push(d.as_char());
        }
        debug!("chiffre {d} -> affichage {:?}", self.affichage);
    }

    /// Capture l’affichage comme premier opérande, à chaque appui.
    ///
    /// C’est ce qui permet l’enchaînement `2 + 3 * 4 =` : le `*` remplace
    /// le premier opérande par 3 et le `+` est oublié (donne 12).
    pub fn operateur(&mut self, op: Operateur) {
        let Some(valeur) = lire_affichage(&self.affichage) else {
            // "Error" (ou nombre hors f64) : rien à capturer
            warn!("opérateur {op} ignoré : affichage {:?} illisible", self.affichage);
            return;
        };

        self.premier_operande = Some(valeur);
        self.operateur = Some(op);
        self.attente_second_operande = true;
        debug!("opérateur {op} (premier opérande {valeur})");
    }

    /// Calcule et consigne le résultat.
    ///
    /// Le premier opérande reste en place après le calcul ; l’opérateur,
    /// lui, est retiré, donc un second `=` ne fait rien.
    pub fn egal(&mut self) {
        let (Some(premier), Some(op)) = (self.premier_operande, self.operateur) else {
            debug!("égal sans opération en attente : ignoré");
            return;
        };

        let (second_txt, resultat) = match lire_affichage(&self.affichage) {
            Some(second) => (format_nombre(second), calculer(premier, op, second)),
            None => (self.affichage.clone(), Resultat::Erreur),
        };
        let resultat_txt = resultat.texte();

        let entree = EntreeHistorique::nouvelle(
            &format_nombre(premier),
            op.symbole(),
            &second_txt,
            &resultat_txt,
        );
        debug!("égal : {entree}");
        self.historique.ajouter(entree);

        self.affichage = resultat_txt;
        self.operateur = None;
        self.attente_second_operande = false;
    }

    /// Remise à zéro de l’état de calcul ; l’historique est conservé.
    pub fn effacer(&mut self) {
        self.affichage = AFFICHAGE_INITIAL.to_string();
        self.premier_operande = None;
        self.operateur = None;
        self.attente_second_operande = false;
        debug!("effacer");
    }

    pub fn retour_arriere(&mut self) {
        if self.affichage == ERREUR {
            self.effacer();
            return;
        }

        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
            // "-5" -> "-" n’est pas un numéral
            if self.affichage == "-" {
                self.affichage = AFFICHAGE_INITIAL.to_string();
            }
        } else {
            self.affichage = AFFICHAGE_INITIAL.to_string();
        }
        debug!("retour arrière -> affichage {:?}", self.affichage);
    }
}
