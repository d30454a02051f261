//! Tests fuzz safe : séquences de commandes aléatoires (proptest).
//!
//! Invariants vérifiés après chaque commande :
//! - l’affichage est un numéral décimal ou exactement "Error"
//! - opérateur en attente => premier opérande présent
//! - attente du second opérande => opérateur en attente
//! - l’historique ne fait que grandir en tête, jamais réécrit
//! - `effacer` ne touche jamais l’historique

use proptest::prelude::*;

use super::clavier::Commande;
use super::jetons::{Chiffre, Operateur};
use super::lecture::affichage_valide;
use super::moteur::Moteur;

const OPERATEURS: [Operateur; 4] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
];

fn commande() -> impl Strategy<Value = Commande> {
    prop_oneof![
        // les chiffres dominent, comme à l’usage
        4 => (0u32..10).prop_map(|d| {
            let c = char::from_digit(d, 10).unwrap_or('0');
            Commande::Chiffre(Chiffre::try_from(c).unwrap())
        }),
        2 => prop::sample::select(OPERATEURS.to_vec()).prop_map(Commande::Operateur),
        1 => Just(Commande::Egal),
        1 => Just(Commande::Effacer),
        1 => Just(Commande::RetourArriere),
    ]
}

proptest! {
    #[test]
    fn invariants_apres_chaque_commande(cmds in prop::collection::vec(commande(), 0..120)) {
        let mut m = Moteur::default();

        for cmd in cmds {
            let histo_avant: Vec<String> =
                m.historique().textes().into_iter().map(String::from).collect();

            m.appliquer(cmd);
            let s = m.instantane();

            prop_assert!(affichage_valide(&s.affichage), "affichage={:?}", s.affichage);
            if s.operateur.is_some() {
                prop_assert!(s.premier_operande.is_some());
            }
            if s.attente_second_operande {
                prop_assert!(s.operateur.is_some());
            }

            // ancien historique = suffixe du nouveau
            let histo: Vec<&str> = m.historique().textes();
            prop_assert!(histo.len() >= histo_avant.len());
            prop_assert!(histo.len() <= histo_avant.len() + 1);
            let decalage = histo.len() - histo_avant.len();
            for (i, ancienne) in histo_avant.iter().enumerate() {
                prop_assert_eq!(histo[i + decalage], ancienne.as_str());
            }
        }
    }

    #[test]
    fn historique_compte_les_egal_effectifs(cmds in prop::collection::vec(commande(), 0..80)) {
        let mut m = Moteur::default();
        let mut attendus = 0usize;

        for cmd in cmds {
            if cmd == Commande::Egal && m.instantane().operateur.is_some() {
                attendus += 1;
            }
            m.appliquer(cmd);
        }

        prop_assert_eq!(m.historique().len(), attendus);
    }

    #[test]
    fn effacer_garde_historique(cmds in prop::collection::vec(commande(), 0..60)) {
        let mut m = Moteur::default();
        for cmd in cmds {
            m.appliquer(cmd);
        }
        let avant: Vec<String> = m.historique().textes().into_iter().map(String::from).collect();

        m.effacer();

        let s = m.instantane();
        prop_assert_eq!(s.affichage.as_str(), "0");
        prop_assert_eq!(s.premier_operande, None);
        prop_assert_eq!(s.operateur, None);
        prop_assert!(!s.attente_second_operande);
        prop_assert_eq!(m.historique().textes(), avant.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn entiers_exacts_pour_plus_moins_fois(
        a in 0u32..100_000,
        b in 0u32..100_000,
        op in prop::sample::select(vec![Operateur::Plus, Operateur::Moins, Operateur::Fois]),
    ) {
        let mut m = Moteur::default();
        for c in a.to_string().chars() {
            m.chiffre(Chiffre::try_from(c).unwrap());
        }
        m.operateur(op);
        for c in b.to_string().chars() {
            m.chiffre(Chiffre::try_from(c).unwrap());
        }
        m.egal();

        let (a, b) = (i64::from(a), i64::from(b));
        let attendu = match op {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            _ => a * b,
        };
        prop_assert_eq!(m.affichage(), attendu.to_string());
        let entree = format!("{a} {op} {b} = {attendu}");
        prop_assert_eq!(m.historique().textes(), vec![entree.as_str()]);
    }
}
