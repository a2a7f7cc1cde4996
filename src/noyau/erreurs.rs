// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau.
// - ErreurCompilation : lecture de la formule (jetons, parenthèses, rangs)
// - ErreurEvaluation  : exécution du programme postfixé
// - ErreurDomaine     : rectangle ou nombre de points invalides
//
// Les messages sont affichés tels quels dans l'UI.

use thiserror::Error;

use super::jetons::Operateur;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCompilation {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("jeton inconnu '{jeton}' (position {position})")]
    JetonInconnu { jeton: String, position: usize },

    #[error("opérateur sans priorité: '{operateur}'")]
    OperateurSansRang { operateur: Operateur },

    #[error("parenthèse fermante sans ouvrante (position {position})")]
    ParentheseFermanteOrpheline { position: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurEvaluation {
    #[error("pile insuffisante pour '{operateur}' (position {position})")]
    PileInsuffisante { operateur: Operateur, position: usize },

    #[error("expression invalide: {restantes} valeur(s) en fin d'évaluation")]
    ValeursRestantes { restantes: usize },

    #[error("parenthèses non fermées ({ouvrantes})")]
    ParenthesesNonFermees { ouvrantes: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurDomaine {
    #[error("domaine invalide: x min ({min}) doit être < x max ({max})")]
    BornesX { min: f64, max: f64 },

    #[error("domaine invalide: y min ({min}) doit être < y max ({max})")]
    BornesY { min: f64, max: f64 },

    #[error("domaine invalide: dimensions non finies (largeur {largeur}, hauteur {hauteur})")]
    NonFini { largeur: f64, hauteur: f64 },

    #[error("il faut au moins un point")]
    AucunPoint,
}

/// Erreur d'une estimation ou d'un tracé complet.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurAire {
    #[error(transparent)]
    Compilation(#[from] ErreurCompilation),

    #[error(transparent)]
    Evaluation(#[from] ErreurEvaluation),

    #[error(transparent)]
    Domaine(#[from] ErreurDomaine),
}
