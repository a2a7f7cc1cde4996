//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir les paramètres saisis (formules, domaine, points, graine),
//! le dernier résultat (estimation + points à peindre) et l'erreur courante.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de compilation, pas de tirage).
//! - Garde-fous : bornes sur le nombre de points et de passes.

use aire_mc::noyau::{Domaine, Estimation, RapportTrace};
use serde::{Deserialize, Serialize};

/// Nombre de points par défaut.
const POINTS_DEFAUT: u64 = 10_000;

/// Garde-fou : au-delà, la peinture de chaque frame devient lourde.
pub const POINTS_MAX: u64 = 200_000;

const GRAINE_DEFAUT: u64 = 42;

const PASSES_DEFAUT: u32 = 16;

/// Garde-fou : chaque passe double le nombre d'évaluations.
pub const PASSES_MAX: u32 = 20;

/// Paramètres persistés entre deux lancements (stockage eframe).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parametres {
    pub f1: String,
    pub f2: String,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub points: u64,
    pub graine: u64,
    pub passes_max: u32,
}

impl Default for Parametres {
    fn default() -> Self {
        Self {
            f1: "x ^ 2".to_string(),
            f2: "0".to_string(),
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
            points: POINTS_DEFAUT,
            graine: GRAINE_DEFAUT,
            passes_max: PASSES_DEFAUT,
        }
    }
}

impl Parametres {
    /// Garde-fous appliqués après restauration ou saisie.
    pub fn borner(mut self) -> Self {
        self.points = self.points.clamp(1, POINTS_MAX);
        self.passes_max = self.passes_max.clamp(1, PASSES_MAX);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tirage {
    pub x: f64,
    pub y: f64,
    pub dedans: bool,
}

/// Ce que le dernier calcul a produit.
#[derive(Clone, Debug)]
pub struct Resultat {
    pub domaine: Domaine,
    pub estimation: Estimation,
    pub tirages: Vec<Tirage>,
    pub courbe1: Vec<(f64, f64)>,
    pub courbe2: Vec<(f64, f64)>,
    pub rapport1: RapportTrace,
    pub rapport2: RapportTrace,
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub rpn1: String,
    pub rpn2: String,
    pub note: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppAire {
    // --- entrée utilisateur ---
    pub parametres: Parametres,

    // --- sorties ---
    pub resultat: Option<Resultat>,
    pub erreur: String,

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,
}

impl AppAire {
    /// Reprend les paramètres sauvegardés (ou les défauts).
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let parametres = cc
            .storage
            .and_then(|s| eframe::get_value::<Parametres>(s, eframe::APP_KEY))
            .unwrap_or_default()
            .borner();

        log::debug!("paramètres restaurés: {parametres:?}");

        Self {
            parametres,
            ..Default::default()
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : paramètres par défaut + résultats effacés.
    pub fn reset_total(&mut self) {
        self.parametres = Parametres::default();
        self.clear_resultats();
    }

    /// CLR : efface résultat + erreur + démarche (sans toucher aux paramètres).
    pub fn clear_resultats(&mut self) {
        self.resultat = None;
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// Une erreur invalide le dessin précédent : on n'affiche pas de points
    /// qui ne correspondent plus aux paramètres.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat = None;
        self.demarche = Demarche::default();
    }

    pub fn set_resultat(&mut self, resultat: Resultat, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = Some(resultat);
        self.demarche = demarche;
    }
}
