//! Noyau numérique (sans UI)
//!
//! Organisation interne :
//! - priorites.rs : table opérateur -> rang
//! - jetons.rs    : tokenisation (jetons séparés par des espaces)
//! - rpn.rs       : shunting-yard avec pile de planchers -> Programme
//! - eval.rs      : Programme + évaluation postfixée
//! - domaine.rs   : rectangle de travail
//! - aire.rs      : estimation Monte Carlo de l'aire entre deux courbes
//! - trace.rs     : échantillonnage adaptatif d'une courbe
//! - cadre.rs     : domaine -> pixels, graduations
//! - erreurs.rs   : erreurs typées

pub mod aire;
pub mod cadre;
pub mod domaine;
pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod priorites;
pub mod rpn;
pub mod trace;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_proprietes;

// API publique
pub use aire::{estimate_area, estimer, estimer_avec, Estimation};
pub use domaine::Domaine;
pub use erreurs::{ErreurAire, ErreurCompilation, ErreurDomaine, ErreurEvaluation};
pub use eval::{evaluate, Programme};
pub use priorites::TablePriorites;
pub use rpn::{compile, compile_avec};
pub use trace::{sample_curve, sample_curve_borne, RapportTrace};
