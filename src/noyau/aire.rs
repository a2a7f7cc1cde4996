//! Estimation Monte Carlo de l'aire entre deux courbes.
//!
//! Pour chaque tirage : x uniforme dans [x_min, x_max], y uniforme dans
//! [y_min, y_max] ; le point est DEDANS si y est strictement entre f1(x) et f2(x),
//! quelle que soit la courbe du dessus. NaN => jamais dedans (comparaisons fausses).
//!
//! aire ≈ (dedans / N) × largeur × hauteur

use log::info;
use rand::Rng;

use super::domaine::Domaine;
use super::erreurs::{ErreurAire, ErreurDomaine};
use super::eval::Programme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimation {
    pub aire: f64,
    pub dedans: u64,
    pub total: u64,
    /// Écart-type binomial de l'estimateur : aire_rect × √(p(1-p)/N).
    pub ecart_type: f64,
}

impl Estimation {
    pub fn proportion(&self) -> f64 {
        self.dedans as f64 / self.total as f64
    }
}

/// y strictement entre a et b.
pub fn entre_courbes(a: f64, b: f64, y: f64) -> bool {
    (a > b && b < y && y < a) || (a < b && a < y && y < b)
}

/// API publique : estimation seule.
pub fn estimate_area<R: Rng + ?Sized>(
    f1: &Programme,
    f2: &Programme,
    domaine: &Domaine,
    points: u64,
    rng: &mut R,
) -> Result<f64, ErreurAire> {
    Ok(estimer(f1, f2, domaine, points, rng)?.aire)
}

pub fn estimer<R: Rng + ?Sized>(
    f1: &Programme,
    f2: &Programme,
    domaine: &Domaine,
    points: u64,
    rng: &mut R,
) -> Result<Estimation, ErreurAire> {
    estimer_avec(f1, f2, domaine, points, rng, |_, _, _| {})
}

/// Comme `estimer`, en transmettant chaque tirage `(x, y, dedans)` à `on_point`
/// (rendu). Le puits n'influence pas l'estimation.
///
/// Une erreur d'évaluation interrompt l'estimation.
pub fn estimer_avec<R, F>(
    f1: &Programme,
    f2: &Programme,
    domaine: &Domaine,
    points: u64,
    rng: &mut R,
    mut on_point: F,
) -> Result<Estimation, ErreurAire>
where
    R: Rng + ?Sized,
    F: FnMut(f64, f64, bool),
{
    if points == 0 {
        return Err(ErreurDomaine::AucunPoint.into());
    }

    let largeur = domaine.largeur();
    let hauteur = domaine.hauteur();

    let mut dedans: u64 = 0;
    for _ in 0..points {
        let x = rng.gen::<f64>() * largeur + domaine.x_min();
        let y = rng.gen::<f64>() * hauteur + domaine.y_min();

        let a = f1.evaluer(x)?;
        let b = f2.evaluer(x)?;

        let est_dedans = entre_courbes(a, b, y);
        if est_dedans {
            dedans += 1;
        }
        on_point(x, y, est_dedans);
    }

    let p = dedans as f64 / points as f64;
    let aire_rect = domaine.aire();
    let estimation = Estimation {
        aire: p * aire_rect,
        dedans,
        total: points,
        ecart_type: aire_rect * (p * (1.0 - p) / points as f64).sqrt(),
    };

    info!(
        "estimation: {}/{} points dedans, aire ≈ {} (± {})",
        dedans, points, estimation.aire, estimation.ecart_type
    );

    Ok(estimation)
}
