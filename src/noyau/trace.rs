//! Échantillonnage adaptatif d'une courbe pour le rendu.
//!
//! Pas initial = largeur / 500, décalé d'un demi-pas depuis x_min.
//! Une "lacune" = deux valeurs consécutives d'une même passe, toutes deux dans
//! [y_min, y_max], qui diffèrent de plus de 2 × (hauteur / 500).
//! Lacune détectée => pas / 2 et nouvelle passe complète ; sinon arrêt.
//!
//! Arrêt inconditionnel quand le pas n'est plus au-dessus de 2 × le plus petit
//! flottant positif (sous-normal). `sample_curve_borne` ajoute une borne sur le
//! nombre de passes pour l'UI.

use log::{debug, warn};

use super::domaine::Domaine;
use super::erreurs::ErreurAire;
use super::eval::Programme;

/// Subdivisions par axe (fenêtre de 500 px).
pub const SUBDIVISIONS: f64 = 500.0;

/// 2 × plus petit sous-normal positif.
const PAS_PLANCHER: f64 = 2.0 * 4.940_656_458_412_465_4e-324;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RapportTrace {
    pub passes: u32,
    pub pas_final: f64,
    /// true si on s'est arrêté sur une borne alors qu'une lacune restait.
    pub lacune: bool,
}

/// API publique : tracé sans borne de passes.
pub fn sample_curve<F>(f: &Programme, domaine: &Domaine, on_point: F) -> Result<(), ErreurAire>
where
    F: FnMut(f64, f64),
{
    sample_curve_borne(f, domaine, None, on_point).map(|_| ())
}

pub fn sample_curve_borne<F>(
    f: &Programme,
    domaine: &Domaine,
    passes_max: Option<u32>,
    mut on_point: F,
) -> Result<RapportTrace, ErreurAire>
where
    F: FnMut(f64, f64),
{
    let mut unite = domaine.hauteur() / SUBDIVISIONS;
    if unite < f64::MIN_POSITIVE {
        unite = f64::MIN_POSITIVE;
    }
    let seuil = 2.0 * unite;

    let mut pas = domaine.largeur() / SUBDIVISIONS;
    let mut passes: u32 = 0;

    loop {
        passes += 1;
        let lacune = passe(f, domaine, pas, seuil, &mut on_point)?;
        debug!("tracé {f}: passe {passes}, pas {pas:e}, lacune {lacune}");

        if !lacune {
            return Ok(RapportTrace {
                passes,
                pas_final: pas,
                lacune: false,
            });
        }

        let borne_atteinte = passes_max.is_some_and(|max| passes >= max);
        let suivant = pas / 2.0;
        if borne_atteinte || !(suivant > PAS_PLANCHER) {
            warn!("tracé {f}: arrêt après {passes} passes avec lacune (pas {pas:e})");
            return Ok(RapportTrace {
                passes,
                pas_final: pas,
                lacune: true,
            });
        }
        pas = suivant;
    }
}

/// Une passe complète ; retourne true si une lacune a été vue.
fn passe<F>(
    f: &Programme,
    domaine: &Domaine,
    pas: f64,
    seuil: f64,
    on_point: &mut F,
) -> Result<bool, ErreurAire>
where
    F: FnMut(f64, f64),
{
    let mut lacune = false;
    let mut precedent: Option<f64> = None;

    // compteur entier : pas de dérive cumulée sur x
    let mut i: u64 = 0;
    loop {
        let x = domaine.x_min() + (i as f64 + 0.5) * pas;
        if !(x < domaine.x_max()) {
            break;
        }

        let y = f.evaluer(x)?;
        let visible = domaine.contient_y(y);

        if let Some(p) = precedent {
            if visible && domaine.contient_y(p) && (y - p).abs() > seuil {
                lacune = true;
            }
        }
        precedent = Some(y);

        if visible {
            on_point(x, y);
        }
        i += 1;
    }

    Ok(lacune)
}
