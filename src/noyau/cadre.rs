// src/noyau/cadre.rs
//
// Passage domaine -> pixels + graduations des axes.
// Pur calcul : l'UI (vue.rs) se contente de peindre ce qui sort d'ici.

use super::domaine::Domaine;

/// Taille par défaut de la zone de tracé (px).
pub const COTE_DEFAUT: f32 = 500.0;

/// Nombre d'intervalles par axe ; les graduations sont aux bornes intérieures.
const INTERVALLES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cadre {
    domaine: Domaine,
    largeur_px: f32,
    hauteur_px: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Graduation {
    /// Position le long de l'axe (px depuis le bord gauche ou le bord haut).
    pub position_px: f32,
    pub valeur: f64,
    pub texte: String,
}

impl Cadre {
    pub fn new(domaine: Domaine, largeur_px: f32, hauteur_px: f32) -> Self {
        Self {
            domaine,
            largeur_px,
            hauteur_px,
        }
    }

    /// (x, y) -> pixel ; y croît vers le bas, ligne du bas = hauteur - 1.
    pub fn vers_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let d = &self.domaine;
        let px = (x - d.x_min()) * self.largeur_px as f64 / d.largeur();
        let py = self.hauteur_px as f64 - 1.0 - (y - d.y_min()) * self.hauteur_px as f64 / d.hauteur();
        (px as f32, py as f32)
    }

    /// Graduations verticales de l'axe x, de gauche à droite.
    pub fn graduations_x(&self) -> Vec<Graduation> {
        let d = &self.domaine;
        (1..INTERVALLES)
            .map(|i| {
                let valeur = d.x_min() + i as f64 * d.largeur() / INTERVALLES as f64;
                Graduation {
                    position_px: i as f32 * self.largeur_px / INTERVALLES as f32,
                    valeur,
                    texte: format_sci(valeur),
                }
            })
            .collect()
    }

    /// Graduations horizontales de l'axe y, du haut vers le bas.
    pub fn graduations_y(&self) -> Vec<Graduation> {
        let d = &self.domaine;
        (1..INTERVALLES)
            .map(|i| {
                let valeur = d.y_max() - i as f64 * d.hauteur() / INTERVALLES as f64;
                Graduation {
                    position_px: i as f32 * self.hauteur_px / INTERVALLES as f32,
                    valeur,
                    texte: format_sci(valeur),
                }
            })
            .collect()
    }
}

/// Notation scientifique à 2 décimales, exposant signé sur 2 chiffres : `1.50e+03`.
pub fn format_sci(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let brut = format!("{v:.2e}"); // ex: "1.50e3", "-2.00e-4"
    let Some((mantisse, exposant)) = brut.split_once('e') else {
        return brut;
    };
    let (signe, chiffres) = match exposant.strip_prefix('-') {
        Some(c) => ('-', c),
        None => ('+', exposant),
    };
    format!("{mantisse}e{signe}{chiffres:0>2}")
}
