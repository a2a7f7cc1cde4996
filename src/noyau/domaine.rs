// src/noyau/domaine.rs

use super::erreurs::ErreurDomaine;

/// Rectangle [x_min, x_max] × [y_min, y_max], toujours non dégénéré.
///
/// Seul `Domaine::new` construit une valeur : x_min < x_max et y_min < y_max
/// sont garantis ensuite (NaN refusé), ainsi que largeur, hauteur et aire finies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domaine {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Domaine {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ErreurDomaine> {
        // forme niée : NaN => erreur
        if !(x_min < x_max) {
            return Err(ErreurDomaine::BornesX {
                min: x_min,
                max: x_max,
            });
        }
        if !(y_min < y_max) {
            return Err(ErreurDomaine::BornesY {
                min: y_min,
                max: y_max,
            });
        }
        let d = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        // bornes infinies ou écart qui déborde
        if !d.aire().is_finite() {
            return Err(ErreurDomaine::NonFini {
                largeur: d.largeur(),
                hauteur: d.hauteur(),
            });
        }
        Ok(d)
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }
    pub fn x_max(&self) -> f64 {
        self.x_max
    }
    pub fn y_min(&self) -> f64 {
        self.y_min
    }
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn largeur(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn hauteur(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn aire(&self) -> f64 {
        self.largeur() * self.hauteur()
    }

    /// Bornes incluses ; NaN => false.
    pub fn contient_y(&self, y: f64) -> bool {
        self.y_min <= y && y <= self.y_max
    }
}
