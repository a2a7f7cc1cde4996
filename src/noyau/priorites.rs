// src/noyau/priorites.rs
//
// Table des priorités : opérateur -> rang (plus petit = plus liant).
// Valeur immuable passée explicitement au compilateur. Hors tests, seule la
// table standard existe ; les variantes servent à éprouver `compile_avec`.

use super::jetons::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TablePriorites {
    rangs: [Option<u8>; 5],
}

fn index(op: Operateur) -> usize {
    match op {
        Operateur::Puissance => 0,
        Operateur::Fois => 1,
        Operateur::Divise => 2,
        Operateur::Plus => 3,
        Operateur::Moins => 4,
    }
}

impl TablePriorites {
    /// Table vide : aucun opérateur n'a de rang.
    #[cfg(test)]
    pub(crate) const fn vide() -> Self {
        Self { rangs: [None; 5] }
    }

    /// `{^:1, *:2, /:2, +:3, -:3}`
    pub const fn standard() -> Self {
        Self {
            rangs: [Some(1), Some(2), Some(2), Some(3), Some(3)],
        }
    }

    #[cfg(test)]
    pub(crate) fn avec_rang(mut self, op: Operateur, rang: u8) -> Self {
        self.rangs[index(op)] = Some(rang);
        self
    }

    #[cfg(test)]
    pub(crate) fn sans(mut self, op: Operateur) -> Self {
        self.rangs[index(op)] = None;
        self
    }

    pub fn rang(&self, op: Operateur) -> Option<u8> {
        self.rangs[index(op)]
    }
}

impl Default for TablePriorites {
    fn default() -> Self {
        Self::standard()
    }
}
