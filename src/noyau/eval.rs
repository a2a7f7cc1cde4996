//! Noyau — programme postfixé + évaluation
//!
//! Un `Programme` est produit une fois par formule (voir `rpn::compile`) puis
//! réévalué pour chaque abscisse ; il n'est jamais modifié après compilation.

use std::fmt;

use super::erreurs::ErreurEvaluation;
use super::jetons::{format_tokens, Jeton};

#[derive(Clone, Debug, PartialEq)]
pub struct Programme {
    jetons: Vec<Jeton>,
    // '(' jamais refermées dans la source
    ouvrantes: usize,
}

impl Programme {
    pub(super) fn nouveau(jetons: Vec<Jeton>, ouvrantes: usize) -> Self {
        Self { jetons, ouvrantes }
    }

    /// Jetons en ordre postfixé (jamais de parenthèses).
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn ouvrantes_non_fermees(&self) -> usize {
        self.ouvrantes
    }

    /// Exécute le programme avec `x` comme valeur de la variable.
    ///
    /// NaN et ±∞ sont des valeurs ordinaires (division par zéro non piégée).
    pub fn evaluer(&self, x: f64) -> Result<f64, ErreurEvaluation> {
        if self.ouvrantes > 0 {
            return Err(ErreurEvaluation::ParenthesesNonFermees {
                ouvrantes: self.ouvrantes,
            });
        }

        let mut pile: Vec<f64> = Vec::with_capacity(8);

        for (position, jeton) in self.jetons.iter().enumerate() {
            match *jeton {
                Jeton::Nombre(v) => pile.push(v),
                Jeton::Variable => pile.push(x),
                Jeton::Op(op) => {
                    // b = dernier empilé (opérande droite)
                    let (Some(b), Some(a)) = (pile.pop(), pile.pop()) else {
                        return Err(ErreurEvaluation::PileInsuffisante {
                            operateur: op,
                            position,
                        });
                    };
                    pile.push(op.appliquer(a, b));
                }
                Jeton::ParGauche | Jeton::ParDroite => {
                    debug_assert!(false, "parenthèse dans un programme postfixé (position {position})");
                }
            }
        }

        match pile.as_slice() {
            [v] => Ok(*v),
            _ => Err(ErreurEvaluation::ValeursRestantes {
                restantes: pile.len(),
            }),
        }
    }
}

impl fmt::Display for Programme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tokens(&self.jetons))
    }
}

/// API publique : `evaluate(programme, x)`.
pub fn evaluate(programme: &Programme, x: f64) -> Result<f64, ErreurEvaluation> {
    programme.evaluer(x)
}
