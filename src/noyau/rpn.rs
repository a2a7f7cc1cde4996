// src/noyau/rpn.rs
//
// Shunting-yard -> programme postfixé (RPN)
//
// Règles:
// - Nombre / variable : sortie directe.
// - '(' : on empile un "plancher" = profondeur courante de la pile d'opérateurs.
// - ')' : on dépile les opérateurs au-dessus du plancher, puis on retire le plancher.
//         Le plancher de base (0) ne se retire jamais : ')' orpheline => erreur.
// - Opérateur : tant qu'on est au-dessus du plancher ET que rang(sommet) <= rang(entrant),
//               on sort le sommet. Donc égalité => gauche à droite, y compris pour '^'
//               ("2 ^ 3 ^ 2" = (2^3)^2).
// - Fin : on vide la pile. Une '(' jamais fermée ne fait PAS échouer la compilation ;
//         le programme la retient et c'est l'évaluation qui refuse.

use log::debug;

use super::erreurs::ErreurCompilation;
use super::eval::Programme;
use super::jetons::{format_tokens, tokenize, Jeton, Operateur};
use super::priorites::TablePriorites;

/// Compile avec la table standard `{^:1, *:2, /:2, +:3, -:3}`.
pub fn compile(expression: &str) -> Result<Programme, ErreurCompilation> {
    compile_avec(expression, &TablePriorites::standard())
}

pub fn compile_avec(
    expression: &str,
    table: &TablePriorites,
) -> Result<Programme, ErreurCompilation> {
    let jetons = tokenize(expression)?;
    let programme = to_rpn(&jetons, table)?;

    debug!(
        "compile {:?} -> jetons [{}] rpn [{}]",
        expression,
        format_tokens(&jetons),
        format_tokens(programme.jetons())
    );

    Ok(programme)
}

fn rang(table: &TablePriorites, op: Operateur) -> Result<u8, ErreurCompilation> {
    table
        .rang(op)
        .ok_or(ErreurCompilation::OperateurSansRang { operateur: op })
}

/// Convertit une suite de jetons en programme postfixé.
///
/// Exemple:
///   jetons: [ParGauche, Nombre(2), Op(+), Nombre(3), ParDroite, Op(*), Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Op(+), Nombre(4), Op(*)]
pub fn to_rpn(jetons: &[Jeton], table: &TablePriorites) -> Result<Programme, ErreurCompilation> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Operateur> = Vec::new();

    // planchers[0] = 0 : portée hors parenthèses
    let mut planchers: Vec<usize> = vec![0];

    for (position, jeton) in jetons.iter().copied().enumerate() {
        match jeton {
            Jeton::Nombre(_) | Jeton::Variable => out.push(jeton),

            Jeton::ParGauche => planchers.push(ops.len()),

            Jeton::ParDroite => {
                if planchers.len() < 2 {
                    return Err(ErreurCompilation::ParentheseFermanteOrpheline { position });
                }
                let plancher = planchers.pop().unwrap_or(0);
                out.extend(ops.drain(plancher..).rev().map(Jeton::Op));
            }

            Jeton::Op(op) => {
                let r_entrant = rang(table, op)?;
                let plancher = planchers.last().copied().unwrap_or(0);

                while ops.len() > plancher {
                    let Some(&sommet) = ops.last() else { break };
                    if rang(table, sommet)? <= r_entrant {
                        ops.pop();
                        out.push(Jeton::Op(sommet));
                    } else {
                        break;
                    }
                }

                ops.push(op);
            }
        }
    }

    // vide la pile ops (ordre de pile)
    out.extend(ops.drain(..).rev().map(Jeton::Op));

    let ouvrantes = planchers.len() - 1;
    Ok(Programme::nouveau(out, ouvrantes))
}
