//! Tests de propriétés (proptest).
//!
//! - compile + evaluate == évaluation récursive descendante de référence
//! - le tracé n'émet jamais de point hors du domaine
//! - l'estimation reste dans [0, aire du rectangle]

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{compile, estimer, evaluate, sample_curve_borne, Domaine};

/* ------------------------ Référence : descente récursive ------------------------ */

// expr      := terme (('+' | '-') terme)*
// terme     := puissance (('*' | '/') puissance)*
// puissance := atome ('^' atome)*          (gauche à droite, comme le compilateur)
// atome     := nombre | 'x' | '(' expr ')'
struct Reference<'a> {
    jetons: Vec<&'a str>,
    pos: usize,
    x: f64,
}

impl<'a> Reference<'a> {
    fn evaluer(s: &'a str, x: f64) -> f64 {
        let mut r = Reference {
            jetons: s.split_whitespace().collect(),
            pos: 0,
            x,
        };
        let v = r.expr();
        assert_eq!(r.pos, r.jetons.len(), "référence: jetons restants dans {s:?}");
        v
    }

    fn suivant(&self) -> Option<&'a str> {
        self.jetons.get(self.pos).copied()
    }

    fn expr(&mut self) -> f64 {
        let mut v = self.terme();
        while let Some(op @ ("+" | "-")) = self.suivant() {
            self.pos += 1;
            let d = self.terme();
            v = if op == "+" { v + d } else { v - d };
        }
        v
    }

    fn terme(&mut self) -> f64 {
        let mut v = self.puissance();
        while let Some(op @ ("*" | "/")) = self.suivant() {
            self.pos += 1;
            let d = self.puissance();
            v = if op == "*" { v * d } else { v / d };
        }
        v
    }

    fn puissance(&mut self) -> f64 {
        let mut v = self.atome();
        while let Some("^") = self.suivant() {
            self.pos += 1;
            let d = self.atome();
            v = v.powf(d);
        }
        v
    }

    fn atome(&mut self) -> f64 {
        let t = self.suivant().expect("référence: atome attendu");
        self.pos += 1;
        match t {
            "(" => {
                let v = self.expr();
                assert_eq!(self.suivant(), Some(")"));
                self.pos += 1;
                v
            }
            "x" => self.x,
            _ => t.parse().expect("référence: nombre attendu"),
        }
    }
}

/* ------------------------ Générateurs ------------------------ */

fn feuille() -> impl Strategy<Value = String> {
    prop_oneof![
        (-9i32..10).prop_map(|n| n.to_string()),
        (0u32..40).prop_map(|n| format!("{n}.5")),
        Just("x".to_string()),
    ]
}

fn operateur() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("^"), Just("*"), Just("/"), Just("+"), Just("-")]
}

/// Expressions bien formées, jetons séparés par des espaces.
fn expression() -> impl Strategy<Value = String> {
    feuille().prop_recursive(4, 32, 4, |interne| {
        prop_oneof![
            (
                interne.clone(),
                proptest::collection::vec((operateur(), interne.clone()), 1..4)
            )
                .prop_map(|(tete, reste)| {
                    let mut s = tete;
                    for (op, e) in reste {
                        s.push(' ');
                        s.push_str(op);
                        s.push(' ');
                        s.push_str(&e);
                    }
                    s
                }),
            interne.prop_map(|e| format!("( {e} )")),
        ]
    })
}

fn meme_valeur(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

proptest! {
    #[test]
    fn compile_evalue_comme_la_reference(
        expr in expression(),
        x in prop_oneof![Just(0.0), Just(1.0), Just(-2.5), -50.0f64..50.0],
    ) {
        let programme = compile(&expr).map_err(|e| TestCaseError::fail(format!("{expr:?}: {e}")))?;
        let obtenu = evaluate(&programme, x).map_err(|e| TestCaseError::fail(format!("{expr:?}: {e}")))?;
        let attendu = Reference::evaluer(&expr, x);
        prop_assert!(meme_valeur(obtenu, attendu), "{expr:?} x={x}: {obtenu} != {attendu}");
    }

    #[test]
    fn trace_reste_dans_le_domaine(
        pente in -20.0f64..20.0,
        origine in -5.0f64..5.0,
        x_min in -10.0f64..0.0,
        largeur in 0.1f64..20.0,
        y_min in -10.0f64..0.0,
        hauteur in 0.1f64..20.0,
    ) {
        let d = Domaine::new(x_min, x_min + largeur, y_min, y_min + hauteur).unwrap();
        let f = compile(&format!("{pente} * x + {origine} + x ^ 2 / 10")).unwrap();
        let mut hors = Vec::new();
        sample_curve_borne(&f, &d, Some(6), |x, y| {
            let ok = x >= d.x_min() && x <= d.x_max() && d.contient_y(y);
            if !ok {
                hors.push((x, y));
            }
        })
        .unwrap();
        prop_assert!(hors.is_empty(), "points hors domaine: {hors:?}");
    }

    #[test]
    fn estimation_bornee(graine in any::<u64>(), decalage in -5.0f64..5.0) {
        let d = Domaine::new(-1.0, 2.0, -3.0, 3.0).unwrap();
        let f1 = compile(&format!("x * x + {decalage}")).unwrap();
        let f2 = compile("1 - x").unwrap();
        let e = estimer(&f1, &f2, &d, 300, &mut ChaCha8Rng::seed_from_u64(graine)).unwrap();
        prop_assert!(e.dedans <= e.total);
        prop_assert!(e.aire >= 0.0 && e.aire <= d.aire());
    }
}
