//! Tests scientifiques (campagne) : scénarios bout à bout du noyau.
//!
//! - précédence, associativité, parenthèses
//! - asymétrie '(' non fermée (échec à l'évaluation) / ')' orpheline (échec à la compilation)
//! - convergence de l'estimation (graine fixe, tolérance statistique)
//! - tracé : jamais de point hors domaine
//! - erreurs de compilation : aucun tirage n'a lieu

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::erreurs::{ErreurAire, ErreurCompilation, ErreurEvaluation};
use super::{compile, estimate_area, estimer, evaluate, sample_curve, Domaine};

fn eval_ok(expr: &str, x: f64) -> f64 {
    let p = compile(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    evaluate(&p, x).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Compilation + évaluation ------------------------ */

#[test]
fn sci_precedence() {
    for x in [-1.0, 0.0, 7.25] {
        assert_eq!(eval_ok("2 + 3 * 4", x), 14.0);
    }
}

#[test]
fn sci_puissance_associative_a_gauche() {
    // Comportement conservé : "2 ^ 3 ^ 2" = (2^3)^2 = 64, PAS 2^(3^2) = 512.
    assert_eq!(eval_ok("2 ^ 3 ^ 2", 0.0), 64.0);
    assert_ne!(eval_ok("2 ^ 3 ^ 2", 0.0), 512.0);
}

#[test]
fn sci_parentheses() {
    assert_eq!(eval_ok("( 2 + 3 ) * 4", 0.0), 20.0);
    assert_eq!(eval_ok("( ( 1 + 1 ) * ( x + 1 ) ) ^ 2", 2.0), 36.0);
}

#[test]
fn sci_polynome() {
    // x^2 - 3x + 2 = (x-1)(x-2)
    for x in [-2.0, 0.5, 1.0, 2.0, 10.0] {
        let attendu = (x - 1.0) * (x - 2.0);
        let v = eval_ok("x ^ 2 - 3 * x + 2", x);
        assert!((v - attendu).abs() < 1e-9, "x={x} v={v}");
    }
}

#[test]
fn sci_ouvrante_non_fermee() {
    // compile : OK ; évaluation : échec déterministe
    let p = compile("( 1 + 2").expect("'(' non fermée ne doit pas échouer à la compilation");
    for _ in 0..3 {
        assert_eq!(
            evaluate(&p, 0.0),
            Err(ErreurEvaluation::ParenthesesNonFermees { ouvrantes: 1 })
        );
    }
}

#[test]
fn sci_fermante_orpheline() {
    assert!(matches!(
        compile("1 + )"),
        Err(ErreurCompilation::ParentheseFermanteOrpheline { .. })
    ));
}

#[test]
fn sci_operateur_inconnu() {
    assert!(matches!(
        compile("x % 2"),
        Err(ErreurCompilation::JetonInconnu { .. })
    ));
}

/* ------------------------ Estimation ------------------------ */

#[test]
fn sci_convergence_triangle() {
    // aire exacte entre y = x et y = 10 sur [0,10]² : 50
    let d = Domaine::new(0.0, 10.0, 0.0, 10.0).unwrap();
    let f1 = compile("x").unwrap();
    let f2 = compile("10").unwrap();
    for graine in [1, 2, 3] {
        let mut rng = ChaCha8Rng::seed_from_u64(graine);
        let aire = estimate_area(&f1, &f2, &d, 100_000, &mut rng).unwrap();
        assert!((aire - 50.0).abs() < 1.0, "graine={graine} aire={aire}");
    }
}

#[test]
fn sci_parabole() {
    // ∫0^1 x^2 dx = 1/3
    let d = Domaine::new(0.0, 1.0, 0.0, 1.0).unwrap();
    let f1 = compile("x ^ 2").unwrap();
    let f2 = compile("0").unwrap();
    let e = estimer(&f1, &f2, &d, 200_000, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
    assert!((e.aire - 1.0 / 3.0).abs() < 6.0 * e.ecart_type, "{e:?}");
}

#[test]
fn sci_erreur_plus_petite_avec_plus_de_points() {
    let d = Domaine::new(0.0, 10.0, 0.0, 10.0).unwrap();
    let f1 = compile("x").unwrap();
    let f2 = compile("10").unwrap();
    let petit = estimer(&f1, &f2, &d, 1_000, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
    let grand = estimer(&f1, &f2, &d, 100_000, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
    assert!(grand.ecart_type < petit.ecart_type);
}

#[test]
fn sci_compilation_echoue_avant_tout_tirage() {
    // pipeline appelant : compile d'abord, ne tire rien si échec
    let mut tirages = 0;
    let resultat = (|| -> Result<f64, ErreurAire> {
        let f1 = compile("x +")?;
        let f2 = compile("1 + )")?;
        let d = Domaine::new(0.0, 1.0, 0.0, 1.0)?;
        let e = super::estimer_avec(&f1, &f2, &d, 10, &mut ChaCha8Rng::seed_from_u64(0), |_, _, _| {
            tirages += 1
        })?;
        Ok(e.aire)
    })();
    assert!(matches!(resultat, Err(ErreurAire::Compilation(_))));
    assert_eq!(tirages, 0);
}

/* ------------------------ Tracé ------------------------ */

#[test]
fn sci_trace_dans_le_domaine() {
    let d = Domaine::new(-3.0, 3.0, -2.0, 2.0).unwrap();
    for expr in ["x", "x ^ 2 - 1", "1 / x", "0 - x ^ 3"] {
        let f = compile(expr).unwrap();
        let mut n = 0usize;
        sample_curve(&f, &d, |x, y| {
            n += 1;
            assert!((d.x_min()..=d.x_max()).contains(&x), "{expr}: x={x}");
            assert!((d.y_min()..=d.y_max()).contains(&y), "{expr}: y={y}");
        })
        .unwrap_or_else(|e| panic!("{expr}: {e}"));
        assert!(n > 0, "{expr}: aucun point");
    }
}
