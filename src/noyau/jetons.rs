// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ErreurCompilation;

/// Symbole de la variable libre.
pub const VARIABLE: &str = "x";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Puissance, // ^
    Fois,      // *
    Divise,    // /
    Plus,      // +
    Moins,     // -
}

impl Operateur {
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "^" => Some(Operateur::Puissance),
            "*" => Some(Operateur::Fois),
            "/" => Some(Operateur::Divise),
            "+" => Some(Operateur::Plus),
            "-" => Some(Operateur::Moins),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Puissance => "^",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Plus => "+",
            Operateur::Moins => "-",
        }
    }

    /// `a op b` en flottant IEEE : pas de piège sur la division par zéro.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Puissance => a.powf(b),
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Variable,
    Op(Operateur),
    ParGauche,
    ParDroite,
}

/// Tokenize une formule dont les jetons sont séparés par des espaces.
///
/// Chaque morceau est classé une seule fois :
/// - `(` / `)`
/// - la variable `x`
/// - un opérateur `^ * / + -`
/// - sinon un nombre (tout ce que `f64::from_str` accepte : `-3`, `1e5`, `inf`...)
///
/// Un morceau qui n'est rien de tout ça donne `JetonInconnu`.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCompilation> {
    let mut out = Vec::new();

    for (position, morceau) in s.split_whitespace().enumerate() {
        let jeton = match morceau {
            "(" => Jeton::ParGauche,
            ")" => Jeton::ParDroite,
            _ if morceau == VARIABLE => Jeton::Variable,
            _ => {
                if let Some(op) = Operateur::depuis_symbole(morceau) {
                    Jeton::Op(op)
                } else {
                    let v: f64 = morceau.parse().map_err(|_| ErreurCompilation::JetonInconnu {
                        jeton: morceau.to_string(),
                        position,
                    })?;
                    Jeton::Nombre(v)
                }
            }
        };
        out.push(jeton);
    }

    if out.is_empty() {
        return Err(ErreurCompilation::EntreeVide);
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Variable => VARIABLE.to_string(),
            Jeton::Op(op) => op.symbole().to_string(),
            Jeton::ParGauche => "(".to_string(),
            Jeton::ParDroite => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
