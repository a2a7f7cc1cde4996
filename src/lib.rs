//! Aire entre deux courbes — noyau réutilisable (binaire : src/main.rs).

pub mod noyau;
