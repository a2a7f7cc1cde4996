// src/app.rs
//
// Aire entre deux courbes — module App (racine)
// ---------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppAire (pour main.rs: use crate::app::AppAire;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB), y compris la sauvegarde des paramètres

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppAire;`
pub use etat::AppAire;

use eframe::egui;

impl eframe::App for AppAire {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer le résultat (comme bouton "CLR").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_resultats();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.ui(ui); // méthode publique (dans vue.rs)
                });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.parametres);
    }
}
