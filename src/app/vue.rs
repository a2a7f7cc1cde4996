// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Panneau gauche : formules, domaine, points, graine, actions
// - Zone de tracé : axes gradués, tirages (vert = dedans, gris = dehors),
//   f1 en rouge, f2 en bleu
// - Enter dans un champ formule = lancer

use eframe::egui;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aire_mc::noyau::cadre::{Cadre, COTE_DEFAUT};
use aire_mc::noyau::{compile, estimer_avec, sample_curve_borne, Domaine, ErreurAire};

use super::etat::{AppAire, Demarche, Parametres, Resultat, Tirage, PASSES_MAX, POINTS_MAX};

const COULEUR_DEDANS: egui::Color32 = egui::Color32::from_rgb(0, 170, 0);
const COULEUR_DEHORS: egui::Color32 = egui::Color32::GRAY;
const COULEUR_F1: egui::Color32 = egui::Color32::RED;
const COULEUR_F2: egui::Color32 = egui::Color32::BLUE;

/// Pipeline complet : compile (f1, f2) -> domaine -> estimation -> tracé des deux courbes.
///
/// Compilation et domaine sont vérifiés AVANT le premier tirage : en cas
/// d'erreur, aucun point n'est produit.
pub fn executer(p: &Parametres) -> Result<(Resultat, Demarche), ErreurAire> {
    let f1 = compile(&p.f1)?;
    let f2 = compile(&p.f2)?;
    let domaine = Domaine::new(p.x_min, p.x_max, p.y_min, p.y_max)?;

    let mut rng = ChaCha8Rng::seed_from_u64(p.graine);
    let mut tirages = Vec::with_capacity(p.points as usize);
    let estimation = estimer_avec(&f1, &f2, &domaine, p.points, &mut rng, |x, y, dedans| {
        tirages.push(Tirage { x, y, dedans })
    })?;

    let mut courbe1 = Vec::new();
    let rapport1 = sample_curve_borne(&f1, &domaine, Some(p.passes_max), |x, y| {
        courbe1.push((x, y))
    })?;
    let mut courbe2 = Vec::new();
    let rapport2 = sample_curve_borne(&f2, &domaine, Some(p.passes_max), |x, y| {
        courbe2.push((x, y))
    })?;

    let demarche = Demarche {
        rpn1: f1.to_string(),
        rpn2: f2.to_string(),
        note: format!(
            "Pipeline: jetons → RPN → tirages ({}) → aire = dedans/N × aire du rectangle ; tracé: {} + {} passes.",
            estimation.total, rapport1.passes, rapport2.passes
        ),
    };

    let resultat = Resultat {
        domaine,
        estimation,
        tirages,
        courbe1,
        courbe2,
        rapport1,
        rapport2,
    };

    Ok((resultat, demarche))
}

impl AppAire {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_max_width(320.0);
                ui.heading("Aire entre deux courbes");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });

            ui.separator();

            self.ui_trace(ui);
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Un espace entre chaque nombre / opérateur / parenthèse.");

        let mut lancer = false;
        lancer |= Self::champ_formule(ui, "f1 (rouge) :", "f1_edit", &mut self.parametres.f1);
        lancer |= Self::champ_formule(ui, "f2 (bleu) :", "f2_edit", &mut self.parametres.f2);

        ui.add_space(6.0);

        egui::Grid::new("domaine_grille")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let p = &mut self.parametres;
                ui.label("x min");
                ui.add(egui::DragValue::new(&mut p.x_min).speed(0.1));
                ui.label("x max");
                ui.add(egui::DragValue::new(&mut p.x_max).speed(0.1));
                ui.end_row();

                ui.label("y min");
                ui.add(egui::DragValue::new(&mut p.y_min).speed(0.1));
                ui.label("y max");
                ui.add(egui::DragValue::new(&mut p.y_max).speed(0.1));
                ui.end_row();

                ui.label("points");
                ui.add(
                    egui::DragValue::new(&mut p.points)
                        .speed(100)
                        .range(1..=POINTS_MAX),
                );
                ui.label("graine");
                ui.add(egui::DragValue::new(&mut p.graine).speed(1));
                ui.end_row();

                ui.label("passes");
                ui.add(egui::DragValue::new(&mut p.passes_max).range(1..=PASSES_MAX));
                ui.end_row();
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui
                .add_sized([90.0, 30.0], egui::Button::new("Estimer"))
                .clicked()
            {
                lancer = true;
            }
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("CLR"))
                .on_hover_text("Efface résultat + erreur + démarche")
                .clicked()
            {
                self.clear_resultats();
            }
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Paramètres par défaut")
                .clicked()
            {
                self.reset_total();
            }
        });

        if lancer {
            self.lancer_via_noyau();
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Retourne true si Enter a été pressé dans le champ.
    fn champ_formule(ui: &mut egui::Ui, titre: &str, id: &str, texte: &mut String) -> bool {
        ui.label(titre);
        let resp = ui.add(
            egui::TextEdit::singleline(texte)
                .desired_width(ui.available_width())
                .hint_text("Ex: ( x - 1 ) ^ 2 / 2")
                .id_salt(id)
                .code_editor(),
        );
        resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Estimation :");
        match &self.resultat {
            Some(r) => {
                let e = &r.estimation;
                ui.monospace(format!("aire ≈ {:.6}", e.aire));
                ui.monospace(format!("± {:.6} (1 écart-type)", e.ecart_type));
                ui.monospace(format!(
                    "{}/{} points dedans ({:.2} %)",
                    e.dedans,
                    e.total,
                    100.0 * e.proportion()
                ));
                for (nom, rapport) in [("f1", &r.rapport1), ("f2", &r.rapport2)] {
                    if rapport.lacune {
                        ui.colored_label(
                            ui.visuals().warn_fg_color,
                            format!("{nom} : tracé incomplet après {} passes", rapport.passes),
                        );
                    }
                }
            }
            None => {
                ui.monospace("indisponible");
            }
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("RPN f1 :");
                ui.monospace(&self.demarche.rpn1);
                ui.label("RPN f2 :");
                ui.monospace(&self.demarche.rpn2);
                ui.label("Note :");
                ui.label(&self.demarche.note);
            });
    }

    fn ui_trace(&self, ui: &mut egui::Ui) {
        let (reponse, painter) =
            ui.allocate_painter(egui::vec2(COTE_DEFAUT, COTE_DEFAUT), egui::Sense::hover());
        let rect = reponse.rect;
        painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

        let Some(r) = &self.resultat else {
            return;
        };

        let cadre = Cadre::new(r.domaine, rect.width(), rect.height());
        let vers_ecran = |x: f64, y: f64| {
            let (px, py) = cadre.vers_pixel(x, y);
            rect.min + egui::vec2(px, py)
        };
        let texte = ui.visuals().text_color();

        // axes gradués
        for g in cadre.graduations_x() {
            let x = rect.min.x + g.position_px;
            painter.line_segment(
                [egui::pos2(x, rect.min.y), egui::pos2(x, rect.min.y + 5.0)],
                egui::Stroke::new(1.0, texte),
            );
            painter.text(
                egui::pos2(x, rect.min.y + 8.0),
                egui::Align2::CENTER_TOP,
                &g.texte,
                egui::FontId::monospace(10.0),
                texte,
            );
        }
        for g in cadre.graduations_y() {
            let y = rect.min.y + g.position_px;
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.min.x + 5.0, y)],
                egui::Stroke::new(1.0, texte),
            );
            painter.text(
                egui::pos2(rect.min.x + 8.0, y),
                egui::Align2::LEFT_CENTER,
                &g.texte,
                egui::FontId::monospace(10.0),
                texte,
            );
        }

        let point = |p: egui::Pos2, couleur: egui::Color32| {
            painter.rect_filled(
                egui::Rect::from_center_size(p, egui::vec2(1.5, 1.5)),
                0.0,
                couleur,
            );
        };

        for t in &r.tirages {
            let couleur = if t.dedans { COULEUR_DEDANS } else { COULEUR_DEHORS };
            point(vers_ecran(t.x, t.y), couleur);
        }
        for &(x, y) in &r.courbe1 {
            point(vers_ecran(x, y), COULEUR_F1);
        }
        for &(x, y) in &r.courbe2 {
            point(vers_ecran(x, y), COULEUR_F2);
        }
    }

    /// Lance le pipeline via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn lancer_via_noyau(&mut self) {
        self.parametres = self.parametres.clone().borner();
        info!(
            "lancement: f1={:?} f2={:?} points={} graine={}",
            self.parametres.f1, self.parametres.f2, self.parametres.points, self.parametres.graine
        );

        match executer(&self.parametres) {
            Ok((resultat, demarche)) => self.set_resultat(resultat, demarche),
            Err(e) => {
                log::warn!("échec: {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}
