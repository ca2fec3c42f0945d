//! Settings panel for the scene (requires the `egui` feature).

use crate::config::{BUBBLE_PERIOD_RANGE, SMOKE_PERIOD_RANGE};
use crate::particle::ParticleKind;
use crate::scene::Scene;
use egui::Ui;

/// Draw display toggles and spawn period sliders.
///
/// Returns `true` if any setting changed.
pub fn settings_panel(ui: &mut Ui, scene: &mut Scene) -> bool {
    let mut changed = false;

    let display = scene.display_mut();
    changed |= ui.checkbox(&mut display.frame, "Frame").changed();
    changed |= ui.checkbox(&mut display.wireframe, "Display wireframe").changed();
    changed |= ui
        .checkbox(&mut display.transparent_billboards, "Transparent billboard")
        .changed();

    let mut bubble = scene.spawn_period(ParticleKind::Bubble);
    if ui
        .add(egui::Slider::new(&mut bubble, BUBBLE_PERIOD_RANGE).text("Bubble spawn time"))
        .changed()
    {
        scene.set_spawn_period(ParticleKind::Bubble, bubble);
        changed = true;
    }

    let mut smoke = scene.spawn_period(ParticleKind::Smoke);
    if ui
        .add(egui::Slider::new(&mut smoke, SMOKE_PERIOD_RANGE).text("Smoke spawn time"))
        .changed()
    {
        scene.set_spawn_period(ParticleKind::Smoke, smoke);
        changed = true;
    }

    let display = scene.display_mut();
    changed |= ui.checkbox(&mut display.display_bubbles, "Display sphere").changed();
    changed |= ui.checkbox(&mut display.display_billboards, "Display billboard").changed();

    ui.separator();
    let store = scene.store();
    ui.label(format!(
        "Bubbles: {}  Smoke: {}",
        store.bubbles().len(),
        store.billboards().len()
    ));

    changed
}
