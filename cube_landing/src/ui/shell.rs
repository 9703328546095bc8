//! Page shell: loading overlay, social links, and the name label.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::camera::{OrbitInputBlocked, OrbitInputGate};

const BACKDROP: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const TRACK: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const LINK_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(26, 26, 26, 26);
const SUBTITLE: egui::Color32 = egui::Color32::from_rgba_premultiplied(179, 179, 179, 179);
const CORNER_MARGIN: f32 = 24.0;

/// Set once the scene is worth showing; the loading overlay covers it until then.
#[derive(Resource, Debug, Default)]
pub struct SceneReadiness {
    pub loaded: bool,
}

#[derive(Clone, Debug)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: String,
    pub url: String,
}

/// Static text and links drawn over the scene.
#[derive(Resource, Clone, Debug)]
pub struct ShellContent {
    pub title: String,
    pub subtitle: String,
    pub links: Vec<SocialLink>,
}

impl Default for ShellContent {
    fn default() -> Self {
        let link = |icon, label: &str, url: &str| SocialLink {
            icon,
            label: label.to_string(),
            url: url.to_string(),
        };
        Self {
            title: "AYUSH DUBEY".to_string(),
            subtitle: "Developer & Designer".to_string(),
            links: vec![
                link("↗", "Portfolio", "https://ayushdubey23.vercel.app/"),
                link(
                    "in",
                    "LinkedIn",
                    "https://www.linkedin.com/in/ayush-dubey-508196331/",
                ),
                link("◎", "Instagram", "https://www.instagram.com/ayushhdubey/"),
            ],
        }
    }
}

pub fn shell_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .init_resource::<SceneReadiness>()
        .init_resource::<ShellContent>()
        .init_resource::<OrbitInputBlocked>()
        .add_systems(
            Update,
            (shell_overlay_system, block_orbit_input_system)
                .chain()
                .in_set(OrbitInputGate),
        );
}

fn shell_overlay_system(
    mut contexts: EguiContexts,
    readiness: Res<SceneReadiness>,
    content: Res<ShellContent>,
) {
    let ctx = contexts.ctx_mut();
    if readiness.loaded {
        social_links(ctx, &content);
        name_label(ctx, &content);
    } else {
        loading_screen(ctx, &content);
    }
}

fn loading_screen(ctx: &egui::Context, content: &ShellContent) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(BACKDROP))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let top = (ui.available_height() / 2.0 - 80.0).max(0.0);
                ui.add_space(top);
                ui.add(egui::Spinner::new().size(48.0).color(ACCENT));
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(&content.title)
                        .size(36.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(32.0);
                ui.visuals_mut().extreme_bg_color = TRACK;
                ui.add(
                    egui::ProgressBar::new(1.0)
                        .desired_width(256.0)
                        .desired_height(4.0)
                        .fill(ACCENT)
                        .animate(true),
                );
            });
        });
}

fn social_links(ctx: &egui::Context, content: &ShellContent) {
    egui::Area::new(egui::Id::new("social_links"))
        .anchor(egui::Align2::RIGHT_TOP, [-CORNER_MARGIN, CORNER_MARGIN])
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 16.0;
            for link in &content.links {
                egui::Frame::default()
                    .fill(LINK_FILL)
                    .inner_margin(egui::Margin::symmetric(16, 8))
                    .corner_radius(egui::CornerRadius::same(8))
                    .show(ui, |ui| {
                        let text = egui::RichText::new(format!("{}  {}", link.icon, link.label))
                            .size(14.0)
                            .color(egui::Color32::WHITE);
                        ui.add(
                            egui::Hyperlink::from_label_and_url(text, &link.url)
                                .open_in_new_tab(true),
                        );
                    });
            }
        });
}

fn name_label(ctx: &egui::Context, content: &ShellContent) {
    egui::Area::new(egui::Id::new("name_label"))
        .anchor(egui::Align2::LEFT_BOTTOM, [CORNER_MARGIN, -CORNER_MARGIN])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(&content.title)
                    .size(24.0)
                    .strong()
                    .extra_letter_spacing(1.5)
                    .color(egui::Color32::WHITE),
            );
            ui.label(egui::RichText::new(&content.subtitle).size(14.0).color(SUBTITLE));
        });
}

fn block_orbit_input_system(mut contexts: EguiContexts, mut blocked: ResMut<OrbitInputBlocked>) {
    let ctx = contexts.ctx_mut();
    blocked.0 = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_starts_hidden() {
        assert!(!SceneReadiness::default().loaded);
    }

    #[test]
    fn default_links_are_https() {
        let content = ShellContent::default();
        let labels: Vec<&str> = content.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Portfolio", "LinkedIn", "Instagram"]);
        for link in &content.links {
            let url = url::Url::parse(&link.url).unwrap();
            assert_eq!(url.scheme(), "https");
        }
    }
}
