use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontFamily, FontId, Ui};

use super::gradient::{stop_list, StopEdit};
use super::PanelContext;
use crate::css::{CodeMode, GradientKind};
use crate::generator::Generator;
use crate::renderer::{parse_fill, sample_stops, Fill};
use crate::tools::gradient_text::{FONT_FAMILIES, FONT_WEIGHTS, TEXT_PRESETS};
use crate::tools::GradientTextTool;
use crate::widgets::{keyword_combo, numeric_field, text_field, CodeBlock};

/// Lays `text` out with each glyph colored by its position along the
/// gradient. egui has no background clip, so this stands in for it.
fn gradient_job(text: &str, fill: Option<&Fill>, font: FontId) -> LayoutJob {
    let count = text.chars().count().max(1);
    let mut job = LayoutJob::default();
    for (i, ch) in text.chars().enumerate() {
        let t = if count == 1 { 0.5 } else { i as f32 / (count - 1) as f32 };
        let color = match fill {
            Some(Fill::Solid(color)) => *color,
            Some(Fill::Linear { stops, .. }) | Some(Fill::Radial { stops }) => sample_stops(stops, t),
            None => Color32::GRAY,
        };
        let mut buf = [0u8; 4];
        job.append(ch.encode_utf8(&mut buf), 0.0, TextFormat::simple(font.clone(), color));
    }
    job
}

fn font_for(family: &str, size: f32) -> FontId {
    if family.contains("monospace") {
        FontId::new(size, FontFamily::Monospace)
    } else {
        FontId::new(size, FontFamily::Proportional)
    }
}

pub(super) fn gradient_text_panel(ui: &mut Ui, tool: &mut GradientTextTool, cx: &mut PanelContext<'_>) {
    egui::Frame::none()
        .fill(ui.visuals().extreme_bg_color)
        .rounding(8.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            let fill = parse_fill(&tool.background());
            let job = gradient_job(&tool.text, fill.as_ref(), font_for(&tool.font_family, tool.font_size));
            ui.vertical_centered(|ui| ui.label(job));
        });
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        ui.label("Presets:");
        for preset in TEXT_PRESETS {
            if ui.button(preset.name).clicked() {
                tool.load_preset(preset);
            }
        }
    });

    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.strong("Text");
        text_field(ui, "Text", &mut tool.text);
        numeric_field(ui, "Font size", &mut tool.font_size, 12.0..=120.0, cx.policy);
        egui::ComboBox::from_id_salt("gradient-text-weight")
            .selected_text(tool.font_weight.to_string())
            .show_ui(ui, |ui| {
                for weight in FONT_WEIGHTS {
                    ui.selectable_value(&mut tool.font_weight, weight, weight.to_string());
                }
            });
        egui::ComboBox::from_id_salt("gradient-text-family")
            .selected_text(tool.font_family.clone())
            .show_ui(ui, |ui| {
                for family in FONT_FAMILIES {
                    ui.selectable_value(&mut tool.font_family, family.to_owned(), family);
                }
            });

        let ui = &mut columns[1];
        ui.horizontal(|ui| {
            ui.selectable_value(&mut tool.kind, GradientKind::Linear, "Linear");
            ui.selectable_value(&mut tool.kind, GradientKind::Radial, "Radial");
        });
        if tool.kind == GradientKind::Linear {
            keyword_combo(ui, "Direction", &mut tool.direction);
        }
        ui.horizontal(|ui| {
            ui.strong("Color Stops");
            if ui.add_enabled(tool.can_add_stop(), egui::Button::new("+ Add Stop")).clicked() {
                tool.add_stop();
            }
        });
        for edit in stop_list(ui, tool.stops(), tool.can_remove_stop(), cx) {
            match edit {
                StopEdit::Update(id, field) => {
                    tool.update_stop(id, field);
                }
                StopEdit::Remove(id) => {
                    tool.remove_stop(id);
                }
            }
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        for mode in [CodeMode::Css, CodeMode::Tailwind] {
            ui.selectable_value(&mut tool.code_mode, mode, mode.label());
        }
    });
    let (key, title) = match tool.code_mode {
        CodeMode::Css => ("gradient-text-css", "CSS Code"),
        CodeMode::Tailwind => ("gradient-text-tailwind", "Tailwind Markup"),
    };
    CodeBlock::new(key, &tool.emit()).title(title).show(ui, cx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_follow_gradient() {
        let fill = Fill::Linear {
            direction: egui::vec2(1.0, 0.0),
            stops: vec![(0.0, Color32::RED), (1.0, Color32::BLUE)],
        };
        let job = gradient_job("abc", Some(&fill), FontId::proportional(20.0));
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[0].format.color, Color32::RED);
        assert_eq!(job.sections[2].format.color, Color32::BLUE);
    }
}
