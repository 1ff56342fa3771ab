use egui::{vec2, Align2, Color32, FontId, Sense, Stroke, Ui};

use super::PanelContext;
use crate::css::{StyleDescriptor, StyleProperty};
use crate::generator::Generator;
use crate::renderer::layout_flex;
use crate::tools::flexbox::FlexItem;
use crate::tools::FlexboxTool;
use crate::widgets::{color_field, keyword_combo, numeric_field, CodeBlock};

const CONTAINER_PADDING: f32 = 20.0;

pub(super) fn flexbox_panel(ui: &mut Ui, tool: &mut FlexboxTool, cx: &mut PanelContext<'_>) {
    preview(ui, tool, cx);
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        container_controls(&mut columns[0], tool, cx);
        item_controls(&mut columns[1], tool, cx);
    });

    ui.separator();
    CodeBlock::new("flexbox", &tool.emit()).show(ui, cx);
}

fn preview(ui: &mut Ui, tool: &mut FlexboxTool, cx: &PanelContext<'_>) {
    let width = ui.available_width().max(320.0);
    let (response, painter) = ui.allocate_painter(vec2(width, tool.height.max(120.0)), Sense::hover());
    let container = StyleDescriptor::new()
        .with(StyleProperty::BackgroundColor, tool.background.clone())
        .with(StyleProperty::BorderRadius, "8px");
    cx.renderer.paint_box(&painter, response.rect, &container);

    let content = response.rect.shrink(CONTAINER_PADDING);
    let clip = painter.with_clip_rect(response.rect);
    let shift = ui.input(|i| i.modifiers.shift);
    let mut clicked = None;
    for (id, rect) in layout_flex(content, tool) {
        let Some(item) = tool.items().iter().find(|item| item.id == id) else {
            continue;
        };
        cx.renderer.paint_box(&clip, rect, &item_style(item));
        clip.text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("Item {id}"),
            FontId::proportional(14.0),
            Color32::WHITE,
        );
        if tool.is_selected(id) {
            clip.rect_stroke(rect.expand(2.0), 6.0, Stroke::new(3.0, Color32::from_rgb(99, 102, 241)));
        }
        if ui.interact(rect, ui.id().with(("flex-item", id)), Sense::click()).clicked() {
            clicked = Some(id);
        }
    }
    if let Some(id) = clicked {
        tool.toggle_selection(id, shift);
    }
}

fn item_style(item: &FlexItem) -> StyleDescriptor {
    item.preview().with(StyleProperty::BorderRadius, "6px")
}

fn container_controls(ui: &mut Ui, tool: &mut FlexboxTool, cx: &PanelContext<'_>) {
    ui.strong("Container");
    keyword_combo(ui, "flex-direction", &mut tool.direction);
    keyword_combo(ui, "justify-content", &mut tool.justify);
    keyword_combo(ui, "align-items", &mut tool.align);
    keyword_combo(ui, "flex-wrap", &mut tool.wrap);
    numeric_field(ui, "Gap", &mut tool.gap, 0.0..=50.0, cx.policy);
    numeric_field(ui, "Height", &mut tool.height, 200.0..=600.0, cx.policy);
    color_field(ui, "Background", &mut tool.background);
}

fn item_controls(ui: &mut Ui, tool: &mut FlexboxTool, cx: &mut PanelContext<'_>) {
    ui.horizontal(|ui| {
        ui.strong("Items");
        if ui.add_enabled(tool.can_add_item(), egui::Button::new("+ Add")).clicked() {
            tool.add_item(&mut *cx.rng);
        }
        if ui.add_enabled(tool.can_remove_selected(), egui::Button::new("🗑 Remove")).clicked() {
            tool.remove_selected();
        }
    });
    if ui.checkbox(&mut tool.multi_select, "Multi-select").changed() && !tool.multi_select {
        tool.clear_selection();
    }

    let shift = ui.input(|i| i.modifiers.shift);
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for item in tool.items() {
            if ui.selectable_label(tool.is_selected(item.id), format!("Item {}", item.id)).clicked() {
                clicked = Some(item.id);
            }
        }
    });
    if let Some(id) = clicked {
        tool.toggle_selection(id, shift);
    }

    let Some(primary) = tool.primary_selection().cloned() else {
        return;
    };
    let count = tool.selected().len();
    ui.label(if count > 1 {
        format!("Editing {count} items")
    } else {
        format!("Editing item {}", primary.id)
    });

    let mut edited = primary.clone();
    let mut changed = false;
    changed |= numeric_field(ui, "Width", &mut edited.width, 50.0..=300.0, cx.policy);
    changed |= numeric_field(ui, "Height", &mut edited.height, 50.0..=300.0, cx.policy);
    changed |= color_field(ui, "Color", &mut edited.color);
    changed |= keyword_combo(ui, "align-self", &mut edited.align_self);
    changed |= numeric_field(ui, "flex-grow", &mut edited.flex_grow, 0..=5, cx.policy);
    changed |= numeric_field(ui, "flex-shrink", &mut edited.flex_shrink, 0..=5, cx.policy);
    changed |= numeric_field(ui, "order", &mut edited.order, -5..=5, cx.policy);
    if !changed {
        return;
    }

    // Only the properties that moved are written to the other selected items.
    tool.update_selected(|item| {
        if edited.width != primary.width {
            item.width = edited.width;
        }
        if edited.height != primary.height {
            item.height = edited.height;
        }
        if edited.color != primary.color {
            item.color.clone_from(&edited.color);
        }
        if edited.align_self != primary.align_self {
            item.align_self = edited.align_self;
        }
        if edited.flex_grow != primary.flex_grow {
            item.flex_grow = edited.flex_grow;
        }
        if edited.flex_shrink != primary.flex_shrink {
            item.flex_shrink = edited.flex_shrink;
        }
        if edited.order != primary.order {
            item.order = edited.order;
        }
    });
}
