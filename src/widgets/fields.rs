use std::ops::RangeInclusive;

use egui::emath::Numeric;
use egui::{Color32, ComboBox, DragValue, Slider, TextEdit, Ui};

use crate::css::{parse_hex, to_hex, Keyword};
use crate::policy::NumericPolicy;

/// Slider plus a number box. The slider stays inside `range`; what is typed
/// into the box goes through `policy`. Returns whether the value changed.
pub fn numeric_field<T: Numeric>(
    ui: &mut Ui,
    label: &str,
    value: &mut T,
    range: RangeInclusive<T>,
    policy: NumericPolicy,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut slider_value = NumericPolicy::Clamp.apply(*value, &range);
        if ui
            .add(Slider::new(&mut slider_value, range.clone()).show_value(false))
            .changed()
        {
            *value = slider_value;
            changed = true;
        }
        let mut typed = *value;
        if ui.add(DragValue::new(&mut typed)).changed() {
            *value = policy.apply(typed, &range);
            changed = true;
        }
    });
    changed
}

/// Color swatch picker next to a free text box holding the hex string.
pub fn color_field(ui: &mut Ui, label: &str, value: &mut String) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        if let Some([r, g, b]) = parse_hex(value) {
            let mut color = Color32::from_rgb(r, g, b);
            if ui.color_edit_button_srgba(&mut color).changed() {
                *value = to_hex([color.r(), color.g(), color.b()]);
                changed = true;
            }
        }
        changed |= ui
            .add(TextEdit::singleline(value).desired_width(90.0))
            .changed();
    });
    changed
}

pub fn text_field(ui: &mut Ui, label: &str, value: &mut String) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(value).changed()
    })
    .inner
}

/// Drop-down over every value of a keyword enum.
pub fn keyword_combo<K: Keyword>(ui: &mut Ui, label: &str, value: &mut K) -> bool {
    let before = *value;
    ui.horizontal(|ui| {
        ui.label(label);
        ComboBox::from_id_salt(label)
            .selected_text(value.label())
            .show_ui(ui, |ui| {
                for option in K::ALL {
                    ui.selectable_value(value, *option, option.label());
                }
            });
    });
    *value != before
}
