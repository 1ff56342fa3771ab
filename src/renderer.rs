//! Paints a [`StyleDescriptor`] into an egui rect.
//!
//! Only the subset of CSS the generators produce is understood: solid and
//! gradient backgrounds, per-corner radii, borders, layered box shadows and
//! 2D transforms. Flex and grid containers are laid out by
//! [`layout_flex`] and [`layout_grid`], which are pure and unit tested.

use egui::epaint::{Shadow, Vertex, WHITE_UV};
use egui::{pos2, vec2, Color32, Mesh, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use crate::css::{parse_css_color, split_top_level, GradientDirection, Keyword, StyleDescriptor, StyleProperty};
use crate::tools::flexbox::{AlignItems, AlignSelf, FlexDirection, FlexWrap, FlexboxTool, JustifyContent};
use crate::tools::grid::{GridTool, MAX_TRACKS};

/// Root font size used to resolve `em` and `rem`.
const ROOT_FONT_PX: f32 = 16.0;
/// Triangle count of a radial gradient ring.
const RADIAL_SEGMENTS: usize = 48;

pub fn color32(value: &str) -> Option<Color32> {
    let [r, g, b, a] = parse_css_color(value)?;
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}

/// Resolves a CSS length. Percentages are taken of `reference`; a bare
/// number counts as pixels.
pub fn resolve_length(value: &str, reference: f32) -> Option<f32> {
    let value = value.trim();
    if let Some(n) = value.strip_suffix("px") {
        return n.trim().parse().ok();
    }
    if let Some(n) = value.strip_suffix('%') {
        return n.trim().parse::<f32>().ok().map(|p| p / 100.0 * reference);
    }
    if let Some(n) = value.strip_suffix("rem").or_else(|| value.strip_suffix("em")) {
        return n.trim().parse::<f32>().ok().map(|v| v * ROOT_FONT_PX);
    }
    value.parse().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color32),
    Linear { direction: Vec2, stops: Vec<(f32, Color32)> },
    Radial { stops: Vec<(f32, Color32)> },
}

/// Parses a `background` value. Only the first layer of a layered
/// background is used.
pub fn parse_fill(value: &str) -> Option<Fill> {
    let layer = split_top_level(value, ',').into_iter().next()?;
    let first = split_top_level(&layer, ' ')
        .into_iter()
        .find(|token| token.contains("gradient(") || color32(token).is_some())
        .unwrap_or(layer);

    if let Some(args) = first
        .strip_prefix("linear-gradient(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts = split_top_level(args, ',');
        let (direction, stops) = match parts.first().and_then(|p| parse_direction(p)) {
            Some(direction) => (direction, &parts[1..]),
            None => (vec2(0.0, 1.0), &parts[..]),
        };
        return Some(Fill::Linear { direction, stops: parse_stops(stops) });
    }
    if let Some(args) = first
        .strip_prefix("radial-gradient(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts = split_top_level(args, ',');
        let stops = match parts.first() {
            Some(shape) if color32(first_word(shape)).is_none() => &parts[1..],
            _ => &parts[..],
        };
        return Some(Fill::Radial { stops: parse_stops(stops) });
    }
    color32(&first).map(Fill::Solid)
}

fn first_word(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or("")
}

fn parse_direction(value: &str) -> Option<Vec2> {
    let value = value.trim();
    if let Some(direction) = GradientDirection::from_keyword(value) {
        let (x, y) = direction.vector();
        return Some(vec2(x, y));
    }
    let degrees: f32 = value.strip_suffix("deg")?.trim().parse().ok()?;
    // 0deg points up, angles run clockwise
    let radians = degrees.to_radians();
    Some(vec2(radians.sin(), -radians.cos()))
}

/// `color [position%]` terms; missing positions are spread evenly.
fn parse_stops(terms: &[String]) -> Vec<(f32, Color32)> {
    let count = terms.len().max(2) - 1;
    terms
        .iter()
        .enumerate()
        .filter_map(|(i, term)| {
            let tokens = split_top_level(term, ' ');
            let color = color32(tokens.first()?)?;
            let position = tokens
                .get(1)
                .and_then(|p| p.strip_suffix('%'))
                .and_then(|p| p.parse::<f32>().ok())
                .map(|p| p / 100.0)
                .unwrap_or(i as f32 / count as f32);
            Some((position, color))
        })
        .collect()
}

/// Color of a gradient at `t` in `[0, 1]`.
pub fn sample_stops(stops: &[(f32, Color32)], t: f32) -> Color32 {
    let Some(first) = stops.first() else {
        return Color32::TRANSPARENT;
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.0 {
            let span = (b.0 - a.0).max(f32::EPSILON);
            return lerp_color(a.1, b.1, (t - a.0) / span);
        }
    }
    stops.last().map(|s| s.1).unwrap_or(first.1)
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub offset: Vec2,
    pub blur: f32,
    pub spread: f32,
    pub color: Color32,
    pub inset: bool,
}

/// Parses every layer of a `box-shadow` value.
pub fn parse_box_shadow(value: &str) -> Vec<BoxShadow> {
    if value.trim() == "none" {
        return Vec::new();
    }
    split_top_level(value, ',')
        .iter()
        .filter_map(|layer| {
            let mut inset = false;
            let mut color = Color32::from_black_alpha(64);
            let mut lengths = Vec::new();
            for token in split_top_level(layer, ' ') {
                if token == "inset" {
                    inset = true;
                } else if let Some(length) = resolve_length(&token, 0.0) {
                    lengths.push(length);
                } else if let Some(c) = color32(&token) {
                    color = c;
                }
            }
            if lengths.len() < 2 {
                return None;
            }
            Some(BoxShadow {
                offset: vec2(lengths[0], lengths[1]),
                blur: lengths.get(2).copied().unwrap_or(0.0),
                spread: lengths.get(3).copied().unwrap_or(0.0),
                color,
                inset,
            })
        })
        .collect()
}

/// A 2D affine map `[a c e; b d f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    fn then(self, m: Self) -> Self {
        Self {
            a: self.a * m.a + self.c * m.b,
            b: self.b * m.a + self.d * m.b,
            c: self.a * m.c + self.c * m.d,
            d: self.b * m.c + self.d * m.d,
            e: self.a * m.e + self.c * m.f + self.e,
            f: self.b * m.e + self.d * m.f + self.f,
        }
    }

    pub fn apply(&self, p: Vec2) -> Vec2 {
        vec2(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

fn angle_arg(value: &str) -> Option<f32> {
    value.trim().strip_suffix("deg")?.trim().parse::<f32>().ok().map(f32::to_radians)
}

/// Composes a `transform` value left to right, as CSS does.
pub fn parse_transform(value: &str) -> Affine {
    let mut m = Affine::IDENTITY;
    for function in split_top_level(value, ' ') {
        let Some((name, args)) = function.split_once('(') else {
            continue;
        };
        let args: Vec<String> = split_top_level(args.trim_end_matches(')'), ',');
        let arg = |i: usize| args.get(i).map(String::as_str).unwrap_or("");
        let step = match name {
            "rotate" => angle_arg(arg(0)).map(|r| {
                let (sin, cos) = r.sin_cos();
                Affine { a: cos, b: sin, c: -sin, d: cos, ..Affine::IDENTITY }
            }),
            "scale" => arg(0).trim().parse::<f32>().ok().map(|sx| {
                let sy = arg(1).trim().parse().unwrap_or(sx);
                Affine { a: sx, d: sy, ..Affine::IDENTITY }
            }),
            "skewX" => angle_arg(arg(0)).map(|r| Affine { c: r.tan(), ..Affine::IDENTITY }),
            "skewY" => angle_arg(arg(0)).map(|r| Affine { b: r.tan(), ..Affine::IDENTITY }),
            "translateX" => resolve_length(arg(0), 0.0).map(|x| Affine { e: x, ..Affine::IDENTITY }),
            "translateY" => resolve_length(arg(0), 0.0).map(|y| Affine { f: y, ..Affine::IDENTITY }),
            _ => None,
        };
        match step {
            Some(step) => m = m.then(step),
            None => log::debug!("Ignoring transform function {function}"),
        }
    }
    m
}

/// Per-corner radii in `top-left top-right bottom-right bottom-left`
/// shorthand order, with one to four values.
pub fn parse_rounding(value: &str, size: Vec2) -> Rounding {
    let reference = size.x.min(size.y);
    let radii: Vec<f32> = value
        .split_whitespace()
        .filter_map(|v| resolve_length(v, reference))
        .collect();
    let cap = reference / 2.0;
    let r = |i: usize| radii.get(i).copied().unwrap_or(0.0).clamp(0.0, cap);
    let (nw, ne, se, sw) = match radii.len() {
        0 => return Rounding::ZERO,
        1 => (r(0), r(0), r(0), r(0)),
        2 => (r(0), r(1), r(0), r(1)),
        3 => (r(0), r(1), r(2), r(1)),
        _ => (r(0), r(1), r(2), r(3)),
    };
    Rounding { nw, ne, sw, se }
}

/// `<width> <style> <color>` shorthand.
pub fn parse_border(value: &str) -> Option<Stroke> {
    if value.trim() == "none" {
        return None;
    }
    let mut width = 1.0;
    let mut color = Color32::GRAY;
    for token in split_top_level(value, ' ') {
        if let Some(w) = resolve_length(&token, 0.0) {
            width = w;
        } else if let Some(c) = color32(&token) {
            color = c;
        }
    }
    Some(Stroke::new(width, color))
}

/// The size an element asks for, resolved against the space it sits in.
pub fn element_size(style: &StyleDescriptor, available: Vec2, fallback: Vec2) -> Vec2 {
    let width = style
        .get(StyleProperty::Width)
        .and_then(|w| resolve_length(w, available.x))
        .unwrap_or(fallback.x);
    let height = style
        .get(StyleProperty::Height)
        .and_then(|h| resolve_length(h, available.y))
        .unwrap_or(fallback.y);
    vec2(width.max(0.0), height.max(0.0))
}

/// Paints a styled box. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn paint_box(&self, painter: &Painter, rect: Rect, style: &StyleDescriptor) {
        let transform = style
            .get(StyleProperty::Transform)
            .map(parse_transform)
            .unwrap_or(Affine::IDENTITY);
        let fill = style
            .get(StyleProperty::Background)
            .or(style.get(StyleProperty::BackgroundColor))
            .and_then(parse_fill);

        if !transform.is_identity() {
            self.paint_transformed(painter, rect, fill.as_ref(), transform);
            return;
        }

        let rounding = style
            .get(StyleProperty::BorderRadius)
            .map(|r| parse_rounding(r, rect.size()))
            .unwrap_or(Rounding::ZERO);
        let shadows = style
            .get(StyleProperty::BoxShadow)
            .map(parse_box_shadow)
            .unwrap_or_default();

        for shadow in shadows.iter().rev().filter(|s| !s.inset) {
            let egui_shadow = Shadow {
                offset: shadow.offset,
                blur: shadow.blur,
                spread: shadow.spread,
                color: shadow.color,
            };
            painter.add(egui_shadow.as_shape(rect, rounding));
        }

        match &fill {
            Some(Fill::Solid(color)) => {
                painter.rect_filled(rect, rounding, *color);
            }
            Some(gradient) => paint_gradient(painter, rect, gradient),
            None => {}
        }

        for shadow in shadows.iter().filter(|s| s.inset) {
            // Approximated by an inner stroke on the lit edge
            let inner = rect.shrink(shadow.spread.max(0.0)).translate(shadow.offset * 0.5);
            painter.rect_stroke(
                inner.intersect(rect),
                rounding,
                Stroke::new((shadow.blur / 2.0).max(1.0), shadow.color),
            );
        }

        if let Some(border) = style.get(StyleProperty::Border).and_then(parse_border) {
            painter.rect_stroke(rect, rounding, border);
        }
    }

    fn paint_transformed(&self, painter: &Painter, rect: Rect, fill: Option<&Fill>, m: Affine) {
        let center = rect.center();
        let half = rect.size() / 2.0;
        let corners = [vec2(-half.x, -half.y), vec2(half.x, -half.y), vec2(half.x, half.y), vec2(-half.x, half.y)]
            .map(|p| center + m.apply(p));
        let color = match fill {
            Some(Fill::Solid(c)) => *c,
            Some(Fill::Linear { stops, .. }) | Some(Fill::Radial { stops }) => sample_stops(stops, 0.5),
            None => Color32::GRAY,
        };
        painter.add(Shape::convex_polygon(corners.to_vec(), color, Stroke::NONE));
        // Outline of the untransformed box for reference
        painter.add(Shape::dashed_line(
            &[rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom(), rect.left_top()],
            Stroke::new(1.0, Color32::from_gray(140)),
            4.0,
            4.0,
        ));
    }
}

/// Fills `rect` with a gradient mesh. Corner rounding is not applied.
pub fn paint_gradient(painter: &Painter, rect: Rect, fill: &Fill) {
    let mut mesh = Mesh::default();
    match fill {
        Fill::Solid(color) => {
            painter.rect_filled(rect, 0.0, *color);
            return;
        }
        Fill::Linear { direction, stops } => {
            let dir = direction.normalized();
            let half = rect.size() / 2.0;
            // Gradient line length so the corners land on 0% and 100%
            let extent = (half.x * dir.x.abs() + half.y * dir.y.abs()).max(f32::EPSILON);
            let t_at = |p: Pos2| ((p - rect.center()).dot(dir) / extent + 1.0) / 2.0;

            const STEPS: usize = 32;
            for i in 0..=STEPS {
                for j in 0..=STEPS {
                    let pos = pos2(
                        rect.min.x + rect.width() * i as f32 / STEPS as f32,
                        rect.min.y + rect.height() * j as f32 / STEPS as f32,
                    );
                    mesh.vertices.push(Vertex { pos, uv: WHITE_UV, color: sample_stops(stops, t_at(pos)) });
                }
            }
            let row = (STEPS + 1) as u32;
            for i in 0..STEPS as u32 {
                for j in 0..STEPS as u32 {
                    let idx = i * row + j;
                    mesh.indices.extend_from_slice(&[idx, idx + row, idx + 1, idx + 1, idx + row, idx + row + 1]);
                }
            }
        }
        Fill::Radial { stops } => {
            let center = rect.center();
            let radius = rect.size().length() / 2.0;
            const RINGS: usize = 16;
            mesh.colored_vertex(center, sample_stops(stops, 0.0));
            for ring in 1..=RINGS {
                let t = ring as f32 / RINGS as f32;
                let color = sample_stops(stops, t);
                for s in 0..RADIAL_SEGMENTS {
                    let angle = std::f32::consts::TAU * s as f32 / RADIAL_SEGMENTS as f32;
                    let p = center + Vec2::angled(angle) * radius * t;
                    mesh.colored_vertex(p.clamp(rect.min, rect.max), color);
                }
            }
            let seg = RADIAL_SEGMENTS as u32;
            for s in 0..seg {
                mesh.add_triangle(0, 1 + s, 1 + (s + 1) % seg);
            }
            for ring in 1..RINGS as u32 {
                let inner = 1 + (ring - 1) * seg;
                let outer = 1 + ring * seg;
                for s in 0..seg {
                    let next = (s + 1) % seg;
                    mesh.add_triangle(inner + s, outer + s, outer + next);
                    mesh.add_triangle(inner + s, outer + next, inner + next);
                }
            }
        }
    }
    painter.add(Shape::mesh(mesh));
}

fn justify_offsets(justify: JustifyContent, free: f32, count: usize, gap: f32) -> (f32, f32) {
    let free = free.max(0.0);
    let n = count as f32;
    match justify {
        JustifyContent::FlexStart => (0.0, gap),
        JustifyContent::FlexEnd => (free, gap),
        JustifyContent::Center => (free / 2.0, gap),
        JustifyContent::SpaceBetween if count > 1 => (0.0, gap + free / (n - 1.0)),
        JustifyContent::SpaceBetween => (0.0, gap),
        JustifyContent::SpaceAround => (free / n / 2.0, gap + free / n),
        JustifyContent::SpaceEvenly => (free / (n + 1.0), gap + free / (n + 1.0)),
    }
}

/// Positions the items of a flex container inside `content`.
pub fn layout_flex(content: Rect, tool: &FlexboxTool) -> Vec<(u32, Rect)> {
    let row = matches!(tool.direction, FlexDirection::Row | FlexDirection::RowReverse);
    let reverse = matches!(tool.direction, FlexDirection::RowReverse | FlexDirection::ColumnReverse);
    let (main_len, cross_len) = if row {
        (content.width(), content.height())
    } else {
        (content.height(), content.width())
    };
    let gap = tool.gap.max(0.0);

    let mut items: Vec<_> = tool.items().iter().collect();
    items.sort_by_key(|item| item.order);
    let sizes = |w: f32, h: f32| if row { (w, h) } else { (h, w) };

    let mut lines: Vec<Vec<usize>> = vec![Vec::new()];
    let mut used = 0.0;
    for (i, item) in items.iter().enumerate() {
        let (main, _) = sizes(item.width, item.height);
        let line_started = lines.last().is_some_and(|l| !l.is_empty());
        if tool.wrap != FlexWrap::NoWrap && line_started && used + gap + main > main_len {
            lines.push(Vec::new());
            used = 0.0;
        }
        if let Some(line) = lines.last_mut() {
            used += if line.is_empty() { main } else { gap + main };
            line.push(i);
        }
    }

    let mut placed = Vec::with_capacity(items.len());
    let mut cross_cursor = 0.0;
    for line in &lines {
        let mut mains: Vec<f32> = line.iter().map(|&i| sizes(items[i].width, items[i].height).0).collect();
        let line_cross = line
            .iter()
            .map(|&i| sizes(items[i].width, items[i].height).1)
            .fold(0.0_f32, f32::max);
        let gaps = gap * line.len().saturating_sub(1) as f32;
        let free = main_len - mains.iter().sum::<f32>() - gaps;

        if free > 0.0 {
            let grow: i32 = line.iter().map(|&i| items[i].flex_grow.max(0)).sum();
            if grow > 0 {
                for (k, &i) in line.iter().enumerate() {
                    mains[k] += free * items[i].flex_grow.max(0) as f32 / grow as f32;
                }
            }
        } else if free < 0.0 {
            let weight: f32 = line
                .iter()
                .zip(&mains)
                .map(|(&i, m)| items[i].flex_shrink.max(0) as f32 * m)
                .sum();
            if weight > 0.0 {
                for (k, &i) in line.iter().enumerate() {
                    let share = items[i].flex_shrink.max(0) as f32 * mains[k] / weight;
                    mains[k] = (mains[k] + free * share).max(0.0);
                }
            }
        }

        let free = main_len - mains.iter().sum::<f32>() - gaps;
        let (start, step) = justify_offsets(tool.justify, free, line.len(), gap);
        let mut main_cursor = start;
        for (k, &i) in line.iter().enumerate() {
            let item = items[i];
            let (_, cross) = sizes(item.width, item.height);
            let align = match item.align_self {
                AlignSelf::Auto => tool.align,
                AlignSelf::FlexStart => AlignItems::FlexStart,
                AlignSelf::FlexEnd => AlignItems::FlexEnd,
                AlignSelf::Center => AlignItems::Center,
                AlignSelf::Stretch => AlignItems::Stretch,
                AlignSelf::Baseline => AlignItems::Baseline,
            };
            let cross_offset = match align {
                AlignItems::FlexEnd => line_cross - cross,
                AlignItems::Center => (line_cross - cross) / 2.0,
                _ => 0.0,
            };

            let mut main_pos = main_cursor;
            if reverse {
                main_pos = main_len - main_cursor - mains[k];
            }
            let mut cross_pos = cross_cursor + cross_offset;
            if tool.wrap == FlexWrap::WrapReverse {
                cross_pos = cross_len - cross_pos - cross;
            }
            let (x, y, w, h) = if row {
                (main_pos, cross_pos, mains[k], cross)
            } else {
                (cross_pos, main_pos, cross, mains[k])
            };
            placed.push((item.id, Rect::from_min_size(content.min + vec2(x, y), vec2(w, h))));
            main_cursor += mains[k] + step;
        }
        cross_cursor += line_cross + gap;
    }
    placed
}

/// Track sizes of a grid template across `available` pixels.
pub fn track_sizes(template: &str, available: f32, gap: f32) -> Vec<f32> {
    enum Track {
        Fixed(f32),
        Fraction(f32),
    }

    fn expand(template: &str, out: &mut Vec<String>) {
        for token in split_top_level(template, ' ') {
            if out.len() >= MAX_TRACKS {
                return;
            }
            match token.strip_prefix("repeat(").and_then(|r| r.strip_suffix(')')) {
                Some(args) => {
                    let parts = split_top_level(args, ',');
                    let times = parts.first().and_then(|n| n.trim().parse::<usize>().ok()).unwrap_or(1);
                    let inner = parts.get(1..).map(|rest| rest.join(",")).unwrap_or_default();
                    for _ in 0..times.min(MAX_TRACKS) {
                        if out.len() >= MAX_TRACKS {
                            return;
                        }
                        expand(&inner, out);
                    }
                }
                None => out.push(token),
            }
        }
    }

    let mut tokens = Vec::new();
    expand(template, &mut tokens);
    let tracks: Vec<Track> = tokens
        .iter()
        .map(|token| {
            if let Some(fr) = token.strip_suffix("fr").and_then(|v| v.parse().ok()) {
                return Track::Fraction(fr);
            }
            if let Some(args) = token.strip_prefix("minmax(").and_then(|r| r.strip_suffix(')')) {
                let parts = split_top_level(args, ',');
                if let Some(min) = parts.first().and_then(|m| resolve_length(m, available)) {
                    return Track::Fixed(min);
                }
                return Track::Fraction(1.0);
            }
            match resolve_length(token, available) {
                Some(px) => Track::Fixed(px),
                None => Track::Fraction(1.0),
            }
        })
        .collect();

    let gaps = gap * tracks.len().saturating_sub(1) as f32;
    let fixed: f32 = tracks.iter().map(|t| if let Track::Fixed(px) = t { *px } else { 0.0 }).sum();
    let fractions: f32 = tracks.iter().map(|t| if let Track::Fraction(fr) = t { *fr } else { 0.0 }).sum();
    let per_fraction = if fractions > 0.0 {
        ((available - fixed - gaps) / fractions).max(0.0)
    } else {
        0.0
    };
    tracks
        .iter()
        .map(|t| match t {
            Track::Fixed(px) => *px,
            Track::Fraction(fr) => fr * per_fraction,
        })
        .collect()
}

/// Offset of every grid line, line 1 at 0.
fn line_offsets(sizes: &[f32], gap: f32) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    let mut at = 0.0;
    offsets.push(at);
    for (i, size) in sizes.iter().enumerate() {
        at += size;
        offsets.push(at);
        if i + 1 < sizes.len() {
            at += gap;
        }
    }
    offsets
}

/// Cell rects of the grid tracks, row major, at most `MAX_TRACKS` of them.
pub fn grid_cells(content: Rect, tool: &GridTool) -> Vec<Rect> {
    let rows = track_sizes(&tool.rows_value(), content.height(), tool.row_gap);
    let cols = track_sizes(&tool.columns_value(), content.width(), tool.column_gap);
    let row_lines = line_offsets(&rows, tool.row_gap);
    let col_lines = line_offsets(&cols, tool.column_gap);
    let shown_rows = (MAX_TRACKS / cols.len().max(1)).max(1);
    let mut cells = Vec::with_capacity(rows.len().min(shown_rows) * cols.len());
    for (r, height) in rows.iter().enumerate().take(shown_rows) {
        for (c, width) in cols.iter().enumerate() {
            cells.push(Rect::from_min_size(
                content.min + vec2(col_lines[c], row_lines[r]),
                vec2(*width, *height),
            ));
        }
    }
    cells
}

/// Positions every grid item by its line numbers. Lines past the last
/// track are pinned to the last line.
pub fn layout_grid(content: Rect, tool: &GridTool) -> Vec<(u32, Rect)> {
    let rows = track_sizes(&tool.rows_value(), content.height(), tool.row_gap);
    let cols = track_sizes(&tool.columns_value(), content.width(), tool.column_gap);
    let row_lines = line_offsets(&rows, tool.row_gap);
    let col_lines = line_offsets(&cols, tool.column_gap);
    // Line n opens track n and closes track n - 1; they differ by the gap.
    let start = |lines: &[f32], gap: f32, n: u32| -> f32 {
        let index = (n.max(1) as usize - 1).min(lines.len() - 1);
        if index == 0 || index == lines.len() - 1 { lines[index] } else { lines[index] + gap }
    };
    let end = |lines: &[f32], n: u32| -> f32 {
        let index = (n.max(1) as usize - 1).min(lines.len() - 1);
        lines[index]
    };

    tool.items()
        .iter()
        .map(|item| {
            let min = pos2(
                start(&col_lines, tool.column_gap, item.col_start),
                start(&row_lines, tool.row_gap, item.row_start),
            );
            let max = pos2(end(&col_lines, item.col_end), end(&row_lines, item.row_end));
            let max = pos2(max.x.max(min.x), max.y.max(min.y));
            (item.id, Rect::from_min_max(content.min + min.to_vec2(), content.min + max.to_vec2()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::flexbox::FlexItem;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_resolve_length() {
        assert_eq!(resolve_length("12px", 0.0), Some(12.0));
        assert_eq!(resolve_length("50%", 200.0), Some(100.0));
        assert_eq!(resolve_length("1.5rem", 0.0), Some(24.0));
        assert_eq!(resolve_length("0", 0.0), Some(0.0));
        assert_eq!(resolve_length("auto", 100.0), None);
    }

    #[test]
    fn test_parse_fill() {
        assert_eq!(parse_fill("#ff0000"), Some(Fill::Solid(Color32::from_rgb(255, 0, 0))));
        let Some(Fill::Linear { direction, stops }) =
            parse_fill("linear-gradient(to right, #000000 0%, #ffffff 100%)")
        else {
            panic!("expected a linear gradient");
        };
        assert_eq!(direction, vec2(1.0, 0.0));
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].0, 1.0);

        let Some(Fill::Radial { stops }) = parse_fill("radial-gradient(circle, #000000 0%, #ffffff 100%)") else {
            panic!("expected a radial gradient");
        };
        assert_eq!(stops[0].1, Color32::BLACK);

        let Some(Fill::Linear { direction, .. }) =
            parse_fill("linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
        else {
            panic!("expected an angled gradient");
        };
        assert!(approx(direction.x, direction.y.abs()) && direction.y > 0.0);
    }

    #[test]
    fn test_sample_stops() {
        let stops = [(0.0, Color32::BLACK), (1.0, Color32::WHITE)];
        assert_eq!(sample_stops(&stops, -1.0), Color32::BLACK);
        assert_eq!(sample_stops(&stops, 0.5), Color32::from_rgb(128, 128, 128));
        assert_eq!(sample_stops(&stops, 2.0), Color32::WHITE);
    }

    #[test]
    fn test_parse_box_shadow_layers() {
        let layers = parse_box_shadow("inset 0px 2px 4px 0px rgba(0, 0, 0, 0.1), 0px 4px 8px 0px #000000");
        assert_eq!(layers.len(), 2);
        assert!(layers[0].inset && !layers[1].inset);
        assert_eq!(layers[1].offset, vec2(0.0, 4.0));
        assert_eq!(layers[1].blur, 8.0);
        assert!(parse_box_shadow("none").is_empty());
    }

    #[test]
    fn test_parse_transform() {
        let m = parse_transform("translateX(10px) scale(2, 3)");
        assert_eq!(m.apply(vec2(1.0, 1.0)), vec2(12.0, 3.0));
        let m = parse_transform("rotate(90deg)");
        let p = m.apply(vec2(1.0, 0.0));
        assert!(approx(p.x, 0.0) && approx(p.y, 1.0));
        assert!(parse_transform("none").is_identity());
    }

    #[test]
    fn test_parse_rounding() {
        let r = parse_rounding("10px 20px 30px 40px", vec2(200.0, 200.0));
        assert_eq!((r.nw, r.ne, r.se, r.sw), (10.0, 20.0, 30.0, 40.0));
        let r = parse_rounding("50%", vec2(100.0, 100.0));
        assert_eq!(r.nw, 50.0);
        let r = parse_rounding("9999px", vec2(100.0, 60.0));
        assert_eq!(r.ne, 30.0);
    }

    #[test]
    fn test_flex_row_justify_center() {
        let mut tool = FlexboxTool::new();
        tool.justify = JustifyContent::Center;
        let content = Rect::from_min_size(Pos2::ZERO, vec2(500.0, 400.0));
        let placed = layout_flex(content, &tool);
        assert_eq!(placed.len(), 3);
        // 3 x 100px + 2 x 10px gap leaves 180px, 90px each side
        assert_eq!(placed[0].1.min.x, 90.0);
        assert_eq!(placed[2].1.max.x, 410.0);
        assert_eq!(placed[1].1.height(), 150.0);
    }

    #[test]
    fn test_flex_column_reverse_and_align() {
        let mut tool = FlexboxTool::new();
        tool.direction = FlexDirection::ColumnReverse;
        tool.align = AlignItems::Center;
        let content = Rect::from_min_size(Pos2::ZERO, vec2(300.0, 400.0));
        let placed = layout_flex(content, &tool);
        let first = placed[0].1;
        assert_eq!(first.max.y, 400.0);
        assert_eq!(first.height(), 100.0);
        assert_eq!(first.min.x, 0.0);
    }

    #[test]
    fn test_flex_wrap_and_grow() {
        let mut tool = FlexboxTool::new();
        tool.wrap = FlexWrap::Wrap;
        let content = Rect::from_min_size(Pos2::ZERO, vec2(215.0, 400.0));
        let placed = layout_flex(content, &tool);
        assert_eq!(placed[2].1.min.x, 0.0);
        assert_eq!(placed[2].1.min.y, 160.0);

        let mut tool = FlexboxTool::new();
        tool.update_selected(|item: &mut FlexItem| item.flex_grow = 1);
        let content = Rect::from_min_size(Pos2::ZERO, vec2(500.0, 400.0));
        let placed = layout_flex(content, &tool);
        assert_eq!(placed[0].1.width(), 280.0);
    }

    #[test]
    fn test_track_sizes() {
        assert_eq!(track_sizes("repeat(3, 1fr)", 320.0, 10.0), vec![100.0, 100.0, 100.0]);
        assert_eq!(track_sizes("100px 1fr 100px", 400.0, 0.0), vec![100.0, 200.0, 100.0]);
        assert_eq!(track_sizes("1fr 2fr 1fr", 400.0, 0.0), vec![100.0, 200.0, 100.0]);
        assert_eq!(track_sizes("auto 1fr auto", 300.0, 0.0), vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_huge_templates_are_capped() {
        let sizes = track_sizes("repeat(4000000000, repeat(4000000000, 1fr))", 400.0, 0.0);
        assert_eq!(sizes.len(), MAX_TRACKS);

        let mut tool = GridTool::new();
        tool.set_row_template("repeat(4000000000, 1fr)");
        tool.set_column_template("repeat(4000000000, 1fr)");
        let content = Rect::from_min_size(Pos2::ZERO, vec2(600.0, 400.0));
        assert!(grid_cells(content, &tool).len() <= MAX_TRACKS);
        assert_eq!(layout_grid(content, &tool).len(), tool.items().len());
    }

    #[test]
    fn test_grid_item_placement() {
        let tool = GridTool::new();
        let content = Rect::from_min_size(Pos2::ZERO, vec2(620.0, 420.0));
        let cells = grid_cells(content, &tool);
        assert_eq!(cells.len(), tool.rows() * tool.columns());
        for (id, rect) in layout_grid(content, &tool) {
            let item = tool.items().iter().find(|i| i.id == id).unwrap();
            assert!(rect.width() > 0.0 && rect.height() > 0.0, "{}", item.name);
            assert!(content.contains_rect(rect));
            let cell = (item.row_start as usize - 1) * tool.columns() + item.col_start as usize - 1;
            if let Some(cell) = cells.get(cell) {
                assert!(approx(cell.min.x, rect.min.x) && approx(cell.min.y, rect.min.y), "{}", item.name);
            }
        }
    }
}
