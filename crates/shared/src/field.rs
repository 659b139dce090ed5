use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::presets::{StrategyKey, StrategyPreset};

/// Markers never rest closer than this to the top or left edge (percent).
pub const FIELD_MIN_PERCENT: f64 = 5.0;
/// Markers never rest closer than this to the bottom or right edge (percent).
pub const FIELD_MAX_PERCENT: f64 = 95.0;

/// One fielder marker in the working list.
///
/// `x` and `y` are percentages of the field rectangle with `(0, 0)` at the
/// top-left. Only the coordinates change after the marker is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPosition {
    pub id: String,
    pub label: String,
    pub role: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// Screen-space bounding box of the field surface, measured at drag release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ReferenceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        ReferenceRect { left, top, width, height }
    }
}

/// Convert an absolute pointer location into clamped field percentages.
///
/// Returns `None` when the rectangle has no area (not laid out yet) or the
/// result would not be a finite number.
pub fn pointer_to_field_percent(
    pointer_x: f64,
    pointer_y: f64,
    rect: ReferenceRect,
) -> Option<(f64, f64)> {
    if rect.width == 0.0 || rect.height == 0.0 {
        return None;
    }

    let relative_x = (pointer_x - rect.left) / rect.width * 100.0;
    let relative_y = (pointer_y - rect.top) / rect.height * 100.0;
    if !relative_x.is_finite() || !relative_y.is_finite() {
        return None;
    }

    Some((
        relative_x.clamp(FIELD_MIN_PERCENT, FIELD_MAX_PERCENT),
        relative_y.clamp(FIELD_MIN_PERCENT, FIELD_MAX_PERCENT),
    ))
}

/// Deep copy of a preset's markers, ready to be dragged around.
pub fn fresh_positions(preset: &StrategyPreset) -> Vec<FieldPosition> {
    preset
        .positions
        .iter()
        .map(|t| FieldPosition {
            id: t.id.to_string(),
            label: t.label.to_string(),
            role: t.role.to_string(),
            x: t.x,
            y: t.y,
            color: preset.color.to_string(),
        })
        .collect()
}

/// Text for the "Selected Position" card, e.g. `"50.0%, 85.0%"`.
pub fn format_position(x: f64, y: f64) -> String {
    format!("{x:.1}%, {y:.1}%")
}

/// Events the planner UI feeds into [`FieldPlan::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldAction {
    SelectPreset(StrategyKey),
    EndDrag {
        marker_id: String,
        pointer_x: f64,
        pointer_y: f64,
        rect: ReferenceRect,
    },
    SelectMarker(String),
    ClearSelection,
}

/// Working state of the strategy planner: the active preset, its mutable
/// marker list and the highlighted marker.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPlan {
    strategy: StrategyKey,
    positions: Vec<FieldPosition>,
    selected: Option<String>,
}

impl Default for FieldPlan {
    fn default() -> Self {
        FieldPlan::new(StrategyKey::default())
    }
}

impl FieldPlan {
    pub fn new(strategy: StrategyKey) -> Self {
        FieldPlan {
            strategy,
            positions: fresh_positions(strategy.preset()),
            selected: None,
        }
    }

    pub fn strategy(&self) -> StrategyKey {
        self.strategy
    }

    pub fn preset(&self) -> &'static StrategyPreset {
        self.strategy.preset()
    }

    pub fn positions(&self) -> &[FieldPosition] {
        &self.positions
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_position(&self) -> Option<&FieldPosition> {
        let id = self.selected.as_deref()?;
        self.positions.iter().find(|p| p.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Replace every marker with a fresh copy of `key`'s preset.
    /// Manual adjustments and the selection are discarded.
    pub fn select_preset(&mut self, key: StrategyKey) {
        debug!(strategy = %key, "switching field preset");
        self.strategy = key;
        self.positions = fresh_positions(key.preset());
        self.selected = None;
    }

    /// Move `marker_id` to the pointer release location.
    ///
    /// Unknown ids and zero-area rectangles are ignored: both happen
    /// normally while the field is still being laid out.
    pub fn end_drag(&mut self, marker_id: &str, pointer_x: f64, pointer_y: f64, rect: ReferenceRect) {
        let Some(pos) = self.positions.iter_mut().find(|p| p.id == marker_id) else {
            debug!(marker_id, "drag ended on unknown marker");
            return;
        };
        let Some((x, y)) = pointer_to_field_percent(pointer_x, pointer_y, rect) else {
            debug!(marker_id, ?rect, "drag ended before field was measured");
            return;
        };
        pos.x = x;
        pos.y = y;
    }

    /// Highlight `marker_id`. An id that is not on the field means no selection.
    pub fn select_marker(&mut self, marker_id: &str) {
        self.selected = self
            .positions
            .iter()
            .any(|p| p.id == marker_id)
            .then(|| marker_id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn apply(&mut self, action: FieldAction) {
        match action {
            FieldAction::SelectPreset(key) => self.select_preset(key),
            FieldAction::EndDrag {
                marker_id,
                pointer_x,
                pointer_y,
                rect,
            } => self.end_drag(&marker_id, pointer_x, pointer_y, rect),
            FieldAction::SelectMarker(id) => self.select_marker(&id),
            FieldAction::ClearSelection => self.clear_selection(),
        }
    }

    /// Owned-state form of [`FieldPlan::apply`].
    pub fn reduce(mut self, action: FieldAction) -> Self {
        self.apply(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::FIELDERS_PER_SIDE;
    use std::collections::HashSet;

    fn rect_200x100() -> ReferenceRect {
        ReferenceRect::new(0.0, 0.0, 200.0, 100.0)
    }

    fn in_bounds(p: &FieldPosition) -> bool {
        (FIELD_MIN_PERCENT..=FIELD_MAX_PERCENT).contains(&p.x)
            && (FIELD_MIN_PERCENT..=FIELD_MAX_PERCENT).contains(&p.y)
    }

    #[test]
    fn test_every_preset_has_eleven_markers_in_bounds() {
        for key in StrategyKey::ALL {
            let mut plan = FieldPlan::default();
            plan.select_preset(key);
            assert_eq!(plan.positions().len(), FIELDERS_PER_SIDE);
            assert!(plan.positions().iter().all(in_bounds), "{key} out of bounds");
        }
    }

    #[test]
    fn test_marker_ids_unique_per_preset() {
        for key in StrategyKey::ALL {
            let plan = FieldPlan::new(key);
            let ids: HashSet<&str> = plan.positions().iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids.len(), FIELDERS_PER_SIDE);
        }
    }

    #[test]
    fn test_markers_take_preset_color() {
        let plan = FieldPlan::new(StrategyKey::Defensive);
        assert!(plan.positions().iter().all(|p| p.color == "#10B981"));
    }

    #[test]
    fn test_end_drag_midpoint() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        plan.end_drag("4", 100.0, 50.0, rect_200x100());
        let p = plan.positions().iter().find(|p| p.id == "4").unwrap();
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_end_drag_respects_rect_offset() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        plan.end_drag("1", 350.0, 120.0, ReferenceRect::new(300.0, 100.0, 200.0, 100.0));
        let p = &plan.positions()[0];
        assert!((p.x - 25.0).abs() < 1e-9);
        assert!((p.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_end_drag_clamps_low() {
        let mut plan = FieldPlan::new(StrategyKey::Attacking);
        plan.end_drag("2", -1000.0, -1000.0, rect_200x100());
        let p = plan.positions().iter().find(|p| p.id == "2").unwrap();
        assert_eq!((p.x, p.y), (5.0, 5.0));
    }

    #[test]
    fn test_end_drag_clamps_high() {
        let mut plan = FieldPlan::new(StrategyKey::Attacking);
        plan.end_drag("2", 10000.0, 10000.0, rect_200x100());
        let p = plan.positions().iter().find(|p| p.id == "2").unwrap();
        assert_eq!((p.x, p.y), (95.0, 95.0));
    }

    #[test]
    fn test_end_drag_only_moves_target_marker() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        let before = plan.positions().to_vec();
        plan.end_drag("7", 20.0, 20.0, rect_200x100());
        for (old, new) in before.iter().zip(plan.positions()) {
            if old.id == "7" {
                assert_eq!(old.label, new.label);
                assert_eq!(old.role, new.role);
                assert_eq!(old.color, new.color);
                assert!((new.x - 10.0).abs() < 1e-9);
                assert!((new.y - 20.0).abs() < 1e-9);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_end_drag_unknown_marker_is_noop() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        let before = plan.clone();
        plan.end_drag("99", 100.0, 50.0, rect_200x100());
        assert_eq!(plan, before);
    }

    #[test]
    fn test_end_drag_zero_width_is_noop() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        let before = plan.clone();
        plan.end_drag("1", 100.0, 50.0, ReferenceRect::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(plan, before);
        assert!(plan.positions().iter().all(|p| !p.x.is_nan() && !p.y.is_nan()));
    }

    #[test]
    fn test_end_drag_zero_height_is_noop() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        let before = plan.clone();
        plan.end_drag("1", 100.0, 50.0, ReferenceRect::new(0.0, 0.0, 200.0, 0.0));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_end_drag_nan_pointer_is_noop() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        let before = plan.clone();
        plan.end_drag("1", f64::NAN, 50.0, rect_200x100());
        assert_eq!(plan, before);
    }

    #[test]
    fn test_preset_switch_discards_drags() {
        let mut plan = FieldPlan::new(StrategyKey::Attacking);
        plan.end_drag("5", 10.0, 10.0, rect_200x100());
        plan.select_marker("5");
        plan.select_preset(StrategyKey::Defensive);
        assert_eq!(plan.positions(), fresh_positions(StrategyKey::Defensive.preset()).as_slice());
        assert_eq!(plan.selected_id(), None);
    }

    #[test]
    fn test_drag_never_leaks_into_template() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        plan.end_drag("1", 0.0, 0.0, rect_200x100());
        let template = &StrategyKey::Balanced.preset().positions[0];
        assert_eq!((template.x, template.y), (50.0, 85.0));
    }

    #[test]
    fn test_select_unknown_marker_means_no_selection() {
        let mut plan = FieldPlan::default();
        plan.select_marker("3");
        assert!(plan.is_selected("3"));
        plan.select_marker("nonexistent");
        assert_eq!(plan.selected_id(), None);
        assert!(plan.selected_position().is_none());
    }

    #[test]
    fn test_clear_selection() {
        let mut plan = FieldPlan::default();
        plan.select_marker("1");
        assert_eq!(plan.selected_position().map(|p| p.label.as_str()), Some("WK"));
        plan.clear_selection();
        assert_eq!(plan.selected_id(), None);
    }

    #[test]
    fn test_reduce_threads_state() {
        let plan = FieldPlan::default()
            .reduce(FieldAction::SelectPreset(StrategyKey::Attacking))
            .reduce(FieldAction::EndDrag {
                marker_id: "3".to_string(),
                pointer_x: 100.0,
                pointer_y: 50.0,
                rect: rect_200x100(),
            })
            .reduce(FieldAction::SelectMarker("3".to_string()));
        assert_eq!(plan.strategy(), StrategyKey::Attacking);
        let sel = plan.selected_position().unwrap();
        assert_eq!(sel.role, "Bowler");
        assert!((sel.x - 50.0).abs() < 1e-9);

        let plan = plan.reduce(FieldAction::ClearSelection);
        assert!(plan.selected_id().is_none());
    }

    #[test]
    fn test_pointer_to_field_percent_uses_fixed_margin() {
        assert_eq!(pointer_to_field_percent(0.0, 100.0, rect_200x100()), Some((5.0, 95.0)));
        assert_eq!(pointer_to_field_percent(-1e9, 1e9, rect_200x100()), Some((5.0, 95.0)));
        // a wide field still gets the same percentage margin on both axes
        let wide = ReferenceRect::new(0.0, 0.0, 1000.0, 100.0);
        assert_eq!(pointer_to_field_percent(1.0, 1.0, wide), Some((5.0, 5.0)));
    }

    #[test]
    fn test_far_drop_never_leaves_margin() {
        let mut plan = FieldPlan::new(StrategyKey::Balanced);
        plan.end_drag("1", -1000.0, -1000.0, rect_200x100());
        plan.end_drag("2", 1000.0, 1000.0, rect_200x100());
        let p = plan.positions();
        assert_eq!((p[0].x, p[0].y), (FIELD_MIN_PERCENT, FIELD_MIN_PERCENT));
        assert_eq!((p[1].x, p[1].y), (FIELD_MAX_PERCENT, FIELD_MAX_PERCENT));
        assert!(plan.positions().iter().all(in_bounds));
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(50.0, 85.0), "50.0%, 85.0%");
        assert_eq!(format_position(12.345, 7.06), "12.3%, 7.1%");
    }
}
