//! Rotation state machine for the section wheel.
//!
//! A [`Wheel`] holds the labeled sections, the cumulative rotation, and
//! the live drag session if one is open. Pointer handling, snapping, and
//! active-section tracking are plain methods so the full gesture model
//! runs in tests without fabricating browser events.

use thiserror::Error;

use super::{DRAG_SENSITIVITY, DRAG_THRESHOLD_PX, STEP_DEG};

/// Construction-time validation failure.
///
/// A section with a NaN or infinite base angle would poison every
/// active-section comparison afterwards, so it is rejected up front.
#[derive(Debug, Error, PartialEq)]
pub enum WheelError {
    #[error("section {key:?} has a non-finite base angle ({angle})")]
    BadAngle { key: String, angle: f64 },
}

/// One labeled section on the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelItem {
    /// Stable identifier the drawer uses to address this section.
    pub key: String,
    /// Display label, drawn along the wheel's arc.
    pub label: String,
    /// Angular position in the zero-rotation layout, in degrees.
    pub base_angle: f64,
    /// Whether this section currently sits closest to the reference
    /// direction. Maintained by the wheel; at most one item holds it.
    pub active: bool,
}

impl WheelItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, base_angle: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            base_angle,
            active: false,
        }
    }
}

/// Live pointer gesture. Exists only between press and release.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: f64,
    start_rotation: f64,
    moved: bool,
}

/// The drag-to-rotate wheel.
///
/// Rotation accumulates without bound across drags; angles are folded
/// back into a single turn only when comparing items against the
/// reference direction.
#[derive(Debug, Clone)]
pub struct Wheel {
    items: Vec<WheelItem>,
    rotation: f64,
    drag: Option<DragSession>,
    eased: bool,
    suppress_click: bool,
}

impl Wheel {
    /// Builds a wheel and marks the initial active section.
    pub fn new(items: Vec<WheelItem>) -> Result<Self, WheelError> {
        if let Some(bad) = items.iter().find(|item| !item.base_angle.is_finite()) {
            return Err(WheelError::BadAngle {
                key: bad.key.clone(),
                angle: bad.base_angle,
            });
        }
        let mut wheel = Self {
            items,
            rotation: 0.0,
            drag: None,
            eased: true,
            suppress_click: false,
        };
        wheel.recompute_active();
        Ok(wheel)
    }

    /// Current cumulative rotation in degrees. Unbounded.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Whether transform writes should animate. Off for the whole of a
    /// drag session so the wheel tracks the pointer with zero lag.
    pub fn eased(&self) -> bool {
        self.eased
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn items(&self) -> &[WheelItem] {
        &self.items
    }

    /// Index of the active section, if the wheel has any items.
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }

    /// Opens a fresh drag session at the given pointer X. Any prior
    /// session or pending click suppression belongs to an older gesture
    /// and is discarded.
    pub fn begin_drag(&mut self, pointer_x: f64) {
        self.drag = Some(DragSession {
            start_x: pointer_x,
            start_rotation: self.rotation,
            moved: false,
        });
        self.eased = false;
        self.suppress_click = false;
    }

    /// Tracks the pointer during a drag. Does nothing without an open
    /// session.
    ///
    /// Rotation follows the pointer only once the travel threshold has
    /// been crossed; the flag then stays set for the rest of the session
    /// even if the pointer returns close to its starting point.
    pub fn update_drag(&mut self, pointer_x: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = pointer_x - drag.start_x;
        if delta.abs() > DRAG_THRESHOLD_PX {
            drag.moved = true;
        }
        if drag.moved {
            self.rotation = drag.start_rotation + delta * DRAG_SENSITIVITY;
        }
    }

    /// Closes the session. A moved drag snaps to the nearest step and
    /// arms click suppression for the click event fired by the same
    /// release; anything shorter falls through to click handling
    /// untouched.
    pub fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.eased = true;
        if drag.moved {
            self.suppress_click = true;
            self.snap_to_step();
        }
    }

    /// Rounds the rotation to the nearest multiple of [`STEP_DEG`].
    pub fn snap_to_step(&mut self) {
        self.rotate_to((self.rotation / STEP_DEG).round() * STEP_DEG);
    }

    /// Settles the wheel at `target` degrees and re-picks the active
    /// section.
    pub fn rotate_to(&mut self, target: f64) {
        self.rotation = target;
        self.eased = true;
        self.recompute_active();
    }

    /// Click on the section at `index`. Swallows the one click that
    /// tails a moved drag, otherwise rotates the section to the
    /// reference direction.
    pub fn select(&mut self, index: usize) {
        if self.suppress_click {
            self.suppress_click = false;
            return;
        }
        let Some(target) = self.items.get(index).map(|item| -item.base_angle) else {
            return;
        };
        self.rotate_to(target);
    }

    /// Drawer navigation: rotates the section with this key to the
    /// reference direction. Returns whether the key matched; unknown
    /// keys leave the rotation untouched.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.items.iter().position(|item| item.key == key) {
            Some(index) => {
                let target = -self.items[index].base_angle;
                self.rotate_to(target);
                true
            }
            None => false,
        }
    }

    /// Re-picks the single section angularly closest to the reference
    /// direction. Ties keep the earliest item in the list.
    fn recompute_active(&mut self) {
        let rotation = self.rotation;
        let best = self
            .items
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                angular_offset(a, rotation).total_cmp(&angular_offset(b, rotation))
            })
            .map(|(index, _)| index);
        for (index, item) in self.items.iter_mut().enumerate() {
            item.active = Some(index) == best;
        }
    }
}

/// Absolute distance of an item from the reference direction at the
/// given rotation, in degrees within half a turn.
fn angular_offset(item: &WheelItem, rotation: f64) -> f64 {
    normalize_deg(item.base_angle + rotation).abs()
}

/// Folds an angle into the half-open interval (-180, 180] degrees.
///
/// Rotation accumulates without bound, so comparisons bring angles back
/// into a single turn first. 180 stays 180 and -180 folds to 180.
pub fn normalize_deg(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::SLOT_COUNT;

    const EPS: f64 = 1e-9;

    fn seven() -> Wheel {
        let items = (0..SLOT_COUNT)
            .map(|i| WheelItem::new(format!("s{i}"), format!("SECTION {i}"), i as f64 * STEP_DEG))
            .collect();
        Wheel::new(items).unwrap()
    }

    fn base(index: usize) -> f64 {
        index as f64 * STEP_DEG
    }

    #[test]
    fn normalize_folds_into_half_open_turn() {
        assert!((normalize_deg(0.0)).abs() < EPS);
        assert!((normalize_deg(370.0) - 10.0).abs() < EPS);
        assert!((normalize_deg(-190.0) - 170.0).abs() < EPS);
        assert!((normalize_deg(36030.0) - 30.0).abs() < EPS);
        assert!((normalize_deg(-36030.0) + 30.0).abs() < EPS);
    }

    #[test]
    fn normalize_keeps_half_turn_positive() {
        assert!((normalize_deg(180.0) - 180.0).abs() < EPS);
        assert!((normalize_deg(-180.0) - 180.0).abs() < EPS);
        assert!((normalize_deg(540.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn starts_settled_on_first_section() {
        let wheel = seven();
        assert!(wheel.eased());
        assert!(!wheel.is_dragging());
        assert!(wheel.rotation().abs() < EPS);
        assert_eq!(wheel.active_index(), Some(0));
    }

    #[test]
    fn rejects_non_finite_base_angles() {
        let items = vec![
            WheelItem::new("ok", "OK", 0.0),
            WheelItem::new("bad", "BAD", f64::NAN),
        ];
        let err = Wheel::new(items).unwrap_err();
        assert!(matches!(err, WheelError::BadAngle { ref key, .. } if key == "bad"));

        let items = vec![WheelItem::new("inf", "INF", f64::INFINITY)];
        assert!(Wheel::new(items).is_err());
    }

    #[test]
    fn empty_wheel_is_inert() {
        let mut wheel = Wheel::new(Vec::new()).unwrap();
        assert_eq!(wheel.active_index(), None);
        wheel.begin_drag(10.0);
        wheel.update_drag(100.0);
        wheel.end_drag();
        wheel.select(0);
        wheel.select(0);
        assert_eq!(wheel.active_index(), None);
    }

    #[test]
    fn drag_follows_pointer_at_quarter_degree_per_pixel() {
        let mut wheel = seven();
        wheel.begin_drag(100.0);
        wheel.update_drag(180.0);
        assert!((wheel.rotation() - 20.0).abs() < EPS);
        wheel.update_drag(60.0);
        assert!((wheel.rotation() + 10.0).abs() < EPS);
    }

    #[test]
    fn travel_at_or_under_threshold_never_counts_as_drag() {
        let mut wheel = seven();
        wheel.begin_drag(200.0);
        wheel.update_drag(205.0);
        wheel.update_drag(195.0);
        assert!(wheel.rotation().abs() < EPS);
        wheel.end_drag();
        assert!(wheel.rotation().abs() < EPS);

        // The release armed no suppression, so a click still lands.
        wheel.select(3);
        assert!((wheel.rotation() + base(3)).abs() < EPS);
    }

    #[test]
    fn threshold_is_sticky_once_crossed() {
        let mut wheel = seven();
        wheel.begin_drag(0.0);
        wheel.update_drag(6.0);
        assert!((wheel.rotation() - 1.5).abs() < EPS);
        // Back under the threshold, but the session keeps tracking.
        wheel.update_drag(1.0);
        assert!((wheel.rotation() - 0.25).abs() < EPS);
    }

    #[test]
    fn easing_is_off_exactly_while_dragging() {
        let mut wheel = seven();
        wheel.begin_drag(0.0);
        assert!(!wheel.eased());
        wheel.update_drag(40.0);
        assert!(!wheel.eased());
        wheel.end_drag();
        assert!(wheel.eased());
    }

    #[test]
    fn update_and_end_without_session_do_nothing() {
        let mut wheel = seven();
        wheel.update_drag(500.0);
        wheel.end_drag();
        assert!(wheel.rotation().abs() < EPS);
        assert!(wheel.eased());
    }

    #[test]
    fn release_snaps_to_nearest_step() {
        let mut wheel = seven();
        wheel.begin_drag(0.0);
        wheel.update_drag(80.0); // 20 degrees, below half a step
        wheel.end_drag();
        assert!(wheel.rotation().abs() < EPS);

        wheel.begin_drag(0.0);
        wheel.update_drag(120.0); // 30 degrees, past half a step
        wheel.end_drag();
        assert!((wheel.rotation() - STEP_DEG).abs() < EPS);
    }

    #[test]
    fn snap_lands_on_step_multiples() {
        let mut wheel = seven();
        for raw in [-400.0, -123.4, -25.0, 10.0, 111.1, 719.9] {
            wheel.rotate_to(raw);
            wheel.snap_to_step();
            let steps = wheel.rotation() / STEP_DEG;
            assert!(
                (steps - steps.round()).abs() < EPS,
                "snap left {} off-grid",
                wheel.rotation()
            );
        }
    }

    #[test]
    fn click_rotates_section_to_reference() {
        let mut wheel = seven();
        for index in 0..SLOT_COUNT {
            wheel.select(index);
            assert!((wheel.rotation() + base(index)).abs() < EPS);
            assert_eq!(wheel.active_index(), Some(index));
        }
    }

    #[test]
    fn click_out_of_range_changes_nothing() {
        let mut wheel = seven();
        wheel.select(2);
        wheel.select(SLOT_COUNT + 5);
        assert!((wheel.rotation() + base(2)).abs() < EPS);
        assert_eq!(wheel.active_index(), Some(2));
    }

    #[test]
    fn click_right_after_moved_release_is_swallowed_once() {
        let mut wheel = seven();
        wheel.begin_drag(0.0);
        wheel.update_drag(100.0);
        wheel.end_drag();
        let settled = wheel.rotation();

        wheel.select(3);
        assert!((wheel.rotation() - settled).abs() < EPS);

        wheel.select(3);
        assert!((wheel.rotation() + base(3)).abs() < EPS);
    }

    #[test]
    fn new_press_clears_stale_suppression() {
        let mut wheel = seven();
        wheel.begin_drag(0.0);
        wheel.update_drag(100.0);
        wheel.end_drag();

        // A clean press-and-release gesture follows; its click must land.
        wheel.begin_drag(50.0);
        wheel.end_drag();
        wheel.select(2);
        assert!((wheel.rotation() + base(2)).abs() < EPS);
    }

    #[test]
    fn drawer_key_rotates_matching_section() {
        let mut wheel = seven();
        assert!(wheel.select_key("s4"));
        assert!((wheel.rotation() + base(4)).abs() < EPS);
        assert_eq!(wheel.active_index(), Some(4));
    }

    #[test]
    fn unknown_drawer_key_changes_nothing() {
        let mut wheel = seven();
        wheel.rotate_to(33.0);
        assert!(!wheel.select_key("nope"));
        assert!((wheel.rotation() - 33.0).abs() < EPS);
    }

    #[test]
    fn active_follows_minimal_angular_distance() {
        let mut wheel = seven();
        wheel.rotate_to(-base(3));
        assert_eq!(wheel.active_index(), Some(3));

        // Slightly short of slot 3, slot 2 is still nearer.
        wheel.rotate_to(-(STEP_DEG * 2.49));
        assert_eq!(wheel.active_index(), Some(2));
    }

    #[test]
    fn active_survives_whole_turns() {
        let mut wheel = seven();
        wheel.rotate_to(10.0 + 360.0 * 5.0);
        assert_eq!(wheel.active_index(), Some(0));
        // Rotation itself stays unbounded.
        assert!((wheel.rotation() - 1810.0).abs() < EPS);

        wheel.rotate_to(-base(5) - 360.0 * 3.0);
        assert_eq!(wheel.active_index(), Some(5));
    }

    #[test]
    fn recompute_without_rotation_change_is_idempotent() {
        let mut wheel = seven();
        wheel.rotate_to(140.0);
        let first = wheel.active_index();
        wheel.rotate_to(140.0);
        assert_eq!(wheel.active_index(), first);
    }

    #[test]
    fn active_ties_keep_the_earliest_item() {
        let items = vec![
            WheelItem::new("a", "A", 90.0),
            WheelItem::new("b", "B", -90.0),
        ];
        let wheel = Wheel::new(items).unwrap();
        assert_eq!(wheel.active_index(), Some(0));
    }

    #[test]
    fn exactly_one_item_is_active_after_each_settle() {
        let mut wheel = seven();
        for raw in [-700.0, -33.3, 0.0, 25.7, 180.0, 333.3, 1000.0] {
            wheel.rotate_to(raw);
            let actives = wheel.items().iter().filter(|item| item.active).count();
            assert_eq!(actives, 1, "rotation {raw} left {actives} active items");
        }
    }
}
