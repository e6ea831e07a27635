use super::*;

#[test]
fn left_is_kept_when_the_menu_fits() {
    assert_eq!(clamp_menu_left(100.0, 1000.0), 100.0);
}

#[test]
fn left_shifts_back_when_the_menu_would_overflow() {
    assert_eq!(clamp_menu_left(950.0, 1000.0), 1000.0 - MENU_WIDTH);
}

#[test]
fn left_never_goes_negative() {
    assert_eq!(clamp_menu_left(-20.0, 1000.0), 0.0);
}

#[test]
fn narrow_viewports_pin_the_menu_to_the_edge() {
    // Viewport narrower than the menu itself.
    assert_eq!(clamp_menu_left(50.0, 100.0), 0.0);
}

#[test]
fn unknown_viewport_width_leaves_left_alone() {
    assert_eq!(clamp_menu_left(640.0, f64::INFINITY), 640.0);
}
