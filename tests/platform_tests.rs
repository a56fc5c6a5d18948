//! Best-effort application of the overlay window flags.

use std::cell::RefCell;

use reticle::error::PlatformError;
use reticle::platform::{apply_overlay_styles, StyleReport, WindowStyler};

/// Records calls; fails the flags it is told to fail.
#[derive(Default)]
struct FakeStyler {
    fail_click_through: bool,
    fail_on_top: bool,
    calls: RefCell<Vec<(&'static str, u32)>>,
}

impl WindowStyler for FakeStyler {
    type Handle = u32;

    fn set_click_through(&self, window: u32) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(("click_through", window));
        if self.fail_click_through {
            return Err(PlatformError::call("SetWindowLongPtrW", "denied"));
        }
        Ok(())
    }

    fn set_always_on_top(&self, window: u32) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(("always_on_top", window));
        if self.fail_on_top {
            return Err(PlatformError::call("SetWindowPos", "denied"));
        }
        Ok(())
    }
}

#[test]
fn both_flags_applied_to_the_given_window() {
    let styler = FakeStyler::default();
    let report = apply_overlay_styles(&styler, 42);

    assert_eq!(
        report,
        StyleReport {
            click_through: true,
            always_on_top: true
        }
    );
    assert_eq!(
        *styler.calls.borrow(),
        vec![("click_through", 42), ("always_on_top", 42)]
    );
}

#[test]
fn click_through_failure_still_sets_topmost() {
    let styler = FakeStyler {
        fail_click_through: true,
        ..Default::default()
    };
    let report = apply_overlay_styles(&styler, 7);

    assert!(!report.click_through);
    assert!(report.always_on_top);
    assert_eq!(styler.calls.borrow().len(), 2);
}

#[test]
fn all_failures_are_reported_without_panicking() {
    let styler = FakeStyler {
        fail_click_through: true,
        fail_on_top: true,
        ..Default::default()
    };
    let report = apply_overlay_styles(&styler, 1);

    assert_eq!(
        report,
        StyleReport {
            click_through: false,
            always_on_top: false
        }
    );
}
