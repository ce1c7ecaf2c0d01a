//! Carousel Controller
//!
//! Index cycling for the featured-agents carousel: manual navigation,
//! timed autoplay that pauses while the pointer hovers, and touch swipes.
//!
//! The timer itself lives behind [`Scheduler`] so the same controller runs
//! against browser intervals in the front end and a fake clock in tests.

use std::time::Duration;

/// Time between automatic advances
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Horizontal distance a swipe must exceed to navigate, in CSS pixels
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Index state over a fixed-length sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    autoplay: bool,
}

impl Carousel {
    /// Start at index 0 with autoplay enabled
    pub const fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            autoplay: true,
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`. Out-of-range targets are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Timer callback. Advances only while autoplay is enabled.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.next();
        }
    }

    pub fn hover_start(&mut self) {
        self.autoplay = false;
    }

    pub fn hover_end(&mut self) {
        self.autoplay = true;
    }

    pub fn apply_swipe(&mut self, swipe: Swipe) {
        match swipe {
            Swipe::Left => self.next(),
            Swipe::Right => self.previous(),
        }
    }
}

/// Direction of a completed swipe, named after the finger's motion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved toward smaller x; shows the next slide
    Left,
    /// Finger moved toward larger x; shows the previous slide
    Right,
}

/// Tracks one touch gesture from start to end
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub const fn new() -> Self {
        Self { start_x: None }
    }

    pub const fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. Motion at or below the threshold yields `None`.
    pub fn end(&mut self, x: f64) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta > SWIPE_THRESHOLD_PX {
            Some(Swipe::Left)
        } else if -delta > SWIPE_THRESHOLD_PX {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    pub const fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Source of recurring timers
pub trait Scheduler {
    /// Handle to an armed timer
    type Handle;

    /// Arm a timer firing every `period`
    fn start(&mut self, period: Duration) -> Self::Handle;

    /// Cancel a previously armed timer
    fn stop(&mut self, handle: Self::Handle);
}

/// Owns the autoplay timer for one carousel view.
///
/// At most one timer is armed at a time. Dropping the driver cancels it, so
/// tearing down the view never leaves a callback running against it.
pub struct Autoplay<S: Scheduler> {
    scheduler: S,
    period: Duration,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> Autoplay<S> {
    pub const fn new(scheduler: S, period: Duration) -> Self {
        Self {
            scheduler,
            period,
            handle: None,
        }
    }

    pub const fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Arm or cancel the timer to match `enabled`
    pub fn sync(&mut self, enabled: bool) {
        match (enabled, self.handle.is_some()) {
            (true, false) => {
                tracing::trace!(period_ms = self.period.as_millis(), "autoplay armed");
                self.handle = Some(self.scheduler.start(self.period));
            }
            (false, true) => self.shutdown(),
            _ => {}
        }
    }

    /// Cancel any armed timer
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::trace!("autoplay cancelled");
            self.scheduler.stop(handle);
        }
    }
}

impl<S: Scheduler> Drop for Autoplay<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counts armed timers; shared so tests can inspect it after drop
    #[derive(Clone, Default)]
    struct FakeScheduler {
        active: Rc<RefCell<Vec<u32>>>,
        started: Rc<RefCell<u32>>,
    }

    impl Scheduler for FakeScheduler {
        type Handle = u32;

        fn start(&mut self, _period: Duration) -> u32 {
            let mut started = self.started.borrow_mut();
            *started += 1;
            self.active.borrow_mut().push(*started);
            *started
        }

        fn stop(&mut self, handle: u32) {
            self.active.borrow_mut().retain(|h| *h != handle);
        }
    }

    #[test]
    fn test_initial_state() {
        let carousel = Carousel::new(5);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.autoplay_enabled());
    }

    #[test]
    fn test_previous_wraps() {
        let mut carousel = Carousel::new(5);
        carousel.previous();
        assert_eq!(carousel.index(), 4);
        carousel.previous();
        carousel.previous();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(3);
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_go_to() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.go_to(3));
        assert_eq!(carousel.index(), 3);
        assert!(!carousel.go_to(4));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        carousel.tick();
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_tick_respects_hover() {
        let mut carousel = Carousel::new(3);
        carousel.tick();
        assert_eq!(carousel.index(), 1);

        carousel.hover_start();
        carousel.tick();
        assert_eq!(carousel.index(), 1);

        carousel.hover_end();
        carousel.tick();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_swipe_threshold() {
        let mut tracker = SwipeTracker::new();

        tracker.begin(200.0);
        assert_eq!(tracker.end(200.0 - SWIPE_THRESHOLD_PX), None);

        tracker.begin(200.0);
        assert_eq!(tracker.end(200.0 - SWIPE_THRESHOLD_PX - 1.0), Some(Swipe::Left));

        tracker.begin(200.0);
        assert_eq!(tracker.end(200.0 + SWIPE_THRESHOLD_PX), None);

        tracker.begin(200.0);
        assert_eq!(tracker.end(200.0 + SWIPE_THRESHOLD_PX + 1.0), Some(Swipe::Right));
    }

    #[test]
    fn test_swipe_without_start_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.end(0.0), None);

        tracker.begin(10.0);
        tracker.cancel();
        assert_eq!(tracker.end(500.0), None);
    }

    #[test]
    fn test_swipe_navigates() {
        let mut carousel = Carousel::new(5);
        carousel.apply_swipe(Swipe::Right);
        assert_eq!(carousel.index(), 4);
        carousel.apply_swipe(Swipe::Left);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_autoplay_arms_once() {
        let scheduler = FakeScheduler::default();
        let mut autoplay = Autoplay::new(scheduler.clone(), AUTOPLAY_INTERVAL);

        autoplay.sync(true);
        autoplay.sync(true);
        assert!(autoplay.is_armed());
        assert_eq!(scheduler.active.borrow().len(), 1);
        assert_eq!(*scheduler.started.borrow(), 1);
    }

    #[test]
    fn test_autoplay_follows_hover() {
        let scheduler = FakeScheduler::default();
        let mut autoplay = Autoplay::new(scheduler.clone(), AUTOPLAY_INTERVAL);
        let mut carousel = Carousel::new(3);

        autoplay.sync(carousel.autoplay_enabled());
        carousel.hover_start();
        autoplay.sync(carousel.autoplay_enabled());
        assert!(!autoplay.is_armed());
        assert!(scheduler.active.borrow().is_empty());

        carousel.hover_end();
        autoplay.sync(carousel.autoplay_enabled());
        assert!(autoplay.is_armed());
        assert_eq!(scheduler.active.borrow().len(), 1);
        assert_eq!(*scheduler.started.borrow(), 2);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let scheduler = FakeScheduler::default();
        {
            let mut autoplay = Autoplay::new(scheduler.clone(), AUTOPLAY_INTERVAL);
            autoplay.sync(true);
            assert_eq!(scheduler.active.borrow().len(), 1);
        }
        assert!(scheduler.active.borrow().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Next,
            Previous,
            GoTo(usize),
            Tick,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::Next),
                Just(Op::Previous),
                (0usize..20).prop_map(Op::GoTo),
                Just(Op::Tick),
            ]
        }

        proptest! {
            #[test]
            fn index_stays_in_bounds(len in 1usize..12, ops in prop::collection::vec(op_strategy(), 0..64)) {
                let mut carousel = Carousel::new(len);
                for op in ops {
                    match op {
                        Op::Next => carousel.next(),
                        Op::Previous => carousel.previous(),
                        Op::GoTo(i) => { carousel.go_to(i); }
                        Op::Tick => carousel.tick(),
                    }
                    prop_assert!(carousel.index() < len);
                }
            }
        }
    }
}
