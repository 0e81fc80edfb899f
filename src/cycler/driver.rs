use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use super::{Phase, RoleCycler};

/// A one-shot timer source.
///
/// `schedule` must never run the callback synchronously. Returning `None`
/// means the timer could not be armed.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

type OnChange = Rc<dyn Fn(&str)>;

struct DriverState<H> {
    cycler: RoleCycler,
    pending: Option<H>,
    disposed: bool,
    on_change: OnChange,
}

/// Runs a [`RoleCycler`] off a [`Scheduler`], keeping exactly one timer armed.
///
/// Callbacks only hold weak references, so a timer that outlives the driver
/// cannot touch the cycler.
pub struct CyclerDriver<S: Scheduler + 'static> {
    scheduler: Rc<S>,
    state: Rc<RefCell<DriverState<S::Handle>>>,
}

impl<S: Scheduler + 'static> CyclerDriver<S> {
    /// Emits the initial text and arms the first tick.
    pub fn start(
        cycler: RoleCycler,
        scheduler: Rc<S>,
        on_change: impl Fn(&str) + 'static,
    ) -> Self {
        let on_change: OnChange = Rc::new(on_change);
        on_change(cycler.displayed_text());
        let delay = cycler.next_delay();
        let state = Rc::new(RefCell::new(DriverState {
            cycler,
            pending: None,
            disposed: false,
            on_change,
        }));
        arm(&scheduler, &state, delay);
        Self { scheduler, state }
    }

    /// Cancels the pending tick. No further state changes happen afterwards.
    pub fn dispose(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
        log::debug!("role cycler disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    pub fn has_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn displayed_text(&self) -> String {
        self.state.borrow().cycler.displayed_text().to_owned()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().cycler.phase()
    }

    pub fn current_index(&self) -> usize {
        self.state.borrow().cycler.current_index()
    }
}

impl<S: Scheduler + 'static> Drop for CyclerDriver<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn arm<S: Scheduler + 'static>(
    scheduler: &Rc<S>,
    state: &Rc<RefCell<DriverState<S::Handle>>>,
    delay: Duration,
) {
    if state.borrow().disposed {
        return;
    }
    let callback = {
        let scheduler = Rc::downgrade(scheduler);
        let state = Rc::downgrade(state);
        Box::new(move || fire(scheduler, state))
    };
    match scheduler.schedule(delay, callback) {
        Some(handle) => state.borrow_mut().pending = Some(handle),
        None => log::warn!("could not schedule role cycler tick, animation stopped"),
    }
}

fn fire<S: Scheduler + 'static>(
    scheduler: Weak<S>,
    state: Weak<RefCell<DriverState<S::Handle>>>,
) {
    let (Some(scheduler), Some(state)) = (scheduler.upgrade(), state.upgrade()) else {
        return;
    };
    let (text, delay, on_change) = {
        let mut st = state.borrow_mut();
        if st.disposed {
            return;
        }
        st.pending = None;
        st.cycler.tick();
        (
            st.cycler.displayed_text().to_owned(),
            st.cycler.next_delay(),
            Rc::clone(&st.on_change),
        )
    };
    on_change(&text);
    arm(&scheduler, &state, delay);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Virtual clock: callbacks fire only when the test advances time.
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<Duration>,
        next_id: Cell<u64>,
        queue: RefCell<Vec<(Duration, u64, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        fn advance(&self, delta: Duration) {
            let target = self.now.get() + delta;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= target)
                        .min_by_key(|(_, (at, id, _))| (*at, *id))
                        .map(|(i, _)| i);
                    due.map(|i| queue.remove(i))
                };
                match next {
                    Some((at, _, callback)) => {
                        self.now.set(at);
                        callback();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }

        fn advance_ms(&self, ms: u64) {
            self.advance(Duration::from_millis(ms));
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<u64> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue
                .borrow_mut()
                .push((self.now.get() + delay, id, callback));
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.queue.borrow_mut().retain(|(_, id, _)| *id != handle);
        }
    }

    /// Scheduler that refuses every timer.
    struct DeadScheduler;

    impl Scheduler for DeadScheduler {
        type Handle = ();

        fn schedule(&self, _delay: Duration, _callback: Box<dyn FnOnce()>) -> Option<()> {
            None
        }

        fn cancel(&self, _handle: ()) {}
    }

    fn start(
        roles: &[&str],
    ) -> (
        Rc<ManualScheduler>,
        CyclerDriver<ManualScheduler>,
        Rc<RefCell<Vec<String>>>,
    ) {
        let scheduler = Rc::new(ManualScheduler::default());
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        let driver = CyclerDriver::start(
            RoleCycler::new(roles.iter().copied()).unwrap(),
            Rc::clone(&scheduler),
            move |text: &str| sink.borrow_mut().push(text.to_owned()),
        );
        (scheduler, driver, emitted)
    }

    #[test]
    fn test_start_emits_and_arms_one_timer() {
        let (scheduler, driver, emitted) = start(&["Go"]);
        assert_eq!(*emitted.borrow(), vec![String::new()]);
        assert_eq!(scheduler.pending(), 1);
        assert!(driver.has_pending());
    }

    #[test]
    fn test_typing_waits_full_interval() {
        let (scheduler, driver, _) = start(&["Go"]);
        scheduler.advance_ms(99);
        assert_eq!(driver.displayed_text(), "");
        scheduler.advance_ms(1);
        assert_eq!(driver.displayed_text(), "G");
    }

    #[test]
    fn test_one_timer_outstanding_at_every_step() {
        let (scheduler, driver, _) = start(&["Go", "Rust"]);
        for _ in 0..200 {
            scheduler.advance_ms(50);
            assert_eq!(scheduler.pending(), 1);
            assert!(driver.has_pending());
        }
    }

    #[test]
    fn test_go_rust_trace_on_virtual_clock() {
        let (scheduler, driver, emitted) = start(&["Go", "Rust"]);

        scheduler.advance_ms(200);
        assert_eq!(driver.displayed_text(), "Go");
        assert_eq!(driver.phase(), Phase::Pausing);

        scheduler.advance_ms(1999);
        assert_eq!(driver.phase(), Phase::Pausing);
        scheduler.advance_ms(1);
        assert_eq!(driver.phase(), Phase::Deleting);
        assert_eq!(driver.displayed_text(), "Go");

        scheduler.advance_ms(100);
        assert_eq!(driver.displayed_text(), "");
        assert_eq!(driver.current_index(), 1);
        assert_eq!(driver.phase(), Phase::Typing);

        scheduler.advance_ms(400);
        assert_eq!(driver.displayed_text(), "Rust");

        let expected = ["", "G", "Go", "Go", "G", "", "R", "Ru", "Rus", "Rust"];
        assert_eq!(*emitted.borrow(), expected);
    }

    #[test]
    fn test_dispose_mid_typing_stops_mutation() {
        let (scheduler, driver, emitted) = start(&["Rust"]);
        scheduler.advance_ms(100);
        assert_eq!(driver.displayed_text(), "R");

        driver.dispose();
        assert!(driver.is_disposed());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance_ms(100);
        scheduler.advance_ms(5000);
        assert_eq!(driver.displayed_text(), "R");
        assert_eq!(emitted.borrow().len(), 2);
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let (scheduler, driver, _) = start(&["Rust"]);
        driver.dispose();
        driver.dispose();
        assert!(!driver.has_pending());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_drop_cancels_pending_timer() {
        let (scheduler, driver, emitted) = start(&["Rust"]);
        drop(driver);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance_ms(1000);
        assert_eq!(emitted.borrow().len(), 1);
    }

    #[test]
    fn test_stale_callback_after_drop_is_noop() {
        let scheduler = Rc::new(ManualScheduler::default());
        let emitted = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&emitted);
        let driver = CyclerDriver::start(
            RoleCycler::new(["Go"]).unwrap(),
            Rc::clone(&scheduler),
            move |text: &str| sink.borrow_mut().push(text.to_owned()),
        );
        // forget the handle so the timer survives the driver
        driver.state.borrow_mut().pending = None;
        drop(driver);
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance_ms(100);
        assert_eq!(emitted.borrow().len(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_unschedulable_timer_stops_quietly() {
        let emitted = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&emitted);
        let driver = CyclerDriver::start(
            RoleCycler::new(["Go"]).unwrap(),
            Rc::new(DeadScheduler),
            move |text: &str| sink.borrow_mut().push(text.to_owned()),
        );
        assert!(!driver.has_pending());
        assert_eq!(emitted.borrow().len(), 1);
    }
}
