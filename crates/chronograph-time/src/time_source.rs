use std::cell::Cell;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::Instant;

static STARTUP: OnceLock<Instant> = OnceLock::new();

/// Something that can tell the current time in seconds since a fixed epoch.
///
/// Readings are not required to be monotonic nor high resolution, consumers must tolerate
/// a later reading that is smaller than an earlier one.
pub trait TimeSource {
    fn now(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Realtime since startup, backed by a process wide [`Instant`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RealtimeClock;

impl TimeSource for RealtimeClock {
    fn now(&self) -> f64 {
        STARTUP.get_or_init(Instant::now).elapsed().as_secs_f64()
    }
}

/// Current reading of the [`RealtimeClock`].
pub fn get_timestamp() -> f64 {
    RealtimeClock.now()
}

/// Clock driven by its owner, usually set once per frame from the host's frame time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    seconds: Cell<f64>,
}

impl ManualClock {
    pub fn new(seconds: f64) -> Self {
        Self {
            seconds: Cell::new(seconds),
        }
    }

    pub fn set(&self, seconds: f64) {
        self.seconds.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.seconds.set(self.seconds.get() + seconds);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        self.seconds.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn realtime_clock_advances() {
        let first = get_timestamp();
        thread::sleep(Duration::from_millis(5));
        let second = get_timestamp();

        assert!(first >= 0.0);
        assert!(second > first);
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::default();
        assert_eq!(clock.now(), 0.0);

        clock.advance(0.25);
        clock.advance(0.25);
        assert_eq!(clock.now(), 0.5);

        // Going backwards is allowed, it simulates a jittery host clock.
        clock.set(0.1);
        assert_eq!(clock.now(), 0.1);
    }

    #[test]
    fn shared_clock_is_read_through() {
        let clock = Rc::new(ManualClock::new(3.0));
        let by_ref = &*clock;
        let by_rc = Rc::clone(&clock);

        clock.advance(1.0);
        assert_eq!(by_ref.now(), 4.0);
        assert_eq!(by_rc.now(), 4.0);
    }
}
