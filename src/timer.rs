//! Monotonic stopwatch used to time each harness.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
    stopped: Option<Instant>,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    pub fn stop(&mut self) -> Duration {
        let now = Instant::now();
        self.stopped = Some(now);
        now.duration_since(self.started)
    }

    /// Time between start and stop, or until now while still running.
    pub fn elapsed(&self) -> Duration {
        match self.stopped {
            Some(stopped) => stopped.duration_since(self.started),
            None => self.started.elapsed(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_stopped_elapsed_is_frozen() {
        let mut watch = Stopwatch::start();
        thread::sleep(Duration::from_millis(2));
        let stopped = watch.stop();
        thread::sleep(Duration::from_millis(2));
        assert_eq!(watch.elapsed(), stopped);
        assert!(watch.elapsed_secs() >= 0.002);
    }

    #[test]
    fn test_running_elapsed_grows() {
        let watch = Stopwatch::start();
        let first = watch.elapsed();
        thread::sleep(Duration::from_millis(1));
        assert!(watch.elapsed() > first);
    }
}
