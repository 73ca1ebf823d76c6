use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A periodic tick driving the animation, in place of a vsync callback. The
/// callback gets the current wall-clock time in seconds, once per frame.
///
/// The handle is the cancellation token: dropping it (or calling `stop`)
/// joins the worker, so once that returns, no further tick can fire.
pub struct Animation {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Animation {
    pub fn start<F: FnMut(f64) + Send + 'static>(frame_time: Duration, mut callback: F) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let stop = cancel.clone();
        let handle = std::thread::spawn(move || {
            while !stop.load(Ordering::SeqCst) {
                callback(now_seconds());
                std::thread::sleep(frame_time);
            }
        });
        Self {
            cancel,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.cancel.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            // The worker never panics, but don't let teardown hide it if that
            // ever changes
            if handle.join().is_err() {
                log::error!("Animation worker panicked");
            }
        }
    }
}

impl Drop for Animation {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn now_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_no_ticks_after_stop() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let animation = Animation::start(Duration::from_millis(1), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        std::thread::sleep(Duration::from_millis(50));
        animation.stop();
        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop > 0);

        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_drop_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        {
            let _animation = Animation::start(Duration::from_millis(1), move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
            std::thread::sleep(Duration::from_millis(20));
        }
        let after_drop = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn test_ticks_carry_increasing_time() {
        let times = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = times.clone();
        let animation = Animation::start(Duration::from_millis(5), move |now| {
            seen.lock().unwrap().push(now);
        });
        std::thread::sleep(Duration::from_millis(50));
        animation.stop();

        let times = times.lock().unwrap();
        assert!(times.len() >= 2);
        for pair in times.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
