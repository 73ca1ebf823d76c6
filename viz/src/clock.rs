use anyhow::Result;
use geom::{Duration, Time};

/// Maps wall-clock time onto a repeating animation time in
/// `[START_OF_DAY, START_OF_DAY + loop_length)`.
#[derive(Clone, Copy)]
pub struct Clock {
    loop_length: Duration,
    /// Data-time units advanced per real second.
    animation_speed: f64,
}

impl Clock {
    pub fn new(loop_length: Duration, animation_speed: f64) -> Result<Self> {
        if loop_length <= Duration::ZERO {
            bail!("loop_length must be positive, got {}", loop_length);
        }
        if animation_speed <= 0.0 {
            bail!("animation_speed must be positive, got {}", animation_speed);
        }
        Ok(Self {
            loop_length,
            animation_speed,
        })
    }

    pub fn loop_length(&self) -> Duration {
        self.loop_length
    }

    /// How many real seconds one full loop takes.
    pub fn loop_time(&self) -> Duration {
        Duration::seconds(self.loop_length.inner_seconds() / self.animation_speed)
    }

    /// Pure function of the input; calling with increasing `now_seconds`
    /// produces a sawtooth that wraps to the loop start every `loop_time()`
    /// real seconds.
    pub fn tick(&self, now_seconds: f64) -> Time {
        let loop_secs = self.loop_length.inner_seconds();
        let loop_time = loop_secs / self.animation_speed;
        let pct = now_seconds.rem_euclid(loop_time) / loop_time;
        Time::START_OF_DAY + Duration::seconds(pct * loop_secs)
    }
}
