//! Entrance animation timing.
//!
//! Everything here is a pure function of seconds elapsed since the view first
//! rendered, so the profile screen only has to feed in the frame clock.

/// A single delayed tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Seconds before the tween starts
    pub delay: f64,
    /// Seconds from start to finish
    pub duration: f64,
}

impl Tween {
    pub const fn new(delay: f64, duration: f64) -> Self {
        Self { delay, duration }
    }

    /// Eased progress in 0.0-1.0 at `elapsed` seconds.
    pub fn progress(&self, elapsed: f64) -> f32 {
        if elapsed <= self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        ease_out_cubic(t) as f32
    }

    /// Time at which the tween reaches its final value.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Heading: fades in while sliding down from `HEADING_OFFSET`.
pub const HEADING: Tween = Tween::new(0.0, 0.5);

/// Vertical start offset of the heading, in points.
pub const HEADING_OFFSET: f32 = -50.0;

/// Intro panel fade-in.
pub const INTRO_PANEL: Tween = Tween::new(0.2, 0.5);

/// Skills panel fade-in.
pub const SKILLS_PANEL: Tween = Tween::new(0.4, 0.5);

/// Contact panel fade-in.
pub const CONTACT_PANEL: Tween = Tween::new(0.6, 0.5);

/// Staggered fill timing for the skill bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStagger {
    /// Delay of the first bar
    pub base_delay: f64,
    /// Extra delay per bar index
    pub step: f64,
    /// Fill duration of each bar
    pub duration: f64,
}

impl Default for BarStagger {
    fn default() -> Self {
        Self {
            base_delay: 0.5,
            step: 0.1,
            duration: 1.0,
        }
    }
}

impl BarStagger {
    /// Tween for the bar at `index`.
    pub fn tween(&self, index: usize) -> Tween {
        Tween::new(self.base_delay + index as f64 * self.step, self.duration)
    }

    /// Filled fraction of the bar at `index` with final fraction `target`.
    pub fn fill(&self, index: usize, target: f32, elapsed: f64) -> f32 {
        target * self.tween(index).progress(elapsed)
    }
}

/// Clock for one view's entrance animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceClock {
    started_at: Option<f64>,
    reduce_motion: bool,
}

impl EntranceClock {
    pub fn new(reduce_motion: bool) -> Self {
        Self {
            started_at: None,
            reduce_motion,
        }
    }

    /// Seconds since the first frame. The first call starts the clock.
    ///
    /// With reduced motion every tween is reported as finished.
    pub fn elapsed(&mut self, now: f64) -> f64 {
        if self.reduce_motion {
            return f64::INFINITY;
        }
        let start = *self.started_at.get_or_insert(now);
        (now - start).max(0.0)
    }
}

/// Time after which no entrance animation is still running.
pub fn settle_time(stagger: &BarStagger, bar_count: usize) -> f64 {
    let last_bar = bar_count
        .checked_sub(1)
        .map(|i| stagger.tween(i).end())
        .unwrap_or(0.0);
    [HEADING.end(), INTRO_PANEL.end(), SKILLS_PANEL.end(), CONTACT_PANEL.end(), last_bar]
        .into_iter()
        .fold(0.0, f64::max)
}
