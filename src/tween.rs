//! Time-driven integer counter animation.
//!
//! A [`CounterTween`] is sampled once per animation frame with the frame
//! clock's timestamp. The first sample anchors the start time; progress is
//! linear in elapsed time and clamped to `[0, 1]`. Once a sample reaches
//! progress 1 the tween is finished for good and keeps reporting its end
//! value.

/// One sampled animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    pub value: u64,
    pub progress: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    start: u64,
    end: u64,
    duration_ms: f64,
    started_at: Option<f64>,
    finished: bool,
}

impl CounterTween {
    pub fn new(start: u64, end: u64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
            started_at: None,
            finished: false,
        }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sample the counter at frame time `now` (milliseconds).
    pub fn sample(&mut self, now: f64) -> TweenFrame {
        if self.finished {
            return TweenFrame {
                value: self.end,
                progress: 1.0,
                finished: true,
            };
        }

        let started_at = *self.started_at.get_or_insert(now);
        let progress = progress(now - started_at, self.duration_ms);
        let value = interpolate(self.start, self.end, progress);
        self.finished = progress >= 1.0;

        TweenFrame {
            value,
            progress,
            finished: self.finished,
        }
    }
}

/// Fraction of `duration_ms` covered by `elapsed_ms`, clamped to `[0, 1]`.
///
/// A non-positive duration completes immediately.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms.is_nan() || duration_ms <= 0.0 {
        return 1.0;
    }
    if elapsed_ms.is_nan() {
        return 0.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// `floor(start + progress * (end - start))`, exact at both ends.
pub fn interpolate(start: u64, end: u64, progress: f64) -> u64 {
    if progress >= 1.0 {
        return end;
    }
    if progress <= 0.0 {
        return start;
    }

    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    let start_f = start as f64;
    let value = (start_f + progress * (end as f64 - start_f)).floor();
    (value as u64).clamp(low, high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect_values(tween: &mut CounterTween, frame_ms: f64) -> Vec<u64> {
        let mut values = Vec::new();
        let mut now = 1_000.0;
        loop {
            let frame = tween.sample(now);
            values.push(frame.value);
            if frame.finished {
                return values;
            }
            now += frame_ms;
        }
    }

    #[test]
    fn first_sample_anchors_start_time() {
        let mut tween = CounterTween::new(0, 1_000, 500.0);
        let first = tween.sample(12_345.0);
        assert_eq!(first.value, 0);
        assert_eq!(first.progress, 0.0);
        assert!(!first.finished);

        let mid = tween.sample(12_595.0);
        assert_eq!(mid.value, 500);
        assert_eq!(mid.progress, 0.5);
    }

    #[test]
    fn ascending_counter_is_monotonic_and_exact() {
        for duration in [1.0, 16.0, 500.0, 1_337.0] {
            let mut tween = CounterTween::new(120, 2_550, duration);
            let values = collect_values(&mut tween, 16.0);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "duration {}", duration);
            assert_eq!(values.last().copied(), Some(2_550));
        }
    }

    #[test]
    fn descending_counter_reaches_target() {
        let mut tween = CounterTween::new(2_550, 1_200, 500.0);
        let values = collect_values(&mut tween, 16.0);
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(values.last().copied(), Some(1_200));
    }

    #[test]
    fn finished_tween_does_not_restart() {
        let mut tween = CounterTween::new(0, 10, 100.0);
        tween.sample(0.0);
        assert!(tween.sample(100.0).finished);

        let later = tween.sample(5.0);
        assert_eq!(later.value, 10);
        assert!(later.finished);
        assert!(tween.is_finished());
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut tween = CounterTween::new(5, 900, 0.0);
        let frame = tween.sample(42.0);
        assert_eq!(frame.value, 900);
        assert!(frame.finished);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-10.0, 500.0), 0.0);
        assert_eq!(progress(250.0, 500.0), 0.5);
        assert_eq!(progress(10_000.0, 500.0), 1.0);
        assert_eq!(progress(f64::NAN, 500.0), 0.0);
        assert_eq!(progress(1.0, f64::NAN), 1.0);
    }

    #[test]
    fn interpolate_floors_intermediate_values() {
        assert_eq!(interpolate(0, 3, 0.5), 1);
        assert_eq!(interpolate(3, 0, 0.5), 1);
        assert_eq!(interpolate(7, 7, 0.3), 7);
    }
}
