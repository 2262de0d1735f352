use std::time::{Duration, Instant};

use crate::domain::{common::entities::language::Language, tips::entities::tips_for};

pub const DEFAULT_TIP_PERIOD: Duration = Duration::from_secs(10);

/// Cycles through the health tips of one language on a fixed period.
///
/// The rotator is driven by the caller's clock (`poll(now)`) rather than a
/// background timer, so restarting it is just resetting the index and the
/// last step instant.
#[derive(Debug, Clone)]
pub struct TipRotator {
    tips: &'static [&'static str],
    index: usize,
    period: Duration,
    last_step: Instant,
}

impl TipRotator {
    pub fn new(language: Language, now: Instant) -> Self {
        Self::with_period(language, DEFAULT_TIP_PERIOD, now)
    }

    pub fn with_period(language: Language, period: Duration, now: Instant) -> Self {
        Self {
            tips: tips_for(language),
            index: 0,
            period: period.max(Duration::from_millis(1)),
            last_step: now,
        }
    }

    pub fn current(&self) -> &'static str {
        self.tips[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % self.tips.len();
        self.current()
    }

    /// Steps once per whole period elapsed since the last step.
    pub fn poll(&mut self, now: Instant) -> &'static str {
        let elapsed = now.saturating_duration_since(self.last_step);
        let steps = elapsed.as_nanos() / self.period.as_nanos();
        if steps > 0 {
            let len = self.tips.len() as u128;
            self.index = ((self.index as u128 + steps % len) % len) as usize;
            // Keep the remainder so the cadence does not drift.
            let consumed = self.period.as_nanos() * steps;
            self.last_step += Duration::from_nanos(consumed.min(u64::MAX as u128) as u64);
        }
        self.current()
    }

    pub fn restart(&mut self, now: Instant) {
        self.index = 0;
        self.last_step = now;
    }

    pub fn set_language(&mut self, language: Language, now: Instant) {
        self.tips = tips_for(language);
        self.restart(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_around() {
        let now = Instant::now();
        let mut rotator = TipRotator::new(Language::En, now);
        let first = rotator.current();
        let len = tips_for(Language::En).len();
        for _ in 0..len {
            rotator.advance();
        }
        assert_eq!(rotator.current(), first);
    }

    #[test]
    fn test_poll_steps_by_elapsed_periods() {
        let start = Instant::now();
        let mut rotator = TipRotator::with_period(Language::Es, Duration::from_secs(10), start);

        rotator.poll(start + Duration::from_secs(9));
        assert_eq!(rotator.index(), 0);

        rotator.poll(start + Duration::from_secs(25));
        assert_eq!(rotator.index(), 2);

        rotator.poll(start + Duration::from_secs(30));
        assert_eq!(rotator.index(), 3);
    }

    #[test]
    fn test_restart_and_language_switch() {
        let start = Instant::now();
        let mut rotator = TipRotator::new(Language::Es, start);
        rotator.advance();
        rotator.advance();

        rotator.set_language(Language::En, start + Duration::from_secs(1));
        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.current(), tips_for(Language::En)[0]);

        rotator.poll(start + Duration::from_secs(10));
        assert_eq!(rotator.index(), 0);
    }
}
