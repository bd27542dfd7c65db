//! Pomodoro timer state machine.
//!
//! The timer is caller-driven: it holds no thread and no clock. The owner
//! calls `tick()` once per elapsed second while it wants the countdown to
//! advance, and stops calling it to cancel ticking entirely. Dropping the
//! owner therefore stops the machine with no background work left behind.
//!
//! ## Phase cycle
//!
//! ```text
//! Pomodoro -> ShortBreak -> Pomodoro -> ... -> LongBreak -> Pomodoro
//! ```
//!
//! A completed Pomodoro leads to a short break, except every Nth completion
//! (N = long break interval) which leads to the long break and restarts the
//! interval count.

use crate::db::settings::Settings;
use crate::libs::messages::{append_error, Message};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerPhase {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl TimerPhase {
    /// Screen title shown while this phase is active.
    pub fn title(&self) -> String {
        match self {
            TimerPhase::Pomodoro => format!("{} - Time to Work!", self),
            TimerPhase::ShortBreak | TimerPhase::LongBreak => format!("{} - Take a Rest!", self),
        }
    }
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerPhase::Pomodoro => "Pomodoro",
            TimerPhase::ShortBreak => "Short Break",
            TimerPhase::LongBreak => "Long Break",
        };
        f.write_str(name)
    }
}

/// Durations and the long-break interval, mirrored from the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    pub pomodoro_secs: u32,
    pub short_break_secs: u32,
    pub long_break_secs: u32,
    pub long_break_interval: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            pomodoro_secs: 1500,
            short_break_secs: 300,
            long_break_secs: 900,
            long_break_interval: 4,
        }
    }
}

impl TimerSettings {
    /// Validates the settings, collecting every violated rule into one
    /// multi-line message. Nothing is persisted when validation fails.
    pub fn validate(&self) -> Result<(), String> {
        let mut errors = String::new();

        if self.pomodoro_secs < 1 || self.short_break_secs < 1 || self.long_break_secs < 1 {
            append_error(&mut errors, Message::TimerDurationTooShort);
        }
        if self.pomodoro_secs > 3600 || self.short_break_secs > 3600 || self.long_break_secs > 3600 {
            append_error(&mut errors, Message::TimerDurationTooLong);
        }
        if self.long_break_interval < 1 || self.long_break_interval > 10 {
            append_error(&mut errors, Message::LongBreakIntervalOutOfRange);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Outcome of a settings update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    Applied,
    /// Validation failed; contains the accumulated error message.
    Rejected(String),
}

/// The countdown state machine driving the Pomodoro cycle.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: TimerSettings,
    phase: TimerPhase,
    total: u32,
    remaining: u32,
    progress: f32,
    is_running: bool,
    current_interval: u32,
}

impl PomodoroTimer {
    /// Creates a timer in its initial state: a stopped Pomodoro with the
    /// full work duration remaining and interval count 1.
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            phase: TimerPhase::Pomodoro,
            total: settings.pomodoro_secs,
            remaining: settings.pomodoro_secs,
            progress: 1.0,
            is_running: false,
            current_interval: 1,
        }
    }

    /// Creates a timer configured from the settings store.
    pub fn from_store(store: &mut Settings) -> Result<Self> {
        Ok(Self::new(store.timer_settings()?))
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Fraction of the current interval still ahead, 1.0 at the start.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn current_interval(&self) -> u32 {
        self.current_interval
    }

    pub fn start(&mut self) {
        self.is_running = true;
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Forces the current interval to its end. Completion is handled on the
    /// next tick evaluation, exactly as a natural countdown expiry.
    pub fn skip(&mut self) {
        self.remaining = 0;
    }

    /// Returns the machine to its initial state using the current settings.
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Pomodoro;
        self.total = self.settings.pomodoro_secs;
        self.remaining = self.total;
        self.progress = 1.0;
        self.is_running = false;
        self.current_interval = 1;
    }

    /// Advances the countdown by one second.
    ///
    /// Does nothing unless the timer is running or an interval end is
    /// pending (after `skip()`). When the countdown reaches zero the timer
    /// stops, transitions to the next phase with its configured duration,
    /// and returns the phase that just completed so the caller can signal
    /// it.
    pub fn tick(&mut self) -> Option<TimerPhase> {
        if self.remaining == 0 {
            return Some(self.complete_interval());
        }
        if !self.is_running {
            return None;
        }

        self.progress = self.remaining as f32 / self.total as f32;
        self.remaining -= 1;

        if self.remaining == 0 {
            return Some(self.complete_interval());
        }
        None
    }

    /// Re-reads durations and the long-break interval from the store.
    pub fn reload_settings(&mut self, store: &mut Settings) -> Result<()> {
        self.settings = store.timer_settings()?;
        Ok(())
    }

    /// Validates and applies new settings.
    ///
    /// On success all four values are persisted, the settings are reloaded
    /// and the machine resets to its initial state. On validation failure
    /// nothing is written and the machine is untouched.
    pub fn update_settings(&mut self, store: &mut Settings, new: TimerSettings) -> Result<SettingsUpdate> {
        if let Err(message) = new.validate() {
            return Ok(SettingsUpdate::Rejected(message));
        }

        store.update_timer_settings(&new)?;
        self.settings = store.timer_settings()?;
        self.reset();
        Ok(SettingsUpdate::Applied)
    }

    fn complete_interval(&mut self) -> TimerPhase {
        let completed = self.phase;
        self.is_running = false;

        self.phase = match self.phase {
            TimerPhase::Pomodoro => {
                if self.current_interval >= self.settings.long_break_interval {
                    self.current_interval = 1;
                    TimerPhase::LongBreak
                } else {
                    self.current_interval += 1;
                    TimerPhase::ShortBreak
                }
            }
            TimerPhase::ShortBreak | TimerPhase::LongBreak => TimerPhase::Pomodoro,
        };

        self.total = match self.phase {
            TimerPhase::Pomodoro => self.settings.pomodoro_secs,
            TimerPhase::ShortBreak => self.settings.short_break_secs,
            TimerPhase::LongBreak => self.settings.long_break_secs,
        };
        self.remaining = self.total;
        self.progress = 1.0;

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_settings() -> TimerSettings {
        TimerSettings {
            pomodoro_secs: 2,
            short_break_secs: 1,
            long_break_secs: 3,
            long_break_interval: 4,
        }
    }

    /// Runs the current interval to completion, returning the finished phase.
    fn run_interval(timer: &mut PomodoroTimer) -> TimerPhase {
        timer.start();
        loop {
            if let Some(done) = timer.tick() {
                return done;
            }
        }
    }

    #[test]
    fn tick_decrements_and_updates_progress() {
        let mut timer = PomodoroTimer::new(TimerSettings::default());
        timer.start();
        assert_eq!(timer.remaining(), 1500);

        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining(), 1499);
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);

        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining(), 1498);
        assert!((timer.progress() - 1499.0 / 1500.0).abs() < 1e-6);
    }

    #[test]
    fn paused_timer_does_not_tick() {
        let mut timer = PomodoroTimer::new(TimerSettings::default());
        timer.start();
        timer.tick();
        timer.pause();
        let before = timer.remaining();
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining(), before);
    }

    #[test]
    fn completion_stops_timer_and_loads_next_phase() {
        let mut timer = PomodoroTimer::new(short_settings());
        assert_eq!(run_interval(&mut timer), TimerPhase::Pomodoro);
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), TimerPhase::ShortBreak);
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.total(), 1);
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fourth_pomodoro_completion_triggers_long_break() {
        let mut timer = PomodoroTimer::new(short_settings());

        for expected_interval in 1..=3u32 {
            assert_eq!(timer.current_interval(), expected_interval);
            assert_eq!(run_interval(&mut timer), TimerPhase::Pomodoro);
            assert_eq!(timer.phase(), TimerPhase::ShortBreak);
            assert_eq!(run_interval(&mut timer), TimerPhase::ShortBreak);
            assert_eq!(timer.phase(), TimerPhase::Pomodoro);
        }

        assert_eq!(timer.current_interval(), 4);
        assert_eq!(run_interval(&mut timer), TimerPhase::Pomodoro);
        assert_eq!(timer.phase(), TimerPhase::LongBreak);
        assert_eq!(timer.current_interval(), 1);
        assert_eq!(timer.remaining(), 3);

        assert_eq!(run_interval(&mut timer), TimerPhase::LongBreak);
        assert_eq!(timer.phase(), TimerPhase::Pomodoro);
    }

    #[test]
    fn skip_completes_on_next_tick_evaluation() {
        let mut timer = PomodoroTimer::new(TimerSettings::default());
        timer.skip();
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.tick(), Some(TimerPhase::Pomodoro));
        assert_eq!(timer.phase(), TimerPhase::ShortBreak);
        assert!(!timer.is_running());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut timer = PomodoroTimer::new(short_settings());
        run_interval(&mut timer);
        run_interval(&mut timer);
        timer.reset();
        assert_eq!(timer.phase(), TimerPhase::Pomodoro);
        assert_eq!(timer.current_interval(), 1);
        assert_eq!(timer.remaining(), 2);
        assert!(!timer.is_running());
    }

    #[test]
    fn validate_rejects_zero_duration() {
        let settings = TimerSettings {
            pomodoro_secs: 0,
            ..TimerSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("Timer Duration Cannot Be Shorter Than 1 Second"));
    }

    #[test]
    fn validate_rejects_out_of_range_interval() {
        let settings = TimerSettings {
            long_break_interval: 11,
            ..TimerSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("Long Break Interval Should Be Between 1-10"));
    }

    #[test]
    fn validate_collects_all_errors() {
        let settings = TimerSettings {
            pomodoro_secs: 0,
            short_break_secs: 4000,
            long_break_secs: 900,
            long_break_interval: 0,
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("Timer Duration Cannot Be Shorter Than 1 Second"));
        assert!(err.contains("Timer Duration Cannot Be Longer Than 3600 Seconds (60 Minutes)"));
        assert!(err.contains("Long Break Interval Should Be Between 1-10"));
        assert_eq!(err.matches("\n\n").count(), 2);
    }

    #[test]
    fn phase_titles() {
        assert_eq!(TimerPhase::Pomodoro.title(), "Pomodoro - Time to Work!");
        assert_eq!(TimerPhase::ShortBreak.title(), "Short Break - Take a Rest!");
        assert_eq!(TimerPhase::LongBreak.title(), "Long Break - Take a Rest!");
    }
}
