// Live walk through a service while it is being held

use crate::models::ServiceComponent;
use crate::service::duration::effective_duration_minutes;

/// Cursor over a run-sheet plus a service clock.
#[derive(Debug, Clone)]
pub struct Celebration<'a> {
    components: &'a [ServiceComponent],
    index: usize,
    elapsed_seconds: u64,
    running: bool,
}

impl<'a> Celebration<'a> {
    pub fn new(components: &'a [ServiceComponent]) -> Self {
        Self {
            components,
            index: 0,
            elapsed_seconds: 0,
            running: false,
        }
    }

    pub fn current(&self) -> Option<&'a ServiceComponent> {
        self.components.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.components.len()
    }

    /// Advances one component. Returns false when already at the end.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Steps back one component. Returns false when already at the start.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn toggle_timer(&mut self) {
        self.running = !self.running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the clock; ignored while paused.
    pub fn tick(&mut self, seconds: u64) {
        if self.running {
            self.elapsed_seconds += seconds;
        }
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    /// Planned minutes from the current component to the end.
    pub fn remaining_minutes(&self, words_per_minute: u32) -> u32 {
        self.components
            .iter()
            .skip(self.index)
            .map(|c| effective_duration_minutes(c, words_per_minute))
            .sum()
    }
}

/// `H:MM:SS` from one hour on, `M:SS` below.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
