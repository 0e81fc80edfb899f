//! Typing/deleting text cycler behind the hero role label.
//!
//! [`RoleCycler`] is a plain state machine: every call to [`RoleCycler::tick`]
//! performs one transition, and [`RoleCycler::next_delay`] says how long the
//! caller should wait before the next one. Timers live in [`driver`].

pub mod driver;

use std::time::Duration;

use thiserror::Error;

pub use driver::{CyclerDriver, Scheduler};

/// Stage of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CyclerError {
    #[error("role list must contain at least one label")]
    NoLabels,
    #[error("role label at index {index} is empty")]
    EmptyLabel { index: usize },
}

/// Delays between ticks for each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclerTiming {
    pub typing: Duration,
    pub pause: Duration,
    pub deleting: Duration,
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            pause: Duration::from_millis(2000),
            deleting: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoleCycler {
    roles: Vec<String>,
    timing: CyclerTiming,
    index: usize,
    // length of the displayed prefix, in chars
    typed: usize,
    displayed: String,
    phase: Phase,
}

impl RoleCycler {
    pub fn new<I, S>(roles: I) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_timing(roles, CyclerTiming::default())
    }

    pub fn with_timing<I, S>(roles: I, timing: CyclerTiming) -> Result<Self, CyclerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles.into_iter().map(Into::into).collect::<Vec<String>>();
        if roles.is_empty() {
            return Err(CyclerError::NoLabels);
        }
        if let Some(index) = roles.iter().position(|r| r.is_empty()) {
            return Err(CyclerError::EmptyLabel { index });
        }
        Ok(Self {
            roles,
            timing,
            index: 0,
            typed: 0,
            displayed: String::new(),
            phase: Phase::Typing,
        })
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_label(&self) -> &str {
        &self.roles[self.index]
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn timing(&self) -> CyclerTiming {
        self.timing
    }

    /// How long to wait before the next [`tick`](Self::tick).
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.typing,
            Phase::Pausing => self.timing.pause,
            Phase::Deleting => self.timing.deleting,
        }
    }

    /// Runs one transition of the state machine.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Typing => {
                let label = &self.roles[self.index];
                if let Some(c) = label.chars().nth(self.typed) {
                    self.displayed.push(c);
                    self.typed += 1;
                }
                if self.typed >= label.chars().count() {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.displayed.pop().is_some() {
                    self.typed -= 1;
                }
                if self.typed == 0 {
                    self.index = (self.index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    log::trace!("role cycler advanced to label {}", self.index);
                }
            }
        }
    }
}
