use log::info;

/// Where the clock is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    Running,
    Paused,
    /// The step ceiling is reached. Only a reset leaves this state.
    Finished,
}

/// Discrete step counter with a ceiling and pause control.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    current_step: usize,
    max_steps: usize,
    paused: bool,
}

impl SimulationClock {
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self {
            current_step: 0,
            max_steps,
            paused: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> ClockState {
        if self.current_step >= self.max_steps {
            ClockState::Finished
        } else if self.paused {
            ClockState::Paused
        } else {
            ClockState::Running
        }
    }

    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == ClockState::Running
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state() == ClockState::Finished
    }

    /// Advance by one step if running. Returns whether the step was taken.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.current_step += 1;
        if self.current_step == self.max_steps {
            info!("step ceiling {} reached", self.max_steps);
        }
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to step zero, running.
    pub fn reset(&mut self) {
        self.current_step = 0;
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick() {
        let mut clock = SimulationClock::new(10);
        assert_eq!(clock.state(), ClockState::Running);
        assert!(clock.tick());
        assert_eq!(clock.current_step(), 1);
    }

    #[test]
    fn test_pause_resume() {
        let mut clock = SimulationClock::new(10);
        clock.pause();
        assert_eq!(clock.state(), ClockState::Paused);
        assert!(!clock.tick());
        assert_eq!(clock.current_step(), 0);

        clock.resume();
        assert!(clock.tick());

        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(clock.is_running());
    }

    #[test]
    fn test_ceiling() {
        let mut clock = SimulationClock::new(3);
        for _ in 0..3 {
            assert!(clock.tick());
        }
        assert_eq!(clock.state(), ClockState::Finished);
        assert!(!clock.tick());
        assert_eq!(clock.current_step(), 3);

        // resuming does not leave the finished state
        clock.resume();
        assert!(clock.is_finished());
    }

    #[test]
    fn test_reset() {
        let mut clock = SimulationClock::new(2);
        clock.tick();
        clock.tick();
        clock.pause();

        clock.reset();

        assert_eq!(clock.current_step(), 0);
        assert_eq!(clock.state(), ClockState::Running);
    }
}
