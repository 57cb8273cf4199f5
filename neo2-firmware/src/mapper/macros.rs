use heapless::Deque;

/// One step of a macro definition. Modifiers are ordinary keycodes so `Down(kc::LSFT)` presses
/// shift.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroStep {
    /// Pause this many milliseconds after every following step.
    Interval(u16),
    Down(u16),
    Up(u16),
    /// Press then release.
    Tap(u16),
    Wait(u16),
}

/// The primitive events a macro expands to.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroEvent {
    Press(u16),
    Release(u16),
    Delay(u16),
}

/// Expands a macro into its [MacroEvent]s. Each step is followed by the current interval pause,
/// including the `Interval` step itself.
pub struct MacroPlayer<'m> {
    steps: core::slice::Iter<'m, MacroStep>,
    interval: u16,
    pending: Deque<MacroEvent, 4>,
}

impl<'m> MacroPlayer<'m> {
    pub fn new(steps: &'m [MacroStep]) -> Self {
        Self {
            steps: steps.iter(),
            interval: 0,
            pending: Deque::new(),
        }
    }

    fn push(&mut self, event: MacroEvent) {
        if self.pending.push_back(event).is_err() {
            crate::error!("macro event overflow {:?}", event);
        }
    }

    fn pause(&mut self) {
        if self.interval != 0 {
            self.push(MacroEvent::Delay(self.interval));
        }
    }

    fn expand(&mut self, step: MacroStep) {
        match step {
            MacroStep::Interval(ms) => {
                self.interval = ms;
            }
            MacroStep::Down(kc) => self.push(MacroEvent::Press(kc)),
            MacroStep::Up(kc) => self.push(MacroEvent::Release(kc)),
            MacroStep::Tap(kc) => {
                self.push(MacroEvent::Press(kc));
                self.pause();
                self.push(MacroEvent::Release(kc));
            }
            MacroStep::Wait(ms) => {
                if ms != 0 {
                    self.push(MacroEvent::Delay(ms));
                }
            }
        }
        self.pause();
    }
}

impl Iterator for MacroPlayer<'_> {
    type Item = MacroEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            let step = *self.steps.next()?;
            self.expand(step);
        }
    }
}

#[cfg(test)]
#[path = "macros_test.rs"]
mod test;
