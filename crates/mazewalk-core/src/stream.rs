//! The lazy event-stream contract shared by all solvers.
//!
//! A solver is a [`Stepper`]: each call to [`Stepper::step`] performs one
//! bounded unit of work (one frontier pop, one distance selection, one
//! training episode) and returns the event it produced. [`Stepper::solve`]
//! consumes the solver and wraps it in [`Solve`], an iterator that stops
//! for good after the terminal event.
//!
//! Nothing here sleeps or measures time. Pacing belongs to whoever pulls.

use crate::event::Event;

/// A solver that advances one unit of work per call.
pub trait Stepper {
    /// Perform the next unit of work.
    ///
    /// Returns `None` once the terminal event has been produced.
    fn step(&mut self) -> Option<Event>;

    /// Turn the solver into its lazy event stream.
    ///
    /// No work happens until the first item is requested.
    fn solve(self) -> Solve<Self>
    where
        Self: Sized,
    {
        Solve {
            inner: self,
            done: false,
        }
    }
}

/// Fused event stream over a [`Stepper`].
///
/// Yields exactly one terminal event, always last.
#[derive(Debug)]
pub struct Solve<S> {
    inner: S,
    done: bool,
}

impl<S> Solve<S> {
    /// Whether the terminal event has already been yielded.
    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Borrow the underlying solver.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }
}

impl<S: Stepper> Iterator for Solve<S> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.done {
            return None;
        }
        match self.inner.step() {
            Some(ev) => {
                self.done = ev.is_terminal();
                Some(ev)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<S: Stepper> std::iter::FusedIterator for Solve<S> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Emits a fixed script, including events after the terminal one.
    struct Script(Vec<Event>);

    impl Stepper for Script {
        fn step(&mut self) -> Option<Event> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    #[test]
    fn stops_after_terminal() {
        let msg = |m: &str| Event::TrainingProgress { message: m.into() };
        let s = Script(vec![msg("a"), Event::NoSolution, msg("late")]);
        let events: Vec<_> = s.solve().collect();
        assert_eq!(events, vec![msg("a"), Event::NoSolution]);
    }

    #[test]
    fn lazy_until_pulled() {
        let mut solve = Script(vec![Event::NoSolution]).solve();
        assert!(!solve.is_finished());
        assert_eq!(solve.get_ref().0.len(), 1);
        assert_eq!(solve.next(), Some(Event::NoSolution));
        assert!(solve.is_finished());
        assert_eq!(solve.next(), None);
        assert_eq!(solve.next(), None);
    }
}
