//! Paced playback of an event stream.
//!
//! The solvers never wait. [`Player`] pulls one event, hands it to the
//! caller, then sleeps for the configured delay before the next pull. It
//! stops after the terminal event or as soon as its [`CancelToken`] is
//! cancelled; stopping just means no further pulls.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use mazewalk_core::Event;

use crate::trace::Trace;

// ---------------------------------------------------------------------------
// CancelToken
// ---------------------------------------------------------------------------

/// A cooperative cancellation flag shared between a [`Player`] and whoever
/// wants to stop it.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Result of a playback.
#[derive(Debug, Clone)]
pub struct Playback {
    pub trace: Trace,
    /// Wall-clock time, delays included.
    pub elapsed: Duration,
    /// Time spent inside pulls, delays excluded.
    pub busy: Duration,
    /// Whether playback stopped because of the cancel token.
    pub cancelled: bool,
}

/// Pulls events at a fixed cadence.
#[derive(Debug, Clone, Default)]
pub struct Player {
    delay: Duration,
    cancel: CancelToken,
}

impl Player {
    /// A player waiting `delay` between pulls.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel: CancelToken::new(),
        }
    }

    /// Share an existing cancel token.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// A handle that stops this player's current and future playbacks.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Pull `events` until the terminal event, cancellation, or exhaustion,
    /// calling `on_event` for each pulled event.
    pub fn run<I>(&self, events: I, mut on_event: impl FnMut(&Event)) -> Playback
    where
        I: IntoIterator<Item = Event>,
    {
        let started = Instant::now();
        let mut busy = Duration::ZERO;
        let mut trace = Trace::new();
        let mut iter = events.into_iter();
        let mut cancelled = false;

        loop {
            if self.cancel.is_cancelled() {
                log::debug!("player: cancelled after {} events", trace.events());
                cancelled = true;
                break;
            }
            let pulled = Instant::now();
            let Some(ev) = iter.next() else {
                break;
            };
            busy += pulled.elapsed();

            trace.apply(&ev);
            on_event(&ev);
            if ev.is_terminal() {
                break;
            }
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        let elapsed = started.elapsed();
        log::debug!(
            "player: {} events, outcome {:?}, {elapsed:?} elapsed ({busy:?} busy)",
            trace.events(),
            trace.outcome()
        );
        Playback {
            trace,
            elapsed,
            busy,
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Outcome;
    use mazewalk_core::Pos;

    fn script() -> Vec<Event> {
        vec![
            Event::Visit {
                pos: Pos::new(0, 0),
                path: vec![Pos::new(0, 0)],
            },
            Event::Solution {
                path: vec![Pos::new(0, 0)],
            },
            Event::NoSolution,
        ]
    }

    #[test]
    fn stops_at_terminal() {
        let mut seen = 0;
        let pb = Player::new(Duration::ZERO).run(script(), |_| seen += 1);
        assert_eq!(seen, 2);
        assert_eq!(pb.trace.outcome(), Outcome::Solved);
        assert!(!pb.cancelled);
    }

    #[test]
    fn honours_delay_between_pulls() {
        let delay = Duration::from_millis(5);
        let pb = Player::new(delay).run(script(), |_| {});
        // One wait between the two events, none after the terminal one.
        assert!(pb.elapsed >= delay);
        assert!(pb.busy <= pb.elapsed);
    }

    #[test]
    fn cancel_stops_pulling() {
        let player = Player::new(Duration::ZERO);
        let token = player.cancel_token();
        let mut seen = 0;
        let pb = player.run(script(), |_| {
            seen += 1;
            token.cancel();
        });
        assert_eq!(seen, 1);
        assert!(pb.cancelled);
        assert_eq!(pb.trace.outcome(), Outcome::Pending);
    }

    #[test]
    fn shared_token() {
        let token = CancelToken::new();
        token.cancel();
        let pb = Player::new(Duration::ZERO)
            .with_cancel(token.clone())
            .run(script(), |_| panic!("no pulls after cancellation"));
        assert!(pb.cancelled);
        assert!(token.is_cancelled());
    }

    #[test]
    fn exhausted_stream_without_terminal() {
        let pb = Player::new(Duration::ZERO).run(Vec::new(), |_| {});
        assert_eq!(pb.trace.outcome(), Outcome::Pending);
        assert!(!pb.cancelled);
    }
}
