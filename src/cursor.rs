//! Pull cursors over push sequences.
//!
//! A [`Seq`] drives its own loop, so there is no way to ask it for "just the next
//! value". [`pull`] fixes that: it parks the producer inside its acceptance
//! callback after every value and only lets it continue when the consumer asks
//! for more.
//!
//! Each cursor owns a producer context (a thread) linked to it by two
//! zero-capacity channels. The consumer sends a resume signal and waits for the
//! next step; the producer runs until it calls `accept`, sends the value, and
//! waits for the next resume signal. Exactly one side runs at a time.
//!
//! # Examples
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let mut cursor = pull(seq![1, 2, 3]);
//! assert_eq!(cursor.next(), Some(1));
//! assert_eq!(cursor.next(), Some(2));
//! cursor.stop();
//! assert_eq!(cursor.next(), None);
//! ```
//!
//! Cursors are also iterators:
//!
//! ```rust
//! use pullseq::prelude::*;
//!
//! let squares: Vec<_> = pull(from_iter(1..=4).map(|n| n * n)).collect();
//! assert_eq!(squares, vec![1, 4, 9, 16]);
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    panic::{self, AssertUnwindSafe},
    thread,
};

use crossbeam::channel::{self, Receiver, Sender};
use tracing::{debug, error, trace, warn};

use crate::{step::Step, PullError, Seq};

const DEFAULT_NAME: &str = "pullseq-producer";

/// How a producer's run ended.
type Outcome = Result<(), PullError>;

/// Configuration for the producer context behind a [`Pull`] cursor.
///
/// ```rust
/// use pullseq::prelude::*;
/// use pullseq::Builder;
///
/// let mut cursor = Builder::new()
///     .name("numbers")
///     .stack_size(256 * 1024)
///     .spawn(from_iter(0..3))?;
/// assert_eq!(cursor.next(), Some(0));
/// # Ok::<(), pullseq::PullError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the producer context. Shows up in panic messages and log events.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Stack size in bytes for the producer context.
    pub fn stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Create a cursor over `seq`.
    ///
    /// The producer does not start until the first call to [`Pull::next`].
    pub fn spawn<T, S>(self, seq: S) -> Result<Pull<T>, PullError>
    where
        S: Seq<T> + Send + 'static,
        T: Send + 'static,
    {
        let name = self.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        let mut thread = thread::Builder::new().name(name.clone());
        if let Some(size) = self.stack_size {
            thread = thread.stack_size(size);
        }

        let (resume_tx, resume_rx) = channel::bounded(0);
        let (step_tx, step_rx) = channel::bounded(0);
        let handle = thread.spawn(move || produce(seq, resume_rx, step_tx))?;
        trace!(producer = %name, "spawned producer");

        Ok(Pull {
            name,
            state: PullState::Active(Producer {
                resume: resume_tx,
                steps: step_rx,
                handle,
            }),
        })
    }
}

/// Body of the producer context.
fn produce<T, S>(seq: S, resume: Receiver<()>, steps: Sender<Step<T, Outcome>>)
where
    S: Seq<T>,
{
    // Stopped before the first `next`: the sequence never runs.
    if resume.recv().is_err() {
        return;
    }

    let mut refused = false;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        seq.run(&mut |value| {
            if refused {
                return false;
            }
            if steps.send(Step::Yielded(value)).is_err() || resume.recv().is_err() {
                refused = true;
                return false;
            }
            true
        })
    }));

    let outcome = outcome.map_err(PullError::from_panic);
    if let Err(err) = &outcome {
        warn!(error = %err, "producer panicked");
    }
    // The cursor may already be gone; nothing left to report to.
    let _ = steps.send(Step::Complete(outcome));
}

struct Producer<T> {
    resume: Sender<()>,
    steps: Receiver<Step<T, Outcome>>,
    handle: thread::JoinHandle<()>,
}

enum PullState<T> {
    Active(Producer<T>),
    Done,
}

impl<T> PullState<T> {
    fn take(&mut self) -> Self {
        std::mem::replace(self, PullState::Done)
    }
}

/// A demand-driven cursor over a [`Seq`].
///
/// Created via [`pull`], [`Seq::into_pull`] or [`Builder::spawn`]. A cursor has a
/// single owner: every operation takes `&mut self`.
///
/// Once [`next`](Pull::next) returns `None` it keeps returning `None`. Dropping a
/// cursor stops it, so producers are released on every exit path.
pub struct Pull<T> {
    name: String,
    state: PullState<T>,
}

impl<T> Pull<T> {
    /// Resume the producer until it yields a value or returns.
    ///
    /// This is the same operation as [`Iterator::next`], callable without the
    /// trait in scope.
    ///
    /// # Panics
    ///
    /// Panics if the producer panicked. Use [`try_next`](Pull::try_next) to get
    /// the failure as an error instead.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        match self.try_next() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Resume the producer until it yields a value or returns.
    ///
    /// A producer panic ends the cursor; later calls return `Ok(None)`.
    pub fn try_next(&mut self) -> Result<Option<T>, PullError> {
        let PullState::Active(producer) = &self.state else {
            return Ok(None);
        };

        trace!(producer = %self.name, "resuming producer");
        let step = match producer.resume.send(()) {
            Ok(()) => producer.steps.recv().ok(),
            Err(_) => None,
        };

        match step {
            Some(Step::Yielded(value)) => Ok(Some(value)),
            Some(Step::Complete(outcome)) => {
                trace!(producer = %self.name, "producer finished");
                self.finish();
                outcome.map(|()| None)
            }
            None => {
                self.finish();
                Ok(None)
            }
        }
    }

    /// Tell the producer not to continue and wait for it to return.
    ///
    /// Calling `stop` more than once, or after the cursor ran out, does nothing.
    /// A panic raised by the producer while it unwinds is logged, not re-raised;
    /// use [`try_stop`](Pull::try_stop) to observe it.
    pub fn stop(&mut self) {
        if let Err(err) = self.try_stop() {
            error!(producer = %self.name, error = %err, "producer failed while stopping");
        }
    }

    /// Tell the producer not to continue, wait for it to return, and report how it ended.
    pub fn try_stop(&mut self) -> Result<(), PullError> {
        let PullState::Active(producer) = self.state.take() else {
            return Ok(());
        };
        debug!(producer = %self.name, "stopping producer");

        let Producer {
            resume,
            steps,
            handle,
        } = producer;
        // A closed resume channel reads as a refusal inside `accept`.
        drop(resume);

        let mut outcome = Ok(());
        for step in steps.iter() {
            if let Step::Complete(result) = step {
                outcome = result;
                break;
            }
        }
        drop(steps);
        join(&self.name, handle);
        outcome
    }

    /// Returns `true` once the cursor is exhausted or stopped.
    pub fn is_done(&self) -> bool {
        matches!(self.state, PullState::Done)
    }

    /// Name of the producer context.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn finish(&mut self) {
        if let PullState::Active(producer) = self.state.take() {
            let Producer { resume, steps, handle } = producer;
            drop(resume);
            drop(steps);
            join(&self.name, handle);
        }
    }
}

fn join(name: &str, handle: thread::JoinHandle<()>) {
    if handle.join().is_err() {
        error!(producer = %name, "producer context panicked outside the sequence");
    }
}

impl<T> Drop for Pull<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T> Iterator for Pull<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        Pull::next(self)
    }
}

impl<T> FusedIterator for Pull<T> {}

impl<T> fmt::Debug for Pull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pull")
            .field("name", &self.name)
            .field("done", &self.is_done())
            .finish()
    }
}

/// Create a pull cursor over `seq` with the default [`Builder`] settings.
///
/// # Panics
///
/// Panics if the producer context cannot be started, as [`std::thread::spawn`]
/// does. Use [`Builder::spawn`] to handle that case.
pub fn pull<T, S>(seq: S) -> Pull<T>
where
    S: Seq<T> + Send + 'static,
    T: Send + 'static,
{
    match Builder::new().spawn(seq) {
        Ok(cursor) => cursor,
        Err(err) => panic!("{err}"),
    }
}
