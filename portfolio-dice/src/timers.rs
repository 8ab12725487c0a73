use chrono::Duration;

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Duration,
    seq: u64,
    item: T,
}

/// Fire-and-forget deferred actions on a logical clock.
///
/// The clock only moves when the host calls [`TimerQueue::advance`], which
/// keeps everything on one thread and makes firing order deterministic:
/// earliest deadline first, ties in the order they were scheduled. Scheduled
/// items cannot be cancelled; whoever consumes a fired item must check that
/// its target still exists. The clock saturates at `Duration::MAX`.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::zero(),
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, delay: Duration, item: T) {
        let delay = delay.max(Duration::zero());
        self.pending.push(Pending {
            due: self.now.checked_add(&delay).unwrap_or(Duration::MAX),
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Moves the clock forward and returns everything that came due.
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        self.now = self
            .now
            .checked_add(&by.max(Duration::zero()))
            .unwrap_or(Duration::MAX);

        let now = self.now;
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.item).collect()
    }
}
