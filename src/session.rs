//! Envelope reveal session: a fixed pool of slots opened one by one.

use crate::catalog::ResolvedWishList;
use crate::error::{WishError, WishResult};
use crate::logging::log_info;
use crate::rng::{IndexSource, draw_avoiding};

/// Pool size of the themed 24th-birthday page.
pub const DEFAULT_ENVELOPES: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    Unopened,
    Opened,
}

/// Outcome of a single reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub index: usize,
    pub message: String,
    /// The slot was unopened before this call.
    pub newly_opened: bool,
    /// This call opened the last unopened slot. Reported once per pass.
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct EnvelopeSession {
    opened: Vec<bool>,
    opened_count: usize,
    current: Option<usize>,
    completion_reported: bool,
    wishes: ResolvedWishList,
}

impl EnvelopeSession {
    /// Creates `pool_size` unopened slots addressing `wishes` by index modulo
    /// the list length.
    pub fn new(pool_size: usize, wishes: ResolvedWishList) -> Self {
        Self {
            opened: vec![false; pool_size],
            opened_count: 0,
            current: None,
            completion_reported: false,
            wishes,
        }
    }

    pub fn pool_size(&self) -> usize {
        self.opened.len()
    }

    pub fn opened_count(&self) -> usize {
        self.opened_count
    }

    pub fn is_complete(&self) -> bool {
        self.opened_count == self.opened.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn wishes(&self) -> &ResolvedWishList {
        &self.wishes
    }

    pub fn slot(&self, index: usize) -> Option<SlotState> {
        self.opened.get(index).map(|&open| {
            if open {
                SlotState::Opened
            } else {
                SlotState::Unopened
            }
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotState> + '_ {
        (0..self.opened.len()).filter_map(|i| self.slot(i))
    }

    /// Opens slot `index` (idempotent) and makes it current.
    pub fn reveal(&mut self, index: usize) -> WishResult<Reveal> {
        let len = self.opened.len();
        let Some(slot) = self.opened.get_mut(index) else {
            return Err(WishError::IndexOutOfRange { index, len });
        };

        let newly_opened = !*slot;
        if newly_opened {
            *slot = true;
            self.opened_count += 1;
        }
        self.current = Some(index);

        let completed = !self.completion_reported && self.opened_count == len;
        if completed {
            self.completion_reported = true;
            log_info!("all {len} envelopes opened");
        }

        Ok(Reveal {
            index,
            message: self.wishes.wrapped(index).to_owned(),
            newly_opened,
            completed,
        })
    }

    /// Reveals a uniformly random slot other than the current one (when the
    /// pool has more than one slot).
    pub fn reveal_random<R: IndexSource + ?Sized>(&mut self, rng: &mut R) -> WishResult<Reveal> {
        let len = self.opened.len();
        if len == 0 {
            return Err(WishError::EmptyPool);
        }
        let index = draw_avoiding(rng, len, self.current);
        self.reveal(index)
    }

    /// Reveals the slot after the current one, wrapping; slot 0 when nothing
    /// has been shown yet.
    pub fn advance_next(&mut self) -> WishResult<Reveal> {
        let len = self.opened.len();
        if len == 0 {
            return Err(WishError::EmptyPool);
        }
        let next = self.current.map_or(0, |cur| (cur + 1) % len);
        self.reveal(next)
    }

    pub fn reset(&mut self) {
        self.opened.iter_mut().for_each(|slot| *slot = false);
        self.opened_count = 0;
        self.current = None;
        self.completion_reported = false;
    }
}
