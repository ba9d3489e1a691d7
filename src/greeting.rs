//! Wish page session: one visitor age and the wishes drawn for it.

use crate::catalog::ResolvedWishList;
use crate::rng::{IndexSource, draw_avoiding};

#[derive(Clone, Debug)]
pub struct AgeGreeting {
    wishes: ResolvedWishList,
    last: Option<usize>,
}

impl AgeGreeting {
    pub fn new(wishes: ResolvedWishList) -> Self {
        Self { wishes, last: None }
    }

    pub fn age(&self) -> u32 {
        self.wishes.age()
    }

    pub fn wishes(&self) -> &ResolvedWishList {
        &self.wishes
    }

    /// Picks a random wish, never the one drawn just before (for lists with
    /// more than one entry).
    pub fn draw<R: IndexSource + ?Sized>(&mut self, rng: &mut R) -> &str {
        let index = draw_avoiding(rng, self.wishes.len(), self.last);
        self.last = Some(index);
        self.wishes.wrapped(index)
    }

    pub fn current_wish(&self) -> Option<&str> {
        self.last.and_then(|i| self.wishes.get(i))
    }

    /// Text handed to the share / clipboard collaborator.
    pub fn share_text(&self) -> Option<String> {
        self.current_wish().map(|wish| share_text(self.age(), wish))
    }
}

pub fn share_text(age: u32, wish: &str) -> String {
    format!(
        "Check out my birthday wish for {age} years: \"{}\" - \
         Created with this awesome birthday website!",
        wish.trim()
    )
}
