//! The SET card game: an 81-card deck and daily hands with a fixed number of sets

pub use self::card::{
    all_cards, find_sets, is_valid_set, set_feedback, AttributeKind, AttributeVerdict, Color,
    Number, SetCard, Shading, Shape, DECK_SIZE,
};
pub use self::generate::{generate, SetOptions, SetPuzzle};

mod card;
mod generate;
