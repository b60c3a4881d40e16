//! The SET deck and the rule for what makes three cards a set

use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

/// Every card, in enumeration order: number, then shape, then shading, then color
static DECK: Lazy<Vec<SetCard>> = Lazy::new(|| (0..DECK_SIZE).map(SetCard::from_index).collect());

/// The number of distinct cards
pub const DECK_SIZE: usize = 81;

macro_rules! attribute {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in enumeration order
            pub const ALL: [$name; 3] = [$($name::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            #[allow(missing_docs)]
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

attribute! {
    /// How many shapes are on the card
    Number { One => "1", Two => "2", Three => "3" }
}

attribute! {
    #[allow(missing_docs)]
    Shape { Diamond => "diamond", Pill => "pill", Squiggle => "squiggle" }
}

attribute! {
    #[allow(missing_docs)]
    Shading { Empty => "empty", Striped => "striped", Solid => "solid" }
}

attribute! {
    #[allow(missing_docs)]
    Color { Red => "red", Green => "green", Purple => "purple" }
}

impl Number {
    /// The number as an integer from 1 to 3
    pub fn count(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// One card of the deck
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub struct SetCard {
    pub number: Number,
    pub shape: Shape,
    pub shading: Shading,
    pub color: Color,
}

impl SetCard {
    #[allow(missing_docs)]
    pub fn new(number: Number, shape: Shape, shading: Shading, color: Color) -> Self {
        Self {
            number,
            shape,
            shading,
            color,
        }
    }

    /// The card at a position of the deck enumeration. Panics if `index >= 81`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < DECK_SIZE, "card index {} out of range", index);
        Self {
            number: Number::ALL[index / 27],
            shape: Shape::ALL[index / 9 % 3],
            shading: Shading::ALL[index / 3 % 3],
            color: Color::ALL[index % 3],
        }
    }

    /// The position of the card in the deck enumeration
    pub fn index(self) -> usize {
        ((self.number.index() * 3 + self.shape.index()) * 3 + self.shading.index()) * 3
            + self.color.index()
    }

    fn attribute_indices(self) -> [usize; 4] {
        [
            self.color.index(),
            self.number.index(),
            self.shape.index(),
            self.shading.index(),
        ]
    }
}

impl Display for SetCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.number, self.shading, self.color, self.shape
        )
    }
}

impl Serialize for SetCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SetCard", 4)?;
        state.serialize_field("number", &self.number.count())?;
        state.serialize_field("shape", self.shape.label())?;
        state.serialize_field("shading", self.shading.label())?;
        state.serialize_field("color", self.color.label())?;
        state.end()
    }
}

/// All 81 cards in enumeration order
pub fn all_cards() -> &'static [SetCard] {
    &DECK
}

/// The four attributes, in the order feedback is reported
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum AttributeKind {
    Color,
    Number,
    Shape,
    Shading,
}

const ATTRIBUTE_KINDS: [AttributeKind; 4] = [
    AttributeKind::Color,
    AttributeKind::Number,
    AttributeKind::Shape,
    AttributeKind::Shading,
];

/// How one attribute varies across three cards
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttributeVerdict {
    /// The three cards agree
    AllSame,
    /// The three cards are pairwise different
    AllDifferent,
    /// Two cards agree and one differs, which breaks a set
    Mixed,
}

impl AttributeVerdict {
    fn of<T: PartialEq>(a: T, b: T, c: T) -> Self {
        if a == b && b == c {
            AttributeVerdict::AllSame
        } else if a != b && b != c && a != c {
            AttributeVerdict::AllDifferent
        } else {
            AttributeVerdict::Mixed
        }
    }

    #[allow(missing_docs)]
    pub fn is_ok(self) -> bool {
        self != AttributeVerdict::Mixed
    }
}

/// Returns true if, for every attribute, the three cards are all the same or all different
pub fn is_valid_set(a: SetCard, b: SetCard, c: SetCard) -> bool {
    set_feedback(a, b, c).iter().all(|&(_, verdict)| verdict.is_ok())
}

/// Explains each attribute of three cards, for telling a player why a pick is not a set
pub fn set_feedback(a: SetCard, b: SetCard, c: SetCard) -> [(AttributeKind, AttributeVerdict); 4] {
    let (a, b, c) = (a.attribute_indices(), b.attribute_indices(), c.attribute_indices());
    let mut feedback = [(AttributeKind::Color, AttributeVerdict::AllSame); 4];
    for (i, entry) in feedback.iter_mut().enumerate() {
        *entry = (ATTRIBUTE_KINDS[i], AttributeVerdict::of(a[i], b[i], c[i]));
    }
    feedback
}

/// Every triple of indices into `cards` that forms a set, in lexicographic order
pub fn find_sets(cards: &[SetCard]) -> Vec<[usize; 3]> {
    (0..cards.len())
        .tuple_combinations()
        .filter(|&(i, j, k)| is_valid_set(cards[i], cards[j], cards[k]))
        .map(|(i, j, k)| [i, j, k])
        .collect()
}
