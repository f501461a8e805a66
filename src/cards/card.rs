use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// Card represents a playing card
/// stored as its index in a sorted deck, 0..52
/// rank = index % 13, suit = index / 13
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * 13 + u8::from(r))
    }
}

/// u8 isomorphism
/// 2c is 0, Ac is 12, 2d is 13, As is 51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "card index out of range: {}", n);
        Self(n)
    }
}

/// u64 injection
/// one bit per card, used to assemble Hand bitsets
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() != 2 {
            return Err(format!("invalid card str: {}", s));
        }
        let rank = Rank::try_from(&s[0..1])?;
        let suit = Suit::try_from(&s[1..2])?;
        Ok(Card::from((rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::thread_rng();
        Card::from(rng.gen_range(0..52) as u8)
    }
}
