use super::card::Card;
use super::hand::Hand;
use rand::rngs::StdRng;
use rand::Rng;

/// tracks which cards have left the deck over the life of a hand.
/// drawing rejection-samples indices until an unused card comes up,
/// so determinism follows entirely from the caller's rng.
#[derive(Debug, Default, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::empty())
    }

    /// cards already dealt out of this deck
    pub fn dealt(&self) -> Hand {
        self.0
    }

    pub fn draw(&mut self, rng: &mut StdRng) -> Card {
        assert!(self.0.size() < 52);
        loop {
            let card = Card::from(rng.gen_range(0..52) as u8);
            if !self.0.contains(&card) {
                self.0.insert(card);
                return card;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn draws_are_distinct() {
        let ref mut rng = StdRng::seed_from_u64(0);
        let mut deck = Deck::new();
        let cards = (0..52).map(|_| deck.draw(rng)).collect::<Vec<Card>>();
        let hand = Hand::from(cards);
        assert!(hand.size() == 52);
        assert!(deck.dealt().size() == 52);
    }

    #[test]
    fn draws_are_seeded() {
        let ref mut one = StdRng::seed_from_u64(42);
        let ref mut two = StdRng::seed_from_u64(42);
        let mut a = Deck::new();
        let mut b = Deck::new();
        for _ in 0..9 {
            assert!(a.draw(one) == b.draw(two));
        }
    }
}
