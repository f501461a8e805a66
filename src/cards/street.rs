/// betting rounds in order, plus the two closing phases.
/// Show is transient inside a single transition; Term is absorbing.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    #[default]
    Pref = 0,
    Flop = 1,
    Turn = 2,
    Rive = 3,
    Show = 4,
    Term = 5,
}

impl Street {
    pub fn next(&self) -> Street {
        match self {
            Street::Pref => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::Rive,
            Street::Rive => Street::Show,
            Street::Show => Street::Term,
            Street::Term => panic!("no next street"),
        }
    }

    /// how many board cards are revealed when this street begins
    pub fn n_revealed(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 1,
            Street::Rive => 1,
            _ => 0,
        }
    }

    /// index into per-street abstraction tables; betting streets only
    pub fn index(&self) -> Option<usize> {
        match self {
            Street::Pref => Some(0),
            Street::Flop => Some(1),
            Street::Turn => Some(2),
            Street::Rive => Some(3),
            _ => None,
        }
    }
}

/// u8 isomorphism, the wire encoding
impl From<Street> for u8 {
    fn from(s: Street) -> u8 {
        s as u8
    }
}
impl From<u8> for Street {
    fn from(n: u8) -> Street {
        match n {
            0 => Street::Pref,
            1 => Street::Flop,
            2 => Street::Turn,
            3 => Street::Rive,
            4 => Street::Show,
            5 => Street::Term,
            _ => panic!("invalid street u8: {}", n),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Street::Pref => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::Rive => write!(f, "River"),
            Street::Show => write!(f, "Showdown"),
            Street::Term => write!(f, "Terminal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..6u8 {
            assert!(u8::from(Street::from(n)) == n);
        }
    }

    #[test]
    fn street_order() {
        assert!(Street::Pref < Street::Flop);
        assert!(Street::Rive < Street::Show);
        assert!(Street::Show < Street::Term);
    }

    #[test]
    fn reveal_counts() {
        assert!(Street::Pref.next().n_revealed() == 3);
        assert!(Street::Flop.next().n_revealed() == 1);
        assert!(Street::Turn.next().n_revealed() == 1);
    }
}
