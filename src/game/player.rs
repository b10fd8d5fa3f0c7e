use super::board::Cell;

/// Identity of a player's pieces. PlayerA always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    PlayerA,
    PlayerB,
}

impl Token {
    /// Get the other token
    pub fn other(self) -> Token {
        match self {
            Token::PlayerA => Token::PlayerB,
            Token::PlayerB => Token::PlayerA,
        }
    }

    /// Convert token to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Token::PlayerA => Cell::PlayerA,
            Token::PlayerB => Cell::PlayerB,
        }
    }

    /// Name used when a player leaves their name blank
    pub fn default_name(self) -> &'static str {
        match self {
            Token::PlayerA => "Player 1",
            Token::PlayerB => "Player 2",
        }
    }

    /// Piece color shown for this token
    pub fn color_name(self) -> &'static str {
        match self {
            Token::PlayerA => "Red",
            Token::PlayerB => "Yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_token() {
        assert_eq!(Token::PlayerA.other(), Token::PlayerB);
        assert_eq!(Token::PlayerB.other(), Token::PlayerA);
    }

    #[test]
    fn test_default_names() {
        assert_eq!(Token::PlayerA.default_name(), "Player 1");
        assert_eq!(Token::PlayerB.default_name(), "Player 2");
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Token::PlayerA.to_cell(), Cell::PlayerA);
        assert_eq!(Token::PlayerB.to_cell(), Cell::PlayerB);
    }
}
