use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player's id
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Player number for display (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A player: an id plus a display color. The color is an opaque token — the
/// engine never interprets it, only the presentation layer does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    color: String,
}

impl Player {
    pub fn new(id: PlayerId, color: impl Into<String>) -> Self {
        Player {
            id,
            color: color.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Get player name for display
    pub fn name(&self) -> String {
        format!("Player {}", self.id.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }

    #[test]
    fn test_player_name() {
        let player = Player::new(PlayerId::One, "red");
        assert_eq!(player.name(), "Player 1");
        assert_eq!(player.color(), "red");
    }

    #[test]
    fn test_color_is_opaque() {
        // Any string is accepted; the engine never parses it.
        let player = Player::new(PlayerId::Two, "#00ff88");
        assert_eq!(player.color(), "#00ff88");
    }
}
