//! Players, piece archetypes and pieces.

use serde::{Deserialize, Serialize};

/// One of the two seats at the board.
///
/// Serialized as the integer `1` or `2`. Clients identify themselves with the
/// string form of that number (see [`Player::tag`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Starts on rows 0 and 1, pawns advance towards row 7.
    One,
    /// Starts on rows 6 and 7, pawns advance towards row 0.
    Two,
}

impl Player {
    /// Both players, in ledger order.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// The tag a client claims to act as this player.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
        }
    }

    /// Resolve a claimed tag. Only the exact strings `"1"` and `"2"` match.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            _ => None,
        }
    }

    /// Row delta of a pawn step for this player.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::One => 1,
            Self::Two => -1,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl From<Player> for u8 {
    fn from(p: Player) -> Self {
        match p {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = &'static str;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err("player must be 1 or 2"),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Piece archetype. Decides movement, starting health and elixir cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    /// Pawn.
    Pawn,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Rook.
    Rook,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl PieceType {
    /// Health a freshly placed piece of this type starts with.
    #[must_use]
    pub const fn base_health(self) -> u16 {
        match self {
            Self::Pawn => 10,
            Self::Bishop => 15,
            Self::Rook => 20,
            Self::Queen => 25,
            Self::Knight | Self::King => 30,
        }
    }

    /// Elixir spent every time a piece of this type acts.
    #[must_use]
    pub const fn elixir_cost(self) -> u8 {
        match self {
            Self::Pawn => 2,
            Self::Bishop => 3,
            Self::Knight | Self::Rook => 5,
            Self::Queen => 7,
            Self::King => 10,
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pawn => write!(f, "pawn"),
            Self::Knight => write!(f, "knight"),
            Self::Bishop => write!(f, "bishop"),
            Self::Rook => write!(f, "rook"),
            Self::Queen => write!(f, "queen"),
            Self::King => write!(f, "king"),
        }
    }
}

/// A piece on the board.
///
/// Type, owner and cost never change once created. Health only goes down,
/// through [`Piece::take_damage`]. Pieces do not know where they stand; the
/// board cell holding them is their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    kind: PieceType,
    hp: u16,
    owner: Player,
    elixir_cost: u8,
}

impl Piece {
    /// Create a piece with its archetype's starting health and cost.
    #[must_use]
    pub const fn new(kind: PieceType, owner: Player) -> Self {
        Self {
            kind,
            hp: kind.base_health(),
            owner,
            elixir_cost: kind.elixir_cost(),
        }
    }

    /// Create a piece with explicit health. Health is raised to at least 1.
    #[must_use]
    pub fn with_health(kind: PieceType, owner: Player, hp: u16) -> Self {
        Self {
            hp: hp.max(1),
            ..Self::new(kind, owner)
        }
    }

    /// Archetype of this piece.
    #[must_use]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    /// Remaining health.
    #[must_use]
    pub const fn health(&self) -> u16 {
        self.hp
    }

    /// Owning player.
    #[must_use]
    pub const fn owner(&self) -> Player {
        self.owner
    }

    /// Elixir needed to act with this piece.
    #[must_use]
    pub const fn cost(&self) -> u8 {
        self.elixir_cost
    }

    /// Returns true if `other` belongs to the opposing player.
    #[must_use]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.owner != other.owner
    }

    /// Subtract `amount` from health. Returns true when the piece is destroyed.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_tags() {
        assert_eq!(Player::One.tag(), "1");
        assert_eq!(Player::from_tag("2"), Some(Player::Two));
        assert_eq!(Player::from_tag("02"), None);
        assert_eq!(Player::from_tag(" 1"), None);
    }

    #[test]
    fn player_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        let p: Player = serde_json::from_str("1").unwrap();
        assert_eq!(p, Player::One);
        assert!(serde_json::from_str::<Player>("3").is_err());
    }

    #[test]
    fn archetype_stats() {
        let king = Piece::new(PieceType::King, Player::One);
        assert_eq!(king.health(), 30);
        assert_eq!(king.cost(), 10);

        let pawn = Piece::new(PieceType::Pawn, Player::Two);
        assert_eq!(pawn.health(), 10);
        assert_eq!(pawn.cost(), 2);
    }

    #[test]
    fn piece_wire_format() {
        let piece = Piece::new(PieceType::Bishop, Player::One);
        let json = serde_json::to_value(piece).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "bishop", "hp": 15, "owner": 1, "elixir_cost": 3})
        );
    }

    #[test]
    fn damage_destroys_at_zero() {
        let mut pawn = Piece::new(PieceType::Pawn, Player::One);
        assert!(!pawn.take_damage(5));
        assert_eq!(pawn.health(), 5);
        assert!(pawn.take_damage(5));
        assert_eq!(pawn.health(), 0);

        let mut weak = Piece::with_health(PieceType::Rook, Player::Two, 3);
        assert!(weak.take_damage(5));
    }
}
