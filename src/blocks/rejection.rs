/// Why an action was refused. Every refusal is an expected, recoverable outcome that the
/// caller surfaces as a status message; nothing here is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    OutOfBounds,
    Overlap,
    MissingCornerCoverage,
    EdgeAdjacency,
    MissingCornerTouch,
    PieceAlreadyUsed,
    NoPieceSelected,
    PassWhileMoveExists,
    EmptyPlacement,
    UnknownPiece,
    WrongTurn,
    GameNotInProgress,
    InvalidConfiguration,
}

impl Rejection {
    /// Whether the rejection came from the placement rules rather than from turn handling.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Rejection::OutOfBounds
                | Rejection::Overlap
                | Rejection::MissingCornerCoverage
                | Rejection::EdgeAdjacency
                | Rejection::MissingCornerTouch
                | Rejection::EmptyPlacement
        )
    }

    /// The user-facing status message.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::OutOfBounds           => "Placement must stay within the 20×20 board.",
            Rejection::Overlap               => "Pieces cannot overlap existing pieces.",
            Rejection::MissingCornerCoverage => "First move must cover your assigned corner.",
            Rejection::EdgeAdjacency         => "Pieces cannot edge-touch your own color.",
            Rejection::MissingCornerTouch    => "New pieces must touch your color at a corner.",
            Rejection::PieceAlreadyUsed      => "Piece already used.",
            Rejection::NoPieceSelected       => "Select a piece first.",
            Rejection::PassWhileMoveExists   => "Passing is illegal while a legal move exists.",
            Rejection::EmptyPlacement        => "A placement must cover at least one cell.",
            Rejection::UnknownPiece          => "No such piece or orientation.",
            Rejection::WrongTurn             => "It is not that color's turn.",
            Rejection::GameNotInProgress     => "No game in progress.",
            Rejection::InvalidConfiguration  => "Choose 2, 3 or 4 players; a 3-player game excludes exactly one color.",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Rejection {}
