pub(crate) mod scores;
pub(crate) mod selection;

use itertools::Itertools;

use super::prelude::*;

pub use scores::ScoreLine;
pub use selection::{Direction, Selection};

/// The lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Setup,
    InProgress,
    Ended,
}

/// An accepted placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub color: Color,
    pub piece: PieceId,
    pub orientation: usize,
    pub anchor: Coord,
    pub cells: Vec<Coord>,
}

/// One entry in a session's history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Placed(Placement),
    Passed(Color),
}

impl Action {
    /// Notates the action as a log line.
    pub fn notate(&self) -> String {
        match self {
            Action::Placed(p) => format!(
                "{} placed {} at {}",
                p.color,
                p.piece,
                p.cells.iter().map(|c| c.notate()).join(", ")
            ),
            Action::Passed(color) => format!("{color} passed."),
        }
    }
}

/// What an accepted pass led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    NextTurn(Color),
    GameOver,
}

/// A single game: the board plus the turn state of every active colour.
#[derive(Clone, Debug)]
pub struct GameSession<'a> {
    /// A reference to the built catalog, shared by every session.
    pub catalog: &'a PieceCatalog,

    board: Board,

    phase: Phase,

    /// The colours taking turns, in turn order.
    active: Vec<Color>,

    /// Index into `active` of the colour to move.
    turn_index: usize,

    /// The pieces each colour has placed, indexed by colour.
    used: [PieceSet; NUM_COLORS],

    /// Set permanently once a colour makes its first placement.
    first_move_completed: [bool; NUM_COLORS],

    /// The piece each colour placed most recently, for the end-of-game bonus.
    last_placed: [Option<PieceId>; NUM_COLORS],

    /// Consecutive passes since the last placement.
    pass_chain: usize,

    selection: Option<Selection>,

    history: Vec<Action>,
}

impl<'a> GameSession<'a> {
    /// Creates a session in setup; call `start` to begin play.
    pub fn new(catalog: &'a PieceCatalog) -> GameSession<'a> {
        GameSession {
            catalog,
            board: Board::new(),
            phase: Phase::Setup,
            active: vec![],
            turn_index: 0,
            used: [PieceSet::default(); NUM_COLORS],
            first_move_completed: [false; NUM_COLORS],
            last_placed: [None; NUM_COLORS],
            pass_chain: 0,
            selection: None,
            history: vec![],
        }
    }

    /// Starts a fresh game, discarding any previous one.
    ///
    /// Four and two players use every colour (two players each run a pair of colours); three
    /// players leave out exactly one colour, which must be given.
    pub fn start(&mut self, players: usize, excluded: Option<Color>) -> std::result::Result<(), Rejection> {
        let active = match (players, excluded) {
            (2 | 4, None) => Color::all().to_vec(),
            (3, Some(out)) => Color::all().into_iter().filter(|&c| c != out).collect(),
            _ => {
                return Err(Rejection::InvalidConfiguration);
            }
        };

        *self = GameSession::new(self.catalog);
        self.active = active;
        self.phase = Phase::InProgress;

        log::info!(
            "started a {players}-player game with {}",
            self.active.iter().map(|c| c.notate()).join(", ")
        );
        Ok(())
    }

    /// Places a piece in the given orientation with its local origin on the anchor.
    pub fn play(
        &mut self,
        color: Color,
        piece: PieceId,
        orientation: usize,
        anchor: Coord,
    ) -> std::result::Result<Placement, Rejection> {
        self._ensure_turn(color)?;
        if self.used(color).contains(&piece) {
            return Err(Rejection::PieceAlreadyUsed);
        }
        let shape = self.catalog.orientations(piece).get(orientation).ok_or(Rejection::UnknownPiece)?;
        // A normalized shape has a cell in the anchor's column and one in its row.
        if !anchor.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }

        let cells = shape.at(&anchor);
        self.board.validate(color, &cells, self.first_move_completed(color))?;

        let placement = Placement {
            color,
            piece,
            orientation,
            anchor,
            cells: cells.iter().map(|c| c.coerce()).collect(),
        };
        self._apply(&placement);
        Ok(placement)
    }

    /// Places the selected orientation of the piece with its local origin on the anchor.
    pub fn place(&mut self, color: Color, piece: PieceId, anchor: Coord) -> std::result::Result<Placement, Rejection> {
        self._ensure_turn(color)?;
        match self.selection {
            Some(selection) if selection.piece == piece => self.play(color, piece, selection.orientation, anchor),
            _ => Err(Rejection::NoPieceSelected),
        }
    }

    /// Passes the turn; only legal when the colour has no legal placement. The game ends once every
    /// active colour has passed in a row.
    pub fn pass(&mut self, color: Color) -> std::result::Result<PassOutcome, Rejection> {
        self._ensure_turn(color)?;
        if self.has_legal_move(color) {
            return Err(Rejection::PassWhileMoveExists);
        }

        self.selection = None;
        self.history.push(Action::Passed(color));
        self.pass_chain += 1;
        log::debug!("{color} passed ({} in a row)", self.pass_chain);

        if self.pass_chain >= self.active.len() {
            self.phase = Phase::Ended;
            log::info!("game over after {} actions", self.history.len());
            return Ok(PassOutcome::GameOver);
        }
        self._advance();
        Ok(PassOutcome::NextTurn(self.active[self.turn_index]))
    }

    /// Determines whether the colour has any legal placement left.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board.has_legal_move(self.catalog, color, self.used(color), self.first_move_completed(color))
    }

    /// Every legal placement for the colour.
    pub fn legal_moves(&self, color: Color) -> Vec<LegalMove> {
        self.board.legal_moves(self.catalog, color, self.used(color), self.first_move_completed(color))
    }

    /// Whether the colour to move is forced to pass.
    pub fn must_pass(&self) -> bool {
        match (self.phase, self.current_color()) {
            (Phase::InProgress, Some(color)) => !self.has_legal_move(color),
            _ => false,
        }
    }

    // accessors

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn active_colors(&self) -> &[Color] {
        &self.active
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// The colour to move, once a game has started.
    pub fn current_color(&self) -> Option<Color> {
        self.active.get(self.turn_index).copied()
    }

    pub fn used(&self, color: Color) -> PieceSet {
        self.used[color as usize]
    }

    pub fn first_move_completed(&self, color: Color) -> bool {
        self.first_move_completed[color as usize]
    }

    pub fn last_placed(&self, color: Color) -> Option<PieceId> {
        self.last_placed[color as usize]
    }

    pub fn pass_chain(&self) -> usize {
        self.pass_chain
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    // internals

    /// Commits a validated placement.
    fn _apply(&mut self, placement: &Placement) {
        let Placement { color, piece, .. } = *placement;
        let idx = color as usize;

        self.board.place_unchecked(color, &placement.cells);
        self.used[idx].insert(&piece);
        self.first_move_completed[idx] = true;
        self.last_placed[idx] = Some(piece);
        self.pass_chain = 0;
        self.selection = None;
        self.history.push(Action::Placed(placement.clone()));
        log::debug!(
            "{} ({} squares covered)",
            self.history[self.history.len() - 1].notate(),
            self.board.coverage(color)
        );

        self._advance();
    }

    fn _advance(&mut self) {
        self.turn_index = (self.turn_index + 1) % self.active.len();
    }

    fn _ensure_turn(&self, color: Color) -> std::result::Result<(), Rejection> {
        if self.phase != Phase::InProgress {
            return Err(Rejection::GameNotInProgress);
        }
        if self.current_color() != Some(color) {
            return Err(Rejection::WrongTurn);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::blocks::prelude::*;

    fn started(catalog: &PieceCatalog, players: usize, excluded: Option<Color>) -> GameSession<'_> {
        let mut session = GameSession::new(catalog);
        session.start(players, excluded).unwrap();
        session
    }

    #[test]
    fn setup_rejects_play() {
        let catalog = PieceCatalog::new();
        let mut session = GameSession::new(&catalog);
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.current_color(), None);
        assert_eq!(session.play(Color::Blue, PieceId::P1, 0, Coord::new(0, 0)), Err(Rejection::GameNotInProgress));
        assert_eq!(session.pass(Color::Blue), Err(Rejection::GameNotInProgress));
    }

    #[test]
    fn configurations() {
        let catalog = PieceCatalog::new();
        let mut session = GameSession::new(&catalog);
        assert_eq!(session.start(1, None), Err(Rejection::InvalidConfiguration));
        assert_eq!(session.start(5, None), Err(Rejection::InvalidConfiguration));
        assert_eq!(session.start(3, None), Err(Rejection::InvalidConfiguration));
        assert_eq!(session.start(4, Some(Color::Red)), Err(Rejection::InvalidConfiguration));
        assert_eq!(session.phase(), Phase::Setup);

        session.start(3, Some(Color::Red)).unwrap();
        assert_eq!(session.active_colors(), &[Color::Blue, Color::Yellow, Color::Green]);

        session.start(2, None).unwrap();
        assert_eq!(session.active_colors(), &Color::all());
        assert_eq!(session.current_color(), Some(Color::Blue));
    }

    #[test]
    fn placement_updates_turn_state() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 4, None);

        let placement = session.play(Color::Blue, PieceId::P2, 0, Coord::new(0, 0)).unwrap();
        assert_eq!(placement.cells, vec![Coord::new(0, 0), Coord::new(1, 0)]);
        assert_eq!(session.board().cell(&Coord::new(1, 0)).unwrap(), Some(Color::Blue));
        assert!(session.used(Color::Blue).contains(&PieceId::P2));
        assert!(session.first_move_completed(Color::Blue));
        assert!(!session.first_move_completed(Color::Yellow));
        assert_eq!(session.last_placed(Color::Blue), Some(PieceId::P2));
        assert_eq!(session.current_color(), Some(Color::Yellow));
        assert_eq!(session.history()[0].notate(), "Blue placed P2 at A1, B1");
    }

    #[test]
    fn rejected_placement_changes_nothing() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 4, None);
        assert_eq!(session.play(Color::Blue, PieceId::P1, 0, Coord::new(1, 1)), Err(Rejection::MissingCornerCoverage));
        assert_eq!(session.play(Color::Yellow, PieceId::P1, 0, Coord::new(19, 0)), Err(Rejection::WrongTurn));
        assert_eq!(session.play(Color::Blue, PieceId::P1, 1, Coord::new(0, 0)), Err(Rejection::UnknownPiece));
        assert!(session.board().is_empty());
        assert_eq!(session.current_color(), Some(Color::Blue));
        assert!(session.history().is_empty());
    }

    #[test]
    fn far_off_board_anchor_is_out_of_bounds() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 4, None);
        let far = Coord::new(isize::MAX as usize, 0);
        assert_eq!(session.play(Color::Blue, PieceId::P2, 0, far), Err(Rejection::OutOfBounds));
        assert_eq!(session.play(Color::Blue, PieceId::P5, 0, Coord::new(0, usize::MAX)), Err(Rejection::OutOfBounds));
        assert_eq!(session.play(Color::Blue, PieceId::P1, 0, Coord::new(BOARD_SIZE, 0)), Err(Rejection::OutOfBounds));

        session.select_piece(Color::Blue, PieceId::P2).unwrap();
        assert_eq!(session.place(Color::Blue, PieceId::P2, far), Err(Rejection::OutOfBounds));
        assert!(session.board().is_empty());
        assert_eq!(session.current_color(), Some(Color::Blue));
    }

    #[test]
    fn pieces_are_used_once() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 3, Some(Color::Green));
        session.play(Color::Blue, PieceId::P1, 0, Coord::new(0, 0)).unwrap();
        session.play(Color::Yellow, PieceId::P1, 0, Coord::new(19, 0)).unwrap();
        session.play(Color::Red, PieceId::P1, 0, Coord::new(0, 19)).unwrap();
        assert_eq!(session.play(Color::Blue, PieceId::P1, 0, Coord::new(1, 1)), Err(Rejection::PieceAlreadyUsed));
        session.play(Color::Blue, PieceId::P2, 0, Coord::new(1, 1)).unwrap();
    }

    #[test]
    fn turn_index_cycles() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 3, Some(Color::Red));
        let start = session.turn_index();
        session.play(Color::Blue, PieceId::P1, 0, Coord::new(0, 0)).unwrap();
        session.play(Color::Yellow, PieceId::P1, 0, Coord::new(19, 0)).unwrap();
        assert_eq!(session.turn_index(), 2);
        session.play(Color::Green, PieceId::P1, 0, Coord::new(19, 19)).unwrap();
        assert_eq!(session.turn_index(), start);
        assert_eq!(session.current_color(), Some(Color::Blue));
    }

    #[test]
    fn pass_requires_no_legal_move() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 4, None);
        assert!(!session.must_pass());
        assert_eq!(session.pass(Color::Blue), Err(Rejection::PassWhileMoveExists));
        assert_eq!(session.pass_chain(), 0);
    }

    #[test]
    fn all_passing_ends_the_game() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 4, None);
        session.used = [PieceSet::full(); NUM_COLORS];

        assert!(session.must_pass());
        assert_eq!(session.pass(Color::Blue), Ok(PassOutcome::NextTurn(Color::Yellow)));
        assert_eq!(session.pass(Color::Yellow), Ok(PassOutcome::NextTurn(Color::Red)));
        assert_eq!(session.pass(Color::Red), Ok(PassOutcome::NextTurn(Color::Green)));
        assert_eq!(session.pass_chain(), 3);
        assert_eq!(session.pass(Color::Green), Ok(PassOutcome::GameOver));
        assert!(session.is_over());
        assert!(!session.must_pass());
        assert_eq!(session.pass(Color::Green), Err(Rejection::GameNotInProgress));
        assert_eq!(session.history().last().unwrap().notate(), "Green passed.");
    }

    #[test]
    fn a_placement_resets_the_pass_chain() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 4, None);
        for color in [Color::Yellow, Color::Red, Color::Green] {
            session.used[color as usize] = PieceSet::full();
        }

        session.play(Color::Blue, PieceId::P1, 0, Coord::new(0, 0)).unwrap();
        session.pass(Color::Yellow).unwrap();
        session.pass(Color::Red).unwrap();
        session.pass(Color::Green).unwrap();
        assert_eq!(session.pass_chain(), 3);

        assert_eq!(session.pass(Color::Blue), Err(Rejection::PassWhileMoveExists));
        session.play(Color::Blue, PieceId::P2, 0, Coord::new(1, 1)).unwrap();
        assert_eq!(session.pass_chain(), 0);
        assert_eq!(session.phase(), Phase::InProgress);

        session.used[Color::Blue as usize] = PieceSet::full();
        for color in [Color::Yellow, Color::Red, Color::Green] {
            assert!(matches!(session.pass(color), Ok(PassOutcome::NextTurn(_))));
        }
        assert_eq!(session.pass(Color::Blue), Ok(PassOutcome::GameOver));
    }

    #[test]
    fn restart_clears_state() {
        let catalog = PieceCatalog::new();
        let mut session = started(&catalog, 4, None);
        session.play(Color::Blue, PieceId::P1, 0, Coord::new(0, 0)).unwrap();
        session.start(3, Some(Color::Blue)).unwrap();
        assert!(session.board().is_empty());
        assert!(session.used(Color::Blue).is_empty());
        assert_eq!(session.current_color(), Some(Color::Yellow));
        assert!(session.history().is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let catalog = PieceCatalog::new();
        let mut a = started(&catalog, 4, None);
        let b = started(&catalog, 4, None);
        a.play(Color::Blue, PieceId::P1, 0, Coord::new(0, 0)).unwrap();
        assert!(b.board().is_empty());
        assert_eq!(b.current_color(), Some(Color::Blue));
    }
}
