mod options;

use std::io::BufRead;

use itertools::Itertools;
pub use options::BTPServerOptions;

use crate::prelude::*;

/// A line-oriented front end over one game session: the Blocks Text Protocol.
pub struct BTPServer {
    session: GameSession<'static>,
    config: BTPServerOptions,
}

impl BTPServer {
    /// Produces a new BTP server, starting a game if the options ask for one.
    pub fn new(options: BTPServerOptions, catalog: &'static PieceCatalog) -> Result<BTPServer> {
        let mut server = BTPServer {
            session: GameSession::new(catalog),
            config: options,
        };
        if let Some(players) = server.config.players {
            server.session.start(players, server.config.exclude)
                .with_context(|| format!("starting a {players}-player game"))?;
        }
        Ok(server)
    }

    /// Runs the protocol over stdin until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let cmdstr = line?;
            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");

            if cmd == "quit" {
                self.ok();
                return Ok(());
            }
            self.apply(cmd, args.get(1..).unwrap_or(&[]));
        }
        Ok(())
    }

    /// Runs a command, printing its output and the status footer.
    fn apply(&mut self, cmd: &str, args: &[&str]) {
        match self.execute(cmd, args) {
            Ok(output) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                if !output.is_empty() {
                    println!("{output}");
                }
                self.ok()
            },
            Err(err) => {
                match err.downcast_ref::<Rejection>() {
                    Some(rejection) if rejection.is_rule_violation() => log::debug!("rejected {cmd}: {rejection}"),
                    _ => log::warn!("encountered recoverable error:\n{err}"),
                };
                self.err(&err)
            },
        }
    }

    /// Runs a command and returns what it would print.
    pub fn execute(&mut self, cmd: &str, args: &[&str]) -> Result<String> {
        match cmd
        {
            | "" => Ok(String::new()),
            | "board" => self.board(),
            | "flip" => self.flip(),
            | "history" => self.history(),
            | "info" => Ok(self.info()),
            | "newgame" => self.new_game(args),
            | "pass" => self.pass(),
            | "place" => self.place(args),
            | "play" => self.play_move(args),
            | "rotate" => self.rotate(args),
            | "scores" => self.scores(),
            | "select" => self.select(args),
            | "turn" => self.turn(),
            | "validmoves" => self.valid_moves(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        }
    }

    fn board(&self) -> Result<String> {
        self.ensure_started()?;
        Ok(self.session.board().pretty())
    }

    fn flip(&mut self) -> Result<String> {
        self.ensure_started()?;
        self.session.mirror_orientation()?;
        self.selection_summary()
    }

    fn history(&self) -> Result<String> {
        self.ensure_started()?;
        Ok(self.session.history().iter().map(|a| a.notate()).join("\n"))
    }

    /// Starts a new game: `newgame <players> [excluded colour]`.
    fn new_game(&mut self, args: &[&str]) -> Result<String> {
        let Some(players) = args.first() else {
            return Err(anyhow!("expected a player count"));
        };
        let players = players.parse::<usize>().with_context(|| format!("invalid player count {players}"))?;
        let excluded = args.get(1).map(|s| s.parse::<Color>()).transpose()?;

        self.session.start(players, excluded)?;
        let first = self.to_move()?;
        Ok(format!("Game ready. {first} goes first.\n{}", self.status()))
    }

    fn pass(&mut self) -> Result<String> {
        let color = self.to_move()?;
        self.session.pass(color)?;
        Ok(format!("{color} passes.\n{}", self.status()))
    }

    /// Places the current selection: `place <label>`.
    fn place(&mut self, args: &[&str]) -> Result<String> {
        let color = self.to_move()?;
        let Some(label) = args.first() else {
            return Err(anyhow!("expected a board label"));
        };
        let anchor = label.parse::<Coord>()?;
        let Some(selection) = self.session.selection() else {
            return Err(Rejection::NoPieceSelected.into());
        };

        let placement = self.session.place(color, selection.piece, anchor)?;
        Ok(self.after_placement(&placement))
    }

    /// Selects, orients and places in one go: `play <movestring>`.
    fn play_move(&mut self, args: &[&str]) -> Result<String> {
        let color = self.to_move()?;
        let Some(movestr) = args.first() else {
            return Err(anyhow!("no move provided"));
        };
        let MoveString { repr: _, piece, orientation, anchor } = movestr.parse::<MoveString>()?;

        let placement = self.session.play(color, piece, orientation, anchor)?;
        Ok(self.after_placement(&placement))
    }

    /// Cycles the selection: `rotate [left|right]`, right by default.
    fn rotate(&mut self, args: &[&str]) -> Result<String> {
        self.ensure_started()?;
        let direction = args.first().map_or(Ok(Direction::Next), |s| s.parse::<Direction>())?;
        self.session.cycle_orientation(direction)?;
        self.selection_summary()
    }

    fn scores(&self) -> Result<String> {
        self.ensure_started()?;
        Ok(self.session.scores().iter().map(|l| l.notate()).join("\n"))
    }

    /// Picks up a piece for the colour to move: `select <piece>`.
    fn select(&mut self, args: &[&str]) -> Result<String> {
        let color = self.to_move()?;
        let Some(piece) = args.first() else {
            return Err(anyhow!("expected a piece id"));
        };
        let piece = piece.parse::<PieceId>()?;
        self.session.select_piece(color, piece)?;
        self.selection_summary()
    }

    fn turn(&self) -> Result<String> {
        self.ensure_started()?;
        match self.session.phase() {
            Phase::Ended => Ok("over".into()),
            _            => self.to_move().map(|c| c.notate()),
        }
    }

    fn valid_moves(&self) -> Result<String> {
        let color = self.to_move()?;
        let moves = self.session.legal_moves(color);
        let movestr = moves.iter().map(|mv| mv.notate()).join("; ");
        Ok(format!("{}\n{}", moves.len(), movestr))
    }

    // reporting

    /// Reports a placement and what the next colour faces.
    fn after_placement(&self, placement: &Placement) -> String {
        format!("{} placed {}.\n{}", placement.color, placement.piece, self.status())
    }

    /// Names the piece in hand and draws its current orientation.
    fn selection_summary(&self) -> Result<String> {
        let (Some(selection), Some(shape)) = (self.session.selection(), self.session.selected_shape()) else {
            return Err(Rejection::NoPieceSelected.into());
        };
        let count = self.session.catalog.orientations(selection.piece).len();
        Ok(format!(
            "{} (orientation {}/{})\n{}",
            self.session.catalog.name(selection.piece),
            selection.orientation + 1,
            count,
            shape.pretty()
        ))
    }

    /// The status line after a state change, plus the board when verbose.
    fn status(&self) -> String {
        let line = if self.session.is_over() {
            let winners = self.session.winners();
            let top = self.session.scores().first().map_or(0, |l| l.total);
            match winners.as_slice() {
                [winner] => format!("Game over! Winner: {winner} with {top} points."),
                _        => format!("Game over! Tie between {} at {top} points.", winners.iter().join(", ")),
            }
        } else {
            match self.session.current_color() {
                Some(color) if self.session.must_pass() => format!("{color} has no legal moves. Passing is required."),
                Some(color) => format!("{color}'s turn. Select a piece."),
                None        => String::new(),
            }
        };

        if self.config.verbose {
            format!("{line}\n{}", self.session.board().pretty())
        } else {
            line
        }
    }

    // accessors

    fn ensure_started(&self) -> Result<()> {
        if self.session.phase() == Phase::Setup {
            Err(anyhow!("no game in progress"))
        } else {
            Ok(())
        }
    }

    /// The colour to move in a game still in progress.
    fn to_move(&self) -> Result<Color> {
        self.ensure_started()?;
        if self.session.is_over() {
            return Err(Rejection::GameNotInProgress.into());
        }
        self.session.current_color().ok_or_else(|| anyhow!("no colour to move"))
    }

    // basic printers

    /// The server's ID.
    fn info(&self) -> String
    {
        format!(
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
    }

    /// Prints an error to the BTP stream.
    fn err(&self, err: &Error)
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the ok footer to the BTP stream.
    fn ok(&self)
    {
        println!("ok");
    }
}
