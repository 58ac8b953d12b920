use std::sync::OnceLock;

use regex::Regex;

use crate::blocks::prelude::*;

static PIECE_PATTERN: OnceLock<Regex> = OnceLock::new();
static LABEL_PATTERN: OnceLock<Regex> = OnceLock::new();
static MOVE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> Result<&'static Regex> {
    if let Some(regex) = cell.get() {
        return Ok(regex);
    }
    let regex = Regex::new(source).with_context(|| format!("compiling pattern {source}"))?;
    Ok(cell.get_or_init(|| regex))
}

impl std::str::FromStr for Color {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" | "b"   => Ok(Color::Blue),
            "yellow" | "y" => Ok(Color::Yellow),
            "red" | "r"    => Ok(Color::Red),
            "green" | "g"  => Ok(Color::Green),
            _              => Err(anyhow!("invalid notation {s} for Color"))
        }
    }
}

impl std::str::FromStr for PieceId {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some(matches) = pattern(&PIECE_PATTERN, r"^[Pp](?<number>\d{1,2})$")?.captures(s) else {
            return Err(anyhow!("invalid notation {s} for PieceId"));
        };
        let number = matches["number"].parse::<usize>()?;
        if number == 0 {
            return Err(anyhow!("piece numbers start at P1, received {s}"));
        }
        PieceId::try_from_index(number - 1)
    }
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some(matches) = pattern(&LABEL_PATTERN, r"^(?<col>[A-Za-z])(?<row>\d{1,2})$")?.captures(s) else {
            return Err(anyhow!("expected a board label like A1 for Coord; received {s}"));
        };
        let col = matches["col"].to_ascii_uppercase().as_bytes()[0];
        let row = matches["row"].parse::<usize>()?;
        if row == 0 {
            return Err(anyhow!("rows start at 1, received {s}"));
        }
        let coord = Coord::new((col - b'A') as usize, row - 1);
        if !coord.in_bounds() {
            return Err(anyhow!("label {s} is off the board"));
        }
        Ok(coord)
    }
}

impl std::str::FromStr for Direction {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "right" | "next" | "cw"        => Ok(Direction::Next),
            "left" | "previous" | "ccw"    => Ok(Direction::Previous),
            _                              => Err(anyhow!("invalid notation {s} for Direction"))
        }
    }
}

/// A segment of protocol input that names a placement: a piece, an orientation index
/// and the label its local origin lands on, e.g. `P12:3@E7`. The orientation defaults to 0.
///
/// Parsing only checks syntax; whether the placement is legal is up to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveString {
    pub repr: String,
    pub piece: PieceId,
    pub orientation: usize,
    pub anchor: Coord,
}

impl std::str::FromStr for MoveString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let regex = pattern(&MOVE_PATTERN, r"^(?<piece>[Pp]\d{1,2})(?::(?<orientation>\d{1,2}))?@(?<anchor>[A-Za-z]\d{1,2})$")?;
        let Some(matches) = regex.captures(s) else {
            return Err(anyhow!("could not parse movestring {s}"));
        };

        let piece = matches["piece"].parse::<PieceId>()?;
        let orientation = match matches.name("orientation") {
            Some(m) => m.as_str().parse::<usize>()?,
            None    => 0,
        };
        let anchor = matches["anchor"].parse::<Coord>()?;

        Ok(MoveString { repr: s.to_owned(), piece, orientation, anchor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert_eq!("Blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("GREEN".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("y".parse::<Color>().unwrap(), Color::Yellow);
        assert!("purple".parse::<Color>().is_err());
        for color in Color::all() {
            assert_eq!(color.notate().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn piece_ids() {
        assert_eq!("P1".parse::<PieceId>().unwrap(), PieceId::P1);
        assert_eq!("p21".parse::<PieceId>().unwrap(), PieceId::P21);
        assert!("P0".parse::<PieceId>().is_err());
        assert!("P22".parse::<PieceId>().is_err());
        assert!("Q3".parse::<PieceId>().is_err());
        assert!("P".parse::<PieceId>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!("A1".parse::<Coord>().unwrap(), Coord::new(0, 0));
        assert_eq!("t20".parse::<Coord>().unwrap(), Coord::new(19, 19));
        assert_eq!("E7".parse::<Coord>().unwrap(), Coord::new(4, 6));
        assert!("U1".parse::<Coord>().is_err());
        assert!("A21".parse::<Coord>().is_err());
        assert!("A0".parse::<Coord>().is_err());
        assert!("11".parse::<Coord>().is_err());
        for coord in [Coord::new(0, 19), Coord::new(12, 3)] {
            assert_eq!(coord.notate().parse::<Coord>().unwrap(), coord);
        }
    }

    #[test]
    fn directions() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Previous);
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Next);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn movestrings() {
        let mv = "P12:3@E7".parse::<MoveString>().unwrap();
        assert_eq!((mv.piece, mv.orientation, mv.anchor), (PieceId::P12, 3, Coord::new(4, 6)));

        let mv = "p1@a1".parse::<MoveString>().unwrap();
        assert_eq!((mv.piece, mv.orientation, mv.anchor), (PieceId::P1, 0, Coord::new(0, 0)));

        let legal = LegalMove { piece: PieceId::P5, orientation: 1, anchor: Coord::new(2, 9) };
        let mv = legal.notate().parse::<MoveString>().unwrap();
        assert_eq!((mv.piece, mv.orientation, mv.anchor), (legal.piece, legal.orientation, legal.anchor));

        assert!("P12:3".parse::<MoveString>().is_err());
        assert!("P12@Z9".parse::<MoveString>().is_err());
        assert!("P99@A1".parse::<MoveString>().is_err());
    }
}
