use crate::blocks::prelude::*;

/// One colour's line in the score table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    /// 1-based; tied totals share a rank.
    pub rank: usize,
    pub color: Color,
    /// Squares over every piece the colour has not placed.
    pub remaining: usize,
    pub bonus: i32,
    pub total: i32,
}

impl ScoreLine {
    /// Notates the line as `rank color remaining bonus total`.
    pub fn notate(&self) -> String {
        format!("{} {} {} {} {}", self.rank, self.color, self.remaining, self.bonus, self.total)
    }
}

impl<'a> GameSession<'a> {
    /// The ranked score table over the active colours, best first. Ties keep turn order.
    ///
    /// Queryable at any time, but only final once the game has ended.
    pub fn scores(&self) -> Vec<ScoreLine> {
        let mut lines = self.active_colors().iter().map(|&c| self._unranked_score(c)).collect::<Vec<_>>();
        lines.sort_by(|a, b| b.total.cmp(&a.total));

        let totals = lines.iter().map(|l| l.total).collect::<Vec<_>>();
        for line in lines.iter_mut() {
            line.rank = 1 + totals.iter().filter(|&&t| t > line.total).count();
        }
        lines
    }

    /// Every colour sharing the top total.
    pub fn winners(&self) -> Vec<Color> {
        self.scores().into_iter().filter(|l| l.rank == 1).map(|l| l.color).collect()
    }

    /// Scores a colour: minus one per unplaced square, or a bonus for placing everything that is
    /// larger when the single square went down last.
    fn _unranked_score(&self, color: Color) -> ScoreLine {
        let placed = self.used(color).into_iter().map(|id| self.catalog.size(id)).sum::<usize>();
        let remaining = self.catalog.total_squares() - placed;
        let bonus = match (remaining, self.last_placed(color)) {
            (0, Some(PieceId::P1)) => MONOMINO_LAST_BONUS,
            (0, _)                 => ALL_PLACED_BONUS,
            _                      => 0,
        };
        ScoreLine { rank: 0, color, remaining, bonus, total: bonus - remaining as i32 }
    }
}
