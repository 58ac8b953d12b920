use itertools::Itertools;

use crate::blocks::prelude::*;

impl Board {
    /// Pretty-prints the board, one row per line, with a column header and row numbers.
    pub fn pretty(&self) -> String {
        let header = format!("   {}", (0..BOARD_SIZE).map(|x| (b'A' + x as u8) as char).collect::<String>());
        let rows = self.cells.0.iter().enumerate().map(|(y, row)| {
            format!("{:>2} {}", y + 1, row.iter().map(|cell| format!("{}", cell)).join(""))
        });
        std::iter::once(header).chain(rows).join("\n")
    }
}
