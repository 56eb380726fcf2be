use crate::scenario::Scenario;
use crate::types::CellType;
use crossterm::{
    ExecutableCommand,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{Result, Write, stdout};

pub struct Display;

impl Display {
    /// Render the scenario as a colored grid in the terminal.
    pub fn render(scenario: &Scenario) -> Result<()> {
        let mut stdout = stdout();

        stdout.execute(Print("\n"))?;
        for row in 0..scenario.grid_size {
            for col in 0..scenario.grid_size {
                match scenario.cell(row, col) {
                    CellType::Robot => {
                        stdout.execute(SetForegroundColor(Color::Blue))?;
                        stdout.execute(Print("R "))?;
                    }
                    CellType::Goal => {
                        stdout.execute(SetForegroundColor(Color::Red))?;
                        stdout.execute(Print("G "))?;
                    }
                    CellType::Obstacle => {
                        stdout.execute(SetForegroundColor(Color::DarkGrey))?;
                        stdout.execute(Print("██"))?;
                    }
                    CellType::Empty => {
                        stdout.execute(SetForegroundColor(Color::White))?;
                        stdout.execute(Print("· "))?;
                    }
                }
                stdout.execute(ResetColor)?;
            }
            stdout.execute(Print("\n"))?;
        }

        stdout.execute(Print(
            "\nLégende: [R]obot | [G]oal | [█]Obstacle | [·]Vide\n",
        ))?;
        stdout.flush()?;
        Ok(())
    }
}
