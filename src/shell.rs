use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;

use crate::evaluator::{submit_guess, Outcome, Tone};
use crate::session::GameSession;
use crate::settings::Settings;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Terminal front end: reads guesses line by line, prints outcomes and
/// offers a new game after each finished one.
pub struct Shell<R, W, G> {
    input: R,
    output: W,
    rng: G,
    summary: Summary,
}

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Shell {
            input,
            output,
            rng,
            summary: Summary::default(),
        }
    }

    /// Plays until the player declines another game or input runs out.
    pub fn run(&mut self, settings: Settings) -> Result<Summary> {
        let mut session = GameSession::start(settings, &mut self.rng);
        self.summary.games += 1;
        writeln!(self.output, "{}", settings.prompt())?;
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            let (next, outcome) =
                submit_guess(session, &line).context("Guess submitted to a finished game")?;
            session = next;
            self.render(&outcome)?;
            if !outcome.is_terminal() {
                continue;
            }
            match outcome {
                Outcome::Won { .. } => self.summary.wins += 1,
                _ => self.summary.losses += 1,
            }
            if !self.play_again()? {
                break;
            }
            session = session.restart(&mut self.rng);
            self.summary.games += 1;
            writeln!(self.output, "{}", settings.prompt())?;
        }
        self.output.flush()?;
        Ok(self.summary)
    }

    fn render(&mut self, outcome: &Outcome) -> Result<()> {
        let marker = match outcome.tone() {
            Tone::Success => "[ok]",
            Tone::Failure => "[x]",
        };
        writeln!(self.output, "{} {}", marker, outcome)?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        writeln!(self.output, "Play Again? [y/N]")?;
        Ok(match self.read_line()? {
            Some(answer) => {
                let answer = answer.trim().to_ascii_lowercase();
                answer == "y" || answer == "yes"
            }
            None => false,
        })
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_target;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn play(input: &str, seed: u64) -> (Summary, String) {
        let mut output = Vec::new();
        let summary = {
            let mut shell = Shell::new(
                Cursor::new(input.as_bytes()),
                &mut output,
                StdRng::seed_from_u64(seed),
            );
            shell.run(Settings::default()).unwrap()
        };
        (summary, String::from_utf8(output).unwrap())
    }

    fn targets(seed: u64, count: usize) -> Vec<i32> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count).map(|_| random_target(1, 10, &mut rng)).collect()
    }

    fn wrong_guesses(target: i32) -> Vec<i32> {
        (1..=10).filter(|&g| g != target).take(3).collect()
    }

    #[test]
    fn test_win_and_quit() {
        let target = targets(1, 1)[0];
        let input = format!("abc\n42\n{}\nn\n", target);
        let (summary, output) = play(&input, 1);
        assert_eq!(
            summary,
            Summary {
                games: 1,
                wins: 1,
                losses: 0
            }
        );
        let lines: Vec<&str> = output.lines().collect();
        let expected = vec![
            "Guess a number between 1 and 10".to_string(),
            "[x] Please enter a number between 1 and 10".to_string(),
            "[x] Please enter a number between 1 and 10".to_string(),
            format!("[ok] {} is correct, YOU WIN", target),
            "Play Again? [y/N]".to_string(),
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_lose_then_restart() {
        let t = targets(2, 2);
        let misses = wrong_guesses(t[0]);
        let input = format!(
            "{}\n{}\n{}\nY\n{}\nno\n",
            misses[0], misses[1], misses[2], t[1]
        );
        let (summary, output) = play(&input, 2);
        assert_eq!(
            summary,
            Summary {
                games: 2,
                wins: 1,
                losses: 1
            }
        );
        assert!(output.contains(&format!("{} is not correct, 2 guesses left", misses[0])));
        assert!(output.contains(&format!("{} is not correct, 1 guesses left", misses[1])));
        assert!(output.contains(&format!(
            "[x] Game Over, you lost. The correct number was {}",
            t[0]
        )));
        assert!(output.contains(&format!("[ok] {} is correct, YOU WIN", t[1])));
        assert_eq!(output.matches("Guess a number between 1 and 10").count(), 2);
    }

    #[test]
    fn test_eof_mid_game() {
        let target = targets(3, 1)[0];
        let miss = wrong_guesses(target)[0];
        let (summary, output) = play(&format!("{}\n", miss), 3);
        assert_eq!(
            summary,
            Summary {
                games: 1,
                wins: 0,
                losses: 0
            }
        );
        assert!(output.ends_with("guesses left\n"));
    }

    #[test]
    fn test_eof_at_play_again_prompt() {
        let target = targets(4, 1)[0];
        let (summary, output) = play(&format!("{}\n", target), 4);
        assert_eq!(summary.wins, 1);
        assert!(output.ends_with("Play Again? [y/N]\n"));
    }
}
