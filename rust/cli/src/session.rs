//! The interactive session: opponent choice, turn sequencing, and the
//! read-dispatch loop.
//!
//! One `Session` owns one [`GameState`] and drives it line by line.
//! Each line is read, fully processed (including any automatic CPU
//! reply), and the prompt updated before the next read; a turn is an
//! atomic unit of work from the interpreter's perspective.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Color;
use nim_ai::CpuStrategy;
use nim_engine::game::{GameState, Move};
use nim_engine::logger::MatchLogger;

use crate::cli::Vs;
use crate::console::{ConsoleCommand, Flow};
use crate::error::CommandError;
use crate::io_utils::read_input_line;
use crate::ui::{format_piles, paint};
use crate::validation::{OpponentChoice, parse_int, parse_opponent_choice, tokenize};

pub struct Session<'a> {
    game: GameState,
    strategy: Box<dyn CpuStrategy>,
    logger: MatchLogger,
    transcript: Option<PathBuf>,
    color: Option<Color>,
    prompt: String,
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

impl<'a> Session<'a> {
    pub fn new(
        game: GameState,
        strategy: Box<dyn CpuStrategy>,
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
    ) -> Self {
        let logger = MatchLogger::new(game.seed(), game.vs_cpu());
        Self {
            game,
            strategy,
            logger,
            transcript: None,
            color: None,
            prompt: "> ".to_string(),
            input,
            out,
        }
    }

    /// Append completed matches to `path` as JSONL.
    pub fn set_transcript(&mut self, path: Option<PathBuf>) {
        self.transcript = path;
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// Run until the user quits or input reaches EOF.
    ///
    /// `preset` answers the first opponent-choice prompt (the `--vs`
    /// flag); later matches always prompt again.
    pub fn run(&mut self, preset: Option<Vs>) -> io::Result<()> {
        self.say("  Welcome to the interactive NIM. Type 'how2play' for instructions and rules.")?;
        self.say("  Type 'help' for detailed help.")?;

        let mut preset = preset;
        loop {
            let choice = match preset.take() {
                Some(vs) => vs,
                None => match self.prompt_opponent()? {
                    Some(vs) => vs,
                    None => return Ok(()),
                },
            };
            self.game.set_vs_cpu(matches!(choice, Vs::Cpu));
            self.say("----")?;
            self.logger = MatchLogger::new(self.game.seed(), self.game.vs_cpu());

            let mut flow = self.start_turn()?;
            if flow == Flow::Continue {
                flow = self.match_loop()?;
            }
            match flow {
                Flow::Quit => return Ok(()),
                // Back to the opponent prompt with fresh piles. Turn
                // ownership carries over from where the match ended.
                Flow::EndMatch | Flow::Continue => self.game.randomize_piles(),
            }
        }
    }

    fn prompt_opponent(&mut self) -> io::Result<Option<Vs>> {
        self.say("  Would you like to play against a CPU or a human? {cpu|human}")?;
        loop {
            self.write_prompt("> ")?;
            let Some(line) = read_input_line(self.input) else {
                return Ok(None);
            };
            let tokens = tokenize(&line);
            if tokens.is_empty() {
                continue;
            }
            match parse_opponent_choice(&tokens) {
                Ok(OpponentChoice::Quit) => return Ok(None),
                Ok(OpponentChoice::Cpu) => return Ok(Some(Vs::Cpu)),
                Ok(OpponentChoice::Human) => return Ok(Some(Vs::Human)),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    fn match_loop(&mut self) -> io::Result<Flow> {
        loop {
            let prompt = self.prompt.clone();
            self.write_prompt(&prompt)?;
            let Some(line) = read_input_line(self.input) else {
                return Ok(Flow::Quit);
            };
            match self.dispatch(&line) {
                Ok(Flow::Continue) => {}
                Ok(flow) => return Ok(flow),
                Err(CommandError::Io(e)) => return Err(e),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    /// Resolve one line of input and run it.
    ///
    /// Empty input is a no-op. A bare leading integer is shorthand for
    /// `take`, rerouted through the take handler so its own validation
    /// still applies. Anything else unresolved is a syntax error.
    pub fn dispatch(&mut self, line: &str) -> Result<Flow, CommandError> {
        let mut tokens = tokenize(line);
        let Some(first) = tokens.first() else {
            return Ok(Flow::Continue);
        };
        let lowered = first.to_lowercase();
        if let Some(cmd) = ConsoleCommand::resolve(&lowered) {
            cmd.execute(self, &tokens)
        } else if parse_int(&lowered).is_some() {
            tokens.insert(0, "take".to_string());
            ConsoleCommand::Take.execute(self, &tokens)
        } else {
            Err(CommandError::syntax(format!(
                "Command '{}' not found. Type 'help' for list of available commands.",
                lowered
            )))
        }
    }

    /// Begin the current side's turn: refresh the prompt, display the
    /// piles, and let the CPU move immediately when it holds the turn.
    fn start_turn(&mut self) -> io::Result<Flow> {
        self.update_prompt();
        self.show_piles()?;
        if self.game.vs_cpu() && !self.game.is_player1_turn() {
            self.cpu_turn()
        } else {
            Ok(Flow::Continue)
        }
    }

    fn cpu_turn(&mut self) -> io::Result<Flow> {
        let mv = self.strategy.choose_move(self.game.piles());
        let cpu_name = self.game.cpu_name().to_string();
        self.say(&format!(
            "{}> take {} from {}",
            cpu_name,
            mv.amount,
            mv.pile + 1
        ))?;
        // A strategy producing an illegal move is an engine-level
        // defect, not a user error.
        self.game.apply_move(mv).map_err(io::Error::other)?;
        self.logger.log_move(&cpu_name, mv, self.game.piles());
        self.next_turn()
    }

    /// Turn completion after any successful take: win check, then
    /// either announce the mover as winner or hand the turn over.
    fn next_turn(&mut self) -> io::Result<Flow> {
        if self.game.is_over() {
            let cpu_won = self.game.vs_cpu() && !self.game.is_player1_turn();
            if cpu_won {
                let cpu_name = self.game.cpu_name().to_string();
                self.say("  The CPU has won the game.")?;
                self.logger.set_winner(&cpu_name);
            } else {
                let winner = self.game.current_player_name().to_string();
                self.say(&format!("  Congratulations, {}! You have won!", winner))?;
                self.logger.set_winner(&winner);
            }
            self.say("")?;
            self.flush_transcript()?;
            return Ok(Flow::EndMatch);
        }
        self.game.switch_turn();
        self.start_turn()
    }

    /// Apply a validated take on behalf of the side holding the turn.
    pub(crate) fn take_for_current_player(&mut self, mv: Move) -> Result<Flow, CommandError> {
        let actor = self.game.current_player_name().to_string();
        self.game
            .apply_move(mv)
            .map_err(|e| CommandError::generic(e.to_string()))?;
        self.logger.log_move(&actor, mv, self.game.piles());
        self.next_turn().map_err(CommandError::Io)
    }

    pub(crate) fn rename_current(&mut self, name: String) {
        self.game.set_current_player_name(name);
        self.update_prompt();
    }

    pub(crate) fn set_vs_cpu(&mut self, vs_cpu: bool) {
        self.game.set_vs_cpu(vs_cpu);
    }

    pub(crate) fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Re-randomize and re-seat the match in place (`restart cpu|human`).
    pub(crate) fn restart_match(&mut self) -> io::Result<Flow> {
        self.game.restart();
        self.logger = MatchLogger::new(self.game.seed(), self.game.vs_cpu());
        self.start_turn()
    }

    pub(crate) fn show_piles(&mut self) -> io::Result<()> {
        let row = format_piles(self.game.piles());
        self.say(&row)
    }

    fn update_prompt(&mut self) {
        self.prompt = format!("{}> ", self.game.current_player_name());
    }

    pub(crate) fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", paint(text, self.color))
    }

    /// Write a pre-formatted block that already ends with a newline.
    pub(crate) fn say_block(&mut self, block: &str) -> io::Result<()> {
        write!(self.out, "{}", paint(block, self.color))
    }

    fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{}", paint(prompt, self.color))?;
        self.out.flush()
    }

    fn flush_transcript(&mut self) -> io::Result<()> {
        let Some(path) = &self.transcript else {
            return Ok(());
        };
        let line = serde_json::to_string(self.logger.record()).map_err(io::Error::other)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line)
    }
}
