//! The console command set and its handlers.
//!
//! Commands form a fixed, closed registry: a tagged enum resolved
//! case-insensitively by name, each variant carrying its syntax string,
//! help description, and handler. Handlers validate their arguments
//! fully before mutating any game state, so the engine's bound checks
//! are never reached by user input.

use nim_engine::game::Move;

use crate::error::{CommandError, ErrorKind};
use crate::help::{HOW2PLAY, render_entry};
use crate::session::Session;
use crate::ui::color_from_name;
use crate::validation::{parse_int, parse_pile_arg};

/// What the session loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Stay in the current match and read the next line.
    Continue,
    /// Leave the match loop and return to the opponent-choice prompt.
    EndMatch,
    /// Terminate the program.
    Quit,
}

/// The closed set of console commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Show,
    Take,
    Name,
    How2Play,
    Restart,
    Exit,
    Rq,
    Color,
}

/// All commands in the order the help screen lists them.
pub const ALL_COMMANDS: [ConsoleCommand; 9] = [
    ConsoleCommand::Color,
    ConsoleCommand::Exit,
    ConsoleCommand::Help,
    ConsoleCommand::How2Play,
    ConsoleCommand::Name,
    ConsoleCommand::Restart,
    ConsoleCommand::Rq,
    ConsoleCommand::Show,
    ConsoleCommand::Take,
];

impl ConsoleCommand {
    /// Resolve an already-lowercased token against the registry.
    pub fn resolve(name: &str) -> Option<Self> {
        ALL_COMMANDS.iter().copied().find(|cmd| cmd.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::Help => "help",
            ConsoleCommand::Show => "show",
            ConsoleCommand::Take => "take",
            ConsoleCommand::Name => "name",
            ConsoleCommand::How2Play => "how2play",
            ConsoleCommand::Restart => "restart",
            ConsoleCommand::Exit => "exit",
            ConsoleCommand::Rq => "rq",
            ConsoleCommand::Color => "color",
        }
    }

    pub fn syntax(&self) -> &'static str {
        match self {
            ConsoleCommand::Help => "help [command_name]...",
            ConsoleCommand::Show => "show [pile]...",
            ConsoleCommand::Take => "[take] <number> [from] <pile>",
            ConsoleCommand::Name => "name <name>",
            ConsoleCommand::How2Play => "how2play",
            ConsoleCommand::Restart => "restart [cpu|human]",
            ConsoleCommand::Exit => "exit",
            ConsoleCommand::Rq => "rq",
            ConsoleCommand::Color => "color <color>",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConsoleCommand::Help => {
                "Display the help screen (or the help for specified commands only)."
            }
            ConsoleCommand::Show => {
                "Show the piles (or the specified piles in the order of [pile], \
                 and valid pile is one of {1,2,3} corresponding to the pile number)"
            }
            ConsoleCommand::Take => {
                "Take <number> of chips (in range [1, pile length]) from \
                 <pile>-th pile (in range [1, 3])."
            }
            ConsoleCommand::Name => {
                "Set your name to <name>. Special characters and spaces are \
                 allowed (case-sensitive)."
            }
            ConsoleCommand::How2Play => {
                "Print rules of the game and how to play NIM with this program."
            }
            ConsoleCommand::Restart => "Restart game with either CPU or human opponent.",
            ConsoleCommand::Exit => "Exit the entire program.",
            ConsoleCommand::Rq => "Ragequit.",
            ConsoleCommand::Color => {
                "Sets the font color to <color> (one of {blue, green, cyan, red, \
                 magenta, brown, grey, darkgrey, lightblue, lightgreen, lightcyan, \
                 lightred, lightmagenta, yellow, white} (case-insensitive))."
            }
        }
    }

    /// Run the command. `parts` is the full token list including the
    /// command name itself.
    pub fn execute(self, session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
        match self {
            ConsoleCommand::Help => cmd_help(session, parts),
            ConsoleCommand::Show => cmd_show(session, parts),
            ConsoleCommand::Take => cmd_take(session, parts),
            ConsoleCommand::Name => cmd_name(session, parts),
            ConsoleCommand::How2Play => cmd_how2play(session, parts),
            ConsoleCommand::Restart => cmd_restart(session, parts),
            ConsoleCommand::Exit | ConsoleCommand::Rq => Ok(Flow::Quit),
            ConsoleCommand::Color => cmd_color(session, parts),
        }
    }
}

fn cmd_help(session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
    if parts.len() == 1 {
        for cmd in ALL_COMMANDS {
            session.say_block(&render_entry(cmd.syntax(), cmd.description()))?;
        }
        return Ok(Flow::Continue);
    }
    if parts.len() == 2 && parts[1].to_lowercase() == "me" {
        session.say("  You're on your own buddy.")?;
        return Ok(Flow::Continue);
    }
    // Unknown names are reported per argument; the rest still print.
    for arg in &parts[1..] {
        let lowered = arg.to_lowercase();
        match ConsoleCommand::resolve(&lowered) {
            Some(cmd) => session.say_block(&render_entry(cmd.syntax(), cmd.description()))?,
            None => session.say(&format!(
                "> {}: Command '{}' not found",
                ErrorKind::Syntax,
                lowered
            ))?,
        }
    }
    Ok(Flow::Continue)
}

/// All-or-nothing output: every argument is validated while the row is
/// built up, and nothing is printed unless the whole command succeeds.
fn cmd_show(session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
    if parts.len() == 1 {
        session.show_piles()?;
        return Ok(Flow::Continue);
    }
    let mut counts = Vec::with_capacity(parts.len() - 1);
    for arg in &parts[1..] {
        let index = parse_pile_arg(arg)?;
        let count = session
            .game()
            .pile(index)
            .map_err(|e| CommandError::generic(e.to_string()))?;
        counts.push(count.to_string());
    }
    session.say(&format!("  {}", counts.join("  ")))?;
    Ok(Flow::Continue)
}

fn cmd_take(session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
    match parts.len() {
        1 => {
            return Err(CommandError::argument(
                "Arguments <number> AND <pile> not found. Type 'help take' for usage details.",
            ));
        }
        2 => {
            return Err(CommandError::argument(
                "Argument <pile> not found. Type 'help take' for usage details.",
            ));
        }
        _ => {}
    }
    let has_from = parts[2].eq_ignore_ascii_case("from");
    let expected_len = if has_from { 4 } else { 3 };
    if parts.len() > expected_len {
        return Err(CommandError::argument(
            "Too many arguments. Type 'help take' for usage details.",
        ));
    }
    if has_from && parts.len() == 3 {
        return Err(CommandError::argument(
            "Argument <pile> not found. Type 'help take' for usage details.",
        ));
    }

    let number = parse_int(&parts[1]).ok_or_else(|| {
        CommandError::argument(format!("Could not parse '{}' as an integer.", parts[1]))
    })?;
    let pile_token = if has_from { &parts[3] } else { &parts[2] };
    let index = parse_pile_arg(pile_token)?;

    let available = session
        .game()
        .pile(index)
        .map_err(|e| CommandError::generic(e.to_string()))?;
    if available == 0 {
        return Err(CommandError::range(format!(
            "Pile {} is empty.",
            index + 1
        )));
    }
    if number < 1 || number > available as i64 {
        return Err(CommandError::range(format!(
            "Expected <number> in range [1, pile length ({})], got '{}'.",
            available, number
        )));
    }

    session.take_for_current_player(Move {
        amount: number as u8,
        pile: index,
    })
}

fn cmd_name(session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
    if parts.len() == 1 {
        return Err(CommandError::argument(
            "Argument <name> not found. Type 'help name' for usage details.",
        ));
    }
    session.rename_current(parts[1..].join(" "));
    Ok(Flow::Continue)
}

fn cmd_how2play(session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
    let _ = parts;
    session.say(HOW2PLAY)?;
    Ok(Flow::Continue)
}

fn cmd_restart(session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
    // Bare `restart` ends the match loop and falls back to the
    // opponent-choice prompt instead of restarting in place.
    if parts.len() == 1 {
        session.say("")?;
        return Ok(Flow::EndMatch);
    }
    if parts.len() > 2 {
        return Err(CommandError::argument(
            "Expected only 1 argument, one of {cpu,human}.",
        ));
    }
    let opponent = parts[1].to_lowercase();
    let vs_cpu = match opponent.as_str() {
        "cpu" => true,
        "human" => false,
        _ => {
            return Err(CommandError::argument(format!(
                "Expected one of {{cpu,human}}. Got '{}'.",
                opponent
            )));
        }
    };
    session.set_vs_cpu(vs_cpu);
    session.say("----")?;
    session.restart_match().map_err(CommandError::Io)
}

fn cmd_color(session: &mut Session, parts: &[String]) -> Result<Flow, CommandError> {
    if parts.len() == 1 {
        return Err(CommandError::argument(
            "Argument <color> not found. Type 'help color' for usage details.",
        ));
    }
    if parts.len() > 2 {
        return Err(CommandError::argument(
            "Too many arguments. Type 'help color' for usage details.",
        ));
    }
    let name = parts[1].to_lowercase();
    let color = color_from_name(&name).ok_or_else(|| {
        CommandError::argument(format!(
            "Could not find color named '{}'. Type 'help color' for usage details.",
            name
        ))
    })?;
    session.set_color(Some(color));
    Ok(Flow::Continue)
}
