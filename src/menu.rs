// Copyright (c) 2025 Morse Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Interactive text menu over a [`MorseTree`].
//!
//! The menu is generic over its input and output so the same loop drives a
//! terminal in the binary and in-memory buffers in tests. Tree errors are
//! printed verbatim; only I/O failures end the loop early.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::menu::MenuConfig;
use crate::data_structures::morse_tree::normalize;
use crate::data_structures::{MorseTree, MorseTreeError};
use crate::error::MorseResult;
use crate::render;

const RULE: &str = "========================================";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Insert a character at its standard code
    Add,
    /// Clear a character from the tree
    Remove,
    /// Print the code of a character
    Lookup,
    /// Encode free text
    Encode,
    /// Decode space separated codes
    Decode,
    /// Print the tree outline
    Show,
    /// Insert A-Z and 0-9
    LoadAlphabet,
    /// Drop every node
    Clear,
    /// Leave the menu
    Exit,
}

impl MenuOption {
    /// Every option in display order.
    pub const ALL: [MenuOption; 9] = [
        Self::Add,
        Self::Remove,
        Self::Lookup,
        Self::Encode,
        Self::Decode,
        Self::Show,
        Self::LoadAlphabet,
        Self::Clear,
        Self::Exit,
    ];

    /// The key typed to pick this option.
    pub fn key(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::Remove => "2",
            Self::Lookup => "3",
            Self::Encode => "4",
            Self::Decode => "5",
            Self::Show => "6",
            Self::LoadAlphabet => "7",
            Self::Clear => "8",
            Self::Exit => "0",
        }
    }

    /// Description shown in the option list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add character",
            Self::Remove => "Remove character",
            Self::Lookup => "Look up character",
            Self::Encode => "Encode text",
            Self::Decode => "Decode Morse",
            Self::Show => "Show tree",
            Self::LoadAlphabet => "Load standard alphabet",
            Self::Clear => "Clear tree",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| format!("unknown menu option: {s}"))
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive menu reading choices from `R` and printing to `W`.
#[derive(Debug)]
pub struct MorseMenu<R, W> {
    tree: MorseTree,
    config: MenuConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MorseMenu<R, W> {
    /// Creates a menu over `tree`.
    pub fn new(tree: MorseTree, config: MenuConfig, input: R, output: W) -> Self {
        Self {
            tree,
            config,
            input,
            output,
        }
    }

    /// The tree the menu operates on.
    pub fn tree(&self) -> &MorseTree {
        &self.tree
    }

    /// Consumes the menu, returning the tree and the output sink.
    pub fn into_parts(self) -> (MorseTree, W) {
        (self.tree, self.output)
    }

    /// Runs the menu until the exit option is chosen or input ends.
    pub fn run(&mut self) -> MorseResult<()> {
        if self.config.show_banner {
            writeln!(self.output, "\nWelcome to the Morse code tree")?;
        }

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };
            if choice.is_empty() {
                continue;
            }

            let flow = match choice.parse::<MenuOption>() {
                Ok(option) => {
                    debug!(?option, "menu option selected");
                    self.dispatch(option)?
                }
                Err(e) => {
                    warn!("{e}");
                    writeln!(self.output, "\n✗ Invalid option! Try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, option: MenuOption) -> MorseResult<Flow> {
        match option {
            MenuOption::Add => self.add(),
            MenuOption::Remove => self.remove(),
            MenuOption::Lookup => self.lookup(),
            MenuOption::Encode => self.encode(),
            MenuOption::Decode => self.decode(),
            MenuOption::Show => self.show(),
            MenuOption::LoadAlphabet => self.load_alphabet(),
            MenuOption::Clear => self.clear(),
            MenuOption::Exit => {
                writeln!(self.output, "\n✓ Exiting...")?;
                Ok(Flow::Quit)
            }
        }
    }

    fn print_menu(&mut self) -> MorseResult<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "     MORSE CODE TREE")?;
        writeln!(self.output, "{RULE}")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{} - {}", option.key(), option.label())?;
        }
        writeln!(self.output, "{RULE}")?;
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> MorseResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for a value. Returns `None` when input has ended, or prints
    /// `empty_message` and returns `None` when the answer is blank.
    fn ask(&mut self, question: &str, empty_message: &str) -> MorseResult<Option<String>> {
        write!(self.output, "\n{question}")?;
        self.output.flush()?;
        match self.read_line()? {
            None => Ok(None),
            Some(answer) if answer.is_empty() => {
                writeln!(self.output, "ERROR: {empty_message}")?;
                Ok(None)
            }
            Some(answer) => Ok(Some(answer)),
        }
    }

    fn ask_character(&mut self, question: &str) -> MorseResult<Option<char>> {
        Ok(self
            .ask(question, "Character cannot be empty!")?
            .and_then(|answer| answer.chars().next()))
    }

    fn add(&mut self) -> MorseResult<Flow> {
        let Some(answer) = self.ask(
            "Enter the character (A-Z or 0-9): ",
            "Character cannot be empty!",
        )?
        else {
            return Ok(Flow::Continue);
        };

        let count = answer.chars().count();
        let mut chars = answer.chars();
        let (Some(character), None) = (chars.next(), chars.next()) else {
            writeln!(self.output, "ERROR: Enter only ONE character at a time!")?;
            writeln!(self.output, "You entered: \"{answer}\" ({count} characters)")?;
            return Ok(Flow::Continue);
        };

        match self.tree.insert(character) {
            Ok(code) => writeln!(
                self.output,
                "✓ '{}' added with code: {code}",
                normalize(character)
            )?,
            Err(MorseTreeError::NotSupported(c)) => {
                writeln!(
                    self.output,
                    "✗ ERROR: '{c}' has no standard International Morse code!"
                )?;
                writeln!(self.output, "  Only letters A-Z and digits 0-9 are supported.")?;
            }
            Err(e) => writeln!(self.output, "✗ ERROR: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> MorseResult<Flow> {
        let Some(character) = self.ask_character("Enter the character to remove: ")? else {
            return Ok(Flow::Continue);
        };
        let shown = normalize(character);

        if self.tree.remove(character) {
            writeln!(self.output, "✓ '{shown}' removed (position kept as an empty node)")?;
        } else {
            writeln!(self.output, "✗ '{shown}' not found in the tree")?;
        }
        Ok(Flow::Continue)
    }

    fn lookup(&mut self) -> MorseResult<Flow> {
        let Some(character) = self.ask_character("Enter the character to look up: ")? else {
            return Ok(Flow::Continue);
        };
        let shown = normalize(character);

        match self.tree.lookup(character) {
            Ok(code) => writeln!(self.output, "✓ Morse code of '{shown}': {code}")?,
            Err(_) => writeln!(self.output, "✗ '{shown}' not found in the tree")?,
        }
        Ok(Flow::Continue)
    }

    fn encode(&mut self) -> MorseResult<Flow> {
        let Some(text) = self.ask("Enter the text to encode: ", "Text cannot be empty!")? else {
            return Ok(Flow::Continue);
        };
        let result = self.tree.encode_word(&text);
        self.print_result(result)
    }

    fn decode(&mut self) -> MorseResult<Flow> {
        let Some(code) = self.ask(
            "Enter the Morse code (letters separated by spaces, words by /): ",
            "Code cannot be empty!",
        )?
        else {
            return Ok(Flow::Continue);
        };
        let result = self.tree.decode_word(&code);
        self.print_result(result)
    }

    fn print_result(&mut self, result: Result<String, MorseTreeError>) -> MorseResult<Flow> {
        writeln!(self.output, "\nResult:")?;
        match result {
            Ok(text) => writeln!(self.output, "{text}")?,
            Err(e) => writeln!(self.output, "ERROR: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> MorseResult<Flow> {
        if self.tree.is_empty() {
            writeln!(self.output, "\nWARNING: The tree is empty!")?;
        } else {
            writeln!(
                self.output,
                "\n{} characters, {} nodes, {} levels",
                self.tree.len(),
                self.tree.node_count(),
                self.tree.height()
            )?;
            writeln!(self.output, "{}", render::outline(self.tree.root()))?;
        }
        Ok(Flow::Continue)
    }

    fn load_alphabet(&mut self) -> MorseResult<Flow> {
        writeln!(self.output, "\nLoading the standard International Morse alphabet...")?;
        let added = self.tree.load_standard_alphabet();
        writeln!(self.output, "✓ Standard alphabet loaded!")?;
        writeln!(self.output, "  {added} characters added (A-Z + 0-9)")?;
        Ok(Flow::Continue)
    }

    fn clear(&mut self) -> MorseResult<Flow> {
        self.tree.clear();
        writeln!(self.output, "\n✓ Tree cleared")?;
        Ok(Flow::Continue)
    }
}
