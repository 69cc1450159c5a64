//! Interactive collection of person records.
//!
//! The prompter walks through the fields of a new person one question at a
//! time, in the same order the record serializes in.

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::person::{parse_alive, parse_id_list, Person};

/// Prompts for the fields of a new person record.
///
/// Generic over the reader and writer so the binary can wire it to
/// stdin/stdout while tests drive it with in-memory cursors.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// A prompter wired to standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect one person record, prompting field by field.
    ///
    /// The three id-list answers are split on commas, trimmed, and cleared
    /// of empty tokens; every other answer is kept as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt cannot be written or an answer cannot
    /// be read.
    pub fn collect_person(&mut self) -> Result<Person> {
        let id = self.ask("Enter new person's ID (e.g., 'JohnDoe'): ")?;
        let first_name = self.ask("Enter new person's first name: ")?;
        let last_name = self.ask("Enter new person's last name: ")?;
        let alive = parse_alive(&self.ask("Is the person alive? (yes/no): ")?);
        let gender = self.ask("Enter new person's gender (male/female): ")?;
        let parents = parse_id_list(
            &self.ask("Enter parent IDs, separated by commas (leave blank if none): ")?,
        );
        let spouses = parse_id_list(
            &self.ask("Enter spouse IDs, separated by commas (leave blank if none): ")?,
        );
        let children = parse_id_list(
            &self.ask("Enter child IDs, separated by commas (leave blank if none): ")?,
        );
        let birth_family_id = self.ask("Enter birth family ID (e.g., 'familyPandya'): ")?;
        let current_family_id = self.ask("Enter current family ID (e.g., 'familyPandya'): ")?;

        Ok(Person {
            id,
            first_name,
            last_name,
            alive,
            gender,
            parents,
            spouses,
            children,
            birth_family_id,
            current_family_id,
        })
    }

    /// Write a prompt without a trailing newline, flush, and read one line.
    ///
    /// Only the trailing newline is stripped from the answer; leading and
    /// trailing spaces are kept as typed.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
