use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-based prompt/response channel over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Next input line without its line ending, `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask for `count` whitespace-separated indexes, re-prompting until they parse
    pub fn prompt_indexes(&mut self, prompt: &str, count: usize) -> io::Result<Option<Vec<usize>>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse_indexes(&answer, count) {
                Some(indexes) => return Ok(Some(indexes)),
                None => self.say(format!(
                    "Please enter {count} non-negative whole numbers separated by space."
                ))?,
            }
        }
    }

    /// Ask for a single number, re-prompting until it parses
    pub fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    /// Clear the terminal and move the cursor home
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

fn parse_indexes(answer: &str, count: usize) -> Option<Vec<usize>> {
    let indexes = answer
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<usize>, _>>()
        .ok()?;
    (indexes.len() == count).then_some(indexes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_parse_indexes() {
        assert_eq!(parse_indexes("1 2", 2), Some(vec![1, 2]));
        assert_eq!(parse_indexes("  3   4  5 ", 3), Some(vec![3, 4, 5]));
        assert_eq!(parse_indexes("1", 2), None);
        assert_eq!(parse_indexes("1 -2", 2), None);
        assert_eq!(parse_indexes("a b", 2), None);
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut console = console("first\r\nsecond\n");

        assert_eq!(console.read_line().unwrap(), Some("first".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut console = console("  padded text  \n");
        assert_eq!(
            console.read_line().unwrap(),
            Some("  padded text  ".to_string())
        );
    }

    #[test]
    fn test_prompt_indexes_reprompts_on_bad_input() {
        let mut console = console("oops\n1 2\n");
        let indexes = console.prompt_indexes("Indexes: ", 2).unwrap();

        assert_eq!(indexes, Some(vec![1, 2]));
        let output = output_of(&console);
        assert_eq!(output.matches("Indexes: ").count(), 2);
        assert!(output.contains("Please enter 2 non-negative whole numbers"));
    }

    #[test]
    fn test_prompt_number_accepts_negative() {
        let mut console = console("x\n-4\n");
        assert_eq!(console.prompt_number("Key: ").unwrap(), Some(-4));
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut console = console("");
        assert_eq!(console.prompt_indexes("Indexes: ", 2).unwrap(), None);
    }
}
