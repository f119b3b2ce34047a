//! Interactive console session
//!
//! Asks for the current location once, then for items until one is found
//! in the store (or the user types `exit`), and prints the way there.

use std::io::{self, BufRead, Write};

use aislemap_core::{ItemLookup, Store};

pub const LOCATION_PROMPT: &str = "Enter your current location: ";
pub const ITEM_PROMPT: &str = "Enter the item you're looking for (or type 'exit' to quit): ";

pub const GOODBYE: &str = "Exiting the program. Goodbye!";
pub const ITEM_NOT_FOUND: &str = "Item not found in the store. Please try again.";
pub const NO_PATH: &str = "No path found to the item.";

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed `exit`
    Exited,
    /// Input ran out before an item was found
    EndOfInput,
    /// An item was found but no path leads to it
    NoPath,
    /// An item was found and the path to it printed
    PathShown(Vec<String>),
}

/// Run one session against `store`, reading from `input` and writing to `output`
pub fn run<R: BufRead, W: Write>(
    store: &Store,
    mut input: R,
    mut output: W,
) -> anyhow::Result<SessionOutcome> {
    let Some(current) = prompt(&mut input, &mut output, LOCATION_PROMPT)? else {
        return end_of_input(&mut output);
    };
    tracing::debug!("Session started at {:?}", current);

    loop {
        let Some(item) = prompt(&mut input, &mut output, ITEM_PROMPT)? else {
            return end_of_input(&mut output);
        };

        if item.eq_ignore_ascii_case("exit") {
            writeln!(output, "{}", GOODBYE)?;
            return Ok(SessionOutcome::Exited);
        }

        match store.find_item(&current, &item) {
            ItemLookup::NotFound { .. } => {
                writeln!(output, "{}", ITEM_NOT_FOUND)?;
            }
            ItemLookup::Found { item, result, .. } => {
                // One resolved item ends the session, with or without a path
                return match result.path {
                    Some(path) => {
                        writeln!(output, "Path to {}: {}", item, path)?;
                        Ok(SessionOutcome::PathShown(path.locations))
                    }
                    None => {
                        writeln!(output, "{}", NO_PATH)?;
                        Ok(SessionOutcome::NoPath)
                    }
                };
            }
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

/// Read one line, stripping only the line terminator
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn end_of_input<W: Write>(output: &mut W) -> anyhow::Result<SessionOutcome> {
    writeln!(output)?;
    writeln!(output, "{}", GOODBYE)?;
    Ok(SessionOutcome::EndOfInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aislemap_core::StoreLayout;
    use std::io::Cursor;

    fn run_with(input: &str) -> (SessionOutcome, String) {
        let store = StoreLayout::sample().build().unwrap();
        let mut output = Vec::new();
        let outcome = run(&store, Cursor::new(input), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_finds_bread_from_entrance() {
        let (outcome, output) = run_with("Entrance\nBread\n");

        assert_eq!(
            outcome,
            SessionOutcome::PathShown(vec![
                "Entrance".to_string(),
                "Fruits and Vegetables".to_string(),
                "Bakery".to_string(),
            ])
        );
        assert!(output.starts_with(LOCATION_PROMPT));
        assert!(output.contains("Path to Bread: Entrance -> Fruits and Vegetables -> Bakery\n"));
    }

    #[test]
    fn test_unknown_item_prompts_again() {
        let (outcome, output) = run_with("Entrance\nYogurt\nMilk\n");

        assert!(matches!(outcome, SessionOutcome::PathShown(ref path) if path.len() == 10));
        assert_eq!(output.matches(ITEM_PROMPT).count(), 2);
        assert!(output.contains(ITEM_NOT_FOUND));
        assert!(output.contains("Path to Milk: Entrance -> "));
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        for word in ["exit", "EXIT", "Exit"] {
            let (outcome, output) = run_with(&format!("Entrance\n{}\nBread\n", word));
            assert_eq!(outcome, SessionOutcome::Exited);
            assert!(output.ends_with(&format!("{}\n", GOODBYE)));
            assert!(!output.contains("Path to"));
        }
    }

    #[test]
    fn test_unknown_start_reports_no_path() {
        let (outcome, output) = run_with("Parking Lot\nBread\nMilk\n");

        assert_eq!(outcome, SessionOutcome::NoPath);
        assert!(output.contains(NO_PATH));
        // Only one item is resolved per session
        assert_eq!(output.matches(ITEM_PROMPT).count(), 1);
    }

    #[test]
    fn test_location_is_used_verbatim() {
        let (outcome, _) = run_with(" Entrance\nBread\n");
        assert_eq!(outcome, SessionOutcome::NoPath);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (outcome, _) = run_with("Bakery\r\nBread\r\n");
        assert_eq!(outcome, SessionOutcome::PathShown(vec!["Bakery".to_string()]));
    }

    #[test]
    fn test_end_of_input() {
        let (outcome, output) = run_with("");
        assert_eq!(outcome, SessionOutcome::EndOfInput);
        assert!(output.contains(GOODBYE));

        let (outcome, _) = run_with("Entrance\nYogurt\n");
        assert_eq!(outcome, SessionOutcome::EndOfInput);
    }
}
