use std::io::{self, BufRead, Write};

use anyhow::Result;
use friendnet_core::SocialGraph;
use tracing::debug;
use whiteread::parse_string;

use crate::{connection, friends};

const MENU: &str = "\nMAIN MENU\n[1] Get friend list\n[2] Get connection\n[3] Exit\n";

/// Interactive session: dispatch menu choices until exit or end of input.
///
/// A failed query prints its error and the loop continues; only an
/// explicit exit (or EOF) ends the session.
pub fn run(graph: &SocialGraph, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let line = match prompt(&mut input, &format!("{MENU}Enter your choice: "))? {
            Some(line) => line,
            None => break,
        };

        match line.trim() {
            "1" => {
                let Some(person) = prompt_id(&mut input, "Enter ID of person: ")? else {
                    break;
                };
                debug!(person, "friend list query");
                friends::report(graph, person, json);
            }
            "2" => {
                let Some(src) = prompt_id(&mut input, "Enter ID of first person: ")? else {
                    break;
                };
                let Some(dest) = prompt_id(&mut input, "Enter ID of second person: ")? else {
                    break;
                };
                debug!(src, dest, "connection query");
                connection::report(graph, src, dest, json);
            }
            "3" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

/// Ask until the line parses as an id; `None` means the input ended.
fn prompt_id(input: &mut impl BufRead, label: &str) -> Result<Option<i64>> {
    loop {
        let Some(line) = prompt(input, label)? else {
            return Ok(None);
        };
        match parse_string::<i64>(&line) {
            Ok(id) => return Ok(Some(id)),
            Err(err) => println!("Invalid number: {err}"),
        }
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
