//! # Interactive Menu
//!
//! The numbered loop:
//!
//! ```text
//! 1. Add a book
//! 2. Delete a book
//! 3. Search books
//! 4. List books
//! 5. Change book status
//! 6. Exit
//! ```
//!
//! Each action prompts for its inputs, calls exactly one API operation, and
//! prints the outcome. Failures are printed and the loop goes on. End of input
//! at any prompt ends the session like `6` does.
//!
//! Search and status prompts take either the number shown next to each option
//! or the name itself (`author`, `checked-out`, ...).

use super::render;
use shelfapp::api::ShelfApi;
use shelfapp::commands::CmdResult;
use shelfapp::error::Result as ShelfResult;
use shelfapp::store::CatalogStore;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

const WELCOME: &str = "Welcome to the library!\n\nWhat you can do:";
const CHOOSE: &str = "Choose an action:";
const ACTIONS: &str = "    1. Add a book
    2. Delete a book
    3. Search books
    4. List books
    5. Change book status
    6. Exit";
const GOODBYE: &str = "Goodbye.";

/// Runs the loop until the user picks exit or input ends.
pub fn run<S, R, W>(
    api: &ShelfApi<S>,
    data_file: &Path,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        api,
        data_file,
        input,
        out,
    };
    session.run()
}

struct Session<'a, S: CatalogStore, R, W> {
    api: &'a ShelfApi<S>,
    data_file: &'a Path,
    input: &'a mut R,
    out: &'a mut W,
}

enum Flow {
    Continue,
    Exit,
}

impl<S: CatalogStore, R: BufRead, W: Write> Session<'_, S, R, W> {
    fn run(&mut self) -> io::Result<()> {
        let mut first_start = true;
        loop {
            let banner = if first_start { WELCOME } else { CHOOSE };
            writeln!(self.out, "\n{}\n{}\n", banner, ACTIONS)?;
            first_start = false;

            let Some(choice) = self.prompt("Enter the number of an action: ")? else {
                break;
            };
            debug!(choice = %choice, "menu choice");

            let flow = match choice.as_str() {
                "1" => self.add()?,
                "2" => self.delete()?,
                "3" => self.search()?,
                "4" => self.list()?,
                "5" => self.change_status()?,
                "6" => Flow::Exit,
                other => {
                    writeln!(self.out, "Invalid choice: \"{}\". Try again.", other)?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        writeln!(self.out, "\n{}", GOODBYE)?;
        self.out.flush()
    }

    /// Prints `label`, reads one line and trims it. `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for each label in turn; `None` if input ends part way.
    fn prompt_all<const N: usize>(
        &mut self,
        labels: [&str; N],
    ) -> io::Result<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (answer, label) in answers.iter_mut().zip(labels) {
            match self.prompt(label)? {
                Some(value) => *answer = value,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some([title, author, year]) =
            self.prompt_all(["Title: ", "Author: ", "Year of publication: "])?
        else {
            return Ok(Flow::Exit);
        };
        let result = self.api.add_book(&title, &author, &year);
        self.show(result)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some([id]) = self.prompt_all(["Book ID: "])? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.delete_book(&id);
        self.show(result)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some([field, query]) = self.prompt_all([
            "Search by: 1 - title, 2 - author, 3 - year: ",
            "Search for: ",
        ])?
        else {
            return Ok(Flow::Exit);
        };
        let result = self.api.search_books(&query, field_from_choice(&field));
        self.show(result)
    }

    fn list(&mut self) -> io::Result<Flow> {
        let result = self.api.list_books();
        self.show(result)
    }

    fn change_status(&mut self) -> io::Result<Flow> {
        let Some([id, status]) = self.prompt_all([
            "Book ID: ",
            "New status: 1 - available, 2 - checked-out: ",
        ])?
        else {
            return Ok(Flow::Exit);
        };
        let result = self.api.change_status(&id, status_from_choice(&status));
        self.show(result)
    }

    fn show(&mut self, result: ShelfResult<CmdResult>) -> io::Result<Flow> {
        match result {
            Ok(result) => {
                write!(self.out, "{}", render::render_messages(&result.messages))?;
                if !result.listed_books.is_empty() {
                    write!(self.out, "{}", render::render_books(&result.listed_books))?;
                }
            }
            Err(e) => {
                write!(self.out, "{}", render::render_error(&e, self.data_file))?;
            }
        }
        Ok(Flow::Continue)
    }
}

fn field_from_choice(choice: &str) -> &str {
    match choice {
        "1" => "title",
        "2" => "author",
        "3" => "year",
        other => other,
    }
}

fn status_from_choice(choice: &str) -> &str {
    match choice {
        "1" => "available",
        "2" => "checked-out",
        other => other,
    }
}
