use anyhow::Result;
use linepad_engine::{Cmd, EditError, Editor, FileStorage, Reader, Writer, cipher};
use log::{debug, info};
use relative_path::{Component, RelativePathBuf};
use std::io::{BufRead, Write};

use crate::console::Console;
use crate::menu::{MenuChoice, menu_text};

const LINE_AND_INDEX: &str = "Enter line index and character index separated by space: ";

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct App {
    editor: Editor,
    storage: FileStorage,
    cipher_key: Option<i32>,
}

impl App {
    pub fn new(editor: Editor, storage: FileStorage, cipher_key: Option<i32>) -> Self {
        Self {
            editor,
            storage,
            cipher_key,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Run the menu loop until the user exits or input runs out
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            console.say(menu_text())?;
            let Some(answer) = console.prompt("Your choice: ")? else {
                info!("input closed, leaving menu loop");
                return Ok(());
            };

            let Ok(choice) = answer.parse::<MenuChoice>() else {
                console.say("Invalid command, please enter a valid command.")?;
                continue;
            };
            debug!("menu choice {choice:?}");

            if self.handle(choice, console)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn handle<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<Flow> {
        match choice {
            MenuChoice::Append => {
                let Some(text) = console.prompt("Enter text to append: ")? else {
                    return Ok(Flow::Exit);
                };
                self.apply(Cmd::AppendText { text }, console)?;
            }
            MenuChoice::NewLine => self.apply(Cmd::NewLine, console)?,
            MenuChoice::Save => return self.save(console, false),
            MenuChoice::Load => return self.load(console, false),
            MenuChoice::SaveEncrypted => return self.save(console, true),
            MenuChoice::LoadEncrypted => return self.load(console, true),
            MenuChoice::Print => {
                for line in self.editor.document().lines() {
                    console.say(line.content())?;
                }
            }
            MenuChoice::Insert => {
                let Some([line, at]) = prompt_pair(console, LINE_AND_INDEX)? else {
                    return Ok(Flow::Exit);
                };
                let Some(text) = console.prompt("Enter text to insert: ")? else {
                    return Ok(Flow::Exit);
                };
                self.apply(Cmd::InsertText { line, at, text }, console)?;
            }
            MenuChoice::Search => {
                let Some(needle) = console.prompt("Enter text to search: ")? else {
                    return Ok(Flow::Exit);
                };
                match self.editor.search(&needle) {
                    Ok(hits) => {
                        for hit in hits {
                            console.say(format!(
                                "Found on line {} at position {}: {}",
                                hit.line, hit.offset, hit.content
                            ))?;
                        }
                    }
                    Err(e) => report(console, &e)?,
                }
            }
            MenuChoice::ClearConsole => {
                console.clear()?;
                console.say("Console cleared")?;
            }
            MenuChoice::Delete => {
                let Some([line, at, count]) = prompt_triple(
                    console,
                    "Enter line index, character index, and number of symbols to delete separated by space: ",
                )?
                else {
                    return Ok(Flow::Exit);
                };
                self.apply(Cmd::Delete { line, at, count }, console)?;
            }
            MenuChoice::Exit => {
                console.say("Exiting program...")?;
                return Ok(Flow::Exit);
            }
            MenuChoice::Undo => {
                if let Err(e) = self.editor.undo() {
                    report(console, &e)?;
                }
            }
            MenuChoice::Redo => {
                if let Err(e) = self.editor.redo() {
                    report(console, &e)?;
                }
            }
            MenuChoice::Cut => {
                let Some([line, at, count]) = prompt_triple(
                    console,
                    "Enter line index, character index, and number of symbols to cut separated by space: ",
                )?
                else {
                    return Ok(Flow::Exit);
                };
                self.apply(Cmd::Cut { line, at, count }, console)?;
            }
            MenuChoice::Copy => {
                let Some([line, at, count]) = prompt_triple(
                    console,
                    "Enter line index, character index, and number of symbols to copy separated by space: ",
                )?
                else {
                    return Ok(Flow::Exit);
                };
                match self.editor.copy(line, at, count) {
                    Ok(fragment) => console.say(format!("Copied: {fragment}"))?,
                    Err(e) => report(console, &e)?,
                }
            }
            MenuChoice::Paste => {
                let Some([line, at]) = prompt_pair(console, LINE_AND_INDEX)? else {
                    return Ok(Flow::Exit);
                };
                self.apply(Cmd::Paste { line, at }, console)?;
            }
            MenuChoice::Replace => {
                let Some([line, from]) = prompt_pair(console, LINE_AND_INDEX)? else {
                    return Ok(Flow::Exit);
                };
                let Some(find) = console.prompt("Enter the text you want to replace: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(with) = console.prompt("Enter new text to insert: ")? else {
                    return Ok(Flow::Exit);
                };
                self.apply(
                    Cmd::ReplaceFound {
                        line,
                        from,
                        find,
                        with,
                    },
                    console,
                )?;
            }
            MenuChoice::Overwrite => {
                let Some([line, at]) = prompt_pair(console, LINE_AND_INDEX)? else {
                    return Ok(Flow::Exit);
                };
                let Some(text) = console.prompt("Enter text to write over the line: ")? else {
                    return Ok(Flow::Exit);
                };
                self.apply(Cmd::ReplaceAt { line, at, text }, console)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn apply<R: BufRead, W: Write>(&mut self, cmd: Cmd, console: &mut Console<R, W>) -> Result<()> {
        match self.editor.apply(cmd) {
            Ok(patch) => debug!("applied edit, document version {}", patch.version),
            Err(e) => report(console, &e)?,
        }
        Ok(())
    }

    fn save<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        encrypted: bool,
    ) -> Result<Flow> {
        let Some(path) = prompt_path(console, "Enter the file name for saving: ")? else {
            return Ok(Flow::Exit);
        };

        let result = if encrypted {
            let key = match self.cipher_key {
                Some(key) => key,
                None => {
                    let key = cipher::generate_key();
                    console.say(format!("Generated key {key}, keep it to load the file"))?;
                    key
                }
            };
            let blob = cipher::encrypt(&self.editor.flatten(), key);
            self.storage.write(&path, &blob).map_err(EditError::from)
        } else {
            self.editor.save_to(&self.storage, &path)
        };

        match result {
            Ok(()) => console.say("Text has been saved successfully")?,
            Err(e) => report(console, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn load<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        encrypted: bool,
    ) -> Result<Flow> {
        let Some(path) = prompt_path(console, "Enter the file name for loading: ")? else {
            return Ok(Flow::Exit);
        };

        let result = if encrypted {
            let key = match self.cipher_key {
                Some(key) => key,
                None => match console.prompt_number("Enter the decryption key: ")? {
                    Some(key) => key,
                    None => return Ok(Flow::Exit),
                },
            };
            self.storage.read(&path).map_err(EditError::from).map(|blob| {
                let blob = cipher::decrypt(&blob, key);
                self.editor.rebuild_from_blob(&blob);
            })
        } else {
            self.editor.load_from(&self.storage, &path)
        };

        match result {
            Ok(()) => console.say("Text has been loaded successfully")?,
            Err(e) => report(console, &e)?,
        }
        Ok(Flow::Continue)
    }
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, error: &EditError) -> Result<()> {
    debug!("edit failed: {error:?}");
    console.say(format!("Error: {error}"))?;
    Ok(())
}

fn prompt_pair<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<[usize; 2]>> {
    Ok(console
        .prompt_indexes(prompt, 2)?
        .map(|indexes| [indexes[0], indexes[1]]))
}

fn prompt_triple<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<[usize; 3]>> {
    Ok(console
        .prompt_indexes(prompt, 3)?
        .map(|indexes| [indexes[0], indexes[1], indexes[2]]))
}

fn prompt_path<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<RelativePathBuf>> {
    loop {
        let Some(answer) = console.prompt(prompt)? else {
            return Ok(None);
        };
        let name = answer.trim();
        if name.is_empty() {
            console.say("Please enter a file name.")?;
            continue;
        }
        let path = RelativePathBuf::from(name);
        // names resolve against the documents folder and must stay inside it
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            console.say("File names may not contain '..'.")?;
            continue;
        }
        return Ok(Some(path));
    }
}
