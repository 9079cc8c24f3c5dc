//! Interactive session — generate diagrams line by line and keep a history.
//!
//! DESIGN
//! ======
//! Each non-command input line is a workflow description and triggers one
//! generation that runs to completion before the next line is read. A failed
//! generation is reported and the session continues. `:`-prefixed lines
//! manage the in-memory [`WorkflowStore`].

use std::io::{self, BufRead, Write};

use crate::document::DocumentOptions;
use crate::error::report;
use crate::generate::{GenerationRequest, Generator};
use crate::store::{WorkflowId, WorkflowStore};

const HELP: &str = "\
<description>   generate a diagram from a workflow description
:save [name]    save the last diagram
:list           list saved workflows
:show <n>       print saved workflow n
:delete <n>     delete saved workflow n
:help           show this help
:quit           leave the session";

/// Last successful generation, kept until the next one.
#[derive(Debug, Clone)]
struct LastDiagram {
    description: String,
    document: String,
}

pub struct Session<'a> {
    generator: &'a Generator,
    defaults: GenerationRequest,
    options: DocumentOptions,
    store: WorkflowStore,
    last: Option<LastDiagram>,
}

impl<'a> Session<'a> {
    /// `defaults` supplies model, temperature, and system prompt for every
    /// generation; its description is replaced by each input line.
    #[must_use]
    pub fn new(generator: &'a Generator, defaults: GenerationRequest, options: DocumentOptions, store: WorkflowStore) -> Self {
        Self { generator, defaults, options, store, last: None }
    }

    #[must_use]
    pub fn store(&self) -> &WorkflowStore {
        &self.store
    }

    /// Run until `:quit` or end of input.
    ///
    /// `input` is read with blocking calls on the current task, so the runtime
    /// thread waits on the terminal between lines. Each generation is awaited
    /// before the next line is read.
    ///
    /// # Errors
    ///
    /// Only I/O errors on `input` or `out` end the session early.
    pub async fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, ":quit" | ":q") {
                break;
            }
            if let Some(command) = line.strip_prefix(':') {
                self.command(command, &mut out)?;
            } else {
                self.generate(line, &mut out).await?;
            }
        }
        Ok(())
    }

    async fn generate(&mut self, description: &str, out: &mut impl Write) -> io::Result<()> {
        let request = GenerationRequest { description: description.to_string(), ..self.defaults.clone() };
        match self.generator.generate(&request, &self.options).await {
            Ok(generation) => {
                let document = generation.document.into_string();
                writeln!(out, "{document}")?;
                self.last = Some(LastDiagram { description: description.to_string(), document });
            }
            Err(err) => writeln!(out, "{}", report(&err))?,
        }
        Ok(())
    }

    fn command(&mut self, command: &str, out: &mut impl Write) -> io::Result<()> {
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));
        match name {
            "help" => writeln!(out, "{HELP}"),
            "save" => self.save(arg, out),
            "list" => self.list(out),
            "show" => match self.resolve(arg) {
                Some(id) => {
                    let code = self.store.get(id).map_or("", |w| w.mermaid_code.as_str());
                    writeln!(out, "{code}")
                }
                None => writeln!(out, "no saved workflow '{arg}'"),
            },
            "delete" => match self.resolve(arg).and_then(|id| self.store.remove(id)) {
                Some(removed) => writeln!(out, "deleted {}", removed.name),
                None => writeln!(out, "no saved workflow '{arg}'"),
            },
            other => writeln!(out, "unknown command ':{other}' (try :help)"),
        }
    }

    fn save(&mut self, name: &str, out: &mut impl Write) -> io::Result<()> {
        let Some(last) = self.last.clone() else {
            return writeln!(out, "nothing to save yet");
        };
        let name = if name.is_empty() { self.store.next_default_name() } else { name.to_string() };
        let id = self.store.save(name.clone(), last.description, last.document);
        writeln!(out, "saved {name} ({id})")
    }

    fn list(&self, out: &mut impl Write) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(out, "no saved workflows yet");
        }
        for (i, workflow) in self.store.list().iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, workflow.display_label())?;
        }
        Ok(())
    }

    /// 1-based list position to id.
    fn resolve(&self, arg: &str) -> Option<WorkflowId> {
        let index = arg.parse::<usize>().ok()?.checked_sub(1)?;
        self.store.list().get(index).map(|w| w.id)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
