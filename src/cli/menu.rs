//! Numbered command menu driving an [`AdjacencyGraph`].
//!
//! The menu reads whitespace-separated integers from any `BufRead`, so a
//! whole command can be typed on one line (`3 1 2`) or across several.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::debug;
use serde_json::{json, Value};

use crate::cli::commands::{self, OutputFormat};
use crate::graph::AdjacencyGraph;
use crate::types::GraphResult;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MenuChoice {
    InsertVertex = 1,
    DeleteVertex = 2,
    InsertEdge = 3,
    DeleteEdge = 4,
    AdjacentVertices = 5,
    IsEmpty = 6,
    DisplayGraph = 7,
    Dfs = 8,
    Exit = 9,
}

impl MenuChoice {
    /// Every choice, in menu order.
    pub const ALL: [MenuChoice; 9] = [
        Self::InsertVertex,
        Self::DeleteVertex,
        Self::InsertEdge,
        Self::DeleteEdge,
        Self::AdjacentVertices,
        Self::IsEmpty,
        Self::DisplayGraph,
        Self::Dfs,
        Self::Exit,
    ];

    /// Map the operator's number to a choice, returning None for anything else.
    pub fn from_number(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::InsertVertex),
            2 => Some(Self::DeleteVertex),
            3 => Some(Self::InsertEdge),
            4 => Some(Self::DeleteEdge),
            5 => Some(Self::AdjacentVertices),
            6 => Some(Self::IsEmpty),
            7 => Some(Self::DisplayGraph),
            8 => Some(Self::Dfs),
            9 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InsertVertex => "Insert Vertex",
            Self::DeleteVertex => "Delete Vertex",
            Self::InsertEdge => "Insert Edge",
            Self::DeleteEdge => "Delete Edge",
            Self::AdjacentVertices => "Display Adjacent Vertices",
            Self::IsEmpty => "Check if Graph is Empty",
            Self::DisplayGraph => "Display Graph",
            Self::Dfs => "Perform DFS",
            Self::Exit => "Exit",
        }
    }
}

/// Interactive menu over a graph, an input source, and an output sink.
pub struct Menu<R, W> {
    graph: AdjacencyGraph,
    input: R,
    output: W,
    format: OutputFormat,
    quiet: bool,
    /// Tokens left over from the current input line.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu that renders text and shows prompts.
    pub fn new(graph: AdjacencyGraph, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            output,
            format: OutputFormat::Text,
            quiet: false,
            pending: VecDeque::new(),
        }
    }

    /// Select the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Suppress the menu listing and prompts.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The graph being edited.
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Give back the graph and the output sink.
    pub fn into_parts(self) -> (AdjacencyGraph, W) {
        (self.graph, self.output)
    }

    /// Run until the operator picks Exit or input ends.
    pub fn run(&mut self) -> GraphResult<()> {
        loop {
            self.print_menu()?;
            let Some(number) = self.read_int()? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                self.message(
                    "Invalid choice! Please try again.",
                    json!({"op": "menu", "ok": false, "error": "invalid_choice", "choice": number}),
                )?;
                continue;
            };
            debug!("menu choice {number} ({})", choice.label());

            if choice == MenuChoice::Exit {
                self.message("Exiting program...", json!({"op": "exit", "ok": true}))?;
                return Ok(());
            }
            if !self.dispatch(choice)? {
                debug!("input closed mid-command, leaving menu");
                return Ok(());
            }
        }
    }

    /// Run one command. Returns false if input ran out before its arguments.
    fn dispatch(&mut self, choice: MenuChoice) -> GraphResult<bool> {
        let format = self.format;
        match choice {
            MenuChoice::InsertVertex => {
                let Some(value) = self.ask("Enter vertex value: ")? else {
                    return Ok(false);
                };
                commands::cmd_insert_vertex(&mut self.graph, &mut self.output, value, format)?;
            }
            MenuChoice::DeleteVertex => {
                let Some(value) = self.ask("Enter vertex value to delete: ")? else {
                    return Ok(false);
                };
                commands::cmd_delete_vertex(&mut self.graph, &mut self.output, value, format)?;
            }
            MenuChoice::InsertEdge => {
                let Some((source, destination)) = self.ask_pair(
                    "Enter source vertex of edge: ",
                    "Enter destination vertex of edge: ",
                )?
                else {
                    return Ok(false);
                };
                commands::cmd_insert_edge(
                    &mut self.graph,
                    &mut self.output,
                    source,
                    destination,
                    format,
                )?;
            }
            MenuChoice::DeleteEdge => {
                let Some((source, destination)) = self.ask_pair(
                    "Enter source vertex of edge you want to delete: ",
                    "Enter destination vertex of edge you want to delete: ",
                )?
                else {
                    return Ok(false);
                };
                commands::cmd_delete_edge(
                    &mut self.graph,
                    &mut self.output,
                    source,
                    destination,
                    format,
                )?;
            }
            MenuChoice::AdjacentVertices => {
                let Some(value) = self.ask("Enter vertex to find adjacent vertices: ")? else {
                    return Ok(false);
                };
                commands::cmd_adjacent(&self.graph, &mut self.output, value, format)?;
            }
            MenuChoice::IsEmpty => commands::cmd_is_empty(&self.graph, &mut self.output, format)?,
            MenuChoice::DisplayGraph => {
                commands::cmd_display(&self.graph, &mut self.output, format)?
            }
            MenuChoice::Dfs => {
                let Some(start) = self.ask("Enter starting vertex for DFS: ")? else {
                    return Ok(false);
                };
                commands::cmd_dfs(&self.graph, &mut self.output, start, format)?;
            }
            MenuChoice::Exit => {}
        }
        self.output.flush()?;
        Ok(true)
    }

    fn print_menu(&mut self) -> GraphResult<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice as u8, choice.label())?;
        }
        self.prompt("Enter your choice: ")
    }

    fn prompt(&mut self, text: &str) -> GraphResult<()> {
        if !self.quiet {
            write!(self.output, "{text}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Menu-level notices: `text` in text mode, `payload` as one JSON line otherwise.
    fn message(&mut self, text: &str, payload: Value) -> GraphResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.output, "{text}")?,
            OutputFormat::Json => writeln!(self.output, "{payload}")?,
        }
        self.output.flush()?;
        Ok(())
    }

    fn ask(&mut self, text: &str) -> GraphResult<Option<i64>> {
        self.prompt(text)?;
        self.read_int()
    }

    fn ask_pair(&mut self, first: &str, second: &str) -> GraphResult<Option<(i64, i64)>> {
        let Some(a) = self.ask(first)? else {
            return Ok(None);
        };
        let Some(b) = self.ask(second)? else {
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    /// Next integer from input, re-prompting on anything else.
    ///
    /// A bad token discards the rest of its line. Returns `None` once input
    /// is exhausted.
    pub fn read_int(&mut self) -> GraphResult<Option<i64>> {
        loop {
            while let Some(token) = self.pending.pop_front() {
                match token.parse::<i64>() {
                    Ok(value) => return Ok(Some(value)),
                    Err(_) => {
                        debug!("rejected non-integer input {token:?}");
                        self.pending.clear();
                        self.prompt("Invalid input. Please enter an integer: ")?;
                    }
                }
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
