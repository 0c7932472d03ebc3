/*
[INPUT]:  Command records from the server
[OUTPUT]: Newest-first command list with an up/down browsing cursor
[POS]:    Session core - command history ring
[UPDATE]: When changing history navigation semantics
*/

use logtail_adapter::CommandRecord;

/// What the command input should show after a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    Entry(&'a str),
    /// Cursor left the history; the input is emptied.
    Blank,
    /// Navigation hit an end; the input keeps its content.
    Stay,
}

#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    commands: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Replace the list with `records` sorted newest first and stop browsing.
    pub fn replace(&mut self, mut records: Vec<CommandRecord>) {
        records.sort_by(|a, b| b.id.cmp(&a.id));
        self.commands = records.into_iter().map(|record| record.cmd).collect();
        self.cursor = None;
    }

    /// Step towards older commands.
    pub fn older(&mut self) -> Recall<'_> {
        let next = self.cursor.map_or(0, |idx| idx + 1);
        if next >= self.commands.len() {
            return Recall::Stay;
        }
        self.cursor = Some(next);
        Recall::Entry(&self.commands[next])
    }

    /// Step towards newer commands, ending on an empty input.
    pub fn newer(&mut self) -> Recall<'_> {
        match self.cursor {
            None => Recall::Stay,
            Some(0) => {
                self.cursor = None;
                Recall::Blank
            }
            Some(idx) => {
                self.cursor = Some(idx - 1);
                Recall::Entry(&self.commands[idx - 1])
            }
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// `None` while not browsing.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
