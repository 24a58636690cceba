//! Binds prompt commands to controller actions and runs their requests.

use catalog_core::{Outbound, ViewController};
use tracing::error;

use crate::command::{Command, CommandError};
use crate::transport::Transport;

/// Which form `name`, `desc`, `save` and `cancel` act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Add,
    Edit,
}

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Help,
    Quit,
}

pub struct Session<T> {
    controller: ViewController,
    transport: T,
    active: Option<Form>,
}

impl<T: Transport> Session<T> {
    pub fn new(controller: ViewController, transport: T) -> Self {
        Self {
            controller,
            transport,
            active: None,
        }
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn active_form(&self) -> Option<Form> {
        self.active
    }

    /// Initial load of the item list.
    pub fn start(&mut self) {
        let out = self.controller.load();
        self.drive(out);
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow, CommandError> {
        match command {
            Command::Search(text) => {
                self.controller.set_search_text(&text);
                self.controller.run_search();
            }
            Command::Add => {
                self.controller.open_add_modal();
                self.active = Some(Form::Add);
            }
            Command::Edit(id) => {
                let item = self
                    .controller
                    .find_item(&id)
                    .cloned()
                    .ok_or(CommandError::UnknownItem(id))?;
                self.controller.open_edit_modal(&item);
                self.active = Some(Form::Edit);
            }
            Command::Name(name) => match self.form()? {
                Form::Add => self.controller.set_add_name(&name),
                Form::Edit => self.controller.set_edit_name(&name),
            },
            Command::Describe(description) => match self.form()? {
                Form::Add => self.controller.set_add_description(&description),
                Form::Edit => self.controller.set_edit_description(&description),
            },
            Command::Save => {
                let submitted = match self.form()? {
                    Form::Add => self.controller.submit_add(),
                    Form::Edit => self.controller.submit_edit(),
                };
                match submitted {
                    Ok(out) => self.drive(out),
                    Err(e) => error!(error = %e, "could not build request"),
                }
            }
            Command::Cancel => {
                match self.form()? {
                    Form::Add => self.controller.close_add_modal(),
                    Form::Edit => self.controller.close_edit_modal(),
                }
                let state = self.controller.state();
                self.active = if state.edit_modal_open {
                    Some(Form::Edit)
                } else if state.add_modal_open {
                    Some(Form::Add)
                } else {
                    None
                };
            }
            Command::Delete(id) => {
                let out = self.controller.delete_item(&id);
                self.drive(out);
            }
            Command::Show(id) => {
                let out = self.controller.lookup_item(&id);
                self.drive(out);
            }
            Command::Refresh => {
                let out = self.controller.refresh();
                self.drive(out);
            }
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Render)
    }

    fn form(&self) -> Result<Form, CommandError> {
        self.active.ok_or(CommandError::NoOpenForm)
    }

    /// Execute `out` and any follow-up refresh it produces.
    fn drive(&mut self, out: Outbound) {
        let mut next = Some(out);
        while let Some(Outbound { ticket, request }) = next {
            let response = self.transport.execute(request);
            next = self.controller.complete(ticket, response);
        }
    }
}
