use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, info};
use ratatui::DefaultTerminal;
use tokio::time::interval;

use bmical_engine::command::{Command, Field};
use bmical_engine::Session;

use crate::keymap::{map_key, Action, KeyContext};
use crate::ui;
use crate::view::{TermView, ViewState};

const REDRAW: Duration = Duration::from_millis(16);

pub struct App {
    state: Arc<Mutex<ViewState>>,
    session: Session,
}

impl App {
    pub fn new() -> Self {
        let state = Arc::new(Mutex::new(ViewState::default()));
        let view = TermView::new(state.clone());
        let session = Session::new(
            Arc::new(view.clone()),
            Arc::new(view.clone()),
            Arc::new(view),
        );
        Self { state, session }
    }

    pub async fn run(&self, terminal: &mut DefaultTerminal) -> Result<(), Box<dyn Error>> {
        info!("Starting input loop");
        let mut events = EventStream::new();
        let mut redraw = interval(REDRAW);

        loop {
            terminal.draw(|frame| ui::render(frame, &self.state.lock().unwrap()))?;

            tokio::select! {
                _ = redraw.tick() => {}
                maybe_event = events.next() => {
                    let Some(event) = maybe_event else {
                        break;
                    };
                    if let Event::Key(key) = event? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        let ctx = KeyContext {
                            reset_visible: self.state.lock().unwrap().result_visible(),
                        };
                        match map_key(key, ctx) {
                            Some(Action::Quit) => {
                                info!("Quit requested");
                                break;
                            }
                            Some(action) => self.apply(action),
                            None => {}
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn apply(&self, action: Action) {
        match action {
            Action::Dispatch(command) => {
                debug!("Dispatching {:?}", command);
                self.session.handle(command);
            }
            Action::Insert(c) => self.edit(|state, field| state.input_mut(field).push(c)),
            Action::DeleteBack => self.edit(|state, field| {
                state.input_mut(field).pop();
            }),
            Action::SwitchField => {
                let mut state = self.state.lock().unwrap();
                state.focused = match state.focused {
                    Field::Height => Field::Weight,
                    Field::Weight => Field::Height,
                };
            }
            Action::Quit => {}
        }
    }

    /// Mutates the focused input, then revalidates that field. The state
    /// lock must be released before dispatching.
    fn edit(&self, mutate: impl FnOnce(&mut ViewState, Field)) {
        let field = {
            let mut state = self.state.lock().unwrap();
            let field = state.focused;
            mutate(&mut state, field);
            field
        };
        self.session.handle(Command::FieldChanged(field));
    }
}
