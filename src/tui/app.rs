use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::auth::Identity;
use crate::config::Config;
use crate::remote::TableClient;

use super::action::Action;
use super::error::AppError;
use super::screens::{
    EntryState, HelpState, LoginState, SubmitStatus, draw_entry, draw_help, draw_login,
};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Credential gate; everything else is behind it.
    Login,
    /// The project record form.
    Entry,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
///
/// Owns the session state machine: `Login --authenticate(ok)--> Entry
/// --logout--> Login`. A failed authenticate stays on `Login` with an
/// inline error. Logging out never touches the entry form; its state
/// survives until an explicit reset.
pub struct App {
    screen: Screen,
    identity: Identity,
    client: TableClient,
    runtime: tokio::runtime::Runtime,
    login: LoginState,
    entry: EntryState,
    help: HelpState,
    authenticated: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Login`] screen.
    pub fn new(config: Config) -> Result<Self, AppError> {
        // Submissions run to completion on this runtime; the UI blocks for
        // the duration of the call.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let client = TableClient::new(&config.base_url, config.api_token);

        Ok(Self {
            screen: Screen::Login,
            identity: config.identity,
            client,
            runtime,
            login: LoginState::new(),
            entry: EntryState::new(),
            help: HelpState::new(),
            authenticated: false,
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the status bar and the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [status_area, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        let ctx = StatusBarContext {
            username: if self.authenticated {
                self.identity.username().to_string()
            } else {
                String::new()
            },
            endpoint: self.client.endpoint().to_string(),
        };
        draw_status_bar(&ctx, frame, status_area);

        match self.screen {
            Screen::Login => draw_login(&self.login, frame, body),
            Screen::Entry => draw_entry(&self.entry, frame, body),
            Screen::Help => draw_help(&self.help, frame, body),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            self.help.set_origin(self.screen);
            self.help.reset();
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::Login => self.login.handle_key(key),
            Screen::Entry => self.entry.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an [`Action`] returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                // The form never renders for an unauthenticated session.
                if screen == Screen::Entry && !self.authenticated {
                    self.screen = Screen::Login;
                } else {
                    self.screen = screen;
                }
            }
            Action::Authenticate { username, password } => {
                if self.identity.authenticate(&username, &password) {
                    self.authenticated = true;
                    self.login.reset();
                    self.screen = Screen::Entry;
                } else {
                    self.login
                        .set_error("invalid username or password".to_string());
                }
            }
            Action::Logout => {
                self.authenticated = false;
                self.screen = Screen::Login;
            }
            Action::Submit(record) => {
                let outcome = self.runtime.block_on(self.client.submit(&record));
                match outcome {
                    Ok(()) => self.entry.set_status(SubmitStatus::Success),
                    Err(e) => self.entry.set_status(SubmitStatus::Failed(e.to_string())),
                }
            }
            Action::ResetForm => self.entry.reset(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` once the credential gate has passed.
    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the entry screen state.
    pub fn entry(&self) -> &EntryState {
        &self.entry
    }

    /// Returns a reference to the login screen state.
    pub fn login(&self) -> &LoginState {
        &self.login
    }
}
