use std::io::{BufRead, Write};

use anyhow::Result;
use carona_core::models::RouteKind;
use carona_core::store::{Conversation, ConversationList, DataStore};
use carona_core::CoreError;
use tracing::info;

use crate::format::{
    conversations_table, format_transcript_line, print_error_raw, print_heading_raw,
    print_success_raw, routes_table,
};
use crate::menu::{MainMenuOption, UserMenuOption, MAIN_MENU, USER_MENU};
use crate::prompt::{non_empty, parse_number, yes_no, Prompter};

/// One interactive run: the main menu, and the user menu of whoever is
/// logged in. Holds the store for the whole run.
pub(crate) struct Session<'a, R, W> {
    store: &'a mut DataStore,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(store: &'a mut DataStore, prompter: Prompter<R, W>) -> Self {
        Self { store, prompter }
    }

    #[cfg(test)]
    pub(crate) fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Main menu loop. Returns when the user picks "Exit".
    pub(crate) fn run(&mut self) -> Result<()> {
        loop {
            self.prompter.clear()?;
            match self.prompter.prompt(MAIN_MENU, MainMenuOption::parse, None)? {
                MainMenuOption::Exit => return Ok(()),
                MainMenuOption::Login => {
                    if let Some(user) = self.login()? {
                        self.user_menu(&user)?;
                        info!(username = %user, "logged out");
                    }
                }
                MainMenuOption::Signup => self.signup()?,
            }
        }
    }

    fn signup(&mut self) -> Result<()> {
        self.prompter.clear()?;
        let username = self.prompter.prompt("Username: ", non_empty, None)?;
        let mail = self.prompter.text("E-mail: ")?;
        let password = self.prompter.text("Password: ")?;

        match self.store.register_user(&username, &mail, &password) {
            Ok(()) => self.prompter.say(&print_success_raw("User registered!"))?,
            Err(CoreError::DuplicateUser(_)) => self.prompter.say(&print_error_raw(&format!(
                "A user named {username} already exists."
            )))?,
            Err(e) => self.prompter.say(&print_error_raw(&e.to_string()))?,
        }
        self.prompter.pause()
    }

    fn login(&mut self) -> Result<Option<String>> {
        self.prompter.clear()?;
        let username = self.prompter.prompt("Username: ", non_empty, None)?;
        let password = self.prompter.text("Password: ")?;

        let message = match self.store.authenticate(&username, &password) {
            Ok(()) => return Ok(Some(username)),
            Err(CoreError::InvalidPassword) => "Invalid password.".to_string(),
            Err(CoreError::UserNotFound(_)) => "User not registered.".to_string(),
            Err(e) => e.to_string(),
        };
        self.prompter.say(&print_error_raw(&message))?;
        self.prompter.pause()?;
        Ok(None)
    }

    fn user_menu(&mut self, user: &str) -> Result<()> {
        loop {
            self.prompter.clear()?;
            match self.prompter.prompt(USER_MENU, UserMenuOption::parse, None)? {
                UserMenuOption::Logout => return Ok(()),
                UserMenuOption::CreateRoute => self.create_route(user)?,
                UserMenuOption::ListRoutes => self.list_routes(user)?,
                UserMenuOption::ViewMessages => self.view_messages(user)?,
            }
        }
    }

    fn create_route(&mut self, user: &str) -> Result<()> {
        self.prompter.clear()?;
        let start = self.prompter.text("Starting point: ")?;
        let end = self.prompter.text("Destination: ")?;
        let kind = self.prompter.text("Do you offer a ride or want one? (offer/request): ")?;

        let id = self.store.create_route(user, &start, &end, RouteKind::parse(&kind)).id;
        self.prompter.say(&print_success_raw(&format!("Route {id} created!")))?;
        self.prompter.pause()
    }

    fn list_routes(&mut self, user: &str) -> Result<()> {
        self.prompter.clear()?;
        self.prompter.say(&print_heading_raw("Routes:"))?;
        self.prompter.say(&routes_table(self.store.list_routes()))?;

        let route_id: u64 = self.prompter.prompt(
            "Route ID to message its owner (0 to go back): ",
            parse_number,
            None,
        )?;
        if route_id == 0 {
            return Ok(());
        }

        let owner = match self.store.find_route(route_id) {
            Ok(route) => route.owner.clone(),
            Err(e) => {
                let message = if e.is_not_found() { "Invalid route.".to_string() } else { e.to_string() };
                self.prompter.say(&print_error_raw(&message))?;
                return self.prompter.pause();
            }
        };

        let body = self.prompter.text(&format!("Message for {owner}: "))?;
        match self.store.message_route_owner(user, route_id, &body) {
            Ok(_) => self.prompter.say(&print_success_raw("Message sent!"))?,
            Err(e) => self.prompter.say(&print_error_raw(&e.to_string()))?,
        }
        self.prompter.pause()
    }

    fn view_messages(&mut self, user: &str) -> Result<()> {
        self.prompter.clear()?;
        let list = ConversationList::for_user(self.store, user);

        self.prompter.say(&print_heading_raw("Conversations:"))?;
        self.prompter.say(&conversations_table(&list.summaries()))?;

        let choice: usize = self.prompter.prompt(
            "Conversation ID to open (0 to go back): ",
            parse_number,
            None,
        )?;
        if choice == 0 {
            return Ok(());
        }

        match list.resolve(choice) {
            Ok(conversation) => self.show_transcript(user, conversation),
            Err(e) => {
                let message = if e.is_not_found() { "Invalid conversation.".to_string() } else { e.to_string() };
                self.prompter.say(&print_error_raw(&message))?;
                self.prompter.pause()
            }
        }
    }

    fn show_transcript(&mut self, user: &str, conversation: &Conversation) -> Result<()> {
        self.prompter.clear()?;
        self.prompter.say(&print_heading_raw(&format!(
            "Conversation with {}",
            conversation.counterpart
        )))?;
        for message in &conversation.messages {
            self.prompter.say(&format_transcript_line(message, user))?;
        }

        if !self.prompter.prompt("Reply? (y/n) ", yes_no, Some(false))? {
            return Ok(());
        }

        let reply = self.prompter.text("Reply: ")?;
        match self.store.send_message(user, &conversation.counterpart, &reply) {
            Ok(_) => self.prompter.say(&print_success_raw("Message sent!"))?,
            Err(e) => self.prompter.say(&print_error_raw(&e.to_string()))?,
        }
        self.prompter.pause()
    }
}
