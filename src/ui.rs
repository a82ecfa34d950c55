// UI layer: a numbered text menu on top of `ApiClient`. The choice typed
// by the user is parsed into a `MenuAction`, the action collects its
// fields through a `Prompter`, calls the client and returns the text to
// print. Only `main_menu` touches the terminal directly.

use crate::client::ApiClient;
use crate::data::{Comment, Post, User};
use crate::error::OperationResult;
use crate::http::Transport;
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const RULE: &str = "=====================================";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ListUsers,
    ViewUser,
    ViewPost,
    ViewComment,
    CreatePost,
    UpdatePost,
    DeletePost,
    CreateUser,
    CreateComment,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 10] = [
        MenuAction::ListUsers,
        MenuAction::ViewUser,
        MenuAction::ViewPost,
        MenuAction::ViewComment,
        MenuAction::CreatePost,
        MenuAction::UpdatePost,
        MenuAction::DeletePost,
        MenuAction::CreateUser,
        MenuAction::CreateComment,
        MenuAction::Exit,
    ];

    /// The string the user types to pick this action.
    pub fn key(&self) -> &'static str {
        match self {
            MenuAction::ListUsers => "1",
            MenuAction::ViewUser => "2",
            MenuAction::ViewPost => "3",
            MenuAction::ViewComment => "4",
            MenuAction::CreatePost => "5",
            MenuAction::UpdatePost => "6",
            MenuAction::DeletePost => "7",
            MenuAction::CreateUser => "8",
            MenuAction::CreateComment => "9",
            MenuAction::Exit => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ListUsers => "View all users",
            MenuAction::ViewUser => "View user details",
            MenuAction::ViewPost => "View post details",
            MenuAction::ViewComment => "View comments details",
            MenuAction::CreatePost => "Create a new post",
            MenuAction::UpdatePost => "Update an existing post",
            MenuAction::DeletePost => "Delete a post",
            MenuAction::CreateUser => "Create a new user",
            MenuAction::CreateComment => "Add a comment to a post",
            MenuAction::Exit => "Exit",
        }
    }

    /// Parse what the user typed. Surrounding whitespace is ignored.
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        MenuAction::ALL.into_iter().find(|a| a.key() == choice)
    }
}

/// Source of user input for the menu actions.
pub trait Prompter {
    fn text(&mut self, prompt: &str) -> Result<String>;
    /// Integer input; implementations re-ask or fail on non-numbers.
    fn number(&mut self, prompt: &str) -> Result<u64>;
}

/// Reads answers from the terminal with `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(value)
    }

    fn number(&mut self, prompt: &str) -> Result<u64> {
        // dialoguer keeps asking until the text parses as a u64
        let value: u64 = Input::new().with_prompt(prompt).interact_text()?;
        Ok(value)
    }
}

/// Main interactive loop. Runs until the user picks "0".
pub fn main_menu<T: Transport>(api: &ApiClient<T>) -> Result<()> {
    let mut prompter = TerminalPrompter;
    loop {
        println!("\n{}", menu_text());
        let choice: String = Input::new()
            .with_prompt("Enter your choice")
            .allow_empty(true)
            .interact_text()?;
        match MenuAction::from_choice(&choice) {
            Some(MenuAction::Exit) => {
                println!("Exiting...");
                break;
            }
            Some(action) => {
                let output = dispatch(api, action, &mut prompter)?;
                println!("{}", output);
            }
            None => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

/// The menu block printed before each prompt.
pub fn menu_text() -> String {
    let mut lines = vec![RULE.to_string(), "Choose the action from the following:".into()];
    for action in MenuAction::ALL {
        lines.push(format!("{}. {}", action.key(), action.label()));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// Run one action: collect its fields, call the client, and return the
/// text to show. `Exit` produces the goodbye line without calling out.
pub fn dispatch<T: Transport, P: Prompter>(
    api: &ApiClient<T>,
    action: MenuAction,
    prompter: &mut P,
) -> Result<String> {
    let output = match action {
        MenuAction::ListUsers => {
            let res = with_spinner("Fetching users...", || api.get_all_users());
            render("All users:", &res)
        }
        MenuAction::ViewUser => {
            let id = prompter.text("Enter user id")?;
            let res = with_spinner("Fetching user...", || api.get_user(&id));
            render("User details:", &res)
        }
        MenuAction::ViewPost => {
            let id = prompter.text("Enter post id")?;
            let res = with_spinner("Fetching post...", || api.get_post(&id));
            render("Post details:", &res)
        }
        MenuAction::ViewComment => {
            let id = prompter.text("Enter comment id")?;
            let res = with_spinner("Fetching comment...", || api.get_comment(&id));
            render(&format!("Comments from the post {}:", id), &res)
        }
        MenuAction::CreatePost => {
            let user_id = prompter.number("Enter user id")?;
            let title = prompter.text("Enter post title")?;
            let body = prompter.text("Enter post body")?;
            let post = Post {
                title,
                body,
                id: None,
                user_id: Some(user_id),
            };
            let res = with_spinner("Creating post...", || api.create_post(&post));
            render("Post created:", &res)
        }
        MenuAction::UpdatePost => {
            let id = prompter.text("Enter post id")?;
            let title = prompter.text("Enter post title")?;
            let body = prompter.text("Enter post body")?;
            let post = Post {
                title,
                body,
                id: None,
                user_id: None,
            };
            let res = with_spinner("Updating post...", || api.update_post(&id, &post));
            render("Post updated:", &res)
        }
        MenuAction::DeletePost => {
            let id = prompter.text("Enter post id to be deleted")?;
            match with_spinner("Deleting post...", || api.delete_post(&id)) {
                Ok(message) => message,
                Err(e) => pretty(&e.to_json()),
            }
        }
        MenuAction::CreateUser => {
            let name = prompter.text("Enter the name")?;
            let username = prompter.text("Enter the username")?;
            let email = prompter.text("Enter the email")?;
            let user = User {
                name,
                username,
                email,
                address: None,
                phone: None,
                website: None,
                company: None,
                id: None,
            };
            let res = with_spinner("Creating user...", || api.create_user(&user));
            render("User created:", &res)
        }
        MenuAction::CreateComment => {
            let post_id = prompter.number("Enter post id")?;
            let name = prompter.text("Enter the name")?;
            let email = prompter.text("Enter the email")?;
            let body = prompter.text("Enter the comment body")?;
            let comment = Comment {
                name,
                email,
                body,
                id: None,
                post_id: Some(post_id),
            };
            let res = with_spinner("Creating comment...", || api.create_comment(&comment));
            render("Comment created:", &res)
        }
        MenuAction::Exit => "Exiting...".to_string(),
    };
    Ok(output)
}

/// Success prints the heading and the payload; an error prints only the
/// `{error, status_code, reason}` record.
pub fn render(heading: &str, result: &OperationResult) -> String {
    match result {
        Ok(value) => format!("{}\n{}", heading, pretty(value)),
        Err(e) => pretty(&e.to_json()),
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn with_spinner<R>(message: &'static str, f: impl FnOnce() -> R) -> R {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let out = f();
    spinner.finish_and_clear();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use serde_json::json;

    #[test]
    fn choices_map_to_actions() {
        assert_eq!(MenuAction::from_choice("1"), Some(MenuAction::ListUsers));
        assert_eq!(MenuAction::from_choice(" 9\n"), Some(MenuAction::CreateComment));
        assert_eq!(MenuAction::from_choice("0"), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_choice("10"), None);
        assert_eq!(MenuAction::from_choice("exit"), None);
        assert_eq!(MenuAction::from_choice(""), None);
    }

    #[test]
    fn menu_lists_nine_actions_and_exit() {
        let text = menu_text();
        assert!(text.contains("1. View all users"));
        assert!(text.contains("9. Add a comment to a post"));
        assert!(text.ends_with(&format!("0. Exit\n{}", RULE)));
    }

    #[test]
    fn render_success_has_heading() {
        let out = render("Post created:", &Ok(json!({"id": 101})));
        assert!(out.starts_with("Post created:\n"));
        assert!(out.contains("\"id\": 101"));
    }

    #[test]
    fn render_error_has_no_heading() {
        let res: OperationResult = Err(ApiError::Rejected {
            message: "Failed to fetch post 111.".into(),
            status_code: 404,
            reason: None,
        });
        let out = render("Post details:", &res);
        assert!(!out.contains("Post details:"));
        let back: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            back,
            json!({"error": "Failed to fetch post 111.", "status_code": 404, "reason": null})
        );
    }
}
