//! Terminal presentation of the chat panel.

use std::io::{self, Write};

use folio_ai::{ChatMessage, ChatPanel, Role};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands: /reset clears the conversation, /help shows this, /quit exits.";

/// What one line of visitor input asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Empty,
    Quit,
    Reset,
    Help,
    /// Zero-based index into the visible starter questions.
    Suggestion(usize),
    Text(String),
}

/// Interpret a line; bare numbers pick a starter question while any are shown.
pub fn parse_input(line: &str, suggestions: usize) -> Input {
    let line = line.trim();
    match line {
        "" => Input::Empty,
        "/quit" | "/exit" => Input::Quit,
        "/reset" => Input::Reset,
        "/help" => Input::Help,
        _ => match line.parse::<usize>() {
            Ok(n) if (1..=suggestions).contains(&n) => Input::Suggestion(n - 1),
            _ => Input::Text(line.to_string()),
        },
    }
}

pub fn render_message(message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    let mut lines = message.text.lines();
    let first = lines.next().unwrap_or_default();
    let mut out = format!("{speaker}> {first}");
    let indent = " ".repeat(speaker.len() + 2);
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            out.push_str(&indent);
            out.push_str(line);
        }
    }
    out
}

pub fn render_suggestions(suggestions: &[&str]) -> String {
    let mut out = String::from("Try asking:");
    for (i, question) in suggestions.iter().enumerate() {
        out.push_str(&format!("\n  {}. {question}", i + 1));
    }
    out
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

/// Run the interactive chat until EOF or `/quit`.
pub async fn run_chat(panel: &mut ChatPanel) -> io::Result<()> {
    panel.open();

    for message in panel.messages() {
        println!("{}\n", render_message(message));
    }
    println!("{}\n{HELP}\n", render_suggestions(panel.suggestions()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        let reply = match parse_input(&line, panel.suggestions().len()) {
            Input::Empty => None,
            Input::Quit => break,
            Input::Help => {
                println!("{HELP}");
                None
            }
            Input::Reset => {
                panel.reset_conversation();
                println!("Conversation reset.");
                None
            }
            Input::Suggestion(index) => {
                if let Some(question) = panel.suggestions().get(index) {
                    println!("{}", render_message_text(Role::User, question));
                }
                panel.send_suggestion(index).await.cloned()
            }
            Input::Text(text) => panel.send(&text).await.cloned(),
        };

        if let Some(message) = reply {
            println!("{}\n", render_message(&message));
        }
        prompt()?;
    }

    panel.close();
    println!();
    Ok(())
}

fn render_message_text(role: Role, text: &str) -> String {
    render_message(&ChatMessage {
        id: String::new(),
        role,
        text: text.to_string(),
    })
}
