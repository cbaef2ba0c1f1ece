use anyhow::Result;
use std::io::{self, Write};

use crate::core::message::{ChatMessage, MessageDraft};
use crate::core::store::ConversationStore;

use super::responder::{CannedResponder, Responder};

pub fn run(mut store: ConversationStore) -> Result<()> {
    println!("\x1b[1mparlor\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Type \x1b[33m/help\x1b[0m for commands, \x1b[33mCtrl-D\x1b[0m to exit.\n");

    store.create_session();
    let mut responder = CannedResponder;

    loop {
        eprint!("\x1b[32;1mparlor>\x1b[0m ");
        io::stderr().flush().ok();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        }

        let input = input.trim().to_string();
        if input.is_empty() {
            continue;
        }

        // Handle slash commands
        if input.starts_with('/') {
            match handle_command(&input, &mut store) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) => {
                    eprintln!("\x1b[31mCommand error: {e}\x1b[0m");
                    continue;
                }
            }
        }

        let Some(session_id) = store.current_session().map(|s| s.id) else {
            eprintln!("No active session. Use /new to start one.");
            continue;
        };

        store.append_message(session_id, MessageDraft::user_text(input.clone()));

        store.set_is_waiting_for_response(true);
        let reply = responder.respond(&input);
        store.set_is_waiting_for_response(false);

        if let Some(message) = store.append_message(session_id, reply) {
            let message_id = message.id();
            render_message(message);
            // entrance hint is consumed once rendered
            store.clear_new_message_flag(session_id, message_id);
        }
    }

    Ok(())
}

fn handle_command(input: &str, store: &mut ConversationStore) -> Result<bool> {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or("");

    match command {
        "/help" | "/h" => {
            println!("\x1b[1mCommands:\x1b[0m");
            println!("  /help             Show this help");
            println!("  /new              Start a new conversation");
            println!("  /sessions         List conversations grouped by date");
            println!("  /select <id>      Switch to a conversation");
            println!("  /feedback <id> up|down   Rate a message");
            println!("  /sidebar          Toggle the sidebar flag");
            println!("  /exit             Exit");
            Ok(true)
        }
        "/exit" | "/quit" | "/q" => {
            println!("Goodbye!");
            Ok(false)
        }
        "/new" | "/n" => {
            let session = store.create_session();
            println!("Started conversation \x1b[90m{}\x1b[0m", session.id);
            Ok(true)
        }
        "/sessions" | "/s" => {
            let active = store.active_session_id();
            let groups = store.grouped_sessions();
            if groups.is_empty() {
                println!("No conversations.");
            }
            for group in groups {
                println!("\x1b[1m{}\x1b[0m", group.date);
                for s in group.sessions {
                    let marker = if Some(s.id) == active { " *" } else { "" };
                    println!(
                        "  \x1b[90m{}\x1b[0m  {}{}  ({} msgs, last {})",
                        s.id,
                        s.title,
                        marker,
                        s.message_count(),
                        s.last_message_time
                    );
                }
            }
            Ok(true)
        }
        "/select" => {
            let id: i64 = parts
                .next()
                .ok_or_else(|| anyhow::anyhow!("usage: /select <id>"))?
                .parse()?;
            store.select_session(id);
            match store.current_session() {
                Some(s) => println!("Switched to \x1b[90m{}\x1b[0m  {}", s.id, s.title),
                None => println!("No conversation with id {id}."),
            }
            Ok(true)
        }
        "/feedback" | "/f" => {
            let id: i64 = parts
                .next()
                .ok_or_else(|| anyhow::anyhow!("usage: /feedback <id> up|down"))?
                .parse()?;
            let is_helpful = match parts.next() {
                Some("up") => true,
                Some("down") => false,
                _ => anyhow::bail!("usage: /feedback <id> up|down"),
            };
            store.set_feedback(id, is_helpful);
            println!(
                "Recorded \x1b[33m{}\x1b[0m for message {id}",
                if is_helpful { "helpful" } else { "not helpful" }
            );
            Ok(true)
        }
        "/sidebar" => {
            store.toggle_sidebar();
            println!(
                "Sidebar {}",
                if store.show_sidebar() { "shown" } else { "hidden" }
            );
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {command}. Type /help for available commands.");
            Ok(true)
        }
    }
}

fn render_message(message: &ChatMessage) {
    match message {
        ChatMessage::Text { id, time, content, .. } => {
            println!("\x1b[36massistant\x1b[0m \x1b[90m{time} #{id}\x1b[0m  {content}");
        }
        ChatMessage::Button {
            id,
            time,
            content,
            buttons,
            ..
        } => {
            println!("\x1b[36massistant\x1b[0m \x1b[90m{time} #{id}\x1b[0m  {content}");
            for (i, button) in buttons.iter().enumerate() {
                println!("    \x1b[1;33m[{}]\x1b[0m {}", i + 1, button.text);
            }
        }
    }
}
