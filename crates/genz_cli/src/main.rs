//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `genz_core` linkage without the Flutter runtime.
//! - Print the resolved view of each path argument (default `/`) against a
//!   freshly seeded session.

use genz_core::{AppSession, CoreConfig, View, NO_POSTS_TEXT};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("genz_core ping={}", genz_core::ping());
    println!("genz_core version={}", genz_core::core_version());

    if let Err(err) = CoreConfig::from_env().init_logging() {
        eprintln!("logging disabled: {err}");
    }

    let session = AppSession::seeded();
    let mut paths = std::env::args().skip(1).collect::<Vec<_>>();
    if paths.is_empty() {
        paths.push("/".to_string());
    }

    let mut status = ExitCode::SUCCESS;
    for path in paths {
        println!("== {path}");
        match session.view(&path) {
            Ok(view) => render(&view).iter().for_each(|line| println!("{line}")),
            Err(err) => {
                eprintln!("{err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

fn render(view: &View) -> Vec<String> {
    if let Some(text) = view.fallback_text() {
        return vec![text.to_string()];
    }

    match view {
        View::Posts { posts, .. } => posts
            .iter()
            .map(|card| {
                format!(
                    "[{}] {} by {} | {}",
                    card.post.id,
                    card.post.title,
                    card.author_name,
                    card.reaction_labels().join(" | ")
                )
            })
            .collect(),
        View::Users { users } => users
            .iter()
            .map(|user| format!("{} {}", user.id, user.name))
            .collect(),
        View::UserDetail { user, posts } => {
            let mut lines = vec![user.name.clone()];
            if posts.is_empty() {
                lines.push(NO_POSTS_TEXT.to_string());
            }
            lines.extend(posts.iter().map(|post| format!("- {}", post.title)));
            lines
        }
        View::Notifications { items } => items.iter().map(|item| item.text.clone()).collect(),
        View::PostDetail { card, editor } => vec![
            card.post.title.clone(),
            card.post.content.clone(),
            format!("Author: {}", card.author_name),
            card.reaction_labels().join(" | "),
            format!("editor={}", editor.label()),
        ],
        View::UserNotFound { .. } | View::PostNotFound { .. } => Vec::new(),
    }
}
