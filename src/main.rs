// SPDX-License-Identifier: MPL-2.0

use postdesk::api::Post;
use postdesk::query::{Segment, highlight};
use postdesk::{App, AppSettings, logging, runtime};
use std::process::ExitCode;
use tracing::error;

/// Wrap matches of `term` in brackets
fn marked(text: &str, term: &str) -> String {
    highlight(text, term)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => s.to_string(),
            Segment::Match(s) => format!("[{s}]"),
        })
        .collect()
}

fn print_post(post: &Post, term: &str) {
    let author = post.author.as_ref().map_or("?", |a| a.username.as_str());
    println!(
        "{:>5}  {:<16}  {:>4} likes  {}",
        post.id,
        author,
        post.reactions.likes,
        marked(&post.title, term)
    );
    if !post.tags.is_empty() {
        println!("       #{}", post.tags.join(" #"));
    }
}

fn main() -> ExitCode {
    let settings = AppSettings::load();
    logging::init(&settings);

    let app = match App::from_settings(&settings) {
        Ok(app) => app,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let term = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    runtime::block_on(async {
        if term.trim().is_empty() {
            app.fetch_posts().await;
        } else {
            app.search_posts(&term).await;
        }
    });

    let state = app.posts().snapshot();
    if let Some(message) = &state.envelope.error {
        error!("{message}");
        return ExitCode::FAILURE;
    }

    for post in &state.envelope.records {
        print_post(post, term.trim());
    }
    let shown = state.envelope.records.len() as u64;
    println!(
        "{} of {} posts (skip {})",
        shown, state.envelope.total, state.selector.skip
    );

    ExitCode::SUCCESS
}
