// SPDX-FileCopyrightText: 2025-2026 Ladle Maintainers
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod api;
mod client;
mod command;
mod error;
mod http;
mod metadata;
mod model;
mod navigate;
mod prompt;
mod session;
mod storage;

use std::process;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use error::Result;
use log::{error, warn};
use url::Url;

#[derive(Debug, Subcommand)]
enum Command {
    Home(command::home::Command),
    Browse(command::browse::Command),
    Mine(command::mine::Command),
    Show(command::show::Command),
    Create(command::create::Command),
    Edit(command::edit::Command),
    Delete(command::delete::Command),
    Login(command::login::Command),
    Logout(command::logout::Command),
    Signup(command::signup::Command),
    Awards(command::awards::Command),
    Whoami(command::whoami::Command),
    Open(command::open::Command),
}

#[async_trait]
impl command::Command for Command {
    async fn execute(self, ctx: command::Context) -> Result<()> {
        match self {
            Self::Home(cmd) => cmd.execute(ctx).await,
            Self::Browse(cmd) => cmd.execute(ctx).await,
            Self::Mine(cmd) => cmd.execute(ctx).await,
            Self::Show(cmd) => cmd.execute(ctx).await,
            Self::Create(cmd) => cmd.execute(ctx).await,
            Self::Edit(cmd) => cmd.execute(ctx).await,
            Self::Delete(cmd) => cmd.execute(ctx).await,
            Self::Login(cmd) => cmd.execute(ctx).await,
            Self::Logout(cmd) => cmd.execute(ctx).await,
            Self::Signup(cmd) => cmd.execute(ctx).await,
            Self::Awards(cmd) => cmd.execute(ctx).await,
            Self::Whoami(cmd) => cmd.execute(ctx).await,
            Self::Open(cmd) => cmd.execute(ctx).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The root URL of the Muruga Kitchen server. The REST API is expected
    /// under /api on this host.
    #[arg(long, env = "LADLE_URL", default_value = "http://127.0.0.1:8080", value_parser = Url::parse)]
    url: Url,

    /// Do not read or write the persisted session file.
    #[arg(long)]
    no_session_file: bool,

    #[clap(subcommand)]
    command: Command,
}

fn get_session_storage(args: &Args) -> Box<dyn storage::Storage> {
    if !args.no_session_file {
        if let Some(file_storage) = storage::File::new("session.json") {
            return Box::new(file_storage);
        }
        warn!("We need to fall back to in-memory session storage because no project directory is available");
    }

    Box::new(storage::Memory::new())
}

async fn run(args: Args) -> Result<()> {
    let store = session::SessionStore::restore(get_session_storage(&args)).await;

    let api: Box<dyn client::Api + Send + Sync> =
        Box::new(http::Remote::new(args.url.clone(), store.bearer())?);
    let ctx = command::Context {
        api,
        store,
        prompt: Box::new(prompt::TerminalPrompt),
        root: args.url,
    };

    command::Command::execute(args.command, ctx).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("LADLE_LOG", "warn")
        .write_style("LADLE_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
