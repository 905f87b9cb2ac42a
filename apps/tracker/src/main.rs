use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::load_settings, Alphabet, HttpRequestApi, SortKey, SubmitOutcome, TableAction,
    TrackerSession, ValidationRules,
};
use shared::domain::{RequestId, RequestStatus, RequestType};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "tracker", about = "List, inspect and submit tracked requests")]
struct Cli {
    /// Overrides the server url from tracker.toml / environment.
    #[arg(long, global = true)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints one page of the request table.
    List {
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<RequestStatus>,
        #[arg(long = "type")]
        kind: Option<RequestType>,
        /// Column to sort by: id, type, user, date, status.
        #[arg(long)]
        sort: Option<SortKey>,
        #[arg(long, requires = "sort")]
        desc: bool,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Prints the detail view of one request.
    Show { id: i64 },
    /// Validates and submits a new request.
    Submit {
        #[arg(long)]
        user: String,
        #[arg(long = "type", default_value = "Ошибка")]
        kind: RequestType,
        #[arg(long)]
        description: String,
        /// jpeg or png image; only its file name is sent.
        #[arg(long)]
        attachment: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    let rules = match settings.alphabet {
        Some(letters) => ValidationRules::new(Alphabet::custom(letters))
            .context("configured alphabet is not a valid character class")?,
        None => ValidationRules::default(),
    };
    let api = HttpRequestApi::new(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;
    info!(server_url = %settings.server_url, "tracker starting");

    let mut session = TrackerSession::with_rules(api, rules);
    session
        .reload()
        .await
        .map_err(|err| anyhow!(err.summary()))?;

    match cli.command {
        Command::List {
            author,
            date,
            status,
            kind,
            sort,
            desc,
            page,
        } => {
            if let Some(author) = author {
                session.dispatch(TableAction::FilterAuthor(author));
            }
            if let Some(date) = date {
                session.dispatch(TableAction::FilterDate(date));
            }
            if let Some(status) = status {
                session.dispatch(TableAction::FilterStatus(status));
            }
            if let Some(kind) = kind {
                session.dispatch(TableAction::FilterType(kind));
            }
            if let Some(key) = sort {
                session.dispatch(TableAction::Sort(key));
                if desc {
                    session.dispatch(TableAction::Sort(key));
                }
            }
            for _ in 1..page {
                session.dispatch(TableAction::NextPage);
            }
            print!("{}", render::table(session.table()));
        }
        Command::Show { id } => {
            session.dispatch(TableAction::OpenDetail(RequestId(id)));
            let Some(record) = session.detail() else {
                bail!("request {id} not found");
            };
            print!("{}", render::detail(record));
        }
        Command::Submit {
            user,
            kind,
            description,
            attachment,
        } => {
            session.dispatch(TableAction::OpenForm);
            let form = session
                .dialog_mut()
                .form_mut()
                .context("new request form did not open")?;
            form.set_user(user);
            form.choose_type(kind);
            form.set_description(description);
            if let Some(path) = attachment {
                form.stage_attachment(&path)?;
                if let Some(caption) = form.attachment_caption() {
                    println!("{caption}");
                }
            }

            println!("{}", submission_report(session.submit_form().await)?);
        }
    }

    Ok(())
}

/// Success line for a submission; every other outcome becomes the error the
/// process exits with.
fn submission_report(outcome: SubmitOutcome) -> Result<String> {
    match outcome {
        SubmitOutcome::Submitted { records } => {
            Ok(format!("Запрос отправлен, всего запросов: {records}"))
        }
        SubmitOutcome::Invalid(errors) => {
            bail!("form has validation errors:\n{}", render::form_errors(&errors).trim_end())
        }
        SubmitOutcome::Failed(error) => bail!("{}", error.summary()),
        SubmitOutcome::NoForm => bail!("new request form is not open"),
    }
}
