mod command;
mod paths;
mod render;

use std::fs::File;
use std::process::ExitCode;

use eventdesk_lib::EventApi;
use eventdesk_lib::EventDeskClient;
use eventdesk_lib::clock::SystemClock;
use eventdesk_lib::config::ClientConfig;
use eventdesk_lib::error::Failure;
use eventdesk_lib::form::FormSession;
use eventdesk_lib::form::SubmitOutcome;
use eventdesk_lib::normalize;
use eventdesk_lib::with_error_handling;
use eventdesk_lib::retry::RetryPolicy;
use eventdesk_lib::with_retry;
use log::info;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use command::Command;
use command::Invocation;

fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => eprintln!("warning: cannot write log file {}: {e}", path.display()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let invocation = match command::parse(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {e}\n\n{}", command::USAGE);
            return ExitCode::from(2);
        }
    };

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    init_logging(config.log_level);
    info!("Using API at {}", config.api_url);

    let client = match EventDeskClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {}", normalize(&Failure::from(e)));
            return ExitCode::FAILURE;
        }
    };

    run(&client, invocation).await
}

async fn run(client: &EventDeskClient, invocation: Invocation) -> ExitCode {
    let policy = if invocation.retry {
        RetryPolicy::default()
    } else {
        RetryPolicy::no_retry()
    };

    match invocation.command {
        Command::Help => {
            println!("{}", command::USAGE);
            ExitCode::SUCCESS
        }
        Command::Events => match with_error_handling("list events", || {
            with_retry(&policy, || client.list_events())
        })
        .await
        {
            Ok(events) => {
                println!("{}", render::events(&events));
                ExitCode::SUCCESS
            }
            Err(e) => report(Failure::from(e)),
        },
        Command::Attendees(event_id) => {
            match with_error_handling("list attendees", || {
                with_retry(&policy, || client.list_attendees(event_id))
            })
            .await
            {
                Ok(attendees) => {
                    println!("{}", render::attendees(&attendees));
                    ExitCode::SUCCESS
                }
                Err(e) => report(Failure::from(e)),
            }
        }
        Command::Create(draft) => {
            let mut form = FormSession::new(draft);
            match form.submit(client, &SystemClock).await {
                SubmitOutcome::Accepted(event) => {
                    println!("Created event #{} '{}'", event.id, event.name);
                    ExitCode::SUCCESS
                }
                SubmitOutcome::Rejected(violations) => {
                    eprintln!("Event not created:\n{}", render::violations(&violations));
                    ExitCode::FAILURE
                }
                SubmitOutcome::Failed(failure) => {
                    eprintln!("error: {failure}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Register(draft) => {
            let mut form = FormSession::new(draft);
            match form.submit(client, &SystemClock).await {
                SubmitOutcome::Accepted(attendee) => {
                    println!("Registered {} <{}> as #{}", attendee.name, attendee.email, attendee.id);
                    ExitCode::SUCCESS
                }
                SubmitOutcome::Rejected(violations) => {
                    eprintln!("Attendee not registered:\n{}", render::violations(&violations));
                    ExitCode::FAILURE
                }
                SubmitOutcome::Failed(failure) => {
                    eprintln!("error: {failure}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn report(failure: Failure) -> ExitCode {
    eprintln!("error: {}", normalize(&failure));
    ExitCode::FAILURE
}
