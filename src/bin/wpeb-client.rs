extern crate wpeb_client;

use std::io::BufRead;

use anyhow::Result;
use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_util::StreamExt;
use log::info;
use rand_core::OsRng;
use wpeb_client::{
    handlers::{
        display::{render_event, render_rejection},
        input::{dispatch, Trigger, USAGE},
    },
    services::{
        actions::ActionPicker,
        config::ClientConfig,
        connection::{Connection, ConnectionEvent, SendOutcome},
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();
    let config = ClientConfig::from_env();
    let ansi = std::env::var_os("NO_COLOR").is_none();

    let (event_sink, mut events) = unbounded::<ConnectionEvent>();
    let connection = Connection::open(config.url(), event_sink);
    info!("Connection {} opening to {}", connection.id(), config.url());

    let mut picker = ActionPicker::new(OsRng);
    let mut lines = spawn_stdin_reader();
    println!("{USAGE}");

    'main_loop: loop {
        tokio::select! {
            line = lines.next() => {
                let line = match line {
                    Some(line) => line,
                    None => {
                        connection.close();
                        break 'main_loop;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let trigger = match line.parse::<Trigger>() {
                    Ok(trigger) => trigger,
                    Err(e) => {
                        println!("{e}. {USAGE}");
                        continue;
                    }
                };
                if trigger == Trigger::Quit {
                    connection.close();
                    break 'main_loop;
                }
                if let Some(SendOutcome::Rejected(state)) = dispatch(trigger, &mut picker, &connection)? {
                    println!("{}", render_rejection(state));
                }
            }

            event = events.next() => {
                let Some(event) = event else {
                    break 'main_loop;
                };
                println!("{}", render_event(&event, ansi));
                if event == ConnectionEvent::Closed {
                    break 'main_loop;
                }
            }
        }
    }

    // let the close handshake finish before the runtime shuts down
    while let Some(event) = events.next().await {
        if event == ConnectionEvent::Closed {
            println!("{}", render_event(&event, ansi));
            break;
        }
    }

    Ok(())
}

/// Stdin is read on a plain thread so a pending read never holds up runtime shutdown.
fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (line_sink, line_source) = unbounded::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line_sink.unbounded_send(line).is_err() {
                break;
            }
        }
    });
    line_source
}
