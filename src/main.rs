//! Streamctl CLI - operator shell for stream pipelines
//!
//! Usage: streamctl <COMMAND>
//!
//! Commands:
//!   list          List created streams
//!   create        Create a new stream definition
//!   deploy        Deploy a previously created stream
//!   undeploy      Un-deploy a previously deployed stream
//!   undeploy-all  Un-deploy all previously deployed streams
//!   destroy       Destroy an existing stream
//!   destroy-all   Destroy all existing streams

mod cli;

use anyhow::Result;
use clap::Parser;

use streamctl::ui::TerminalInput;
use streamctl::{Config, Session, StreamCommands};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default();
    if let Some(server) = cli.server.clone() {
        config.server = Some(server);
    }

    let session = Session::from_config(&config)?;
    let Some(ops) = session.stream_operations() else {
        anyhow::bail!(
            "stream commands unavailable: no server configured \
             (use --server, STREAMCTL_SERVER, or 'server' in config.toml)"
        );
    };

    if cli.verbose > 0 {
        eprintln!("server: {}", config.server.as_deref().unwrap_or_default());
    }

    let input = TerminalInput;
    let commands = StreamCommands::new(ops, &input);

    match cli.command {
        Commands::List => cmd_list(&commands, cli.json),
        Commands::Create {
            name,
            definition,
            deploy,
        } => print_outcome(
            "stream_create",
            commands.create_stream(&name, &definition, deploy)?,
            cli.json,
        ),
        Commands::Deploy {
            name,
            properties,
            properties_file,
        } => print_outcome(
            "stream_deploy",
            commands.deploy_stream(&name, properties.as_deref(), properties_file.as_deref())?,
            cli.json,
        ),
        Commands::Undeploy { name } => print_outcome(
            "stream_undeploy",
            commands.undeploy_stream(&name)?,
            cli.json,
        ),
        Commands::UndeployAll { force } => print_outcome(
            "stream_undeploy_all",
            commands.undeploy_all_streams(force)?,
            cli.json,
        ),
        Commands::Destroy { name } => {
            print_outcome("stream_destroy", commands.destroy_stream(&name)?, cli.json)
        }
        Commands::DestroyAll { force } => print_outcome(
            "stream_destroy_all",
            commands.destroy_all_streams(force)?,
            cli.json,
        ),
    }
}

fn cmd_list(commands: &StreamCommands, json: bool) -> Result<()> {
    let table = commands.list_streams()?;

    if json {
        let streams: Vec<_> = table
            .rows()
            .iter()
            .map(|row| {
                serde_json::json!({
                    "name": row[0],
                    "definition": row[1],
                    "status": row[2],
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "stream_list",
            "streams": streams,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else if table.is_empty() {
        println!("No streams defined");
    } else {
        print!("{}", table.render());
    }

    Ok(())
}

fn print_outcome(event: &str, message: String, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({
            "event": event,
            "message": message,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else if !message.is_empty() {
        // an aborted confirmation yields an empty outcome and prints nothing
        println!("{message}");
    }

    Ok(())
}
