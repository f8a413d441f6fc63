use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Streamctl - operator shell for stream pipelines
#[derive(Parser, Debug)]
#[command(name = "streamctl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Streams are pipeline definitions in a pipe-delimited DSL, \
e.g. \"http --port=9000 | hdfs\".")]
pub struct Cli {
    /// Output machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Orchestration server base URL (overrides config file and environment)
    #[arg(long, global = true)]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List created streams
    List,

    /// Create a new stream definition
    Create {
        /// The name to give to the stream
        name: String,

        /// A stream definition, using the DSL (e.g. "http --port=9000 | hdfs")
        #[arg(short, long)]
        definition: String,

        /// Deploy the stream immediately
        #[arg(long)]
        deploy: bool,
    },

    /// Deploy a previously created stream
    Deploy {
        /// The name of the stream to deploy
        name: String,

        /// The properties for this deployment, as key=value[,key=value...]
        // mutual exclusion with --properties-file is enforced by the
        // property resolver, not by clap, so the error names both options
        #[arg(long)]
        properties: Option<String>,

        /// The properties for this deployment, as a .properties file
        #[arg(long)]
        properties_file: Option<PathBuf>,
    },

    /// Un-deploy a previously deployed stream
    Undeploy {
        /// The name of the stream to un-deploy
        name: String,
    },

    /// Un-deploy all previously deployed streams
    UndeployAll {
        /// Bypass the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Destroy an existing stream
    Destroy {
        /// The name of the stream to destroy
        name: String,
    },

    /// Destroy all existing streams
    DestroyAll {
        /// Bypass the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
