use clap::{Parser, Subcommand};

/// Command-line interface definition for sessiondraft
#[derive(Parser)]
#[command(
    name = "sessiondraft",
    version = env!("CARGO_PKG_VERSION"),
    about = "Author clinical session drafts per patient: timer, notes, protocols, files and evolution",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Open (or create) the draft of a patient
    Open {
        /// Patient identifier
        patient: String,

        /// Discard an existing draft and start from a fresh one
        #[arg(long = "start-over")]
        start_over: bool,
    },

    /// Edit name, type or notes of a draft
    Update {
        /// Patient identifier
        patient: String,

        #[arg(long = "name", help = "Session display name")]
        name: Option<String>,

        #[arg(long = "type", help = "Session type: session, evolution, anamnesis")]
        session_type: Option<String>,

        #[arg(long = "notes", help = "Free-text notes (replaces existing notes)")]
        notes: Option<String>,
    },

    /// Start (or resume) the session timer
    Start {
        /// Patient identifier
        patient: String,
    },

    /// Finish the running session
    Finish {
        /// Patient identifier
        patient: String,
    },

    /// Show a draft with its live elapsed time
    Show {
        /// Patient identifier
        patient: String,

        #[arg(long = "json", help = "Print the stored draft as JSON")]
        json: bool,
    },

    /// Display the live timer of a running session
    Watch {
        /// Patient identifier
        patient: String,

        #[arg(long = "seconds", default_value_t = 10, help = "How long to watch")]
        seconds: u64,
    },

    /// Manage protocol entries
    Protocol {
        #[command(subcommand)]
        action: ProtocolAction,
    },

    /// Manage attached file metadata
    File {
        #[command(subcommand)]
        action: FileAction,
    },

    /// Configure the evolution record
    Evolution {
        /// Patient identifier
        patient: String,

        #[arg(long = "enable", conflicts_with = "disable")]
        enable: bool,

        #[arg(long = "disable")]
        disable: bool,

        #[arg(long = "progress", help = "Progress step: 10, 20, ..., 100")]
        progress: Option<u8>,

        #[arg(long = "status", help = "Status: not_started, in_progress, achieved")]
        status: Option<String>,
    },

    /// Mark the draft as saved (exit action)
    Save {
        /// Patient identifier
        patient: String,
    },

    /// Replace the draft with a fresh one
    Reset {
        /// Patient identifier
        patient: String,
    },

    /// List all stored drafts
    List,

    /// Export drafts to JSON
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "patient", help = "Export only this patient's draft")]
        patient: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Zip the backup")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProtocolAction {
    /// Add an empty protocol entry
    Add {
        patient: String,
        /// speech-assessment, motor-coordination, school-follow-up
        protocol_type: String,
    },

    /// Change type and/or content of a protocol entry
    Update {
        patient: String,
        id: String,

        #[arg(long = "type")]
        protocol_type: Option<String>,

        #[arg(long = "content")]
        content: Option<String>,
    },

    /// Remove a protocol entry
    Remove { patient: String, id: String },
}

#[derive(Subcommand)]
pub enum FileAction {
    /// Attach one or more files (metadata only)
    Add {
        patient: String,

        #[arg(required = true)]
        paths: Vec<String>,

        #[arg(long = "category", help = "anamnesis, report, protocol, other")]
        category: Option<String>,
    },

    /// Remove a file entry
    Remove { patient: String, id: String },

    /// Change the category of a file entry
    Category {
        patient: String,
        id: String,
        category: String,
    },
}
