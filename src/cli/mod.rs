//! CLI Module
//!
//! Command-line interface over the preference store and the sound attach
//! operation.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::layers::LayerKind;
use crate::settings::PreferencePage;

/// Flipbook - preferences and sound keyframes for a 2D animation editor
#[derive(Parser, Debug)]
#[command(name = "flipbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to $FLIPBOOK_SETTINGS, then ./flipbook_settings.json)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective value of a setting
    #[command(name = "get")]
    Get {
        /// Setting name, e.g. frameSize
        key: String,
    },

    /// Change a setting and save it
    #[command(name = "set")]
    Set {
        /// Setting name, e.g. frameSize
        key: String,

        /// New value (numbers, true/false/on/off, or text)
        value: String,
    },

    /// List settings with their values and defaults
    #[command(name = "list")]
    List {
        /// Only show one preference page (general, files, timeline, tools)
        #[arg(short, long)]
        page: Option<PreferencePage>,
    },

    /// Restore one setting, or all of them, to the default
    #[command(name = "reset")]
    Reset {
        /// Setting name; omit to reset everything
        key: Option<String>,
    },

    /// Attach a sound file to a frame of a scratch layer and report the result
    #[command(name = "attach-sound")]
    AttachSound {
        /// Audio file to attach
        file: PathBuf,

        /// Target frame
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        frame: i32,

        /// Kind of the scratch layer (sound, bitmap, vector, camera)
        #[arg(long, default_value = "sound")]
        layer_kind: LayerKind,
    },
}
