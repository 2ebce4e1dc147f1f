use clap::ValueEnum;
use lesson_core::enums::{Difficulty, Locale};
use lesson_schema::ExtractionStrategy;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    Raw,
}

/// Language for user-facing error text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LocaleArg {
    En,
    #[value(name = "zh-tw", alias = "zh-TW")]
    ZhTw,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Self::En,
            LocaleArg::ZhTw => Self::ZhTw,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Normal,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Normal => Self::Normal,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExtractionArg {
    /// First opening bracket to the last matching closer
    FirstLast,
    /// String-aware bracket matching from the first opener
    Balanced,
}

impl From<ExtractionArg> for ExtractionStrategy {
    fn from(arg: ExtractionArg) -> Self {
        match arg {
            ExtractionArg::FirstLast => Self::FirstLast,
            ExtractionArg::Balanced => Self::Balanced,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub locale: Option<Locale>,
}
