pub mod verbose;
pub mod version;

use clap::{Parser, ArgAction};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Version to switch to: a prefix such as `1.22`, or `stable`/`lts`
    #[arg(value_name = "VERSION")]
    pub queries: Vec<String>,

    #[arg(short = 'V', long, action = ArgAction::SetTrue)]
    pub version: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action<'a> {
    ShowVersion,
    Help,
    Switch(&'a str),
    TooManyVersions(&'a [String]),
}

impl Cli {
    pub fn action(&self) -> Action<'_> {
        if self.version {
            return Action::ShowVersion;
        }
        match self.queries.as_slice() {
            [] => Action::Help,
            [query] => Action::Switch(query),
            queries => Action::TooManyVersions(queries),
        }
    }
}
