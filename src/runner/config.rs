use std::path::PathBuf;

use clap::{arg, command, value_parser, ArgAction, ValueEnum};

use scriptck::analysis::TypeckOptions;

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub paths: Vec<PathBuf>,
    pub format: SymbolsOutputFormat,
    pub options: TypeckOptions,
}

/// How the final symbol table of each program is written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolsOutputFormat {
    /// One `name: type` line per variable.
    #[default]
    Text,
    Debug,
    Ron,
}

fn command() -> clap::Command {
    command!()
        .arg(
            arg!(files: <FILE> ... "program trees serialized as RON")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            arg!(-f --format <FORMAT> "the symbol table output format")
                .value_parser(value_parser!(SymbolsOutputFormat))
                .required(false),
        )
        .arg(
            arg!(--"strict-conditions" "require `if` conditions to be of type bool")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args_or_exit() -> CheckConfig {
    let matches = command().get_matches();

    let paths = matches
        .get_many::<PathBuf>("files")
        .expect("files are required")
        .cloned()
        .collect();
    let format = matches
        .get_one::<SymbolsOutputFormat>("format")
        .copied()
        .unwrap_or_default();
    let options = TypeckOptions {
        require_bool_conditions: matches.get_flag("strict-conditions"),
    };

    CheckConfig {
        paths,
        format,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let matches = command()
            .try_get_matches_from(["scriptck", "a.ron", "b.ron", "-f", "ron", "--strict-conditions"])
            .unwrap();

        assert_eq!(matches.get_many::<PathBuf>("files").unwrap().count(), 2);
        assert_eq!(
            matches.get_one::<SymbolsOutputFormat>("format"),
            Some(&SymbolsOutputFormat::Ron)
        );
        assert!(matches.get_flag("strict-conditions"));
    }
}
