pub(crate) mod config;
pub(crate) mod recipes;
pub(crate) mod run;
pub(crate) mod workspace;

use artpack_lib::settings::OutputSettings;

use crate::cli_types::OutputArgs;

/// Resolve output settings: CLI flags over the config file over defaults.
pub(crate) fn output_settings(args: &OutputArgs) -> OutputSettings {
    OutputSettings::load().with_overrides(args.output.as_deref(), args.archive_prefix.as_deref())
}
