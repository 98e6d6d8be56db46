use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use estrutura::{api, blueprint};
use std::path::Path;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the entries that would be created without writing anything")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let base_path = Path::new(blueprint::BASE_PATH);
    let tree = blueprint::game_server();

    if matches.get_flag("dry-run") {
        api::preview(base_path, &tree);
    } else {
        api::scaffold(base_path, &tree)?;
    }

    Ok(())
}
