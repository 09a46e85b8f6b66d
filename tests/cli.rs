use clap::Parser;
use unidup::args::{Cli, Command};

#[test]
fn bare_invocation_checks_default_file() {
    let cli = Cli::try_parse_from(["unidup"]).unwrap();
    match cli.resolved_command() {
        Command::Check(args) => {
            assert_eq!(args.input.file, "universities.json");
            assert!(!args.input.lenient);
            assert!(!args.stats);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn positional_file_without_subcommand() {
    let cli = Cli::try_parse_from(["unidup", "data/unis.yaml", "--lenient"]).unwrap();
    match cli.resolved_command() {
        Command::Check(args) => {
            assert_eq!(args.input.file, "data/unis.yaml");
            assert!(args.input.lenient);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn plan_subcommand_with_global_flags() {
    let cli = Cli::try_parse_from(["unidup", "plan", "unis.json", "-v"]).unwrap();
    assert!(cli.log.verbose);
    match cli.resolved_command() {
        Command::Plan(args) => assert_eq!(args.input.file, "unis.json"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["unidup", "-v", "-q"]).is_err());
}
