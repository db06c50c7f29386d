/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    File contains main entrypoint for the SM4/ZUC plugin emulator. Runs the
    firmware conformance sequences on the software model of the plugins.

--*/

use clap::{arg, value_parser, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process::exit;

mod sm4;
mod trace;
mod zuc;

fn hex_arg(arg: clap::Arg<'static>) -> clap::Arg<'static> {
    arg.required(false).value_parser(value_parser!(String))
}

fn trace_arg() -> clap::Arg<'static> {
    arg!(--trace <FILE> "Custom instruction trace file")
        .required(false)
        .value_parser(value_parser!(PathBuf))
}

fn cli() -> Command<'static> {
    let sub_cmds = vec![
        Command::new("sm4")
            .about("Run the SM4 block test")
            .arg(hex_arg(arg!(--key <HEX> "128-bit key")))
            .arg(hex_arg(arg!(--plain <HEX> "128-bit input block")))
            .arg(hex_arg(arg!(--expected <HEX> "Expected 128-bit output block")))
            .arg(arg!(--decrypt "Use the decryption key schedule").action(ArgAction::SetTrue))
            .arg(trace_arg()),
        Command::new("zuc")
            .about("Run the ZUC keystream test")
            .arg(hex_arg(arg!(--key <HEX> "128-bit key")))
            .arg(hex_arg(arg!(--iv <HEX> "128-bit initialization vector")))
            .arg(
                arg!(--words <N> "Keystream words to generate [default: 2]")
                    .required(false)
                    .value_parser(value_parser!(usize)),
            )
            .arg(hex_arg(arg!(
                --expected <HEX> "Expected keystream, 8 hex digits per word"
            )))
            .arg(trace_arg()),
    ];

    Command::new("vexcrypto-emu")
        .arg_required_else_help(true)
        .subcommands(sub_cmds)
        .about("VexRiscv SM4/ZUC plugin emulator")
}

fn run(cmd: &ArgMatches) -> anyhow::Result<bool> {
    match cmd.subcommand() {
        Some(("sm4", args)) => sm4::run_cmd(args),
        Some(("zuc", args)) => zuc::run_cmd(args),
        _ => unreachable!(),
    }
}

fn main() {
    let cmd = cli().get_matches();

    match run(&cmd) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit(-1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli() {
        cli().debug_assert();
    }

    #[test]
    fn test_default_vectors_match() {
        let cmd = cli().get_matches_from(["vexcrypto-emu", "sm4"]);
        assert!(run(&cmd).unwrap());

        let cmd = cli().get_matches_from(["vexcrypto-emu", "sm4", "--decrypt"]);
        assert!(run(&cmd).unwrap());

        let cmd = cli().get_matches_from(["vexcrypto-emu", "zuc"]);
        assert!(run(&cmd).unwrap());
    }

    #[test]
    fn test_mismatch() {
        let cmd = cli().get_matches_from([
            "vexcrypto-emu",
            "sm4",
            "--expected",
            "00000000000000000000000000000000",
        ]);
        assert!(!run(&cmd).unwrap());
    }

    #[test]
    fn test_invalid_hex() {
        let cmd = cli().get_matches_from(["vexcrypto-emu", "zuc", "--key", "0011"]);
        assert!(run(&cmd).is_err());
    }
}
