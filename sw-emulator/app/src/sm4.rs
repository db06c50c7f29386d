/*++

Licensed under the Apache-2.0 license.

File Name:

    sm4.rs

Abstract:

    File contains implementation of the SM4 block test command.

--*/

use anyhow::anyhow;
use clap::ArgMatches;
use std::path::PathBuf;
use vexcrypto_drivers::printer::{print_buffer, Printer};
use vexcrypto_drivers::{cprintln, Sm4, Sm4Block, Sm4Mode};
use vexcrypto_drivers_test_bin::{
    sm4_report, DONE, SM4_BANNER, SM4_TEST_CIPHERTEXT, SM4_TEST_KEY, SM4_TEST_PLAINTEXT,
};

use crate::trace::with_model;

/// Parse a 16-byte hex argument.
pub(crate) fn parse_block(args: &ArgMatches, name: &str) -> anyhow::Result<Option<[u8; 16]>> {
    let Some(value) = args.get_one::<String>(name) else {
        return Ok(None);
    };
    let bytes = hex::decode(value).map_err(|e| anyhow!("Invalid --{name}: {e}"))?;
    let block = <[u8; 16]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow!("--{name} must be 16 bytes, got {}", bytes.len()))?;
    Ok(Some(block))
}

/// Run the SM4 block test
pub(crate) fn run_cmd(args: &ArgMatches) -> anyhow::Result<bool> {
    let decrypt = args.get_one::<bool>("decrypt").copied().unwrap_or(false);
    let (mode, default_input, default_expected) = if decrypt {
        (Sm4Mode::Decrypt, SM4_TEST_CIPHERTEXT, SM4_TEST_PLAINTEXT)
    } else {
        (Sm4Mode::Encrypt, SM4_TEST_PLAINTEXT, SM4_TEST_CIPHERTEXT)
    };

    let key = parse_block(args, "key")?;
    let input = parse_block(args, "plain")?;
    let expected = match parse_block(args, "expected")? {
        Some(expected) => Some(expected),
        None if key.is_none() && input.is_none() => Some(default_expected),
        None => None,
    };
    let key = key.unwrap_or(SM4_TEST_KEY);
    let input = input.unwrap_or(default_input);

    let result: Sm4Block = with_model(args.get_one::<PathBuf>("trace"), |model| {
        let mut sm4 = Sm4::new(model);
        let rk = sm4.set_key(&key, mode);
        sm4.crypt_block(&input, &rk)
    })?;

    cprintln!("{}", SM4_BANNER);
    let matched = match expected {
        Some(expected) => {
            sm4_report(&mut Printer, &input, &key, &result, &expected).unwrap_or(false)
        }
        None => {
            print_buffer("Plain", &input);
            print_buffer("Key", &key);
            print_buffer("Result", &result);
            true
        }
    };
    cprintln!("{}", DONE);

    Ok(matched)
}
