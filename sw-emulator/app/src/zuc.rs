/*++

Licensed under the Apache-2.0 license.

File Name:

    zuc.rs

Abstract:

    File contains implementation of the ZUC keystream test command.

--*/

use anyhow::anyhow;
use clap::ArgMatches;
use std::path::PathBuf;
use vexcrypto_drivers::printer::{HexWord, Printer};
use vexcrypto_drivers::{cprintln, VexCryptoResult, Zuc, ZucIv, ZucKey};
use vexcrypto_drivers_test_bin::{zuc_report, DONE, ZUC_BANNER, ZUC_TEST_VECTORS};

use crate::sm4::parse_block;
use crate::trace::with_model;

const DEFAULT_WORDS: usize = 2;

struct ZucRun {
    key: ZucKey,
    iv: ZucIv,
    words: usize,
    expected: Option<Vec<u32>>,
}

fn parse_words(args: &ArgMatches) -> anyhow::Result<Option<Vec<u32>>> {
    let Some(value) = args.get_one::<String>("expected") else {
        return Ok(None);
    };
    let bytes = hex::decode(value).map_err(|e| anyhow!("Invalid --expected: {e}"))?;
    if bytes.len() % 4 != 0 {
        return Err(anyhow!("--expected must be a whole number of 32-bit words"));
    }
    Ok(Some(
        bytes
            .chunks_exact(4)
            .map(|w| u32::from_be_bytes([w[0], w[1], w[2], w[3]]))
            .collect(),
    ))
}

fn runs(args: &ArgMatches) -> anyhow::Result<Vec<ZucRun>> {
    let key = parse_block(args, "key")?;
    let iv = parse_block(args, "iv")?;
    let words = args.get_one::<usize>("words").copied();
    let expected = parse_words(args)?;

    if key.is_none() && iv.is_none() && words.is_none() && expected.is_none() {
        return Ok(ZUC_TEST_VECTORS
            .iter()
            .map(|vector| ZucRun {
                key: vector.key,
                iv: vector.iv,
                words: vector.keystream.len(),
                expected: Some(vector.keystream.to_vec()),
            })
            .collect());
    }

    Ok(vec![ZucRun {
        key: key.unwrap_or_default(),
        iv: iv.unwrap_or_default(),
        words: expected
            .as_ref()
            .map_or(words.unwrap_or(DEFAULT_WORDS), Vec::len),
        expected,
    }])
}

/// Run the ZUC keystream test
pub(crate) fn run_cmd(args: &ArgMatches) -> anyhow::Result<bool> {
    let runs = runs(args)?;

    let keystreams = with_model(args.get_one::<PathBuf>("trace"), |model| {
        let mut zuc = Zuc::new(model);
        runs.iter()
            .map(|run| -> VexCryptoResult<Vec<u32>> {
                zuc.start(&run.key, &run.iv)?;
                (0..run.words).map(|_| zuc.next_word()).collect()
            })
            .collect::<VexCryptoResult<Vec<_>>>()
    })?
    .map_err(|e| anyhow!("ZUC driver error {:#x}", u32::from(e)))?;

    cprintln!("{}", ZUC_BANNER);
    let mut matched = true;
    for (run, words) in runs.iter().zip(keystreams.iter()) {
        match &run.expected {
            Some(expected) => {
                matched &= zuc_report(&mut Printer, words, expected).unwrap_or(false);
            }
            None => {
                for &word in words {
                    cprintln!("{}", HexWord(word));
                }
            }
        }
    }
    cprintln!("{}", DONE);

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli;

    #[test]
    fn test_expected_sets_word_count() {
        let cmd = cli().get_matches_from([
            "vexcrypto-emu",
            "zuc",
            "--key",
            "ffffffffffffffffffffffffffffffff",
            "--iv",
            "ffffffffffffffffffffffffffffffff",
            "--expected",
            "0657cfa07096398b",
        ]);
        let (_, args) = cmd.subcommand().unwrap();
        let runs = runs(args).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].words, 2);
        assert!(run_cmd(args).unwrap());
    }

    #[test]
    fn test_default_runs_all_vectors() {
        let cmd = cli().get_matches_from(["vexcrypto-emu", "zuc"]);
        let (_, args) = cmd.subcommand().unwrap();
        assert_eq!(runs(args).unwrap().len(), ZUC_TEST_VECTORS.len());
    }

    #[test]
    fn test_expected_without_key_uses_zero_vector() {
        let cmd = cli().get_matches_from(["vexcrypto-emu", "zuc", "--expected", "00000000"]);
        let (_, args) = cmd.subcommand().unwrap();
        let runs = runs(args).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].key, [0u8; 16]);
        assert_eq!(runs[0].iv, [0u8; 16]);
        assert_eq!(runs[0].words, 1);
        assert!(!run_cmd(args).unwrap());

        let cmd = cli().get_matches_from(["vexcrypto-emu", "zuc", "--expected", "27bede74018082da"]);
        let (_, args) = cmd.subcommand().unwrap();
        assert!(run_cmd(args).unwrap());
    }

    #[test]
    fn test_words_without_key_uses_zero_vector() {
        let cmd = cli().get_matches_from(["vexcrypto-emu", "zuc", "--words", "5"]);
        let (_, args) = cmd.subcommand().unwrap();
        let runs = runs(args).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].words, 5);
        assert!(runs[0].expected.is_none());
    }

    #[test]
    fn test_words_with_custom_key() {
        let cmd = cli().get_matches_from([
            "vexcrypto-emu",
            "zuc",
            "--key",
            "ffffffffffffffffffffffffffffffff",
            "--words",
            "3",
        ]);
        let (_, args) = cmd.subcommand().unwrap();
        let runs = runs(args).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].key, [0xff; 16]);
        assert_eq!(runs[0].iv, [0u8; 16]);
        assert_eq!(runs[0].words, 3);
        assert!(runs[0].expected.is_none());
        // No verdict without an expected keystream
        assert!(run_cmd(args).unwrap());
    }

    #[test]
    fn test_expected_must_be_words() {
        let cmd = cli().get_matches_from(["vexcrypto-emu", "zuc", "--expected", "0657cf"]);
        let (_, args) = cmd.subcommand().unwrap();
        assert!(runs(args).is_err());
    }
}
