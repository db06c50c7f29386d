/*++

Licensed under the Apache-2.0 license.

File Name:

    trace.rs

Abstract:

    File contains the custom instruction trace writer.

--*/

use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use vexcrypto_drivers::SwModel;

/// Run `f` on a fresh software model, tracing every custom instruction into
/// `path` when one is given.
///
/// # Arguments
///
/// * `path` - Trace file, created or truncated
/// * `f` - Sequence to run on the model
pub(crate) fn with_model<T, F>(path: Option<&PathBuf>, f: F) -> anyhow::Result<T>
where
    F: FnOnce(SwModel<'_>) -> T,
{
    let Some(path) = path else {
        return Ok(f(SwModel::new()));
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create trace file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let mut result = Ok(());
    let mut trace_fn = |instr: u32, rs1: u32, rs2: u32, rd: u32| {
        if result.is_ok() {
            result = writeln!(
                &mut out,
                "0x{instr:08x} rs1=0x{rs1:08x} rs2=0x{rs2:08x} rd=0x{rd:08x}"
            );
        }
    };
    let value = f(SwModel::with_trace(&mut trace_fn));

    result.context("Failed to write trace file")?;
    out.flush().context("Failed to write trace file")?;
    Ok(value)
}
