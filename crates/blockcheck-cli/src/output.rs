//! Human-readable rendering of a validation report.

use std::fmt;

use blockcheck_core::difficulty::format_difficulty;
use blockcheck_core::{FieldHex, HeaderReport};

/// Step-by-step walk-through of a validation run.
pub struct Walkthrough<'a>(pub &'a HeaderReport);

impl fmt::Display for Walkthrough<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Validating block {}...", report.fields.published_hash)?;

        writeln!(f, "\nHeader fields as hex:")?;
        write_fields(f, &report.canonical.hex)?;

        writeln!(f, "\nHeader fields as little endian:")?;
        write_fields(f, &report.canonical.little_endian)?;

        writeln!(f, "\nSerialized header: {}", report.header_hex)?;

        writeln!(f, "\nHashing...")?;
        writeln!(f, "First hash: {}", report.first_hash)?;
        writeln!(f, "Second hash: {}", report.second_hash)?;
        writeln!(f, "Block hash (second hash reversed): {}", report.display_hash)?;

        if report.result.hash_matches {
            writeln!(f, "Header hash is equal to block hash")?;
        } else {
            writeln!(
                f,
                "Header hash is not equal to block hash ({} != {})",
                report.display_hash, report.fields.published_hash
            )?;
        }

        writeln!(f, "\nTarget from bits {:#010x}: {}", report.fields.bits, report.target_hex)?;
        writeln!(f, "Difficulty: {}", format_difficulty(report.difficulty))?;

        if report.result.below_target {
            writeln!(f, "Header hash value is smaller than target")?;
        } else {
            writeln!(
                f,
                "Header hash value is not smaller than target ({} >= {})",
                report.display_hash, report.target_hex
            )?;
        }

        let verdict = if report.is_valid() { "VALID" } else { "INVALID" };
        writeln!(f, "\nResult: {}", verdict)
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &FieldHex) -> fmt::Result {
    writeln!(f, "  version:    {}", fields.version)?;
    writeln!(f, "  prev_block: {}", fields.previous_block_hash)?;
    writeln!(f, "  mrkl_root:  {}", fields.merkle_root)?;
    writeln!(f, "  time:       {}", fields.time)?;
    writeln!(f, "  bits:       {}", fields.bits)?;
    writeln!(f, "  nonce:      {}", fields.nonce)
}
