//! Reading the header record supplied by the caller.

use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use blockcheck_core::HeaderFields;
use serde_json::Value;
use tracing::{debug, info};

/// Read a header record from `path`, or from stdin when `path` is `None`.
pub fn read_record(path: Option<&Path>) -> Result<HeaderFields> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    debug!(bytes = text.len(), "read header record");
    parse_record(&text)
}

/// Decode a header record from explorer JSON.
///
/// Accepts a single block object or a `{"blocks": [...]}` list, in which case
/// the first block is used.
pub fn parse_record(text: &str) -> Result<HeaderFields> {
    let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;

    let block = match value.get("blocks") {
        Some(Value::Array(blocks)) => {
            if blocks.len() > 1 {
                info!(count = blocks.len(), "block list has several entries, checking the first");
            }
            blocks
                .first()
                .cloned()
                .ok_or_else(|| anyhow!("block list is empty"))?
        }
        Some(_) => return Err(anyhow!("\"blocks\" is not a list")),
        None => value,
    };

    serde_json::from_value(block).context("invalid block header record")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_JSON: &str = r#"{
        "hash": "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
        "ver": 1,
        "prev_block": "0000000000000000000000000000000000000000000000000000000000000000",
        "mrkl_root": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
        "time": 1231006505,
        "bits": 486604799,
        "nonce": 2083236893
    }"#;

    #[test]
    fn test_parse_single_block() {
        let fields = parse_record(GENESIS_JSON).unwrap();
        assert_eq!(fields, HeaderFields::genesis());
    }

    #[test]
    fn test_parse_block_list() {
        let text = format!(r#"{{"blocks": [{}]}}"#, GENESIS_JSON);
        let fields = parse_record(&text).unwrap();
        assert_eq!(fields, HeaderFields::genesis());
    }

    #[test]
    fn test_empty_block_list() {
        let err = parse_record(r#"{"blocks": []}"#).unwrap_err();
        assert_eq!(err.to_string(), "block list is empty");
    }

    #[test]
    fn test_missing_field() {
        let err = parse_record(r#"{"hash": "00", "ver": 1}"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid block header record");
    }

    #[test]
    fn test_not_json() {
        assert!(parse_record("block 0").is_err());
    }

    #[test]
    fn test_read_testdata_files() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");

        let genesis = read_record(Some(dir.join("genesis.json").as_path())).unwrap();
        assert_eq!(genesis, HeaderFields::genesis());

        let block = read_record(Some(dir.join("block-125552.json").as_path())).unwrap();
        assert_eq!(block.nonce, 2504433986);
        assert!(blockcheck_core::validate_header(&block).unwrap().is_valid());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_record(Some(Path::new("/nonexistent/block.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/block.json"));
    }
}
