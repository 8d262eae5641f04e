use std::fs;

use mint_authority_patcher::{
    common::typedefs::serializable_pubkey::SerializablePubkey,
    config::{default_token_entries, PatcherConfig, TokenEntry},
    error::PatcherError,
    patcher::{read_mint_authority, AccountPatcher},
};
use serde_json::Value;

use crate::utils::*;

fn three_entries() -> Vec<TokenEntry> {
    default_token_entries().unwrap().into_iter().take(3).collect()
}

fn authority() -> SerializablePubkey {
    SerializablePubkey::try_from("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM").unwrap()
}

#[named]
#[test]
fn test_patch_all_entries() {
    let dir = test_dir(function_name!());
    let config = PatcherConfig {
        mint_authority: authority(),
        output_dir: dir.clone(),
        entries: three_entries(),
    };
    let original = usdc_fixture();
    let patcher = AccountPatcher::new(config, FakeFetcher::new(original.clone()));

    let report = patcher.run().unwrap();

    assert_eq!(report.patched.len(), 3);
    for symbol in ["usdc", "bonk", "fida"] {
        let path = dir.join(format!("{}.json", symbol));
        assert!(report.patched.contains(&path));

        let patched: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        // Everything but the data string is passed through.
        let mut expected = original.clone();
        expected["account"]["data"][0] = patched["account"]["data"][0].clone();
        assert_eq!(patched, expected);

        let payload = read_payload(&path);
        assert_eq!(payload.len(), 82);
        assert_eq!(read_mint_authority(&payload).unwrap(), authority());
    }
}

#[named]
#[test]
fn test_only_mint_authority_bytes_change() {
    let dir = test_dir(function_name!());
    let mut payload = vec![0u8; 82];
    payload[..4].copy_from_slice(&1u32.to_le_bytes());
    payload[44] = 9;
    payload[45] = 1;
    let ones = SerializablePubkey::from([1u8; 32]);
    let config = PatcherConfig {
        mint_authority: ones,
        output_dir: dir.clone(),
        entries: vec![TokenEntry::new("mock", SerializablePubkey::from([2u8; 32]))],
    };

    AccountPatcher::new(config, FakeFetcher::new(mint_snapshot(&payload)))
        .run()
        .unwrap();

    let patched = read_payload(&dir.join("mock.json"));
    assert_eq!(patched.len(), payload.len());
    assert!(patched[4..36].iter().all(|b| *b == 0x01));
    assert_eq!(&patched[..4], &payload[..4]);
    assert_eq!(&patched[36..], &payload[36..]);
}

#[named]
#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn test_fetch_failure_halts_run(#[case] failing_index: usize) {
    let dir = test_dir(&format!("{}_{}", function_name!(), failing_index));
    let entries = three_entries();
    let failing_symbol = entries[failing_index].symbol.clone();
    let config = PatcherConfig {
        mint_authority: authority(),
        output_dir: dir.clone(),
        entries: entries.clone(),
    };
    let fetcher = FakeFetcher::new(usdc_fixture()).failing_on(&failing_symbol);
    let patcher = AccountPatcher::new(config, fetcher);

    let err = patcher.run().unwrap_err();

    let attempted: Vec<String> = entries[..=failing_index]
        .iter()
        .map(|e| e.symbol.clone())
        .collect();
    assert_eq!(*patcher.fetcher().fetched.borrow(), attempted);

    assert!(matches!(err, PatcherError::Fetch { ref symbol, .. } if *symbol == failing_symbol));
    for (i, entry) in entries.iter().enumerate() {
        let path = patcher.fixture_path(&entry.symbol);
        if i < failing_index {
            assert_eq!(read_mint_authority(&read_payload(&path)).unwrap(), authority());
        } else {
            assert!(!path.exists(), "{} should not have been written", entry.symbol);
        }
    }
}

#[named]
#[test]
fn test_undersized_payload_leaves_file_untouched() {
    let dir = test_dir(function_name!());
    let snapshot = mint_snapshot(&[7u8; 20]);
    let config = PatcherConfig {
        mint_authority: authority(),
        output_dir: dir.clone(),
        entries: vec![TokenEntry::new("tiny", SerializablePubkey::from([3u8; 32]))],
    };

    let err = AccountPatcher::new(config, FakeFetcher::new(snapshot.clone()))
        .run()
        .unwrap_err();

    assert!(matches!(
        err,
        PatcherError::MalformedPayload {
            required: 36,
            actual: 20,
            ..
        }
    ));
    let written = fs::read_to_string(dir.join("tiny.json")).unwrap();
    assert_eq!(written, snapshot.to_string());
}

#[named]
#[test]
fn test_creates_missing_output_dir() {
    let dir = test_dir(function_name!()).join("scripts").join("accounts");
    let config = PatcherConfig {
        mint_authority: authority(),
        output_dir: dir.clone(),
        entries: three_entries().into_iter().take(1).collect(),
    };

    AccountPatcher::new(config, FakeFetcher::new(usdc_fixture()))
        .run()
        .unwrap();

    assert!(dir.join("usdc.json").exists());
}
