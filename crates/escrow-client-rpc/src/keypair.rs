//! Signer material from caller input.
//!
//! The secret key is treated as opaque: it only has to split into 64 bytes
//! that form a consistent ed25519 keypair.

use std::path::Path;

use escrow_client_core::{require, EscrowError, Result};
use solana_keypair::Keypair;

/// Parse a comma-separated list of 64 byte values, e.g. `"201,101,147,..."`.
pub fn keypair_from_secret_list(list: &str) -> Result<Keypair> {
    let bytes = list
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u8>()
                .map_err(|_| EscrowError::InvalidKeypair(format!("`{part}` is not a byte")))
        })
        .collect::<Result<Vec<u8>>>()?;
    keypair_from_bytes(&bytes)
}

/// Read a Solana CLI keypair file: a JSON array of 64 bytes.
pub fn read_keypair_json(path: impl AsRef<Path>) -> Result<Keypair> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|err| EscrowError::InvalidKeypair(format!("{}: {err}", path.display())))?;
    let bytes: Vec<u8> = serde_json::from_str(&raw)
        .map_err(|err| EscrowError::InvalidKeypair(format!("{}: {err}", path.display())))?;
    keypair_from_bytes(&bytes)
}

fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair> {
    require!(
        bytes.len() == 64,
        EscrowError::InvalidKeypair(format!("expected 64 bytes, got {}", bytes.len()))
    );
    Keypair::try_from(bytes).map_err(|err| EscrowError::InvalidKeypair(err.to_string()))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use solana_signer::Signer;

    use super::*;

    fn joined(bytes: &[u8]) -> String {
        bytes.iter().map(u8::to_string).collect::<Vec<_>>().join(",")
    }

    #[test]
    fn parses_secret_list() {
        let keypair = Keypair::new();
        let list = joined(&keypair.to_bytes());
        let parsed = keypair_from_secret_list(&list).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());

        let spaced = list.replace(',', ", ");
        assert_eq!(keypair_from_secret_list(&spaced).unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn rejects_non_bytes() {
        assert!(matches!(
            keypair_from_secret_list("1,2,300"),
            Err(EscrowError::InvalidKeypair(_))
        ));
        assert!(matches!(
            keypair_from_secret_list("1,,2"),
            Err(EscrowError::InvalidKeypair(_))
        ));
    }

    #[test]
    fn reads_json_file() {
        let keypair = Keypair::new();
        let path = std::env::temp_dir().join(format!("escrow-client-{}.json", keypair.pubkey()));
        std::fs::write(&path, format!("[{}]", joined(&keypair.to_bytes()))).unwrap();
        let loaded = read_keypair_json(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().pubkey(), keypair.pubkey());
    }

    proptest! {
        #[test]
        fn wrong_lengths_are_rejected(bytes in proptest::collection::vec(any::<u8>(), 1..128)) {
            prop_assume!(bytes.len() != 64);
            let is_invalid = matches!(
                keypair_from_secret_list(&joined(&bytes)),
                Err(EscrowError::InvalidKeypair(_))
            );
            prop_assert!(is_invalid);
        }
    }
}
