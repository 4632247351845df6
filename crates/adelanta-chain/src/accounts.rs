//! Fabricated account identifiers for the demo: Stellar-looking wallet
//! keys and per-country local collection accounts ("invisible" payment
//! rails the corporate payer wires into).

use adelanta_core::types::WalletKind;

use crate::{digest_digits, digest_hex};

fn kind_label(kind: WalletKind) -> &'static str {
    match kind {
        WalletKind::Sme => "SME",
        WalletKind::Lender => "LENDER",
        WalletKind::Admin => "ADMIN",
        WalletKind::Treasury => "TREASURY",
    }
}

/// Demo wallet public key. Not a real Stellar key; the `GDEMO_` prefix
/// keeps that unmistakable in logs and dashboards.
pub fn demo_public_key(kind: WalletKind, owner_id: &str, now: u64) -> String {
    format!("GDEMO_{}_{}_{}", kind_label(kind), owner_id, now)
}

/// Local collection account for the payer, formatted per country.
pub fn collection_account(country: &str, reference: &str) -> String {
    let digits = |len| digest_digits(&["collection", country, reference], len);

    match country {
        "CL" => {
            let d = digits(13);
            format!("CuentaRUT: {}-{}", &d[..12], &d[12..])
        }
        "MX" => format!("CLABE: {}", digits(18)),
        "AR" => format!("CBU: {}", digits(22)),
        "BR" => {
            let hex = digest_hex(&["collection", country, reference]);
            format!(
                "PIX: {}-{}-{}-{}-{}",
                &hex[0..8],
                &hex[8..12],
                &hex[12..16],
                &hex[16..20],
                &hex[20..32]
            )
        }
        "CO" => format!("NIT: {}", digits(10)),
        "PE" => format!("CCI: {}", digits(20)),
        _ => format!("ACCOUNT: {}", digits(18)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_keys_carry_kind_and_owner() {
        let key = demo_public_key(WalletKind::Lender, "lender-carlos", 1_700_000_000);
        assert_eq!(key, "GDEMO_LENDER_lender-carlos_1700000000");
    }

    #[test]
    fn collection_accounts_are_stable_per_invoice() {
        let a = collection_account("MX", "INV-002");
        let b = collection_account("MX", "INV-002");
        assert_eq!(a, b);
        assert!(a.starts_with("CLABE: "));
        assert_eq!(a.len(), "CLABE: ".len() + 18);
    }

    #[test]
    fn formats_follow_the_country() {
        assert!(collection_account("AR", "INV-001").starts_with("CBU: "));
        assert!(collection_account("BR", "INV-001").starts_with("PIX: "));
        assert!(collection_account("CO", "INV-001").starts_with("NIT: "));
        assert!(collection_account("PE", "INV-001").starts_with("CCI: "));
        assert!(collection_account("US", "INV-001").starts_with("ACCOUNT: "));
        let pix = collection_account("BR", "INV-001");
        assert_eq!(pix.split(": ").nth(1).unwrap().split('-').count(), 5);
    }
}
