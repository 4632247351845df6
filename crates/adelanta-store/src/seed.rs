//! Demo accounts seeded at startup so the dashboards have something to
//! show: one SME with history, one funded lender, one invoice mid-flight.

use adelanta_core::types::{
    Invoice, InvoiceStatus, RiskLevel, SmeReputation, Wallet, WalletKind,
};

use crate::Store;

const SME_ID: &str = "sme-maria";
const LENDER_ID: &str = "lender-carlos";

// 2024-12-20T10:00:00Z / 10:30:00Z, 2025-02-15T00:00:00Z
const CREATED_AT: u64 = 1_734_688_800;
const FUNDED_AT: u64 = 1_734_690_600;
const DUE_DATE: u64 = 1_739_577_600;

impl Store {
    /// Populate the three maps with the demo SME, lender, and an
    /// already-funded invoice awaiting settlement.
    pub fn seed_demo_data(&mut self) {
        let sme_wallet = Wallet {
            public_key: "GDEMO_SME_WALLET_PUBLIC_KEY_1234567890".into(),
            balance: 0,
            kind: WalletKind::Sme,
        };
        self.wallets.insert(SME_ID.into(), sme_wallet.clone());

        self.reputations.insert(
            SME_ID.into(),
            SmeReputation {
                sme_id: SME_ID.into(),
                total_invoices: 3,
                settled_invoices: 2,
                total_volume: 15_000,
                avg_settlement_days: 45,
                on_time_rate_bps: 10_000,
                risk_score: 350,
            },
        );

        let lender_wallet = Wallet {
            public_key: "GDEMO_LENDER_WALLET_PUBLIC_KEY_9876543210".into(),
            balance: 100_000,
            kind: WalletKind::Lender,
        };
        self.wallets.insert(LENDER_ID.into(), lender_wallet.clone());

        let invoice = Invoice {
            id: "INV-001".into(),
            sme_id: SME_ID.into(),
            sme_name: "María García - Design Agency".into(),
            sme_wallet: sme_wallet.public_key,
            payer_id: "corp-001".into(),
            payer_name: "TechCorp México S.A.".into(),
            amount: 5000,
            advance_amount: 4500,
            fee_bps: 200,
            status: InvoiceStatus::Funded,
            country: "MX".into(),
            industry: "DESIGN".into(),
            risk_level: RiskLevel::Low,
            due_date: DUE_DATE,
            created_at: CREATED_AT,
            funded_at: Some(FUNDED_AT),
            settled_at: None,
            lender_id: Some(LENDER_ID.into()),
            lender_wallet: Some(lender_wallet.public_key),
            bank_account: Some("CLABE: 012180001234567890".into()),
            tx_hash: None,
            settlement_result: None,
        };
        self.invoices.insert(invoice.id.clone(), invoice);
    }
}
