//! In-memory store for the demo backend.
//!
//! Three maps (invoices, reputations, wallets) mutated by the lifecycle
//! operations. Nothing is persisted and nothing is evicted: invoices are
//! never deleted, a cancelled invoice simply stays in its terminal state.
//! Callers supply the current time so every transition is deterministic
//! under test.

mod seed;

use std::collections::HashMap;

use adelanta_chain::{accounts, soroban};
use adelanta_config::AppConfig;
use adelanta_core::constants::{AVERAGE_APY_PERCENT, LENDER_STARTING_BALANCE, MAX_FEE_BPS};
use adelanta_core::error::AdelantaError;
use adelanta_core::math::{advance_amount, settlement_split};
use adelanta_core::reputation;
use adelanta_core::types::{
    Invoice, InvoiceStatus, ProtocolStats, SettlementResult, SmeReputation, Wallet, WalletKind,
};

/// Input for invoice creation, after the API layer has applied defaults.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub sme_id: String,
    pub payer_name: String,
    pub amount: u64,
    /// Due date, unix seconds
    pub due_date: u64,
    pub country: String,
    pub industry: String,
    pub fee_bps: u32,
}

pub struct Store {
    invoices: HashMap<String, Invoice>,
    reputations: HashMap<String, SmeReputation>,
    wallets: HashMap<String, Wallet>,
    advance_bps: u32,
    protocol_fee_bps: u32,
}

impl Store {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            invoices: HashMap::new(),
            reputations: HashMap::new(),
            wallets: HashMap::new(),
            advance_bps: config.advance_bps,
            protocol_fee_bps: config.protocol_fee_bps,
        }
    }

    // ---------------------------------------------------------------- invoices

    /// Create an invoice for an SME, deriving its advance, risk level, and
    /// collection account, and bumping the SME's reputation counters.
    pub fn create_invoice(&mut self, new: NewInvoice, now: u64) -> Result<Invoice, AdelantaError> {
        if new.amount == 0 {
            return Err(AdelantaError::InvalidAmount);
        }
        if new.fee_bps > MAX_FEE_BPS {
            return Err(AdelantaError::InvalidFeeBps);
        }

        let sme_wallet = self.get_or_create_wallet(&new.sme_id, WalletKind::Sme, now);
        let advance = advance_amount(new.amount, self.advance_bps).ok_or(AdelantaError::Overflow)?;
        let risk_level = reputation::risk_level(self.reputations.get(&new.sme_id), new.amount);

        let id = format!("INV-{:03}", self.invoices.len() + 1);
        let bank_account = accounts::collection_account(&new.country, &id);
        let tx = soroban::create_invoice(&id, &new.sme_id, new.amount, now);

        let invoice = Invoice {
            id: id.clone(),
            sme_id: new.sme_id.clone(),
            // Profile lookup is out of scope for the demo; the id doubles
            // as the display name.
            sme_name: new.sme_id.clone(),
            sme_wallet: sme_wallet.public_key,
            payer_id: format!("corp-{now}"),
            payer_name: new.payer_name,
            amount: new.amount,
            advance_amount: advance,
            fee_bps: new.fee_bps,
            status: InvoiceStatus::Created,
            country: new.country,
            industry: new.industry,
            risk_level,
            due_date: new.due_date,
            created_at: now,
            funded_at: None,
            settled_at: None,
            lender_id: None,
            lender_wallet: None,
            bank_account: Some(bank_account),
            tx_hash: Some(tx.tx_hash),
            settlement_result: None,
        };

        self.invoices.insert(id, invoice.clone());

        let rep = self
            .reputations
            .entry(new.sme_id.clone())
            .or_insert_with(|| SmeReputation::new(new.sme_id));
        reputation::record_created(rep);

        Ok(invoice)
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.get(id)
    }

    pub fn all_invoices(&self) -> Vec<Invoice> {
        self.invoices.values().cloned().collect()
    }

    pub fn invoices_by_status(&self, status: InvoiceStatus) -> Vec<Invoice> {
        self.invoices
            .values()
            .filter(|inv| inv.status == status)
            .cloned()
            .collect()
    }

    pub fn invoices_by_sme(&self, sme_id: &str) -> Vec<Invoice> {
        self.invoices
            .values()
            .filter(|inv| inv.sme_id == sme_id)
            .cloned()
            .collect()
    }

    /// Commit a lender's capital to an invoice: advance moves from the
    /// lender wallet to the SME wallet and the invoice locks.
    pub fn fund_invoice(
        &mut self,
        id: &str,
        lender_id: &str,
        now: u64,
    ) -> Result<Invoice, AdelantaError> {
        let invoice = self.invoices.get(id).ok_or(AdelantaError::InvoiceNotFound)?;
        if invoice.status != InvoiceStatus::Created {
            return Err(AdelantaError::InvoiceNotFundable);
        }
        if now > invoice.due_date {
            return Err(AdelantaError::InvoiceExpired);
        }

        let advance = invoice.advance_amount;
        let sme_id = invoice.sme_id.clone();

        let lender_wallet = self.get_or_create_wallet(lender_id, WalletKind::Lender, now);
        soroban::fund_invoice(id, lender_id, advance, now);

        let invoice = self.invoices.get_mut(id).ok_or(AdelantaError::InvoiceNotFound)?;
        invoice.status = InvoiceStatus::Funded;
        invoice.funded_at = Some(now);
        invoice.lender_id = Some(lender_id.to_string());
        invoice.lender_wallet = Some(lender_wallet.public_key);
        let funded = invoice.clone();

        self.credit_wallet(&sme_id, advance as i64);
        self.credit_wallet(lender_id, -(advance as i64));

        Ok(funded)
    }

    /// Record a payer's payment and distribute it.
    ///
    /// `amount_received` defaults to the face amount. Rejected, with no
    /// state change, unless the invoice is funded and the payment covers
    /// the face amount.
    pub fn settle_invoice(
        &mut self,
        id: &str,
        amount_received: Option<u64>,
        now: u64,
    ) -> Result<Invoice, AdelantaError> {
        let invoice = self.invoices.get(id).ok_or(AdelantaError::InvoiceNotFound)?;
        match invoice.status {
            InvoiceStatus::Funded => {}
            InvoiceStatus::Settled => return Err(AdelantaError::InvoiceAlreadySettled),
            _ => return Err(AdelantaError::InvoiceNotFunded),
        }

        let received = amount_received.unwrap_or(invoice.amount);
        let split = settlement_split(
            invoice.amount,
            invoice.advance_amount,
            invoice.fee_bps,
            self.protocol_fee_bps,
            received,
        )?;

        let sme_id = invoice.sme_id.clone();
        let lender_id = invoice.lender_id.clone().ok_or(AdelantaError::InvoiceNotFunded)?;
        let amount = invoice.amount;
        let created_at = invoice.created_at;
        let due_date = invoice.due_date;

        let tx = soroban::settle_invoice(id, received, now);

        let invoice = self.invoices.get_mut(id).ok_or(AdelantaError::InvoiceNotFound)?;
        invoice.status = InvoiceStatus::Settled;
        invoice.settled_at = Some(now);
        invoice.settlement_result = Some(SettlementResult {
            invoice_id: id.to_string(),
            lender_amount: split.lender_amount,
            sme_amount: split.sme_amount,
            protocol_fee: split.protocol_fee,
            total_received: received,
            timestamp: now,
            tx_hash: Some(tx.tx_hash),
        });
        let settled = invoice.clone();

        self.credit_wallet(&sme_id, split.sme_amount as i64);
        self.credit_wallet(&lender_id, split.lender_amount as i64);

        if let Some(rep) = self.reputations.get_mut(&sme_id) {
            reputation::record_settled(rep, amount, created_at, due_date, now);
        }

        Ok(settled)
    }

    /// Cancel an invoice that has not been funded yet.
    pub fn cancel_invoice(&mut self, id: &str, now: u64) -> Result<Invoice, AdelantaError> {
        let invoice = self.invoices.get_mut(id).ok_or(AdelantaError::InvoiceNotFound)?;
        if invoice.status != InvoiceStatus::Created {
            return Err(AdelantaError::InvoiceNotCancellable);
        }

        soroban::cancel_invoice(id, now);
        invoice.status = InvoiceStatus::Cancelled;
        Ok(invoice.clone())
    }

    // ------------------------------------------------------- reputation/wallets

    pub fn reputation(&self, sme_id: &str) -> Option<&SmeReputation> {
        self.reputations.get(sme_id)
    }

    pub fn wallet(&self, id: &str) -> Option<&Wallet> {
        self.wallets.get(id)
    }

    /// Fetch a wallet, fabricating one on first sight. Lenders start with
    /// demo capital; everyone else starts empty.
    pub fn get_or_create_wallet(&mut self, id: &str, kind: WalletKind, now: u64) -> Wallet {
        self.wallets
            .entry(id.to_string())
            .or_insert_with(|| Wallet {
                public_key: accounts::demo_public_key(kind, id, now),
                balance: match kind {
                    WalletKind::Lender => LENDER_STARTING_BALANCE,
                    _ => 0,
                },
                kind,
            })
            .clone()
    }

    fn credit_wallet(&mut self, id: &str, delta: i64) {
        if let Some(wallet) = self.wallets.get_mut(id) {
            wallet.balance += delta;
        }
    }

    // ------------------------------------------------------------------- stats

    pub fn stats(&self) -> ProtocolStats {
        let invoices: Vec<&Invoice> = self.invoices.values().collect();

        let funded_volume: u64 = invoices
            .iter()
            .filter(|inv| {
                matches!(inv.status, InvoiceStatus::Funded | InvoiceStatus::Settled)
            })
            .map(|inv| inv.advance_amount)
            .sum();
        let settled_volume: u64 = invoices
            .iter()
            .filter(|inv| inv.status == InvoiceStatus::Settled)
            .map(|inv| inv.amount)
            .sum();

        let mut smes: Vec<&str> = invoices.iter().map(|inv| inv.sme_id.as_str()).collect();
        smes.sort_unstable();
        smes.dedup();

        let count_with = |status: InvoiceStatus| {
            invoices.iter().filter(|inv| inv.status == status).count() as u64
        };

        ProtocolStats {
            total_invoices: invoices.len() as u64,
            total_volume_funded: funded_volume,
            total_volume_settled: settled_volume,
            active_invoices: count_with(InvoiceStatus::Funded),
            pending_invoices: count_with(InvoiceStatus::Created),
            total_funded: funded_volume,
            average_apy: AVERAGE_APY_PERCENT,
            total_smes: smes.len() as u64,
        }
    }

    /// Advance and protocol-fee rates this store was configured with.
    pub fn rates(&self) -> (u32, u32) {
        (self.advance_bps, self.protocol_fee_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adelanta_core::types::RiskLevel;

    const NOW: u64 = 1_750_000_000;
    const DUE: u64 = NOW + 30 * 86_400;

    fn store() -> Store {
        Store::new(&AppConfig::default())
    }

    fn new_invoice(amount: u64) -> NewInvoice {
        NewInvoice {
            sme_id: "sme-1".into(),
            payer_name: "TechCorp".into(),
            amount,
            due_date: DUE,
            country: "MX".into(),
            industry: "DESIGN".into(),
            fee_bps: 200,
        }
    }

    #[test]
    fn create_derives_advance_risk_and_account() {
        let mut store = store();
        let invoice = store.create_invoice(new_invoice(5000), NOW).unwrap();

        assert_eq!(invoice.id, "INV-001");
        assert_eq!(invoice.status, InvoiceStatus::Created);
        assert_eq!(invoice.advance_amount, 4500);
        assert_eq!(invoice.risk_level, RiskLevel::Medium);
        assert!(invoice.bank_account.as_deref().unwrap().starts_with("CLABE: "));
        assert!(invoice.tx_hash.is_some());

        // SME wallet and reputation entry exist now.
        assert_eq!(store.wallet("sme-1").unwrap().balance, 0);
        assert_eq!(store.reputation("sme-1").unwrap().total_invoices, 1);
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = store();
        store.create_invoice(new_invoice(1000), NOW).unwrap();
        let second = store.create_invoice(new_invoice(2000), NOW).unwrap();
        assert_eq!(second.id, "INV-002");
    }

    #[test]
    fn create_rejects_zero_amount_and_fee_above_cap() {
        let mut store = store();
        assert_eq!(
            store.create_invoice(new_invoice(0), NOW).unwrap_err(),
            AdelantaError::InvalidAmount
        );

        let mut over_fee = new_invoice(1000);
        over_fee.fee_bps = 1001;
        assert_eq!(
            store.create_invoice(over_fee, NOW).unwrap_err(),
            AdelantaError::InvalidFeeBps
        );
    }

    #[test]
    fn large_invoice_from_unknown_sme_is_high_risk() {
        let mut store = store();
        let invoice = store.create_invoice(new_invoice(20_000), NOW).unwrap();
        assert_eq!(invoice.risk_level, RiskLevel::High);
    }

    #[test]
    fn fund_moves_advance_between_wallets() {
        let mut store = store();
        let created = store.create_invoice(new_invoice(5000), NOW).unwrap();
        let funded = store.fund_invoice(&created.id, "lender-1", NOW + 60).unwrap();

        assert_eq!(funded.status, InvoiceStatus::Funded);
        assert_eq!(funded.funded_at, Some(NOW + 60));
        assert_eq!(funded.lender_id.as_deref(), Some("lender-1"));

        assert_eq!(store.wallet("sme-1").unwrap().balance, 4500);
        // Lender started with the demo 50k.
        assert_eq!(store.wallet("lender-1").unwrap().balance, 50_000 - 4500);
    }

    #[test]
    fn fund_rejects_wrong_status_and_expiry() {
        let mut store = store();
        let created = store.create_invoice(new_invoice(5000), NOW).unwrap();

        assert_eq!(
            store.fund_invoice(&created.id, "lender-1", DUE + 1).unwrap_err(),
            AdelantaError::InvoiceExpired
        );

        store.fund_invoice(&created.id, "lender-1", NOW).unwrap();
        assert_eq!(
            store.fund_invoice(&created.id, "lender-2", NOW).unwrap_err(),
            AdelantaError::InvoiceNotFundable
        );
        assert_eq!(
            store.fund_invoice("INV-999", "lender-1", NOW).unwrap_err(),
            AdelantaError::InvoiceNotFound
        );
    }

    #[test]
    fn settle_distributes_and_updates_reputation() {
        let mut store = store();
        let created = store.create_invoice(new_invoice(5000), NOW).unwrap();
        store.fund_invoice(&created.id, "lender-1", NOW).unwrap();
        let settled = store
            .settle_invoice(&created.id, None, NOW + 86_400)
            .unwrap();

        assert_eq!(settled.status, InvoiceStatus::Settled);
        let result = settled.settlement_result.unwrap();
        assert_eq!(result.lender_amount, 4590);
        assert_eq!(result.protocol_fee, 25);
        assert_eq!(result.sme_amount, 385);
        assert_eq!(result.total_received, 5000);
        assert!(result.tx_hash.is_some());

        // advance + remainder for the SME, principal + fee back to lender
        assert_eq!(store.wallet("sme-1").unwrap().balance, 4500 + 385);
        assert_eq!(store.wallet("lender-1").unwrap().balance, 50_000 - 4500 + 4590);

        let rep = store.reputation("sme-1").unwrap();
        assert_eq!(rep.settled_invoices, 1);
        assert_eq!(rep.total_volume, 5000);
        assert_eq!(rep.avg_settlement_days, 1);
        assert_eq!(rep.risk_score, 199);
    }

    #[test]
    fn settle_rejects_without_funding_or_with_short_payment() {
        let mut store = store();
        let created = store.create_invoice(new_invoice(5000), NOW).unwrap();

        assert_eq!(
            store.settle_invoice(&created.id, None, NOW).unwrap_err(),
            AdelantaError::InvoiceNotFunded
        );

        store.fund_invoice(&created.id, "lender-1", NOW).unwrap();
        assert_eq!(
            store.settle_invoice(&created.id, Some(4999), NOW).unwrap_err(),
            AdelantaError::InsufficientSettlement
        );

        // Rejection left the invoice funded and wallets untouched.
        assert_eq!(
            store.invoice(&created.id).unwrap().status,
            InvoiceStatus::Funded
        );
        assert_eq!(store.wallet("sme-1").unwrap().balance, 4500);

        store.settle_invoice(&created.id, None, NOW).unwrap();
        assert_eq!(
            store.settle_invoice(&created.id, None, NOW).unwrap_err(),
            AdelantaError::InvoiceAlreadySettled
        );
    }

    #[test]
    fn overpayment_remainder_goes_to_the_sme() {
        let mut store = store();
        let created = store.create_invoice(new_invoice(5000), NOW).unwrap();
        store.fund_invoice(&created.id, "lender-1", NOW).unwrap();
        let settled = store.settle_invoice(&created.id, Some(5200), NOW).unwrap();

        let result = settled.settlement_result.unwrap();
        assert_eq!(result.sme_amount, 585);
        assert_eq!(
            result.lender_amount + result.protocol_fee + result.sme_amount,
            5200
        );
    }

    #[test]
    fn cancel_only_before_funding() {
        let mut store = store();
        let first = store.create_invoice(new_invoice(1000), NOW).unwrap();
        let cancelled = store.cancel_invoice(&first.id, NOW).unwrap();
        assert_eq!(cancelled.status, InvoiceStatus::Cancelled);

        let second = store.create_invoice(new_invoice(1000), NOW).unwrap();
        store.fund_invoice(&second.id, "lender-1", NOW).unwrap();
        assert_eq!(
            store.cancel_invoice(&second.id, NOW).unwrap_err(),
            AdelantaError::InvoiceNotCancellable
        );
    }

    #[test]
    fn status_and_sme_filters() {
        let mut store = store();
        let a = store.create_invoice(new_invoice(1000), NOW).unwrap();
        let mut other = new_invoice(2000);
        other.sme_id = "sme-2".into();
        store.create_invoice(other, NOW).unwrap();
        store.fund_invoice(&a.id, "lender-1", NOW).unwrap();

        assert_eq!(store.invoices_by_status(InvoiceStatus::Created).len(), 1);
        assert_eq!(store.invoices_by_status(InvoiceStatus::Funded).len(), 1);
        assert_eq!(store.invoices_by_sme("sme-2").len(), 1);
        assert_eq!(store.all_invoices().len(), 2);
    }

    #[test]
    fn stats_aggregate_the_book() {
        let mut store = store();
        let a = store.create_invoice(new_invoice(5000), NOW).unwrap();
        let mut other = new_invoice(2000);
        other.sme_id = "sme-2".into();
        let b = store.create_invoice(other, NOW).unwrap();
        store.create_invoice(new_invoice(700), NOW).unwrap();

        store.fund_invoice(&a.id, "lender-1", NOW).unwrap();
        store.fund_invoice(&b.id, "lender-1", NOW).unwrap();
        store.settle_invoice(&a.id, None, NOW).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_invoices, 3);
        assert_eq!(stats.total_volume_funded, 4500 + 1800);
        assert_eq!(stats.total_volume_settled, 5000);
        assert_eq!(stats.active_invoices, 1);
        assert_eq!(stats.pending_invoices, 1);
        assert_eq!(stats.total_funded, stats.total_volume_funded);
        assert_eq!(stats.average_apy, 10);
        assert_eq!(stats.total_smes, 2);
    }
}
