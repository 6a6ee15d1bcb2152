//! Instruction-level tests against the compiled program.
//!
//! These load `target/deploy/violation_ledger.so`, so they are ignored by a
//! plain `cargo test`; `anchor test` builds the program and runs them with
//! `--include-ignored`.

use anchor_lang::{
    prelude::Pubkey as ProgramKey, system_program::System, AccountDeserialize, AnchorDeserialize,
    Discriminator, Id, InstructionData, ToAccountMetas,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use litesvm::{
    types::{FailedTransactionMetadata, TransactionMetadata, TransactionResult},
    LiteSVM,
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};
use violation_ledger::{
    accounts,
    constants::{LEDGER_SEED, REPORTER_SEED, TYPE_REGISTRY_SEED, VIOLATION_SEED, VIOLATION_TYPE_SEED},
    instruction, FundsWithdrawn, LedgerError, LedgerState, PaymentStatus, PaymentSubmitted,
    ReporterIndex, Violation, ViolationInfo, ViolationProcessed, ViolationReported,
};

const PROGRAM_SO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/violation_ledger.so");
const SOL: u64 = 1_000_000_000;
const BASE_FINES: [u64; 5] = [100_000, 50_000, 200_000, 75_000, 150_000];

fn program_id() -> Pubkey {
    Pubkey::new_from_array(violation_ledger::ID.to_bytes())
}

fn program_key(key: &Pubkey) -> ProgramKey {
    ProgramKey::new_from_array(key.to_bytes())
}

fn pda(seeds: &[&[u8]]) -> Pubkey {
    Pubkey::find_program_address(seeds, &program_id()).0
}

fn ledger_address() -> Pubkey {
    pda(&[LEDGER_SEED])
}

fn violation_address(id: u64) -> Pubkey {
    pda(&[VIOLATION_SEED, &id.to_le_bytes()])
}

fn reporter_address(reporter: &Pubkey) -> Pubkey {
    pda(&[REPORTER_SEED, reporter.as_ref()])
}

fn ledger_ix(accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
    let accounts = accounts
        .to_account_metas(None)
        .into_iter()
        .map(|meta| AccountMeta {
            pubkey: Pubkey::new_from_array(meta.pubkey.to_bytes()),
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        })
        .collect();
    Instruction {
        program_id: program_id(),
        accounts,
        data: data.data(),
    }
}

/// Return data may arrive with trailing zero bytes trimmed.
fn returned<T: AnchorDeserialize>(meta: &TransactionMetadata) -> T {
    let mut data = meta.return_data.data.clone();
    data.resize(1024, 0);
    T::deserialize(&mut data.as_slice()).unwrap()
}

fn events<T: AnchorDeserialize + Discriminator>(meta: &TransactionMetadata) -> Vec<T> {
    meta.logs
        .iter()
        .filter_map(|line| line.strip_prefix("Program data: "))
        .filter_map(|encoded| STANDARD.decode(encoded).ok())
        .filter(|bytes| bytes.len() >= 8 && &bytes[..8] == T::DISCRIMINATOR)
        .map(|bytes| T::deserialize(&mut &bytes[8..]).unwrap())
        .collect()
}

fn ledger_error(result: TransactionResult) -> u32 {
    match result {
        Err(FailedTransactionMetadata {
            err: TransactionError::InstructionError(_, InstructionError::Custom(code)),
            ..
        }) => code,
        Err(failed) => panic!("unexpected failure: {:?}", failed.err),
        Ok(_) => panic!("transaction unexpectedly succeeded"),
    }
}

fn code(error: LedgerError) -> u32 {
    u32::from(error)
}

struct Chain {
    svm: LiteSVM,
    fee_payer: Keypair,
    admin: Keypair,
}

impl Chain {
    fn new() -> Self {
        let mut svm = LiteSVM::new();
        svm.add_program_from_file(program_id(), PROGRAM_SO).unwrap();

        let fee_payer = Keypair::new();
        let admin = Keypair::new();
        svm.airdrop(&fee_payer.pubkey(), 10 * SOL).unwrap();
        svm.airdrop(&admin.pubkey(), 10 * SOL).unwrap();

        let mut chain = Self { svm, fee_payer, admin };
        let init = ledger_ix(
            accounts::Initialize {
                admin: program_key(&chain.admin.pubkey()),
                ledger: program_key(&ledger_address()),
                system_program: System::id(),
            },
            instruction::Initialize {
                base_fines: Some(BASE_FINES),
            },
        );
        let admin = chain.admin.insecure_clone();
        chain.send(init, &[&admin]).unwrap();
        chain
    }

    fn send(&mut self, instruction: Instruction, signers: &[&Keypair]) -> TransactionResult {
        let mut all: Vec<&Keypair> = vec![&self.fee_payer];
        all.extend_from_slice(signers);
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&self.fee_payer.pubkey()),
            all.as_slice(),
            self.svm.latest_blockhash(),
        );
        let result = self.svm.send_transaction(transaction);
        self.svm.expire_blockhash();
        result
    }

    fn funded(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.svm.airdrop(&keypair.pubkey(), 10 * SOL).unwrap();
        keypair
    }

    fn balance(&self, address: &Pubkey) -> u64 {
        self.svm.get_balance(address).unwrap_or_default()
    }

    fn account<T: AccountDeserialize>(&self, address: &Pubkey) -> T {
        let account = self.svm.get_account(address).unwrap();
        T::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    fn data_len(&self, address: &Pubkey) -> usize {
        self.svm.get_account(address).map(|account| account.data.len()).unwrap_or_default()
    }

    fn report(&mut self, reporter: &Keypair, kind: u8, severity: u8, location: &str) -> TransactionResult {
        let next_id = self.account::<LedgerState>(&ledger_address()).violation_count + 1;
        let ix = ledger_ix(
            accounts::ReportViolation {
                reporter: program_key(&reporter.pubkey()),
                ledger: program_key(&ledger_address()),
                violation: program_key(&violation_address(next_id)),
                reporter_index: program_key(&reporter_address(&reporter.pubkey())),
                system_program: System::id(),
            },
            instruction::ReportViolation {
                license_plate: [0x5A; 32],
                kind,
                severity,
                is_repeat_offender: false,
                location: location.to_string(),
            },
        );
        self.send(ix, &[reporter])
    }

    fn submit_payment(&mut self, payer: &Keypair, violation_id: u64, amount: u64) -> TransactionResult {
        let ix = ledger_ix(
            accounts::SubmitPayment {
                payer: program_key(&payer.pubkey()),
                ledger: program_key(&ledger_address()),
                violation: program_key(&violation_address(violation_id)),
                system_program: System::id(),
            },
            instruction::SubmitPayment {
                violation_id,
                payment_reference: [0x22; 32],
                amount,
            },
        );
        self.send(ix, &[payer])
    }

    fn process_payment(&mut self, violation_id: u64) -> TransactionResult {
        let admin = self.admin.insecure_clone();
        let ix = ledger_ix(
            accounts::ProcessPayment {
                admin: program_key(&admin.pubkey()),
                ledger: program_key(&ledger_address()),
                violation: program_key(&violation_address(violation_id)),
            },
            instruction::ProcessPayment { violation_id },
        );
        self.send(ix, &[&admin])
    }

    fn withdraw(&mut self) -> TransactionResult {
        let admin = self.admin.insecure_clone();
        let ix = ledger_ix(
            accounts::Withdraw {
                admin: program_key(&admin.pubkey()),
                ledger: program_key(&ledger_address()),
            },
            instruction::Withdraw {},
        );
        self.send(ix, &[&admin])
    }

    fn toggle_pause(&mut self) -> TransactionResult {
        let admin = self.admin.insecure_clone();
        let ix = ledger_ix(
            accounts::ManageLedger {
                authority: program_key(&admin.pubkey()),
                ledger: program_key(&ledger_address()),
            },
            instruction::TogglePause {},
        );
        self.send(ix, &[&admin])
    }

    fn add_pauser(&mut self, pauser: &Pubkey) -> TransactionResult {
        let admin = self.admin.insecure_clone();
        let ix = ledger_ix(
            accounts::AddPauser {
                authority: program_key(&admin.pubkey()),
                ledger: program_key(&ledger_address()),
                system_program: System::id(),
            },
            instruction::AddPauser {
                pauser: program_key(pauser),
            },
        );
        self.send(ix, &[&admin])
    }

    fn violation_info(&mut self, violation_id: u64) -> TransactionResult {
        let ix = ledger_ix(
            accounts::ReadViolation {
                ledger: program_key(&ledger_address()),
                violation: program_key(&violation_address(violation_id)),
            },
            instruction::GetViolationInfo { violation_id },
        );
        self.send(ix, &[])
    }

    fn payment_status(&mut self, violation_id: u64) -> TransactionResult {
        let ix = ledger_ix(
            accounts::ReadViolation {
                ledger: program_key(&ledger_address()),
                violation: program_key(&violation_address(violation_id)),
            },
            instruction::GetPaymentStatus { violation_id },
        );
        self.send(ix, &[])
    }

    fn reporter_violations(&mut self, reporter: &Pubkey, offset: u32) -> Vec<u64> {
        let ix = ledger_ix(
            accounts::ReadReporterViolations {
                reporter_index: program_key(&reporter_address(reporter)),
            },
            instruction::GetReporterViolationsPage {
                reporter: program_key(reporter),
                offset,
            },
        );
        returned(&self.send(ix, &[]).unwrap())
    }

    fn pauser_count(&mut self) -> u64 {
        let ix = ledger_ix(
            accounts::ReadLedger {
                ledger: program_key(&ledger_address()),
            },
            instruction::PauserCount {},
        );
        returned(&self.send(ix, &[]).unwrap())
    }
}

#[test]
#[ignore = "needs target/deploy/violation_ledger.so from `anchor build`"]
fn report_pay_process_withdraw_moves_lamports() {
    let mut chain = Chain::new();
    let reporter = chain.funded();
    let driver = chain.funded();
    let ledger = ledger_address();

    let reported = chain.report(&reporter, 2, 30, "Lot A").unwrap();
    assert_eq!(returned::<u64>(&reported), 1);
    let event = &events::<ViolationReported>(&reported)[0];
    assert_eq!(event.sequence, 1);
    assert_eq!(event.violation_id, 1);
    assert_eq!(event.fine_amount, 65_000);
    assert_eq!(event.location, "Lot A");

    let treasury_before = chain.balance(&ledger);
    let driver_before = chain.balance(&driver.pubkey());
    let submitted = chain.submit_payment(&driver, 1, 65_000).unwrap();
    assert_eq!(chain.balance(&ledger), treasury_before + 65_000);
    assert_eq!(chain.balance(&driver.pubkey()), driver_before - 65_000);
    let event = &events::<PaymentSubmitted>(&submitted)[0];
    assert_eq!(event.sequence, 2);
    assert_eq!(event.amount, 65_000);
    assert_eq!(event.payer, program_key(&driver.pubkey()));

    let processed = chain.process_payment(1).unwrap();
    let event = &events::<ViolationProcessed>(&processed)[0];
    assert_eq!(event.sequence, 3);
    assert!(event.is_paid);
    let violation: Violation = chain.account(&violation_address(1));
    assert!(violation.is_paid);
    assert!(violation.is_processed);
    assert!(violation.payment_verified);

    let status: PaymentStatus = returned(&chain.payment_status(1).unwrap());
    assert!(status.is_paid);
    assert_eq!(status.submitted_amount, 65_000);

    let rent_minimum = chain.svm.minimum_balance_for_rent_exemption(chain.data_len(&ledger));
    let admin_before = chain.balance(&chain.admin.pubkey());
    let withdrawn = chain.withdraw().unwrap();
    assert_eq!(chain.balance(&ledger), rent_minimum);
    assert_eq!(chain.balance(&chain.admin.pubkey()), admin_before + 65_000);
    let event = &events::<FundsWithdrawn>(&withdrawn)[0];
    assert_eq!(event.sequence, 4);
    assert_eq!(event.amount, 65_000);

    // An empty treasury withdraws nothing and still succeeds.
    let admin_before = chain.balance(&chain.admin.pubkey());
    let repeated = chain.withdraw().unwrap();
    assert!(events::<FundsWithdrawn>(&repeated).is_empty());
    assert_eq!(chain.balance(&ledger), rent_minimum);
    assert_eq!(chain.balance(&chain.admin.pubkey()), admin_before);

    assert_eq!(
        ledger_error(chain.submit_payment(&driver, 1, 65_000)),
        code(LedgerError::AlreadyProcessed)
    );
    assert_eq!(chain.account::<LedgerState>(&ledger).audit_sequence, 4);
}

#[test]
#[ignore = "needs target/deploy/violation_ledger.so from `anchor build`"]
fn unknown_ids_fail_with_ledger_errors() {
    let mut chain = Chain::new();
    let driver = chain.funded();
    let reporter = chain.funded();
    chain.report(&reporter, 1, 0, "Quay").unwrap();

    let info: ViolationInfo = returned(&chain.violation_info(1).unwrap());
    assert_eq!(info.id, 1);
    assert_eq!(info.location, "Quay");

    let invalid = code(LedgerError::InvalidViolationId);
    assert_eq!(ledger_error(chain.violation_info(999)), invalid);
    assert_eq!(ledger_error(chain.violation_info(0)), invalid);
    assert_eq!(ledger_error(chain.payment_status(999)), invalid);
    assert_eq!(ledger_error(chain.submit_payment(&driver, 999, 10)), invalid);
    assert_eq!(ledger_error(chain.process_payment(999)), invalid);

    chain.toggle_pause().unwrap();
    assert_eq!(
        ledger_error(chain.submit_payment(&driver, 999, 10)),
        code(LedgerError::ContractPaused)
    );
    // Reads are not gated by the pause switch.
    assert_eq!(ledger_error(chain.violation_info(999)), invalid);
}

#[test]
#[ignore = "needs target/deploy/violation_ledger.so from `anchor build`"]
fn unknown_violation_type_fails_with_ledger_error() {
    let mut chain = Chain::new();
    let admin = chain.admin.insecure_clone();
    let registry = pda(&[TYPE_REGISTRY_SEED]);
    let missing_type = pda(&[VIOLATION_TYPE_SEED, &7u16.to_le_bytes()]);

    let init = ledger_ix(
        accounts::InitializeTypeRegistry {
            admin: program_key(&admin.pubkey()),
            type_registry: program_key(&registry),
            system_program: System::id(),
        },
        instruction::InitializeTypeRegistry {},
    );
    chain.send(init, &[&admin]).unwrap();

    let query = ledger_ix(
        accounts::ReadViolationType {
            violation_type: program_key(&missing_type),
        },
        instruction::GetViolationType { type_id: 7 },
    );
    let deactivate = ledger_ix(
        accounts::ManageViolationType {
            admin: program_key(&admin.pubkey()),
            type_registry: program_key(&registry),
            violation_type: program_key(&missing_type),
        },
        instruction::DeactivateViolationType { type_id: 7 },
    );

    let invalid = code(LedgerError::InvalidViolationType);
    assert_eq!(ledger_error(chain.send(query, &[])), invalid);
    assert_eq!(ledger_error(chain.send(deactivate, &[&admin])), invalid);
}

#[test]
#[ignore = "needs target/deploy/violation_ledger.so from `anchor build`"]
fn reporter_index_starts_empty_and_grows_past_forty() {
    let mut chain = Chain::new();
    let reporter = chain.funded();
    let index = reporter_address(&reporter.pubkey());

    assert!(chain.reporter_violations(&reporter.pubkey(), 0).is_empty());

    for expected in 1..=40u64 {
        let reported = chain.report(&reporter, 3, 0, "Ring Rd").unwrap();
        assert_eq!(returned::<u64>(&reported), expected);
    }

    assert_eq!(chain.data_len(&index), ReporterIndex::space_for(40));
    let stored: ReporterIndex = chain.account(&index);
    assert_eq!(stored.reporter, program_key(&reporter.pubkey()));
    assert_eq!(stored.violation_ids, (1..=40).collect::<Vec<u64>>());
    assert!(chain.balance(&index) >= chain.svm.minimum_balance_for_rent_exemption(ReporterIndex::space_for(40)));

    assert_eq!(chain.reporter_violations(&reporter.pubkey(), 0), (1..=40).collect::<Vec<u64>>());
    assert_eq!(chain.reporter_violations(&reporter.pubkey(), 30), (31..=40).collect::<Vec<u64>>());
    assert!(chain.reporter_violations(&Pubkey::new_unique(), 0).is_empty());
}

#[test]
#[ignore = "needs target/deploy/violation_ledger.so from `anchor build`"]
fn pauser_set_grows_with_the_ledger_account() {
    let mut chain = Chain::new();
    let ledger = ledger_address();
    let pausers: Vec<Pubkey> = (0..20).map(|_| Pubkey::new_unique()).collect();

    for pauser in &pausers {
        chain.add_pauser(pauser).unwrap();
    }

    assert_eq!(chain.pauser_count(), 21);
    assert_eq!(chain.data_len(&ledger), LedgerState::space_for(21));
    let state: LedgerState = chain.account(&ledger);
    assert!(state.is_pauser(&program_key(&pausers[19])));
    assert_eq!(
        ledger_error(chain.add_pauser(&pausers[0])),
        code(LedgerError::AlreadyPauser)
    );
}
