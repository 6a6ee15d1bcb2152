//! Loading and growing accounts outside Anchor's typed wrappers.
//!
//! Violation, violation type and reporter index PDAs are passed unchecked, so
//! a record that was never created surfaces as a ledger error (or an empty
//! result) instead of a framework one.

use anchor_lang::{prelude::*, system_program};

use crate::error::LedgerError;

/// Deserialize a program-owned account. An empty PDA maps to `missing`.
pub fn load<T: AccountDeserialize>(info: &AccountInfo, missing: LedgerError) -> Result<T> {
    load_optional(info)?.ok_or_else(|| missing.into())
}

/// Deserialize a program-owned account, or `None` if it was never created.
pub fn load_optional<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    let data = info.try_borrow_data()?;
    decode(&data, info.owner)
}

pub fn decode<T: AccountDeserialize>(data: &[u8], owner: &Pubkey) -> Result<Option<T>> {
    if data.is_empty() {
        return Ok(None);
    }
    require_keys_eq!(
        *owner,
        crate::ID,
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Write `value` back, discriminator first.
pub fn store<T: AccountSerialize>(value: &T, info: &AccountInfo) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    encode(value, &mut data)
}

pub fn encode<T: AccountSerialize>(value: &T, data: &mut [u8]) -> Result<()> {
    let mut writer: &mut [u8] = data;
    value.try_serialize(&mut writer)
}

/// Make sure the PDA `target` is a program account of at least `space`
/// bytes. It is created on first use and grown afterwards, with `payer`
/// covering the rent either way.
pub fn ensure_space<'info>(
    target: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent_minimum = Rent::get()?.minimum_balance(space);

    if target.data_is_empty() {
        if target.lamports() == 0 {
            system_program::create_account(
                CpiContext::new_with_signer(
                    system_program.clone(),
                    system_program::CreateAccount {
                        from: payer.clone(),
                        to: target.clone(),
                    },
                    &[signer_seeds],
                ),
                rent_minimum,
                space as u64,
                &crate::ID,
            )?;
            return Ok(());
        }

        // The address was funded before it was created.
        top_up(target, payer, system_program, rent_minimum)?;
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                system_program::Allocate {
                    account_to_allocate: target.clone(),
                },
                &[signer_seeds],
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                system_program::Assign {
                    account_to_assign: target.clone(),
                },
                &[signer_seeds],
            ),
            &crate::ID,
        )?;
        return Ok(());
    }

    if target.data_len() >= space {
        return Ok(());
    }
    top_up(target, payer, system_program, rent_minimum)?;
    target.resize(space)?;
    Ok(())
}

fn top_up<'info>(
    target: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    required: u64,
) -> Result<()> {
    let shortfall = required.saturating_sub(target.lamports());
    if shortfall == 0 {
        return Ok(());
    }
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            system_program::Transfer {
                from: payer.clone(),
                to: target.clone(),
            },
        ),
        shortfall,
    )
}
