//! Token movement capability used by the ledger.
//!
//! The ledger never touches token accounts directly. Deposits go through
//! [`TokenLedger::debit`] and payouts through [`TokenLedger::credit`]; either
//! may fail, and a failure aborts the calling operation.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::STAKE_POOL_SEED;
use crate::error::StakingError;

pub trait TokenLedger {
    /// Pull `amount` from `from` into pool custody.
    fn debit(&mut self, from: &Pubkey, amount: u128) -> Result<()>;

    /// Pay `amount` out of pool custody to `to`.
    fn credit(&mut self, to: &Pubkey, amount: u128) -> Result<()>;
}

/// SPL token transfers between a user's token account and one pool vault.
///
/// Instructions build one of these per call: stake/withdraw use the staking
/// vault, claims use the treasury vault.
pub struct SplVault<'info> {
    pub token_program: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub vault_balance: u64,
    pub holder: Pubkey,
    pub holder_token_account: AccountInfo<'info>,
    pub holder_authority: AccountInfo<'info>,
    pub pool: AccountInfo<'info>,
    pub staking_mint: Pubkey,
    pub pool_bump: u8,
}

impl<'info> SplVault<'info> {
    fn to_token_amount(amount: u128) -> Result<u64> {
        Ok(u64::try_from(amount).map_err(|_| StakingError::ConversionOverflow)?)
    }
}

fn transfer_failed(err: anchor_lang::error::Error) -> anchor_lang::error::Error {
    msg!("Token transfer failed: {}", err);
    StakingError::TransferFailed.into()
}

impl<'info> TokenLedger for SplVault<'info> {
    fn debit(&mut self, from: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(*from, self.holder, StakingError::InvalidStakeOwner);
        let amount = Self::to_token_amount(amount)?;

        let cpi_accounts = Transfer {
            from: self.holder_token_account.clone(),
            to: self.vault.clone(),
            authority: self.holder_authority.clone(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token::transfer(cpi_ctx, amount).map_err(transfer_failed)?;

        self.vault_balance = self
            .vault_balance
            .checked_add(amount)
            .ok_or(StakingError::ArithmeticOverflow)?;
        Ok(())
    }

    fn credit(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(*to, self.holder, StakingError::InvalidStakeOwner);
        let amount = Self::to_token_amount(amount)?;
        require!(self.vault_balance >= amount, StakingError::InsufficientFunds);

        let bump = [self.pool_bump];
        let seeds: &[&[u8]] = &[STAKE_POOL_SEED, self.staking_mint.as_ref(), &bump];
        let signer_seeds = &[seeds];

        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: self.holder_token_account.clone(),
            authority: self.pool.clone(),
        };
        let cpi_ctx =
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, amount).map_err(transfer_failed)?;

        self.vault_balance -= amount;
        Ok(())
    }
}
