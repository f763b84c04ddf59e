use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

/// Anchor-style 8 byte selector, `sha256("<namespace>:<name>")[..8]`
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    sighash
}

/// Close a program-owned account, sending its lamports to `destination`.
/// The data is wiped so a stale discriminator never survives the close.
pub fn close_account<'info>(
    source: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    source.try_borrow_mut_data()?.fill(0);
    // Same steps as anchor-lang's `common::close`, which is private in 0.31.
    let dest_starting_lamports = destination.lamports();
    **destination.try_borrow_mut_lamports()? = dest_starting_lamports
        .checked_add(source.lamports())
        .ok_or(ProgramError::ArithmeticOverflow)?;
    **source.try_borrow_mut_lamports()? = 0;

    source.assign(&anchor_lang::solana_program::system_program::ID);
    source.resize(0).map_err(Into::into)
}
