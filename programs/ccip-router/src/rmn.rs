use anchor_lang::prelude::*;

use crate::instructions::CcipRouterError;

pub const CURSES_SEED: &[u8] = b"curses";

/// Subject that curses every lane at once.
pub const GLOBAL_CURSE_SUBJECT: CurseSubject = CurseSubject([
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
]);

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurseSubject(pub [u8; 16]);

impl CurseSubject {
    pub fn from_chain_selector(chain_selector: u64) -> Self {
        let mut subject = [0u8; 16];
        subject[..8].copy_from_slice(&chain_selector.to_le_bytes());

        Self(subject)
    }
}

/// Curse list kept by the RMN remote program in its curses PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Curses {
    pub version: u8,
    pub cursed_subjects: Vec<CurseSubject>,
}

impl Curses {
    pub fn pda(rmn_remote: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CURSES_SEED], rmn_remote)
    }

    /// Reads the list behind the RMN remote's 8-byte account discriminator. An
    /// account the RMN remote never created holds no curses.
    pub fn try_from_account_info(account: &AccountInfo, rmn_remote: &Pubkey) -> Result<Self> {
        if account.data_is_empty() || account.owner != rmn_remote {
            return Ok(Self::default());
        }

        let data = account.try_borrow_data()?;
        let mut payload = data
            .get(8..)
            .ok_or(CcipRouterError::InvalidRmnRemoteCurses)?;

        Self::deserialize(&mut payload).map_err(|_| CcipRouterError::InvalidRmnRemoteCurses.into())
    }

    pub fn is_cursed(&self, subject: &CurseSubject) -> bool {
        self.cursed_subjects.contains(subject)
    }

    pub fn verify_uncursed(&self, dest_chain_selector: u64) -> Result<()> {
        require!(
            !self.is_cursed(&GLOBAL_CURSE_SUBJECT)
                && !self.is_cursed(&CurseSubject::from_chain_selector(dest_chain_selector)),
            CcipRouterError::SubjectCursed
        );

        Ok(())
    }
}
