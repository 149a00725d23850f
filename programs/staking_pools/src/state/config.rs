use anchor_lang::prelude::*;

use crate::auth::{Authorizer, Role};
use crate::constants::CURRENT_SCHEMA_VERSION;
use crate::error::StakingError;

/// Program-wide settings: role holders, treasury, pause flag and pool counter.
#[account]
pub struct Config {
    pub authority: Pubkey,
    pub pool_manager: Pubkey,
    pub guardian: Pubkey,
    /// Wallet that owns the penalty sink token accounts.
    pub treasury: Pubkey,

    pub paused: bool,
    pub pool_count: u64,

    pub schema_version: u8,
    pub bump: u8,
    pub _reserved: [u8; 64],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            authority: Pubkey::default(),
            pool_manager: Pubkey::default(),
            guardian: Pubkey::default(),
            treasury: Pubkey::default(),
            paused: false,
            pool_count: 0,
            schema_version: 0,
            bump: 0,
            _reserved: [0u8; 64],
        }
    }
}

impl Config {
    pub const LEN: usize = 8 + (32 * 4) + 1 + 8 + 1 + 1 + 64;

    pub fn role_member(&self, role: Role) -> Pubkey {
        match role {
            Role::Authority => self.authority,
            Role::PoolManager => self.pool_manager,
            Role::Guardian => self.guardian,
        }
    }

    pub fn set_role_member(&mut self, role: Role, member: Pubkey) -> Result<()> {
        require!(member != Pubkey::default(), StakingError::InvalidAuthority);
        match role {
            Role::Authority => self.authority = member,
            Role::PoolManager => self.pool_manager = member,
            Role::Guardian => self.guardian = member,
        }
        Ok(())
    }

    /// Hands out the next sequential pool id.
    pub fn next_pool_id(&mut self) -> Result<u64> {
        let id = self.pool_count;
        self.pool_count = self
            .pool_count
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(id)
    }

    /// Advances the schema to the current version, returning the previous one.
    pub fn migrate(&mut self) -> Result<u8> {
        require!(
            self.schema_version < CURRENT_SCHEMA_VERSION,
            StakingError::SchemaUpToDate
        );
        let previous = self.schema_version;
        self.schema_version = CURRENT_SCHEMA_VERSION;
        Ok(previous)
    }
}

impl Authorizer for Config {
    fn has_role(&self, caller: &Pubkey, role: Role) -> bool {
        let member = self.role_member(role);
        member != Pubkey::default() && member == *caller
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_roles() -> (Config, Pubkey, Pubkey, Pubkey) {
        let authority = Pubkey::new_unique();
        let manager = Pubkey::new_unique();
        let guardian = Pubkey::new_unique();
        let config = Config {
            authority,
            pool_manager: manager,
            guardian,
            ..Config::default()
        };
        (config, authority, manager, guardian)
    }

    #[test]
    fn roles_are_distinct_from_ownership() {
        let (config, authority, manager, guardian) = config_with_roles();

        assert!(config.require_role(&manager, Role::PoolManager).is_ok());
        assert!(config.require_role(&guardian, Role::Guardian).is_ok());
        assert_eq!(
            config.require_role(&authority, Role::PoolManager).unwrap_err(),
            StakingError::Unauthorized.into()
        );
        assert_eq!(
            config.require_role(&manager, Role::Guardian).unwrap_err(),
            StakingError::Unauthorized.into()
        );
    }

    #[test]
    fn unset_role_matches_nobody() {
        let config = Config::default();
        assert!(!config.has_role(&Pubkey::default(), Role::Authority));
    }

    #[test]
    fn set_role_rejects_default_pubkey() {
        let (mut config, ..) = config_with_roles();
        assert_eq!(
            config
                .set_role_member(Role::Guardian, Pubkey::default())
                .unwrap_err(),
            StakingError::InvalidAuthority.into()
        );
        let next = Pubkey::new_unique();
        config.set_role_member(Role::Guardian, next).unwrap();
        assert!(config.has_role(&next, Role::Guardian));
    }

    #[test]
    fn pause_gate() {
        let (mut config, ..) = config_with_roles();
        assert!(config.require_not_paused().is_ok());
        config.paused = true;
        assert_eq!(
            config.require_not_paused().unwrap_err(),
            StakingError::Paused.into()
        );
    }

    #[test]
    fn pool_ids_are_sequential() {
        let mut config = Config::default();
        assert_eq!(config.next_pool_id().unwrap(), 0);
        assert_eq!(config.next_pool_id().unwrap(), 1);
        assert_eq!(config.pool_count, 2);
    }

    #[test]
    fn migrate_advances_once() {
        let mut config = Config::default();
        assert_eq!(config.migrate().unwrap(), 0);
        assert_eq!(config.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(
            config.migrate().unwrap_err(),
            StakingError::SchemaUpToDate.into()
        );
    }
}
