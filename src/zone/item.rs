//! A single claimed RR plus its probe-state machine (`spec.md` §3, §4.2).

use std::sync::Arc;

use crate::coordinator::ProbeHandle;
use crate::record::ResourceRecord;

/// A stable handle identifying one [`super::ZoneItem`] within its [`super::Zone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub(crate) u64);

/// `PROBING` (not yet confirmed unique), `ESTABLISHED` (confirmed, served and
/// announced), `VERIFYING` (re-probing an established record after a
/// suspected conflict; still served), `WITHDRAWN` (terminal; no longer
/// served).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Probing,
    Established,
    Verifying,
    Withdrawn,
}

impl ItemState {
    /// Visible to [`super::Zone::lookup`] iff in one of these three states.
    pub fn is_visible(self) -> bool {
        matches!(
            self,
            ItemState::Probing | ItemState::Established | ItemState::Verifying
        )
    }
}

pub struct ZoneItem {
    pub(crate) rr: Arc<ResourceRecord>,
    pub(crate) state: ItemState,
    pub(crate) probing_enabled: bool,
    pub(crate) probe_transaction: Option<ProbeHandle>,
    /// Suppresses reentrant `notify` calls while `attach` is starting a
    /// transaction synchronously (`spec.md` §4.2 "block_ready guard").
    pub(crate) block_ready: u32,
}

impl ZoneItem {
    pub(crate) fn new(rr: Arc<ResourceRecord>, state: ItemState, probing_enabled: bool) -> Self {
        ZoneItem {
            rr,
            state,
            probing_enabled,
            probe_transaction: None,
            block_ready: 0,
        }
    }
}
