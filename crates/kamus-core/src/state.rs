/// Request lifecycle: Idle -> Loading -> {Success, Failed} -> Idle.
///
/// At most one lookup is in flight; a second request while `Loading` is
/// refused, not queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

impl LookupPhase {
    pub fn can_start(self) -> bool {
        !matches!(self, LookupPhase::Loading)
    }
}
