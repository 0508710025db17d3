/// What the running range does when extending it ties with restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocalTie {
    /// Keep extending; only a strictly better restart starts a new range.
    #[default]
    Extend,
    /// Restart at the current element unless extending is strictly better.
    Restart,
}

/// What the best-so-far range does when the running range ties with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlobalTie {
    /// The first maximal range found wins.
    #[default]
    KeepFirst,
    /// The latest maximal range found wins.
    TakeLatest,
}

/// Tie-break configuration for [`MaxSubarrayFinder`](super::MaxSubarrayFinder).
///
/// The default configuration extends on local ties and keeps the first
/// global maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KadaneConfig {
    /// Policy when extending and restarting yield equal sums
    pub local_tie: LocalTie,
    /// Policy when a new range equals the best sum seen so far
    pub global_tie: GlobalTie,
}

impl KadaneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn local_tie(mut self, policy: LocalTie) -> Self {
        self.local_tie = policy;
        self
    }

    pub fn global_tie(mut self, policy: GlobalTie) -> Self {
        self.global_tie = policy;
        self
    }
}
