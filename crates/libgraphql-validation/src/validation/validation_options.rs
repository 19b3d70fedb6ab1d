/// Which definition wins when a document defines several fragments with
/// the same name.
///
/// Reporting the collision itself is left to other rules; this only
/// decides which definition fragment spreads resolve to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DuplicateFragmentPolicy {
    KeepFirst,
    #[default]
    KeepLast,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationOptions {
    pub duplicate_fragment_policy: DuplicateFragmentPolicy,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicate_fragment_policy(mut self, policy: DuplicateFragmentPolicy) -> Self {
        self.duplicate_fragment_policy = policy;
        self
    }
}
