use std::fmt::{Display, Formatter, Result as FmtResult};

use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact, serializable identifier for a vocabulary phrase type.
///
/// Wraps a 64-bit FNV-1a hash of the type name, so identifiers can be
/// declared as constants and stored without carrying the name around.
///
/// # Example
///
/// ```
/// use slovo::PhraseTypeId;
///
/// const HERO_HIT: PhraseTypeId = PhraseTypeId::from_name("action_hit");
/// assert_eq!(HERO_HIT, PhraseTypeId::from_name("action_hit"));
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PhraseTypeId(u64);

impl PhraseTypeId {
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a_hash_str_64(name))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for PhraseTypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "PhraseTypeId({:016x})", self.0)
    }
}
