// Generation Configuration
// Tunables for prime search and key generation

/// Miller-Rabin rounds; a composite survives with probability at most 4^-rounds
pub const DEFAULT_MILLER_RABIN_ROUNDS: u32 = 16;

/// Conventional public exponent (F4)
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Candidate cap per prime search, far above what prime density requires
pub const DEFAULT_MAX_PRIME_ATTEMPTS: u64 = 100_000;

/// Configuration for prime and keypair generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    pub miller_rabin_rounds: u32,
    pub public_exponent: u64,
    /// `None` searches forever
    pub max_prime_attempts: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            miller_rabin_rounds: DEFAULT_MILLER_RABIN_ROUNDS,
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            max_prime_attempts: Some(DEFAULT_MAX_PRIME_ATTEMPTS),
        }
    }
}

impl GenerationConfig {
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.miller_rabin_rounds = rounds;
        self
    }

    pub fn with_public_exponent(mut self, e: u64) -> Self {
        self.public_exponent = e;
        self
    }

    pub fn with_max_prime_attempts(mut self, attempts: Option<u64>) -> Self {
        self.max_prime_attempts = attempts;
        self
    }
}
