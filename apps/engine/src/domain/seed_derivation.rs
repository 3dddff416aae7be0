//! RNG seed derivation for deterministic game behavior.
//!
//! All per-round randomness flows from one 32-byte game seed through keyed
//! hashing, so distinct contexts (dealing, AI tie-breaking) never collide
//! and every round is reproducible from the game seed alone.

/// Derive the shuffle seed for a round.
pub fn derive_dealing_seed(game_seed: &[u8; 32], round_number: u32) -> u64 {
    derive(game_seed, b"dealing", round_number, 0)
}

/// Derive a seed for one seat's AI randomness in a round.
pub fn derive_ai_seed(game_seed: &[u8; 32], round_number: u32, seat: u8) -> u64 {
    derive(game_seed, b"ai", round_number, u64::from(seat) + 1)
}

fn derive(game_seed: &[u8; 32], context: &[u8], round_number: u32, extra: u64) -> u64 {
    let mut hasher = blake3::Hasher::new_keyed(game_seed);
    hasher.update(context);
    hasher.update(&round_number.to_le_bytes());
    hasher.update(&extra.to_le_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
