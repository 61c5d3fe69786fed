use sha2::{Digest, Sha256};

/// Digest of the Proof-of-Work puzzle for a `(proof, previous_proof)` pair.
///
/// The puzzle text is the decimal form of `proof^2 - previous_proof^2`,
/// computed signed: trial proofs below the previous proof hash a negative
/// number, minus sign included. Peer validation depends on this exact
/// encoding.
pub fn pow_hash(proof: u64, previous_proof: u64) -> String {
    let gap =
        (proof as i128) * (proof as i128) - (previous_proof as i128) * (previous_proof as i128);
    let mut hasher = Sha256::new();
    hasher.update(gap.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether a digest begins with `difficulty` leading zero hex digits.
pub fn meets_difficulty(digest: &str, difficulty: u32) -> bool {
    digest
        .chars()
        .take(difficulty as usize)
        .all(|c| c == '0')
}

/// Brute-force the smallest proof satisfying the difficulty predicate
/// relative to `previous_proof`.
///
/// Deterministic for a given input. The search is unbounded: it runs until
/// a proof is found, however long that takes.
pub fn find_proof(previous_proof: u64, difficulty: u32) -> u64 {
    let mut proof: u64 = 1;
    loop {
        if meets_difficulty(&pow_hash(proof, previous_proof), difficulty) {
            return proof;
        }
        proof += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{find_proof, meets_difficulty, pow_hash};
    use sha2::{Digest, Sha256};

    fn sha256_hex(text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        hex::encode(hasher.finalize())
    }

    #[test]
    fn puzzle_hashes_the_signed_decimal_gap() {
        assert_eq!(pow_hash(5, 1), sha256_hex("24"));
        assert_eq!(pow_hash(1, 5), sha256_hex("-24"));
        assert_eq!(pow_hash(7, 7), sha256_hex("0"));
    }

    #[test]
    fn meets_difficulty_checks_the_leading_zero_run() {
        assert!(meets_difficulty("000abc", 3));
        assert!(!meets_difficulty("00a000", 3));
        assert!(meets_difficulty("anything", 0));
    }

    #[test]
    fn find_proof_returns_the_smallest_satisfying_value() {
        let proof = find_proof(1, 2);
        assert!(meets_difficulty(&pow_hash(proof, 1), 2));
        for candidate in 1..proof {
            assert!(!meets_difficulty(&pow_hash(candidate, 1), 2));
        }
    }

    #[test]
    fn find_proof_is_deterministic() {
        assert_eq!(find_proof(42, 2), find_proof(42, 2));
    }
}
