//! Offline oracle with canned courtroom rhetoric.
//!
//! Cycles through a fixed set of prosecutorial lines, so the
//! simulation stays playable without any backend. Analysis and insight
//! prompts get the same prose, which the parsers reject; the engine
//! treats that as a degraded-but-working oracle, exactly as intended.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use gavel_application::{Oracle, OracleError};

const CANNED_REPLIES: [&str; 5] = [
    "Your Honor, I must strongly object to the defense's characterization. The evidence clearly demonstrates that the defendant's actions violated established legal principles. The precedent set in Miranda v. Arizona compels us to examine the voluntariness of the statement.",
    "Counsel, the facts speak for themselves. The witness testimony corroborates the physical evidence. Under the standard established in Daubert v. Merrell Dow Pharmaceuticals, this evidence is both relevant and reliable.",
    "The defense fails to acknowledge the controlling authority here. As the Supreme Court held in Terry v. Ohio, reasonable suspicion is sufficient for a stop and frisk. The officer's actions were well within constitutional bounds.",
    "I appreciate my colleague's argument, but it overlooks critical case law. The Fourth Amendment protections, as interpreted in Katz v. United States, extend to situations where there is a reasonable expectation of privacy.",
    "Your Honor, the prosecution's theory of the case is fundamentally flawed. The burden of proof has not been met. As we know from Coffin v. United States, the presumption of innocence requires proof beyond a reasonable doubt.",
];

/// Oracle that answers every prompt with the next canned line.
#[derive(Default)]
pub struct CannedOracle {
    cursor: AtomicUsize,
}

impl CannedOracle {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Oracle for CannedOracle {
    async fn generate(&self, _prompt: &str) -> Result<String, OracleError> {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        Ok(CANNED_REPLIES[i % CANNED_REPLIES.len()].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_cycle_deterministically() {
        let oracle = CannedOracle::new();
        let first = oracle.generate("a").await.unwrap();
        assert_eq!(first, CANNED_REPLIES[0]);
        for _ in 0..4 {
            oracle.generate("b").await.unwrap();
        }
        let wrapped = oracle.generate("c").await.unwrap();
        assert_eq!(wrapped, CANNED_REPLIES[0]);
    }

    #[test]
    fn test_always_available() {
        assert!(CannedOracle::new().is_available());
    }
}
