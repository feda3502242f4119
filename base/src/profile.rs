use std::time::Duration;

/// Additive weights for the heuristic scorer (C3). Lower total score is
/// better. The "aggressive" profile matches the documented default
/// weights; the "simple" profile is the alternate tuning variant that
/// drops the short-title bonus and uses softer word weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights {
    pub base: i32,
    pub lang_match: i32,
    pub exact_word: i32,
    pub substring_word: i32,
    pub hub_lang: i32,
    pub short_title_bonus: i32,
    pub long_title_penalty: i32,
    pub short_title_len: usize,
    pub long_title_len: usize,
}

impl HeuristicWeights {
    pub const fn aggressive() -> Self {
        HeuristicWeights {
            base: 100,
            lang_match: -25,
            exact_word: -40,
            substring_word: -20,
            hub_lang: -10,
            short_title_bonus: -5,
            long_title_penalty: 15,
            short_title_len: 20,
            long_title_len: 60,
        }
    }

    pub const fn simple() -> Self {
        HeuristicWeights {
            base: 100,
            lang_match: -20,
            exact_word: -30,
            substring_word: -15,
            hub_lang: -10,
            short_title_bonus: 0,
            long_title_penalty: 15,
            short_title_len: 20,
            long_title_len: 60,
        }
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self::aggressive()
    }
}

/// Tuning knobs for the round scheduler (C5), deadlines, and the
/// language prober (C2). Not core logic -- configuration, loaded once at
/// startup (see `wikipath::config`).
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub max_per_round: usize,
    pub batch_size: usize,
    pub per_request_timeout: Duration,
    pub global_deadline: Duration,
    pub probe_deadline: Duration,
    pub weights: HeuristicWeights,
}

impl Profile {
    pub fn aggressive() -> Self {
        Profile {
            max_per_round: 250,
            batch_size: 50,
            per_request_timeout: Duration::from_millis(800),
            global_deadline: Duration::from_secs(5),
            probe_deadline: Duration::from_millis(500),
            weights: HeuristicWeights::aggressive(),
        }
    }

    pub fn conservative() -> Self {
        Profile {
            max_per_round: 100,
            batch_size: 50,
            per_request_timeout: Duration::from_millis(1500),
            global_deadline: Duration::from_secs(10),
            probe_deadline: Duration::from_millis(500),
            weights: HeuristicWeights::simple(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::aggressive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_size_never_exceeds_wire_cap() {
        assert!(Profile::aggressive().batch_size <= 50);
        assert!(Profile::conservative().batch_size <= 50);
    }
}
