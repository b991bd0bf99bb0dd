//! Turn rotation over the members currently allowed to play

use crate::error::{GameError, GameResult};
use crate::types::{ChannelSnapshot, EligibilityRule, Member, MemberId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Members of `channel` admitted by `rule`, deduplicated by id
///
/// Always derived from the snapshot handed in; never cached between turns.
pub fn compute_eligible(channel: &ChannelSnapshot, rule: EligibilityRule) -> Vec<Member> {
    let mut eligible: Vec<Member> = Vec::with_capacity(channel.members.len());
    for member in channel.members.iter().filter(|m| rule.admits(m)) {
        if !eligible.iter().any(|e| e.id == member.id) {
            eligible.push(member.clone());
        }
    }
    eligible
}

/// Shuffled turn order plus a cursor
///
/// The order was built from an earlier eligible set, so every pick is
/// re-checked against the set supplied with the call.
#[derive(Debug, Clone, Default)]
pub struct Rotation {
    order: Vec<MemberId>,
    cursor: Option<usize>,
    last: Option<MemberId>,
}

impl Rotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next turn-holder from `eligible`
    pub fn select<R: Rng + ?Sized>(
        &mut self,
        eligible: &[Member],
        rng: &mut R,
    ) -> GameResult<Member> {
        if eligible.is_empty() {
            return Err(GameError::NoEligibleMembers);
        }

        let mut cursor = self.cursor.map_or(0, |c| c + 1);
        let chosen = loop {
            let candidate = self
                .order
                .get(cursor)
                .and_then(|id| eligible.iter().find(|m| &m.id == id));

            match candidate {
                Some(member) => break member.clone(),
                None => {
                    self.rebuild(eligible, rng);
                    cursor = 0;
                }
            }
        };

        self.cursor = Some(cursor);
        self.last = Some(chosen.id.clone());
        Ok(chosen)
    }

    /// Forget the current order; the next `select` starts a fresh shuffle
    pub fn clear(&mut self) {
        self.order.clear();
        self.cursor = None;
        self.last = None;
    }

    fn rebuild<R: Rng + ?Sized>(&mut self, eligible: &[Member], rng: &mut R) {
        self.order.clear();
        for member in eligible {
            if !self.order.contains(&member.id) {
                self.order.push(member.id.clone());
            }
        }
        self.order.shuffle(rng);

        let len = self.order.len();
        if len > 1 && self.last.as_ref() == Some(&self.order[0]) {
            let swap_with = rng.random_range(1..len);
            self.order.swap(0, swap_with);
        }

        tracing::debug!("Rebuilt rotation with {} members", len);
    }
}
