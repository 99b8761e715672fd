//! The aim-training session state machine.
//!
//! One `Session` owns everything a single play-through needs to remember:
//! score, the countdown, whether we're playing, and the live target list
//! (length 0 or 1 in this version).
//!
//! Fields are private on purpose: every invariant the game relies on
//! ("score only goes up", "at most one target while playing", "time hits
//! exactly 0 at game end") is enforced by the methods below, and nothing
//! else is allowed to write.
//!
//! The session has no clock of its own. The GUI fires `tick()` once per
//! second while playing; the session just applies the decrement. That
//! keeps the countdown a plain read-modify-write on owned state instead
//! of a closure over a stale snapshot.

use rand::Rng;

use super::{GAME_SECONDS, Target};

/// Authoritative state for one play-through.
#[derive(Debug, Clone, Default)]
pub struct Session {
    score: u32,
    time_left: u32,
    is_playing: bool,
    targets: Vec<Target>,
}

impl Session {
    /// A fresh Idle session: nothing scored, nothing running.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Start (or restart) a game on a `width` × `height` surface.
    ///
    /// Full reset: score to 0, clock to 60, old targets dropped, one
    /// fresh target spawned. Callers must know the surface size before
    /// calling; the GUI gates its Start control on that.
    pub fn start(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.score = 0;
        self.time_left = GAME_SECONDS;
        self.targets.clear();
        self.is_playing = true;

        self.spawn_target(width, height, rng);
    }

    /// Stop the game. Idempotent: ending an Idle session changes nothing.
    ///
    /// Score and the last target survive, so the final state stays
    /// visible until the next start.
    pub fn end(&mut self) {
        self.is_playing = false;
    }

    /// One countdown step. No-op unless playing.
    ///
    /// Reaching zero ends the game automatically, with `time_left`
    /// clamped to exactly 0.
    pub fn tick(&mut self) {
        if !self.is_playing {
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.end();
        }
    }

    /// Handle a click at surface-local `(x, y)`.
    ///
    /// Ignored unless playing. A hit scores exactly one point and spawns
    /// exactly one replacement target; a miss changes nothing. Returns
    /// whether the click was a hit.
    pub fn register_click(&mut self, x: f32, y: f32, width: f32, height: f32, rng: &mut impl Rng) -> bool {
        if !self.is_playing {
            return false;
        }

        let hit = self.targets.iter().any(|t| t.contains(x, y));
        if hit {
            self.score += 1;
            self.spawn_target(width, height, rng);
        }

        hit
    }

    /// Replace the current target (if any) with a fresh spawn.
    fn spawn_target(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        let target = Target::spawn(width, height, rng);

        self.targets.clear();
        self.targets.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    fn started() -> (Session, ChaCha8Rng) {
        let mut rng = rng();
        let mut s = Session::new();
        s.start(W, H, &mut rng);
        (s, rng)
    }

    #[test]
    fn new_session_is_idle() {
        let s = Session::new();
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_left(), 0);
        assert!(!s.is_playing());
        assert!(s.targets().is_empty());
    }

    #[test]
    fn start_resets_and_spawns_one_target() {
        let (s, _) = started();
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_left(), 60);
        assert!(s.is_playing());
        assert_eq!(s.targets().len(), 1);
    }

    #[test]
    fn hit_at_target_center_scores_and_respawns() {
        let (mut s, mut rng) = started();
        let old = s.targets()[0];

        assert!(s.register_click(old.x, old.y, W, H, &mut rng));
        assert_eq!(s.score(), 1);
        assert_eq!(s.targets().len(), 1);
        assert_ne!(s.targets()[0], old, "old target must be replaced");
    }

    #[test]
    fn miss_changes_nothing() {
        let (mut s, mut rng) = started();
        let old = s.targets()[0];

        // Just outside the edge, along x.
        let miss_x = if old.x > W / 2.0 { old.x - old.radius - 1.0 } else { old.x + old.radius + 1.0 };
        assert!(!s.register_click(miss_x, old.y, W, H, &mut rng));
        assert_eq!(s.score(), 0);
        assert_eq!(s.targets()[0], old);
    }

    #[test]
    fn clicks_while_idle_are_ignored() {
        let (mut s, mut rng) = started();
        let target = s.targets()[0];
        s.end();

        assert!(!s.register_click(target.x, target.y, W, H, &mut rng));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn tick_counts_down_and_auto_ends_at_zero() {
        let (mut s, _) = started();

        s.tick();
        assert_eq!(s.time_left(), 59);
        assert!(s.is_playing());

        // Run the clock to 1, then the final tick ends the game.
        while s.time_left() > 1 {
            s.tick();
        }
        s.tick();
        assert_eq!(s.time_left(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn full_game_with_no_clicks_ends_scoreless() {
        let (mut s, _) = started();
        for _ in 0..60 {
            s.tick();
        }
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_left(), 0);
        assert!(!s.is_playing());
        assert_eq!(s.targets().len(), 1, "last target stays visible");
    }

    #[test]
    fn ticks_while_idle_are_ignored() {
        let mut s = Session::new();
        s.tick();
        assert_eq!(s.time_left(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn end_is_idempotent_and_keeps_score() {
        let (mut s, mut rng) = started();
        let t = s.targets()[0];
        s.register_click(t.x, t.y, W, H, &mut rng);

        s.end();
        let after_first = s.clone();
        s.end();

        assert_eq!(s.score(), after_first.score());
        assert_eq!(s.time_left(), after_first.time_left());
        assert_eq!(s.targets(), after_first.targets());
        assert!(!s.is_playing());
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn restart_after_a_finished_game_fully_resets() {
        let (mut s, mut rng) = started();
        let t = s.targets()[0];
        s.register_click(t.x, t.y, W, H, &mut rng);
        for _ in 0..60 {
            s.tick();
        }

        s.start(W, H, &mut rng);
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_left(), 60);
        assert!(s.is_playing());
        assert_eq!(s.targets().len(), 1);
    }
}
