//! Bounded object pool for display-bound particles.
//!
//! Active ordered list plus a free stack; together they partition every
//! particle ever allocated. Acquire pops the free stack before creating new
//! display handles, release detaches the visuals but keeps the handles.

use crate::particle::Particle;
use crate::stage::{Drawable, LineDrawable, Stage};

pub struct ParticlePool<S, L> {
    active: Vec<Particle<S, L>>,
    free: Vec<Particle<S, L>>,
    allocated: usize,
}

impl<S: Drawable, L: LineDrawable> ParticlePool<S, L> {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            free: Vec::new(),
            allocated: 0,
        }
    }

    /// Take a particle from the free stack, or create one with fresh display
    /// handles when the stack is empty. The caller configures it and hands
    /// it back via [`commit`](Self::commit).
    pub fn acquire<St>(&mut self, stage: &mut St) -> Particle<S, L>
    where
        St: Stage<Sprite = S, Line = L>,
    {
        match self.free.pop() {
            Some(p) => p,
            None => {
                self.allocated += 1;
                Particle::new(stage.create_sprite(), stage.create_line())
            }
        }
    }

    /// Add a configured particle to the active list.
    pub fn commit(&mut self, particle: Particle<S, L>) {
        self.active.push(particle);
    }

    /// Age every active particle by `dt`.
    ///
    /// Expired particles are detached from display and moved to the free
    /// stack; survivors get the linear fade applied to sprite and line
    /// alpha. The active list is compacted in place, survivors keeping
    /// their relative order, with no per-frame reallocation.
    pub fn update(&mut self, dt: f32) {
        let mut alive = 0;
        for i in 0..self.active.len() {
            let p = &mut self.active[i];
            if p.tick(dt) {
                let fade = p.fade();
                p.sprite.set_alpha(fade);
                p.line.set_alpha(fade);
                self.active.swap(alive, i);
                alive += 1;
            }
        }
        for mut p in self.active.drain(alive..) {
            p.sprite.detach();
            p.line.detach();
            self.free.push(p);
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle<S, L>> {
        self.active.iter()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Total particles ever created, including any currently held by a
    /// caller between acquire and commit.
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}

impl<S: Drawable, L: LineDrawable> Default for ParticlePool<S, L> {
    fn default() -> Self {
        Self::new()
    }
}
