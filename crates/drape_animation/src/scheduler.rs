//! Animation scheduler
//!
//! Runs frame animations for hosts without a native animation layer.
//! Each animation targets a channel (one animated property, e.g. the sheet
//! container frame); starting a new animation on a busy channel interrupts
//! the running one, which then completes with `finished == false`.

use drape_core::Rect;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::frame::FrameAnimation;

new_key_type! {
    pub struct FrameAnimationId;
}

/// Animated property identifier
pub type Channel = u32;

struct Running<T> {
    channel: Channel,
    animation: FrameAnimation,
    elapsed: f64,
    tag: T,
}

/// A frame produced by one tick
#[derive(Clone, Debug, PartialEq)]
pub struct FrameUpdate<T> {
    pub channel: Channel,
    pub tag: T,
    pub frame: Rect,
}

/// An animation that stopped running
#[derive(Clone, Debug, PartialEq)]
pub struct Completion<T> {
    pub channel: Channel,
    pub tag: T,
    /// False when interrupted or cancelled before reaching its target
    pub finished: bool,
    /// Last frame the animation produced
    pub frame: Rect,
}

/// Result of advancing all animations
#[derive(Clone, Debug)]
pub struct TickOutput<T> {
    pub frames: Vec<FrameUpdate<T>>,
    pub completed: Vec<Completion<T>>,
}

impl<T> Default for TickOutput<T> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            completed: Vec::new(),
        }
    }
}

/// The animation scheduler that ticks all active frame animations
pub struct AnimationScheduler<T> {
    animations: SlotMap<FrameAnimationId, Running<T>>,
    channels: FxHashMap<Channel, FrameAnimationId>,
}

impl<T: Clone> AnimationScheduler<T> {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            channels: FxHashMap::default(),
        }
    }

    /// Start an animation on `channel`
    ///
    /// Returns the new id and, if the channel was busy, the completion of
    /// the animation it replaced.
    pub fn start(
        &mut self,
        channel: Channel,
        animation: FrameAnimation,
        tag: T,
    ) -> (FrameAnimationId, Option<Completion<T>>) {
        let interrupted = self.cancel(channel);
        let id = self.animations.insert(Running {
            channel,
            animation,
            elapsed: 0.0,
            tag,
        });
        self.channels.insert(channel, id);
        tracing::trace!(
            "animation started on channel {} ({:.3}s)",
            channel,
            animation.duration
        );
        (id, interrupted)
    }

    /// Stop whatever runs on `channel`, leaving the property at its current frame
    pub fn cancel(&mut self, channel: Channel) -> Option<Completion<T>> {
        let id = self.channels.remove(&channel)?;
        let running = self.animations.remove(id)?;
        Some(Completion {
            channel,
            frame: running.animation.sample(running.elapsed),
            tag: running.tag,
            finished: false,
        })
    }

    /// Advance every animation by `dt` seconds
    pub fn tick(&mut self, dt: f64) -> TickOutput<T> {
        let mut output = TickOutput::default();
        let mut done = Vec::new();

        for (id, running) in self.animations.iter_mut() {
            running.elapsed += dt.max(0.0);
            let frame = running.animation.sample(running.elapsed);
            output.frames.push(FrameUpdate {
                channel: running.channel,
                tag: running.tag.clone(),
                frame,
            });
            if running.animation.is_complete(running.elapsed) {
                done.push(id);
            }
        }

        for id in done {
            if let Some(running) = self.animations.remove(id) {
                self.channels.remove(&running.channel);
                output.completed.push(Completion {
                    channel: running.channel,
                    frame: running.animation.to,
                    tag: running.tag,
                    finished: true,
                });
            }
        }

        output
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn is_running(&self, channel: Channel) -> bool {
        self.channels.contains_key(&channel)
    }

    /// Get the number of running animations
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }
}

impl<T: Clone> Default for AnimationScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    const FRAME: Channel = 0;

    fn slide(from_y: f32, to_y: f32, duration: f64) -> FrameAnimation {
        FrameAnimation::eased(
            Rect::new(0.0, from_y, 400.0, 300.0),
            Rect::new(0.0, to_y, 400.0, 300.0),
            duration,
            Easing::Linear,
        )
    }

    #[test]
    fn test_runs_to_completion() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(FRAME, slide(800.0, 500.0, 0.1), "present");

        let out = scheduler.tick(0.05);
        assert_eq!(out.frames.len(), 1);
        assert!(out.completed.is_empty());
        assert!((out.frames[0].frame.y() - 650.0).abs() < 1e-3);

        let out = scheduler.tick(0.05);
        assert_eq!(out.completed.len(), 1);
        assert!(out.completed[0].finished);
        assert_eq!(out.completed[0].tag, "present");
        assert_eq!(out.completed[0].frame.y(), 500.0);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_same_channel_interrupts() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(FRAME, slide(800.0, 500.0, 1.0), 1);
        scheduler.tick(0.5);

        let (_, interrupted) = scheduler.start(FRAME, slide(650.0, 200.0, 0.2), 2);
        let interrupted = interrupted.expect("first animation should be interrupted");
        assert_eq!(interrupted.tag, 1);
        assert!(!interrupted.finished);
        assert!((interrupted.frame.y() - 650.0).abs() < 1e-3);
        assert_eq!(scheduler.animation_count(), 1);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut scheduler = AnimationScheduler::new();
        let (_, a) = scheduler.start(0, slide(0.0, 10.0, 0.1), 'a');
        let (_, b) = scheduler.start(1, slide(0.0, 10.0, 0.2), 'b');
        assert!(a.is_none() && b.is_none());

        let out = scheduler.tick(0.1);
        assert_eq!(out.completed.len(), 1);
        assert!(scheduler.is_running(1));
        assert!(!scheduler.is_running(0));
    }
}
