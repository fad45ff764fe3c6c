//! Declarative motion for the widget. Nothing in here changes logical
//! state; the host ticks it and draws whatever pose it reports.

use crate::geometry::Point;
use std::time::Duration;

pub const STAGGER: Duration = Duration::from_millis(50);
pub const CARD_STAGGER: Duration = Duration::from_millis(100);
pub const PULSE_PERIOD: Duration = Duration::from_secs(2);

const MAX_STEP: f64 = 0.004;
const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.01;

pub fn stagger_delay(index: usize) -> Duration {
    STAGGER * index as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const RING: Spring = Spring::new(300.0, 25.0);
    pub const ITEM: Spring = Spring::new(400.0, 25.0);
    pub const CONTAINER: Spring = Spring::new(300.0, 30.0);
    pub const GLOW: Spring = Spring::new(200.0, 30.0);

    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Semi-implicit Euler, split into small sub-steps so long frames stay
    /// stable.
    pub fn step(&self, value: &mut SpringValue, target: f64, dt: f64) {
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -self.stiffness * (value.value - target) - self.damping * value.velocity;
            value.velocity += force / self.mass * h;
            value.value += value.velocity * h;
            remaining -= h;
        }
        if value.is_settled(target) {
            *value = SpringValue::at(target);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringValue {
    pub value: f64,
    pub velocity: f64,
}

impl SpringValue {
    pub fn at(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (self.value - target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

#[derive(Debug, Clone)]
struct ItemTrack {
    progress: SpringValue,
    delay: Duration,
    waited: Duration,
}

#[derive(Debug, Clone)]
pub struct RingAnimation {
    ring: SpringValue,
    container: SpringValue,
    glow: SpringValue,
    items: Vec<ItemTrack>,
    open: bool,
    elapsed: Duration,
}

impl RingAnimation {
    pub fn new(count: usize) -> Self {
        Self {
            ring: SpringValue::default(),
            container: SpringValue::default(),
            glow: SpringValue::default(),
            items: (0..count)
                .map(|i| ItemTrack {
                    progress: SpringValue::default(),
                    delay: stagger_delay(i),
                    waited: Duration::ZERO,
                })
                .collect(),
            open: false,
            elapsed: Duration::ZERO,
        }
    }

    pub fn resize(&mut self, count: usize) {
        let (open, elapsed) = (self.open, self.elapsed);
        *self = Self::new(count);
        self.open = open;
        self.elapsed = elapsed;
    }

    /// Every change of direction restarts the per-item delays, so items
    /// leave in the same order they arrived.
    pub fn set_open(&mut self, open: bool) {
        if open != self.open {
            for track in &mut self.items {
                track.waited = Duration::ZERO;
            }
        }
        self.open = open;
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        let target = if self.open { 1.0 } else { 0.0 };
        let secs = dt.as_secs_f64();
        self.elapsed += dt;

        Spring::RING.step(&mut self.ring, target, secs);
        Spring::CONTAINER.step(&mut self.container, target, secs);
        Spring::GLOW.step(&mut self.glow, target, secs);
        let mut moving = [self.ring, self.container, self.glow]
            .iter()
            .any(|v| !v.is_settled(target));

        for track in &mut self.items {
            let mut budget = secs;
            if track.waited < track.delay {
                let wait = (track.delay - track.waited).min(dt);
                track.waited += wait;
                budget -= wait.as_secs_f64();
                moving = true;
            }
            if budget > 0.0 {
                Spring::ITEM.step(&mut track.progress, target, budget);
            }
            moving |= !track.progress.is_settled(target);
        }
        moving
    }

    pub fn ring_progress(&self) -> f64 {
        self.ring.value
    }

    pub fn container_progress(&self) -> f64 {
        self.container.value
    }

    pub fn glow_progress(&self) -> f64 {
        self.glow.value
    }

    pub fn item_progress(&self, index: usize) -> f64 {
        self.items
            .get(index)
            .map(|t| t.progress.value)
            .unwrap_or(0.0)
    }

    pub fn pulse(&self) -> Pulse {
        Pulse::at(self.elapsed)
    }

    pub fn is_visible(&self) -> bool {
        self.open
            || self.ring.value.abs() > REST_DELTA
            || self.items.iter().any(|t| t.progress.value.abs() > REST_DELTA)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPose {
    pub offset: Point,
    pub scale: f64,
    pub opacity: f64,
}

impl ItemPose {
    pub fn at(progress: f64, target: Point) -> Self {
        Self {
            offset: Point::new(target.x * progress, target.y * progress),
            scale: progress.max(0.0),
            opacity: progress.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub opacity: f64,
    pub scale: f64,
}

impl Pulse {
    pub fn at(elapsed: Duration) -> Self {
        let period = PULSE_PERIOD.as_secs_f64();
        let t = (elapsed.as_secs_f64() % period) / period;
        // ease-out
        let eased = 1.0 - (1.0 - t).powi(2);
        Self {
            opacity: 0.6 * (1.0 - eased),
            scale: 1.0 + 0.5 * eased,
        }
    }
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_by_index() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(1), Duration::from_millis(50));
        assert_eq!(stagger_delay(2), Duration::from_millis(100));
    }

    #[test]
    fn test_springs_settle_on_target() {
        for spring in [
            Spring::RING,
            Spring::ITEM,
            Spring::CONTAINER,
            Spring::GLOW,
        ] {
            let mut value = SpringValue::default();
            for _ in 0..180 {
                spring.step(&mut value, 1.0, 1.0 / 60.0);
            }
            assert_eq!(value, SpringValue::at(1.0), "{spring:?} did not settle");
        }
    }

    #[test]
    fn test_entrance_is_staggered() {
        let mut anim = RingAnimation::new(3);
        anim.set_open(true);
        assert!(anim.tick(Duration::from_millis(60)));

        assert!(anim.item_progress(0) > 0.0);
        assert!(anim.item_progress(1) > 0.0);
        assert_eq!(anim.item_progress(2), 0.0);
        assert!(anim.item_progress(0) > anim.item_progress(1));
    }

    #[test]
    fn test_open_then_close_settles() {
        let mut anim = RingAnimation::new(3);
        anim.set_open(true);
        for _ in 0..180 {
            anim.tick(Duration::from_millis(16));
        }
        assert_eq!(anim.item_progress(2), 1.0);
        assert!(!anim.tick(Duration::from_millis(16)));

        anim.set_open(false);
        assert!(anim.is_visible());
        for _ in 0..180 {
            anim.tick(Duration::from_millis(16));
        }
        assert!(!anim.is_visible());
        assert_eq!(anim.ring_progress(), 0.0);
        assert_eq!(anim.container_progress(), 0.0);
        assert_eq!(anim.glow_progress(), 0.0);
    }

    #[test]
    fn test_exit_is_staggered() {
        let mut anim = RingAnimation::new(3);
        anim.set_open(true);
        for _ in 0..180 {
            anim.tick(Duration::from_millis(16));
        }

        anim.set_open(false);
        anim.tick(Duration::from_millis(60));

        assert!(anim.item_progress(0) < 1.0);
        assert!(anim.item_progress(0) < anim.item_progress(1));
        assert_eq!(anim.item_progress(2), 1.0);
    }

    #[test]
    fn test_item_pose() {
        let pose = ItemPose::at(0.5, Point::new(-90.0, 0.0));
        assert_eq!(pose.offset, Point::new(-45.0, 0.0));
        assert_eq!(pose.scale, 0.5);
        assert_eq!(pose.opacity, 0.5);

        // spring overshoot keeps scale but caps opacity
        let overshoot = ItemPose::at(1.1, Point::new(10.0, 0.0));
        assert_eq!(overshoot.opacity, 1.0);
        assert!(overshoot.scale > 1.0);
    }

    #[test]
    fn test_pulse_cycle() {
        let start = Pulse::at(Duration::ZERO);
        assert_eq!(start, Pulse { opacity: 0.6, scale: 1.0 });

        let wrapped = Pulse::at(PULSE_PERIOD);
        assert_eq!(wrapped, start);

        let mid = Pulse::at(Duration::from_secs(1));
        assert!(mid.opacity < 0.6 && mid.scale > 1.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(64.0, 220.0, 0.0), 64.0);
        assert_eq!(lerp(64.0, 220.0, 1.0), 220.0);
    }
}
