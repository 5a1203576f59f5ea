// Player health and the "changed" notification
//
// Observers are plain registered closures invoked synchronously on the
// same thread whenever the value actually changes. The notification
// carries no payload; reactions that need the amount read it back from
// `current()`.

use log::debug;

/// Health value with change observers
pub struct Health {
    current: i32,
    max: i32,
    observers: Vec<Box<dyn FnMut()>>,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Register a listener invoked on every actual change
    pub fn on_changed(&mut self, listener: impl FnMut() + 'static) {
        self.observers.push(Box::new(listener));
    }

    /// Reduce health, clamped at zero. Notifies observers only if the
    /// value changed.
    pub fn damage(&mut self, amount: i32) {
        self.set(self.current - amount);
    }

    /// Restore health, clamped at max. Notifies observers only if the
    /// value changed.
    pub fn heal(&mut self, amount: i32) {
        self.set(self.current + amount);
    }

    fn set(&mut self, value: i32) {
        let clamped = value.clamp(0, self.max);
        if clamped == self.current {
            return;
        }
        debug!("health: {} -> {}", self.current, clamped);
        self.current = clamped;
        for observer in &mut self.observers {
            observer();
        }
    }
}

impl std::fmt::Debug for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Health")
            .field("current", &self.current)
            .field("max", &self.max)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_damage_and_heal_clamp() {
        let mut health = Health::new(100);
        health.damage(150);
        assert_eq!(health.current(), 0);
        assert!(health.is_dead());

        health.heal(999);
        assert_eq!(health.current(), 100);
    }

    #[test]
    fn test_observer_fires_on_change() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);

        let mut health = Health::new(100);
        health.on_changed(move || counter.set(counter.get() + 1));

        health.damage(10);
        health.damage(10);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_observer_silent_when_unchanged() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);

        let mut health = Health::new(100);
        health.on_changed(move || counter.set(counter.get() + 1));

        health.damage(0); // no change
        health.heal(50); // already at max
        assert_eq!(fired.get(), 0);

        health.damage(100);
        health.damage(10); // already at zero
        assert_eq!(fired.get(), 1);
    }
}
