// Complete Generic Single-Slot Container
// One value, one type parameter, compile-time homogeneity

use colored::Colorize;
use std::fmt;

// =============================================================================
// Milestone 1: Basic generic structure and accessors
// =============================================================================

/// A container holding exactly one value of type `T`. The element type is
/// fixed when the slot is created; storing a value of a different type is a
/// compile error, not a runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    item: T,
}

impl<T> Slot<T> {
    pub fn new(item: T) -> Self {
        Slot { item }
    }

    pub fn get(&self) -> &T {
        &self.item
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.item
    }

    /// Unconditional replacement. The previous value is dropped.
    pub fn set(&mut self, item: T) {
        self.item = item;
    }
}

// =============================================================================
// Milestone 2: Ownership-aware surface
// =============================================================================

impl<T> Slot<T> {
    /// Replaces the stored value and hands back the one it displaces.
    pub fn replace(&mut self, item: T) -> T {
        std::mem::replace(&mut self.item, item)
    }

    pub fn into_inner(self) -> T {
        self.item
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Slot<U> {
        Slot::new(f(self.item))
    }
}

impl<T> From<T> for Slot<T> {
    fn from(item: T) -> Self {
        Slot::new(item)
    }
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Slot::new(T::default())
    }
}

impl<T: fmt::Display> fmt::Display for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.item)
    }
}

// =============================================================================
// Main Function - Demonstrates the container
// =============================================================================

fn main() {
    println!("{}", "=== Generic Single-Slot Container ===".bold());

    println!("\n--- Milestone 1: Construction and accessors ---");
    let mut int_slot = Slot::new(10);
    int_slot.set(20);
    println!("Integer slot value: {}", int_slot.get());

    let string_slot = Slot::new("Generics".to_string());
    println!("String slot value: {}", string_slot.get());

    // A type mismatch is rejected at compile time:
    // let invalid: Slot<i32> = Slot::new("This won't work");

    println!("\n--- Milestone 2: Ownership-aware surface ---");
    let mut slot = Slot::new("first".to_string());
    let displaced = slot.replace("second".to_string());
    println!("Displaced: {}, now holding: {}", displaced, slot.get());
    let doubled = Slot::new(21).map(|n| n * 2);
    println!("Mapped slot: {}", doubled);
    println!("Into inner: {}", doubled.into_inner());

    println!("\n{}", "=== Done ===".green());
}

// =============================================================================
// Tests
// =============================================================================
